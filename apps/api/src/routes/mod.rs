pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assignment::handlers as assignment;
use crate::letter::handlers as letter;
use crate::lookup::handlers as lookup;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Booking API
        .route("/api/v1/slots", get(assignment::handle_list_slots))
        .route("/api/v1/assign", post(assignment::handle_assign))
        .route("/api/v1/admin/stats", get(assignment::handle_stats))
        .route("/api/v1/admin/reset", post(assignment::handle_reset))
        // Letters
        .route("/api/v1/letter", post(letter::handle_letter))
        // Identity lookup page
        .route(
            "/lookup",
            get(lookup::handle_lookup_get).post(lookup::handle_lookup_post),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::letter::template::tests::{docx_with_body, read_part};

    const ROSTER: &str = "id,phone,name,course\n\
T100,0551234567.0,Sara,Networks\n\
T200,055-999-1111,Noor,Networks\n\
T300,0500000000,Huda,Accounting\n";

    fn app(slots_json: &str) -> (TempDir, Router) {
        let dir = tempfile::tempdir().unwrap();
        let d = dir.path();
        std::fs::write(d.join("roster.csv"), ROSTER).unwrap();
        std::fs::write(d.join("slots.json"), slots_json).unwrap();
        std::fs::write(
            d.join("letter.docx"),
            docx_with_body("<w:t>{{trainee_name}} ({{trainee_id}})</w:t>"),
        )
        .unwrap();

        let vars = [
            ("ROSTER_PATH", d.join("roster.csv")),
            ("TEMPLATE_PATH", d.join("letter.docx")),
            ("SLOTS_PATH", d.join("slots.json")),
            ("ASSIGNMENTS_PATH", d.join("assignments.json")),
        ];
        let mut config = Config::from_lookup(|key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.display().to_string())
        })
        .unwrap();
        config.columns.trainee_id = "id".into();
        config.columns.phone = "phone".into();
        config.columns.name = "name".into();
        config.columns.course = "course".into();
        config.slot_seed_column = "course".into();

        (dir, build_router(AppState::new(config)))
    }

    async fn send(app: &Router, req: Request<Body>) -> Response {
        app.clone().oneshot(req).await.unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    fn assign(trainee_id: &str, slot_id: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/assign")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({"trainee_id": trainee_id, "slot_id": slot_id}).to_string(),
            ))
            .unwrap()
    }

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (_dir, app) = app("[]");
        let response = send(&app, get("/health")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_slots_returns_file_contents() {
        let (_dir, app) = app(r#"[{"id": "s1", "remaining": 2, "program": "IT"}]"#);
        let response = send(&app, get("/api/v1/slots")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!([{"id": "s1", "remaining": 2, "program": "IT"}])
        );
    }

    #[tokio::test]
    async fn test_assign_flow_statuses() {
        let (_dir, app) = app(r#"[{"id": "s1", "remaining": 1}]"#);

        let response = send(&app, assign("T100", "s1")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"ok": true, "remaining": 0}));

        let response = send(&app, assign("T100", "s1")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["ok"], false);
        assert_eq!(body["code"], "ALREADY_ASSIGNED");

        let response = send(&app, assign("T200", "s1")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "CAPACITY_EXHAUSTED");

        let response = send(&app, assign("T300", "nope")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["ok"], false);
    }

    #[tokio::test]
    async fn test_assign_malformed_body_is_invalid_input() {
        let (_dir, app) = app("[]");
        let req = Request::builder()
            .method("POST")
            .uri("/api/v1/assign")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = send(&app, req).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_letter_attachment() {
        let (_dir, app) = app("[]");
        let response = send(
            &app,
            form_post("/api/v1/letter", "trainee_id=T100&phone_last4=4567"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"letter_T100.docx\""
        );
        let bytes = body_bytes(response).await;
        assert_eq!(
            read_part(&bytes, "word/document.xml"),
            "<w:t>Sara (T100)</w:t>"
        );
    }

    #[tokio::test]
    async fn test_letter_errors_are_plain_text() {
        let (_dir, app) = app("[]");

        let response = send(
            &app,
            form_post("/api/v1/letter", "trainee_id=T100&phone_last4=0000"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        let text = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(text.contains("does not match"));

        let response = send(
            &app,
            form_post("/api/v1/letter", "trainee_id=T999&phone_last4=4567"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(&app, form_post("/api/v1/letter", "trainee_id=T100")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_form_posts_without_content_type_are_bad_requests() {
        let (_dir, app) = app("[]");
        let untyped = |uri: &str| {
            Request::builder()
                .method("POST")
                .uri(uri)
                .body(Body::from("trainee_id=T100&phone_last4=4567"))
                .unwrap()
        };

        let response = send(&app, untyped("/api/v1/letter")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));

        let response = send(&app, untyped("/lookup")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(html.contains("class=\"err\""));
    }

    #[tokio::test]
    async fn test_lookup_get_and_post() {
        let (_dir, app) = app("[]");

        let response = send(&app, get("/lookup")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(&app, get("/lookup?trainee_id=T200&last4=11-11")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(html.contains("Noor"));

        let response = send(&app, form_post("/lookup", "trainee_id=T200&last4=2222")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(!html.contains("Noor"));
    }

    #[tokio::test]
    async fn test_reset_reseeds_from_roster() {
        let (_dir, app) = app(r#"[{"id": "old", "remaining": 1}]"#);
        send(&app, assign("T100", "old")).await;

        let response = send(
            &app,
            Request::builder()
                .method("POST")
                .uri("/api/v1/admin/reset")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"ok": true, "slots": 2}));

        let stats = body_json(send(&app, get("/api/v1/admin/stats")).await).await;
        assert_eq!(
            stats,
            json!([
                {"id": "Accounting", "remaining": 1, "assigned": 0},
                {"id": "Networks", "remaining": 2, "assigned": 0}
            ])
        );

        let response = send(&app, assign("T100", "Networks")).await;
        assert_eq!(body_json(response).await["remaining"], 1);
    }
}
