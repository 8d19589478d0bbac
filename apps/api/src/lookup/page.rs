use quick_xml::escape::escape;

use crate::models::trainee::TraineeRecord;

const STYLE: &str = "body{font-family:Arial,sans-serif;background:#f7f7f7;margin:0}\
.wrap{max-width:760px;margin:40px auto;background:#fff;padding:24px;border-radius:12px}\
input,button{width:100%;padding:12px;margin:10px 0;border-radius:10px;border:1px solid #ddd}\
.err{background:#fee2e2;color:#991b1b;padding:10px;border-radius:10px}\
.info{background:#eff6ff;color:#1e3a8a;padding:10px;border-radius:10px}";

/// Renders the lookup form, with either an error message or the matched
/// record above it. All interpolated text is HTML-escaped.
pub fn render_lookup_page(error: Option<&str>, record: Option<&TraineeRecord>) -> String {
    let mut body = String::new();

    if let Some(message) = error {
        body.push_str(&format!("<div class=\"err\">{}</div>", escape(message)));
    }

    if let Some(r) = record {
        body.push_str("<div class=\"info\">");
        for (label, value) in [
            ("Name", &r.name),
            ("Trainee number", &r.trainee_id),
            ("Course", &r.course),
            ("Phone", &r.phone),
            ("Training entity", &r.training_entity),
        ] {
            body.push_str(&format!(
                "<div><b>{label}:</b> {}</div>",
                escape(value.as_str())
            ));
        }
        body.push_str("</div>");
    }

    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"/>\
<title>Trainee lookup</title><style>{STYLE}</style></head><body><div class=\"wrap\">\
<h2>Trainee lookup</h2>{body}\
<form method=\"post\" action=\"/lookup\">\
<input name=\"trainee_id\" placeholder=\"Trainee number\" required/>\
<input name=\"last4\" placeholder=\"Last 4 digits of phone\" inputmode=\"numeric\" maxlength=\"4\" required/>\
<button type=\"submit\">Look up</button></form></div></body></html>"
    )
}
