use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::roster::schema::RosterColumns;

/// Application configuration loaded from environment variables.
/// Every setting has a default; only a malformed `PORT` fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub roster_path: PathBuf,
    pub template_path: PathBuf,
    pub slots_path: PathBuf,
    pub assignments_path: PathBuf,
    pub columns: RosterColumns,
    /// Roster header whose distinct values become slots on reset.
    pub slot_seed_column: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key → value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let data_dir = PathBuf::from(var("DATA_DIR", "data"));
        let data_path = |key: &str, file: &str| {
            lookup(key)
                .map(PathBuf::from)
                .unwrap_or_else(|| data_dir.join(file))
        };

        let defaults = RosterColumns::default();
        let columns = RosterColumns {
            trainee_id: var("COL_TRAINEE_ID", &defaults.trainee_id),
            phone: var("COL_PHONE", &defaults.phone),
            name: var("COL_NAME", &defaults.name),
            course_ref: var("COL_COURSE_REF", &defaults.course_ref),
            course: var("COL_COURSE", &defaults.course),
            supervisor: var("COL_SUPERVISOR", &defaults.supervisor),
            training_entity: var("COL_ENTITY", &defaults.training_entity),
        };

        Ok(Config {
            port: var("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG", "info"),
            roster_path: data_path("ROSTER_PATH", "trainees.xlsx"),
            template_path: data_path("TEMPLATE_PATH", "letter_template.docx"),
            slots_path: data_path("SLOTS_PATH", "slots.json"),
            assignments_path: data_path("ASSIGNMENTS_PATH", "assignments.json"),
            slot_seed_column: var("SLOT_SEED_COLUMN", &columns.course),
            columns,
        })
    }
}
