use crate::assignment::service::AssignmentService;
use crate::config::Config;
use crate::letter::generator::LetterGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Serializes every write to the slot and assignment files.
    pub assignments: AssignmentService,
    pub letters: LetterGenerator,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let assignments = AssignmentService::new(&config.slots_path, &config.assignments_path);
        let letters = LetterGenerator::new(
            &config.roster_path,
            &config.template_path,
            config.columns.clone(),
        );
        Self {
            config,
            assignments,
            letters,
        }
    }
}
