use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A booking of one slot by one trainee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub slot_id: String,
    /// Absent on entries written before timestamps were recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_at: Option<DateTime<Utc>>,
}

/// Trainee identifier → booking. A trainee appears at most once.
pub type AssignmentMap = BTreeMap<String, Assignment>;
