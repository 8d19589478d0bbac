//! Booking orchestration over the slot and assignment stores.
//!
//! Every read-modify-write cycle runs under one in-process mutex, so two
//! requests can never both pass the capacity check on stale data or clobber
//! each other's writes. The lock does not extend across processes.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::info;

use crate::errors::AppError;
use crate::models::assignment::Assignment;
use crate::models::slot::Slot;
use crate::store::assignments::AssignmentStore;
use crate::store::slots::SlotStore;

/// Per-slot figures for the admin view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotStats {
    pub id: String,
    pub remaining: i64,
    pub assigned: usize,
}

#[derive(Clone)]
pub struct AssignmentService {
    slots: SlotStore,
    assignments: AssignmentStore,
    write_lock: Arc<Mutex<()>>,
}

impl AssignmentService {
    pub fn new(slots_path: impl Into<PathBuf>, assignments_path: impl Into<PathBuf>) -> Self {
        Self {
            slots: SlotStore::new(slots_path),
            assignments: AssignmentStore::new(assignments_path),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// The persisted slot list, unfiltered.
    pub async fn list_slots(&self) -> Result<Vec<Slot>, AppError> {
        self.slots.load().await
    }

    /// Books `slot_id` for `trainee_id` and returns the slot's new remaining
    /// capacity.
    ///
    /// A trainee who already holds a booking is refused before the slot is
    /// even looked up, so a repeat request gets `AlreadyAssigned` whatever
    /// slot it names. On success the assignment mapping is written before
    /// the slot list; an interruption between the two leaves the trainee
    /// booked with capacity not yet decremented.
    pub async fn assign(&self, trainee_id: &str, slot_id: &str) -> Result<i64, AppError> {
        let trainee_id = trainee_id.trim();
        let slot_id = slot_id.trim();
        if trainee_id.is_empty() || slot_id.is_empty() {
            return Err(AppError::InvalidInput(
                "trainee_id and slot_id are required".to_string(),
            ));
        }

        let _guard = self.write_lock.lock().await;

        let mut slots = self.slots.load().await?;
        let mut assignments = self.assignments.load().await?;

        if assignments.contains_key(trainee_id) {
            return Err(AppError::AlreadyAssigned(trainee_id.to_string()));
        }

        let slot = slots
            .iter_mut()
            .find(|s| s.has_id(slot_id))
            .ok_or_else(|| AppError::NotFound(format!("Slot {slot_id} not found")))?;

        if slot.remaining <= 0 {
            return Err(AppError::CapacityExhausted(slot_id.to_string()));
        }

        slot.remaining -= 1;
        let remaining = slot.remaining;

        assignments.insert(
            trainee_id.to_string(),
            Assignment {
                slot_id: slot_id.to_string(),
                assigned_at: Some(Utc::now()),
            },
        );

        self.assignments.save(&assignments).await?;
        self.slots.save(&slots).await?;

        info!(trainee_id, slot_id, remaining, "Slot assigned");
        Ok(remaining)
    }

    /// Remaining capacity and booking count for every slot.
    pub async fn stats(&self) -> Result<Vec<SlotStats>, AppError> {
        let slots = self.slots.load().await?;
        let assignments = self.assignments.load().await?;

        Ok(slots
            .iter()
            .map(|slot| {
                let id = slot.id();
                let assigned = assignments.values().filter(|a| a.slot_id == id).count();
                SlotStats {
                    id,
                    remaining: slot.remaining,
                    assigned,
                }
            })
            .collect())
    }

    /// Drops every assignment and replaces the slot list with `slots`.
    pub async fn reset(&self, slots: Vec<Slot>) -> Result<usize, AppError> {
        let _guard = self.write_lock.lock().await;

        self.assignments.save(&Default::default()).await?;
        self.slots.save(&slots).await?;

        info!(slots = slots.len(), "Assignments cleared and slots re-seeded");
        Ok(slots.len())
    }
}
