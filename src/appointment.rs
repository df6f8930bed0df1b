//! Appointment payload types and outcome selection.
//!
//! Assistant messages may carry an [`AppointmentData`] payload describing
//! the result of a scheduling action performed by the backend. Every field
//! is optional; absent or malformed fields suppress the corresponding card
//! rather than raising an error.
//!
//! Rendering never inspects the raw payload directly. The payload is
//! classified once into an [`AppointmentOutcome`], so a message shows at
//! most one card even when the upstream service sets conflicting fields.

use serde::{Deserialize, Serialize};

/// Action value the backend uses when returning candidate slots.
pub const SHOW_SLOTS_ACTION: &str = "show_slots";

/// Structured scheduling result attached to an assistant message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppointmentData {
    /// Backend action discriminator, e.g. `"show_slots"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Identifier of a booked appointment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_id: Option<i64>,
    /// Whether the scheduling action succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    /// Error message from the backend, shown to the user verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Candidate appointment times, in backend order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slots: Option<Vec<TimeSlot>>,
    /// Details of a booked appointment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_details: Option<AppointmentDetails>,
}

/// A candidate appointment time returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Machine-readable timestamp.
    pub datetime: String,
    /// Display-formatted time string.
    pub formatted: String,
    /// Whether the slot is still bookable.
    pub available: bool,
}

/// Details of a booked appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentDetails {
    pub appointment_type: String,
    pub doctor_name: String,
    pub scheduled_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub is_virtual: bool,
    pub duration_minutes: u32,
}

/// The single scheduling outcome a message renders.
///
/// Decided once per payload. Precedence when several predicates hold:
/// `Failed` over `Confirmed` over `ShowingSlots`.
#[derive(Debug, Clone, PartialEq)]
pub enum AppointmentOutcome {
    /// No card to show.
    Idle,
    /// A booking was confirmed.
    Confirmed {
        appointment_id: i64,
        details: Option<AppointmentDetails>,
    },
    /// The backend returned candidate slots to pick from.
    ShowingSlots(Vec<TimeSlot>),
    /// The scheduling action failed with the given message.
    Failed(String),
}

impl AppointmentData {
    /// Classify this payload into the outcome to render.
    ///
    /// - `Failed` requires a non-empty `error`.
    /// - `Confirmed` requires `success == true` and an `appointment_id`.
    /// - `ShowingSlots` requires `action == "show_slots"` and `slots`.
    /// - Anything else is `Idle`.
    #[must_use]
    pub fn outcome(&self) -> AppointmentOutcome {
        if let Some(error) = self.error.as_deref() {
            if !error.is_empty() {
                return AppointmentOutcome::Failed(error.to_string());
            }
        }

        if self.success == Some(true) {
            if let Some(id) = self.appointment_id {
                return AppointmentOutcome::Confirmed {
                    appointment_id: id,
                    details: self.appointment_details.clone(),
                };
            }
        }

        if self.action.as_deref() == Some(SHOW_SLOTS_ACTION) {
            if let Some(slots) = &self.slots {
                return AppointmentOutcome::ShowingSlots(slots.clone());
            }
        }

        AppointmentOutcome::Idle
    }
}
