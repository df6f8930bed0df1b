//! SSR rendering tests for the chat message component.

use carechat::appointment::{AppointmentData, AppointmentDetails, TimeSlot};
use carechat::ui::chat::{ChatMessage, MAX_VISIBLE_SLOTS};
use leptos::prelude::*;

fn render(message: &str, is_user: bool, is_loading: bool, data: Option<AppointmentData>) -> String {
    let message = message.to_string();
    view! {
        <ChatMessage
            message=message
            is_user=is_user
            is_loading=is_loading
            appointment_data=data
        />
    }
    .to_html()
}

fn slot(n: usize) -> TimeSlot {
    TimeSlot {
        datetime: format!("2025-03-10T0{n}:00:00"),
        formatted: format!("Slot option {n}"),
        available: true,
    }
}

#[test]
fn test_loading_hides_message_text() {
    let html = render("This text must not appear", false, true, None);

    assert!(html.contains("typing-dot"));
    assert!(!html.contains("This text must not appear"));
}

#[test]
fn test_message_text_preserves_line_breaks() {
    let html = render("line1\nline2", true, false, None);

    assert!(html.contains("line1\nline2"));
    assert!(html.contains("whitespace-pre-wrap"));
    assert!(!html.contains("typing-dot"));
}

#[test]
fn test_avatar_placement_differs_by_sender() {
    let user = render("hi", true, false, None);
    let assistant = render("hello", false, false, None);

    assert!(user.contains("justify-end"));
    assert!(assistant.contains("justify-start"));
}

#[test]
fn test_confirmation_card() {
    let data = AppointmentData {
        success: Some(true),
        appointment_id: Some(42),
        appointment_details: Some(AppointmentDetails {
            appointment_type: "Checkup".to_string(),
            doctor_name: "Dr. Lee".to_string(),
            scheduled_time: "2025-03-10T09:00:00".to_string(),
            reason: None,
            is_virtual: true,
            duration_minutes: 30,
        }),
        ..Default::default()
    };

    let html = render("Booked it for you.", false, false, Some(data));

    assert!(html.contains("Appointment Booked"));
    assert!(html.contains("Appointment #42"));
    assert!(html.contains("Dr. Lee"));
    assert!(html.contains("30 minutes"));
    assert!(html.contains("Virtual"));
    assert!(html.contains("Checkup"));
}

#[test]
fn test_confirmation_card_without_details() {
    let data = AppointmentData {
        success: Some(true),
        appointment_id: Some(7),
        ..Default::default()
    };

    let html = render("Done.", false, false, Some(data));

    assert!(html.contains("Appointment #7"));
    assert!(!html.contains("minutes"));
    assert!(!html.contains("In-Person"));
}

#[test]
fn test_in_person_modality() {
    let data = AppointmentData {
        success: Some(true),
        appointment_id: Some(9),
        appointment_details: Some(AppointmentDetails {
            appointment_type: "Consultation".to_string(),
            doctor_name: "Dr. Patel".to_string(),
            scheduled_time: "2025-03-11T14:00:00".to_string(),
            reason: None,
            is_virtual: false,
            duration_minutes: 45,
        }),
        ..Default::default()
    };

    let html = render("Booked.", false, false, Some(data));

    assert!(html.contains("In-Person"));
    assert!(html.contains("45 minutes"));
}

#[test]
fn test_slot_list_caps_at_five() {
    let data = AppointmentData {
        action: Some("show_slots".to_string()),
        slots: Some((1..=7).map(slot).collect()),
        ..Default::default()
    };

    let html = render("Here are some times.", false, false, Some(data));

    assert!(html.contains("Available Time Slots"));
    assert_eq!(html.matches("Slot option").count(), MAX_VISIBLE_SLOTS);

    // Original order, first five only
    assert!(html.contains("Slot option 1"));
    assert!(html.contains("Slot option 5"));
    assert!(!html.contains("Slot option 6"));
    assert!(!html.contains("Slot option 7"));

    let first = html.find("Slot option 1").unwrap();
    let fifth = html.find("Slot option 5").unwrap();
    assert!(first < fifth);
}

#[test]
fn test_error_card() {
    let data = AppointmentData {
        error: Some("Doctor unavailable".to_string()),
        ..Default::default()
    };

    let html = render("Something went wrong.", false, false, Some(data));

    assert!(html.contains("Error: Doctor unavailable"));
    assert!(!html.contains("Appointment Booked"));
    assert!(!html.contains("Available Time Slots"));
}

#[test]
fn test_conflicting_payload_shows_only_error() {
    let data = AppointmentData {
        success: Some(true),
        appointment_id: Some(42),
        error: Some("Payment declined".to_string()),
        action: Some("show_slots".to_string()),
        slots: Some(vec![slot(1)]),
        ..Default::default()
    };

    let html = render("Hmm.", false, false, Some(data));

    assert!(html.contains("Error: Payment declined"));
    assert!(!html.contains("Appointment Booked"));
    assert!(!html.contains("Available Time Slots"));
    assert!(!html.contains("Slot option 1"));
}

#[test]
fn test_payload_without_matching_fields_shows_no_card() {
    let data = AppointmentData {
        action: Some("cancel".to_string()),
        ..Default::default()
    };

    let html = render("Okay.", false, false, Some(data));

    assert!(html.contains("Okay."));
    assert!(!html.contains("Appointment Booked"));
    assert!(!html.contains("Available Time Slots"));
    assert!(!html.contains("Error:"));
}
