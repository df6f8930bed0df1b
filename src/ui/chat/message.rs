//! Chat message bubble component.

use leptos::prelude::*;

use crate::appointment::{AppointmentData, AppointmentDetails, AppointmentOutcome, TimeSlot};
use crate::ui::components::{
    Avatar, Badge, BadgeVariant, BotIcon, CalendarIcon, Card, CardContent, CardHeader,
    CheckCircleIcon, ClockIcon, MapPinIcon, UserIcon,
};

/// Maximum number of candidate slots shown in the slot-list card.
pub const MAX_VISIBLE_SLOTS: usize = 5;

/// A single chat message bubble.
///
/// Pure function of its inputs. While a reply is in flight the bubble shows
/// a typing placeholder and nothing else; otherwise it shows the message
/// text (line breaks preserved) and at most one appointment card, chosen by
/// [`AppointmentOutcome`]. The avatar sits left for the assistant and right
/// for the user; content policy is identical for both.
#[component]
pub fn ChatMessage(
    /// Message text.
    message: String,
    /// Whether the message was written by the user.
    is_user: bool,
    /// Render the typing placeholder instead of content.
    #[prop(optional)]
    is_loading: bool,
    /// Scheduling payload attached to the message.
    #[prop(optional)]
    appointment_data: Option<AppointmentData>,
) -> impl IntoView {
    let row_classes = format!(
        "flex gap-3 mb-4 {}",
        if is_user { "justify-end" } else { "justify-start" }
    );

    let bubble_classes = format!(
        "max-w-[75%] rounded-2xl px-4 py-3 shadow-sm {}",
        if is_user {
            "bg-primary text-white rounded-br-md"
        } else {
            "bg-panel text-textPrimary rounded-bl-md border border-panelBorder"
        }
    );

    // One card per message, decided before anything renders
    let outcome = appointment_data.map_or(AppointmentOutcome::Idle, |d| d.outcome());

    view! {
        <div class=row_classes>
            {(!is_user).then(|| view! {
                <Avatar class="bg-primary">
                    <BotIcon class="w-5 h-5 text-white" />
                </Avatar>
            })}

            <div class=bubble_classes>
                {if is_loading {
                    typing_indicator().into_any()
                } else {
                    view! {
                        <p class="text-sm leading-relaxed whitespace-pre-wrap">{message}</p>
                        {outcome_card(outcome)}
                    }
                    .into_any()
                }}
            </div>

            {is_user.then(|| view! {
                <Avatar class="bg-primaryMuted">
                    <UserIcon class="w-5 h-5 text-white" />
                </Avatar>
            })}
        </div>
    }
}

/// Three-dot pulsing placeholder shown while a reply is in flight.
fn typing_indicator() -> impl IntoView {
    view! {
        <div class="typing-indicator flex gap-1 items-center py-1" aria-label="Assistant is typing">
            <span class="typing-dot"></span>
            <span class="typing-dot"></span>
            <span class="typing-dot"></span>
        </div>
    }
}

/// The card for the message's scheduling outcome, if any.
fn outcome_card(outcome: AppointmentOutcome) -> Option<AnyView> {
    match outcome {
        AppointmentOutcome::Idle => None,
        AppointmentOutcome::Confirmed {
            appointment_id,
            details,
        } => Some(confirmation_card(appointment_id, details).into_any()),
        AppointmentOutcome::ShowingSlots(slots) => Some(slot_list_card(slots).into_any()),
        AppointmentOutcome::Failed(error) => Some(error_card(error).into_any()),
    }
}

fn confirmation_card(appointment_id: i64, details: Option<AppointmentDetails>) -> impl IntoView {
    view! {
        <Card class="mt-3 border-success bg-success/10">
            <CardHeader class="pb-3">
                <h3 class="text-base font-semibold flex items-center gap-2 text-success">
                    <CheckCircleIcon class="w-5 h-5" />
                    "Appointment Booked"
                </h3>
            </CardHeader>
            <CardContent class="text-sm space-y-2">
                <div class="flex items-center gap-2">
                    <CalendarIcon class="w-4 h-4 text-success" />
                    <span class="font-medium">{format!("Appointment #{appointment_id}")}</span>
                </div>
                {details.map(|d| view! {
                    <div class="flex items-center gap-2">
                        <UserIcon class="w-4 h-4 text-success" />
                        <span>{d.doctor_name}</span>
                    </div>
                    <div class="flex items-center gap-2">
                        <ClockIcon class="w-4 h-4 text-success" />
                        <span>{format!("{} minutes", d.duration_minutes)}</span>
                    </div>
                    <div class="flex items-center gap-2">
                        <MapPinIcon class="w-4 h-4 text-success" />
                        <span>{if d.is_virtual { "Virtual" } else { "In-Person" }}</span>
                    </div>
                    <Badge variant=BadgeVariant::Outline class="mt-2">
                        {d.appointment_type}
                    </Badge>
                })}
            </CardContent>
        </Card>
    }
}

fn slot_list_card(slots: Vec<TimeSlot>) -> impl IntoView {
    view! {
        <Card class="mt-3 border-primary bg-primary/10">
            <CardHeader class="pb-3">
                <h3 class="text-base font-semibold text-primary">"Available Time Slots"</h3>
            </CardHeader>
            <CardContent class="text-sm">
                <div class="space-y-2">
                    {slots
                        .into_iter()
                        .take(MAX_VISIBLE_SLOTS)
                        .map(|slot| view! {
                            <div class="slot-entry p-2 rounded bg-background border border-panelBorder hover:border-primary transition-colors">
                                <div class="flex items-center gap-2">
                                    <CalendarIcon class="w-4 h-4 text-primary" />
                                    <span>{slot.formatted}</span>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </CardContent>
        </Card>
    }
}

fn error_card(error: String) -> impl IntoView {
    view! {
        <Card class="mt-3 border-danger bg-danger/10">
            <CardContent class="pt-4 text-sm text-danger">
                <p>{format!("Error: {error}")}</p>
            </CardContent>
        </Card>
    }
}
