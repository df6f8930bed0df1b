//! Avatar component for chat participants.

use leptos::prelude::*;

/// Circular icon avatar.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Avatar class="bg-primary">
///         <BotIcon class="h-5 w-5 text-white" />
///     </Avatar>
/// }
/// ```
#[component]
pub fn Avatar(
    /// Size class.
    #[prop(default = "h-8 w-8")]
    size: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Avatar content, usually an icon.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "relative flex shrink-0 items-center justify-center overflow-hidden rounded-full {size} {class}"
    );

    view! {
        <span class=classes>
            {children()}
        </span>
    }
}
