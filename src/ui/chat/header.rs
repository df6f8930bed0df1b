//! Chat header component.

use leptos::prelude::*;

use crate::ui::components::{
    Avatar, Button, ButtonSize, ButtonVariant, LogOutIcon, MessageCircleIcon,
};

/// Chat header with branding and the logout action.
///
/// The logout button posts to `/logout`, which clears the session flags
/// and redirects to the authentication page.
#[component]
pub fn ChatHeader(
    /// Title displayed in the header.
    #[prop(default = "Friendly Assistant")]
    title: &'static str,
    /// Subtitle shown under the title.
    #[prop(default = "Always here to help")]
    subtitle: &'static str,
) -> impl IntoView {
    view! {
        <header class="border-b border-panelBorder bg-panel px-6 py-4 shadow-sm">
            <div class="max-w-4xl mx-auto flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <Avatar
                        size="h-10 w-10"
                        class="bg-gradient-to-br from-primary to-primaryMuted shadow-md"
                    >
                        <MessageCircleIcon class="h-5 w-5 text-white" />
                    </Avatar>
                    <div>
                        <h1 class="text-lg font-semibold text-textPrimary">{title}</h1>
                        <p class="text-xs text-textMuted">{subtitle}</p>
                    </div>
                </div>

                <form method="post" action="/logout">
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        button_type="submit"
                        class="flex items-center gap-2"
                    >
                        <LogOutIcon class="w-4 h-4" />
                        "Logout"
                    </Button>
                </form>
            </div>
        </header>
    }
}
