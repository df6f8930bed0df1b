//! Full-document page components.

use leptos::prelude::*;

use crate::chat::Message;
use crate::ui::chat::ChatShell;
use crate::ui::components::{Avatar, Button, ButtonVariant, Card, CardContent, CardHeader, MessageCircleIcon};

/// Document shell wrapping page content.
///
/// Local scripts only (no CDN): HTMX and Alpine are served from `/static`.
#[component]
fn Page(
    /// Document title.
    title: &'static str,
    /// Page content.
    children: Children,
) -> impl IntoView {
    view! {
        <!doctype html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Friendly health assistant chat"/>

                <title>{title}</title>

                <script src="/static/vendor/htmx-2.0.8.min.js"></script>
                <script defer src="/static/vendor/alpine.min.js"></script>
                <link rel="stylesheet" href="/static/app.css"/>
            </head>

            <body class="min-h-screen bg-background text-textPrimary antialiased">
                {children()}
            </body>
        </html>
    }
}

/// Main chat page.
#[component]
pub fn ChatPage(
    /// Conversation history for the current session.
    messages: Vec<Message>,
) -> impl IntoView {
    view! {
        <Page title="Chat - Friendly Assistant">
            <ChatShell messages=messages />
        </Page>
    }
}

/// Authentication page with the login form.
#[component]
pub fn AuthPage(
    /// Error message from a failed login attempt.
    #[prop(optional, into)]
    error: Option<String>,
) -> impl IntoView {
    view! {
        <Page title="Sign in - Friendly Assistant">
            <main class="flex min-h-screen items-center justify-center px-4">
                <Card class="w-full max-w-sm">
                    <CardHeader class="items-center text-center">
                        <Avatar
                            size="h-12 w-12"
                            class="bg-gradient-to-br from-primary to-primaryMuted shadow-md"
                        >
                            <MessageCircleIcon class="h-6 w-6 text-white" />
                        </Avatar>
                        <h1 class="text-xl font-semibold">"Friendly Assistant"</h1>
                        <p class="text-sm text-textMuted">"Sign in to start chatting"</p>
                    </CardHeader>
                    <CardContent>
                        {error.map(|message| view! {
                            <p class="mb-4 text-sm text-danger" role="alert">{message}</p>
                        })}

                        <form method="post" action="/auth/login" class="space-y-4">
                            <input
                                type="email"
                                name="email"
                                placeholder="Email"
                                class="w-full h-10 px-4 rounded-lg border border-panelBorder \
                                       bg-background text-textPrimary placeholder:text-textMuted \
                                       focus:outline-none focus:ring-2 focus:ring-primary"
                                required
                            />
                            <input
                                type="password"
                                name="password"
                                placeholder="Password"
                                class="w-full h-10 px-4 rounded-lg border border-panelBorder \
                                       bg-background text-textPrimary placeholder:text-textMuted \
                                       focus:outline-none focus:ring-2 focus:ring-primary"
                                required
                            />
                            <Button
                                variant=ButtonVariant::Primary
                                button_type="submit"
                                class="w-full"
                            >
                                "Sign in"
                            </Button>
                        </form>
                    </CardContent>
                </Card>
            </main>
        </Page>
    }
}

/// 404 Not Found page.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Page title="Not found - Friendly Assistant">
            <div class="flex flex-col items-center justify-center py-20">
                <h1 class="text-4xl font-bold mb-4">"404"</h1>
                <p class="text-textMuted mb-6">"Page not found"</p>
                <a href="/">
                    <Button variant=ButtonVariant::Primary>
                        "Go Home"
                    </Button>
                </a>
            </div>
        </Page>
    }
}
