//! Main application component.

use leptos::prelude::*;

use crate::ui::components::SparklesIcon;
use crate::ui::composer::ComposerShell;

/// Main application component.
///
/// Renders the complete document: head, navigation chrome, and the
/// composer page. Page routing is handled server-side.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <!doctype html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content="Templated prompt composer chat" />

                <title>"Prompt Composer"</title>

                // Local scripts only (no CDN)
                <script type="module" src="/static/main.js"></script>
                <link rel="stylesheet" href="/static/app.css" />
            </head>

            <body class="min-h-screen bg-background text-textPrimary antialiased">
                <div id="app-shell" class="flex flex-col min-h-screen">
                    <Header />
                    <main id="app" class="flex-1 container mx-auto px-4 py-6 max-w-5xl">
                        <ComposerShell title="Prompt Composer" />
                    </main>
                    <Footer />
                </div>
            </body>
        </html>
    }
}

/// Application header with navigation.
#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-50 w-full border-b border-panelBorder bg-background/95 backdrop-blur supports-[backdrop-filter]:bg-background/60">
            <div class="container mx-auto flex h-14 items-center justify-between px-4 max-w-5xl">
                <a href="/" class="flex items-center gap-2 font-semibold">
                    <SparklesIcon class="h-5 w-5 text-primary" />
                    <span class="text-lg">"Prompt Composer"</span>
                </a>

                <nav class="flex items-center gap-6">
                    <a href="/" class="text-sm text-textMuted hover:text-textPrimary transition-colors">
                        "Chat"
                    </a>
                </nav>
            </div>
        </header>
    }
}

/// Footer component.
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-panelBorder py-4">
            <div class="container mx-auto px-4 max-w-5xl">
                <p class="text-xs text-textMuted text-center">
                    "Powered by Axum + Leptos"
                </p>
            </div>
        </footer>
    }
}
