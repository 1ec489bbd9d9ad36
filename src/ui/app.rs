//! Full-page document and composition root.

use leptos::prelude::*;

use crate::ui::chat::{ChatInput, MessageField, ModelDropdown};

/// Full HTML document wrapping the home page.
///
/// Local assets only (no CDN): the stylesheet is served from `/static`.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="GPaulT chat interface"/>

                <title>"GPaulT"</title>

                <link rel="stylesheet" href="/static/app.css"/>
            </head>

            <body class="antialiased">
                <Home/>
            </body>
        </html>
    }
}

/// Home page: centered title above a two-column content region.
///
/// The left column (3/4 width) stacks the transcript above the chat
/// input; the right column (1/4 width) holds the model selector.
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-slate-50">
            <h1 class="py-16 text-lg font-semibold text-center">
                "G"<span class="text-green-600">"P"</span>"aulT"
            </h1>

            <div class="max-w-5xl flex gap-8 mx-auto">
                <div class="w-3/4">
                    <MessageField/>
                    <ChatInput/>
                </div>
                <div class="w-1/4">
                    <ModelDropdown/>
                </div>
            </div>
        </div>
    }
}

/// Render the full page to an HTML string, doctype included.
pub fn render_page() -> String {
    format!("<!DOCTYPE html>{}", App().to_html())
}
