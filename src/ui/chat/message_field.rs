//! Conversation transcript panel.

use leptos::prelude::*;

/// Scrollable panel holding the conversation transcript.
///
/// Renders a static empty state; messages would fill this panel in a
/// transport-enabled build.
#[component]
pub fn MessageField() -> impl IntoView {
    view! {
        <div class="h-96 overflow-y-auto rounded-md bg-white p-4 shadow-sm ring-1 ring-inset ring-gray-300">
            <p class="text-sm text-gray-400">
                "No messages yet. Say hello to get started."
            </p>
        </div>
    }
}
