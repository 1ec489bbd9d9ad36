//! Chat input component.

use leptos::prelude::*;

use crate::ui::components::{Button, ButtonVariant, Textarea};

/// Message entry area: a 4-row textarea next to a "Send" button.
///
/// The button carries no wired behavior; submission is out of scope
/// for the UI shell.
#[component]
pub fn ChatInput() -> impl IntoView {
    view! {
        <div class="mt-4 flex gap-4">
            <Textarea
                name="comment"
                id="comment"
                rows="4"
                placeholder="Enter your message here"
            />
            <Button variant=ButtonVariant::Primary>
                "Send"
            </Button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standalone_render_is_textarea_and_button_only() {
        let html = ChatInput().to_html();

        assert_eq!(html.matches("<textarea").count(), 1);
        assert_eq!(html.matches("<button").count(), 1);
        assert!(!html.contains("<select"));
        assert!(!html.contains("<h1"));
    }

    #[test]
    fn textarea_shows_four_rows_and_placeholder() {
        let html = ChatInput().to_html();

        assert!(html.contains(r#"rows="4""#));
        assert!(html.contains(r#"placeholder="Enter your message here""#));
        assert!(html.contains("Send"));
    }
}
