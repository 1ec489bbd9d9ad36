//! Multi-line text input component.

use leptos::prelude::*;

/// Textarea component for multi-line input.
///
/// Renders with an empty initial value; sizing is controlled by the
/// parent through `class` and the `rows` attribute.
#[component]
pub fn Textarea(
    /// Placeholder text.
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input name attribute.
    #[prop(default = "")]
    name: &'static str,
    /// Input ID attribute.
    #[prop(default = "")]
    id: &'static str,
    /// Number of visible rows.
    #[prop(default = "3")]
    rows: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_classes = "pl-2 block w-full rounded-md border-0 py-1.5 text-gray-900 shadow-sm \
                        ring-1 ring-inset ring-gray-300 placeholder:text-gray-400 \
                        focus:ring-2 focus:ring-inset focus:ring-green-600 \
                        sm:text-sm sm:leading-6";

    let classes = format!("{} {}", base_classes, class);

    view! {
        <textarea
            class=classes
            placeholder=placeholder
            name=name
            id=id
            rows=rows
        />
    }
}
