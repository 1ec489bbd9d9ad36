//! Dropdown select component.

use leptos::prelude::*;

/// Select component wrapping `<option>` children.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Select name="model" id="model">
///         <option value="gpault">"GPaulT"</option>
///     </Select>
/// }
/// ```
#[component]
pub fn Select(
    /// Select name attribute.
    #[prop(default = "")]
    name: &'static str,
    /// Select ID attribute.
    #[prop(default = "")]
    id: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Option elements.
    children: Children,
) -> impl IntoView {
    let base_classes = "block w-full rounded-md border-0 py-1.5 text-gray-900 shadow-sm \
                        ring-1 ring-inset ring-gray-300 focus:ring-2 focus:ring-green-600 \
                        sm:text-sm sm:leading-6";

    let classes = format!("{} {}", base_classes, class);

    view! {
        <select class=classes name=name id=id>
            {children()}
        </select>
    }
}
