//! Button component with variants.

use leptos::prelude::*;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button.
    #[default]
    Primary,
    /// Secondary action button.
    Secondary,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => {
                "bg-green-600 text-white hover:bg-green-500 focus-visible:outline-green-600"
            }
            Self::Secondary => "bg-white text-gray-900 ring-1 ring-inset ring-gray-300 hover:bg-gray-50",
        }
    }
}

/// Styled button component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button variant=ButtonVariant::Primary>
///         "Send"
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Button variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button type attribute.
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Button content.
    children: Children,
) -> impl IntoView {
    let base_classes = "h-fit rounded-md px-9 py-2 text-sm font-semibold shadow-sm \
                        focus-visible:outline focus-visible:outline-2 \
                        focus-visible:outline-offset-2";

    let classes = format!("{} {} {}", base_classes, variant.classes(), class);

    view! {
        <button type=button_type class=classes>
            {children()}
        </button>
    }
}
