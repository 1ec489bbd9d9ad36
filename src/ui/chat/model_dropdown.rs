//! Model selector component.

use leptos::prelude::*;

use crate::ui::components::Select;

/// Labeled dropdown for choosing the underlying model.
#[component]
pub fn ModelDropdown() -> impl IntoView {
    view! {
        <label class="block text-sm font-medium text-gray-900">
            "Model"
            <Select name="model" id="model" class="mt-2">
                <option value="gpault">"GPaulT"</option>
                <option value="gpault-mini">"GPaulT Mini"</option>
            </Select>
        </label>
    }
}
