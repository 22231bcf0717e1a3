//! Labelled form field showing the backend's first message for it

use folio_core::types::FieldErrors;
use leptos::*;

/// Validation messages of the form being edited
pub type FormErrors = RwSignal<FieldErrors>;

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-gray-700 border border-gray-600 rounded-lg text-white placeholder-gray-400 focus:outline-none focus:border-blue-500 transition-colors";

#[component]
pub fn FormField(
    label: &'static str,
    /// Backend field key; nested keys such as `images.0` roll up here
    name: &'static str,
    errors: FormErrors,
    #[prop(optional)] hint: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let message = move || errors.with(|e| e.first_under(name).map(String::from));

    view! {
        <div>
            <label class="block text-sm font-medium text-gray-300 mb-2">{label}</label>
            {children()}
            {hint.map(|h| view! { <p class="text-sm text-gray-400 mt-2">{h}</p> })}
            {move || message().map(|m| view! { <p class="text-sm text-red-400 mt-2">{m}</p> })}
        </div>
    }
}

#[component]
pub fn TextInput(
    value: RwSignal<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] kind: Option<&'static str>,
) -> impl IntoView {
    view! {
        <input
            type=kind.unwrap_or("text")
            class=INPUT_CLASS
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

#[component]
pub fn TextArea(value: RwSignal<String>, #[prop(optional)] rows: Option<u32>) -> impl IntoView {
    view! {
        <textarea
            class=INPUT_CLASS
            rows=rows.unwrap_or(4).to_string()
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

/// Select over `(value, label)` options with an optional empty choice
#[component]
pub fn Select(
    value: RwSignal<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(optional)] empty_label: Option<&'static str>,
) -> impl IntoView {
    view! {
        <select
            class=INPUT_CLASS
            on:change=move |ev| value.set(event_target_value(&ev))
        >
            {empty_label.map(|label| view! {
                <option value="" selected=move || value.get().is_empty()>{label}</option>
            })}
            {move || options.get().into_iter().map(|(v, label)| {
                let selected_value = v.clone();
                view! {
                    <option value=v selected=move || value.get() == selected_value>{label}</option>
                }
            }).collect_view()}
        </select>
    }
}
