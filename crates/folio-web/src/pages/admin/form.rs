//! Shared plumbing for the admin create/edit screens

use std::future::Future;
use std::rc::Rc;

use folio_core::types::FieldErrors;
use leptos::*;
use leptos_router::{use_navigate, use_params_map, NavigateOptions};

use crate::api::{ApiError, Saved};
use crate::components::{use_flash, Button, ButtonVariant, Flash, FormErrors};

/// Record id from the `:id` route segment; `None` on the create screen
pub fn use_record_id() -> Memo<Option<u64>> {
    let params = use_params_map();
    create_memo(move |_| params.with(|p| p.get("id").and_then(|id| id.parse::<u64>().ok())))
}

/// Saving flag, field errors and the way back to the list
#[derive(Clone)]
pub struct FormState {
    pub errors: FormErrors,
    pub saving: RwSignal<bool>,
    flash: Flash,
    back: String,
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl FormState {
    pub fn new(back: impl Into<String>) -> Self {
        let navigate = use_navigate();
        Self {
            errors: create_rw_signal(FieldErrors::default()),
            saving: create_rw_signal(false),
            flash: use_flash(),
            back: back.into(),
            navigate: Rc::new(move |href, options| navigate(href, options)),
        }
    }

    pub fn back(&self) -> &str {
        &self.back
    }

    /// Run a save request, then return to the list or show what failed.
    ///
    /// A second submit while one is in flight is ignored.
    pub fn submit<F>(&self, request: F)
    where
        F: Future<Output = Result<Saved, ApiError>> + 'static,
    {
        if self.saving.get_untracked() {
            return;
        }
        self.saving.set(true);
        self.errors.set(FieldErrors::default());

        let state = self.clone();
        spawn_local(async move {
            let result = request.await;
            state.saving.set(false);
            match result {
                Ok(saved) => {
                    log::debug!("Saved record {}", saved.id);
                    state
                        .flash
                        .success(saved.message.unwrap_or_else(|| "Saved.".to_string()));
                    (state.navigate)(&state.back, Default::default());
                }
                Err(e) => {
                    log::warn!("Save failed: {}", e);
                    state.errors.set(e.field_errors());
                    state.flash.error(e.message);
                }
            }
        });
    }
}

/// Heading, load error, validation summary and the save/cancel buttons
#[component]
pub fn FormPage(
    #[prop(into)] title: MaybeSignal<String>,
    state: StoredValue<FormState>,
    #[prop(into)] load_error: Signal<Option<String>>,
    #[prop(into)] on_submit: Callback<()>,
    children: Children,
) -> impl IntoView {
    let errors = state.with_value(|s| s.errors);
    let saving = state.with_value(|s| s.saving);
    let back = state.with_value(|s| s.back().to_string());

    let on_form_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <div class="max-w-4xl space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-white">{move || title.get()}</h1>
                <a href=back.clone() class="text-sm text-gray-400 hover:text-white">"← Back"</a>
            </div>

            {move || load_error.get().map(|message| view! {
                <div class="bg-red-900/30 border border-red-500 text-red-200 px-4 py-3 rounded">
                    {message}
                </div>
            })}

            {move || errors.with(|e| (!e.is_empty()).then(|| e.message.clone())).map(|message| view! {
                <div class="bg-red-900/30 border border-red-500 text-red-200 px-4 py-3 rounded">
                    {if message.is_empty() { "Please correct the highlighted fields.".to_string() } else { message }}
                </div>
            })}

            <form class="bg-gray-800 rounded-xl border border-gray-700 p-6 space-y-6" on:submit=on_form_submit>
                {children()}

                <div class="flex justify-end space-x-3 pt-4 border-t border-gray-700">
                    <a href=back class="px-4 py-2 rounded-lg font-medium bg-gray-700 hover:bg-gray-600 text-white">
                        "Cancel"
                    </a>
                    <Button variant=ButtonVariant::Primary submit=true loading=saving>
                        "Save"
                    </Button>
                </div>
            </form>
        </div>
    }
}

/// Select options from `(id, name)` pairs
pub fn id_options<'a>(items: impl IntoIterator<Item = (u64, &'a str)>) -> Vec<(String, String)> {
    items
        .into_iter()
        .map(|(id, name)| (id.to_string(), name.to_string()))
        .collect()
}

/// Parse a select value back into an optional id
pub fn parse_id(value: &str) -> Option<u64> {
    value.parse::<u64>().ok()
}

/// Empty input maps to `None`
pub fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
