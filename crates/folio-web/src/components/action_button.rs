//! Row action button

use folio_core::action::{RowAction, Submission, Verb};
use leptos::*;
use leptos_router::use_navigate;

use super::{use_flash, ConfirmModal};
use crate::api;

/// Runs a [`RowAction`]: navigates for `GET`, otherwise sends the request
/// to the backend. Actions carrying a prompt ask first; declining does
/// nothing.
#[component]
pub fn ActionButton(action: RowAction, #[prop(into)] on_done: Callback<()>) -> impl IntoView {
    let (confirming, set_confirming) = create_signal(false);
    let (busy, set_busy) = create_signal(false);
    let flash = use_flash();
    let navigate = use_navigate();

    let class = match action.verb {
        Verb::Delete => "text-red-400 hover:text-red-300",
        Verb::Get => "text-blue-400 hover:text-blue-300",
        _ => "text-gray-300 hover:text-white",
    };
    let label = action.label.clone();
    let prompt = action.confirm.clone().unwrap_or_default();
    let action = store_value(action);

    let execute = Callback::new(move |submission: Submission| match submission {
        Submission::Navigate(href) => navigate(&href, Default::default()),
        Submission::Request { verb, target } => {
            set_busy.set(true);
            spawn_local(async move {
                match api::send(verb, &target).await {
                    Ok(()) => {
                        if verb.is_destructive() {
                            flash.success("Deleted.");
                        }
                        on_done.call(());
                    }
                    Err(e) => {
                        log::error!("{} {} failed: {}", verb, target, e);
                        flash.error(e.message);
                    }
                }
                set_busy.set(false);
            });
        }
    });

    let on_click = move |_| {
        if action.with_value(|a| a.confirm.is_some()) {
            set_confirming.set(true);
        } else if let Some(submission) = action.with_value(|a| a.submit(|_| true)) {
            execute.call(submission);
        }
    };

    let on_confirm = Callback::new(move |_| {
        set_confirming.set(false);
        if let Some(submission) = action.with_value(|a| a.submit(|_| true)) {
            execute.call(submission);
        }
    });

    view! {
        <button
            class=format!("text-sm font-medium transition-colors disabled:opacity-50 {}", class)
            disabled=busy
            on:click=on_click
        >
            {label.clone()}
        </button>
        <ConfirmModal
            title=label
            message=prompt
            show=confirming
            on_confirm=on_confirm
            on_cancel=Callback::new(move |_| set_confirming.set(false))
            confirm_text="Yes"
            danger=true
        />
    }
}
