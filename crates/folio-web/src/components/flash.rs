//! Transient status messages shown after an action

use gloo_timers::callback::Timeout;
use leptos::*;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub text: String,
    pub error: bool,
}

/// Handle to the layout's flash slot
#[derive(Clone, Copy)]
pub struct Flash {
    notice: RwSignal<Option<Notice>>,
}

impl Flash {
    pub fn new() -> Self {
        Self {
            notice: create_rw_signal(None),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(text.into(), false);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(text.into(), true);
    }

    pub fn clear(&self) {
        self.notice.set(None);
    }

    fn show(&self, text: String, error: bool) {
        let notice = Notice { text, error };
        self.notice.set(Some(notice.clone()));

        let slot = self.notice;
        Timeout::new(DISMISS_AFTER_MS, move || {
            // A newer message keeps its own timer
            if slot.get_untracked().as_ref() == Some(&notice) {
                slot.set(None);
            }
        })
        .forget();
    }
}

impl Default for Flash {
    fn default() -> Self {
        Self::new()
    }
}

/// The flash handle provided by the enclosing layout
pub fn use_flash() -> Flash {
    use_context::<Flash>().unwrap_or_default()
}

#[component]
pub fn FlashMessage(flash: Flash) -> impl IntoView {
    view! {
        {move || flash.notice.get().map(|notice| {
            let class = if notice.error {
                "bg-red-900/50 border-red-500 text-red-200"
            } else {
                "bg-green-900/50 border-green-500 text-green-200"
            };
            view! {
                <div class=format!("fixed top-4 right-4 z-50 border px-4 py-3 rounded-lg shadow-lg flex items-center space-x-3 {}", class)>
                    <span>{notice.text}</span>
                    <button class="opacity-70 hover:opacity-100" on:click=move |_| flash.clear()>"×"</button>
                </div>
            }
        })}
    }
}
