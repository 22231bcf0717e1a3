//! Public site screens

mod blog;
mod home;
mod portfolio;
mod static_page;

pub use blog::{BlogIndex, PostDetail};
pub use home::HomePage;
pub use portfolio::{PortfolioIndex, ProjectDetail};
pub use static_page::StaticPageView;

use leptos::*;

use crate::api::ApiError;
use crate::pages::NotFoundPage;

/// Placeholder while a public resource loads
#[component]
fn Loading() -> impl IntoView {
    view! {
        <div class="py-16 text-center text-gray-400 animate-pulse">"Loading..."</div>
    }
}

/// Message for a failed public fetch; 404s read as missing content
#[component]
fn LoadFailed(error: ApiError, #[prop(optional)] what: &'static str) -> impl IntoView {
    if error.is_not_found() {
        return view! { <NotFoundPage /> }.into_view();
    }
    log::error!("Failed to load {}: {}", what, error);
    view! {
        <div class="py-16 text-center text-red-400">
            "Something went wrong while loading this page."
        </div>
    }
    .into_view()
}
