//! Static pages under `/p/:slug`

use leptos::*;
use leptos_meta::Title;
use leptos_router::use_params_map;

use super::{LoadFailed, Loading};
use crate::api;

#[component]
pub fn StaticPageView() -> impl IntoView {
    let params = use_params_map();
    let slug = create_memo(move |_| params.with(|p| p.get("slug").cloned().unwrap_or_default()));
    let page = create_resource(move || slug.get(), |slug| async move { api::public_page(&slug).await });

    view! {
        <Suspense fallback=move || view! { <Loading /> }>
            {move || page.get().map(|result| match result {
                Ok(page) => view! {
                    <Title text=page.title.clone() />
                    <article class="max-w-3xl mx-auto space-y-6">
                        <h1 class="text-4xl font-bold text-white">{page.title.clone()}</h1>
                        <div class="prose prose-invert max-w-none" inner_html=page.body></div>
                    </article>
                }
                .into_view(),
                Err(e) => view! { <LoadFailed error=e what="page" /> }.into_view(),
            })}
        </Suspense>
    }
}
