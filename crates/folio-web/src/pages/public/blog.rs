//! Blog listing with tag filter, and single posts

use folio_core::filter::ListFilter;
use folio_core::nav::Location;
use folio_core::types::{Post, TaxonomyKind};
use folio_core::utils::{format_date, strip_html, truncate};
use leptos::*;
use leptos_meta::Title;
use leptos_router::use_params_map;

use super::{LoadFailed, Loading};
use crate::api;
use crate::components::Pager;

const BASE: &str = "/blog";
const EXCERPT_CHARS: usize = 180;

#[component]
pub fn BlogIndex(location: Signal<Location>) -> impl IntoView {
    let filter = create_memo(move |_| location.with(|l| l.list_filter()));

    let posts = create_resource(
        move || filter.get(),
        |filter| async move { api::public_posts(filter.page, &filter.params()).await },
    );
    let tags = create_resource(|| (), |_| async move { api::public_terms(TaxonomyKind::Tag).await });

    view! {
        <Title text="Blog" />
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold text-white">"Blog"</h1>
                {move || filter.with(|f| f.tag.clone()).map(|tag| view! {
                    <p class="text-gray-400 mt-2">
                        "Posts tagged " <span class="text-blue-400">{tag}</span> " · "
                        <a href=BASE class="underline hover:text-white">"show all"</a>
                    </p>
                })}
            </div>

            <div class="flex flex-wrap gap-2">
                {move || tags.get().and_then(Result::ok).unwrap_or_default().into_iter().map(|tag| {
                    let current = filter.get();
                    let active = current.tag.as_deref() == Some(tag.slug.as_str());
                    let href = toggled(current, &tag.slug);
                    let class = if active {
                        "px-3 py-1 rounded-full text-sm bg-blue-600 text-white"
                    } else {
                        "px-3 py-1 rounded-full text-sm bg-gray-800 text-gray-300 hover:bg-gray-700"
                    };
                    view! { <a href=href class=class>{tag.name}</a> }
                }).collect_view()}
            </div>

            <Suspense fallback=move || view! { <Loading /> }>
                {move || posts.get().map(|result| match result {
                    Ok(page) if page.is_empty() => view! {
                        <p class="py-16 text-center text-gray-400">"No posts found."</p>
                    }
                    .into_view(),
                    Ok(page) => {
                        let template = filter.with(|f| f.template(BASE));
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                {page.data.into_iter().map(|post| view! { <PostCard post=post /> }).collect_view()}
                            </div>
                            <Pager current=page.current_page total=page.last_page template=template />
                        }
                        .into_view()
                    }
                    Err(e) => view! { <LoadFailed error=e what="posts" /> }.into_view(),
                })}
            </Suspense>
        </div>
    }
}

/// Link that selects `slug`, or clears it when already selected
fn toggled(mut filter: ListFilter, slug: &str) -> String {
    filter.toggle_tag(slug);
    filter.href(BASE)
}

#[component]
fn PostCard(post: Post) -> impl IntoView {
    let href = format!("{}/{}", BASE, post.slug);
    let summary = post
        .excerpt
        .clone()
        .unwrap_or_else(|| truncate(&strip_html(&post.body), EXCERPT_CHARS));

    view! {
        <article class="bg-gray-800 rounded-xl border border-gray-700 overflow-hidden hover:border-gray-600 transition-colors">
            {post.cover_image.clone().map(|src| view! {
                <a href=href.clone()>
                    <img src=src alt=post.title.clone() class="w-full h-48 object-cover" />
                </a>
            })}
            <div class="p-6 space-y-3">
                <div class="flex items-center space-x-3 text-xs text-gray-400">
                    {post.published_at.as_ref().map(format_date)}
                    {post.category.as_ref().map(|c| view! {
                        <span class="px-2 py-0.5 rounded bg-gray-700 text-gray-300">{c.name.clone()}</span>
                    })}
                </div>
                <h2 class="text-xl font-semibold text-white">
                    <a href=href class="hover:text-blue-400">{post.title.clone()}</a>
                </h2>
                <p class="text-gray-400">{summary}</p>
            </div>
        </article>
    }
}

#[component]
pub fn PostDetail() -> impl IntoView {
    let params = use_params_map();
    let slug = create_memo(move |_| params.with(|p| p.get("slug").cloned().unwrap_or_default()));
    let post = create_resource(move || slug.get(), |slug| async move { api::public_post(&slug).await });

    view! {
        <Suspense fallback=move || view! { <Loading /> }>
            {move || post.get().map(|result| match result {
                Ok(post) => view! {
                    <Title text=post.title.clone() />
                    <article class="max-w-3xl mx-auto space-y-6">
                        <a href=BASE class="text-sm text-gray-400 hover:text-white">"← All posts"</a>
                        <h1 class="text-4xl font-bold text-white">{post.title.clone()}</h1>
                        <div class="flex items-center space-x-3 text-sm text-gray-400">
                            {post.published_at.as_ref().map(format_date)}
                            {post.author.clone().map(|a| view! { <span>"by " {a}</span> })}
                        </div>
                        {post.cover_image.clone().map(|src| view! {
                            <img src=src alt=post.title.clone() class="w-full rounded-xl" />
                        })}
                        <div class="prose prose-invert max-w-none" inner_html=post.body.clone()></div>
                        <div class="flex flex-wrap gap-2 pt-6 border-t border-gray-800">
                            {post.tags.iter().map(|tag| {
                                let href = ListFilter::from_query([("tag", tag.slug.as_str())]).href(BASE);
                                view! {
                                    <a href=href class="px-3 py-1 rounded-full text-sm bg-gray-800 text-gray-300 hover:bg-gray-700">
                                        "#" {tag.name.clone()}
                                    </a>
                                }
                            }).collect_view()}
                        </div>
                    </article>
                }
                .into_view(),
                Err(e) => view! { <LoadFailed error=e what="post" /> }.into_view(),
            })}
        </Suspense>
    }
}
