//! Landing page: latest projects and posts

use folio_core::types::Post;
use folio_core::utils::format_date;
use leptos::*;
use leptos_meta::Title;

use super::Loading;
use crate::api;

const FEATURED: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let projects = create_resource(|| (), |_| async move { api::public_projects(1, &[]).await });
    let posts = create_resource(|| (), |_| async move { api::public_posts(1, &[]).await });

    view! {
        <Title text="Home" />
        <div class="space-y-16">
            <section class="py-12">
                <h1 class="text-5xl font-bold text-white mb-4">"Design and engineering work"</h1>
                <p class="text-xl text-gray-400 max-w-2xl">
                    "Selected projects, notes from the studio and the occasional long read."
                </p>
                <div class="flex space-x-4 mt-8">
                    <a href="/portfolio" class="px-5 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg">"See the portfolio"</a>
                    <a href="/blog" class="px-5 py-3 bg-gray-800 hover:bg-gray-700 text-white rounded-lg">"Read the blog"</a>
                </div>
            </section>

            <section class="space-y-6">
                <h2 class="text-2xl font-semibold text-white">"Recent projects"</h2>
                <Suspense fallback=move || view! { <Loading /> }>
                    {move || projects.get().map(|result| {
                        let projects = result.map(|p| p.data).unwrap_or_else(|e| {
                            log::warn!("Featured projects unavailable: {}", e);
                            Vec::new()
                        });
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                                {projects.into_iter().take(FEATURED).map(|project| {
                                    let href = format!("/portfolio/{}", project.slug);
                                    view! {
                                        <a href=href class="block rounded-xl overflow-hidden bg-gray-800 border border-gray-700 hover:border-gray-600">
                                            {project.cover().map(|src| view! {
                                                <img src=src.to_string() alt=project.title.clone() class="w-full h-48 object-cover" />
                                            })}
                                            <p class="p-4 text-white font-medium">{project.title.clone()}</p>
                                        </a>
                                    }
                                }).collect_view()}
                            </div>
                        }
                    })}
                </Suspense>
            </section>

            <section class="space-y-6">
                <h2 class="text-2xl font-semibold text-white">"Latest writing"</h2>
                <Suspense fallback=move || view! { <Loading /> }>
                    {move || posts.get().map(|result| {
                        let posts: Vec<Post> = result.map(|p| p.data).unwrap_or_default();
                        view! {
                            <ul class="divide-y divide-gray-800">
                                {posts.into_iter().take(FEATURED).map(|post| view! {
                                    <li class="py-4 flex items-baseline justify-between">
                                        <a href=format!("/blog/{}", post.slug) class="text-lg text-white hover:text-blue-400">
                                            {post.title.clone()}
                                        </a>
                                        <span class="text-sm text-gray-500">{post.published_at.as_ref().map(format_date)}</span>
                                    </li>
                                }).collect_view()}
                            </ul>
                        }
                    })}
                </Suspense>
            </section>
        </div>
    }
}
