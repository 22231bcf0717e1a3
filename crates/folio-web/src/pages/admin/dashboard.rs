//! Dashboard with content counters and recent posts

use folio_core::table::{Cell, Column, TableModel};
use folio_core::types::Post;
use folio_core::utils::format_short_date;
use leptos::*;

use crate::api;
use crate::components::{DataTable, StatCard};

fn recent_columns() -> Vec<Column<Post>> {
    vec![
        Column::derived("Title", |p: &Post| {
            Cell::link(p.title.clone(), format!("/admin/posts/{}/edit", p.id))
        }),
        Column::derived("Status", |p: &Post| Cell::badge(p.status.label(), p.status.tone())),
        Column::derived("Published", |p: &Post| {
            Cell::from_option(p.published_at.as_ref().map(format_short_date))
        }),
    ]
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (version, set_version) = create_signal(0u32);
    let stats = create_resource(move || version.get(), |_| async move { api::get_dashboard_stats().await });
    let model = store_value(TableModel::new(recent_columns()).empty_message("Nothing written yet."));

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-white">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Overview of your site"</p>
            </div>

            <Suspense fallback=move || view! { <StatsSkeleton /> }>
                {move || stats.get().map(|result| match result {
                    Ok(s) => {
                        let recent = model.with_value(|m| m.render(&s.recent_posts));
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                                <StatCard title="Posts" value=s.posts.to_string() href="/admin/posts" icon="file-text" color="blue" />
                                <StatCard title="Projects" value=s.projects.to_string() href="/admin/projects" icon="briefcase" color="green" />
                                <StatCard title="Pages" value=s.pages.to_string() href="/admin/pages" icon="file" color="purple" />
                                <StatCard title="Users" value=s.users.to_string() href="/admin/users" icon="users" color="orange" />
                            </div>
                            <div class="space-y-3">
                                <h2 class="text-lg font-semibold text-white">"Recent posts"</h2>
                                <DataTable table=recent on_changed=move |_| set_version.update(|v| *v += 1) />
                            </div>
                        }
                        .into_view()
                    }
                    Err(e) => {
                        log::error!("Failed to load dashboard stats: {}", e);
                        view! {
                            <div class="text-center text-red-400">"Failed to load dashboard stats"</div>
                        }
                        .into_view()
                    }
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn StatsSkeleton() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
            {(0..4).map(|_| view! {
                <div class="bg-gray-800 rounded-xl p-6 border border-gray-700 animate-pulse">
                    <div class="h-4 bg-gray-700 rounded w-1/2 mb-4"></div>
                    <div class="h-8 bg-gray-700 rounded w-1/3"></div>
                </div>
            }).collect_view()}
        </div>
    }
}
