//! Portfolio grid and project pages

use folio_core::filter::ListFilter;
use folio_core::nav::Location;
use folio_core::types::{Project, TaxonomyKind};
use leptos::*;
use leptos_meta::Title;
use leptos_router::use_params_map;

use super::{LoadFailed, Loading};
use crate::api;
use crate::components::{Gallery, Pager};

const BASE: &str = "/portfolio";

#[component]
pub fn PortfolioIndex(location: Signal<Location>) -> impl IntoView {
    let filter = create_memo(move |_| location.with(|l| l.list_filter()));

    let projects = create_resource(
        move || filter.get(),
        |filter| async move { api::public_projects(filter.page, &filter.params()).await },
    );
    let industries = create_resource(|| (), |_| async move { api::public_terms(TaxonomyKind::Industry).await });

    view! {
        <Title text="Portfolio" />
        <div class="space-y-8">
            <h1 class="text-3xl font-bold text-white">"Portfolio"</h1>

            <div class="flex flex-wrap gap-2">
                {move || industries.get().and_then(Result::ok).unwrap_or_default().into_iter().map(|industry| {
                    let mut next = filter.get();
                    let active = next.category.as_deref() == Some(industry.slug.as_str());
                    next.toggle_category(&industry.slug);
                    let class = if active {
                        "px-3 py-1 rounded-full text-sm bg-blue-600 text-white"
                    } else {
                        "px-3 py-1 rounded-full text-sm bg-gray-800 text-gray-300 hover:bg-gray-700"
                    };
                    view! { <a href=next.href(BASE) class=class>{industry.name}</a> }
                }).collect_view()}
            </div>

            <Suspense fallback=move || view! { <Loading /> }>
                {move || projects.get().map(|result| match result {
                    Ok(page) if page.is_empty() => view! {
                        <p class="py-16 text-center text-gray-400">"No projects to show yet."</p>
                    }
                    .into_view(),
                    Ok(page) => {
                        let template = filter.with(|f| f.template(BASE));
                        view! {
                            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                                {page.data.into_iter().map(|project| view! { <ProjectCard project=project /> }).collect_view()}
                            </div>
                            <Pager current=page.current_page total=page.last_page template=template />
                        }
                        .into_view()
                    }
                    Err(e) => view! { <LoadFailed error=e what="projects" /> }.into_view(),
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let href = format!("{}/{}", BASE, project.slug);
    let cover = project.cover().map(String::from);

    view! {
        <a href=href class="group block bg-gray-800 rounded-xl border border-gray-700 overflow-hidden hover:border-gray-600">
            {match cover {
                Some(src) => view! {
                    <img src=src alt=project.title.clone() class="w-full h-56 object-cover group-hover:scale-105 transition-transform" />
                }
                .into_view(),
                None => view! { <div class="w-full h-56 bg-gray-700" /> }.into_view(),
            }}
            <div class="p-5">
                <h2 class="text-lg font-semibold text-white group-hover:text-blue-400">{project.title.clone()}</h2>
                <p class="text-sm text-gray-400 mt-1">
                    {[project.client.clone(), project.year.map(|y| y.to_string())]
                        .into_iter()
                        .flatten()
                        .collect::<Vec<_>>()
                        .join(" · ")}
                </p>
            </div>
        </a>
    }
}

#[component]
pub fn ProjectDetail() -> impl IntoView {
    let params = use_params_map();
    let slug = create_memo(move |_| params.with(|p| p.get("slug").cloned().unwrap_or_default()));
    let project = create_resource(move || slug.get(), |slug| async move { api::public_project(&slug).await });

    view! {
        <Suspense fallback=move || view! { <Loading /> }>
            {move || project.get().map(|result| match result {
                Ok(project) => {
                    let facts = [
                        ("Client", project.client.clone()),
                        ("Year", project.year.map(|y| y.to_string())),
                        ("Branding", project.branding.as_ref().map(|b| b.name.clone())),
                        ("Industry", project.industry.as_ref().map(|i| i.name.clone())),
                    ];
                    let industry_href = project
                        .industry
                        .as_ref()
                        .map(|i| ListFilter::from_query([("category", i.slug.as_str())]).href(BASE));

                    view! {
                        <Title text=project.title.clone() />
                        <article class="space-y-8">
                            <a href=BASE class="text-sm text-gray-400 hover:text-white">"← All projects"</a>
                            <div>
                                <h1 class="text-4xl font-bold text-white">{project.title.clone()}</h1>
                                {project.summary.clone().map(|s| view! { <p class="text-lg text-gray-400 mt-2">{s}</p> })}
                            </div>
                            <dl class="grid grid-cols-2 md:grid-cols-4 gap-4">
                                {facts.into_iter().filter_map(|(label, value)| value.map(|v| view! {
                                    <div>
                                        <dt class="text-xs uppercase text-gray-500">{label}</dt>
                                        <dd class="text-white">{v}</dd>
                                    </div>
                                })).collect_view()}
                            </dl>
                            <div class="prose prose-invert max-w-none" inner_html=project.description.clone()></div>
                            <Gallery images=project.images.clone() alt=project.title.clone() />
                            {industry_href.map(|href| view! {
                                <a href=href class="inline-block text-blue-400 hover:text-blue-300">"More work in this industry"</a>
                            })}
                        </article>
                    }
                    .into_view()
                }
                Err(e) => view! { <LoadFailed error=e what="project" /> }.into_view(),
            })}
        </Suspense>
    }
}
