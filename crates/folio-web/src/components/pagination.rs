//! Page links: full list with summary, and the bounded pager

use folio_core::pagination::{PageLink, PageTemplate, PaginationView};
use leptos::*;

/// Every page number plus the "Showing x to y of z" summary
#[component]
pub fn Pagination(data: PaginationView) -> impl IntoView {
    let PaginationView { links, summary } = data;

    view! {
        <div class="flex items-center justify-between">
            <p class="text-sm text-gray-400">{summary}</p>
            <nav class="flex items-center space-x-1">
                {links.into_iter().map(|link| view! { <PageNumber link=link /> }).collect_view()}
            </nav>
        </div>
    }
}

#[component]
fn PageNumber(link: PageLink) -> impl IntoView {
    if link.active {
        view! {
            <span class="px-3 py-1 rounded bg-blue-600 text-white text-sm" aria-current="page">
                {link.number}
            </span>
        }
        .into_view()
    } else {
        view! {
            <a href=link.href class="px-3 py-1 rounded text-sm text-gray-300 hover:bg-gray-700">
                {link.number}
            </a>
        }
        .into_view()
    }
}

/// Bounded page window with First/Previous/Next/Last controls
#[component]
pub fn Pager(
    current: u32,
    total: u32,
    template: PageTemplate,
    #[prop(optional)] width: Option<u32>,
) -> impl IntoView {
    let width = width.unwrap_or_else(|| crate::api::config().page_window);
    let pager = folio_core::pagination::Pager::new(current, total, width);

    if !pager.is_visible() {
        return view! {}.into_view();
    }

    let control = |show: bool, page: u32, label: &'static str| {
        if show {
            view! {
                <a href=template.href(page) class="px-3 py-1 rounded text-sm text-gray-300 hover:bg-gray-700">
                    {label}
                </a>
            }
            .into_view()
        } else {
            view! {}.into_view()
        }
    };

    let first = control(pager.show_first(), 1, "First");
    let previous = control(pager.show_previous(), pager.previous_page(), "Previous");
    let next = control(pager.show_next(), pager.next_page(), "Next");
    let last = control(pager.show_last(), total, "Last");

    view! {
        <nav class="flex items-center justify-center space-x-1 mt-8">
            {first}
            {previous}
            {pager.links(&template).into_iter().map(|link| view! { <PageNumber link=link /> }).collect_view()}
            {next}
            {last}
        </nav>
    }
    .into_view()
}
