//! Generic admin list screen
//!
//! Every admin collection is a configuration of [`ResourceIndex`]: the
//! columns to show, the collection to fetch and the labels to use. Page
//! number and search term travel in the query string.

use folio_core::action::RowAction;
use folio_core::nav::Location;
use folio_core::table::{Column, Record, TableModel};
use leptos::*;
use leptos_router::use_navigate;
use serde::de::DeserializeOwned;

use crate::api;
use crate::components::{Button, ButtonVariant, DataTable, TableLoading};

/// Edit and delete actions every admin row carries
pub fn row_actions(collection: &str, key: &str) -> Vec<RowAction> {
    vec![
        RowAction::get("Edit", format!("/admin/{}/{}/edit", collection, key)),
        RowAction::delete(format!("/{}/{}", collection, key)),
    ]
}

#[component]
pub fn ResourceIndex<R>(
    title: &'static str,
    #[prop(optional)] subtitle: &'static str,
    /// API collection, also the segment under `/admin`
    collection: &'static str,
    create_label: &'static str,
    columns: Vec<Column<R>>,
    location: Signal<Location>,
    #[prop(optional)] empty_message: Option<&'static str>,
) -> impl IntoView
where
    R: Record + DeserializeOwned + Clone + 'static,
{
    let base = format!("/admin/{}", collection);
    let (version, set_version) = create_signal(0u32);
    let navigate = use_navigate();

    let mut model = TableModel::new(columns).actions(move |record: &R| row_actions(collection, &record.key()));
    if let Some(message) = empty_message {
        model = model.empty_message(message);
    }
    let model = store_value(model);

    let filter = create_memo(move |_| location.with(|l| l.list_filter()));

    let records = create_resource(
        move || (filter.get(), version.get()),
        move |(filter, _)| async move { api::list::<R>(collection, filter.page, &filter.params()).await },
    );

    let search = create_rw_signal(filter.get_untracked().search);
    let base_for_search = base.clone();
    let on_search = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let mut next = filter.get_untracked();
        next.set_search(&search.get_untracked());
        navigate(&next.href(&base_for_search), Default::default());
    };

    let create_href = format!("{}/new", base);
    let base = store_value(base);
    let navigate_create = use_navigate();
    let on_refresh = Callback::new(move |_| set_version.update(|v| *v += 1));

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold text-white">{title}</h1>
                    {(!subtitle.is_empty()).then(|| view! {
                        <p class="text-gray-400 mt-1">{subtitle}</p>
                    })}
                </div>
                <Button on_click=Callback::new(move |_| navigate_create(&create_href, Default::default()))>
                    <svg class="w-5 h-5 mr-2" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 4v16m8-8H4" />
                    </svg>
                    {create_label}
                </Button>
            </div>

            <form class="flex items-center space-x-2" on:submit=on_search>
                <input
                    type="search"
                    class="flex-1 px-4 py-2 bg-gray-800 border border-gray-700 rounded-lg text-white placeholder-gray-500 focus:outline-none focus:border-blue-500"
                    placeholder="Search..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <Button variant=ButtonVariant::Secondary submit=true>"Search"</Button>
            </form>

            <Suspense fallback=move || view! { <TableLoading /> }>
                {move || records.get().map(|result| match result {
                    Ok(page) => {
                        let template = base.with_value(|b| filter.with(|f| f.template(b)));
                        let table = model.with_value(|m| {
                            m.clone()
                                .pagination(Some(page.descriptor(template)))
                                .render(&page.data)
                        });
                        view! { <DataTable table=table on_changed=on_refresh /> }.into_view()
                    }
                    Err(e) => {
                        log::error!("Failed to load {}: {}", collection, e);
                        view! {
                            <div class="bg-gray-800 rounded-xl border border-gray-700 p-6 text-center text-red-400">
                                "Failed to load " {title.to_lowercase()} ": " {e.message}
                            </div>
                        }
                        .into_view()
                    }
                })}
            </Suspense>
        </div>
    }
}
