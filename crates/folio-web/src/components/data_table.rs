//! Data table rendering a [`RenderedTable`] from the core table model

use folio_core::table::{Cell, RenderedRow, RenderedTable, TableBody};
use leptos::*;

use super::{ActionButton, Pagination};

/// Headers, rows (or the empty row) and pagination of a list screen.
///
/// `on_changed` fires after a row action modified data on the backend.
#[component]
pub fn DataTable(table: RenderedTable, #[prop(into)] on_changed: Callback<()>) -> impl IntoView {
    let RenderedTable {
        headers,
        body,
        pagination,
    } = table;

    let rows = match body {
        TableBody::Empty { message, colspan } => view! {
            <tr>
                <td colspan=colspan.to_string() class="px-4 py-8 text-center text-gray-400">
                    {message}
                </td>
            </tr>
        }
        .into_view(),
        TableBody::Rows(rows) => rows
            .into_iter()
            .map(|row| view! { <Row row=row on_changed=on_changed /> })
            .collect_view(),
    };

    view! {
        <div class="bg-gray-800 rounded-xl border border-gray-700 overflow-hidden">
            <div class="overflow-x-auto">
                <table class="w-full">
                    <thead>
                        <tr class="border-b border-gray-700">
                            {headers.into_iter().map(|h| view! {
                                <th class="px-4 py-3 text-left text-xs font-medium text-gray-400 uppercase tracking-wider">
                                    {h}
                                </th>
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-700">
                        {rows}
                    </tbody>
                </table>
            </div>
            {pagination.map(|data| view! {
                <div class="px-4 py-3 border-t border-gray-700">
                    <Pagination data=data />
                </div>
            })}
        </div>
    }
}

#[component]
fn Row(row: RenderedRow, on_changed: Callback<()>) -> impl IntoView {
    let RenderedRow { key, cells, actions } = row;

    view! {
        <tr class="hover:bg-gray-750 transition-colors" data-key=key>
            {cells.into_iter().map(|cell| view! {
                <td class="px-4 py-3 text-sm text-gray-300">
                    <CellView cell=cell />
                </td>
            }).collect_view()}
            {actions.map(|actions| view! {
                <td class="px-4 py-3 text-sm">
                    <div class="flex items-center space-x-2">
                        {actions.into_iter().map(|action| view! {
                            <ActionButton action=action on_done=on_changed />
                        }).collect_view()}
                    </div>
                </td>
            })}
        </tr>
    }
}

#[component]
pub fn CellView(cell: Cell) -> impl IntoView {
    match cell {
        Cell::Text(text) => view! { <span>{text}</span> }.into_view(),
        Cell::Badge { text, tone } => view! {
            <span class=format!("px-2 py-1 text-xs rounded {}", tone.class())>{text}</span>
        }
        .into_view(),
        Cell::Image { src, alt } => view! {
            <img src=src alt=alt class="w-12 h-12 object-cover rounded" />
        }
        .into_view(),
        Cell::Link { text, href } => view! {
            <a href=href class="text-blue-400 hover:text-blue-300">{text}</a>
        }
        .into_view(),
        Cell::Empty => view! { <span class="text-gray-600">"—"</span> }.into_view(),
    }
}

/// Loading state component
#[component]
pub fn TableLoading() -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl border border-gray-700 px-4 py-8">
            <div class="flex items-center justify-center space-x-2">
                <svg class="animate-spin h-5 w-5 text-blue-500" fill="none" viewBox="0 0 24 24">
                    <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                    <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"></path>
                </svg>
                <span class="text-gray-400">"Loading..."</span>
            </div>
        </div>
    }
}
