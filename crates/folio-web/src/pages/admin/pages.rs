//! Static page list and editor

use folio_core::nav::Location;
use folio_core::table::{Cell, Column};
use folio_core::types::{PublishStatus, StaticPage, StaticPageInput};
use folio_core::utils::{format_short_date, slugify};
use leptos::*;

use super::form::{use_record_id, FormPage, FormState};
use super::posts::status_options;
use super::ResourceIndex;
use crate::api;
use crate::components::{FormField, Select, TextArea, TextInput};

const COLLECTION: &str = "pages";

fn columns() -> Vec<Column<StaticPage>> {
    vec![
        Column::field("Title", "title"),
        Column::derived("Address", |p: &StaticPage| {
            let href = format!("/p/{}", p.slug);
            Cell::link(href.clone(), href)
        }),
        Column::derived("Status", |p: &StaticPage| Cell::badge(p.status.label(), p.status.tone())),
        Column::derived("Updated", |p: &StaticPage| {
            Cell::from_option(p.updated_at.as_ref().map(format_short_date))
        }),
    ]
}

#[component]
pub fn PagesIndex(location: Signal<Location>) -> impl IntoView {
    view! {
        <ResourceIndex
            title="Pages"
            subtitle="Standalone pages such as About or Contact"
            collection=COLLECTION
            create_label="New Page"
            columns=columns()
            location=location
        />
    }
}

#[component]
pub fn PageForm() -> impl IntoView {
    let id = use_record_id();
    let state = store_value(FormState::new("/admin/pages"));
    let errors = state.with_value(|s| s.errors);

    let title = create_rw_signal(String::new());
    let slug = create_rw_signal(String::new());
    let body = create_rw_signal(String::new());
    let status = create_rw_signal(PublishStatus::Draft.as_str().to_string());

    let record = create_resource(
        move || id.get(),
        |id| async move {
            match id {
                Some(id) => api::fetch::<StaticPage>(COLLECTION, id).await.map(Some),
                None => Ok(None),
            }
        },
    );

    create_effect(move |_| {
        if let Some(Ok(Some(page))) = record.get() {
            let input = StaticPageInput::from(&page);
            title.set(input.title);
            slug.set(input.slug);
            body.set(input.body);
            status.set(input.status.as_str().to_string());
        }
    });

    let load_error = Signal::derive(move || match record.get() {
        Some(Err(e)) => Some(format!("Could not load page: {}", e.message)),
        _ => None,
    });

    let on_submit = Callback::new(move |_| {
        let title = title.get_untracked();
        let slug = match slug.get_untracked() {
            s if s.trim().is_empty() => slugify(&title),
            s => s,
        };
        let input = StaticPageInput {
            title,
            slug,
            body: body.get_untracked(),
            status: status.get_untracked().parse().unwrap_or_default(),
        };
        let id = id.get_untracked();
        state.with_value(|s| s.submit(async move { api::save(COLLECTION, id, &input).await }));
    });

    let heading = Signal::derive(move || {
        let label = if id.get().is_some() { "Edit Page" } else { "New Page" };
        label.to_string()
    });

    view! {
        <FormPage title=heading state=state load_error=load_error on_submit=on_submit>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <FormField label="Title" name="title" errors=errors>
                    <TextInput value=title />
                </FormField>
                <FormField label="Slug" name="slug" errors=errors hint="Published at /p/<slug>">
                    <TextInput value=slug />
                </FormField>
            </div>
            <FormField label="Body" name="body" errors=errors hint="HTML is allowed">
                <TextArea value=body rows=16 />
            </FormField>
            <FormField label="Status" name="status" errors=errors>
                <Select value=status options=Signal::derive(status_options) />
            </FormField>
        </FormPage>
    }
}
