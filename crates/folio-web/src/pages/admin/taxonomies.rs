//! Categories, tags, brandings and industries share one list and one editor

use folio_core::nav::Location;
use folio_core::table::{Cell, Column};
use folio_core::types::{Taxonomy, TaxonomyInput, TaxonomyKind};
use folio_core::utils::slugify;
use leptos::*;

use super::form::{optional, use_record_id, FormPage, FormState};
use super::ResourceIndex;
use crate::api;
use crate::components::{FormField, TextArea, TextInput};

fn columns(kind: TaxonomyKind) -> Vec<Column<Taxonomy>> {
    vec![
        Column::field("Name", "name"),
        Column::field("Slug", "slug"),
        Column::field("Description", "description"),
        Column::derived(kind.items_label(), |t: &Taxonomy| {
            Cell::text(t.items_count.unwrap_or(0).to_string())
        }),
    ]
}

#[component]
pub fn TaxonomyIndex(kind: TaxonomyKind, location: Signal<Location>) -> impl IntoView {
    let create_label = match kind {
        TaxonomyKind::Category => "New Category",
        TaxonomyKind::Tag => "New Tag",
        TaxonomyKind::Branding => "New Branding",
        TaxonomyKind::Industry => "New Industry",
    };

    view! {
        <ResourceIndex
            title=kind.plural()
            collection=kind.collection()
            create_label=create_label
            columns=columns(kind)
            location=location
        />
    }
}

#[component]
pub fn TaxonomyForm(kind: TaxonomyKind) -> impl IntoView {
    let collection = kind.collection();
    let id = use_record_id();
    let state = store_value(FormState::new(format!("/admin/{}", collection)));
    let errors = state.with_value(|s| s.errors);

    let name = create_rw_signal(String::new());
    let slug = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());

    let record = create_resource(
        move || id.get(),
        move |id| async move {
            match id {
                Some(id) => api::fetch::<Taxonomy>(collection, id).await.map(Some),
                None => Ok(None),
            }
        },
    );

    create_effect(move |_| {
        if let Some(Ok(Some(term))) = record.get() {
            let input = TaxonomyInput::from(&term);
            name.set(input.name);
            slug.set(input.slug);
            description.set(input.description.unwrap_or_default());
        }
    });

    let load_error = Signal::derive(move || match record.get() {
        Some(Err(e)) => Some(format!("Could not load {}: {}", kind.singular().to_lowercase(), e.message)),
        _ => None,
    });

    let on_submit = Callback::new(move |_| {
        let name = name.get_untracked();
        let slug = match slug.get_untracked() {
            s if s.trim().is_empty() => slugify(&name),
            s => s,
        };
        let input = TaxonomyInput {
            name,
            slug,
            description: optional(description.get_untracked()),
        };
        let id = id.get_untracked();
        state.with_value(|s| s.submit(async move { api::save(collection, id, &input).await }));
    });

    let heading = Signal::derive(move || {
        let verb = if id.get().is_some() { "Edit" } else { "New" };
        format!("{} {}", verb, kind.singular())
    });

    view! {
        <FormPage title=heading state=state load_error=load_error on_submit=on_submit>
            <FormField label="Name" name="name" errors=errors>
                <TextInput value=name />
            </FormField>
            <FormField label="Slug" name="slug" errors=errors hint="Derived from the name when left empty">
                <TextInput value=slug />
            </FormField>
            <FormField label="Description" name="description" errors=errors>
                <TextArea value=description rows=3 />
            </FormField>
        </FormPage>
    }
}
