//! Portfolio project list and editor

use folio_core::nav::Location;
use folio_core::table::{Cell, Column};
use folio_core::types::{Project, ProjectInput, PublishStatus, TaxonomyKind};
use folio_core::utils::slugify;
use leptos::*;

use super::form::{id_options, optional, parse_id, use_record_id, FormPage, FormState};
use super::posts::status_options;
use super::ResourceIndex;
use crate::api;
use crate::components::{FormField, ImageUpload, Select, TextArea, TextInput, UploadHandle};

const COLLECTION: &str = "projects";

fn columns() -> Vec<Column<Project>> {
    vec![
        Column::derived("Cover", |p: &Project| match p.cover() {
            Some(src) => Cell::image(src, p.title.clone()),
            None => Cell::Empty,
        }),
        Column::field("Title", "title"),
        Column::field("Client", "client"),
        Column::field("Year", "year"),
        Column::field("Branding", "branding.name"),
        Column::field("Industry", "industry.name"),
        Column::derived("Images", |p: &Project| Cell::text(p.images.len().to_string())),
        Column::derived("Status", |p: &Project| Cell::badge(p.status.label(), p.status.tone())),
    ]
}

#[component]
pub fn ProjectsIndex(location: Signal<Location>) -> impl IntoView {
    view! {
        <ResourceIndex
            title="Projects"
            subtitle="Work shown in the portfolio"
            collection=COLLECTION
            create_label="New Project"
            columns=columns()
            location=location
            empty_message="No projects yet."
        />
    }
}

#[component]
pub fn ProjectForm() -> impl IntoView {
    let id = use_record_id();
    let state = store_value(FormState::new("/admin/projects"));
    let errors = state.with_value(|s| s.errors);

    let title = create_rw_signal(String::new());
    let slug = create_rw_signal(String::new());
    let summary = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let client = create_rw_signal(String::new());
    let year = create_rw_signal(String::new());
    let status = create_rw_signal(PublishStatus::Draft.as_str().to_string());
    let branding = create_rw_signal(String::new());
    let industry = create_rw_signal(String::new());

    let images = UploadHandle::new(api::config().uploads);

    let record = create_resource(
        move || id.get(),
        |id| async move {
            match id {
                Some(id) => api::fetch::<Project>(COLLECTION, id).await.map(Some),
                None => Ok(None),
            }
        },
    );
    let brandings = create_resource(|| (), |_| async move { api::taxonomy_options(TaxonomyKind::Branding).await });
    let industries = create_resource(|| (), |_| async move { api::taxonomy_options(TaxonomyKind::Industry).await });

    create_effect(move |_| {
        if let Some(Ok(Some(project))) = record.get() {
            let input = ProjectInput::from(&project);
            title.set(input.title);
            slug.set(input.slug);
            summary.set(input.summary.unwrap_or_default());
            description.set(input.description);
            client.set(input.client.unwrap_or_default());
            year.set(input.year.map(|y| y.to_string()).unwrap_or_default());
            status.set(input.status.as_str().to_string());
            branding.set(input.branding_id.map(|b| b.to_string()).unwrap_or_default());
            industry.set(input.industry_id.map(|i| i.to_string()).unwrap_or_default());
            images.reset(project.images);
        }
    });

    let load_error = Signal::derive(move || match record.get() {
        Some(Err(e)) => Some(format!("Could not load project: {}", e.message)),
        _ => None,
    });

    let options_of = |kind: Resource<(), Result<Vec<folio_core::types::Taxonomy>, api::ApiError>>| {
        Signal::derive(move || {
            kind.get()
                .and_then(Result::ok)
                .map(|list| id_options(list.iter().map(|t| (t.id, t.name.as_str()))))
                .unwrap_or_default()
        })
    };
    let branding_options = options_of(brandings);
    let industry_options = options_of(industries);

    let on_submit = Callback::new(move |_| {
        let input = ProjectInput {
            title: title.get_untracked(),
            slug: {
                let slug = slug.get_untracked();
                if slug.trim().is_empty() {
                    slugify(&title.get_untracked())
                } else {
                    slug
                }
            },
            summary: optional(summary.get_untracked()),
            description: description.get_untracked(),
            client: optional(client.get_untracked()),
            year: year.get_untracked().trim().parse::<u16>().ok(),
            status: status.get_untracked().parse().unwrap_or_default(),
            branding_id: parse_id(&branding.get_untracked()),
            industry_id: parse_id(&industry.get_untracked()),
            removed_images: images.removed_existing(),
        };
        let files = images.files();
        let id = id.get_untracked();
        state.with_value(|s| {
            s.submit(async move { api::save_with_images(COLLECTION, id, &input, files).await })
        });
    });

    let heading = Signal::derive(move || {
        let label = if id.get().is_some() { "Edit Project" } else { "New Project" };
        label.to_string()
    });

    view! {
        <FormPage title=heading state=state load_error=load_error on_submit=on_submit>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <FormField label="Title" name="title" errors=errors>
                    <TextInput value=title placeholder="Project title" />
                </FormField>
                <FormField label="Slug" name="slug" errors=errors hint="Derived from the title when left empty">
                    <TextInput value=slug />
                </FormField>
            </div>
            <FormField label="Summary" name="summary" errors=errors>
                <TextArea value=summary rows=2 />
            </FormField>
            <FormField label="Description" name="description" errors=errors hint="HTML is allowed">
                <TextArea value=description rows=10 />
            </FormField>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <FormField label="Client" name="client" errors=errors>
                    <TextInput value=client />
                </FormField>
                <FormField label="Year" name="year" errors=errors>
                    <TextInput value=year kind="number" />
                </FormField>
                <FormField label="Status" name="status" errors=errors>
                    <Select value=status options=Signal::derive(status_options) />
                </FormField>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <FormField label="Branding" name="branding_id" errors=errors>
                    <Select value=branding options=branding_options empty_label="None" />
                </FormField>
                <FormField label="Industry" name="industry_id" errors=errors>
                    <Select value=industry options=industry_options empty_label="None" />
                </FormField>
            </div>
            <FormField label="Images" name="images" errors=errors>
                <ImageUpload handle=images />
            </FormField>
        </FormPage>
    }
}
