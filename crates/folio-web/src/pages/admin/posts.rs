//! Blog post list and editor

use folio_core::nav::Location;
use folio_core::table::{Cell, Column};
use folio_core::types::{Post, PostInput, PublishStatus, TaxonomyKind};
use folio_core::upload::UploadPolicy;
use folio_core::utils::{format_short_date, slugify};
use leptos::*;

use super::form::{id_options, optional, parse_id, use_record_id, FormPage, FormState};
use super::ResourceIndex;
use crate::api;
use crate::components::{FormField, ImageUpload, Select, TextArea, TextInput, UploadHandle};

const COLLECTION: &str = "posts";

fn columns() -> Vec<Column<Post>> {
    vec![
        Column::derived("Cover", |p: &Post| match &p.cover_image {
            Some(src) => Cell::image(src.clone(), p.title.clone()),
            None => Cell::Empty,
        }),
        Column::field("Title", "title"),
        Column::field("Category", "category.name"),
        Column::field("Tags", "tags"),
        Column::derived("Status", |p: &Post| Cell::badge(p.status.label(), p.status.tone())),
        Column::derived("Published", |p: &Post| {
            Cell::from_option(p.published_at.as_ref().map(format_short_date))
        }),
    ]
}

#[component]
pub fn PostsIndex(location: Signal<Location>) -> impl IntoView {
    view! {
        <ResourceIndex
            title="Posts"
            subtitle="Articles published on the blog"
            collection=COLLECTION
            create_label="New Post"
            columns=columns()
            location=location
            empty_message="No posts yet."
        />
    }
}

pub(super) fn status_options() -> Vec<(String, String)> {
    PublishStatus::all()
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect()
}

#[component]
pub fn PostForm() -> impl IntoView {
    let id = use_record_id();
    let state = store_value(FormState::new("/admin/posts"));
    let errors = state.with_value(|s| s.errors);

    let title = create_rw_signal(String::new());
    let slug = create_rw_signal(String::new());
    let slug_edited = create_rw_signal(false);
    let excerpt = create_rw_signal(String::new());
    let body = create_rw_signal(String::new());
    let status = create_rw_signal(PublishStatus::Draft.as_str().to_string());
    let category = create_rw_signal(String::new());
    let tag_ids = create_rw_signal(Vec::<u64>::new());

    let cover = UploadHandle::new(UploadPolicy {
        max_files: 1,
        ..api::config().uploads
    });

    let record = create_resource(
        move || id.get(),
        |id| async move {
            match id {
                Some(id) => api::fetch::<Post>(COLLECTION, id).await.map(Some),
                None => Ok(None),
            }
        },
    );
    let categories = create_resource(|| (), |_| async move { api::taxonomy_options(TaxonomyKind::Category).await });
    let tags = create_resource(|| (), |_| async move { api::taxonomy_options(TaxonomyKind::Tag).await });

    create_effect(move |_| {
        if let Some(Ok(Some(post))) = record.get() {
            let input = PostInput::from(&post);
            title.set(input.title);
            slug.set(input.slug);
            slug_edited.set(true);
            excerpt.set(input.excerpt.unwrap_or_default());
            body.set(input.body);
            status.set(input.status.as_str().to_string());
            category.set(input.category_id.map(|c| c.to_string()).unwrap_or_default());
            tag_ids.set(input.tag_ids);
            cover.reset(post.cover_image.into_iter().collect());
        }
    });

    // Follow the title until the slug is edited by hand
    create_effect(move |_| {
        let title = title.get();
        if !slug_edited.get_untracked() {
            slug.set(slugify(&title));
        }
    });

    let load_error = Signal::derive(move || match record.get() {
        Some(Err(e)) => Some(format!("Could not load post: {}", e.message)),
        _ => None,
    });

    let category_options = Signal::derive(move || {
        categories
            .get()
            .and_then(Result::ok)
            .map(|list| id_options(list.iter().map(|c| (c.id, c.name.as_str()))))
            .unwrap_or_default()
    });

    let on_submit = Callback::new(move |_| {
        let input = PostInput {
            title: title.get_untracked(),
            slug: slug.get_untracked(),
            excerpt: optional(excerpt.get_untracked()),
            body: body.get_untracked(),
            status: status.get_untracked().parse().unwrap_or_default(),
            category_id: parse_id(&category.get_untracked()),
            tag_ids: tag_ids.get_untracked(),
            removed_images: cover.removed_existing(),
        };
        let files = cover.files();
        let id = id.get_untracked();
        state.with_value(|s| {
            s.submit(async move { api::save_with_images(COLLECTION, id, &input, files).await })
        });
    });

    let heading = Signal::derive(move || {
        let label = if id.get().is_some() { "Edit Post" } else { "New Post" };
        label.to_string()
    });

    view! {
        <FormPage title=heading state=state load_error=load_error on_submit=on_submit>
            <FormField label="Title" name="title" errors=errors>
                <TextInput value=title placeholder="Post title" />
            </FormField>
            <FormField label="Slug" name="slug" errors=errors hint="Used in the post URL">
                <input
                    type="text"
                    class="w-full px-4 py-3 bg-gray-700 border border-gray-600 rounded-lg text-white focus:outline-none focus:border-blue-500"
                    prop:value=move || slug.get()
                    on:input=move |ev| {
                        slug_edited.set(true);
                        slug.set(event_target_value(&ev));
                    }
                />
            </FormField>
            <FormField label="Excerpt" name="excerpt" errors=errors>
                <TextArea value=excerpt rows=2 />
            </FormField>
            <FormField label="Body" name="body" errors=errors hint="HTML is allowed">
                <TextArea value=body rows=12 />
            </FormField>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <FormField label="Status" name="status" errors=errors>
                    <Select value=status options=Signal::derive(status_options) />
                </FormField>
                <FormField label="Category" name="category_id" errors=errors>
                    <Select value=category options=category_options empty_label="No category" />
                </FormField>
            </div>
            <FormField label="Tags" name="tag_ids" errors=errors>
                <div class="flex flex-wrap gap-3">
                    {move || tags.get().and_then(Result::ok).unwrap_or_default().into_iter().map(|tag| {
                        let tag_id = tag.id;
                        view! {
                            <label class="flex items-center space-x-2 text-sm text-gray-300">
                                <input
                                    type="checkbox"
                                    class="rounded bg-gray-700 border-gray-600"
                                    prop:checked=move || tag_ids.with(|ids| ids.contains(&tag_id))
                                    on:change=move |_| tag_ids.update(|ids| {
                                        if let Some(pos) = ids.iter().position(|t| *t == tag_id) {
                                            ids.remove(pos);
                                        } else {
                                            ids.push(tag_id);
                                        }
                                    })
                                />
                                <span>{tag.name}</span>
                            </label>
                        }
                    }).collect_view()}
                </div>
            </FormField>
            <FormField label="Cover image" name="images" errors=errors>
                <ImageUpload handle=cover single=true />
            </FormField>
        </FormPage>
    }
}
