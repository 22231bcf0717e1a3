//! Roles and their permissions

use folio_core::nav::Location;
use folio_core::selection::PermissionSelection;
use folio_core::table::{Cell, Column};
use folio_core::types::{Role, RoleInput};
use leptos::*;

use super::form::{use_record_id, FormPage, FormState};
use super::ResourceIndex;
use crate::api;
use crate::components::{FormField, PermissionPicker, TextInput};

const COLLECTION: &str = "roles";

fn columns() -> Vec<Column<Role>> {
    vec![
        Column::field("Name", "name"),
        Column::derived("Permissions", |r: &Role| Cell::text(r.permissions.len().to_string())),
        Column::derived("Users", |r: &Role| {
            Cell::from_option(r.users_count.map(|c| c.to_string()))
        }),
    ]
}

#[component]
pub fn RolesIndex(location: Signal<Location>) -> impl IntoView {
    view! {
        <ResourceIndex
            title="Roles"
            subtitle="Named sets of permissions"
            collection=COLLECTION
            create_label="New Role"
            columns=columns()
            location=location
        />
    }
}

#[component]
pub fn RoleForm() -> impl IntoView {
    let id = use_record_id();
    let state = store_value(FormState::new("/admin/roles"));
    let errors = state.with_value(|s| s.errors);

    let name = create_rw_signal(String::new());
    let selection = create_rw_signal(PermissionSelection::default());

    let record = create_resource(
        move || id.get(),
        |id| async move {
            match id {
                Some(id) => api::fetch::<Role>(COLLECTION, id).await.map(Some),
                None => Ok(None),
            }
        },
    );
    let permissions = create_resource(|| (), |_| async move { api::list_permissions().await });

    create_effect(move |_| {
        if let Some(Ok(Some(role))) = record.get() {
            name.set(role.name.clone());
            selection.set(PermissionSelection::new(role.permission_ids()));
        }
    });

    let load_error = Signal::derive(move || match record.get() {
        Some(Err(e)) => Some(format!("Could not load role: {}", e.message)),
        _ => None,
    });

    let on_submit = Callback::new(move |_| {
        let input = RoleInput {
            name: name.get_untracked(),
            permissions: selection.with_untracked(|s| s.ids()),
        };
        let id = id.get_untracked();
        state.with_value(|s| s.submit(async move { api::save(COLLECTION, id, &input).await }));
    });

    let heading = Signal::derive(move || {
        let label = if id.get().is_some() { "Edit Role" } else { "New Role" };
        label.to_string()
    });

    view! {
        <FormPage title=heading state=state load_error=load_error on_submit=on_submit>
            <FormField label="Name" name="name" errors=errors>
                <TextInput value=name placeholder="editor" />
            </FormField>
            <FormField label="Permissions" name="permissions" errors=errors>
                <p class="text-sm text-gray-400 mb-3">
                    {move || format!("{} selected", selection.with(|s| s.len()))}
                </p>
                <Suspense fallback=move || view! { <p class="text-gray-400">"Loading permissions..."</p> }>
                    {move || permissions.get().map(|result| match result {
                        Ok(list) => view! {
                            <PermissionPicker permissions=list selection=selection />
                        }
                        .into_view(),
                        Err(e) => view! {
                            <p class="text-red-400">"Failed to load permissions: " {e.message}</p>
                        }
                        .into_view(),
                    })}
                </Suspense>
            </FormField>
        </FormPage>
    }
}
