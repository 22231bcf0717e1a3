//! User accounts

use folio_core::nav::Location;
use folio_core::table::{Cell, Column, Tone};
use folio_core::types::{User, UserInput};
use folio_core::utils::format_short_date;
use leptos::*;

use super::form::{optional, use_record_id, FormPage, FormState};
use super::ResourceIndex;
use crate::api;
use crate::components::{FormField, TextInput};

const COLLECTION: &str = "users";

fn columns() -> Vec<Column<User>> {
    vec![
        Column::field("Name", "name"),
        Column::derived("Email", |u: &User| Cell::link(u.email.clone(), format!("mailto:{}", u.email))),
        Column::derived("Roles", |u: &User| {
            if u.roles.is_empty() {
                Cell::badge("No role", Tone::Warning)
            } else {
                Cell::text(u.roles.join(", "))
            }
        }),
        Column::derived("Joined", |u: &User| {
            Cell::from_option(u.created_at.as_ref().map(format_short_date))
        }),
    ]
}

#[component]
pub fn UsersIndex(location: Signal<Location>) -> impl IntoView {
    view! {
        <ResourceIndex
            title="Users"
            subtitle="People who can sign in to the admin"
            collection=COLLECTION
            create_label="New User"
            columns=columns()
            location=location
        />
    }
}

#[component]
pub fn UserForm() -> impl IntoView {
    let id = use_record_id();
    let state = store_value(FormState::new("/admin/users"));
    let errors = state.with_value(|s| s.errors);

    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let roles = create_rw_signal(Vec::<String>::new());

    let record = create_resource(
        move || id.get(),
        |id| async move {
            match id {
                Some(id) => api::fetch::<User>(COLLECTION, id).await.map(Some),
                None => Ok(None),
            }
        },
    );
    let role_options = create_resource(|| (), |_| async move { api::role_options().await });

    create_effect(move |_| {
        if let Some(Ok(Some(user))) = record.get() {
            let input = UserInput::from(&user);
            name.set(input.name);
            email.set(input.email);
            roles.set(input.roles);
        }
    });

    let load_error = Signal::derive(move || match record.get() {
        Some(Err(e)) => Some(format!("Could not load user: {}", e.message)),
        _ => None,
    });

    let on_submit = Callback::new(move |_| {
        let input = UserInput {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: optional(password.get_untracked()),
            roles: roles.get_untracked(),
        };
        let id = id.get_untracked();
        state.with_value(|s| s.submit(async move { api::save(COLLECTION, id, &input).await }));
    });

    let editing = Signal::derive(move || id.get().is_some());
    let heading = Signal::derive(move || {
        let label = if editing.get() { "Edit User" } else { "New User" };
        label.to_string()
    });

    view! {
        <FormPage title=heading state=state load_error=load_error on_submit=on_submit>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <FormField label="Name" name="name" errors=errors>
                    <TextInput value=name />
                </FormField>
                <FormField label="Email" name="email" errors=errors>
                    <TextInput value=email kind="email" />
                </FormField>
            </div>
            <FormField label="Password" name="password" errors=errors>
                <TextInput value=password kind="password" />
                {move || editing.get().then(|| view! {
                    <p class="text-sm text-gray-400 mt-2">"Leave empty to keep the current password"</p>
                })}
            </FormField>
            <FormField label="Roles" name="roles" errors=errors>
                <div class="flex flex-wrap gap-3">
                    {move || role_options.get().and_then(Result::ok).unwrap_or_default().into_iter().map(|role| {
                        let role_name = store_value(role.name.clone());
                        view! {
                            <label class="flex items-center space-x-2 text-sm text-gray-300">
                                <input
                                    type="checkbox"
                                    class="rounded bg-gray-700 border-gray-600"
                                    prop:checked=move || role_name.with_value(|n| roles.with(|r| r.contains(n)))
                                    on:change=move |_| role_name.with_value(|n| roles.update(|r| {
                                        if let Some(pos) = r.iter().position(|x| x == n) {
                                            r.remove(pos);
                                        } else {
                                            r.push(n.clone());
                                        }
                                    }))
                                />
                                <span>{role.name}</span>
                            </label>
                        }
                    }).collect_view()}
                </div>
            </FormField>
        </FormPage>
    }
}
