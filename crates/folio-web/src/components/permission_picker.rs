//! Permission checkboxes grouped with tri-state group toggles

use folio_core::selection::{group_permissions, PermissionGroup, PermissionSelection};
use folio_core::types::Permission;
use leptos::*;

#[component]
pub fn PermissionPicker(
    permissions: Vec<Permission>,
    selection: RwSignal<PermissionSelection>,
) -> impl IntoView {
    let groups = group_permissions(&permissions);

    if groups.is_empty() {
        return view! {
            <p class="text-sm text-gray-400">"No permissions defined."</p>
        }
        .into_view();
    }

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            {groups.into_iter().map(|group| view! {
                <GroupBox group=group selection=selection />
            }).collect_view()}
        </div>
    }
    .into_view()
}

#[component]
fn GroupBox(group: PermissionGroup, selection: RwSignal<PermissionSelection>) -> impl IntoView {
    let name = group.name.clone();
    let members = group.permissions.clone();
    let group = store_value(group);
    let state = move || selection.with(|s| group.with_value(|g| s.state(g)));

    view! {
        <div class="bg-gray-750 border border-gray-700 rounded-lg p-4">
            <label class="flex items-center space-x-2 mb-3 cursor-pointer">
                <input
                    type="checkbox"
                    class="rounded"
                    prop:checked=move || state().checked()
                    prop:indeterminate=move || state().indeterminate()
                    on:change=move |_| selection.update(|s| group.with_value(|g| s.toggle_group(g)))
                />
                <span class="text-sm font-semibold text-white capitalize">{name}</span>
            </label>
            <div class="space-y-2 pl-6">
                {members.into_iter().map(|permission| {
                    let id = permission.id;
                    view! {
                        <label class="flex items-center space-x-2 cursor-pointer">
                            <input
                                type="checkbox"
                                class="rounded"
                                prop:checked=move || selection.with(|s| s.is_selected(id))
                                on:change=move |_| selection.update(|s| s.toggle(id))
                            />
                            <span class="text-sm text-gray-300">{permission.name}</span>
                        </label>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
