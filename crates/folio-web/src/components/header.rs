//! Admin header with the quick-create and user dropdowns

use folio_core::menu::Dropdown;
use folio_core::nav::{admin_navigation, Location};
use leptos::*;

use crate::api;

const CREATE_MENU: &str = "create";
const USER_MENU: &str = "user";

#[component]
pub fn Header(location: Signal<Location>) -> impl IntoView {
    let menus = create_rw_signal(Dropdown::default());
    let user = create_resource(|| (), |_| async move { api::current_user().await });

    // Route changes close whatever is open
    create_effect(move |_| {
        location.track();
        menus.update(Dropdown::close_all);
    });

    let title = move || {
        location.with(|l| {
            admin_navigation()
                .into_iter()
                .flat_map(|s| s.items)
                .find(|i| i.is_active(l))
                .map(|i| i.label)
                .unwrap_or_else(|| "Admin".to_string())
        })
    };

    let on_logout = move |_| {
        spawn_local(async move {
            if let Err(e) = api::logout().await {
                log::warn!("Logout failed: {}", e);
            }
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        });
    };

    let user_name = move || {
        user.get()
            .and_then(|r| r.ok())
            .map(|u| u.name)
            .unwrap_or_else(|| "Admin".to_string())
    };
    let user_initial = move || {
        user.get()
            .and_then(|r| r.ok())
            .map(|u| u.initial())
            .unwrap_or_else(|| "A".to_string())
    };

    view! {
        <header class="h-16 bg-gray-900 border-b border-gray-700 flex items-center justify-between px-6">
            <h2 class="text-lg font-semibold text-white">{title}</h2>

            // Outside click closes the open menu
            {move || menus.with(|m| m.open_menu().is_some()).then(|| view! {
                <div class="fixed inset-0 z-40" on:click=move |_| menus.update(Dropdown::close_all) />
            })}

            <div class="flex items-center space-x-4">
                <div class="relative z-50">
                    <button
                        class="px-3 py-2 bg-blue-600 hover:bg-blue-700 text-white text-sm rounded-lg transition-colors"
                        on:click=move |_| menus.update(|m| m.toggle(CREATE_MENU))
                    >
                        "+ New"
                    </button>
                    {move || menus.with(|m| m.is_open(CREATE_MENU)).then(|| view! {
                        <div class="absolute right-0 mt-2 w-48 bg-gray-800 rounded-lg shadow-lg border border-gray-700 py-1">
                            <a href="/admin/posts/new" class="block px-4 py-2 text-sm text-gray-300 hover:bg-gray-700">"Post"</a>
                            <a href="/admin/projects/new" class="block px-4 py-2 text-sm text-gray-300 hover:bg-gray-700">"Project"</a>
                            <a href="/admin/pages/new" class="block px-4 py-2 text-sm text-gray-300 hover:bg-gray-700">"Page"</a>
                        </div>
                    })}
                </div>

                <div class="relative z-50">
                    <button
                        class="flex items-center space-x-3 p-2 rounded-lg hover:bg-gray-800 transition-colors"
                        on:click=move |_| menus.update(|m| m.toggle(USER_MENU))
                    >
                        <div class="w-8 h-8 bg-blue-600 rounded-full flex items-center justify-center">
                            <span class="text-sm font-medium text-white">{user_initial}</span>
                        </div>
                        <span class="text-sm text-gray-300">{user_name}</span>
                        <svg class="w-4 h-4 text-gray-400" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 9l-7 7-7-7" />
                        </svg>
                    </button>

                    {move || menus.with(|m| m.is_open(USER_MENU)).then(|| view! {
                        <div class="absolute right-0 mt-2 w-48 bg-gray-800 rounded-lg shadow-lg border border-gray-700 py-1">
                            <a href="/" class="block px-4 py-2 text-sm text-gray-300 hover:bg-gray-700">
                                "View Site"
                            </a>
                            <hr class="my-1 border-gray-700" />
                            <button
                                class="block w-full text-left px-4 py-2 text-sm text-red-400 hover:bg-gray-700"
                                on:click=on_logout
                            >
                                "Sign Out"
                            </button>
                        </div>
                    })}
                </div>
            </div>
        </header>
    }
}
