//! Admin sidebar navigation

use folio_core::nav::{admin_navigation, Location, NavItem};
use leptos::*;

#[component]
pub fn Sidebar(location: Signal<Location>) -> impl IntoView {
    view! {
        <aside class="w-64 bg-gray-900 border-r border-gray-700 flex flex-col">
            <div class="h-16 flex items-center px-6 border-b border-gray-700">
                <a href="/admin" class="flex items-center space-x-3">
                    <svg class="w-8 h-8 text-blue-500" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                            d="M4 5a1 1 0 011-1h14a1 1 0 011 1v2a1 1 0 01-1 1H5a1 1 0 01-1-1V5zM4 13a1 1 0 011-1h6a1 1 0 011 1v6a1 1 0 01-1 1H5a1 1 0 01-1-1v-6zM16 13a1 1 0 011-1h2a1 1 0 011 1v6a1 1 0 01-1 1h-2a1 1 0 01-1-1v-6z" />
                    </svg>
                    <span class="text-xl font-bold text-white">"Folio"</span>
                </a>
            </div>

            <nav class="flex-1 px-4 py-6 space-y-6 overflow-y-auto">
                {admin_navigation().into_iter().map(|section| view! {
                    <div class="space-y-1">
                        {section.title.map(|t| view! {
                            <p class="px-4 pb-1 text-xs font-semibold uppercase tracking-wider text-gray-500">{t}</p>
                        })}
                        {section.items.into_iter().map(|item| view! {
                            <SidebarLink item=item location=location />
                        }).collect_view()}
                    </div>
                }).collect_view()}
            </nav>

            <div class="px-6 py-4 border-t border-gray-700">
                <div class="text-xs text-gray-500">
                    {format!("Folio v{}", folio_core::VERSION)}
                </div>
                <a href="/" class="text-xs text-gray-400 hover:text-white">"View site"</a>
            </div>
        </aside>
    }
}

#[component]
fn SidebarLink(item: NavItem, location: Signal<Location>) -> impl IntoView {
    let href = item.href.clone();
    let label = item.label.clone();
    let icon = icon_path(item.icon.unwrap_or(""));
    let active = move || location.with(|l| item.is_active(l));

    view! {
        <a
            href=href
            class=move || {
                let base = "flex items-center px-4 py-2 rounded-lg transition-colors";
                if active() {
                    format!("{} bg-blue-600 text-white", base)
                } else {
                    format!("{} text-gray-400 hover:bg-gray-800 hover:text-white", base)
                }
            }
        >
            <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icon />
            </svg>
            <span class="ml-3">{label}</span>
        </a>
    }
}

fn icon_path(name: &str) -> &'static str {
    match name {
        "home" => "M3 12l2-2m0 0l7-7 7 7M5 10v10a1 1 0 001 1h3m10-11l2 2m-2-2v10a1 1 0 01-1 1h-3m-6 0a1 1 0 001-1v-4a1 1 0 011-1h2a1 1 0 011 1v4a1 1 0 001 1m-6 0h6",
        "file-text" => "M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z",
        "briefcase" => "M21 13.255A23.931 23.931 0 0112 15c-3.183 0-6.22-.62-9-1.745M16 6V4a2 2 0 00-2-2h-4a2 2 0 00-2 2v2m4 6h.01M5 20h14a2 2 0 002-2V8a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z",
        "folder" => "M3 7v10a2 2 0 002 2h14a2 2 0 002-2V9a2 2 0 00-2-2h-6l-2-2H5a2 2 0 00-2 2z",
        "tag" => "M7 7h.01M7 3h5c.512 0 1.024.195 1.414.586l7 7a2 2 0 010 2.828l-7 7a2 2 0 01-2.828 0l-7-7A1.994 1.994 0 013 12V7a4 4 0 014-4z",
        "award" => "M9 12l2 2 4-4M7.835 4.697a3.42 3.42 0 001.946-.806 3.42 3.42 0 014.438 0 3.42 3.42 0 001.946.806 3.42 3.42 0 013.138 3.138 3.42 3.42 0 00.806 1.946 3.42 3.42 0 010 4.438 3.42 3.42 0 00-.806 1.946 3.42 3.42 0 01-3.138 3.138 3.42 3.42 0 00-1.946.806 3.42 3.42 0 01-4.438 0 3.42 3.42 0 00-1.946-.806 3.42 3.42 0 01-3.138-3.138 3.42 3.42 0 00-.806-1.946 3.42 3.42 0 010-4.438 3.42 3.42 0 00.806-1.946 3.42 3.42 0 013.138-3.138z",
        "layers" => "M19 11H5m14 0a2 2 0 012 2v6a2 2 0 01-2 2H5a2 2 0 01-2-2v-6a2 2 0 012-2m14 0V9a2 2 0 00-2-2M5 11V9a2 2 0 012-2m0 0V5a2 2 0 012-2h6a2 2 0 012 2v2M7 7h10",
        "users" => "M12 4.354a4 4 0 110 5.292M15 21H3v-1a6 6 0 0112 0v1zm0 0h6v-1a6 6 0 00-9-5.197M13 7a4 4 0 11-8 0 4 4 0 018 0z",
        "shield" => "M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z",
        _ => "M4 6h16M4 12h16M4 18h16",
    }
}
