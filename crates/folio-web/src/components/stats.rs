//! Statistics card component

use leptos::*;

#[component]
pub fn StatCard(
    title: &'static str,
    value: String,
    #[prop(optional)] href: Option<&'static str>,
    #[prop(optional)] color: Option<&'static str>,
    #[prop(optional)] icon: Option<&'static str>,
) -> impl IntoView {
    let bg_class = match color.unwrap_or("blue") {
        "blue" => "bg-blue-600/20",
        "green" => "bg-green-600/20",
        "purple" => "bg-purple-600/20",
        "orange" => "bg-orange-600/20",
        _ => "bg-gray-600/20",
    };

    let icon_path = match icon.unwrap_or("chart") {
        "file-text" => "M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z",
        "briefcase" => "M21 13.255A23.931 23.931 0 0112 15c-3.183 0-6.22-.62-9-1.745M16 6V4a2 2 0 00-2-2h-4a2 2 0 00-2 2v2m4 6h.01M5 20h14a2 2 0 002-2V8a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z",
        "file" => "M7 21h10a2 2 0 002-2V9.414a1 1 0 00-.293-.707l-5.414-5.414A1 1 0 0012.586 3H7a2 2 0 00-2 2v14a2 2 0 002 2z",
        "users" => "M12 4.354a4 4 0 110 5.292M15 21H3v-1a6 6 0 0112 0v1zm0 0h6v-1a6 6 0 00-9-5.197M13 7a4 4 0 11-8 0 4 4 0 018 0z",
        _ => "M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z",
    };

    view! {
        <a href=href.unwrap_or("#") class="block bg-gray-800 rounded-xl p-6 border border-gray-700 hover:border-gray-600 transition-colors">
            <div class="flex items-start justify-between">
                <div>
                    <p class="text-sm font-medium text-gray-400">{title}</p>
                    <p class="text-3xl font-bold text-white mt-2">{value}</p>
                </div>
                <div class=format!("p-3 rounded-lg {}", bg_class)>
                    <div class="w-5 h-5 text-white opacity-80">
                        <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icon_path />
                        </svg>
                    </div>
                </div>
            </div>
        </a>
    }
}
