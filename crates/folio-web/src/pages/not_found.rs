//! 404 Not Found page

use leptos::*;

#[component]
pub fn NotFoundPage(#[prop(optional)] admin: bool) -> impl IntoView {
    let (home, label) = if admin {
        ("/admin", "Back to Dashboard")
    } else {
        ("/", "Back to Home")
    };

    view! {
        <div class="min-h-[60vh] flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-white mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold text-gray-300 mb-2">"Page Not Found"</h2>
                <p class="text-gray-400 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>
                <a href=home class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg transition-colors">
                    {label}
                </a>
            </div>
        </div>
    }
}
