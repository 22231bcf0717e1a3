//! Main application component with routing

use folio_core::nav::{public_navigation, Location};
use folio_core::types::TaxonomyKind;
use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{use_location, Outlet, Route, Router, Routes};

use crate::components::{Flash, FlashMessage, Header, Sidebar};
use crate::pages::admin::{
    DashboardPage, PageForm, PagesIndex, PostForm, PostsIndex, ProjectForm, ProjectsIndex,
    RoleForm, RolesIndex, TaxonomyForm, TaxonomyIndex, UserForm, UsersIndex,
};
use crate::pages::public::{BlogIndex, HomePage, PortfolioIndex, PostDetail, ProjectDetail, StaticPageView};
use crate::pages::NotFoundPage;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title formatter=|text| format!("{} · Folio", text) />
        <Router>
            <Shell />
        </Router>
    }
}

/// Reads the router location once and hands it to every screen that needs it
#[component]
fn Shell() -> impl IntoView {
    let router_location = use_location();
    let location: Signal<Location> = create_memo(move |_| {
        Location::new(router_location.pathname.get()).with_query(router_location.search.get())
    })
    .into();

    view! {
        <div class="min-h-screen bg-gray-900 text-gray-100">
            <Routes>
                <Route path="/admin" view=move || view! { <AdminLayout location=location /> }>
                    <Route path="" view=DashboardPage />
                    <Route path="posts" view=move || view! { <PostsIndex location=location /> } />
                    <Route path="posts/new" view=PostForm />
                    <Route path="posts/:id/edit" view=PostForm />
                    <Route path="projects" view=move || view! { <ProjectsIndex location=location /> } />
                    <Route path="projects/new" view=ProjectForm />
                    <Route path="projects/:id/edit" view=ProjectForm />
                    <Route path="categories" view=move || view! { <TaxonomyIndex kind=TaxonomyKind::Category location=location /> } />
                    <Route path="categories/new" view=|| view! { <TaxonomyForm kind=TaxonomyKind::Category /> } />
                    <Route path="categories/:id/edit" view=|| view! { <TaxonomyForm kind=TaxonomyKind::Category /> } />
                    <Route path="tags" view=move || view! { <TaxonomyIndex kind=TaxonomyKind::Tag location=location /> } />
                    <Route path="tags/new" view=|| view! { <TaxonomyForm kind=TaxonomyKind::Tag /> } />
                    <Route path="tags/:id/edit" view=|| view! { <TaxonomyForm kind=TaxonomyKind::Tag /> } />
                    <Route path="brandings" view=move || view! { <TaxonomyIndex kind=TaxonomyKind::Branding location=location /> } />
                    <Route path="brandings/new" view=|| view! { <TaxonomyForm kind=TaxonomyKind::Branding /> } />
                    <Route path="brandings/:id/edit" view=|| view! { <TaxonomyForm kind=TaxonomyKind::Branding /> } />
                    <Route path="industries" view=move || view! { <TaxonomyIndex kind=TaxonomyKind::Industry location=location /> } />
                    <Route path="industries/new" view=|| view! { <TaxonomyForm kind=TaxonomyKind::Industry /> } />
                    <Route path="industries/:id/edit" view=|| view! { <TaxonomyForm kind=TaxonomyKind::Industry /> } />
                    <Route path="pages" view=move || view! { <PagesIndex location=location /> } />
                    <Route path="pages/new" view=PageForm />
                    <Route path="pages/:id/edit" view=PageForm />
                    <Route path="users" view=move || view! { <UsersIndex location=location /> } />
                    <Route path="users/new" view=UserForm />
                    <Route path="users/:id/edit" view=UserForm />
                    <Route path="roles" view=move || view! { <RolesIndex location=location /> } />
                    <Route path="roles/new" view=RoleForm />
                    <Route path="roles/:id/edit" view=RoleForm />
                    <Route path="/*any" view=|| view! { <NotFoundPage admin=true /> } />
                </Route>
                <Route path="/" view=move || view! { <PublicLayout location=location /> }>
                    <Route path="" view=HomePage />
                    <Route path="blog" view=move || view! { <BlogIndex location=location /> } />
                    <Route path="blog/:slug" view=PostDetail />
                    <Route path="portfolio" view=move || view! { <PortfolioIndex location=location /> } />
                    <Route path="portfolio/:slug" view=ProjectDetail />
                    <Route path="p/:slug" view=StaticPageView />
                    <Route path="/*any" view=|| view! { <NotFoundPage /> } />
                </Route>
            </Routes>
        </div>
    }
}

/// Sidebar, header and flash slot around the admin screens
#[component]
fn AdminLayout(location: Signal<Location>) -> impl IntoView {
    let flash = Flash::new();
    provide_context(flash);

    view! {
        <div class="flex h-screen">
            <Sidebar location=location />
            <div class="flex-1 flex flex-col overflow-hidden">
                <Header location=location />
                <main class="flex-1 overflow-y-auto p-6 bg-gray-800">
                    <Outlet />
                </main>
            </div>
            <FlashMessage flash=flash />
        </div>
    }
}

/// Top navigation and footer around the public pages
#[component]
fn PublicLayout(location: Signal<Location>) -> impl IntoView {
    let year = chrono::Utc::now().format("%Y").to_string();

    view! {
        <header class="border-b border-gray-800">
            <nav class="max-w-6xl mx-auto px-6 py-4 flex items-center justify-between">
                <a href="/" class="text-xl font-bold text-white">"Folio"</a>
                <div class="flex items-center space-x-6">
                    {public_navigation().into_iter().map(|item| {
                        let active_item = item.clone();
                        let class = move || {
                            if location.with(|l| active_item.is_active(l)) {
                                "text-white font-medium"
                            } else {
                                "text-gray-400 hover:text-white"
                            }
                        };
                        view! { <a href=item.href class=class>{item.label}</a> }
                    }).collect_view()}
                </div>
            </nav>
        </header>
        <main class="max-w-6xl mx-auto px-6 py-10">
            <Outlet />
        </main>
        <footer class="border-t border-gray-800 py-8 text-center text-sm text-gray-500">
            "© " {year} " Folio"
        </footer>
    }
}
