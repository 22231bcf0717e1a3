//! Admin screens

mod dashboard;
mod form;
mod pages;
mod posts;
mod projects;
mod resource;
mod roles;
mod taxonomies;
mod users;

pub use dashboard::DashboardPage;
pub use pages::{PageForm, PagesIndex};
pub use posts::{PostForm, PostsIndex};
pub use projects::{ProjectForm, ProjectsIndex};
pub use resource::ResourceIndex;
pub use roles::{RoleForm, RolesIndex};
pub use taxonomies::{TaxonomyForm, TaxonomyIndex};
pub use users::{UserForm, UsersIndex};
