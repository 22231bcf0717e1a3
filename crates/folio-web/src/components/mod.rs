//! Reusable UI components

mod action_button;
mod button;
mod carousel;
mod data_table;
mod flash;
mod form_field;
mod header;
mod image_upload;
mod modal;
mod pagination;
mod permission_picker;
mod sidebar;
mod stats;

pub use action_button::ActionButton;
pub use button::{Button, ButtonVariant};
pub use carousel::{CarouselModal, Gallery};
pub use data_table::{CellView, DataTable, TableLoading};
pub use flash::{use_flash, Flash, FlashMessage};
pub use form_field::{FormErrors, FormField, Select, TextArea, TextInput};
pub use header::Header;
pub use image_upload::{ImageUpload, UploadHandle};
pub use modal::{ConfirmModal, Modal};
pub use pagination::{Pager, Pagination};
pub use permission_picker::PermissionPicker;
pub use sidebar::Sidebar;
pub use stats::StatCard;
