//! Folio Core Library
//!
//! View models and client-side logic shared by the Folio web UI and its
//! hosting server. Nothing in here touches the DOM or the network.

pub mod action;
pub mod carousel;
pub mod config;
pub mod error;
pub mod filter;
pub mod menu;
pub mod nav;
pub mod pagination;
pub mod selection;
pub mod table;
pub mod types;
pub mod upload;
pub mod utils;

pub use config::FolioConfig;
pub use error::{Error, Result};

/// Folio version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of page links shown by the bounded pager
pub const DEFAULT_PAGE_WINDOW: u32 = 5;

/// Default page size requested from list endpoints
pub const DEFAULT_PER_PAGE: u32 = 15;

/// Default maximum number of images per upload field
pub const DEFAULT_MAX_FILES: usize = 10;

/// Default maximum size of a single upload (MiB)
pub const DEFAULT_MAX_FILE_SIZE_MB: u64 = 5;

/// Default accepted MIME prefix for image uploads
pub const DEFAULT_ACCEPT: &str = "image/";
