//! # Store crate — client-side state for the user console
//!
//! Everything here is pure and platform independent: the record model, the
//! filter/search, pagination and export engines, the toast queue, the
//! derived view state that ties them together, and the configuration model.
//! The UI crate wraps these types in signals; the API crate moves [`User`]
//! records over HTTP.

pub mod config;
pub mod export;
pub mod filter;
pub mod models;
pub mod pagination;
pub mod state;
pub mod toast;

pub use config::{AppConfig, ConfigError, FeatureFlags};
pub use filter::UserFilter;
pub use models::{User, ViewMode};
pub use pagination::Pagination;
pub use state::UserListState;
pub use toast::{Toast, ToastId, ToastKind, ToastQueue};
