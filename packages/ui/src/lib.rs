//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const CONSOLE_CSS: Asset = asset!("/assets/console.css");

mod clipboard;
pub use clipboard::{copy_to_clipboard, ClipboardError};

mod config;
pub use config::load_app_config;

mod pager;
pub use pager::{page_size_options, Pager};

mod toast;
pub use toast::{use_toasts, ToastContainer, ToastProvider, Toasts};

mod user_form;
pub use user_form::UserForm;

/// Platform-appropriate async sleep.
pub(crate) async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}
