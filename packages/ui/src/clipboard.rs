//! System clipboard access.

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard is not available on this platform")]
    Unavailable,
    #[error("clipboard write was rejected: {0}")]
    Write(String),
}

/// Write `text` to the system clipboard.
#[cfg(target_arch = "wasm32")]
pub async fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| ClipboardError::Write(format!("{e:?}")))?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn copy_to_clipboard(_text: &str) -> Result<(), ClipboardError> {
    Err(ClipboardError::Unavailable)
}
