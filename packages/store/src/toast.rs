//! # Toast notification queue
//!
//! [`ToastQueue`] owns every live notification in insertion order. Identifiers
//! come from a counter that only ever grows, so no two entries ever share one.
//! Expiry timing is not driven from here: the presentation layer schedules a
//! [`ToastQueue::remove`] after [`Toast::duration_ms`], and because removal is
//! idempotent a timer firing after a manual dismissal is harmless.

use serde::{Deserialize, Serialize};

pub type ToastId = u64;

/// Severity of a toast. Determines its styling and default lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

impl ToastKind {
    /// Display time used when the caller does not pass one.
    pub fn default_duration_ms(&self) -> u32 {
        match self {
            ToastKind::Error => 6000,
            ToastKind::Warning => 5000,
            ToastKind::Success | ToastKind::Info => 4000,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
            ToastKind::Warning => "warning",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✗",
            ToastKind::Info => "ℹ",
            ToastKind::Warning => "⚠",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    pub duration_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastQueue {
    entries: Vec<Toast>,
    next_id: ToastId,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a toast and return it. `duration_ms` falls back to the kind's default.
    pub fn show(
        &mut self,
        kind: ToastKind,
        title: impl Into<String>,
        message: impl Into<String>,
        duration_ms: Option<u32>,
    ) -> Toast {
        let toast = Toast {
            id: self.next_id,
            kind,
            title: title.into(),
            message: message.into(),
            duration_ms: duration_ms.unwrap_or_else(|| kind.default_duration_ms()),
        };
        self.next_id += 1;
        self.entries.push(toast.clone());
        toast
    }

    pub fn success(&mut self, title: impl Into<String>, message: impl Into<String>) -> Toast {
        self.show(ToastKind::Success, title, message, None)
    }

    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) -> Toast {
        self.show(ToastKind::Error, title, message, None)
    }

    pub fn info(&mut self, title: impl Into<String>, message: impl Into<String>) -> Toast {
        self.show(ToastKind::Info, title, message, None)
    }

    pub fn warning(&mut self, title: impl Into<String>, message: impl Into<String>) -> Toast {
        self.show(ToastKind::Warning, title, message, None)
    }

    /// Drop the toast with `id`. Returns false when it was already gone.
    pub fn remove(&mut self, id: ToastId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|t| t.id != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Live toasts, oldest first.
    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_durations() {
        let mut q = ToastQueue::new();
        assert_eq!(q.success("a", "b").duration_ms, 4000);
        assert_eq!(q.info("a", "b").duration_ms, 4000);
        assert_eq!(q.warning("a", "b").duration_ms, 5000);
        assert_eq!(q.error("a", "b").duration_ms, 6000);
        assert_eq!(q.show(ToastKind::Error, "a", "b", Some(1500)).duration_ms, 1500);
    }

    #[test]
    fn test_ids_increase_and_order_is_kept() {
        let mut q = ToastQueue::new();
        let first = q.success("Saved", "one");
        let second = q.error("Failed", "two");
        let third = q.info("Note", "three");
        assert!(first.id < second.id && second.id < third.id);

        let titles: Vec<_> = q.entries().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Saved", "Failed", "Note"]);
    }

    #[test]
    fn test_ids_are_not_reused_after_removal() {
        let mut q = ToastQueue::new();
        let first = q.success("a", "b");
        q.remove(first.id);
        q.clear();
        let next = q.success("c", "d");
        assert!(next.id > first.id);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut q = ToastQueue::new();
        let toast = q.warning("Careful", "msg");
        q.info("Other", "msg");

        assert!(q.remove(toast.id));
        assert!(!q.remove(toast.id));
        assert!(!q.remove(999));
        assert_eq!(q.len(), 1);
        assert_eq!(q.entries()[0].title, "Other");
    }

    #[test]
    fn test_clear() {
        let mut q = ToastQueue::new();
        q.success("a", "b");
        q.error("c", "d");
        q.clear();
        assert!(q.is_empty());
    }
}
