//! Toast notifications: a context-provided [`ToastQueue`] and the container
//! that renders it.

use dioxus::prelude::*;
use store::{Toast, ToastId, ToastKind, ToastQueue};

use crate::icons::FaXmark;
use crate::Icon;

/// Handle to the shared toast queue. Cheap to copy into handlers and tasks.
///
/// When toasts are disabled by configuration every notify call is dropped.
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    queue: Signal<ToastQueue>,
    enabled: bool,
}

impl Toasts {
    pub fn show(&self, kind: ToastKind, title: &str, message: &str, duration_ms: Option<u32>) {
        if !self.enabled {
            return;
        }
        let mut queue = self.queue;
        queue.write().show(kind, title, message, duration_ms);
    }

    pub fn success(&self, title: &str, message: &str) {
        self.show(ToastKind::Success, title, message, None);
    }

    pub fn error(&self, title: &str, message: &str) {
        self.show(ToastKind::Error, title, message, None);
    }

    pub fn info(&self, title: &str, message: &str) {
        self.show(ToastKind::Info, title, message, None);
    }

    pub fn warning(&self, title: &str, message: &str) {
        self.show(ToastKind::Warning, title, message, None);
    }

    pub fn dismiss(&self, id: ToastId) {
        let mut queue = self.queue;
        queue.write().remove(id);
    }

    pub fn clear(&self) {
        let mut queue = self.queue;
        queue.write().clear();
    }

    pub fn entries(&self) -> Vec<Toast> {
        self.queue.read().entries().to_vec()
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

/// Owns the toast queue for everything below it and renders the container
/// on top of the page.
#[component]
pub fn ToastProvider(#[props(default = true)] enabled: bool, children: Element) -> Element {
    let queue = use_signal(ToastQueue::new);
    use_context_provider(|| Toasts { queue, enabled });

    rsx! {
        {children}
        if enabled {
            ToastContainer {}
        }
    }
}

#[component]
pub fn ToastContainer() -> Element {
    let toasts = use_toasts();
    let entries = toasts.entries();

    rsx! {
        div {
            class: "toast-container",
            for toast in entries {
                ToastItem { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

/// A single toast. Its expiry timer is tied to this component, so a toast
/// dismissed by hand takes its timer down with it.
#[component]
fn ToastItem(toast: Toast) -> Element {
    let toasts = use_toasts();
    let id = toast.id;
    let duration_ms = toast.duration_ms;
    let class = format!("toast toast-{}", toast.kind.as_str());
    let icon = toast.kind.icon();
    let role = if toast.kind == ToastKind::Error { "alert" } else { "status" };

    use_hook(move || {
        spawn(async move {
            crate::sleep_ms(duration_ms).await;
            toasts.dismiss(id);
        });
    });

    rsx! {
        div {
            class: "{class}",
            role: role,
            div {
                class: "toast-content",
                div { class: "toast-icon", "{icon}" }
                div {
                    class: "toast-text",
                    div { class: "toast-title", "{toast.title}" }
                    div { class: "toast-message", "{toast.message}" }
                }
                button {
                    class: "toast-close",
                    title: "Dismiss",
                    onclick: move |_| toasts.dismiss(id),
                    Icon { icon: FaXmark, width: 12, height: 12 }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::time::Duration;

    thread_local! {
        static HANDLE: Cell<Option<Toasts>> = const { Cell::new(None) };
    }

    #[component]
    fn Harness(enabled: bool, duration_ms: u32) -> Element {
        rsx! {
            ToastProvider { enabled, Notifier { duration_ms } }
        }
    }

    #[component]
    fn Notifier(duration_ms: u32) -> Element {
        let toasts = use_toasts();
        use_hook(move || {
            toasts.show(ToastKind::Info, "Saved", "All changes stored", Some(duration_ms));
            HANDLE.with(|h| h.set(Some(toasts)));
        });
        rsx! {}
    }

    fn mount(enabled: bool, duration_ms: u32) -> (VirtualDom, Toasts) {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                enabled,
                duration_ms,
            },
        );
        dom.rebuild_in_place();
        let toasts = HANDLE.with(|h| h.get()).expect("notifier mounted");
        (dom, toasts)
    }

    /// Drive timers and re-renders until nothing is left to do for `ms`.
    async fn settle(dom: &mut VirtualDom, ms: u64) {
        let deadline = tokio::time::Instant::now() + Duration::from_millis(ms);
        while tokio::time::timeout_at(deadline, dom.wait_for_work())
            .await
            .is_ok()
        {
            dom.render_immediate_to_vec();
        }
    }

    #[tokio::test]
    async fn test_toast_expires_after_its_duration() {
        let (mut dom, toasts) = mount(true, 20);
        assert_eq!(dom.in_runtime(|| toasts.entries().len()), 1);

        settle(&mut dom, 300).await;
        assert!(dom.in_runtime(|| toasts.entries().is_empty()));
    }

    #[tokio::test]
    async fn test_dismissed_toast_survives_its_timer_firing() {
        let (mut dom, toasts) = mount(true, 20);
        dom.in_runtime(|| {
            let id = toasts.entries()[0].id;
            toasts.dismiss(id);
            toasts.info("Next", "Still here");
        });

        settle(&mut dom, 300).await;
        let left = dom.in_runtime(|| toasts.entries());
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].title, "Next");
    }

    #[tokio::test]
    async fn test_disabled_provider_drops_notifications() {
        let (mut dom, toasts) = mount(false, 20);
        assert!(dom.in_runtime(|| toasts.entries().is_empty()));

        dom.in_runtime(|| toasts.error("Load Failed", "Failed to load users."));
        settle(&mut dom, 50).await;
        assert!(dom.in_runtime(|| toasts.entries().is_empty()));
    }
}
