use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Yes/no confirmation shown before a destructive action.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Confirm".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            div {
                class: "dialog",
                h3 { "{title}" }
                p { "{message}" }
                div {
                    class: "form-actions",
                    button {
                        class: "danger",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                    button {
                        class: "secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}

/// Single-line text prompt. Submits the raw input; validation is the caller's.
#[component]
pub fn PromptDialog(
    title: String,
    message: String,
    default_value: String,
    on_submit: EventHandler<String>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut value = use_signal(move || default_value);

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            form {
                class: "dialog",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(value());
                },
                h3 { "{title}" }
                label {
                    r#for: "prompt-input",
                    "{message}"
                }
                input {
                    id: "prompt-input",
                    r#type: "text",
                    autofocus: true,
                    value: "{value}",
                    oninput: move |evt| value.set(evt.value()),
                }
                div {
                    class: "form-actions",
                    button { class: "primary", r#type: "submit", "OK" }
                    button {
                        class: "secondary",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
