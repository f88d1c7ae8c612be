use dioxus::prelude::*;
use store::User;

/// Create/edit form for a single user. Submits the edited copy of `initial`.
#[component]
pub fn UserForm(
    initial: User,
    editing: bool,
    on_save: EventHandler<User>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut draft = use_signal(move || initial);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_save.call(draft());
    };

    rsx! {
        form {
            class: "user-form",
            onsubmit: handle_submit,
            h2 { if editing { "Edit User" } else { "Create User" } }

            div {
                class: "form-grid",
                FormField {
                    id: "user-first-name",
                    label: "First name",
                    value: draft.read().first_name.clone(),
                    oninput: move |v: String| draft.write().first_name = v,
                }
                FormField {
                    id: "user-last-name",
                    label: "Last name",
                    value: draft.read().last_name.clone(),
                    oninput: move |v: String| draft.write().last_name = v,
                }
                FormField {
                    id: "user-email",
                    label: "Email",
                    input_type: "email",
                    value: draft.read().email.clone(),
                    oninput: move |v: String| draft.write().email = v,
                }
                FormField {
                    id: "user-phone",
                    label: "Phone",
                    input_type: "tel",
                    value: draft.read().phone.clone(),
                    oninput: move |v: String| draft.write().phone = v,
                }
                FormField {
                    id: "user-address",
                    label: "Address",
                    value: draft.read().address.clone(),
                    oninput: move |v: String| draft.write().address = v,
                }
                FormField {
                    id: "user-city",
                    label: "City",
                    value: draft.read().city.clone(),
                    oninput: move |v: String| draft.write().city = v,
                }
                FormField {
                    id: "user-country",
                    label: "Country",
                    value: draft.read().country.clone(),
                    oninput: move |v: String| draft.write().country = v,
                }
            }

            div {
                class: "form-actions",
                button {
                    class: "primary",
                    r#type: "submit",
                    if editing { "Update" } else { "Create" }
                }
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

#[component]
fn FormField(
    id: String,
    label: String,
    value: String,
    #[props(default = "text".to_string())] input_type: String,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "form-field",
            label { r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                r#type: "{input_type}",
                value: "{value}",
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
        }
    }
}
