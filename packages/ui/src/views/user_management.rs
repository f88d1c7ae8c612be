use api::{ApiError, UsersApi};
use dioxus::prelude::*;
use store::models::{parse_generate_count, GENERATE_ADVISORY_MAX, GENERATE_DEFAULT_COUNT};
use store::{AppConfig, User, UserListState, ViewMode};

use crate::clipboard::copy_to_clipboard;
use crate::icons::{FaCopy, FaPen, FaPlus, FaRotate, FaTrashCan, FaWandMagicSparkles};
use crate::pager::{page_size_options, Pager};
use crate::toast::{use_toasts, Toasts};
use crate::user_form::UserForm;
use crate::Icon;

use super::{ConfirmDialog, PromptDialog};

/// What the user form is currently doing.
#[derive(Clone, Debug, PartialEq)]
enum FormMode {
    Create,
    Edit(User),
}

/// The request a submitted form turns into.
#[derive(Clone, Copy, Debug, PartialEq)]
enum SaveRequest {
    Create,
    Update(u64),
}

impl FormMode {
    /// `None` for an edit of a record without an id to address.
    fn save_request(&self) -> Option<SaveRequest> {
        match self {
            FormMode::Create => Some(SaveRequest::Create),
            FormMode::Edit(user) => user.id.map(SaveRequest::Update),
        }
    }
}

/// Fetch the full user set and feed it through filter and pagination.
/// On failure the previously loaded state stays as it was.
async fn reload(api: UsersApi, mut state: Signal<UserListState>, toasts: Toasts) {
    state.write().begin_load();
    match api.list_users().await {
        Ok(users) => {
            tracing::info!("Loaded {} users", users.len());
            state.write().load(users);
        }
        Err(e) => {
            tracing::error!("Error loading users: {e}");
            toasts.error("Load Failed", "Failed to load users. Please try again.");
        }
    }
    state.write().end_load();
}

fn report_failure(toasts: Toasts, title: &str, message: &str, context: &str, err: &ApiError) {
    tracing::error!("Error {context}: {err}");
    toasts.error(title, message);
}

/// The user-management screen: filter bar, table/JSON/text views, pager,
/// and the create/edit/delete/generate flows.
///
/// Every request is spawned on this component's scope, so leaving the view
/// cancels whatever is still in flight.
#[component]
pub fn UserManagementView() -> Element {
    let config = use_context::<AppConfig>();
    let api = use_context::<UsersApi>();
    let toasts = use_toasts();

    let features = config.features.clone();
    let mut state = use_signal(move || {
        UserListState::new(features.default_page_size, features.enable_pagination)
    });
    let mut form = use_signal(|| Option::<FormMode>::None);
    let mut pending_delete = use_signal(|| Option::<User>::None);
    let mut show_generate = use_signal(|| false);

    let _loader = use_resource({
        let api = api.clone();
        move || reload(api.clone(), state, toasts)
    });

    let handle_refresh = {
        let api = api.clone();
        move |_: MouseEvent| {
            spawn(reload(api.clone(), state, toasts));
        }
    };

    let handle_save = {
        let api = api.clone();
        move |user: User| {
            let api = api.clone();
            let request = form
                .peek()
                .as_ref()
                .map_or(Some(SaveRequest::Create), FormMode::save_request);
            let Some(request) = request else {
                tracing::warn!("Cannot update a user without an id");
                return;
            };
            spawn(async move {
                let name = user.full_name();
                match request {
                    SaveRequest::Update(id) => {
                        match api.update_user(id, &user).await {
                            Ok(_) => {
                                toasts.success(
                                    "Success!",
                                    &format!("User {name} has been updated successfully."),
                                );
                                form.set(None);
                                reload(api, state, toasts).await;
                            }
                            Err(e) => report_failure(
                                toasts,
                                "Update Failed",
                                "Failed to update user. Please try again.",
                                "updating user",
                                &e,
                            ),
                        }
                    }
                    SaveRequest::Create => match api.create_user(&user).await {
                        Ok(_) => {
                            toasts.success(
                                "User Created!",
                                &format!("{name} has been added successfully."),
                            );
                            form.set(None);
                            reload(api, state, toasts).await;
                        }
                        Err(e) => report_failure(
                            toasts,
                            "Creation Failed",
                            "Failed to create user. Please try again.",
                            "creating user",
                            &e,
                        ),
                    },
                }
            });
        }
    };

    let handle_confirm_delete = {
        let api = api.clone();
        move |_: ()| {
            let Some(user) = pending_delete() else {
                return;
            };
            pending_delete.set(None);
            let Some(id) = user.id else {
                tracing::warn!("Cannot delete a user without an id");
                return;
            };
            let api = api.clone();
            spawn(async move {
                match api.delete_user(id).await {
                    Ok(()) => {
                        toasts.success(
                            "User Deleted!",
                            &format!("{} has been removed successfully.", user.full_name()),
                        );
                        reload(api, state, toasts).await;
                    }
                    Err(e) => report_failure(
                        toasts,
                        "Delete Failed",
                        "Failed to delete user. Please try again.",
                        "deleting user",
                        &e,
                    ),
                }
            });
        }
    };

    let handle_generate = {
        let api = api.clone();
        move |input: String| {
            show_generate.set(false);
            let Some(count) = parse_generate_count(&input) else {
                tracing::debug!("Ignoring non-numeric generate count {input:?}");
                return;
            };
            let api = api.clone();
            spawn(async move {
                match api.generate_users(count).await {
                    Ok(_) => {
                        toasts.success(
                            "Users Generated!",
                            &format!("Successfully generated {count} new users."),
                        );
                        reload(api, state, toasts).await;
                    }
                    Err(e) => report_failure(
                        toasts,
                        "Generation Failed",
                        "Failed to generate users. Please try again.",
                        "generating users",
                        &e,
                    ),
                }
            });
        }
    };

    let handle_copy = move |mode: ViewMode| {
        let (label, copied, failed, text) = match mode {
            ViewMode::Json => (
                "JSON",
                "JSON data has been copied to clipboard.",
                "Failed to copy JSON data to clipboard.",
                state.read().json_view().map_err(|e| e.to_string()),
            ),
            _ => (
                "text",
                "Text data has been copied to clipboard.",
                "Failed to copy text data to clipboard.",
                Ok(state.read().text_view()),
            ),
        };
        spawn(async move {
            let result = match text {
                Ok(text) => copy_to_clipboard(&text).await.map_err(|e| e.to_string()),
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => toasts.success("Copied!", copied),
                Err(e) => {
                    tracing::error!("Failed to copy {label}: {e}");
                    toasts.error("Copy Failed", failed);
                }
            }
        });
    };

    let on_edit = move |user: User| form.set(Some(FormMode::Edit(user)));
    let on_delete = move |user: User| pending_delete.set(Some(user));

    let snapshot = state.read();
    let visible: Vec<(String, User)> = snapshot
        .visible()
        .iter()
        .map(|u| (u.id.map(|id| id.to_string()).unwrap_or_default(), u.clone()))
        .collect();
    let countries = snapshot.countries().to_vec();
    let search = snapshot.search().to_string();
    let country = snapshot.country().to_string();
    let view_mode = snapshot.view_mode();
    let paginates = snapshot.paginates();
    let current_page = snapshot.current_page();
    let total_pages = snapshot.total_pages();
    let total_items = snapshot.total_items();
    let page_window = snapshot.page_window();
    let page_size = snapshot.page_size();
    let range_label = snapshot.range_label();
    let is_loading = snapshot.is_loading();
    let exported = match view_mode {
        ViewMode::Table => String::new(),
        ViewMode::Json => snapshot.json_view().unwrap_or_else(|e| {
            tracing::error!("Failed to render JSON view: {e}");
            String::new()
        }),
        ViewMode::Text => snapshot.text_view(),
    };
    drop(snapshot);

    let page_sizes = page_size_options(config.features.default_page_size);
    let form_key = match form() {
        Some(FormMode::Edit(ref u)) => format!("edit-{}", u.id.unwrap_or_default()),
        _ => "create".to_string(),
    };

    rsx! {
        div {
            class: "user-management",

            header {
                class: "console-header",
                h1 { "User Management" }
                div {
                    class: "header-actions",
                    button {
                        class: "primary",
                        onclick: move |_| form.set(Some(FormMode::Create)),
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        " Add User"
                    }
                    button {
                        class: "secondary",
                        onclick: move |_| show_generate.set(true),
                        Icon { icon: FaWandMagicSparkles, width: 12, height: 12 }
                        " Generate Users"
                    }
                    button {
                        class: "secondary",
                        disabled: is_loading,
                        onclick: handle_refresh,
                        Icon { icon: FaRotate, width: 12, height: 12 }
                        " Refresh"
                    }
                }
            }

            div {
                class: "filter-bar",
                input {
                    r#type: "search",
                    placeholder: "Search by name, email, phone, address...",
                    value: "{search}",
                    oninput: move |evt| state.write().set_search(evt.value()),
                }
                select {
                    value: "{country}",
                    onchange: move |evt| state.write().set_country(evt.value()),
                    option { value: "", selected: country.is_empty(), "All countries" }
                    for c in countries {
                        option {
                            key: "{c}",
                            value: "{c}",
                            selected: c == country,
                            "{c}"
                        }
                    }
                }
                button {
                    class: "secondary",
                    disabled: search.is_empty() && country.is_empty(),
                    onclick: move |_| state.write().clear_filters(),
                    "Clear filters"
                }
                span { class: "filter-count", "{total_items} users" }
            }

            div {
                class: "view-tabs",
                for mode in ViewMode::ALL {
                    button {
                        key: "{mode}",
                        class: if mode == view_mode { "tab active" } else { "tab" },
                        onclick: move |_| state.write().set_view_mode(mode),
                        "{mode}"
                    }
                }
                if view_mode != ViewMode::Table {
                    button {
                        class: "secondary copy-button",
                        onclick: move |_| handle_copy(view_mode),
                        Icon { icon: FaCopy, width: 12, height: 12 }
                        " Copy"
                    }
                }
            }

            if is_loading && visible.is_empty() {
                div { class: "loading", "Loading users..." }
            } else if visible.is_empty() {
                div { class: "empty-state", "No users found." }
            } else {
                {match view_mode {
                    ViewMode::Table => rsx! {
                        table {
                            class: "user-table",
                            thead {
                                tr {
                                    th { "ID" }
                                    th { "Name" }
                                    th { "Email" }
                                    th { "Phone" }
                                    th { "Address" }
                                    th { "City" }
                                    th { "Country" }
                                    th { "Actions" }
                                }
                            }
                            tbody {
                                for (row_key, user) in visible {
                                    UserRow {
                                        key: "{row_key}",
                                        user: user,
                                        on_edit: on_edit,
                                        on_delete: on_delete,
                                    }
                                }
                            }
                        }
                    },
                    _ => rsx! {
                        pre { class: "export-view", "{exported}" }
                    },
                }}
            }

            if paginates && total_pages > 0 {
                Pager {
                    current_page: current_page,
                    total_pages: total_pages,
                    window: page_window,
                    page_size: page_size,
                    page_sizes: page_sizes,
                    range_label: range_label,
                    on_page: move |page: usize| {
                        state.write().go_to_page(page);
                    },
                    on_page_size: move |size: usize| state.write().set_page_size(size),
                }
            }

            if let Some(mode) = form() {
                div {
                    class: "form-panel",
                    UserForm {
                        key: "{form_key}",
                        initial: match mode {
                            FormMode::Edit(ref user) => user.clone(),
                            FormMode::Create => User::default(),
                        },
                        editing: matches!(mode, FormMode::Edit(_)),
                        on_save: handle_save,
                        on_cancel: move |_| form.set(None),
                    }
                }
            }

            if let Some(user) = pending_delete() {
                ConfirmDialog {
                    title: "Delete user",
                    message: format!("Are you sure you want to delete {}?", user.full_name()),
                    confirm_label: "Delete",
                    on_confirm: handle_confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }

            if show_generate() {
                PromptDialog {
                    title: "Generate Users",
                    message: format!("How many users do you want to generate? (max {GENERATE_ADVISORY_MAX})"),
                    default_value: GENERATE_DEFAULT_COUNT.to_string(),
                    on_submit: handle_generate,
                    on_cancel: move |_| show_generate.set(false),
                }
            }
        }
    }
}

#[component]
fn UserRow(user: User, on_edit: EventHandler<User>, on_delete: EventHandler<User>) -> Element {
    let id = user.id.map(|id| id.to_string()).unwrap_or_default();
    let name = user.full_name();
    let edit_user = user.clone();
    let delete_user = user.clone();

    rsx! {
        tr {
            td { "{id}" }
            td { "{name}" }
            td { "{user.email}" }
            td { "{user.phone}" }
            td { "{user.address}" }
            td { "{user.city}" }
            td { "{user.country}" }
            td {
                class: "row-actions",
                button {
                    class: "icon-button",
                    title: "Edit",
                    onclick: move |_| on_edit.call(edit_user.clone()),
                    Icon { icon: FaPen, width: 12, height: 12 }
                }
                button {
                    class: "icon-button danger",
                    title: "Delete",
                    onclick: move |_| on_delete.call(delete_user.clone()),
                    Icon { icon: FaTrashCan, width: 12, height: 12 }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: Option<u64>) -> User {
        User {
            id,
            first_name: "Jane".into(),
            last_name: "Smith".into(),
            ..User::default()
        }
    }

    #[test]
    fn test_save_request_per_form_mode() {
        assert_eq!(FormMode::Create.save_request(), Some(SaveRequest::Create));
        assert_eq!(
            FormMode::Edit(user(Some(7))).save_request(),
            Some(SaveRequest::Update(7))
        );
    }

    #[test]
    fn test_edit_without_id_is_not_sent_as_create() {
        assert_eq!(FormMode::Edit(user(None)).save_request(), None);
    }
}
