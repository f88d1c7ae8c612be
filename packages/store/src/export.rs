//! JSON and plain-text renderings of a page of users, used by the JSON/Text
//! view modes and the copy-to-clipboard buttons.

use crate::models::User;

/// Separator line closing every block of the text view.
pub const TEXT_SEPARATOR: &str = "-----------------------------------";

/// Pretty-printed JSON array (2-space indent) of `users`.
pub fn json_view(users: &[User]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(users)
}

/// One fixed-format block per user, blocks separated by a blank line.
pub fn text_view(users: &[User]) -> String {
    users
        .iter()
        .map(text_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn text_block(user: &User) -> String {
    let id = user.id.map(|id| id.to_string()).unwrap_or_default();
    format!(
        "ID: {id}\nName: {}\nEmail: {}\nPhone: {}\nAddress: {}, {}, {}\n{TEXT_SEPARATOR}",
        user.full_name(),
        user.email,
        user.phone,
        user.address,
        user.city,
        user.country,
    )
}
