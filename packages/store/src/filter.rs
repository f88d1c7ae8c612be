//! Country filter and free-text search over the loaded user set.

use crate::models::User;

/// Active search term and country filter. Empty strings mean "inactive".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub search: String,
    pub country: String,
}

impl UserFilter {
    pub fn new(search: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            country: country.into(),
        }
    }

    /// Whether either predicate would exclude anything.
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || !self.country.is_empty()
    }

    /// Both predicates combined with AND.
    pub fn matches(&self, user: &User) -> bool {
        if !self.country.is_empty() && user.country != self.country {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        // Phone is compared against the lowercased term without lowercasing
        // the phone itself.
        user.first_name.to_lowercase().contains(&term)
            || user.last_name.to_lowercase().contains(&term)
            || user.email.to_lowercase().contains(&term)
            || user.phone.contains(&term)
            || user.address.to_lowercase().contains(&term)
            || user.city.to_lowercase().contains(&term)
            || user.country.to_lowercase().contains(&term)
    }

    /// Order-preserving subset of `users` that passes the filter.
    pub fn apply(&self, users: &[User]) -> Vec<User> {
        users.iter().filter(|u| self.matches(u)).cloned().collect()
    }
}

/// Distinct non-empty countries of `users`, sorted ascending.
pub fn available_countries(users: &[User]) -> Vec<String> {
    let mut countries: Vec<String> = users
        .iter()
        .filter(|u| !u.country.is_empty())
        .map(|u| u.country.clone())
        .collect();
    countries.sort();
    countries.dedup();
    countries
}
