//! Admin authorization policy.
//!
//! A pure membership test against the configured allow-list. No side
//! effects, no external calls; the list is fixed at process start.

/// Decides whether a verified email may mutate the catalog.
#[derive(Debug, Clone)]
pub struct AdminPolicy {
    /// Allow-listed emails, lowercased at construction.
    emails: Vec<String>,
}

impl AdminPolicy {
    /// Build a policy from the configured allow-list.
    ///
    /// Entries are trimmed and lowercased; empty entries are dropped.
    pub fn new<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let emails = emails
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { emails }
    }

    /// Case-insensitive membership test.
    ///
    /// An empty allow-list means nobody is an admin.
    pub fn is_admin(&self, email: &str) -> bool {
        let needle = email.trim().to_lowercase();
        !needle.is_empty() && self.emails.iter().any(|e| *e == needle)
    }
}
