//! Secret redaction.

/// Replacement for every redacted secret.
pub const FILTERED: &str = "[Filtered]";

/// Replaces configured secrets with [`FILTERED`].
///
/// Matching is literal and unanchored: a secret embedded in a longer token is
/// still replaced. Secrets are applied one after another in configuration
/// order, so when one secret contains another, the one listed first wins.
///
/// ```rust
/// use crumbs::middleware::Redactor;
///
/// let redactor = Redactor::new(["secret", "api-key"]);
/// assert_eq!(redactor.filter("https://example.com?auth=api-key"), "https://example.com?auth=[Filtered]");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Redactor {
    secrets: Vec<String>,
}

impl Redactor {
    /// Empty secrets are skipped; they would match everywhere.
    pub fn new<I, S>(secrets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let secrets = secrets.into_iter().map(Into::into).filter(|s: &String| !s.is_empty()).collect();
        Self { secrets }
    }

    pub fn filter(&self, text: &str) -> String {
        self.secrets
            .iter()
            .fold(text.to_owned(), |acc, secret| acc.replace(secret.as_str(), FILTERED))
    }
}
