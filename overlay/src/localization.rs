/// Translation lookup for user-visible labels
pub trait Localizer {
    /// Localized text for `key`, the key itself when no translation exists
    fn localize(&self, key: &str) -> String {
        key.to_string()
    }
}
