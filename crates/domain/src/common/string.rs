//! String conversion utilities.

/// Normalizes a free-text identifier into lookup form: trimmed and lower-cased.
///
/// # Examples
///
/// ```
/// use dexera_domain::common::normalize_key;
///
/// assert_eq!(normalize_key("  Charizard "), "charizard");
/// assert_eq!(normalize_key("RED"), "red");
/// ```
pub fn normalize_key(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Converts an empty `String` to `None`, otherwise returns `Some(value)`.
pub fn some_if_not_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Turns a hyphenated resource name into display words (`"thunder-stone"` → `"thunder stone"`).
pub fn humanize(name: &str) -> String {
    name.replace('-', " ")
}

/// Extension trait for strings providing `into_option` as a method.
pub trait StringExt {
    /// Converts this string to `None` if empty, otherwise `Some(self)`.
    fn into_option(self) -> Option<String>;
}

impl StringExt for String {
    fn into_option(self) -> Option<String> {
        some_if_not_empty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key_trims_and_folds_case() {
        assert_eq!(normalize_key("\tMr-Mime\n"), "mr-mime");
        assert_eq!(normalize_key(""), "");
    }

    #[test]
    fn test_humanize_replaces_every_hyphen() {
        assert_eq!(humanize("kings-rock"), "kings rock");
        assert_eq!(humanize("three-segment-dudunsparce"), "three segment dudunsparce");
    }

    #[test]
    fn test_string_ext_into_option() {
        assert_eq!("dusk".to_string().into_option(), Some("dusk".to_string()));
        assert_eq!(String::new().into_option(), None);
    }
}
