//! String helpers shared by DTOs and services.

use serde::{Deserialize, Deserializer};

/// Canonical form of an email address: trimmed and lowercased.
///
/// Every lookup and write goes through this so that uniqueness is
/// case-insensitive.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Trims and drops empty values.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Deserializes a field whose absence and explicit `null` mean different things.
///
/// Use with `#[serde(default)]`: absent stays `None`, `null` becomes
/// `Some(None)`, a value becomes `Some(Some(v))`.
pub fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Ama@Example.COM "), "ama@example.com");
        assert_eq!(normalize_email("kofi@example.com"), "kofi@example.com");
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_present() {
        #[derive(Deserialize)]
        struct Patch {
            #[serde(default, deserialize_with = "deserialize_present")]
            phone: Option<Option<String>>,
        }

        let absent: Patch = serde_json::from_str("{}").unwrap();
        let null: Patch = serde_json::from_str(r#"{"phone": null}"#).unwrap();
        let set: Patch = serde_json::from_str(r#"{"phone": "+233"}"#).unwrap();

        assert_eq!(absent.phone, None);
        assert_eq!(null.phone, Some(None));
        assert_eq!(set.phone, Some(Some("+233".to_string())));
    }
}
