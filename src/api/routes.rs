//! Request paths
//!
//! Activity names and emails are free text, so both are percent-encoded
//! before they land in a path segment or query value.

use urlencoding::encode;

pub const CATALOG_PATH: &str = "/activities";

pub fn signup_path(activity: &str, email: &str) -> String {
    format!("/activities/{}/signup?email={}", encode(activity), encode(email))
}

pub fn unregister_path(activity: &str, email: &str) -> String {
    format!(
        "/activities/{}/unregister?email={}",
        encode(activity),
        encode(email)
    )
}

/// Strip trailing slashes so paths can be appended directly
pub fn normalize_base(base: &str) -> String {
    base.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unregister_path_is_encoded() {
        assert_eq!(
            unregister_path("Chess Club", "a@x.com"),
            "/activities/Chess%20Club/unregister?email=a%40x.com"
        );
    }

    #[test]
    fn test_signup_path_encodes_reserved_characters() {
        assert_eq!(
            signup_path("Art & Craft/Design?", "first+last@x.com"),
            "/activities/Art%20%26%20Craft%2FDesign%3F/signup?email=first%2Blast%40x.com"
        );
    }

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("http://localhost:8000/"), "http://localhost:8000");
        assert_eq!(normalize_base(""), "");
    }
}
