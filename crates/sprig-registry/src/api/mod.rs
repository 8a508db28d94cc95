//! Registry wire format and endpoint layout.
//!
//! The registry serves component records as JSON at
//! `GET {base}/components/{name}` (404 when absent) and the full catalog
//! at `GET {base}/components` as an object keyed by component name.

use indexmap::IndexMap;

use sprig_core::types::ComponentRecord;

/// The full catalog, in the order the registry lists it
pub type Catalog = IndexMap<String, ComponentRecord>;

/// URL of a single component record
pub fn component_url(base_url: &str, name: &str) -> String {
    format!("{}/components/{}", base_url.trim_end_matches('/'), name)
}

/// URL of the full catalog
pub fn catalog_url(base_url: &str) -> String {
    format!("{}/components", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_url() {
        assert_eq!(
            component_url("https://registry.example.com", "button"),
            "https://registry.example.com/components/button"
        );
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        assert_eq!(
            catalog_url("https://registry.example.com/"),
            "https://registry.example.com/components"
        );
    }
}
