use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Read access to the attributes declared on the element that triggered a request.
///
/// Implement this for whatever DOM or DOM-like node your host works with. Lookup
/// is by exact name; HTML parsers already lowercase attribute names.
pub trait AttributeSource {
    /// Returns the attribute's value, or `None` if the element does not declare it.
    fn get_attribute(&self, name: &str) -> Option<String>;
}

impl<T: AttributeSource + ?Sized> AttributeSource for &T {
    fn get_attribute(&self, name: &str) -> Option<String> {
        (**self).get_attribute(name)
    }
}

impl AttributeSource for IndexMap<String, String> {
    fn get_attribute(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<S: BuildHasher> AttributeSource for HashMap<String, String, S> {
    fn get_attribute(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl AttributeSource for BTreeMap<String, String> {
    fn get_attribute(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_lookup() {
        let mut attributes = IndexMap::new();
        attributes.insert("hx-get".to_string(), "/nav".to_string());

        assert_eq!(attributes.get_attribute("hx-get"), Some("/nav".to_string()));
        assert_eq!(attributes.get_attribute("hx-post"), None);
    }

    #[test]
    fn test_lookup_is_exact() {
        let attributes: HashMap<String, String> =
            [("hx-fragment".to_string(), "nav".to_string())].into();

        assert_eq!(attributes.get_attribute("HX-Fragment"), None);
        assert_eq!(
            (&attributes).get_attribute("hx-fragment"),
            Some("nav".to_string())
        );
    }
}
