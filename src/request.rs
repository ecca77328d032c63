use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue};
use indexmap::map::{IntoIter, Iter};
use indexmap::IndexMap;
use log::warn;

/// Headers that will be sent with an outgoing htmx request.
///
/// Keys are kept exactly as written and iterate in insertion order. Inserting a
/// key that is already present replaces its value without moving it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutgoingHeaders {
    inner: IndexMap<String, String>,
}

impl OutgoingHeaders {
    pub fn new() -> OutgoingHeaders {
        OutgoingHeaders::default()
    }

    /// Set a header, returning the value it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.inner.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner.get(name).map(String::as_str)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.inner.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, String> {
        self.inner.iter()
    }

    /// Convert into an HTTP header map for sending.
    ///
    /// Entries whose name or value is not valid in HTTP are skipped and logged.
    pub fn to_header_map(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        self.inner.iter().for_each(|(key, value)| match key.parse::<HeaderName>() {
            Ok(name) => {
                if let Ok(value) = HeaderValue::from_str(value) {
                    map.insert(name, value);
                } else {
                    warn!("Failed to parse {} header value: {}", key, value)
                }
            }
            _ => {
                warn!("Failed to parse header name: {}", key)
            }
        });
        map
    }
}

impl<K, V> FromIterator<(K, V)> for OutgoingHeaders
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = OutgoingHeaders::new();
        headers.extend(iter);
        headers
    }
}

impl<K, V> Extend<(K, V)> for OutgoingHeaders
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.inner
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl IntoIterator for OutgoingHeaders {
    type Item = (String, String);
    type IntoIter = IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a OutgoingHeaders {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut headers: OutgoingHeaders =
            [("Accept", "text/html"), ("HX-Fragment", "old"), ("HX-Request", "true")]
                .into_iter()
                .collect();

        assert_eq!(headers.insert("HX-Fragment", "new"), Some("old".to_string()));
        assert_eq!(headers.get("HX-Fragment"), Some("new"));

        let keys: Vec<&str> = headers.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["Accept", "HX-Fragment", "HX-Request"]);
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let mut headers = OutgoingHeaders::new();
        headers.insert("HX-Fragment", "nav");

        assert!(headers.contains("HX-Fragment"));
        assert!(!headers.contains("hx-fragment"));
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut headers: OutgoingHeaders = [("a", "1"), ("b", "2"), ("c", "3")]
            .into_iter()
            .collect();

        assert_eq!(headers.remove("b"), Some("2".to_string()));
        assert_eq!(headers.remove("b"), None);
        assert_eq!(
            headers.into_iter().collect::<Vec<_>>(),
            vec![
                ("a".to_string(), "1".to_string()),
                ("c".to_string(), "3".to_string())
            ]
        );
    }

    #[test]
    fn test_to_header_map() {
        let headers: OutgoingHeaders = [("HX-Fragment", "nav"), ("Accept", "text/html")]
            .into_iter()
            .collect();

        let map = headers.to_header_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("hx-fragment").unwrap().to_str().unwrap(), "nav");
        assert_eq!(map.get("accept").unwrap().to_str().unwrap(), "text/html");
    }

    #[test]
    fn test_to_header_map_skips_invalid_entries() {
        let headers: OutgoingHeaders = [
            ("HX-Fragment", "nav\r\nInjected: yes"),
            ("bad name", "value"),
            ("Accept", "text/html"),
        ]
        .into_iter()
        .collect();

        let map = headers.to_header_map();
        assert_eq!(map.len(), 1);
        assert!(map.get("hx-fragment").is_none());
        assert!(map.get("accept").is_some());
    }
}
