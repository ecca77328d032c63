use indexmap::IndexMap;
use log::{debug, warn};
use std::fmt;

use crate::{AttributeSource, LifecycleEvent, OutgoingHeaders};

/// A handler attached to an [`ExtensionRegistry`].
///
/// `on_event` is called for every lifecycle event the host dispatches. The
/// element that triggered the request is borrowed read-only; headers to send
/// are written into `headers`. Handlers must not panic.
pub trait Extension {
    fn on_event(
        &self,
        event: &LifecycleEvent,
        source: &dyn AttributeSource,
        headers: &mut OutgoingHeaders,
    );
}

impl<F> Extension for F
where
    F: Fn(&LifecycleEvent, &dyn AttributeSource, &mut OutgoingHeaders),
{
    fn on_event(
        &self,
        event: &LifecycleEvent,
        source: &dyn AttributeSource,
        headers: &mut OutgoingHeaders,
    ) {
        self(event, source, headers)
    }
}

/// Named extension point that lifecycle events are dispatched through.
///
/// The host owns the registry, defines extensions on it during startup and
/// calls [`dispatch`](ExtensionRegistry::dispatch) as requests are prepared.
/// Extensions run in the order they were first defined.
///
/// ```
/// use htmx_fragments::{fragments, ExtensionRegistry};
/// use std::collections::HashMap;
///
/// let mut registry = ExtensionRegistry::new();
/// fragments::register(&mut registry);
///
/// let element: HashMap<String, String> =
///     [("hx-fragment".to_string(), "nav".to_string())].into();
/// let headers = registry.config_request(&element);
///
/// assert_eq!(headers.get("HX-Fragment"), Some("nav"));
/// ```
#[derive(Default)]
pub struct ExtensionRegistry {
    extensions: IndexMap<String, Box<dyn Extension>>,
}

impl ExtensionRegistry {
    pub fn new() -> ExtensionRegistry {
        ExtensionRegistry::default()
    }

    /// Define an extension under `name`.
    ///
    /// Redefining a name replaces the previous handler but keeps its position.
    pub fn define_extension<E>(&mut self, name: impl Into<String>, extension: E)
    where
        E: Extension + 'static,
    {
        let name = name.into();
        if self
            .extensions
            .insert(name.clone(), Box::new(extension))
            .is_some()
        {
            warn!("Extension {} was already defined and has been replaced", name);
        } else {
            debug!("Defined extension {}", name);
        }
    }

    pub fn remove_extension(&mut self, name: &str) -> bool {
        self.extensions.shift_remove(name).is_some()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.extensions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.extensions.keys().map(String::as_str)
    }

    /// Deliver `event` to every defined extension.
    pub fn dispatch(
        &self,
        event: &LifecycleEvent,
        source: &dyn AttributeSource,
        headers: &mut OutgoingHeaders,
    ) {
        for extension in self.extensions.values() {
            extension.on_event(event, source, headers);
        }
    }

    /// Dispatch `htmx:configRequest` for `source` and return the headers the
    /// extensions want added to the request.
    pub fn config_request(&self, source: &dyn AttributeSource) -> OutgoingHeaders {
        let mut headers = OutgoingHeaders::new();
        self.dispatch(&LifecycleEvent::ConfigRequest, source, &mut headers);
        headers
    }
}

impl fmt::Debug for ExtensionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtensionRegistry")
            .field("extensions", &self.extensions.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    fn element() -> HashMap<String, String> {
        HashMap::new()
    }

    #[test]
    fn test_dispatch_runs_extensions_in_definition_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ExtensionRegistry::new();

        let first = seen.clone();
        registry.define_extension(
            "first",
            move |_: &LifecycleEvent, _: &dyn AttributeSource, headers: &mut OutgoingHeaders| {
                first.borrow_mut().push("first");
                headers.insert("X-Order", "first");
            },
        );
        let second = seen.clone();
        registry.define_extension(
            "second",
            move |_: &LifecycleEvent, _: &dyn AttributeSource, headers: &mut OutgoingHeaders| {
                second.borrow_mut().push("second");
                headers.insert("X-Order", "second");
            },
        );

        let headers = registry.config_request(&element());

        assert_eq!(*seen.borrow(), vec!["first", "second"]);
        assert_eq!(headers.get("X-Order"), Some("second"));
    }

    #[test]
    fn test_redefining_replaces_in_place() {
        let mut registry = ExtensionRegistry::new();
        registry.define_extension(
            "a",
            |_: &LifecycleEvent, _: &dyn AttributeSource, h: &mut OutgoingHeaders| {
                h.insert("X-A", "old");
            },
        );
        registry.define_extension(
            "b",
            |_: &LifecycleEvent, _: &dyn AttributeSource, _: &mut OutgoingHeaders| {},
        );
        registry.define_extension(
            "a",
            |_: &LifecycleEvent, _: &dyn AttributeSource, h: &mut OutgoingHeaders| {
                h.insert("X-A", "new");
            },
        );

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(registry.config_request(&element()).get("X-A"), Some("new"));
    }

    #[test]
    fn test_remove_extension() {
        let mut registry = ExtensionRegistry::new();
        registry.define_extension(
            "a",
            |_: &LifecycleEvent, _: &dyn AttributeSource, h: &mut OutgoingHeaders| {
                h.insert("X-A", "1");
            },
        );

        assert!(registry.remove_extension("a"));
        assert!(!registry.remove_extension("a"));
        assert!(registry.is_empty());
        assert!(registry.config_request(&element()).is_empty());
    }

    #[test]
    fn test_dispatch_passes_event_through() {
        let mut registry = ExtensionRegistry::new();
        registry.define_extension(
            "echo",
            |event: &LifecycleEvent, _: &dyn AttributeSource, h: &mut OutgoingHeaders| {
                h.insert("X-Event", event.to_string());
            },
        );

        let mut headers = OutgoingHeaders::new();
        registry.dispatch(&LifecycleEvent::from("my:event"), &element(), &mut headers);

        assert_eq!(headers.get("X-Event"), Some("my:event"));
    }
}
