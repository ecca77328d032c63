//! The `fragments` extension.
//!
//! When a request is being configured, the value of the triggering element's
//! `hx-fragment` attribute is copied verbatim into the `HX-Fragment` request
//! header, so the server can render just that fragment of the page:
//!
//! ```html
//! <a hx-get="/features" hx-fragment="content">Features</a>
//! ```
//!
//! Elements without the attribute are left alone, as are all other lifecycle
//! events.

use log::debug;

use crate::headers::{Attributes, RequestHeaders};
use crate::{AttributeSource, Extension, ExtensionRegistry, LifecycleEvent, OutgoingHeaders};

/// Name the extension is defined under.
pub const EXTENSION_NAME: &str = "fragments";

#[derive(Clone, Copy, Debug, Default)]
pub struct FragmentsExtension;

impl Extension for FragmentsExtension {
    fn on_event(
        &self,
        event: &LifecycleEvent,
        source: &dyn AttributeSource,
        headers: &mut OutgoingHeaders,
    ) {
        if *event != LifecycleEvent::ConfigRequest {
            return;
        }

        let Some(fragment) = source.get_attribute(Attributes::HX_FRAGMENT) else {
            return;
        };

        debug!("Requesting fragment {}", fragment);
        headers.insert(RequestHeaders::HX_FRAGMENT_OUTGOING, fragment);
    }
}

/// Define the `fragments` extension on `registry`.
///
/// Call this once while setting up the host.
pub fn register(registry: &mut ExtensionRegistry) {
    registry.define_extension(EXTENSION_NAME, FragmentsExtension);
}
