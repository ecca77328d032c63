use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

const PREFIX: &str = "htmx:";

/// An htmx request lifecycle event.
///
/// Parsing never fails: names that are not one of the known lifecycle events
/// are kept verbatim in [`LifecycleEvent::Other`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// `htmx:configRequest`, fired while the outgoing request is being configured.
    ConfigRequest,
    BeforeRequest,
    AfterRequest,
    BeforeSwap,
    AfterSwap,
    AfterSettle,
    ResponseError,
    Other(String),
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleEvent::ConfigRequest => write!(f, "htmx:configRequest"),
            LifecycleEvent::BeforeRequest => write!(f, "htmx:beforeRequest"),
            LifecycleEvent::AfterRequest => write!(f, "htmx:afterRequest"),
            LifecycleEvent::BeforeSwap => write!(f, "htmx:beforeSwap"),
            LifecycleEvent::AfterSwap => write!(f, "htmx:afterSwap"),
            LifecycleEvent::AfterSettle => write!(f, "htmx:afterSettle"),
            LifecycleEvent::ResponseError => write!(f, "htmx:responseError"),
            LifecycleEvent::Other(name) => write!(f, "{}", name),
        }
    }
}

impl FromStr for LifecycleEvent {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LifecycleEvent::from(s))
    }
}

impl From<&str> for LifecycleEvent {
    fn from(name: &str) -> Self {
        match name.strip_prefix(PREFIX) {
            Some("configRequest") => LifecycleEvent::ConfigRequest,
            Some("beforeRequest") => LifecycleEvent::BeforeRequest,
            Some("afterRequest") => LifecycleEvent::AfterRequest,
            Some("beforeSwap") => LifecycleEvent::BeforeSwap,
            Some("afterSwap") => LifecycleEvent::AfterSwap,
            Some("afterSettle") => LifecycleEvent::AfterSettle,
            Some("responseError") => LifecycleEvent::ResponseError,
            _ => LifecycleEvent::Other(name.to_string()),
        }
    }
}

impl From<String> for LifecycleEvent {
    fn from(name: String) -> Self {
        LifecycleEvent::from(name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_events() {
        assert_eq!(
            "htmx:configRequest".parse::<LifecycleEvent>().unwrap(),
            LifecycleEvent::ConfigRequest
        );
        assert_eq!(
            LifecycleEvent::from("htmx:afterSwap"),
            LifecycleEvent::AfterSwap
        );
        assert_eq!(
            LifecycleEvent::from("htmx:responseError"),
            LifecycleEvent::ResponseError
        );
    }

    #[test]
    fn test_unknown_events_are_kept_verbatim() {
        let event = LifecycleEvent::from("htmx:configrequest");
        assert_eq!(event, LifecycleEvent::Other("htmx:configrequest".to_string()));
        assert_eq!(event.to_string(), "htmx:configrequest");

        assert_eq!(
            LifecycleEvent::from("configRequest"),
            LifecycleEvent::Other("configRequest".to_string())
        );
    }

    #[test]
    fn test_display_uses_htmx_prefix() {
        assert_eq!(LifecycleEvent::ConfigRequest.to_string(), "htmx:configRequest");
        assert_eq!(LifecycleEvent::AfterSettle.to_string(), "htmx:afterSettle");
    }
}
