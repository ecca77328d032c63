use actix_web::dev::{Payload, ServiceRequest};
use actix_web::error::Error;
use actix_web::http::header::HeaderValue;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::headers::RequestHeaders;

/// Details of the htmx request being handled.
///
/// Extract it in a handler. When [`HtmxMiddleware`](crate::HtmxMiddleware) wraps
/// the route, the instance is parsed once per request and shared; without the
/// middleware it is parsed from the request headers on demand.
///
/// Headers that are missing or not valid visible ASCII read as absent.
#[derive(Clone, Debug)]
pub struct Htmx {
    /// `HX-Request: true` was sent.
    pub is_htmx: bool,
    pub boosted: bool,
    pub history_restore_request: bool,
    current_url: Option<String>,
    prompt: Option<String>,
    target: Option<String>,
    trigger: Option<String>,
    trigger_name: Option<String>,
    fragment: Option<String>,
}

impl Htmx {
    fn from_request_headers(req: &HttpRequest) -> Htmx {
        let headers = req.headers();
        let string = |name: &str| headers.get(name).as_option_string();
        let boolean = |name: &str| headers.get(name).as_bool();

        Htmx {
            is_htmx: boolean(RequestHeaders::HX_REQUEST),
            boosted: boolean(RequestHeaders::HX_BOOSTED),
            history_restore_request: boolean(RequestHeaders::HX_HISTORY_RESTORE_REQUEST),
            current_url: string(RequestHeaders::HX_CURRENT_URL),
            prompt: string(RequestHeaders::HX_PROMPT),
            target: string(RequestHeaders::HX_TARGET),
            trigger: string(RequestHeaders::HX_TRIGGER),
            trigger_name: string(RequestHeaders::HX_TRIGGER_NAME),
            fragment: string(RequestHeaders::HX_FRAGMENT),
        }
    }

    pub fn new(req: &ServiceRequest) -> Htmx {
        Htmx::from_request_headers(req.request())
    }

    pub fn current_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn trigger(&self) -> Option<&str> {
        self.trigger.as_deref()
    }

    pub fn trigger_name(&self) -> Option<&str> {
        self.trigger_name.as_deref()
    }

    /// The fragment named by the triggering element's `hx-fragment` attribute.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// True if the request asked for exactly the fragment `name`.
    pub fn wants_fragment(&self, name: &str) -> bool {
        self.fragment() == Some(name)
    }
}

impl FromRequest for Htmx {
    type Error = Error;
    type Future = Ready<Result<Htmx, Error>>;

    #[inline]
    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        if let Some(htmx) = req.extensions().get::<Htmx>() {
            return ready(Ok(htmx.clone()));
        }

        ready(Ok(Htmx::from_request_headers(req)))
    }
}

trait AsBool {
    fn as_bool(&self) -> bool;
}

trait AsOptionString {
    fn as_option_string(&self) -> Option<String>;
}

impl AsBool for Option<&HeaderValue> {
    fn as_bool(&self) -> bool {
        self.as_option_string()
            .and_then(|value| value.parse::<bool>().ok())
            .unwrap_or(false)
    }
}

impl AsOptionString for Option<&HeaderValue> {
    fn as_option_string(&self) -> Option<String> {
        self.and_then(|header| header.to_str().ok())
            .map(str::to_string)
    }
}
