use crate::{headers::RequestHeaders, Htmx};

use actix_web::http::header::{HeaderMap, HeaderValue, VARY};
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures_util::future::LocalBoxFuture;
use log::debug;
use std::future::{ready, Ready};

/// Actix Web middleware for htmx requests that may name a fragment.
///
/// [`HtmxMiddleware`] parses the htmx request headers once and makes them
/// available to handlers through the [`Htmx`] extractor.
///
/// Wrapped routes may answer with a full page or with a single fragment depending
/// on the `HX-Fragment` request header, so every response gets `hx-fragment` added
/// to its `Vary` header, including full-page responses to requests that did not
/// name a fragment. An existing `Vary: *` or `hx-fragment` entry is left as it is.
///
/// # Example
///
/// ```no_run
/// use actix_web::{web, App, HttpServer, Responder, HttpResponse};
/// use htmx_fragments::{Htmx, HtmxMiddleware};
///
/// #[actix_web::main]
/// async fn main() -> std::io::Result<()> {
///     HttpServer::new(|| {
///         App::new()
///             .wrap(HtmxMiddleware)
///             .route("/", web::get().to(index))
///     })
///     .bind("127.0.0.1:8080")?
///     .run()
///     .await
/// }
///
/// async fn index(htmx: Htmx) -> impl Responder {
///     if htmx.wants_fragment("nav") {
///         HttpResponse::Ok().body(r#"<nav id="nav">...</nav>"#)
///     } else {
///         HttpResponse::Ok().body("<html><body><nav id=\"nav\">...</nav>...</body></html>")
///     }
/// }
/// ```
pub struct HtmxMiddleware;

impl<S, B> Transform<S, ServiceRequest> for HtmxMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = InnerHtmxMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(InnerHtmxMiddleware { service }))
    }
}

#[doc(hidden)]
#[non_exhaustive]
pub struct InnerHtmxMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for InnerHtmxMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let htmx = Htmx::new(&req);

        req.extensions_mut().insert(htmx);

        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res: ServiceResponse<B> = fut.await?;

            if !varies_on_fragment(res.headers()) {
                debug!("Adding {} to Vary", RequestHeaders::HX_FRAGMENT);
                res.headers_mut().append(
                    VARY,
                    HeaderValue::from_static(RequestHeaders::HX_FRAGMENT),
                );
            }

            Ok(res)
        })
    }
}

fn varies_on_fragment(headers: &HeaderMap) -> bool {
    headers
        .get_all(VARY)
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .any(|field| field == "*" || field.eq_ignore_ascii_case(RequestHeaders::HX_FRAGMENT))
}
