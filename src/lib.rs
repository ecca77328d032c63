//! # htmx-fragments
//!
//! `htmx-fragments` implements the htmx `fragments` extension: a request
//! triggered by an element with an `hx-fragment` attribute carries an
//! `HX-Fragment` header naming the part of the page the element wants back.
//!
//! The crate covers both ends of that header:
//!
//! - **Client side**: an [`ExtensionRegistry`] that lifecycle events are dispatched
//!   through, and the [`fragments`] extension that writes the header while a
//!   request is being configured. Elements are read through [`AttributeSource`],
//!   headers are written into [`OutgoingHeaders`].
//! - **Server side**: [`HtmxMiddleware`] and the [`Htmx`] extractor for Actix Web,
//!   which expose the requested fragment (and the other htmx request headers) to
//!   handlers and mark the responses of wrapped routes with `Vary`.
//!
//! # Getting Started
//! On the client, define the extension once while setting up and dispatch events
//! as requests are prepared:
//!
//! ```
//! use htmx_fragments::{fragments, ExtensionRegistry, LifecycleEvent, OutgoingHeaders};
//! use std::collections::HashMap;
//!
//! let mut registry = ExtensionRegistry::new();
//! fragments::register(&mut registry);
//!
//! let link: HashMap<String, String> = [
//!     ("hx-get".to_string(), "/features".to_string()),
//!     ("hx-fragment".to_string(), "content".to_string()),
//! ]
//! .into();
//!
//! let mut headers = OutgoingHeaders::new();
//! registry.dispatch(&LifecycleEvent::ConfigRequest, &link, &mut headers);
//! assert_eq!(headers.get("HX-Fragment"), Some("content"));
//! ```
//!
//! On the server, register [`HtmxMiddleware`] on your `App` and use the [`Htmx`]
//! extractor in your handlers:
//!
//! ```no_run
//! use htmx_fragments::{Htmx, HtmxMiddleware};
//! use actix_web::{web, App, HttpResponse, HttpServer, Responder};
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     HttpServer::new(|| {
//!         App::new()
//!             .wrap(HtmxMiddleware)
//!             .route("/features", web::get().to(features))
//!     })
//!     .bind("127.0.0.1:8080")?
//!     .run()
//!     .await
//! }
//!
//! async fn features(htmx: Htmx) -> impl Responder {
//!     match htmx.fragment() {
//!         Some("content") => HttpResponse::Ok().body("<main id=\"content\">...</main>"),
//!         _ => HttpResponse::Ok().body("<html><body><main id=\"content\">...</main></body></html>"),
//!     }
//! }
//! ```

mod attributes;
mod event;
mod extension;
pub mod fragments;
mod headers;
mod htmx;
mod middleware;
mod request;

pub use self::{
    attributes::AttributeSource,
    event::LifecycleEvent,
    extension::{Extension, ExtensionRegistry},
    fragments::FragmentsExtension,
    htmx::Htmx,
    middleware::HtmxMiddleware,
    request::OutgoingHeaders,
};
