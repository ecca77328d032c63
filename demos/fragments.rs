use actix_web::middleware::Logger;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use htmx_fragments::{fragments, ExtensionRegistry, Htmx, HtmxMiddleware};
use std::collections::HashMap;

#[derive(Clone, Copy, PartialEq, Eq)]
enum NavSelected {
    Home,
    Features,
}

const NAV_ITEMS: [(NavSelected, &str, &str); 2] = [
    (NavSelected::Home, "/", "Home"),
    (NavSelected::Features, "/features", "Features"),
];

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // What a client sends when the "Features" link below is clicked.
    let mut registry = ExtensionRegistry::new();
    fragments::register(&mut registry);
    let link: HashMap<String, String> = [
        ("hx-get".to_string(), "/features".to_string()),
        ("hx-fragment".to_string(), "content".to_string()),
    ]
    .into();
    for (name, value) in registry.config_request(&link).iter() {
        log::info!("Clicking Features sends {}: {}", name, value);
    }

    HttpServer::new(|| {
        App::new()
            .wrap(HtmxMiddleware)
            .wrap(Logger::new("Request - Path: %U, Time: %Dms"))
            .route("/", web::get().to(home))
            .route("/features", web::get().to(features))
    })
    .bind("0.0.0.0:8080")?
    .run()
    .await
}

async fn home(htmx: Htmx) -> impl Responder {
    render(&htmx, NavSelected::Home, "Home", "Welcome!")
}

async fn features(htmx: Htmx) -> impl Responder {
    render(&htmx, NavSelected::Features, "Features", "Fragments, boosting and more.")
}

fn navbar(selected: NavSelected, oob: bool) -> String {
    let links: String = NAV_ITEMS
        .iter()
        .map(|(item, path, label)| {
            let class = if *item == selected { r#" class="selected""# } else { "" };
            format!(
                r##"<a href="{path}" hx-get="{path}" hx-target="#content" hx-swap="outerHTML" hx-fragment="content"{class}>{label}</a>"##
            )
        })
        .collect();
    let swap = if oob { r#" hx-swap-oob="true""# } else { "" };

    format!(r#"<nav id="nav"{swap}>{links}</nav>"#)
}

fn render(htmx: &Htmx, selected: NavSelected, title: &str, body: &str) -> HttpResponse {
    let content = format!(r#"<main id="content"><h1>{title}</h1><p>{body}</p></main>"#);

    let html = match htmx.fragment() {
        // The navbar rides along out of band so the selected entry follows the swap.
        Some("content") => format!("{content}{}", navbar(selected, true)),
        Some("nav") => navbar(selected, false),
        _ => format!(
            r#"<!DOCTYPE html>
<html>
    <head>
        <title>htmx fragments example</title>
        <script src="https://unpkg.com/htmx.org@2.0.6"></script>
    </head>
    <body hx-ext="fragments">
        {nav}
        {content}
    </body>
</html>
"#,
            nav = navbar(selected, false)
        ),
    };

    HttpResponse::Ok().content_type("text/html").body(html)
}
