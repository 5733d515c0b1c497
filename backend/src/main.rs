mod config;
mod services;

use crate::config::Config;
use crate::services::proxy::Upstream;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use clap::Parser;
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Paths the content API historically served the panel under.
const PANEL_ALIASES: [&str; 2] = ["", "feed-manager"];

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    embedded_response(&STATIC_DIR, req.path())
}

/// Looks `path` up in `dir`, falling back to `index.html` so the panel loads
/// from any unknown path.
fn embedded_response(dir: &Dir, path: &str) -> HttpResponse {
    let path = path.trim_matches('/');
    let file_path = if PANEL_ALIASES.contains(&path) { "index.html" } else { path };

    match dir.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match dir.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Painel não compilado"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::parse();
    let url = config.url();

    let upstream = Upstream::new(&config.upstream).map_err(std::io::Error::other)?;

    if STATIC_DIR.get_file("index.html").is_none() {
        warn!("panel assets missing: build the frontend with `trunk build` before the backend");
    }

    if !config.no_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    info!("Server running at {}", url);
    info!("Forwarding /api to {}", config.upstream);

    HttpServer::new(move || {
        App::new()
            .app_data(web::PayloadConfig::default().limit(1024 * 1024)) // 1 MB
            .app_data(web::Data::new(upstream.clone()))
            .service(services::proxy::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use include_dir::{DirEntry, File};

    static PANEL: Dir = Dir::new(
        "",
        &[
            DirEntry::File(File::new("index.html", b"<html>panel</html>")),
            DirEntry::File(File::new("frontend-1a2b.js", b"console.log(1)")),
        ],
    );

    async fn body_of(resp: HttpResponse) -> String {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[actix_web::test]
    async fn serves_assets_with_their_mime_type() {
        let resp = embedded_response(&PANEL, "/frontend-1a2b.js");
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().get("content-type").unwrap()
            .to_str()
            .unwrap()
            .contains("javascript"));
        assert_eq!(body_of(resp).await, "console.log(1)");
    }

    #[actix_web::test]
    async fn panel_aliases_and_unknown_paths_get_index() {
        for path in ["/", "/feed-manager", "/feed-manager/", "/anything/else"] {
            let resp = embedded_response(&PANEL, path);
            assert_eq!(resp.status(), StatusCode::OK);
            assert_eq!(body_of(resp).await, "<html>panel</html>");
        }
    }

    #[actix_web::test]
    async fn missing_build_is_not_found() {
        static EMPTY: Dir = Dir::new("", &[]);
        let resp = embedded_response(&EMPTY, "/");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
