mod config;
mod db;
mod error;
mod repository;
mod seed;
mod services;
mod state;
mod storage;
#[cfg(test)]
mod test_support;

use crate::config::Config;
use crate::state::AppState;
use actix_web::{middleware, web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::io;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the embedded front end. Unknown paths get `index.html` so the
/// client-side router can resolve them.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::from_env().map_err(io::Error::other)?;

    let state = AppState::from_config(&config);
    state.db.migrate().map_err(io::Error::other)?;
    std::fs::create_dir_all(state.storage.root())?;
    if config.seed_demo_data {
        let conn = state.db.connect().map_err(io::Error::other)?;
        seed::seed_demo_data(&conn).map_err(io::Error::other)?;
    }
    info!(
        "Using database {} and storage {}",
        state.db.path().display(),
        state.storage.root().display()
    );

    let url = config.url();
    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                warn!("Could not open a browser: {}", e);
            }
        });
    }

    info!("Server running at {}", url);

    let storage_root = config.storage_root.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(services::configure)
            .service(actix_files::Files::new("/storage", &storage_root))
            .default_service(web::route().to(serve_embedded))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
