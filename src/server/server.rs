// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::time::Duration;

use axum::Router;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::http::header::CACHE_CONTROL;
use axum::http::header::CONTENT_TYPE;
use axum::response::Html;
use axum::routing::get;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::net::TcpStream;
use tokio::time::sleep;

use crate::catalog::lessons;
use crate::config::Config;
use crate::error::Fallible;
use crate::progress::ProgressStore;
use crate::server::get::home_handler;
use crate::server::get::lesson_handler;
use crate::server::post::home_post_handler;
use crate::server::post::lesson_post_handler;
use crate::server::state::ServerState;
use crate::server::template::page_template;
use crate::server::view::not_found;
use crate::storage::Storage;

pub async fn start_server(config: Config) -> Fallible<()> {
    let storage = Storage::open(&config.state_dir)?;
    let progress = ProgressStore::open(storage);
    log::debug!(
        "Serving {} lessons, {} already completed.",
        lessons().len(),
        progress.completed().len()
    );

    // Log completion changes as they happen.
    let mut changes = progress.subscribe();
    tokio::spawn(async move {
        while changes.changed().await.is_ok() {
            let count = changes.borrow_and_update().len();
            log::debug!("{count} lessons completed.");
        }
    });

    let state = ServerState { progress };
    let app = Router::new();
    let app = app.route("/", get(home_handler));
    let app = app.route("/", post(home_post_handler));
    let app = app.route("/lesson/{id}", get(lesson_handler));
    let app = app.route("/lesson/{id}", post(lesson_post_handler));
    let app = app.route("/style.css", get(stylesheet));
    let app = app.route("/script.js", get(script));
    let app = app.fallback(not_found_handler);
    let app = app.with_state(state);
    let bind = format!("127.0.0.1:{}", config.port);

    // Start a separate task to open the browser once the socket accepts
    // connections.
    if config.open {
        let url = format!("http://{bind}/");
        let probe = bind.clone();
        tokio::spawn(async move {
            loop {
                if let Ok(stream) = TcpStream::connect(&probe).await {
                    drop(stream);
                    break;
                }
                sleep(Duration::from_millis(1)).await;
            }
            let _ = open::that(url);
        });
    }

    // Start the server.
    log::debug!("Starting server on {bind}");
    let listener = TcpListener::bind(&bind).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn script() -> (StatusCode, [(HeaderName, &'static str); 1], &'static str) {
    (
        StatusCode::OK,
        [(CONTENT_TYPE, "text/javascript")],
        include_str!("script.js"),
    )
}

async fn stylesheet() -> (StatusCode, [(HeaderName, &'static str); 2], &'static [u8]) {
    let bytes = include_bytes!("style.css");
    (
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/css"),
            (CACHE_CONTROL, "public, max-age=604800, immutable"),
        ],
        bytes,
    )
}

async fn not_found_handler() -> (StatusCode, Html<String>) {
    let html = page_template("Not Found", not_found());
    (StatusCode::NOT_FOUND, Html(html.into_string()))
}
