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

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;

use crate::catalog::lesson_by_id;
use crate::server::state::ServerState;
use crate::server::template::page_template;
use crate::server::view::home;
use crate::server::view::lesson_page;
use crate::server::view::not_found;

pub async fn home_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let completed = state.progress.completed();
    let html = page_template("Contents", home(&completed));
    (StatusCode::OK, Html(html.into_string()))
}

pub async fn lesson_handler(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> (StatusCode, Html<String>) {
    match lesson_by_id(&id) {
        Some(lesson) => {
            let done = state.progress.is_done(&id);
            let html = page_template(lesson.title, lesson_page(lesson, done));
            (StatusCode::OK, Html(html.into_string()))
        }
        // A bad id is an expected outcome, e.g. a stale bookmark.
        None => {
            let html = page_template("Not Found", not_found());
            (StatusCode::NOT_FOUND, Html(html.into_string()))
        }
    }
}
