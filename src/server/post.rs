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

use axum::Form;
use axum::extract::Path;
use axum::extract::State;
use axum::response::Redirect;
use serde::Deserialize;

use crate::server::state::ServerState;

#[derive(Debug, Deserialize)]
enum Action {
    MarkDone,
    Unmark,
    Reset,
}

#[derive(Deserialize)]
pub struct FormData {
    action: Action,
}

/// Actions on a lesson page. Marking a lesson that is already done, or
/// unmarking one that isn't, falls through to the store's set semantics.
pub async fn lesson_post_handler(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Form(form): Form<FormData>,
) -> Redirect {
    match form.action {
        Action::MarkDone => {
            log::debug!("marking {id} as done");
            state.progress.mark_done(&id);
        }
        Action::Unmark => {
            log::debug!("unmarking {id}");
            state.progress.unmark(&id);
        }
        Action::Reset => {
            state.progress.reset();
        }
    }
    Redirect::to(&format!("/lesson/{id}"))
}

/// Actions on the table of contents. Only `Reset` is meaningful here: the
/// per-lesson actions need a lesson id for context.
pub async fn home_post_handler(
    State(state): State<ServerState>,
    Form(form): Form<FormData>,
) -> Redirect {
    match form.action {
        Action::Reset => {
            log::debug!("resetting all progress");
            state.progress.reset();
        }
        Action::MarkDone | Action::Unmark => {}
    }
    Redirect::to("/")
}
