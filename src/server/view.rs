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

use maud::Markup;
use maud::PreEscaped;
use maud::html;

use crate::catalog::Lesson;
use crate::catalog::chapters;
use crate::catalog::lessons;
use crate::markdown::markdown_to_html;
use crate::progress::Completed;

/// The table of contents: every chapter in catalog order, with completion
/// badges and an overall progress count.
pub fn home(completed: &Completed) -> Markup {
    let total = lessons().len();
    let done_count = lessons()
        .iter()
        .filter(|lesson| completed.contains(lesson.id))
        .count();
    html! {
        div.home {
            div.masthead {
                h1 { "Learn Vue" }
                p.tagline { "Interactive lessons with live-editable exercises." }
                div.progress-summary {
                    (done_count) " / " (total) " lessons completed"
                }
            }
            @for chapter in chapters() {
                section.chapter {
                    h2 { (chapter.number) ". " (chapter.title) }
                    ul.lessons {
                        @for lesson in &chapter.lessons {
                            li {
                                @if completed.contains(lesson.id) {
                                    span.badge.done { "✓" }
                                } @else {
                                    span.badge {}
                                }
                                a href=(format!("/lesson/{}", lesson.id)) { (lesson.title) }
                            }
                        }
                    }
                }
            }
            @if done_count > 0 {
                form.reset action="/" method="post" {
                    button name="action" value="Reset" title="Clear all saved progress" {
                        "Start over"
                    }
                }
            }
        }
    }
}

/// A lesson page: theory on the left, the editable exercise with its live
/// preview on the right, hints and the solution below.
pub fn lesson_page(lesson: &Lesson, done: bool) -> Markup {
    let theory = markdown_to_html(lesson.theory);
    let (prev, next) = neighbors(lesson.id);
    html! {
        div.lesson {
            header.lesson-header {
                a.back href="/" { "← Contents" }
                div.heading {
                    h1 { (lesson.title) }
                    div.chapter-label {
                        "Chapter " (lesson.chapter) ": " (lesson.chapter_title)
                    }
                }
                @if done {
                    span.badge.done { "Completed" }
                }
            }
            div.columns {
                div.theory.rich-text {
                    (PreEscaped(theory))
                }
                div.exercise {
                    textarea #editor spellcheck="false" autocomplete="off" {
                        (lesson.starter_code)
                    }
                    iframe #preview title="Live preview" {}
                }
            }
            div.hints {
                @for (i, hint) in lesson.hints.iter().enumerate() {
                    details.hint {
                        summary { "Hint " (i + 1) }
                        div.rich-text { (PreEscaped(markdown_to_html(hint))) }
                    }
                }
                details.solution {
                    summary { "Show solution" }
                    pre { code { (lesson.solution) } }
                }
            }
            div.controls {
                form action=(format!("/lesson/{}", lesson.id)) method="post" {
                    @if done {
                        button name="action" value="Unmark" { "Mark as not done" }
                    } @else {
                        button name="action" value="MarkDone" { "Mark as done" }
                    }
                }
                nav.neighbors {
                    @if let Some(prev) = prev {
                        a.prev href=(format!("/lesson/{}", prev.id)) { "← " (prev.title) }
                    }
                    @if let Some(next) = next {
                        a.next href=(format!("/lesson/{}", next.id)) { (next.title) " →" }
                    }
                }
            }
        }
    }
}

pub fn not_found() -> Markup {
    html! {
        div.not-found {
            h1 { "Not Found" }
            p {
                a href="/" { "Back to the contents" }
            }
        }
    }
}

// Previous and next lesson in the canonical sequence.
fn neighbors(id: &str) -> (Option<&'static Lesson>, Option<&'static Lesson>) {
    let lessons = lessons();
    match lessons.iter().position(|lesson| lesson.id == id) {
        Some(index) => {
            let prev = index.checked_sub(1).map(|i| &lessons[i]);
            let next = lessons.get(index + 1);
            (prev, next)
        }
        None => (None, None),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_neighbors_of_first_lesson() {
        let (prev, next) = neighbors("intro-hello");
        assert!(prev.is_none());
        assert_eq!(next.unwrap().id, "intro-setup");
    }

    #[test]
    fn test_neighbors_cross_chapter_boundary() {
        let (prev, next) = neighbors("tmpl-interpolation");
        assert_eq!(prev.unwrap().id, "intro-setup");
        assert_eq!(next.unwrap().id, "tmpl-vbind");
    }

    #[test]
    fn test_neighbors_of_last_lesson() {
        let (prev, next) = neighbors("comp-usefetch");
        assert_eq!(prev.unwrap().id, "comp-what");
        assert!(next.is_none());
    }

    #[test]
    fn test_home_lists_every_lesson() {
        let html = home(&Arc::new(BTreeSet::new())).into_string();
        for lesson in lessons() {
            assert!(html.contains(&format!("/lesson/{}", lesson.id)));
        }
    }

    #[test]
    fn test_home_shows_completion() {
        let completed: BTreeSet<String> = ["intro-hello".to_string()].into_iter().collect();
        let html = home(&Arc::new(completed)).into_string();
        assert!(html.contains("✓"));
        assert!(html.contains("1 / 19 lessons completed"));
    }

    #[test]
    fn test_lesson_page_escapes_starter_code() {
        let lesson = crate::catalog::lesson_by_id("intro-hello").unwrap();
        let html = lesson_page(lesson, false).into_string();
        // The starter document must land inside the textarea escaped, not as
        // live markup.
        assert!(html.contains("&lt;!DOCTYPE html&gt;"));
        assert!(html.contains("Mark as done"));
    }

    #[test]
    fn test_lesson_page_done_state() {
        let lesson = crate::catalog::lesson_by_id("intro-hello").unwrap();
        let html = lesson_page(lesson, true).into_string();
        assert!(html.contains("Completed"));
        assert!(html.contains("Mark as not done"));
    }
}
