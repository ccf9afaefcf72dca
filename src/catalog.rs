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

use std::sync::LazyLock;

use crate::content;

/// One unit of instructional content: theory, an editable starter exercise,
/// its reference solution, and a sequence of hints.
#[derive(Clone, Copy)]
pub struct Lesson {
    /// Stable unique identifier, used as a URL path segment and as a member
    /// of the persisted completion set.
    pub id: &'static str,
    /// Chapter grouping key.
    pub chapter: u32,
    /// Display label of the chapter. Identical across all lessons sharing a
    /// chapter number.
    pub chapter_title: &'static str,
    /// Display label of the lesson.
    pub title: &'static str,
    /// Theory text, in markdown.
    pub theory: &'static str,
    /// The exercise's initial document.
    pub starter_code: &'static str,
    /// The exercise's reference final document.
    pub solution: &'static str,
    /// Hints, revealed one at a time.
    pub hints: &'static [&'static str],
}

/// A chapter and its lessons, in catalog order.
pub struct Chapter {
    pub number: u32,
    pub title: &'static str,
    pub lessons: Vec<&'static Lesson>,
}

// The canonical lesson sequence: chapter 1 first, in authored order, then
// chapter 2, and so on. The concatenation order defines the sequence shown
// to learners and must not be re-sorted.
static LESSONS: LazyLock<Vec<Lesson>> = LazyLock::new(|| {
    let mut lessons = Vec::new();
    lessons.extend_from_slice(content::intro::LESSONS);
    lessons.extend_from_slice(content::template::LESSONS);
    lessons.extend_from_slice(content::reactivity::LESSONS);
    lessons.extend_from_slice(content::components::LESSONS);
    lessons.extend_from_slice(content::lifecycle::LESSONS);
    lessons.extend_from_slice(content::composables::LESSONS);
    lessons
});

/// All lessons, in canonical order.
pub fn lessons() -> &'static [Lesson] {
    &LESSONS
}

/// Find a lesson by id. `None` is an expected outcome (e.g. a bad route
/// parameter), not an error.
pub fn lesson_by_id(id: &str) -> Option<&'static Lesson> {
    lessons().iter().find(|lesson| lesson.id == id)
}

/// Group the lesson sequence into chapters, preserving the first-seen order
/// of chapter numbers. Each chapter's title is taken from the first lesson
/// encountered with that number.
pub fn chapters() -> Vec<Chapter> {
    let mut chapters: Vec<Chapter> = Vec::new();
    for lesson in lessons() {
        match chapters
            .iter_mut()
            .find(|chapter| chapter.number == lesson.chapter)
        {
            Some(chapter) => chapter.lessons.push(lesson),
            None => chapters.push(Chapter {
                number: lesson.chapter,
                title: lesson.chapter_title,
                lessons: vec![lesson],
            }),
        }
    }
    chapters
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_lesson_by_id() {
        let lesson = lesson_by_id("intro-hello").unwrap();
        assert_eq!(lesson.title, "Hello, Vue!");
        assert_eq!(lesson.chapter, 1);
    }

    #[test]
    fn test_lesson_by_id_finds_every_lesson() {
        for lesson in lessons() {
            let found = lesson_by_id(lesson.id).unwrap();
            assert_eq!(found.id, lesson.id);
        }
    }

    #[test]
    fn test_lesson_by_id_miss() {
        assert!(lesson_by_id("does-not-exist").is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut seen = HashSet::new();
        for lesson in lessons() {
            assert!(seen.insert(lesson.id), "duplicate lesson id: {}", lesson.id);
        }
    }

    #[test]
    fn test_chapter_order() {
        let numbers: Vec<u32> = chapters().iter().map(|c| c.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_chapter_one_contents() {
        let chapters = chapters();
        let intro = &chapters[0];
        assert_eq!(intro.title, "Introduction");
        let ids: Vec<&str> = intro.lessons.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec!["intro-hello", "intro-setup"]);
    }

    #[test]
    fn test_chapters_partition_the_catalog() {
        let grouped: usize = chapters().iter().map(|c| c.lessons.len()).sum();
        assert_eq!(grouped, lessons().len());
    }

    #[test]
    fn test_grouping_preserves_catalog_order() {
        let flattened: Vec<&str> = chapters()
            .iter()
            .flat_map(|c| c.lessons.iter().map(|l| l.id))
            .collect();
        let canonical: Vec<&str> = lessons().iter().map(|l| l.id).collect();
        assert_eq!(flattened, canonical);
    }

    #[test]
    fn test_chapter_titles_are_consistent() {
        for chapter in chapters() {
            for lesson in &chapter.lessons {
                assert_eq!(lesson.chapter_title, chapter.title);
            }
        }
    }
}
