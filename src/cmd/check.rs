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

use std::collections::HashMap;
use std::collections::HashSet;

use crate::catalog::Lesson;
use crate::catalog::lessons;
use crate::error::Fallible;
use crate::error::fail;

/// Validate the catalog: lesson ids must be unique, and every lesson in a
/// chapter must carry the same chapter title. Neither invariant is enforced
/// at runtime (lookup takes the first match, grouping takes the first-seen
/// title), so this is where authoring mistakes surface.
pub fn check_catalog() -> Fallible<()> {
    let violations = find_violations(lessons());
    if violations.is_empty() {
        println!("ok");
        Ok(())
    } else {
        for violation in &violations {
            eprintln!("{violation}");
        }
        fail("catalog check failed.")
    }
}

fn find_violations(lessons: &[Lesson]) -> Vec<String> {
    let mut violations = Vec::new();
    let mut seen_ids: HashSet<&str> = HashSet::new();
    let mut chapter_titles: HashMap<u32, &str> = HashMap::new();
    for lesson in lessons {
        if !seen_ids.insert(lesson.id) {
            violations.push(format!("duplicate lesson id: {}", lesson.id));
        }
        match chapter_titles.get(&lesson.chapter) {
            Some(title) => {
                if *title != lesson.chapter_title {
                    violations.push(format!(
                        "lesson {} titles chapter {} {:?}, but it was first titled {:?}",
                        lesson.id, lesson.chapter, lesson.chapter_title, title
                    ));
                }
            }
            None => {
                chapter_titles.insert(lesson.chapter, lesson.chapter_title);
            }
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(id: &'static str, chapter: u32, chapter_title: &'static str) -> Lesson {
        Lesson {
            id,
            chapter,
            chapter_title,
            title: "",
            theory: "",
            starter_code: "",
            solution: "",
            hints: &[],
        }
    }

    #[test]
    fn test_shipped_catalog_is_clean() {
        assert!(check_catalog().is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let lessons = [lesson("a", 1, "One"), lesson("a", 1, "One")];
        let violations = find_violations(&lessons);
        assert_eq!(violations, vec!["duplicate lesson id: a".to_string()]);
    }

    #[test]
    fn test_divergent_chapter_title() {
        let lessons = [lesson("a", 1, "One"), lesson("b", 1, "Uno")];
        let violations = find_violations(&lessons);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("first titled"));
    }
}
