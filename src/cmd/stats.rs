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

use std::fmt::Display;
use std::fmt::Formatter;
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;

use crate::catalog::chapters;
use crate::error::Fallible;
use crate::progress::Completed;
use crate::progress::ProgressStore;
use crate::storage::Storage;

#[derive(ValueEnum, Clone)]
pub enum StatsFormat {
    /// Plain text output.
    Text,
    /// JSON output.
    Json,
}

impl Display for StatsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsFormat::Text => write!(f, "text"),
            StatsFormat::Json => write!(f, "json"),
        }
    }
}

pub fn print_progress_stats(state_dir: &Path, format: StatsFormat) -> Fallible<()> {
    let storage = Storage::open(state_dir)?;
    let store = ProgressStore::open(storage);
    let stats = collect_stats(&store.completed());

    match format {
        StatsFormat::Text => {
            for chapter in &stats.chapters {
                println!(
                    "{}. {}: {}/{}",
                    chapter.chapter, chapter.title, chapter.completed_count, chapter.lesson_count
                );
            }
            println!(
                "total: {}/{}",
                stats.completed_count, stats.lesson_count
            );
        }
        StatsFormat::Json => {
            let stats_json = serde_json::to_string_pretty(&stats)?;
            println!("{}", stats_json);
        }
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Stats {
    lesson_count: usize,
    completed_count: usize,
    chapters: Vec<ChapterStats>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChapterStats {
    chapter: u32,
    title: &'static str,
    lesson_count: usize,
    completed_count: usize,
}

fn collect_stats(completed: &Completed) -> Stats {
    let chapters: Vec<ChapterStats> = chapters()
        .into_iter()
        .map(|chapter| ChapterStats {
            chapter: chapter.number,
            title: chapter.title,
            lesson_count: chapter.lessons.len(),
            completed_count: chapter
                .lessons
                .iter()
                .filter(|lesson| completed.contains(lesson.id))
                .count(),
        })
        .collect();
    Stats {
        lesson_count: chapters.iter().map(|c| c.lesson_count).sum(),
        completed_count: chapters.iter().map(|c| c.completed_count).sum(),
        chapters,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_collect_stats_empty() {
        let stats = collect_stats(&Arc::new(BTreeSet::new()));
        assert_eq!(stats.lesson_count, 19);
        assert_eq!(stats.completed_count, 0);
        assert_eq!(stats.chapters.len(), 6);
    }

    #[test]
    fn test_collect_stats_counts_per_chapter() {
        let completed: BTreeSet<String> = ["intro-hello", "intro-setup", "react-ref"]
            .iter()
            .map(|id| id.to_string())
            .collect();
        let stats = collect_stats(&Arc::new(completed));
        assert_eq!(stats.completed_count, 3);
        assert_eq!(stats.chapters[0].completed_count, 2);
        assert_eq!(stats.chapters[2].completed_count, 1);
        assert_eq!(stats.chapters[1].completed_count, 0);
    }

    #[test]
    fn test_ids_not_in_catalog_are_ignored() {
        let completed: BTreeSet<String> = ["no-such-lesson"].iter().map(|id| id.to_string()).collect();
        let stats = collect_stats(&Arc::new(completed));
        assert_eq!(stats.completed_count, 0);
    }
}
