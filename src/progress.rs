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

use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::Mutex;

use tokio::sync::watch;

use crate::storage::Storage;

/// The storage key under which the completion record is persisted. The value
/// is a flat JSON array of lesson ids.
pub const PROGRESS_KEY: &str = "vue-learn-progress";

/// An immutable snapshot of the completion set. Every mutation builds a new
/// set and replaces the snapshot wholesale, so a snapshot in a reader's hands
/// never changes underneath it.
pub type Completed = Arc<BTreeSet<String>>;

/// Tracks which lessons the learner has completed, mirrored to durable
/// storage on every mutation. Clones share the same underlying state: there
/// is one completion set per process, and a mutation through any handle is
/// immediately visible through all of them.
#[derive(Clone)]
pub struct ProgressStore {
    storage: Storage,
    // The watch channel holds the authoritative snapshot and notifies
    // subscribers when it is replaced. The mutex serializes read-modify-write
    // of the snapshot together with its durable mirror.
    state: Arc<Mutex<watch::Sender<Completed>>>,
}

impl ProgressStore {
    /// Open the store, initializing the completion set from the saved record.
    /// An absent or malformed record is treated as an empty set.
    pub fn open(storage: Storage) -> Self {
        let completed: Completed = Arc::new(load_saved(&storage));
        let (state, _) = watch::channel(completed);
        Self {
            storage,
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Mark a lesson as completed. Marking an already-completed lesson is a
    /// no-op in effect. The updated set is persisted before this returns.
    pub fn mark_done(&self, id: &str) {
        let state = self.state.lock().unwrap();
        let mut next: BTreeSet<String> = (**state.borrow()).clone();
        next.insert(id.to_string());
        let next: Completed = Arc::new(next);
        self.persist(&next);
        state.send_replace(next);
    }

    /// Remove a lesson from the completion set. Unmarking a lesson that was
    /// never marked is a no-op. The updated set is persisted before this
    /// returns.
    pub fn unmark(&self, id: &str) {
        let state = self.state.lock().unwrap();
        let mut next: BTreeSet<String> = (**state.borrow()).clone();
        next.remove(id);
        let next: Completed = Arc::new(next);
        self.persist(&next);
        state.send_replace(next);
    }

    /// Whether the lesson is currently marked as completed.
    pub fn is_done(&self, id: &str) -> bool {
        self.state.lock().unwrap().borrow().contains(id)
    }

    /// A snapshot of the current completion set.
    pub fn completed(&self) -> Completed {
        self.state.lock().unwrap().borrow().clone()
    }

    /// Clear the completion set and erase the durable record (rather than
    /// persisting an empty one).
    pub fn reset(&self) {
        let state = self.state.lock().unwrap();
        if let Err(e) = self.storage.remove(PROGRESS_KEY) {
            log::error!("failed to erase progress record: {e}");
        }
        state.send_replace(Arc::new(BTreeSet::new()));
    }

    /// Subscribe to completion-set changes. The receiver is notified every
    /// time the snapshot is replaced.
    pub fn subscribe(&self) -> watch::Receiver<Completed> {
        self.state.lock().unwrap().subscribe()
    }

    // Best effort: a failed write is reported but never surfaced to the
    // caller, and the in-memory set is unaffected.
    fn persist(&self, completed: &BTreeSet<String>) {
        match serde_json::to_string(completed) {
            Ok(record) => {
                if let Err(e) = self.storage.set(PROGRESS_KEY, &record) {
                    log::error!("failed to persist progress: {e}");
                }
            }
            Err(e) => {
                log::error!("failed to serialize progress: {e}");
            }
        }
    }
}

fn load_saved(storage: &Storage) -> BTreeSet<String> {
    match storage.get(PROGRESS_KEY) {
        Ok(Some(record)) => serde_json::from_str(&record).unwrap_or_default(),
        Ok(None) => BTreeSet::new(),
        Err(e) => {
            log::error!("failed to read progress record: {e}");
            BTreeSet::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::error::Fallible;

    fn empty_store() -> Fallible<(tempfile::TempDir, ProgressStore)> {
        let dir = tempdir()?;
        let storage = Storage::open(dir.path())?;
        Ok((dir, ProgressStore::open(storage)))
    }

    #[test]
    fn test_mark_done() -> Fallible<()> {
        let (_dir, store) = empty_store()?;
        assert!(!store.is_done("intro-hello"));
        store.mark_done("intro-hello");
        assert!(store.is_done("intro-hello"));
        Ok(())
    }

    #[test]
    fn test_mark_then_unmark_round_trips() -> Fallible<()> {
        let (_dir, store) = empty_store()?;
        store.mark_done("intro-hello");
        store.unmark("intro-hello");
        assert!(!store.is_done("intro-hello"));
        assert!(store.completed().is_empty());
        Ok(())
    }

    #[test]
    fn test_mark_done_is_idempotent() -> Fallible<()> {
        let (_dir, store) = empty_store()?;
        store.mark_done("intro-hello");
        let once = store.completed();
        store.mark_done("intro-hello");
        let twice = store.completed();
        assert_eq!(once, twice);
        Ok(())
    }

    #[test]
    fn test_unmark_absent_id_is_noop() -> Fallible<()> {
        let (_dir, store) = empty_store()?;
        store.unmark("never-seen");
        assert!(!store.is_done("never-seen"));
        Ok(())
    }

    #[test]
    fn test_reset_clears_and_erases_record() -> Fallible<()> {
        let dir = tempdir()?;
        let storage = Storage::open(dir.path())?;
        let store = ProgressStore::open(storage.clone());
        store.mark_done("intro-hello");
        store.mark_done("intro-setup");
        store.reset();
        assert!(!store.is_done("intro-hello"));
        assert!(!store.is_done("intro-setup"));
        // The record is gone, not merely empty.
        assert_eq!(storage.get(PROGRESS_KEY)?, None);
        // Resetting twice is safe.
        store.reset();
        Ok(())
    }

    #[test]
    fn test_corrupted_record_treated_as_empty() -> Fallible<()> {
        let dir = tempdir()?;
        let storage = Storage::open(dir.path())?;
        storage.set(PROGRESS_KEY, "{not json")?;
        let store = ProgressStore::open(storage);
        assert!(store.completed().is_empty());
        Ok(())
    }

    #[test]
    fn test_progress_survives_reopen() -> Fallible<()> {
        let dir = tempdir()?;
        let storage = Storage::open(dir.path())?;
        {
            let store = ProgressStore::open(storage.clone());
            store.mark_done("react-ref");
        }
        let store = ProgressStore::open(storage);
        assert!(store.is_done("react-ref"));
        Ok(())
    }

    #[test]
    fn test_durable_record_contents() -> Fallible<()> {
        let dir = tempdir()?;
        let storage = Storage::open(dir.path())?;
        let store = ProgressStore::open(storage.clone());
        store.mark_done("intro-hello");
        store.mark_done("intro-setup");
        store.unmark("intro-hello");
        assert!(!store.is_done("intro-hello"));
        assert!(store.is_done("intro-setup"));
        assert_eq!(
            storage.get(PROGRESS_KEY)?,
            Some(r#"["intro-setup"]"#.to_string())
        );
        Ok(())
    }

    #[test]
    fn test_clones_share_state() -> Fallible<()> {
        let (_dir, store) = empty_store()?;
        let other = store.clone();
        store.mark_done("tmpl-vif");
        assert!(other.is_done("tmpl-vif"));
        Ok(())
    }

    #[test]
    fn test_subscribers_are_notified() -> Fallible<()> {
        let (_dir, store) = empty_store()?;
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());
        store.mark_done("intro-hello");
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().contains("intro-hello"));
        Ok(())
    }
}
