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

use std::path::Path;

use crate::error::Fallible;
use crate::progress::ProgressStore;
use crate::storage::Storage;

/// Clear all saved progress.
pub fn reset_progress(state_dir: &Path) -> Fallible<()> {
    let storage = Storage::open(state_dir)?;
    let store = ProgressStore::open(storage);
    store.reset();
    println!("Progress cleared.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::progress::PROGRESS_KEY;

    #[test]
    fn test_reset_progress() -> Fallible<()> {
        let dir = tempdir()?;
        let storage = Storage::open(dir.path())?;
        storage.set(PROGRESS_KEY, r#"["intro-hello"]"#)?;
        reset_progress(dir.path())?;
        assert_eq!(storage.get(PROGRESS_KEY)?, None);
        Ok(())
    }
}
