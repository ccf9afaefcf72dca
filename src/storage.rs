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

use std::fs::create_dir_all;
use std::fs::read_to_string;
use std::fs::remove_file;
use std::fs::write;
use std::path::PathBuf;

use crate::error::Fallible;

/// A durable key/value store: one file per key inside a state directory.
/// All operations are synchronous.
#[derive(Clone)]
pub struct Storage {
    directory: PathBuf,
}

impl Storage {
    /// Open the store, creating the state directory if needed.
    pub fn open(directory: impl Into<PathBuf>) -> Fallible<Self> {
        let directory = directory.into();
        create_dir_all(&directory)?;
        Ok(Self { directory })
    }

    /// Read the value under `key`. Returns `None` if the key was never
    /// written or has been removed.
    pub fn get(&self, key: &str) -> Fallible<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = read_to_string(path)?;
        Ok(Some(value))
    }

    /// Write `value` under `key`, replacing any previous value.
    pub fn set(&self, key: &str, value: &str) -> Fallible<()> {
        write(self.key_path(key), value)?;
        Ok(())
    }

    /// Remove `key` entirely. Removing an absent key is not an error.
    pub fn remove(&self, key: &str) -> Fallible<()> {
        let path = self.key_path(key);
        if path.exists() {
            remove_file(path)?;
        }
        Ok(())
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.directory.join(key)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_get_absent_key() -> Fallible<()> {
        let dir = tempdir()?;
        let storage = Storage::open(dir.path())?;
        assert_eq!(storage.get("missing")?, None);
        Ok(())
    }

    #[test]
    fn test_set_then_get() -> Fallible<()> {
        let dir = tempdir()?;
        let storage = Storage::open(dir.path())?;
        storage.set("greeting", "hello")?;
        assert_eq!(storage.get("greeting")?, Some("hello".to_string()));
        Ok(())
    }

    #[test]
    fn test_set_replaces() -> Fallible<()> {
        let dir = tempdir()?;
        let storage = Storage::open(dir.path())?;
        storage.set("greeting", "hello")?;
        storage.set("greeting", "goodbye")?;
        assert_eq!(storage.get("greeting")?, Some("goodbye".to_string()));
        Ok(())
    }

    #[test]
    fn test_remove() -> Fallible<()> {
        let dir = tempdir()?;
        let storage = Storage::open(dir.path())?;
        storage.set("greeting", "hello")?;
        storage.remove("greeting")?;
        assert_eq!(storage.get("greeting")?, None);
        // Removing twice is safe.
        storage.remove("greeting")?;
        Ok(())
    }

    #[test]
    fn test_open_creates_directory() -> Fallible<()> {
        let dir = tempdir()?;
        let nested = dir.path().join("a").join("b");
        let storage = Storage::open(&nested)?;
        storage.set("key", "value")?;
        assert!(nested.join("key").exists());
        Ok(())
    }
}
