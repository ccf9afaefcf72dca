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

use std::fs::read_to_string;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::Fallible;

/// Name of the optional configuration file, looked up in the current
/// directory.
pub const CONFIG_FILE: &str = "vuelearn.toml";

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATE_DIR: &str = ".vuelearn";

/// The raw configuration file. Every field is optional; flags take
/// precedence over the file, the file over built-in defaults.
#[derive(Deserialize, Default)]
pub struct ConfigFile {
    port: Option<u16>,
    state_dir: Option<String>,
    open: Option<bool>,
}

/// Resolved settings.
pub struct Config {
    pub port: u16,
    pub state_dir: PathBuf,
    pub open: bool,
}

impl Config {
    /// Load the configuration, layering command-line overrides on top of the
    /// optional config file. A missing file is fine; a malformed one is an
    /// error.
    pub fn load(port: Option<u16>, state_dir: Option<String>, no_open: bool) -> Fallible<Self> {
        let file = read_config_file(Path::new(CONFIG_FILE))?;
        Ok(resolve(file, port, state_dir, no_open))
    }
}

fn read_config_file(path: &Path) -> Fallible<ConfigFile> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let contents = read_to_string(path)?;
    let file: ConfigFile = toml::from_str(&contents)?;
    Ok(file)
}

fn resolve(
    file: ConfigFile,
    port: Option<u16>,
    state_dir: Option<String>,
    no_open: bool,
) -> Config {
    Config {
        port: port.or(file.port).unwrap_or(DEFAULT_PORT),
        state_dir: state_dir
            .or(file.state_dir)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_DIR)),
        open: if no_open {
            false
        } else {
            file.open.unwrap_or(true)
        },
    }
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = resolve(ConfigFile::default(), None, None, false);
        assert_eq!(config.port, 8000);
        assert_eq!(config.state_dir, PathBuf::from(".vuelearn"));
        assert!(config.open);
    }

    #[test]
    fn test_file_overrides_defaults() -> Fallible<()> {
        let file: ConfigFile = toml::from_str("port = 9090\nstate_dir = \"progress\"")?;
        let config = resolve(file, None, None, false);
        assert_eq!(config.port, 9090);
        assert_eq!(config.state_dir, PathBuf::from("progress"));
        Ok(())
    }

    #[test]
    fn test_flags_override_file() -> Fallible<()> {
        let file: ConfigFile = toml::from_str("port = 9090\nopen = true")?;
        let config = resolve(file, Some(7070), Some("elsewhere".to_string()), true);
        assert_eq!(config.port, 7070);
        assert_eq!(config.state_dir, PathBuf::from("elsewhere"));
        assert!(!config.open);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_fine() -> Fallible<()> {
        let dir = tempdir()?;
        let file = read_config_file(&dir.path().join("vuelearn.toml"))?;
        assert!(file.port.is_none());
        Ok(())
    }

    #[test]
    fn test_malformed_file_is_an_error() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("vuelearn.toml");
        write(&path, "port = \"not a number")?;
        assert!(read_config_file(&path).is_err());
        Ok(())
    }
}
