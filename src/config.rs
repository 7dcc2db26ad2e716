// Copyright 2026 The xi-editor Authors.
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

//! User settings, loaded from a TOML file.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::LevelFilter;
use serde_derive::Deserialize;

use crate::error::Error;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "XI_LB_CONFIG";

/// What to print for the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// The text, with a marker before every break opportunity.
    Annotate,
    /// One JSON record per codepoint.
    Json,
    /// One line per codepoint with its class.
    Classes,
    /// The text wrapped greedily to a column width.
    Wrap,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Mode, Error> {
        match s {
            "annotate" => Ok(Mode::Annotate),
            "json" => Ok(Mode::Json),
            "classes" => Ok(Mode::Classes),
            "wrap" => Ok(Mode::Wrap),
            _ => Err(Error::Usage(format!("unknown mode {:?}", s))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub mode: Mode,
    /// Column width for `Mode::Wrap`.
    pub width: usize,
    pub allow_marker: String,
    pub force_marker: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            mode: Mode::Annotate,
            width: 80,
            allow_marker: "÷".into(),
            force_marker: "!".into(),
            log_level: "info".into(),
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(s)
    }

    /// Loads the config from `explicit`, else from the file named by
    /// `XI_LB_CONFIG`, else from the user config directory. A missing file
    /// in the user config directory means the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Config, Error> {
        let from_env = env::var_os(CONFIG_ENV).map(PathBuf::from);
        match config_path(explicit, from_env, default_config_path()) {
            Some(path) => Config::load_file(&path),
            None => Ok(Config::default()),
        }
    }

    fn load_file(path: &Path) -> Result<Config, Error> {
        let contents = fs::read_to_string(path)?;
        Config::from_toml_str(&contents).map_err(|e| Error::Config(path.to_owned(), e))
    }

    /// The configured log level, `Info` if it does not parse.
    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

// The file to read, if any. The default location only counts if it exists.
fn config_path(
    explicit: Option<&Path>,
    from_env: Option<PathBuf>,
    default: Option<PathBuf>,
) -> Option<PathBuf> {
    explicit
        .map(Path::to_owned)
        .or(from_env)
        .or_else(|| default.filter(|path| path.exists()))
}

/// `$CONFIG_DIR/xi-lb/config.toml`, where the config dir is platform specific.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("xi-lb").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs::File;
    use std::io::Write;

    use tempdir::TempDir;

    #[test]
    fn defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.mode, Mode::Annotate);
        assert_eq!(config.width, 80);
        assert_eq!(config.log_level(), LevelFilter::Info);
    }

    #[test]
    fn partial_overrides() {
        let config = Config::from_toml_str(
            r#"
mode = "wrap"
width = 40
allow_marker = "|"
log_level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(config.mode, Mode::Wrap);
        assert_eq!(config.width, 40);
        assert_eq!(config.allow_marker, "|");
        assert_eq!(config.force_marker, "!");
        assert_eq!(config.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Config::from_toml_str(r#"mode = "sideways""#).is_err());
        assert!(Config::from_toml_str("width = -3").is_err());
        assert!(Config::from_toml_str("colour = true").is_err());
    }

    #[test]
    fn unparsable_level_is_info() {
        let config = Config::from_toml_str(r#"log_level = "loud""#).unwrap();
        assert_eq!(config.log_level(), LevelFilter::Info);
    }

    #[test]
    fn mode_from_str() {
        assert_eq!("json".parse::<Mode>().unwrap(), Mode::Json);
        assert_eq!("classes".parse::<Mode>().unwrap(), Mode::Classes);
        match "nope".parse::<Mode>() {
            Err(Error::Usage(_)) => (),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn load_explicit_file() {
        let dir = TempDir::new("xi-lb-config").unwrap();
        let path = dir.path().join("config.toml");
        let mut f = File::create(&path).unwrap();
        f.write_all(b"width = 12\nforce_marker = \"#\"\n").unwrap();
        drop(f);

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.width, 12);
        assert_eq!(config.force_marker, "#");
    }

    #[test]
    fn config_path_order() {
        let dir = TempDir::new("xi-lb-config").unwrap();
        let explicit = dir.path().join("explicit.toml");
        let from_env = dir.path().join("env.toml");
        let default = dir.path().join("config.toml");

        // The default location is skipped until it exists.
        assert_eq!(config_path(None, None, Some(default.clone())), None);
        assert_eq!(config_path(None, None, None), None);
        fs::write(&default, "width = 7\n").unwrap();
        assert_eq!(config_path(None, None, Some(default.clone())), Some(default.clone()));

        // The env path is used whether or not it exists.
        assert_eq!(
            config_path(None, Some(from_env.clone()), Some(default.clone())),
            Some(from_env.clone())
        );
        assert_eq!(
            config_path(Some(&explicit), Some(from_env), Some(default)),
            Some(explicit)
        );
    }

    #[test]
    fn load_from_env() {
        let dir = TempDir::new("xi-lb-config").unwrap();
        let path = dir.path().join("env.toml");
        fs::write(&path, "mode = \"classes\"\n").unwrap();

        env::set_var(CONFIG_ENV, &path);
        let config = Config::load(None);
        env::remove_var(CONFIG_ENV);
        assert_eq!(config.unwrap().mode, Mode::Classes);
    }

    #[test]
    fn load_errors() {
        let dir = TempDir::new("xi-lb-config").unwrap();
        let missing = dir.path().join("missing.toml");
        match Config::load(Some(&missing)) {
            Err(Error::Io(_)) => (),
            other => panic!("unexpected {:?}", other),
        }

        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "width = [").unwrap();
        match Config::load(Some(&bad)) {
            Err(Error::Config(ref path, _)) => assert_eq!(path, &bad),
            other => panic!("unexpected {:?}", other),
        }
    }
}
