use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const MIN_SIDEBAR_WIDTH: u16 = 12;
const DEFAULT_SIDEBAR_WIDTH: u16 = 22;
const DEFAULT_LOG_FILTER: &str = "pageshell=info";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub sidebar_width: u16,
    pub mouse: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            sidebar_width: DEFAULT_SIDEBAR_WIDTH,
            mouse: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LogConfig {
    pub file: Option<PathBuf>,
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl UiConfig {
    pub fn sidebar_width(&self) -> u16 {
        self.sidebar_width.max(MIN_SIDEBAR_WIDTH)
    }
}

impl LogConfig {
    pub fn filter(&self) -> &str {
        self.filter
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_LOG_FILTER)
    }
}

/// Result of a config lookup. `warning` is set when a file existed but
/// could not be used and defaults were substituted.
#[derive(Debug, Clone, Default)]
pub struct Loaded {
    pub config: Config,
    pub path: Option<PathBuf>,
    pub warning: Option<String>,
}

pub fn load(explicit: Option<&Path>) -> Loaded {
    let path = explicit.map(Path::to_path_buf).or_else(config_path);
    let Some(path) = path else {
        return Loaded::default();
    };
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound && explicit.is_none() => {
            return Loaded {
                path: Some(path),
                ..Loaded::default()
            };
        }
        Err(err) => {
            return Loaded {
                warning: Some(format!("Config {} unreadable: {err}", path.display())),
                path: Some(path),
                config: Config::default(),
            };
        }
    };
    match parse(&content) {
        Ok(config) => Loaded {
            config,
            path: Some(path),
            warning: None,
        },
        Err(err) => Loaded {
            warning: Some(format!("Config {} invalid: {}", path.display(), err.message())),
            path: Some(path),
            config: Config::default(),
        },
    }
}

pub fn parse(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(content)
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("PAGESHELL_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("pageshell").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("pageshell").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "pageshell", "pageshell")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
