//! Configuration management for autolink.
//!
//! Parses `autolink.toml` with serde and provides auto-discovery of the file in
//! parent directories. The loaded [`Config`] converts into the
//! [`LinkOptions`] and [`HtmlAttributes`] consumed by the `autolink` crate.
//!
//! ```toml
//! [links]
//! url_class = "tweet-url"
//! username_url_base = "${PROFILE_BASE:-https://x.com/}"
//! hashtag_url_base = "https://x.com/hashtag/"
//! target = "_blank"
//! suppress_lists = false
//! suppress_no_follow = false
//!
//! [attributes]
//! "data-source" = "feed"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! `${VAR}` and `${VAR:-default}` are expanded in:
//! - `links.username_url_base`
//! - `links.list_url_base`
//! - `links.hashtag_url_base`
//! - `links.target`

mod expand;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use autolink::{AttrValue, HtmlAttributes, LinkOptions, OPTIONS_NOT_ATTRIBUTES};
use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "autolink.toml";

/// Autolink configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Link behaviour.
    pub links: LinksConfig,
    /// Extra HTML attributes added to every anchor, rendered in key order.
    pub attributes: BTreeMap<String, AttributeConfig>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// `[links]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinksConfig {
    /// CSS class on every anchor.
    pub url_class: Option<String>,
    /// CSS class added to list links.
    pub list_class: Option<String>,
    /// CSS class added to username links.
    pub username_class: Option<String>,
    /// CSS class added to hashtag links.
    pub hashtag_class: Option<String>,
    /// Base URL for username links.
    pub username_url_base: Option<String>,
    /// Base URL for list links.
    pub list_url_base: Option<String>,
    /// Base URL for hashtag links.
    pub hashtag_url_base: Option<String>,
    /// Window name for the `target` attribute.
    pub target: Option<String>,
    /// Link list references as plain usernames.
    pub suppress_lists: bool,
    /// Omit `rel="nofollow"`.
    pub suppress_no_follow: bool,
}

/// Attribute value as written in TOML: a string, a boolean or a list of strings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AttributeConfig {
    /// `name = "value"`
    Text(String),
    /// `disabled = true`
    Bool(bool),
    /// `class = ["a", "b"]`
    List(Vec<String>),
}

impl From<&AttributeConfig> for AttrValue {
    fn from(value: &AttributeConfig) -> Self {
        match value {
            AttributeConfig::Text(s) => Self::Text(s.clone()),
            AttributeConfig::Bool(b) => Self::Bool(*b),
            AttributeConfig::List(items) => Self::List(items.clone()),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`links.username_url_base`").
        field: String,
        /// Error message (e.g., "${`PROFILE_BASE`} not set").
        message: String,
    },
}

/// Require a URL field to be non-empty and use http:// or https://.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if url.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `autolink.toml` in the current directory and its parents, falling
    /// back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, or if reading,
    /// parsing, expansion or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        let discovered = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_from(&cwd));
        match discovered {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Discovered {CONFIG_FILENAME}");
                Self::load_from_file(&path)
            }
            None => {
                tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, expansion or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        config.validate()?;
        Ok(config)
    }

    /// Search for the config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), "Loaded autolink configuration");
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if a URL base is empty or not http(s),
    /// or if an attribute name is empty or is a link option key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_links()?;
        self.validate_attributes()?;
        Ok(())
    }

    fn validate_links(&self) -> Result<(), ConfigError> {
        let bases = [
            (&self.links.username_url_base, "links.username_url_base"),
            (&self.links.list_url_base, "links.list_url_base"),
            (&self.links.hashtag_url_base, "links.hashtag_url_base"),
        ];
        for (value, field) in bases {
            if let Some(url) = value {
                require_http_url(url, field)?;
            }
        }
        Ok(())
    }

    fn validate_attributes(&self) -> Result<(), ConfigError> {
        for name in self.attributes.keys() {
            if name.is_empty() {
                return Err(ConfigError::Validation(
                    "attribute names cannot be empty".to_owned(),
                ));
            }
            if OPTIONS_NOT_ATTRIBUTES.contains(&name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "attributes.{name} is a link option, set it under [links]"
                )));
            }
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        let links = &mut self.links;
        expand::expand_opt(&mut links.username_url_base, "links.username_url_base")?;
        expand::expand_opt(&mut links.list_url_base, "links.list_url_base")?;
        expand::expand_opt(&mut links.hashtag_url_base, "links.hashtag_url_base")?;
        expand::expand_opt(&mut links.target, "links.target")?;
        Ok(())
    }

    /// Build link options. Unset fields keep the library defaults.
    #[must_use]
    pub fn link_options(&self) -> LinkOptions {
        let links = &self.links;
        LinkOptions {
            url_class: links.url_class.clone(),
            list_class: links.list_class.clone(),
            username_class: links.username_class.clone(),
            hashtag_class: links.hashtag_class.clone(),
            username_url_base: links.username_url_base.clone(),
            list_url_base: links.list_url_base.clone(),
            hashtag_url_base: links.hashtag_url_base.clone(),
            target: links.target.clone(),
            suppress_lists: links.suppress_lists,
            suppress_no_follow: links.suppress_no_follow,
            ..LinkOptions::default()
        }
    }

    /// Build the extra HTML attributes.
    #[must_use]
    pub fn html_attributes(&self) -> HtmlAttributes {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), AttrValue::from(value)))
            .collect()
    }
}
