//! Configuration types for the link resolver.
//!
//! Follows a builder pattern with validation. Settings are invariant for
//! the lifetime of a resolver, so they are validated once at construction.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefixes that mark a link as leaving the wiki.
pub const DEFAULT_EXTERNAL_PREFIXES: &[&str] =
    &["http://", "https://", "www.", "mailto:", "tag:", "ftp://"];

/// Paths and prefix rules consumed by the resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverSettings {
    /// Route prefix for wiki pages, e.g. `/wiki`
    pub wiki_base_path: String,
    /// Route prefix for attachments, e.g. `/Attachments`
    pub attachments_base_path: String,
    /// Href prefixes classified as external links
    pub external_prefixes: Vec<String>,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            wiki_base_path: "/wiki".to_string(),
            attachments_base_path: "/Attachments".to_string(),
            external_prefixes: DEFAULT_EXTERNAL_PREFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ResolverSettings {
    /// Create new settings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create settings with builder
    pub fn builder() -> ResolverSettingsBuilder {
        ResolverSettingsBuilder::new()
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        validate_base_path("wiki_base_path", &self.wiki_base_path)?;
        validate_base_path("attachments_base_path", &self.attachments_base_path)?;

        if self.external_prefixes.iter().any(|p| p.trim().is_empty()) {
            return Err(Error::config_error("External prefixes cannot be empty"));
        }

        Ok(())
    }

    /// Save settings to a YAML file
    pub async fn save(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| Error::serialization_error(path, e.to_string()))?;

        tokio::fs::write(path, yaml).await.map_err(|e| {
            Error::config_error(format!(
                "Failed to save settings to {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Load settings from a YAML file, validating the result
    pub async fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!(
                "No settings file at {}, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::config_error(format!(
                "Failed to load settings from {}: {}",
                path.display(),
                e
            ))
        })?;

        let settings: Self = serde_yaml::from_str(&content)
            .map_err(|e| Error::serialization_error(path, e.to_string()))?;
        settings.validate()?;

        Ok(settings)
    }
}

fn validate_base_path(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::config_error(format!("{} cannot be empty", field)));
    }
    if !value.starts_with('/') {
        return Err(Error::config_error(format!(
            "{} must start with '/': {}",
            field, value
        )));
    }
    if value.len() > 1 && value.ends_with('/') {
        return Err(Error::config_error(format!(
            "{} must not end with '/': {}",
            field, value
        )));
    }
    Ok(())
}

/// Builder for ResolverSettings
pub struct ResolverSettingsBuilder {
    wiki_base_path: String,
    attachments_base_path: String,
    external_prefixes: Vec<String>,
}

impl ResolverSettingsBuilder {
    /// Create a new builder seeded with defaults
    pub fn new() -> Self {
        let defaults = ResolverSettings::default();
        Self {
            wiki_base_path: defaults.wiki_base_path,
            attachments_base_path: defaults.attachments_base_path,
            external_prefixes: defaults.external_prefixes,
        }
    }

    /// Set the wiki route prefix
    pub fn wiki_base_path(mut self, path: impl Into<String>) -> Self {
        self.wiki_base_path = path.into();
        self
    }

    /// Set the attachments route prefix
    pub fn attachments_base_path(mut self, path: impl Into<String>) -> Self {
        self.attachments_base_path = path.into();
        self
    }

    /// Recognize another prefix as external
    pub fn external_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.external_prefixes.push(prefix.into());
        self
    }

    /// Replace the external prefix list
    pub fn external_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.external_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Build and validate
    pub fn build(self) -> Result<ResolverSettings> {
        let settings = ResolverSettings {
            wiki_base_path: self.wiki_base_path,
            attachments_base_path: self.attachments_base_path,
            external_prefixes: self.external_prefixes,
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl Default for ResolverSettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
