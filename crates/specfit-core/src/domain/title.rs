//! The closed registry of titles that can be compared.
//!
//! Application identifiers are never typed in by users. They come from this
//! registry, which is either the built-in list or a JSON file supplied as
//! configuration.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Grouping used when listing titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleCategory {
    VideoGame,
    Application,
}

impl fmt::Display for TitleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VideoGame => f.write_str("Video Games"),
            Self::Application => f.write_str("Applications"),
        }
    }
}

/// A comparable title and its catalog identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    pub name: String,
    pub id: i64,
    pub category: TitleCategory,
}

impl Title {
    pub fn new(name: impl Into<String>, id: i64, category: TitleCategory) -> Self {
        Self {
            name: name.into(),
            id,
            category,
        }
    }
}

/// Errors raised while loading or querying the title registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Unknown title: {0}")]
    UnknownTitle(String),

    #[error("Duplicate title name in registry: {0}")]
    DuplicateName(String),

    #[error("Duplicate application id in registry: {0}")]
    DuplicateId(i64),

    #[error("Title registry is empty")]
    Empty,

    #[error("Failed to read title registry {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Invalid title registry {path}: {reason}")]
    Parse { path: String, reason: String },
}

/// Name → application id mapping.
#[derive(Debug, Clone)]
pub struct TitleRegistry {
    titles: Vec<Title>,
}

impl TitleRegistry {
    /// Build a registry, rejecting duplicate names (case-insensitive) and ids.
    pub fn new(titles: Vec<Title>) -> Result<Self, RegistryError> {
        if titles.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut names = HashSet::new();
        let mut ids = HashSet::new();
        for title in &titles {
            if !names.insert(fold_case(&title.name)) {
                return Err(RegistryError::DuplicateName(title.name.clone()));
            }
            if !ids.insert(title.id) {
                return Err(RegistryError::DuplicateId(title.id));
            }
        }

        Ok(Self { titles })
    }

    /// The titles shipped with specfit.
    #[must_use]
    pub fn builtin() -> Self {
        use TitleCategory::{Application, VideoGame};

        Self {
            titles: vec![
                Title::new("Elden Ring", 12, VideoGame),
                Title::new("FIFA 23", 13, VideoGame),
                Title::new("God of War", 9, VideoGame),
                Title::new("Grand Theft Auto V", 7, VideoGame),
                Title::new("Microsoft Flight Simulator", 10, VideoGame),
                Title::new("Minecraft", 5, VideoGame),
                Title::new("The Sims 4", 8, VideoGame),
                Title::new("Adobe Photoshop", 6, Application),
                Title::new("Adobe Premiere Pro", 15, Application),
                Title::new("Blender", 14, Application),
            ],
        }
    }

    /// Load a registry from a JSON array of `{ "name", "id", "category" }`.
    pub fn from_json_file(path: &Path) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path).map_err(|e| RegistryError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let titles: Vec<Title> =
            serde_json::from_str(&content).map_err(|e| RegistryError::Parse {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        tracing::debug!(path = %path.display(), count = titles.len(), "Loaded title registry");
        Self::new(titles)
    }

    /// Resolve a title by name, ignoring case and surrounding whitespace.
    pub fn resolve(&self, name: &str) -> Result<&Title, RegistryError> {
        let wanted = name.trim();
        let folded = fold_case(wanted);
        self.titles
            .iter()
            .find(|t| fold_case(&t.name) == folded)
            .ok_or_else(|| RegistryError::UnknownTitle(wanted.to_string()))
    }

    /// Find the title registered under an application id.
    #[must_use]
    pub fn by_id(&self, id: i64) -> Option<&Title> {
        self.titles.iter().find(|t| t.id == id)
    }

    /// All titles in registry order.
    #[must_use]
    pub fn titles(&self) -> &[Title] {
        &self.titles
    }

    /// Titles of one category, in registry order.
    pub fn in_category(&self, category: TitleCategory) -> impl Iterator<Item = &Title> {
        self.titles.iter().filter(move |t| t.category == category)
    }
}

/// Key under which names are compared, both for duplicates and lookup.
fn fold_case(name: &str) -> String {
    name.to_lowercase()
}

impl Default for TitleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
