// Document module for reading and writing opencode config files

use crate::constants;
use crate::marker;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

lazy_static! {
    /// A line holding nothing but a `//` comment.
    static ref LINE_COMMENT: Regex = Regex::new(r"(?m)^\s*//.*$").unwrap();
    /// A `/* ... */` span, shortest match, may cross lines.
    static ref BLOCK_COMMENT: Regex = Regex::new(r"(?s)/\*.*?\*/").unwrap();
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} does not contain a JSON object", path.display())]
    NotAnObject { path: PathBuf },

    #[error("Field '{field}' must be an array of strings")]
    InvalidField { field: String },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// An opencode configuration file held in memory.
///
/// Only list fields are ever interpreted; every other value is carried through
/// untouched, in its original key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigDocument {
    fields: Map<String, Value>,
}

impl ConfigDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Document written when a project has no config yet.
    pub fn with_plugin(plugin: &str) -> Self {
        let mut fields = Map::new();
        fields.insert(
            constants::SCHEMA_FIELD.to_string(),
            Value::String(constants::SCHEMA_URL.to_string()),
        );
        fields.insert(
            constants::PLUGIN_LIST_FIELD.to_string(),
            Value::Array(vec![Value::String(plugin.to_string())]),
        );
        Self { fields }
    }

    /// Load the document at `path`.
    ///
    /// A missing file yields an empty document. Files with a `.jsonc` extension
    /// have full-line `//` comments and block comments removed before parsing.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let text = fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let text = if is_tolerant(path) {
            strip_comments(&text)
        } else {
            Cow::Borrowed(text.as_str())
        };

        let value: Value = serde_json::from_str(&text).map_err(|source| DocumentError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(DocumentError::NotAnObject {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Overwrite `path` with the whole document: two-space indent, trailing newline.
    ///
    /// Parent directories are created first. The write is not atomic.
    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| DocumentError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut text = self.to_json_string()?;
        text.push('\n');

        fs::write(path, text).map_err(|source| DocumentError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_json_string(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(&self.fields).map_err(DocumentError::Serialize)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }

    /// Read a list field. `None` when the field is absent or null.
    pub fn string_list(&self, field: &str) -> Result<Option<Vec<String>>, DocumentError> {
        let items = match self.fields.get(field) {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::Array(items)) => items,
            Some(_) => return Err(invalid_field(field)),
        };

        items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| invalid_field(field))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    pub fn set_string_list(&mut self, field: &str, list: Vec<String>) {
        let items = list.into_iter().map(Value::String).collect();
        self.fields.insert(field.to_string(), Value::Array(items));
    }

    /// Append `entry` to the list in `field`, creating the list if needed.
    ///
    /// Returns `false` (and leaves the document untouched) when already present.
    pub fn ensure_entry(&mut self, field: &str, entry: &str) -> Result<bool, DocumentError> {
        let mut list = self.string_list(field)?.unwrap_or_default();
        let changed = marker::ensure_present(&mut list, entry);
        if changed {
            self.set_string_list(field, list);
        }
        Ok(changed)
    }

    /// Remove every occurrence of `entry` from the list in `field`.
    pub fn remove_entry(&mut self, field: &str, entry: &str) -> Result<bool, DocumentError> {
        let Some(mut list) = self.string_list(field)? else {
            return Ok(false);
        };
        let changed = marker::remove_all(&mut list, entry);
        if changed {
            self.set_string_list(field, list);
        }
        Ok(changed)
    }
}

fn invalid_field(field: &str) -> DocumentError {
    DocumentError::InvalidField {
        field: field.to_string(),
    }
}

fn is_tolerant(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == constants::JSONC_EXTENSION)
}

/// Remove full-line `//` comments, then `/* */` block comments.
///
/// Trailing `//` comments after a value are left in place and will fail to parse.
/// Block markers are not string-aware: a value such as `"src/**/*.ts"` loses its
/// `/**/` span.
pub fn strip_comments(text: &str) -> Cow<'_, str> {
    match LINE_COMMENT.replace_all(text, "") {
        Cow::Borrowed(text) => BLOCK_COMMENT.replace_all(text, ""),
        Cow::Owned(text) => Cow::Owned(BLOCK_COMMENT.replace_all(&text, "").into_owned()),
    }
}
