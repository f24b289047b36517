//! Naming rules - the validated configuration driving sheet renaming.

use std::collections::HashMap;
use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::constants::DEFAULT_PATTERN;

/// Naming strategy selector. Wire values are matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeMode {
    /// Apply a token template uniformly to every sheet.
    #[default]
    Pattern,
    /// Look up explicit per-file, per-sheet target names.
    Map,
}

/// What to do when two sheets resolve to the same target name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Append a numeric suffix until the name is unique.
    #[default]
    Dedupe,
    /// Reject the request.
    Error,
}

/// Validated naming configuration for one merge request.
///
/// Constructed once per request by [`crate::naming::parse_naming_rules`] and
/// immutable afterwards. `pattern` is always populated; a `Map` mode always
/// carries at least one map entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingRules {
    pub mode: MergeMode,
    pub collision: CollisionPolicy,
    /// Token template with `{file}`, `{sheet}` and `{index}` placeholders.
    pub pattern: String,
    /// File base name -> (sheet name or `"*"` -> target name or template).
    pub map: Option<HashMap<String, HashMap<String, String>>>,
}

impl Default for NamingRules {
    fn default() -> Self {
        Self {
            mode: MergeMode::Pattern,
            collision: CollisionPolicy::Dedupe,
            pattern: DEFAULT_PATTERN.to_string(),
            map: None,
        }
    }
}

impl MergeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MergeMode::Pattern => "pattern",
            MergeMode::Map => "map",
        }
    }
}

impl CollisionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionPolicy::Dedupe => "dedupe",
            CollisionPolicy::Error => "error",
        }
    }
}

impl fmt::Display for MergeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MergeMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MergeMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        match value.to_ascii_lowercase().as_str() {
            "pattern" => Ok(MergeMode::Pattern),
            "map" => Ok(MergeMode::Map),
            other => Err(de::Error::unknown_variant(other, &["pattern", "map"])),
        }
    }
}

impl Serialize for CollisionPolicy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CollisionPolicy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        match value.to_ascii_lowercase().as_str() {
            "dedupe" => Ok(CollisionPolicy::Dedupe),
            "error" => Ok(CollisionPolicy::Error),
            other => Err(de::Error::unknown_variant(other, &["dedupe", "error"])),
        }
    }
}
