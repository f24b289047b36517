//! Parsing of the raw naming-configuration field.
//!
//! The parser is total: malformed or absent input never fails the request,
//! it degrades to the default rules.

use std::collections::HashMap;

use serde::Deserialize;

use crate::constants::DEFAULT_PATTERN;
use crate::naming::{CollisionPolicy, MergeMode, NamingRules};

/// Wire schema of the `names` form field. All fields optional; unknown
/// fields are ignored.
#[derive(Deserialize)]
struct NamingRulesWire {
    #[serde(default)]
    mode: MergeMode,
    #[serde(default)]
    collision: CollisionPolicy,
    #[serde(default)]
    pattern: Option<String>,
    #[serde(default)]
    map: Option<HashMap<String, HashMap<String, String>>>,
}

/// Parses the raw naming configuration into validated [`NamingRules`].
///
/// Empty, whitespace-only, or structurally invalid input yields the default
/// rules. A `map` mode without any map entries is coerced to pattern mode:
/// it has nothing to look names up in.
pub fn parse_naming_rules(raw: Option<&str>) -> NamingRules {
    let raw = match raw {
        Some(s) if !s.trim().is_empty() => s,
        _ => return NamingRules::default(),
    };

    let wire: NamingRulesWire = match serde_json::from_str(raw) {
        Ok(wire) => wire,
        Err(err) => {
            log::debug!("discarding malformed naming rules: {}", err);
            return NamingRules::default();
        }
    };

    let mut rules = NamingRules {
        mode: wire.mode,
        collision: wire.collision,
        pattern: wire.pattern.unwrap_or_else(|| DEFAULT_PATTERN.to_string()),
        map: wire.map,
    };

    if rules.mode == MergeMode::Map && rules.map.as_ref().is_none_or(HashMap::is_empty) {
        rules.mode = MergeMode::Pattern;
        rules.pattern = DEFAULT_PATTERN.to_string();
        rules.map = None;
    }

    rules
}
