//! Target-name resolution for one (file, sheet) pair.

use crate::constants::WILDCARD_KEY;
use crate::naming::{MergeMode, NamingRules};

/// Computes the proposed target name for a worksheet.
///
/// Map mode consults the per-file map first: an exact sheet entry is returned
/// verbatim, a `"*"` entry is used as a template. Everything else falls
/// through to the rules' pattern.
pub fn resolve_name(rules: &NamingRules, file_name: &str, sheet_name: &str) -> String {
    let file_only = base_name(file_name);

    if rules.mode == MergeMode::Map {
        if let Some(for_file) = rules.map.as_ref().and_then(|m| m.get(file_only)) {
            if let Some(exact) = for_file.get(sheet_name) {
                return exact.clone();
            }
            if let Some(wildcard) = for_file.get(WILDCARD_KEY) {
                return apply_pattern(wildcard, file_only, sheet_name, 0);
            }
        }
    }

    apply_pattern(&rules.pattern, file_only, sheet_name, 0)
}

/// Substitutes `{file}`, `{sheet}` and `{index}` into a template, in that
/// fixed order. Replacement is literal; unmatched tokens stay as-is.
///
/// `index` is reserved for per-duplicate numbering; the orchestrator
/// currently always passes 0.
pub fn apply_pattern(pattern: &str, file: &str, sheet: &str, index: u32) -> String {
    pattern
        .replace("{file}", file_stem(file))
        .replace("{sheet}", sheet)
        .replace("{index}", &index.to_string())
}

/// Strips any directory component, accepting both separators.
fn base_name(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name)
}

/// File name without its last extension.
fn file_stem(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[..idx],
        None => name,
    }
}
