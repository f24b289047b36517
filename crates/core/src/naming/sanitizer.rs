//! Destination sheet-name constraints.

use crate::constants::MAX_SHEET_NAME_LEN;

/// Characters xlsx forbids in sheet names.
const FORBIDDEN: [char; 7] = [':', '\\', '/', '?', '*', '[', ']'];

/// Makes a proposed name safe for the output workbook: forbidden characters
/// become `_`, surrounding whitespace is trimmed, and the result is
/// hard-truncated to 31 characters.
pub fn safe_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if FORBIDDEN.contains(&c) { '_' } else { c })
        .collect();
    cleaned.trim().chars().take(MAX_SHEET_NAME_LEN).collect()
}
