//! Collision handling against the set of already-assigned output names.

use thiserror::Error;

use crate::constants::MAX_SHEETS_TOTAL;
use crate::naming::sanitizer::safe_sheet_name;
use crate::naming::CollisionPolicy;

/// Two sheets resolved to the same target name under the `error` policy, or
/// the dedupe suffix search was exhausted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("The sheet name '{name}' already exists.")]
pub struct NameCollision {
    pub name: String,
}

/// Request-scoped accumulator of assigned output sheet names.
///
/// Membership is case-insensitive; insertion order is preserved so dedupe
/// numbering is stable across a request.
#[derive(Debug, Default)]
pub struct UsedNames {
    names: Vec<String>,
}

impl UsedNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        let lowered = name.to_lowercase();
        self.names.iter().any(|n| n.to_lowercase() == lowered)
    }

    /// Claims a final name for `candidate` under the given policy.
    ///
    /// An unused candidate is recorded and returned unchanged. A used one
    /// either fails (`error` policy) or gets `_1`, `_2`, ... suffixes, each
    /// attempt re-sanitized and re-checked. The suffix search stops at the
    /// total-worksheet limit; 31-character names that keep truncating back
    /// onto themselves would otherwise never terminate.
    pub fn reserve(
        &mut self,
        candidate: &str,
        policy: CollisionPolicy,
    ) -> Result<String, NameCollision> {
        if !self.contains(candidate) {
            self.names.push(candidate.to_string());
            return Ok(candidate.to_string());
        }

        if policy == CollisionPolicy::Error {
            return Err(NameCollision {
                name: candidate.to_string(),
            });
        }

        for i in 1..=MAX_SHEETS_TOTAL {
            let attempt = safe_sheet_name(&format!("{}_{}", candidate, i));
            if !self.contains(&attempt) {
                self.names.push(attempt.clone());
                return Ok(attempt);
            }
        }

        Err(NameCollision {
            name: candidate.to_string(),
        })
    }
}
