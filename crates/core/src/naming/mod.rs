//! Naming module - rules model, parsing, resolution, and collision handling.

mod collision;
mod naming_model;
mod parser;
mod resolver;
mod sanitizer;

pub use collision::{NameCollision, UsedNames};
pub use naming_model::{CollisionPolicy, MergeMode, NamingRules};
pub use parser::parse_naming_rules;
pub use resolver::{apply_pattern, resolve_name};
pub use sanitizer::safe_sheet_name;
