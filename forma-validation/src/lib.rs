//! Validation engine for Forma.
//!
//! Evaluates a field's declarative [`ValidationRule`](forma_model::ValidationRule)
//! list against a value and returns one error string per failing rule.
//! Built-in rules cover presence, length, numeric, date, time, item-count,
//! pattern, and email checks; applications add their own through a
//! [`ValidatorRegistry`], which is an explicit value built once at startup
//! and shared by reference rather than a process global.
//!
//! Unknown rule names are skipped so older engines accept schemas written
//! for newer ones.

mod pattern;
mod registry;
mod rules;

pub use pattern::{compile_pattern, pattern_source};
pub use registry::{FieldErrors, ValidatorFn, ValidatorRegistry};
pub use rules::BUILTIN_RULES;
