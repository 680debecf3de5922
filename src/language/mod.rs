mod builtin;
mod catalog;
mod rule;

pub use builtin::builtin_rules;
pub use catalog::{Collision, RuleCatalog};
pub use rule::{LanguageRule, MarkerPolicy};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
