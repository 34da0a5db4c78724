//! Decision engine
//!
//! - `policy_engine`: rule ordering and first-match evaluation
//! - `tests`: unit tests (test-only)

mod policy_engine;

pub use policy_engine::PolicyEngine;

#[cfg(test)]
mod tests;
