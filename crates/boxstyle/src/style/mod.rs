//! Style values and the engine seam that turns them into stylesheet rules.
//!
//! This module provides the core output primitives:
//!
//! - [`Style`]: An ordered list of declarations and media blocks
//! - [`Declaration`] / [`MediaRule`] / [`Rule`]: The pieces a [`Style`] is built from
//! - [`StyleEngine`]: The capability a host provides to inject a [`Style`] and get a class name
//! - [`StyleSheet`]: An in-memory [`StyleEngine`] that deduplicates identical styles
//!
//! Styles are append-only. When the same property appears twice, both
//! declarations are kept and the later one wins, as it would in the cascade.

mod engine;
mod rule;

pub use engine::{StyleEngine, StyleSheet, DEFAULT_CLASS_PREFIX};
pub use rule::{Declaration, MediaRule, Rule, Style};
