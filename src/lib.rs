//! # Recipe Book
//!
//! A menu-driven console utility that captures one recipe at a time (name,
//! ingredients with quantities and units, ordered preparation steps),
//! displays it, scales ingredient quantities by a multiplier, and resets
//! them to the values originally entered.

pub mod menu;
pub mod recipe_model;
pub mod session;
