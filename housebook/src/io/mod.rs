//! File loading and console interaction.

pub mod loader;
pub mod menu;
