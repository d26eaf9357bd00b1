//! Stellar Tour - interactive solar-system explorer
//!
//! A library crate providing the scene's plugins and components for the
//! binary and for integration tests.

pub mod assets;
pub mod audio;
pub mod camera;
pub mod catalog;
pub mod error;
pub mod input;
pub mod motion;
pub mod picking;
pub mod render;
pub mod scene;
pub mod selection;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
