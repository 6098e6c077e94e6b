//! Input adapters for the renderer.
//!
//! Turns command-line input into a render configuration.

pub mod cli;
