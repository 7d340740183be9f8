//! Utility functions.

pub mod text;
