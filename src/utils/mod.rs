//! Utilities
pub mod ring;
