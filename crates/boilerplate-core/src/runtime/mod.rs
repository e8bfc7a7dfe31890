//! Environment detection
//!
//! This module provides:
//! - Package manager detection from the invoking tool's user agent
//! - Default author lookup from git

pub mod check;

pub use check::{detect_author, PackageManager};
