//! Utility modules.
//!
//! Provides:
//! - [`format`] - Duration and timestamp formatting for output and status lines

pub mod format;
