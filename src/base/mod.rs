//! Foundation types shared by the rest of the crate.
//!
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets), from rowan
//! - [`LineIndex`] - Byte offset to line/column conversion
//! - [`Position`], [`Span`] - Line/column positions for reporting
//!
//! This module has NO dependencies on other crate modules.

mod line_index;
mod position;

pub use line_index::LineIndex;
pub use position::{Position, Span};
pub use rowan::{TextRange, TextSize};
