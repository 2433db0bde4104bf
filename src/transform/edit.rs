//! Text edits over the original source.

use std::ops::Range;

use crate::error::{CodemodError, Result};
use crate::parser::{SyntaxNode, TextRange, TextSize};

/// Replace `range` of the source with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub range: TextRange,
    pub replacement: String,
}

impl Edit {
    pub fn new(range: TextRange, replacement: impl Into<String>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
        }
    }

    /// Replace the whole text of `node`
    pub fn replace(node: &SyntaxNode, replacement: impl Into<String>) -> Self {
        Self::new(node.text_range(), replacement)
    }

    fn byte_range(&self) -> Range<usize> {
        self.range.into()
    }
}

/// Apply `edits` to `source`.
///
/// Edits may be given in any order but must not overlap; two insertions at
/// the same offset keep their given order. Everything outside the edited
/// ranges is preserved byte for byte.
pub fn commit_edits(source: &str, mut edits: Vec<Edit>) -> Result<String> {
    edits.sort_by_key(|edit| (edit.range.start(), edit.range.end()));

    for edit in &edits {
        let range = edit.byte_range();
        if edit.range.end() > TextSize::of(source) {
            return Err(CodemodError::InvalidEdit {
                range,
                message: format!("source is only {} bytes long", source.len()),
            });
        }
        if !source.is_char_boundary(range.start) || !source.is_char_boundary(range.end) {
            return Err(CodemodError::InvalidEdit {
                range,
                message: "not on a character boundary".to_string(),
            });
        }
    }

    if let Some(pair) = edits
        .windows(2)
        .find(|pair| pair[0].range.end() > pair[1].range.start())
    {
        return Err(CodemodError::OverlappingEdits {
            first: pair[0].byte_range(),
            second: pair[1].byte_range(),
        });
    }

    // splice from back to front so earlier offsets stay valid
    let mut result = source.to_string();
    for edit in edits.iter().rev() {
        result.replace_range(edit.byte_range(), &edit.replacement);
    }
    Ok(result)
}
