//! The persisted form of a set of expressions: canonical texts joined by
//! `;`, which canonical text never contains.

use crate::expression::{Expression, ExpressionError};
use crate::glyph::Normalizer;
use thiserror::Error;

pub const SEPARATOR: char = ';';

/// An item of a series that didn't parse.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("expression {} (position {offset}): {source}", .index + 1)]
pub struct SeriesError {
    /// Zero-based position of the item among the non-empty items.
    pub index: usize,
    /// Character offset of the problem in the whole series text.
    pub offset: usize,
    pub source: ExpressionError,
}

pub fn join(expressions: &[Expression]) -> String {
    expressions.iter()
        .map(|e| e.to_canonical())
        .collect::<Vec<_>>()
        .join(&SEPARATOR.to_string())
}

/// Parse every non-blank `;`-separated item, stopping at the first error.
pub fn split(text: &str, normalizer: Normalizer) -> Result<Vec<Expression>, SeriesError> {
    let mut expressions = Vec::new();
    let mut start = 0; // chars before the current item
    for item in text.split(SEPARATOR) {
        if !item.trim().is_empty() {
            let expr = Expression::parse_with(item, normalizer).map_err(|source| SeriesError{
                index: expressions.len(),
                offset: start + source.offset(),
                source,
            })?;
            expressions.push(expr);
        }
        start += item.chars().count() + 1;
    }
    Ok(expressions)
}
