use crate::ast::Ast;
use crate::glyph::Normalizer;
use crate::parser::{self, ParseError};
use lexers::LexError;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use thiserror::Error;

/// Why some text isn't a valid expression.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExpressionError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl ExpressionError {
    /// Character offset of the problem in the text the user typed.
    pub fn offset(&self) -> usize {
        match self {
            ExpressionError::Lex(e) => e.offset(),
            ExpressionError::Parse(e) => e.offset(),
        }
    }

    /// Byte index of the problem in `source`, or its length when the
    /// problem is the end of input.
    pub fn byte_offset(&self, source: &str) -> usize {
        source.char_indices()
            .nth(self.offset())
            .map(|(idx, _)| idx)
            .unwrap_or(source.len())
    }
}

/// A validated expression in `x`.
///
/// Holds the parsed tree and its canonical text. Two expressions are equal
/// when their canonical text is, so whitespace, redundant parentheses and
/// the minus glyph used to type them don't matter. Cloning re-parses the
/// canonical text.
#[derive(Debug)]
pub struct Expression {
    canonical: String,
    ast: Ast,
    normalizer: Normalizer,
}

impl Expression {
    pub fn parse(raw: &str) -> Result<Expression, ExpressionError> {
        Self::parse_with(raw, Normalizer::ascii())
    }

    /// Parse text typed with `normalizer`'s minus glyph. The same glyph is
    /// used when the expression is displayed.
    pub fn parse_with(raw: &str, normalizer: Normalizer) -> Result<Expression, ExpressionError> {
        let source = normalizer.to_canonical(raw);
        match parser::parse_str(&source) {
            Ok(ast) => {
                let canonical = ast.to_string();
                log::debug!("parsed {:?} as {:?}", raw, canonical);
                Ok(Expression{canonical, ast, normalizer})
            }
            Err(err) => {
                log::debug!("rejected {:?}: {}", raw, err);
                Err(err)
            }
        }
    }

    /// Independent copy built by parsing the canonical text again.
    pub fn duplicate(&self) -> Expression {
        self.with_normalizer(self.normalizer)
    }

    /// Copy that displays with a different minus glyph.
    pub fn with_normalizer(&self, normalizer: Normalizer) -> Expression {
        match Self::parse_with(&self.canonical, normalizer) {
            Ok(expr) => expr,
            Err(err) => panic!("Unparser bug! {:?} doesn't parse back: {}", self.canonical, err),
        }
    }

    /// Canonical text with ASCII minus signs, the form to persist.
    pub fn to_canonical(&self) -> &str {
        &self.canonical
    }

    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    pub fn normalizer(&self) -> Normalizer {
        self.normalizer
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.ast.eval(x)
    }
}

impl Clone for Expression {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for Expression {}

impl Hash for Expression {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

/// Canonical text with the normalizer's minus glyph. Read it back with
/// `Expression::parse_with(text, expr.normalizer())`; `to_canonical` is the
/// form that `Expression::parse` always accepts.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.normalizer.to_display(&self.canonical))
    }
}

impl FromStr for Expression {
    type Err = ExpressionError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expression::parse(s)
    }
}
