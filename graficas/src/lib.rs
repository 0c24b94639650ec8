pub use ast::{Ast, BinOp, ConstantId, FunctionId, UnOp, VARIABLE};
pub use eval::evaluate;
pub use expression::{Expression, ExpressionError};
pub use function::{highlight_only, Color, Function, Highlight};
pub use glyph::{GlyphSetting, Normalizer, UNICODE_MINUS};
pub use parser::{ParseError, Parser};
pub use sampler::Sampler;
pub use lexers::LexError;

pub mod ast;
pub mod parser;
#[cfg(test)]
mod parser_test;

mod eval;

mod unparse;

pub mod expression;

pub mod function;
pub mod glyph;
pub mod sampler;
pub mod series;
