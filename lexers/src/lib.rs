mod scanner;
mod helpers;
mod math_tokenizer;

pub use scanner::Scanner;
pub use math_tokenizer::{tokenize, LexError, MathTokenizer, Token, TokenKind};
