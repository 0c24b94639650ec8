use crate::scanner::Scanner;
use std::fmt;
use thiserror::Error;

#[derive(Clone, PartialEq, Debug)]
pub enum TokenKind {
    Number(f64),
    Ident(String),
    Plus, Minus, Star, Slash, Caret,
    LParen, RParen, Comma,
    End,
}

/// A token and the character offset where it starts in the source.
#[derive(Clone, PartialEq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected character '{ch}' at position {offset}")]
    UnexpectedCharacter { offset: usize, ch: char },
    #[error("malformed number at position {offset}")]
    MalformedNumber { offset: usize },
}

impl LexError {
    pub fn offset(&self) -> usize {
        match *self {
            LexError::UnexpectedCharacter { offset, .. } => offset,
            LexError::MalformedNumber { offset } => offset,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "number {}", n),
            TokenKind::Ident(id) => write!(f, "identifier '{}'", id),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::Slash => write!(f, "'/'"),
            TokenKind::Caret => write!(f, "'^'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::End => write!(f, "end of input"),
        }
    }
}

/// Splits a normalized expression into tokens.
///
/// Yields `Ok` tokens up to and including a final `TokenKind::End`, or stops
/// after the first `Err`.
pub struct MathTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
    done: bool,
}

impl<I: Iterator<Item=char>> MathTokenizer<I> {
    pub fn new(source: I) -> Self {
        MathTokenizer{src: Scanner::new(source), done: false}
    }

    fn single(c: char) -> Option<TokenKind> {
        match c {
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Star),
            '/' => Some(TokenKind::Slash),
            '^' => Some(TokenKind::Caret),
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            ',' => Some(TokenKind::Comma),
            _ => None,
        }
    }

    fn get_token(&mut self) -> Result<Token, LexError> {
        self.src.skip_whitespace();
        let offset = self.src.offset();
        let kind = if let Some(id) = self.src.scan_identifier() {
            TokenKind::Ident(id)
        } else if let Some(num) = self.src.scan_number() {
            let value = num
                .ok()
                .and_then(|lexeme| lexeme.parse::<f64>().ok())
                .filter(|n| n.is_finite())
                .ok_or(LexError::MalformedNumber { offset })?;
            TokenKind::Number(value)
        } else if let Some(c) = self.src.next() {
            let kind = Self::single(c)
                .ok_or(LexError::UnexpectedCharacter { offset, ch: c })?;
            self.src.ignore();
            kind
        } else {
            TokenKind::End
        };
        Ok(Token{kind, offset})
    }
}

impl<I: Iterator<Item=char>> Iterator for MathTokenizer<I> {
    type Item = Result<Token, LexError>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let token = self.get_token();
        self.done = match token {
            Ok(Token{kind: TokenKind::End, ..}) | Err(_) => true,
            _ => false,
        };
        Some(token)
    }
}

/// Tokenize a whole (already normalized) expression.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let tokens = MathTokenizer::new(source.chars()).collect::<Result<Vec<_>, _>>()?;
    log::trace!("tokenized {:?} into {} tokens", source, tokens.len());
    Ok(tokens)
}
