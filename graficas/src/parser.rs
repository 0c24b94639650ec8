use crate::ast::{Ast, BinOp, ConstantId, FunctionId, UnOp, VARIABLE};
use crate::expression::ExpressionError;
use lexers::{Scanner, Token, TokenKind};
use std::mem::discriminant;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty expression")]
    EmptyExpression,
    #[error("expected {expected} but found {found} at position {offset}")]
    UnexpectedToken { offset: usize, expected: &'static str, found: String },
    #[error("unknown identifier '{name}' at position {offset}")]
    UnknownIdentifier { offset: usize, name: String },
    #[error("function at position {offset} takes {expected} argument, found {found}")]
    ArgumentCountMismatch { offset: usize, expected: usize, found: usize },
    #[error("unexpected input after the expression at position {offset}")]
    TrailingInput { offset: usize },
    #[error("expression nested too deeply at position {offset}")]
    TooDeep { offset: usize },
}

impl ParseError {
    pub fn offset(&self) -> usize {
        match *self {
            ParseError::EmptyExpression => 0,
            ParseError::UnexpectedToken { offset, .. } => offset,
            ParseError::UnknownIdentifier { offset, .. } => offset,
            ParseError::ArgumentCountMismatch { offset, .. } => offset,
            ParseError::TrailingInput { offset } => offset,
            ParseError::TooDeep { offset } => offset,
        }
    }
}

pub type AstResult = Result<Ast, ParseError>;

/// Most operators and parentheses that may enclose a token.
pub const MAX_DEPTH: usize = 256;

/// Recursive descent parser over a token stream ending in `TokenKind::End`.
pub struct Parser<I: Iterator<Item = Token>> {
    scanner: Scanner<I>,
    last_offset: usize,
    depth: usize,
}

impl<I: Iterator<Item = Token>> Parser<I> {
    pub fn new(tokens: I) -> Self {
        Parser{scanner: Scanner::new(tokens), last_offset: 0, depth: 0}
    }

    // consume the next token if it's of any of the given kinds
    fn accept(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        let backtrack = self.scanner.pos();
        if let Some(token) = self.scanner.next() {
            if kinds.iter().any(|k| discriminant(k) == discriminant(&token.kind)) {
                self.scanner.ignore();
                self.last_offset = token.offset;
                return Some(token);
            }
        }
        self.scanner.set_pos(backtrack);
        None
    }

    fn peek(&mut self) -> Token {
        // a stream missing its End sentinel ends right after the last token
        let last_offset = self.last_offset;
        self.scanner.peek().unwrap_or(Token{kind: TokenKind::End, offset: last_offset})
    }

    fn unexpected(&mut self, expected: &'static str) -> ParseError {
        let found = self.peek();
        ParseError::UnexpectedToken{
            offset: found.offset,
            expected,
            found: found.kind.to_string(),
        }
    }

    // every level of nesting recurses, so refuse to go past MAX_DEPTH
    fn descend(&mut self, offset: usize) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ParseError::TooDeep{offset});
        }
        Ok(())
    }

    fn ascend(&mut self, levels: usize) {
        self.depth -= levels;
    }

    fn consume(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token, ParseError> {
        match self.accept(&[kind]) {
            Some(token) => Ok(token),
            None => Err(self.unexpected(expected)),
        }
    }
}

/* Grammar:
 *
 *  expression := term { ( "+" | "-" ) term } ;
 *  term       := unary { ( "*" | "/" ) unary } ;
 *  unary      := "-" unary | power ;
 *  power      := primary [ "^" unary ] ;
 *  primary    := NUMBER | "x" | CONSTANT
 *              | FUNCTION "(" [ expression { "," expression } ] ")"
 *              | "(" expression ")" ;
 *
 */

impl<I: Iterator<Item = Token>> Parser<I> {
    pub fn parse(&mut self) -> AstResult {
        if self.peek().kind == TokenKind::End {
            return Err(ParseError::EmptyExpression);
        }
        let expr = self.expression()?;
        let rest = self.peek();
        match rest.kind {
            TokenKind::End => Ok(expr),
            _ => Err(ParseError::TrailingInput{offset: rest.offset}),
        }
    }

    fn expression(&mut self) -> AstResult {
        let mut expr = self.term()?;
        let mut chained = 0;
        while let Some(op) = self.accept(&[TokenKind::Plus, TokenKind::Minus]) {
            self.descend(op.offset)?;
            chained += 1;
            let op = match op.kind {
                TokenKind::Plus => BinOp::Add,
                _ => BinOp::Sub,
            };
            let rhs = self.term()?;
            expr = Ast::Binary(op, Box::new(expr), Box::new(rhs));
        }
        self.ascend(chained);
        Ok(expr)
    }

    fn term(&mut self) -> AstResult {
        let mut expr = self.unary()?;
        let mut chained = 0;
        while let Some(op) = self.accept(&[TokenKind::Star, TokenKind::Slash]) {
            self.descend(op.offset)?;
            chained += 1;
            let op = match op.kind {
                TokenKind::Star => BinOp::Mul,
                _ => BinOp::Div,
            };
            let rhs = self.unary()?;
            expr = Ast::Binary(op, Box::new(expr), Box::new(rhs));
        }
        self.ascend(chained);
        Ok(expr)
    }

    fn unary(&mut self) -> AstResult {
        if let Some(minus) = self.accept(&[TokenKind::Minus]) {
            self.descend(minus.offset)?;
            let operand = self.unary()?;
            self.ascend(1);
            return Ok(Ast::Unary(UnOp::Neg, Box::new(operand)));
        }
        self.power()
    }

    fn power(&mut self) -> AstResult {
        let base = self.primary()?;
        if let Some(caret) = self.accept(&[TokenKind::Caret]) {
            self.descend(caret.offset)?;
            let exponent = self.unary()?;
            self.ascend(1);
            return Ok(Ast::Binary(BinOp::Pow, Box::new(base), Box::new(exponent)));
        }
        Ok(base)
    }

    fn primary(&mut self) -> AstResult {
        let token = match self.accept(&[
            TokenKind::Number(0.0),
            TokenKind::Ident(String::new()),
            TokenKind::LParen,
        ]) {
            Some(token) => token,
            None => return Err(self.unexpected("an operand")),
        };
        match token.kind {
            TokenKind::Number(n) => Ok(Ast::Number(n)),
            TokenKind::Ident(ref name) if name == VARIABLE => Ok(Ast::Var),
            TokenKind::Ident(ref name) => {
                if let Some(c) = ConstantId::from_name(name) {
                    Ok(Ast::Const(c))
                } else if let Some(f) = FunctionId::from_name(name) {
                    self.call(f, token.offset)
                } else {
                    Err(ParseError::UnknownIdentifier{offset: token.offset, name: name.clone()})
                }
            }
            _ => {
                self.descend(token.offset)?;
                let expr = self.expression()?;
                self.consume(TokenKind::RParen, "')'")?;
                self.ascend(1);
                Ok(expr)
            }
        }
    }

    fn call(&mut self, func: FunctionId, offset: usize) -> AstResult {
        self.consume(TokenKind::LParen, "'('")?;
        self.descend(offset)?;
        let mut args = Vec::new();
        if self.accept(&[TokenKind::RParen]).is_none() {
            args.push(self.expression()?);
            while self.accept(&[TokenKind::Comma]).is_some() {
                args.push(self.expression()?);
            }
            self.consume(TokenKind::RParen, "',' or ')'")?;
        }
        self.ascend(1);
        let found = args.len();
        match args.pop() {
            Some(arg) if found == 1 => Ok(Ast::Call(func, Box::new(arg))),
            _ => Err(ParseError::ArgumentCountMismatch{offset, expected: 1, found}),
        }
    }
}

/// Parse a complete token stream.
pub fn parse(tokens: &[Token]) -> AstResult {
    Parser::new(tokens.iter().cloned()).parse()
}

/// Tokenize and parse a normalized expression.
pub fn parse_str(source: &str) -> Result<Ast, ExpressionError> {
    let tokens = lexers::tokenize(source)?;
    Ok(parse(&tokens)?)
}
