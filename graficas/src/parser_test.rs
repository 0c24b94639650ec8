use crate::ast::{Ast, BinOp, ConstantId, FunctionId, UnOp};
use crate::expression::ExpressionError;
use crate::parser::{parse, parse_str, ParseError, MAX_DEPTH};
use lexers::{LexError, Token, TokenKind};

fn num(n: f64) -> Box<Ast> { Box::new(Ast::Number(n)) }
fn var() -> Box<Ast> { Box::new(Ast::Var) }
fn bin(op: BinOp, l: Box<Ast>, r: Box<Ast>) -> Box<Ast> { Box::new(Ast::Binary(op, l, r)) }
fn neg(a: Box<Ast>) -> Box<Ast> { Box::new(Ast::Unary(UnOp::Neg, a)) }

fn parse_err(source: &str) -> ParseError {
    match parse_str(source) {
        Err(ExpressionError::Parse(e)) => e,
        other => panic!("expected a parse error for {:?}, got {:?}", source, other),
    }
}

#[test]
fn test_parse1() {
    // 3+4*2/-(1-5)^2^3
    let expect = bin(BinOp::Add,
        num(3.0),
        bin(BinOp::Div,
            bin(BinOp::Mul, num(4.0), num(2.0)),
            neg(bin(BinOp::Pow,
                bin(BinOp::Sub, num(1.0), num(5.0)),
                bin(BinOp::Pow, num(2.0), num(3.0))))));
    assert_eq!(parse_str("3+4*2/-(1-5)^2^3").unwrap(), *expect);
}

#[test]
fn test_parse2() {
    let expect = Ast::Call(FunctionId::Sqrt, bin(BinOp::Div,
        neg(bin(BinOp::Sub, num(1.0), bin(BinOp::Pow, var(), num(2.0)))),
        bin(BinOp::Add, num(1.0), bin(BinOp::Pow, var(), num(2.0)))));
    assert_eq!(parse_str("sqrt(-(1-x^2) / (1 + x^2))").unwrap(), expect);
}

#[test]
fn test_parse3() {
    let expect = bin(BinOp::Mul,
        bin(BinOp::Mul,
            num(3.4e-2),
            Box::new(Ast::Call(FunctionId::Sin, var()))),
        Box::new(Ast::Const(ConstantId::Pi)));
    assert_eq!(parse_str("3.4e-2 * sin(x) * pi").unwrap(), *expect);
}

#[test]
fn left_associative() {
    assert_eq!(parse_str("1-2-3").unwrap(),
               *bin(BinOp::Sub, bin(BinOp::Sub, num(1.0), num(2.0)), num(3.0)));
    assert_eq!(parse_str("8/4/2").unwrap(),
               *bin(BinOp::Div, bin(BinOp::Div, num(8.0), num(4.0)), num(2.0)));
}

#[test]
fn right_associative_power() {
    assert_eq!(parse_str("2^3^2").unwrap(),
               *bin(BinOp::Pow, num(2.0), bin(BinOp::Pow, num(3.0), num(2.0))));
}

#[test]
fn unary_minus() {
    assert_eq!(parse_str("-x^2").unwrap(), *neg(bin(BinOp::Pow, var(), num(2.0))));
    assert_eq!(parse_str("(-x)^2").unwrap(), *bin(BinOp::Pow, neg(var()), num(2.0)));
    assert_eq!(parse_str("2^-3").unwrap(), *bin(BinOp::Pow, num(2.0), neg(num(3.0))));
    assert_eq!(parse_str("--x").unwrap(), *neg(neg(var())));
    assert_eq!(parse_str("2*-x").unwrap(), *bin(BinOp::Mul, num(2.0), neg(var())));
    assert_eq!(parse_str("-x*2").unwrap(), *bin(BinOp::Mul, neg(var()), num(2.0)));
    assert_eq!(parse_str("1 - -x").unwrap(), *bin(BinOp::Sub, num(1.0), neg(var())));
}

#[test]
fn constants_and_functions() {
    assert_eq!(parse_str("e").unwrap(), Ast::Const(ConstantId::E));
    assert_eq!(parse_str("e^x").unwrap(),
               *bin(BinOp::Pow, Box::new(Ast::Const(ConstantId::E)), var()));
    for f in FunctionId::ALL {
        let source = format!("{}(x)", f.name());
        assert_eq!(parse_str(&source).unwrap(), Ast::Call(f, var()));
    }
}

#[test]
fn from_tokens() {
    let tokens = vec![
        Token{kind: TokenKind::Ident(format!("x")), offset: 0},
        Token{kind: TokenKind::Star, offset: 1},
        Token{kind: TokenKind::Number(2.0), offset: 2},
        Token{kind: TokenKind::End, offset: 3},
    ];
    assert_eq!(parse(&tokens).unwrap(), *bin(BinOp::Mul, var(), num(2.0)));
    // a stream without its End sentinel still parses
    assert_eq!(parse(&tokens[..3]).unwrap(), *bin(BinOp::Mul, var(), num(2.0)));
    assert_eq!(parse(&[]), Err(ParseError::EmptyExpression));
}

#[test]
fn empty_expression() {
    assert_eq!(parse_err(""), ParseError::EmptyExpression);
    assert_eq!(parse_err(" \t "), ParseError::EmptyExpression);
}

#[test]
fn unexpected_token() {
    assert_eq!(parse_err("2+*3"), ParseError::UnexpectedToken{
        offset: 2, expected: "an operand", found: format!("'*'")});
    assert_eq!(parse_err("(1+2"), ParseError::UnexpectedToken{
        offset: 4, expected: "')'", found: format!("end of input")});
    assert_eq!(parse_err("-"), ParseError::UnexpectedToken{
        offset: 1, expected: "an operand", found: format!("end of input")});
    assert_eq!(parse_err("()"), ParseError::UnexpectedToken{
        offset: 1, expected: "an operand", found: format!("')'")});
    assert_eq!(parse_err("sin x"), ParseError::UnexpectedToken{
        offset: 4, expected: "'('", found: format!("identifier 'x'")});
    assert_eq!(parse_err("cos(x 2)"), ParseError::UnexpectedToken{
        offset: 6, expected: "',' or ')'", found: format!("number 2")});
}

#[test]
fn unknown_identifier() {
    assert_eq!(parse_err("foo(1)"), ParseError::UnknownIdentifier{offset: 0, name: format!("foo")});
    assert_eq!(parse_err("2 * y"), ParseError::UnknownIdentifier{offset: 4, name: format!("y")});
    // names are case-sensitive
    assert_eq!(parse_err("Sin(x)"), ParseError::UnknownIdentifier{offset: 0, name: format!("Sin")});
    assert_eq!(parse_err("X"), ParseError::UnknownIdentifier{offset: 0, name: format!("X")});
}

#[test]
fn argument_count() {
    assert_eq!(parse_err("1 + sin()"),
               ParseError::ArgumentCountMismatch{offset: 4, expected: 1, found: 0});
    assert_eq!(parse_err("atan(x, 1)"),
               ParseError::ArgumentCountMismatch{offset: 0, expected: 1, found: 2});
    assert_eq!(parse_err("abs(1,2,3)"),
               ParseError::ArgumentCountMismatch{offset: 0, expected: 1, found: 3});
}

#[test]
fn trailing_input() {
    assert_eq!(parse_err("1+2 3"), ParseError::TrailingInput{offset: 4});
    assert_eq!(parse_err("2x"), ParseError::TrailingInput{offset: 1});
    assert_eq!(parse_err("2 sin(x)"), ParseError::TrailingInput{offset: 2});
    assert_eq!(parse_err("(1))"), ParseError::TrailingInput{offset: 3});
    assert_eq!(parse_err("x(2)"), ParseError::TrailingInput{offset: 1});
    assert_eq!(parse_err("1,2"), ParseError::TrailingInput{offset: 1});
}

#[test]
fn lex_errors_pass_through() {
    assert_eq!(parse_str("1 + 2e"),
               Err(ExpressionError::Lex(LexError::MalformedNumber{offset: 4})));
    assert_eq!(parse_str("x % 2"),
               Err(ExpressionError::Lex(LexError::UnexpectedCharacter{offset: 2, ch: '%'})));
}

#[test]
fn error_messages() {
    assert_eq!(parse_err("2+*3").to_string(), "expected an operand but found '*' at position 2");
    assert_eq!(parse_err("foo(1)").to_string(), "unknown identifier 'foo' at position 0");
    assert_eq!(parse_err("").to_string(), "empty expression");
    assert_eq!(parse_err("").offset(), 0);
    assert_eq!(parse_err("1+2 3").offset(), 4);
}

#[test]
fn deep_nesting_is_an_error() {
    let n = 10_000;
    let parens = format!("{}x{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(parse_err(&parens), ParseError::TooDeep{offset: MAX_DEPTH});

    let minuses = format!("{}x", "-".repeat(200_000));
    assert_eq!(parse_err(&minuses), ParseError::TooDeep{offset: MAX_DEPTH});

    let powers = format!("{}2", "2^".repeat(1_000));
    assert_eq!(parse_err(&powers), ParseError::TooDeep{offset: 2 * MAX_DEPTH + 1});

    let calls = format!("{}x{}", "sin(".repeat(1_000), ")".repeat(1_000));
    assert_eq!(parse_err(&calls), ParseError::TooDeep{offset: 4 * MAX_DEPTH});

    let sum = format!("{}x", "x+".repeat(50_000));
    assert_eq!(parse_err(&sum), ParseError::TooDeep{offset: 2 * MAX_DEPTH + 1});
    assert_eq!(parse_err(&sum).to_string(),
               format!("expression nested too deeply at position {}", 2 * MAX_DEPTH + 1));
}

#[test]
fn nesting_up_to_the_limit() {
    let minuses = format!("{}x", "-".repeat(MAX_DEPTH));
    assert!(parse_str(&minuses).is_ok());
    assert!(parse_str(&format!("-{}", minuses)).is_err());

    let parens = format!("{}x{}", "(".repeat(100), ")".repeat(100));
    assert_eq!(parse_str(&parens).unwrap(), Ast::Var);

    // depth is released once a group closes
    let deep = format!("{}x{}", "(".repeat(200), ")".repeat(200));
    assert!(parse_str(&vec![deep.as_str(); 5].join(" + ")).is_ok());
    assert!(parse_str(&vec!["sin(-x)^2"; 100].join(" * ")).is_ok());
}
