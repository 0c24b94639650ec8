use crate::ast::{precedence, Assoc, Ast, BinOp, UnOp, VARIABLE};
use std::fmt;

// binding strength of a unary minus, also the floor for exponents
const NEG_PREC: usize = 3;

fn number(n: f64) -> String {
    let abs = n.abs();
    if n.is_nan() {
        "0 / 0".to_string()
    } else if n == f64::INFINITY {
        "1 / 0".to_string()
    } else if n == f64::NEG_INFINITY {
        "-1 / 0".to_string()
    } else if abs != 0.0 && !(1e-5..1e16).contains(&abs) {
        format!("{:e}", n)
    } else {
        format!("{}", n)
    }
}

fn number_precedence(n: f64) -> usize {
    if !n.is_finite() {
        2 // printed as a division
    } else if n.is_sign_negative() {
        NEG_PREC
    } else {
        precedence(&Ast::Number(n)).0
    }
}

fn symbol(op: BinOp) -> &'static str {
    match op {
        BinOp::Add => " + ",
        BinOp::Sub => " - ",
        BinOp::Mul => " * ",
        BinOp::Div => " / ",
        BinOp::Pow => "^",
    }
}

// lowest precedence each operand may have before it needs parens
fn operand_floors(prec: usize, assoc: Assoc) -> (usize, usize) {
    match assoc {
        Assoc::Left => (prec, prec + 1),
        // exponents are parsed as a unary so 2^-3 prints bare
        Assoc::Right => (prec + 1, NEG_PREC),
        Assoc::None => (prec, prec),
    }
}

fn group((text, prec): (String, usize), floor: usize) -> String {
    if prec < floor {
        format!("({})", text)
    } else {
        text
    }
}

fn printer(node: &Ast) -> (String, usize) {
    match node {
        Ast::Number(n) => (number(*n), number_precedence(*n)),
        Ast::Var => (VARIABLE.to_string(), precedence(node).0),
        Ast::Const(c) => (c.name().to_string(), precedence(node).0),
        Ast::Call(func, arg) => {
            (format!("{}({})", func.name(), printer(arg).0), precedence(node).0)
        }
        Ast::Unary(UnOp::Neg, operand) => {
            let operand = group(printer(operand), NEG_PREC);
            (format!("-{}", operand), NEG_PREC)
        }
        Ast::Binary(op, lhs, rhs) => {
            let (prec, assoc) = precedence(node);
            let (lfloor, rfloor) = operand_floors(prec, assoc);
            let lh = group(printer(lhs), lfloor);
            let rh = group(printer(rhs), rfloor);
            (format!("{}{}{}", lh, symbol(*op), rh), prec)
        }
    }
}

/// Canonical text of the tree. Parentheses appear only where precedence or
/// associativity needs them. The output always parses, and parsing it again
/// gives a tree with the same text.
impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", printer(self).0)
    }
}
