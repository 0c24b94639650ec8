use crate::ast::{Ast, BinOp, ConstantId, FunctionId, UnOp};

impl FunctionId {
    /// Apply the function with IEEE semantics: domain errors give NaN,
    /// NaN and infinities propagate.
    pub fn apply(self, a: f64) -> f64 {
        match self {
            FunctionId::Sin => a.sin(),
            FunctionId::Cos => a.cos(),
            FunctionId::Tan => a.tan(),
            FunctionId::Asin => a.asin(),
            FunctionId::Acos => a.acos(),
            FunctionId::Atan => a.atan(),
            FunctionId::Sinh => a.sinh(),
            FunctionId::Cosh => a.cosh(),
            FunctionId::Tanh => a.tanh(),
            FunctionId::Exp => a.exp(),
            FunctionId::Ln => a.ln(),
            FunctionId::Log2 => a.log2(),
            FunctionId::Log10 => a.log10(),
            FunctionId::Sqrt => a.sqrt(),
            FunctionId::Abs => a.abs(),
            // signum() maps zeros to +-1
            FunctionId::Sign if a == 0.0 || a.is_nan() => a,
            FunctionId::Sign => a.signum(),
            FunctionId::Floor => a.floor(),
            FunctionId::Ceil => a.ceil(),
            FunctionId::Round => a.round(),
        }
    }
}

impl ConstantId {
    pub fn value(self) -> f64 {
        use std::f64::consts;
        match self {
            ConstantId::Pi => consts::PI,
            ConstantId::E => consts::E,
        }
    }
}

impl Ast {
    pub fn eval(&self, x: f64) -> f64 {
        evaluate(self, x)
    }
}

/// Evaluate the tree with the variable bound to `x`. Never fails, numeric
/// trouble shows up as NaN or an infinity.
pub fn evaluate(ast: &Ast, x: f64) -> f64 {
    match ast {
        Ast::Number(n) => *n,
        Ast::Var => x,
        Ast::Const(c) => c.value(),
        Ast::Unary(UnOp::Neg, operand) => -evaluate(operand, x),
        Ast::Binary(op, lhs, rhs) => {
            let (l, r) = (evaluate(lhs, x), evaluate(rhs, x));
            match op {
                BinOp::Add => l + r,
                BinOp::Sub => l - r,
                BinOp::Mul => l * r,
                BinOp::Div => l / r,
                BinOp::Pow => l.powf(r),
            }
        }
        Ast::Call(func, arg) => func.apply(evaluate(arg, x)),
    }
}
