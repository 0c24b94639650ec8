/// The single independent variable.
pub const VARIABLE: &str = "x";

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UnOp {
    Neg,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// Unary functions callable as `name(arg)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FunctionId {
    Sin, Cos, Tan,
    Asin, Acos, Atan,
    Sinh, Cosh, Tanh,
    Exp, Ln, Log2, Log10,
    Sqrt, Abs, Sign,
    Floor, Ceil, Round,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ConstantId {
    Pi,
    E,
}

/// Expression tree. Every node owns its children.
#[derive(Clone, PartialEq, Debug)]
pub enum Ast {
    Number(f64),
    Var,
    Const(ConstantId),
    Unary(UnOp, Box<Ast>),
    Binary(BinOp, Box<Ast>, Box<Ast>),
    Call(FunctionId, Box<Ast>),
}

impl FunctionId {
    pub const ALL: [FunctionId; 19] = [
        FunctionId::Sin, FunctionId::Cos, FunctionId::Tan,
        FunctionId::Asin, FunctionId::Acos, FunctionId::Atan,
        FunctionId::Sinh, FunctionId::Cosh, FunctionId::Tanh,
        FunctionId::Exp, FunctionId::Ln, FunctionId::Log2, FunctionId::Log10,
        FunctionId::Sqrt, FunctionId::Abs, FunctionId::Sign,
        FunctionId::Floor, FunctionId::Ceil, FunctionId::Round,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FunctionId::Sin => "sin",
            FunctionId::Cos => "cos",
            FunctionId::Tan => "tan",
            FunctionId::Asin => "asin",
            FunctionId::Acos => "acos",
            FunctionId::Atan => "atan",
            FunctionId::Sinh => "sinh",
            FunctionId::Cosh => "cosh",
            FunctionId::Tanh => "tanh",
            FunctionId::Exp => "exp",
            FunctionId::Ln => "ln",
            FunctionId::Log2 => "log2",
            FunctionId::Log10 => "log10",
            FunctionId::Sqrt => "sqrt",
            FunctionId::Abs => "abs",
            FunctionId::Sign => "sign",
            FunctionId::Floor => "floor",
            FunctionId::Ceil => "ceil",
            FunctionId::Round => "round",
        }
    }

    pub fn from_name(name: &str) -> Option<FunctionId> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }
}

impl ConstantId {
    pub fn name(self) -> &'static str {
        match self {
            ConstantId::Pi => "pi",
            ConstantId::E => "e",
        }
    }

    pub fn from_name(name: &str) -> Option<ConstantId> {
        match name {
            "pi" => Some(ConstantId::Pi),
            "e" => Some(ConstantId::E),
            _ => None,
        }
    }
}

#[derive(PartialEq, Debug)]
pub enum Assoc {
    Left,
    Right,
    None,
}

// Binding strength of each node when printed. Unary minus sits between
// multiplication and exponentiation so that -x^2 reads as -(x^2) while
// 2*-x and 2^-x are still accepted.
pub fn precedence(node: &Ast) -> (usize, Assoc) {
    match *node {
        Ast::Binary(BinOp::Add, _, _) | Ast::Binary(BinOp::Sub, _, _) => (1, Assoc::Left),
        Ast::Binary(BinOp::Mul, _, _) | Ast::Binary(BinOp::Div, _, _) => (2, Assoc::Left),
        Ast::Unary(UnOp::Neg, _) => (3, Assoc::Right),
        Ast::Binary(BinOp::Pow, _, _) => (4, Assoc::Right),
        Ast::Number(_) | Ast::Var | Ast::Const(_) | Ast::Call(_, _) => (5, Assoc::None),
    }
}
