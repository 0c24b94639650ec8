use crate::expression::Expression;
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const PALETTE: [Color; 8] = [
        Color::rgb(0x1f, 0x77, 0xb4),
        Color::rgb(0xd6, 0x27, 0x28),
        Color::rgb(0x2c, 0xa0, 0x2c),
        Color::rgb(0xff, 0x7f, 0x0e),
        Color::rgb(0x94, 0x67, 0xbd),
        Color::rgb(0x8c, 0x56, 0x4b),
        Color::rgb(0xe3, 0x77, 0xc2),
        Color::rgb(0x17, 0xbe, 0xcf),
    ];

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color{r, g, b}
    }

    /// Palette color for the `i`-th curve, cycling when there are more
    /// curves than colors.
    pub fn nth(i: usize) -> Self {
        Self::PALETTE[i % Self::PALETTE.len()]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// How a curve is drawn when several overlap.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Highlight {
    #[default]
    None,
    Highlighted,
    Obscured,
}

/// A plotted curve: an expression with its drawing state.
#[derive(Clone, PartialEq, Debug)]
pub struct Function {
    color: Color,
    expression: Expression,
    hidden: bool,
    highlight: Highlight,
}

impl Function {
    pub fn new(color: Color, expression: Expression) -> Self {
        Function{color, expression, hidden: false, highlight: Highlight::None}
    }

    pub fn color(&self) -> Color { self.color }
    pub fn set_color(&mut self, color: Color) { self.color = color; }

    pub fn expression(&self) -> &Expression { &self.expression }

    /// Swap in a new expression, keeping color and drawing state. Callers
    /// keep the previous one on a parse failure simply by not calling this.
    pub fn set_expression(&mut self, expression: Expression) {
        self.expression = expression;
    }

    pub fn is_hidden(&self) -> bool { self.hidden }
    pub fn set_hidden(&mut self, hidden: bool) { self.hidden = hidden; }

    pub fn highlight(&self) -> Highlight { self.highlight }
    pub fn set_highlight(&mut self, highlight: Highlight) { self.highlight = highlight; }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.expression.evaluate(x)
    }
}

/// Highlight function `idx` and obscure every other one, or clear all
/// marks when `idx` is `None`.
pub fn highlight_only(functions: &mut [Function], idx: Option<usize>) {
    for (i, func) in functions.iter_mut().enumerate() {
        func.set_highlight(match idx {
            None => Highlight::None,
            Some(sel) if sel == i => Highlight::Highlighted,
            Some(_) => Highlight::Obscured,
        });
    }
}
