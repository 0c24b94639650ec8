use graficas::{Color, Function, Highlight, Sampler};
use std::fmt::Write;

const DOT: char = '\u{2022}';
const GUTTER: usize = 10;

#[derive(Clone, Copy)]
enum Cell {
    Empty,
    Axis(char),
    Curve(usize),
}

/// Renders visible functions as text, one sample per column.
#[derive(Clone, Copy, Debug)]
pub struct Canvas {
    pub width: usize,
    pub height: usize,
    /// Emit 24-bit color escapes.
    pub ansi: bool,
}

fn label(v: f64) -> String {
    if v != 0.0 && !(1e-3..1e6).contains(&v.abs()) {
        format!("{:.2e}", v)
    } else {
        format!("{:.3}", v)
    }
}

fn paint(c: char, color: Color, highlight: Highlight) -> String {
    let style = match highlight {
        Highlight::None => "",
        Highlight::Highlighted => "\x1b[1m",
        Highlight::Obscured => "\x1b[2m",
    };
    format!("{}\x1b[38;2;{};{};{}m{}\x1b[0m", style, color.r, color.g, color.b, c)
}

// curves drawn later end up on top
fn layer(highlight: Highlight) -> u8 {
    match highlight {
        Highlight::Obscured => 0,
        Highlight::None => 1,
        Highlight::Highlighted => 2,
    }
}

impl Canvas {
    fn scale(&self, v: f64, lo: f64, hi: f64, cells: usize) -> usize {
        let t = (v - lo) / (hi - lo);
        ((t * (cells - 1) as f64).round().max(0.0) as usize).min(cells - 1)
    }

    pub fn render(&self, functions: &[Function], from: f64, to: f64) -> String {
        let (width, height) = (self.width.max(2), self.height.max(2));
        let sampler = Sampler::new(from, to, width - 1);
        let curves: Vec<(usize, Vec<(f64, f64)>)> = functions.iter()
            .enumerate()
            .filter(|(_, f)| !f.is_hidden())
            .map(|(i, f)| (i, sampler.sample(f.expression())))
            .collect();

        let finite = curves.iter()
            .flat_map(|(_, points)| points.iter().map(|&(_, y)| y))
            .filter(|y| y.is_finite());
        let (mut lo, mut hi) = finite.fold((f64::INFINITY, f64::NEG_INFINITY),
                                           |(lo, hi), y| (lo.min(y), hi.max(y)));
        if lo > hi {
            return format!("nothing to plot in [{}, {}]\n", from, to);
        }
        if lo == hi {
            lo -= 1.0;
            hi += 1.0;
        }
        log::debug!("plotting {} curves, y in [{}, {}]", curves.len(), lo, hi);

        let mut grid = vec![vec![Cell::Empty; width]; height];
        if lo <= 0.0 && 0.0 <= hi {
            let row = height - 1 - self.scale(0.0, lo, hi, height);
            grid[row].iter_mut().for_each(|c| *c = Cell::Axis('-'));
        }
        if from <= 0.0 && 0.0 <= to {
            let col = self.scale(0.0, from, to, width);
            for row in grid.iter_mut() {
                row[col] = match row[col] {
                    Cell::Axis(_) => Cell::Axis('+'),
                    _ => Cell::Axis('|'),
                };
            }
        }

        let mut order: Vec<&(usize, Vec<(f64, f64)>)> = curves.iter().collect();
        order.sort_by_key(|(i, _)| layer(functions[*i].highlight()));
        for (i, points) in order {
            for (col, &(_, y)) in points.iter().enumerate() {
                if y.is_finite() {
                    let row = height - 1 - self.scale(y, lo, hi, height);
                    grid[row][col] = Cell::Curve(*i);
                }
            }
        }

        let mut out = String::new();
        for (r, row) in grid.iter().enumerate() {
            let gutter = match r {
                0 => label(hi),
                r if r == height - 1 => label(lo),
                _ => String::new(),
            };
            let _ = write!(out, "{:>w$} |", gutter, w = GUTTER);
            for cell in row {
                match *cell {
                    Cell::Empty => out.push(' '),
                    Cell::Axis(c) => out.push(c),
                    Cell::Curve(i) if self.ansi => {
                        let f = &functions[i];
                        out.push_str(&paint(DOT, f.color(), f.highlight()));
                    }
                    Cell::Curve(_) => out.push(DOT),
                }
            }
            out.push('\n');
        }
        let (left, right) = (label(from), label(to));
        let pad = (width + 2).saturating_sub(left.len());
        let _ = writeln!(out, "{:w$}{}{:>pad$}", "", left, right, w = GUTTER, pad = pad);
        out
    }

    /// One line per function with its 1-based number.
    pub fn legend(&self, functions: &[Function]) -> String {
        let mut out = String::new();
        for (i, f) in functions.iter().enumerate() {
            let swatch = if self.ansi { paint(DOT, f.color(), f.highlight()) } else { DOT.to_string() };
            let state = match (f.is_hidden(), f.highlight()) {
                (true, _) => " (hidden)",
                (false, Highlight::Highlighted) => " (highlighted)",
                _ => "",
            };
            let _ = writeln!(out, "[{}] {} {}{}", i + 1, swatch, f.expression(), state);
        }
        out
    }
}
