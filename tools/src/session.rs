use graficas::series::{self, SeriesError};
use graficas::{highlight_only, Color, Function, Normalizer};

/// REPL commands, written with a leading ':'.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Range(f64, f64),
    Hide(usize),
    Show(usize),
    Highlight(Option<usize>),
    Quit,
}

fn index(arg: Option<&str>) -> Result<usize, String> {
    let arg = arg.ok_or("missing function number")?;
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(format!("bad function number '{}'", arg)),
    }
}

fn bound(arg: Option<&str>) -> Result<f64, String> {
    let arg = arg.ok_or("usage: :range FROM TO")?;
    arg.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(format!("bad range bound '{}'", arg))
}

pub fn check_range(from: f64, to: f64) -> Result<(), String> {
    if !from.is_finite() || !to.is_finite() {
        Err("range bounds must be finite".to_string())
    } else if from < to {
        Ok(())
    } else {
        Err(format!("empty range [{}, {}]", from, to))
    }
}

impl Command {
    /// None when `line` isn't a command at all.
    pub fn parse(line: &str) -> Option<Result<Command, String>> {
        let rest = line.trim().strip_prefix(':')?;
        let mut words = rest.split_whitespace();
        let cmd = match words.next() {
            Some("range") => bound(words.next()).and_then(|from| {
                let to = bound(words.next())?;
                check_range(from, to)?;
                Ok(Command::Range(from, to))
            }),
            Some("hide") => index(words.next()).map(Command::Hide),
            Some("show") => index(words.next()).map(Command::Show),
            Some("hl") => match words.next() {
                None => Ok(Command::Highlight(None)),
                arg => index(arg).map(|i| Command::Highlight(Some(i))),
            },
            Some("quit") | Some("q") => Ok(Command::Quit),
            Some(other) => Err(format!("unknown command ':{}'", other)),
            None => Err("missing command after ':'".to_string()),
        };
        if cmd.is_ok() && words.next().is_some() {
            return Some(Err(format!("too many arguments for ':{}'", rest.trim())));
        }
        Some(cmd)
    }
}

/// The functions being plotted and the window they're plotted in.
#[derive(Debug)]
pub struct Session {
    pub functions: Vec<Function>,
    pub from: f64,
    pub to: f64,
    pub normalizer: Normalizer,
}

impl Session {
    pub fn new(from: f64, to: f64, normalizer: Normalizer) -> Self {
        Session{functions: Vec::new(), from, to, normalizer}
    }

    /// Replace every function with the `;`-separated expressions in `line`.
    /// On failure the current functions stay.
    pub fn load(&mut self, line: &str) -> Result<(), SeriesError> {
        let expressions = series::split(line, self.normalizer)?;
        self.functions = expressions.into_iter()
            .enumerate()
            .map(|(i, expr)| Function::new(Color::nth(i), expr))
            .collect();
        Ok(())
    }

    /// Apply a command, returning false once the session should end.
    pub fn apply(&mut self, cmd: Command) -> Result<bool, String> {
        let count = self.functions.len();
        let check = |i: usize| if i < count {
            Ok(i)
        } else {
            Err(format!("no function {} (have {})", i + 1, count))
        };
        match cmd {
            Command::Range(from, to) => {
                self.from = from;
                self.to = to;
            }
            Command::Hide(i) => self.functions[check(i)?].set_hidden(true),
            Command::Show(i) => self.functions[check(i)?].set_hidden(false),
            Command::Highlight(Some(i)) => highlight_only(&mut self.functions, Some(check(i)?)),
            Command::Highlight(None) => highlight_only(&mut self.functions, None),
            Command::Quit => return Ok(false),
        }
        log::debug!("applied {:?}", cmd);
        Ok(true)
    }

    /// Canonical text of every function, as it would be saved.
    pub fn persisted(&self) -> String {
        let expressions: Vec<_> = self.functions.iter().map(|f| f.expression().clone()).collect();
        series::join(&expressions)
    }
}
