mod logger;
mod plot;
mod session;

use clap::Parser;
use graficas::series::SeriesError;
use graficas::{Normalizer, UNICODE_MINUS};
use plot::Canvas;
use session::{Command, Session};

const PROMPT: &str = "~> ";

/// Plot functions of x in the terminal.
///
/// With an expression, plots it and exits. Several expressions can be
/// separated with ';'. Without one, starts a REPL.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Config {
    /// Left end of the x range.
    #[arg(long, default_value_t = -10.0, allow_negative_numbers = true)]
    from: f64,

    /// Right end of the x range.
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    to: f64,

    /// Plot width in columns.
    #[arg(long, default_value_t = 72, value_parser = clap::value_parser!(u16).range(8..))]
    width: u16,

    /// Plot height in rows.
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(4..))]
    height: u16,

    /// Show minus signs as U+2212.
    #[arg(long)]
    unicode_minus: bool,

    /// Log more (repeatable). GRAFICAS_LOG is used when absent.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,
}

impl Config {
    fn normalizer(&self) -> Normalizer {
        if self.unicode_minus {
            Normalizer::new(UNICODE_MINUS)
        } else {
            Normalizer::ascii()
        }
    }

    fn canvas(&self) -> Canvas {
        Canvas{width: self.width as usize, height: self.height as usize, ansi: true}
    }
}

/// Point at the problem under `source` as printed after `indent` columns.
fn caret(source: &str, indent: usize, err: &SeriesError) -> String {
    let pad: String = source.chars()
        .take(err.offset)
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();
    format!("{}{}^\n{}", " ".repeat(indent), pad, err)
}

fn show(session: &Session, canvas: &Canvas) {
    print!("{}", canvas.legend(&session.functions));
    print!("{}", canvas.render(&session.functions, session.from, session.to));
}

fn one_shot(config: &Config, mut session: Session) -> Result<(), String> {
    let input = config.expression.join(" ");
    if let Err(e) = session.load(&input) {
        eprintln!("{}\n{}", input, caret(&input, 0, &e));
        std::process::exit(1);
    }
    log::info!("plotting {:?}", session.persisted());
    show(&session, &config.canvas());
    Ok(())
}

fn repl(config: &Config, mut session: Session) -> Result<(), String> {
    use rustyline::error::ReadlineError;
    let canvas = config.canvas();
    let histpath = dirs::home_dir().map(|h| h.join(".graficas_history"));
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    if let Some(path) = &histpath {
        if rl.load_history(path).is_err() {
            log::info!("no history at {}", path.display());
        }
    }
    loop {
        let line = match rl.readline(PROMPT) {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => line,
        };
        if line.trim().is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(line.as_str());
        match Command::parse(&line) {
            Some(Ok(cmd)) => match session.apply(cmd) {
                Ok(true) => show(&session, &canvas),
                Ok(false) => break,
                Err(e) => println!("{}", e),
            },
            Some(Err(e)) => println!("{}", e),
            None => match session.load(&line) {
                Ok(()) => show(&session, &canvas),
                Err(e) => println!("{}", caret(&line, PROMPT.len(), &e)),
            },
        }
    }
    if let Some(path) = &histpath {
        rl.save_history(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn main() -> Result<(), String> {
    let config = Config::parse();
    let env = std::env::var(logger::ENV_VAR).ok();
    logger::init(logger::level(config.verbose, env.as_deref()))?;
    session::check_range(config.from, config.to)?;

    let session = Session::new(config.from, config.to, config.normalizer());
    if config.expression.is_empty() {
        repl(&config, session)
    } else {
        one_shot(&config, session)
    }
}
