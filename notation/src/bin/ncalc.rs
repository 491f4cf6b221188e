use clap::Parser;
use notation::Notation;

/// Evaluate or convert infix, prefix and postfix expressions.
/// Without an expression it starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about=None)]
struct Args {
    /// notation of the input: infix, prefix or postfix
    #[arg(short, long, default_value = "infix")]
    notation: Notation,
    /// print every step of the evaluation
    #[arg(short, long)]
    trace: bool,
    /// convert to this notation instead of evaluating
    #[arg(long)]
    to: Option<Notation>,
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expr: Vec<String>,
}

mod repl {
    use notation::{convert, Action, Notation};

    pub struct Session {
        pub notation: Notation,
        pub trace: bool,
    }

    fn print_step(action: &Action, operands: &[f64], pending: &[char]) {
        let pending = pending.iter().collect::<String>();
        println!("  {:<32} operands {:?} pending [{}]", action.to_string(), operands, pending);
    }

    pub fn evalexpr(notation: Notation, trace: bool, input: &str) {
        let result = if trace {
            notation.evaluate_traced(input, &mut print_step)
        } else {
            notation.evaluate(input)
        };
        match result {
            Err(e) => println!("Eval err: {}", e),
            Ok(value) => println!("{:.6}", value),
        }
    }

    pub fn convexpr(from: Notation, to: Notation, input: &str) {
        match convert(input, from, to) {
            Err(e) => println!("Convert err: {}", e),
            Ok(text) => println!("{}", text),
        }
    }

    fn command(session: &mut Session, cmd: &str, rest: &str) -> Result<(), String> {
        match cmd {
            "trace" => {
                session.trace = !session.trace;
                println!("trace {}", if session.trace { "on" } else { "off" });
            }
            "to" => {
                let mut split = rest.trim_start().splitn(2, char::is_whitespace);
                let to = split.next().unwrap_or("").parse::<Notation>()?;
                convexpr(session.notation, to, split.next().unwrap_or(""));
            }
            name => {
                session.notation = name.parse()?;
                println!("reading {} expressions", session.notation);
            }
        }
        Ok(())
    }

    pub fn statement(session: &mut Session, input: &str) {
        let input = input.trim();
        if input.is_empty() {
            return;
        }
        match input.strip_prefix(':') {
            Some(line) => {
                let (cmd, rest) = line.split_at(line.find(char::is_whitespace).unwrap_or(line.len()));
                if let Err(e) = command(session, cmd, rest) {
                    println!("{}", e);
                }
            }
            None => evalexpr(session.notation, session.trace, input),
        }
    }
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    if !args.expr.is_empty() {
        let input = args.expr.join(" ");
        match args.to {
            Some(to) => repl::convexpr(args.notation, to, &input),
            None => repl::evalexpr(args.notation, args.trace, &input),
        }
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    let histpath = dirs::home_dir().map(|h| h.join(".notation_history"));
    if let Some(ref path) = histpath {
        if rl.load_history(path).is_err() {
            println!("No history yet");
        }
    }
    let mut session = repl::Session{notation: args.notation, trace: args.trace};
    loop {
        match rl.readline(&format!("{}> ", session.notation)) {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                repl::statement(&mut session, &line);
            }
        }
    }
    if let Some(ref path) = histpath {
        rl.save_history(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}
