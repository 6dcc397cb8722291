use clap::Parser;
use crossterm::style::Color;
use formulac::cli::{self, CliError};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "formulac")]
#[command(about = "Compile an infix math formula and evaluate it")]
#[command(version)]
struct Cli {
    /// Formula to compile (reads stdin when piped, prompts otherwise)
    expression: Option<String>,

    /// Print the postfix (RPN) form and exit without evaluating
    #[arg(short, long)]
    postfix: bool,

    /// Pre-bind a variable, e.g. --set rate=1.5 (repeatable)
    #[arg(long, value_name = "NAME=VALUE")]
    set: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let expression = match cli.expression {
        Some(s) => s,
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
            buffer
        }
        None => {
            cli::banner();
            cli::prompt("Provide a math expression:")?
        }
    };

    let formula = formulac::compile(&expression)?;

    println!();
    println!("This is your expression in Reverse Polish Notation:");
    cli::emphasize(&formulac::print_tokens(formula.postfix()), Color::Green);

    if cli.postfix {
        return Ok(());
    }

    let bindings = cli::parse_bindings(&cli.set)?;

    let mut values = Vec::with_capacity(formula.arity());
    if !formula.params().is_empty() {
        println!();
    }
    for name in formula.params() {
        match bindings.get(name) {
            Some(value) => values.push(*value),
            None => values.push(cli::prompt_number(&format!("Value for variable '{}':", name))?),
        }
    }

    let result = formula.call(&values);
    println!();
    cli::emphasize(
        &format!("Result: {}", formulac::format_amount(result)),
        Color::Yellow,
    );
    Ok(())
}
