//! Interactive console helpers.
//!
//! Small wrappers over stdin/stdout with crossterm styling: a gray label,
//! a yellow `>` marker, and colored emphasis for results.

use std::io::{self, BufRead, Write};

use crossterm::style::{Color, Stylize};

/// Print the separator banner shown before the first prompt.
pub fn banner() {
    println!(
        "{}",
        "<><><><><><><><><><><><><><><><><><><><>".with(Color::DarkYellow)
    );
}

/// Print a line in the given color.
pub fn emphasize(text: &str, color: Color) {
    println!("{}", text.with(color));
}

/// Show a prompt label and read one trimmed line from stdin.
pub fn prompt(label: &str) -> io::Result<String> {
    println!("{}", label.with(Color::Grey));
    print!("{} ", ">".with(Color::Yellow));
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompt until the answer parses as a number.
pub fn prompt_number(label: &str) -> io::Result<f64> {
    loop {
        let answer = prompt(label)?;
        match answer.parse::<f64>() {
            Ok(value) => return Ok(value),
            Err(_) => emphasize("Number not recognized.", Color::Red),
        }
    }
}
