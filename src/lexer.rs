use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::ast::Token;
use crate::ast::operators::{ArithOp, Function};

/// One pattern matches every term a formula may contain: a decimal number
/// with an optional fractional part (no exponent notation), one of the
/// single-character operators and separators, or a run of letters and
/// underscores. Tried in that order, case-insensitively.
fn term_pattern() -> &'static Regex {
    static TERM: OnceLock<Regex> = OnceLock::new();
    TERM.get_or_init(|| {
        Regex::new(r"(?i)\d+(\.\d+)?|[,+\-*()/^]|[a-z_]+").expect("term pattern is valid")
    })
}

/// Errors that can occur while tokenizing a formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// Input was empty or contained only whitespace
    EmptyInput,

    /// A span of input matched no token rule
    InvalidCharacter(String),
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::EmptyInput => write!(f, "Empty or blank expression"),
            LexError::InvalidCharacter(span) => {
                write!(f, "Invalid characters '{}' in expression", span)
            }
        }
    }
}

impl std::error::Error for LexError {}

pub struct Lexer<'a> {
    input: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer { input }
    }

    /// Tokenize the whole input.
    ///
    /// Before any token is emitted, the matched spans must cover the
    /// entire input: stripping every match and all whitespace has to
    /// leave nothing behind, otherwise the first leftover span is
    /// reported as [`LexError::InvalidCharacter`].
    pub fn tokenize(&self) -> Result<Vec<Token>, LexError> {
        if self.input.trim().is_empty() {
            return Err(LexError::EmptyInput);
        }

        let leftover = term_pattern().replace_all(self.input, " ");
        if let Some(span) = leftover.split_whitespace().next() {
            return Err(LexError::InvalidCharacter(span.to_string()));
        }

        let mut tokens = Vec::new();
        for matched in term_pattern().find_iter(self.input) {
            let term = matched.as_str().to_ascii_lowercase();
            let token = match term.as_str() {
                "^" => Token::Op(ArithOp::Power),
                "/" => Token::Op(ArithOp::Divide),
                "*" => Token::Op(ArithOp::Multiply),
                "+" => Token::Op(ArithOp::Add),
                "-" => Token::Op(ArithOp::Subtract),
                "sin" => Token::Function(Function::Sin),
                "max" => Token::Function(Function::Max),
                "pi" => Token::Function(Function::Pi),
                "(" => Token::OpenParen,
                ")" => Token::CloseParen,
                // Commas only separate arguments; arity comes from the
                // function name, so the token itself is discarded.
                "," => continue,
                term if term.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') => {
                    Token::Variable(term.to_string())
                }
                term => {
                    let value = term
                        .parse::<f64>()
                        .map_err(|_| LexError::InvalidCharacter(term.to_string()))?;
                    Token::Constant(value)
                }
            };
            tokens.push(token);
        }

        Ok(tokens)
    }
}

/// Tokenize a formula string.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).tokenize()
}

#[test]
fn test_operators_and_numbers() {
    let tokens = tokenize("2^3 + 1.5").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Constant(2.0),
            Token::Op(ArithOp::Power),
            Token::Constant(3.0),
            Token::Op(ArithOp::Add),
            Token::Constant(1.5),
        ]
    );
}

#[test]
fn test_functions_are_case_insensitive() {
    let tokens = tokenize("SIN(Pi)").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Function(Function::Sin),
            Token::OpenParen,
            Token::Function(Function::Pi),
            Token::CloseParen,
        ]
    );
}

#[test]
fn test_variable_names_are_lowercased() {
    let tokens = tokenize("Rate * Hours").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Variable("rate".to_string()),
            Token::Op(ArithOp::Multiply),
            Token::Variable("hours".to_string()),
        ]
    );
}
