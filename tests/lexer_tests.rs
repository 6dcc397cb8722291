// tests/lexer_tests.rs

use formulac::ast::{ArithOp, Function, Token};
use formulac::lexer::{LexError, tokenize};

// ============================================================================
// Operators and Parentheses
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        ("^", Token::Op(ArithOp::Power)),
        ("/", Token::Op(ArithOp::Divide)),
        ("*", Token::Op(ArithOp::Multiply)),
        ("+", Token::Op(ArithOp::Add)),
        ("-", Token::Op(ArithOp::Subtract)),
        ("(", Token::OpenParen),
        (")", Token::CloseParen),
    ];

    for (input, expected) in test_cases {
        let tokens = tokenize(input).unwrap();
        assert_eq!(tokens, vec![expected], "Failed for input: {}", input);
    }
}

#[test]
fn test_precedence_table() {
    assert_eq!(Token::Op(ArithOp::Power).precedence(), Some(3));
    assert_eq!(Token::Op(ArithOp::Multiply).precedence(), Some(2));
    assert_eq!(Token::Op(ArithOp::Divide).precedence(), Some(2));
    assert_eq!(Token::Op(ArithOp::Add).precedence(), Some(1));
    assert_eq!(Token::Op(ArithOp::Subtract).precedence(), Some(1));

    // Functions and parentheses carry the sentinel: no precedence.
    assert_eq!(Token::Function(Function::Sin).precedence(), None);
    assert_eq!(Token::Function(Function::Max).precedence(), None);
    assert_eq!(Token::OpenParen.precedence(), None);
    assert_eq!(Token::CloseParen.precedence(), None);
}

// ============================================================================
// Functions and Variables
// ============================================================================

#[test]
fn test_function_names() {
    let tokens = tokenize("sin max pi").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Function(Function::Sin),
            Token::Function(Function::Max),
            Token::Function(Function::Pi),
        ]
    );
}

#[test]
fn test_function_arity_is_fixed_by_name() {
    assert_eq!(Token::Function(Function::Pi).arity(), 0);
    assert_eq!(Token::Function(Function::Sin).arity(), 1);
    assert_eq!(Token::Function(Function::Max).arity(), 2);
    assert_eq!(Token::Op(ArithOp::Add).arity(), 2);
}

#[test]
fn test_case_insensitive_functions() {
    for input in ["SIN", "Sin", "sIn"] {
        let tokens = tokenize(input).unwrap();
        assert_eq!(tokens, vec![Token::Function(Function::Sin)]);
    }
    let tokens = tokenize("PI").unwrap();
    assert_eq!(tokens, vec![Token::Function(Function::Pi)]);
}

#[test]
fn test_other_letter_runs_are_variables() {
    let tokens = tokenize("alpha _rate sine").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Variable("alpha".to_string()),
            Token::Variable("_rate".to_string()),
            // Not a prefix match: "sine" is a variable, not sin + e.
            Token::Variable("sine".to_string()),
        ]
    );
}

#[test]
fn test_variable_names_are_normalized_to_lowercase() {
    let tokens = tokenize("Alpha + ALPHA").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Variable("alpha".to_string()),
            Token::Op(ArithOp::Add),
            Token::Variable("alpha".to_string()),
        ]
    );
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_integer_and_fractional_literals() {
    let tokens = tokenize("42 3.14 0.5").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Constant(42.0),
            Token::Constant(3.14),
            Token::Constant(0.5),
        ]
    );
}

#[test]
fn test_trailing_dot_is_invalid() {
    // The fractional part needs digits; the dangling '.' is left uncovered.
    let result = tokenize("1.");
    assert_eq!(result, Err(LexError::InvalidCharacter(".".to_string())));
}

#[test]
fn test_exponent_notation_is_not_a_single_literal() {
    // No exponent support: "1e5" lexes as a constant, a variable, and
    // another constant. Later stages reject the juxtaposition.
    let tokens = tokenize("1e5").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Constant(1.0),
            Token::Variable("e".to_string()),
            Token::Constant(5.0),
        ]
    );
}

// ============================================================================
// Commas and Whitespace
// ============================================================================

#[test]
fn test_comma_is_discarded() {
    let tokens = tokenize("max(2, 3)").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Function(Function::Max),
            Token::OpenParen,
            Token::Constant(2.0),
            Token::Constant(3.0),
            Token::CloseParen,
        ]
    );
}

#[test]
fn test_whitespace_is_insignificant() {
    assert_eq!(tokenize("  2 +3 "), tokenize("2+3"));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_empty_input() {
    assert_eq!(tokenize(""), Err(LexError::EmptyInput));
    assert_eq!(tokenize("   "), Err(LexError::EmptyInput));
    assert_eq!(tokenize("\t\n"), Err(LexError::EmptyInput));
}

#[test]
fn test_invalid_character_reports_the_offending_span() {
    assert_eq!(
        tokenize("2 % 3"),
        Err(LexError::InvalidCharacter("%".to_string()))
    );
    assert_eq!(
        tokenize("a = b"),
        Err(LexError::InvalidCharacter("=".to_string()))
    );
}

#[test]
fn test_invalid_character_wins_over_valid_tail() {
    // The whole input is validated before any token is emitted.
    let result = tokenize("$$ + 2");
    assert_eq!(result, Err(LexError::InvalidCharacter("$$".to_string())));
}
