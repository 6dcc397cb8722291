// tests/rpn_tests.rs

use formulac::lexer::tokenize;
use formulac::output::print_tokens;
use formulac::rpn::{RpnError, to_postfix};

fn postfix_of(input: &str) -> String {
    let tokens = tokenize(input).unwrap();
    let postfix = to_postfix(tokens).unwrap();
    print_tokens(&postfix)
}

// ============================================================================
// Precedence and Associativity
// ============================================================================

#[test]
fn test_simple_power() {
    assert_eq!(postfix_of("2^3"), "2 3 ^");
}

#[test]
fn test_precedence_orders_operators() {
    assert_eq!(postfix_of("a+5*13+b"), "a 5 13 * + b +");
    assert_eq!(postfix_of("2+3*4"), "2 3 4 * +");
    assert_eq!(postfix_of("2*3+4"), "2 3 * 4 +");
}

#[test]
fn test_equal_precedence_associates_left() {
    assert_eq!(postfix_of("10-2-3"), "10 2 - 3 -");
    assert_eq!(postfix_of("8/4/2"), "8 4 / 2 /");
    // Exponent chains associate left as well.
    assert_eq!(postfix_of("2^3^2"), "2 3 ^ 2 ^");
}

// ============================================================================
// Parentheses
// ============================================================================

#[test]
fn test_grouping_overrides_precedence() {
    assert_eq!(postfix_of("a*(b+c)"), "a b c + *");
    assert_eq!(postfix_of("a * (b + c * d) + e"), "a b c d * + * e +");
}

#[test]
fn test_leading_grouping_parenthesis() {
    // A grouping parenthesis with no preceding operator is legal: the
    // post-close pop only fires for a pending function token.
    assert_eq!(postfix_of("(a+b)*c"), "a b + c *");
    assert_eq!(postfix_of("(2)"), "2");
}

#[test]
fn test_unmatched_close_paren() {
    let tokens = tokenize("2+3)").unwrap();
    assert_eq!(to_postfix(tokens), Err(RpnError::StructuralImbalance));

    let tokens = tokenize(")").unwrap();
    assert_eq!(to_postfix(tokens), Err(RpnError::StructuralImbalance));
}

// ============================================================================
// Functions
// ============================================================================

#[test]
fn test_function_emitted_when_its_argument_list_closes() {
    assert_eq!(postfix_of("sin(x)"), "x sin");
    assert_eq!(postfix_of("3+max(2,3)"), "3 2 3 max +");
}

#[test]
fn test_nullary_pi_passes_straight_through() {
    assert_eq!(postfix_of("pi*2"), "pi 2 *");
}

#[test]
fn test_nested_function_calls() {
    assert_eq!(postfix_of("sin(max(2,3)/3*pi)"), "2 3 max 3 / pi * sin");
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_reordering_is_deterministic() {
    for input in ["a+5*13+b", "sin(max(2,3)/3*pi)", "(a+b)*c"] {
        let first = to_postfix(tokenize(input).unwrap()).unwrap();
        let second = to_postfix(tokenize(input).unwrap()).unwrap();
        assert_eq!(first, second, "Failed for input: {}", input);
    }
}
