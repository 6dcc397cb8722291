//! Infix to postfix reordering (shunting yard).
//!
//! Resolves operator precedence, parenthesized grouping, and function
//! calls in a single pass over the token stream, producing the reverse
//! Polish order the graph builder consumes.

use std::fmt;

use crate::ast::Token;

/// Errors that can occur while reordering tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpnError {
    /// A closing parenthesis had no matching open parenthesis
    StructuralImbalance,
}

impl fmt::Display for RpnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpnError::StructuralImbalance => write!(f, "Unbalanced parentheses in expression"),
        }
    }
}

impl std::error::Error for RpnError {}

/// Reorder an infix token sequence into postfix (reverse Polish) order.
///
/// Operands pass straight through; operators wait on a pending stack
/// until everything that binds at least as tightly has been emitted.
/// Functions carry no precedence and are emitted only when the
/// parenthesized argument list they precede closes, which is why a
/// function call must be immediately followed by `(`.
///
/// Deterministic: the same input sequence always yields the same output.
pub fn to_postfix(tokens: Vec<Token>) -> Result<Vec<Token>, RpnError> {
    let mut output: Vec<Token> = Vec::new();
    let mut pending: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::OpenParen => pending.push(token),

            Token::CloseParen => {
                // Emit everything back to the matching '(' and discard it.
                loop {
                    match pending.pop() {
                        Some(Token::OpenParen) => break,
                        Some(popped) => output.push(popped),
                        None => return Err(RpnError::StructuralImbalance),
                    }
                }
                // A function owns the argument list it precedes; emit it
                // now that the list has closed. Plain grouping parentheses
                // leave the stack untouched.
                if let Some(Token::Function(_)) = pending.last() {
                    output.extend(pending.pop());
                }
            }

            token if token.is_operand() => output.push(token),

            token => {
                while precedence_yields(&token, pending.last()) {
                    output.extend(pending.pop());
                }
                pending.push(token);
            }
        }
    }

    while let Some(remaining) = pending.pop() {
        output.push(remaining);
    }

    Ok(output)
}

/// True when the pending stack's top operator must be emitted before the
/// current token is pushed. Tokens without a precedence (functions and
/// parentheses) never displace and are never displaced here.
fn precedence_yields(current: &Token, top: Option<&Token>) -> bool {
    match (current.precedence(), top.and_then(|t| t.precedence())) {
        (Some(current), Some(top)) => current <= top,
        _ => false,
    }
}
