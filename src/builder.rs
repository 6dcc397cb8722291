//! Postfix sequence to evaluation graph reduction.
//!
//! A single left-to-right walk over the postfix tokens with an operand
//! stack of graph nodes: operands push a leaf, operators pop their arity
//! in operands and push the composed node. After the walk, exactly one
//! node remains; it is the root of the whole expression.

use std::f64::consts::PI;
use std::fmt;

use crate::ast::GraphNode;
use crate::ast::Token;
use crate::ast::operators::{BinaryOp, Function, UnaryOp};

/// Errors that can occur while reducing a postfix sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Operands were missing or left over after full reduction
    MalformedExpression,

    /// A token with no reduction rule appeared in postfix position
    UnsupportedOperator(String),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MalformedExpression => {
                write!(f, "Unable to process the provided expression")
            }
            BuildError::UnsupportedOperator(token) => {
                write!(f, "Operator '{}' is not supported here", token)
            }
        }
    }
}

impl std::error::Error for BuildError {}

/// Reduce a postfix token sequence to the root of its evaluation graph.
///
/// Every variable occurrence becomes its own [`GraphNode::Parameter`]
/// leaf: occurrences are not deduplicated by name, and the leaf's index
/// is its position among variable tokens in the sequence.
pub fn build(postfix: &[Token]) -> Result<GraphNode, BuildError> {
    let mut operands: Vec<GraphNode> = Vec::new();
    let mut occurrences = 0usize;

    for token in postfix {
        match token {
            Token::Constant(value) => operands.push(GraphNode::Constant(*value)),

            Token::Variable(name) => {
                operands.push(GraphNode::Parameter {
                    index: occurrences,
                    name: name.clone(),
                });
                occurrences += 1;
            }

            Token::Function(Function::Pi) => operands.push(GraphNode::Constant(PI)),

            Token::Function(Function::Sin) => {
                let operand = operands.pop().ok_or(BuildError::MalformedExpression)?;
                operands.push(GraphNode::Unary {
                    op: UnaryOp::Sin,
                    operand: Box::new(operand),
                });
            }

            Token::Function(Function::Max) => reduce_binary(&mut operands, BinaryOp::Max)?,

            Token::Op(op) => reduce_binary(&mut operands, BinaryOp::from(*op))?,

            // A parenthesis in postfix position means the organizer drained
            // an unmatched '(' into its output; there is no reduction rule
            // for it.
            Token::OpenParen | Token::CloseParen => {
                return Err(BuildError::UnsupportedOperator(token.to_string()));
            }
        }
    }

    let root = operands.pop().ok_or(BuildError::MalformedExpression)?;
    if !operands.is_empty() {
        return Err(BuildError::MalformedExpression);
    }
    Ok(root)
}

fn reduce_binary(operands: &mut Vec<GraphNode>, op: BinaryOp) -> Result<(), BuildError> {
    let right = operands.pop().ok_or(BuildError::MalformedExpression)?;
    let left = operands.pop().ok_or(BuildError::MalformedExpression)?;
    operands.push(GraphNode::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    });
    Ok(())
}
