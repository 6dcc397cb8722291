pub mod ast;
pub mod builder;
#[cfg(feature = "cli")]
pub mod cli;
pub mod compiler;
pub mod lexer;
pub mod output;
pub mod rpn;

pub use ast::{ArithOp, BinaryOp, Function, GraphNode, Token, UnaryOp};
pub use builder::{BuildError, build};
pub use compiler::{Formula, FormulaError, compile};
pub use lexer::{LexError, Lexer, tokenize};
pub use output::{format_amount, print_tokens};
pub use rpn::{RpnError, to_postfix};
