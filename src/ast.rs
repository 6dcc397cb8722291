//! # Formula representation
//!
//! Core data types shared by the compilation pipeline:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[operators]** - Arithmetic operator and function kinds
//! - **[graph]** - The evaluation graph a formula is reduced to
//!
//! ## Pipeline Overview
//!
//! ```text
//! "a*(b+c)"  --lexer-->  [a, *, (, b, +, c, )]
//!            --rpn---->  [a, b, c, +, *]
//!            --build-->  Multiply(a, Add(b, c))
//!            --compile-> Formula taking (a, b, c) and returning f64
//! ```
//!
//! Tokens are immutable once lexed: the shunting-yard stage reorders them
//! and the graph builder consumes them, but neither mutates a token. All
//! operator kinds are closed enums, so every stage matches exhaustively
//! and a new operator cannot land without every match site handling it.

pub mod graph;
pub mod operators;
pub mod tokens;

pub use graph::GraphNode;
pub use operators::{ArithOp, BinaryOp, Function, UnaryOp};
pub use tokens::Token;
