//! Wraps an evaluation graph in a directly callable formula.

use std::fmt;

use crate::ast::{GraphNode, Token};
use crate::builder::{self, BuildError};
use crate::lexer::{Lexer, LexError};
use crate::rpn::{self, RpnError};

/// A compiled formula: a pure, reusable evaluator.
///
/// The parameter list is the ordered sequence of variable *occurrences*
/// in the postfix form - repeated names are not deduplicated, so `a + a`
/// takes two arguments. Postfix order defines argument order; it can
/// differ from the order variables first appear in the infix source.
///
/// # Examples
///
/// ```
/// use formulac::compile;
///
/// let formula = compile("a*(b+c)").unwrap();
/// assert_eq!(formula.params(), ["a", "b", "c"]);
/// assert_eq!(formula.call(&[2.0, 3.0, 4.0]), 14.0);
/// ```
#[derive(Debug)]
pub struct Formula {
    root: GraphNode,
    params: Vec<String>,
    postfix: Vec<Token>,
}

impl Formula {
    /// Wrap a built graph together with the postfix sequence it came from.
    ///
    /// The postfix sequence, not the graph, determines parameter order:
    /// its variable tokens are scanned front to back and each occurrence
    /// becomes one parameter.
    pub fn compile(root: GraphNode, postfix: Vec<Token>) -> Self {
        let params = postfix
            .iter()
            .filter_map(|token| match token {
                Token::Variable(name) => Some(name.clone()),
                _ => None,
            })
            .collect();
        Formula {
            root,
            params,
            postfix,
        }
    }

    /// Parameter names in argument order. Duplicates are possible.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Number of arguments [`call`](Self::call) expects.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// The postfix token sequence this formula was compiled from, kept
    /// for diagnostic printing.
    pub fn postfix(&self) -> &[Token] {
        &self.postfix
    }

    /// Root node of the evaluation graph.
    pub fn graph(&self) -> &GraphNode {
        &self.root
    }

    /// Evaluate the formula with one value per parameter.
    ///
    /// Pure and stateless: repeated calls never mutate the graph and
    /// always recompute from scratch. NaN and out-of-range inputs flow
    /// through with IEEE semantics rather than erroring.
    ///
    /// # Panics
    ///
    /// Panics if `args.len()` differs from [`arity`](Self::arity); the
    /// argument count is part of the caller's contract.
    pub fn call(&self, args: &[f64]) -> f64 {
        assert_eq!(
            args.len(),
            self.params.len(),
            "formula takes {} argument(s), got {}",
            self.params.len(),
            args.len()
        );
        self.root.eval(args)
    }
}

/// Any failure of the compilation pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum FormulaError {
    /// Tokenization failure
    Lex(LexError),
    /// Infix-to-postfix reordering failure
    Rpn(RpnError),
    /// Graph reduction failure
    Build(BuildError),
}

impl fmt::Display for FormulaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulaError::Lex(e) => write!(f, "{}", e),
            FormulaError::Rpn(e) => write!(f, "{}", e),
            FormulaError::Build(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for FormulaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormulaError::Lex(e) => Some(e),
            FormulaError::Rpn(e) => Some(e),
            FormulaError::Build(e) => Some(e),
        }
    }
}

impl From<LexError> for FormulaError {
    fn from(e: LexError) -> Self {
        FormulaError::Lex(e)
    }
}

impl From<RpnError> for FormulaError {
    fn from(e: RpnError) -> Self {
        FormulaError::Rpn(e)
    }
}

impl From<BuildError> for FormulaError {
    fn from(e: BuildError) -> Self {
        FormulaError::Build(e)
    }
}

/// Run the whole pipeline: tokenize, reorder to postfix, build the
/// evaluation graph, and wrap it in a [`Formula`].
///
/// Fails fast on the first stage error; no partial result is returned.
pub fn compile(input: &str) -> Result<Formula, FormulaError> {
    let tokens = Lexer::new(input).tokenize()?;
    let postfix = rpn::to_postfix(tokens)?;
    let root = builder::build(&postfix)?;
    Ok(Formula::compile(root, postfix))
}
