use std::fmt;

/// Binary arithmetic operators as they appear in infix source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    /// Exponentiation (`^`)
    Power,
    /// Division (`/`)
    Divide,
    /// Multiplication (`*`)
    Multiply,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
}

impl ArithOp {
    /// Precedence rank used by the shunting-yard stage. Higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            ArithOp::Power => 3,
            ArithOp::Divide | ArithOp::Multiply => 2,
            ArithOp::Add | ArithOp::Subtract => 1,
        }
    }

    /// The operator's source glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            ArithOp::Power => "^",
            ArithOp::Divide => "/",
            ArithOp::Multiply => "*",
            ArithOp::Add => "+",
            ArithOp::Subtract => "-",
        }
    }
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Named functions. Every call site must be followed by a parenthesized
/// argument list; arity is fixed by the name, never inferred from commas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    /// Sine of one operand (`sin(x)`)
    Sin,
    /// Maximum of two operands (`max(a, b)`)
    Max,
    /// The constant pi; a nullary function producing a value (`pi`)
    Pi,
}

impl Function {
    /// Number of operands the function consumes during graph reduction.
    pub fn arity(self) -> usize {
        match self {
            Function::Pi => 0,
            Function::Sin => 1,
            Function::Max => 2,
        }
    }

    /// The function's lowercase source name.
    pub fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Max => "max",
            Function::Pi => "pi",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Binary operations at the evaluation-graph level.
///
/// This is a superset of [`ArithOp`]: `max` is a function in source text
/// but reduces to an ordinary binary node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Power,
    Divide,
    Multiply,
    Add,
    Subtract,
    Max,
}

impl From<ArithOp> for BinaryOp {
    fn from(op: ArithOp) -> Self {
        match op {
            ArithOp::Power => BinaryOp::Power,
            ArithOp::Divide => BinaryOp::Divide,
            ArithOp::Multiply => BinaryOp::Multiply,
            ArithOp::Add => BinaryOp::Add,
            ArithOp::Subtract => BinaryOp::Subtract,
        }
    }
}

/// Unary operations at the evaluation-graph level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Sin,
}
