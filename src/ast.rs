/// A node of the tree built from one line of input.
///
/// `Node` is a closed set of variants. Every non-leaf node owns its
/// children, so a tree is acyclic and is dropped from the root down. A tree
/// produced by the parser always has `Literal` or `Identifier` nodes at its
/// leaves.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A numeric literal.
    Literal {
        /// The converted value of the literal.
        value: f64,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name:   String,
        /// Column of the identifier in the source line.
        column: usize,
    },
    /// A binary operation between two subtrees.
    BinaryOp {
        /// The operator.
        op:     BinaryOperator,
        /// Left operand, evaluated first.
        left:   Box<Self>,
        /// Right operand, evaluated second.
        right:  Box<Self>,
        /// Column of the operator in the source line.
        column: usize,
    },
    /// Binds the value of an expression to a name.
    Assignment {
        /// The name being assigned.
        name:  String,
        /// The value which is being assigned.
        value: Box<Self>,
    },
}

impl Node {
    /// Builds a literal node.
    #[must_use]
    pub const fn literal(value: f64) -> Self {
        Self::Literal { value }
    }

    /// Builds an identifier node.
    #[must_use]
    pub fn identifier(name: impl Into<String>, column: usize) -> Self {
        Self::Identifier { name: name.into(),
                           column }
    }

    /// Builds a binary operation, boxing both operands.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self, column: usize) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right),
                         column }
    }

    /// Builds an assignment node.
    #[must_use]
    pub fn assignment(name: impl Into<String>, value: Self) -> Self {
        Self::Assignment { name:  name.into(),
                           value: Box::new(value), }
    }
}

/// Renders the tree fully parenthesized, e.g. `((8 - 4) - 2)`.
impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value } => write!(f, "{value}"),
            Self::Identifier { name, .. } => write!(f, "{name}"),
            Self::BinaryOp { op, left, right, .. } => write!(f, "({left} {op} {right})"),
            Self::Assignment { name, value } => write!(f, "{name} = {value}"),
        }
    }
}

/// Arithmetic operators that combine two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
