//! Boolean expression trees
//!
//! [`Expr`] is the output type of the factoring drivers: constants,
//! literal leaves and n-ary AND / OR / XOR nodes. There is no NOT node;
//! negation lives on the literals, and negating a compound expression
//! rewrites it by De Morgan's laws.
//!
//! The smart constructors keep trees flat (no AND directly under AND) and
//! fold the obvious constant cases; the heavier Boolean identities
//! (idempotence, complement, absorption) are applied only by
//! [`Expr::simplify`], which is what `bool_factor` runs as its final pass.

mod display;
mod operators;
mod parser;
mod simplify;


use crate::error::RangeError;
use crate::literal::Literal;
use crate::tvfunc::TvFunc;

/// A boolean expression: constants, literals, and n-ary operator nodes
///
/// # Examples
///
/// ```
/// use sop_algebra::{Expr, Literal};
///
/// let a = Expr::from(Literal::positive(0));
/// let b = Expr::from(Literal::positive(1));
/// let nc = Expr::from(Literal::negative(2));
///
/// let expr = (a & b) | nc;
/// assert_eq!(expr.to_string(), "( ( 0 & 1 ) | ~2 )");
/// assert_eq!(expr.literal_num(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// The constant 0
    Zero,
    /// The constant 1
    One,
    /// A literal leaf
    Lit(Literal),
    /// Conjunction of the operands
    And(Vec<Expr>),
    /// Disjunction of the operands
    Or(Vec<Expr>),
    /// Exclusive or of the operands
    Xor(Vec<Expr>),
}

impl Expr {
    /// The constant 0
    pub fn zero() -> Self {
        Expr::Zero
    }

    /// The constant 1
    pub fn one() -> Self {
        Expr::One
    }

    /// A literal leaf
    pub fn literal(lit: Literal) -> Self {
        Expr::Lit(lit)
    }

    /// The positive literal of `varid`
    pub fn positive(varid: usize) -> Self {
        Expr::Lit(Literal::positive(varid))
    }

    /// The negative literal of `varid`
    pub fn negative(varid: usize) -> Self {
        Expr::Lit(Literal::negative(varid))
    }

    /// Conjunction of `operands`
    ///
    /// Flattens nested ANDs, drops constant 1 operands and collapses to 0
    /// when any operand is 0. An empty conjunction is the constant 1.
    pub fn and(operands: Vec<Expr>) -> Self {
        let mut flat = Vec::with_capacity(operands.len());
        for op in operands {
            match op {
                Expr::Zero => return Expr::Zero,
                Expr::One => {}
                Expr::And(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        match flat.len() {
            0 => Expr::One,
            1 => flat.pop().unwrap_or(Expr::One),
            _ => Expr::And(flat),
        }
    }

    /// Disjunction of `operands`
    ///
    /// Flattens nested ORs, drops constant 0 operands and collapses to 1
    /// when any operand is 1. An empty disjunction is the constant 0.
    pub fn or(operands: Vec<Expr>) -> Self {
        let mut flat = Vec::with_capacity(operands.len());
        for op in operands {
            match op {
                Expr::One => return Expr::One,
                Expr::Zero => {}
                Expr::Or(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        match flat.len() {
            0 => Expr::Zero,
            1 => flat.pop().unwrap_or(Expr::Zero),
            _ => Expr::Or(flat),
        }
    }

    /// Exclusive or of `operands`
    ///
    /// Flattens nested XORs and folds constants: 0 operands vanish, pairs
    /// of 1 operands cancel. An empty exclusive or is the constant 0.
    pub fn xor(operands: Vec<Expr>) -> Self {
        let mut flat = Vec::with_capacity(operands.len());
        let mut ones = 0usize;
        for op in operands {
            match op {
                Expr::Zero => {}
                Expr::One => ones += 1,
                Expr::Xor(inner) => {
                    for e in inner {
                        match e {
                            Expr::Zero => {}
                            Expr::One => ones += 1,
                            other => flat.push(other),
                        }
                    }
                }
                other => flat.push(other),
            }
        }
        if ones % 2 == 1 {
            flat.insert(0, Expr::One);
        }
        match flat.len() {
            0 => Expr::Zero,
            1 => flat.pop().unwrap_or(Expr::Zero),
            _ => Expr::Xor(flat),
        }
    }

    /// `true` for the constant 0
    pub fn is_zero(&self) -> bool {
        matches!(self, Expr::Zero)
    }

    /// `true` for the constant 1
    pub fn is_one(&self) -> bool {
        matches!(self, Expr::One)
    }

    /// `true` for either constant
    pub fn is_constant(&self) -> bool {
        matches!(self, Expr::Zero | Expr::One)
    }

    /// `true` for a literal leaf
    pub fn is_literal(&self) -> bool {
        matches!(self, Expr::Lit(_))
    }

    /// `true` for an AND node
    pub fn is_and(&self) -> bool {
        matches!(self, Expr::And(_))
    }

    /// `true` for an OR node
    pub fn is_or(&self) -> bool {
        matches!(self, Expr::Or(_))
    }

    /// `true` for an XOR node
    pub fn is_xor(&self) -> bool {
        matches!(self, Expr::Xor(_))
    }

    /// The variable id of a literal leaf
    pub fn varid(&self) -> Option<usize> {
        match self {
            Expr::Lit(lit) => Some(lit.varid()),
            _ => None,
        }
    }

    /// The literal of a literal leaf
    pub fn literal_of(&self) -> Option<Literal> {
        match self {
            Expr::Lit(lit) => Some(*lit),
            _ => None,
        }
    }

    /// The operands of an operator node; empty for leaves
    pub fn operand_list(&self) -> &[Expr] {
        match self {
            Expr::And(ops) | Expr::Or(ops) | Expr::Xor(ops) => ops,
            _ => &[],
        }
    }

    /// Number of literal leaves in the tree
    pub fn literal_num(&self) -> usize {
        match self {
            Expr::Zero | Expr::One => 0,
            Expr::Lit(_) => 1,
            Expr::And(ops) | Expr::Or(ops) | Expr::Xor(ops) => {
                ops.iter().map(Expr::literal_num).sum()
            }
        }
    }

    /// Evaluate the expression into a truth table over `input_num` inputs
    ///
    /// Fails when a literal refers to a variable at or beyond `input_num`.
    pub fn tvfunc(&self, input_num: usize) -> Result<TvFunc, RangeError> {
        match self {
            Expr::Zero => Ok(TvFunc::zero(input_num)),
            Expr::One => Ok(TvFunc::one(input_num)),
            Expr::Lit(lit) => {
                if lit.is_positive() {
                    TvFunc::posi_literal(input_num, lit.varid())
                } else {
                    TvFunc::nega_literal(input_num, lit.varid())
                }
            }
            Expr::And(ops) => {
                let mut f = TvFunc::one(input_num);
                for op in ops {
                    f &= &op.tvfunc(input_num)?;
                }
                Ok(f)
            }
            Expr::Or(ops) => {
                let mut f = TvFunc::zero(input_num);
                for op in ops {
                    f |= &op.tvfunc(input_num)?;
                }
                Ok(f)
            }
            Expr::Xor(ops) => {
                let mut f = TvFunc::zero(input_num);
                for op in ops {
                    f ^= &op.tvfunc(input_num)?;
                }
                Ok(f)
            }
        }
    }
}

impl From<Literal> for Expr {
    fn from(lit: Literal) -> Self {
        Expr::Lit(lit)
    }
}
