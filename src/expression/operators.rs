//! Operator overloads for composing expressions
//!
//! `&`, `|` and `^` build AND / OR / XOR nodes through the smart
//! constructors. `!` rewrites by De Morgan's laws down to the literals,
//! since the tree has no NOT node; a negated XOR folds a constant 1 into
//! the operand list instead.

use std::ops::{BitAnd, BitOr, BitXor, Not};

use super::Expr;

impl BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Expr) -> Expr {
        Expr::and(vec![self, rhs])
    }
}

impl BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Expr) -> Expr {
        Expr::or(vec![self, rhs])
    }
}

impl BitXor for Expr {
    type Output = Expr;

    fn bitxor(self, rhs: Expr) -> Expr {
        Expr::xor(vec![self, rhs])
    }
}

impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        match self {
            Expr::Zero => Expr::One,
            Expr::One => Expr::Zero,
            Expr::Lit(lit) => Expr::Lit(!lit),
            Expr::And(ops) => Expr::or(ops.into_iter().map(|op| !op).collect()),
            Expr::Or(ops) => Expr::and(ops.into_iter().map(|op| !op).collect()),
            Expr::Xor(mut ops) => {
                ops.insert(0, Expr::One);
                Expr::xor(ops)
            }
        }
    }
}
