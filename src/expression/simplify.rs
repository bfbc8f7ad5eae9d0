//! Boolean simplification of expression trees
//!
//! Applies the identities the algebraic factoring drivers are blind to:
//! constant folding, idempotence (`x & x = x`), complements
//! (`x & ~x = 0`, `x | ~x = 1`), absorption (`x | x & y = x`,
//! `x & (x | y) = x`) and XOR cancellation (`x ^ x = 0`). This is the
//! final pass of `bool_factor`.

use super::Expr;

impl Expr {
    /// Rewrite the expression with Boolean identities
    ///
    /// The result denotes the same function with the same or fewer
    /// literals.
    ///
    /// # Examples
    ///
    /// ```
    /// use sop_algebra::{Expr, Literal};
    ///
    /// let a = Expr::from(Literal::positive(0));
    /// let b = Expr::from(Literal::positive(1));
    ///
    /// // a | a & b absorbs to a
    /// let expr = a.clone() | (a.clone() & b);
    /// assert_eq!(expr.simplify(), a);
    /// ```
    pub fn simplify(&self) -> Expr {
        match self {
            Expr::Zero | Expr::One | Expr::Lit(_) => self.clone(),
            Expr::And(ops) => simplify_and(ops.iter().map(Expr::simplify).collect()),
            Expr::Or(ops) => simplify_or(ops.iter().map(Expr::simplify).collect()),
            Expr::Xor(ops) => Expr::xor(cancel_pairs(ops.iter().map(Expr::simplify).collect())),
        }
    }
}

fn simplify_and(operands: Vec<Expr>) -> Expr {
    // flatten and fold constants through the smart constructor first
    let flattened = match Expr::and(operands) {
        Expr::And(ops) => ops,
        other => return other,
    };
    let mut kept: Vec<Expr> = Vec::with_capacity(flattened.len());
    for op in flattened {
        if kept.contains(&op) {
            continue;
        }
        // x & ~x = 0
        if let Expr::Lit(lit) = op {
            if kept.contains(&Expr::Lit(!lit)) {
                return Expr::Zero;
            }
        }
        kept.push(op);
    }
    // x & (x | y) = x: an OR operand containing another operand is redundant
    let absorbed: Vec<Expr> = kept
        .iter()
        .filter(|op| match op {
            Expr::Or(alts) => !alts.iter().any(|alt| kept.contains(alt)),
            _ => true,
        })
        .cloned()
        .collect();
    Expr::and(absorbed)
}

fn simplify_or(operands: Vec<Expr>) -> Expr {
    let flattened = match Expr::or(operands) {
        Expr::Or(ops) => ops,
        other => return other,
    };
    let mut kept: Vec<Expr> = Vec::with_capacity(flattened.len());
    for op in flattened {
        if kept.contains(&op) {
            continue;
        }
        // x | ~x = 1
        if let Expr::Lit(lit) = op {
            if kept.contains(&Expr::Lit(!lit)) {
                return Expr::One;
            }
        }
        kept.push(op);
    }
    // x | x & y = x: drop operands whose factor set includes another
    // operand's factor set; equal sets keep the earlier operand
    let mut absorbed: Vec<Expr> = Vec::with_capacity(kept.len());
    for (i, op) in kept.iter().enumerate() {
        let fi = factors(op);
        let dominated = kept.iter().enumerate().any(|(j, other)| {
            if i == j {
                return false;
            }
            let fj = factors(other);
            let subset = fj.iter().all(|f| fi.contains(f));
            subset && (fj.len() < fi.len() || j < i)
        });
        if !dominated {
            absorbed.push(op.clone());
        }
    }
    Expr::or(absorbed)
}

/// The conjunctive factors of an operand: its AND operands, or itself.
fn factors(expr: &Expr) -> Vec<Expr> {
    match expr {
        Expr::And(ops) => ops.clone(),
        other => vec![other.clone()],
    }
}

/// Remove pairs of equal XOR operands.
fn cancel_pairs(operands: Vec<Expr>) -> Vec<Expr> {
    let mut kept: Vec<Expr> = Vec::with_capacity(operands.len());
    for op in operands {
        if let Some(pos) = kept.iter().position(|k| *k == op) {
            kept.remove(pos);
        } else {
            kept.push(op);
        }
    }
    kept
}
