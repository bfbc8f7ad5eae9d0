//! Rendering of expressions
//!
//! Operator nodes print fully parenthesised with spaces around the
//! operator: `( ( 0 & 1 ) | ~2 )`. Literal leaves print as the bare
//! variable id, prefixed with `~` for the negative polarity.

use std::fmt;

use super::Expr;

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Zero => f.write_str("0"),
            Expr::One => f.write_str("1"),
            Expr::Lit(lit) => {
                if lit.is_negative() {
                    write!(f, "~{}", lit.varid())
                } else {
                    write!(f, "{}", lit.varid())
                }
            }
            Expr::And(ops) => write_node(f, ops, "&"),
            Expr::Or(ops) => write_node(f, ops, "|"),
            Expr::Xor(ops) => write_node(f, ops, "^"),
        }
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, ops: &[Expr], op: &str) -> fmt::Result {
    f.write_str("( ")?;
    let mut first = true;
    for operand in ops {
        if !first {
            write!(f, " {} ", op)?;
        }
        first = false;
        write!(f, "{}", operand)?;
    }
    f.write_str(" )")
}
