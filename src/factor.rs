//! Algebraic factoring drivers
//!
//! The generic driver picks a divisor, splits the cover into
//! `quotient * divisor + remainder` by weak division, and recurses on the
//! three parts. The divisor comes from a [`DivisorStrategy`]: the quick
//! variant chases a single level-0 kernel, the good variant enumerates all
//! kernels and takes the most valuable one. `bool_factor` runs the good
//! driver and then lets the expression layer apply Boolean identities the
//! algebraic driver cannot see.

use crate::cover::Cover;
use crate::cube::Cube;
use crate::error::ArgumentError;
use crate::expression::Expr;
use crate::kernel::KernelGen;
use crate::literal::Literal;

/// Strategy for picking the divisor inside the factoring recursion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivisorStrategy {
    /// Follow one chain of literal divisions to a level-0 kernel (fast)
    OneLevelZeroKernel,
    /// Enumerate all kernels and take the best one (slower, better forms)
    BestKernel,
}

impl DivisorStrategy {
    /// Pick a divisor for `f`; the empty cover means "no divisor"
    pub fn select(&self, f: &Cover) -> Cover {
        match self {
            DivisorStrategy::OneLevelZeroKernel => one_level0_kernel(f),
            DivisorStrategy::BestKernel => KernelGen::new().best_kernel(f),
        }
    }
}

/// Weak division: split `f` into `q * d + r`
///
/// `q` is the algebraic quotient `f / d` and `r` the remainder
/// `f - q * d`; the identity `f = q * d + r` holds as covers.
pub fn weak_division(f: &Cover, d: &Cover) -> Result<(Cover, Cover), ArgumentError> {
    let q = f.algdiv(d)?;
    let r = f.diff(&q.product(d)?)?;
    Ok((q, r))
}

impl Cover {
    /// Factor with the level-0 kernel divisor
    pub fn quick_factor(&self) -> Expr {
        gen_factor(self, DivisorStrategy::OneLevelZeroKernel)
    }

    /// Factor with the best-kernel divisor
    pub fn good_factor(&self) -> Expr {
        gen_factor(self, DivisorStrategy::BestKernel)
    }

    /// Factor with the best-kernel divisor, then simplify with Boolean
    /// identities
    pub fn bool_factor(&self) -> Expr {
        gen_factor(self, DivisorStrategy::BestKernel).simplify()
    }
}

/// The generic factoring recursion
pub fn gen_factor(f: &Cover, strategy: DivisorStrategy) -> Expr {
    if f.cube_num() == 0 {
        return Expr::zero();
    }
    let d = strategy.select(f);
    if d.cube_num() == 0 {
        // nothing divides f twice; emit the sum of products as-is
        return f.expr();
    }
    let q = f / &d;
    if q.cube_num() == 0 {
        // a divisor that does not divide f cannot improve on the flat form
        return f.expr();
    }
    if q.cube_num() == 1 {
        let cube = match q.get_cube(0) {
            Ok(cube) => cube,
            Err(err) => panic!("{}", err),
        };
        return literal_factor(f, &cube, strategy);
    }
    // make the quotient cube-free before dividing again
    let mut q = q;
    let cc = q.common_cube();
    q /= &cc;

    let d = f / &q;
    let r = f - &(&d * &q);
    let cc = d.common_cube();
    if cc.literal_num() == 0 {
        // the divisor is cube-free: factor all three parts
        let q_expr = gen_factor(&q, strategy);
        let d_expr = gen_factor(&d, strategy);
        let r_expr = gen_factor(&r, strategy);
        (q_expr & d_expr) | r_expr
    } else {
        literal_factor(f, &cc, strategy)
    }
}

/// Factor out the single best literal of `cube` from `f`
fn literal_factor(f: &Cover, cube: &Cube, strategy: DivisorStrategy) -> Expr {
    let mut best: Option<(Literal, usize)> = None;
    for lit in cube.literal_list() {
        let n = f.literal_num_of(lit);
        if best.map_or(true, |(_, bn)| bn < n) {
            best = Some((lit, n));
        }
    }
    let Some((lit, _)) = best else {
        return f.expr();
    };
    let q = f / lit;
    let q_expr = gen_factor(&q, strategy);
    let r = f - &(&q * lit);
    let r_expr = gen_factor(&r, strategy);
    (Expr::from(lit) & q_expr) | r_expr
}

/// One level-0 kernel, found by a chain of literal divisions
///
/// Returns the empty cover when no literal of `f` occurs twice.
fn one_level0_kernel(f: &Cover) -> Cover {
    if f.cube_num() < 2 {
        return Cover::new(f.variable_num());
    }
    let Some(mut lit) = find_literal(f) else {
        return Cover::new(f.variable_num());
    };
    let mut f1 = f.clone();
    loop {
        f1 /= lit;
        let cc = f1.common_cube();
        f1 /= &cc;
        match find_literal(&f1) {
            Some(next) => lit = next,
            None => break,
        }
    }
    f1
}

/// The first literal occurring in at least two cubes of `f`
fn find_literal(f: &Cover) -> Option<Literal> {
    for var in 0..f.variable_num() {
        for lit in [Literal::positive(var), Literal::negative(var)] {
            if f.literal_num_of(lit) >= 2 {
                return Some(lit);
            }
        }
    }
    None
}
