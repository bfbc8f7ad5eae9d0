//! Prime-cover conversions from truth tables
//!
//! Both conversions run a recursive Shannon expansion over the variables
//! in index order.
//!
//! [`TvFunc::bcf`] builds Blake's canonical form: the function split into
//! the two cofactors and their consensus; cubes of the consensus are prime
//! as they stand, cubes of a cofactor gain the splitting literal only when
//! they reach outside the consensus. The result is the complete sum of
//! prime implicants.
//!
//! [`TvFunc::mwc`] (merge with containment) keeps the same skeleton but
//! merges the two cofactor covers directly, lifting a cube without the
//! splitting literal when the other side contains it. Faster, smaller,
//! usually not prime.

use std::cmp::Ordering;

use super::TvFunc;
use crate::base;
use crate::cover::Cover;
use crate::cube::Cube;
use crate::expression::Expr;
use crate::literal::Literal;

impl TvFunc {
    /// Blake's canonical form: the cover of all prime implicants
    pub fn bcf(&self) -> Cover {
        let cubes = bcf_sub(self, 0);
        match Cover::from_cubes(self.input_num(), &cubes) {
            Ok(cover) => cover,
            Err(err) => panic!("{}", err),
        }
    }

    /// Blake's canonical form as an expression
    pub fn bcf_expr(&self) -> Expr {
        self.bcf().expr()
    }

    /// Merge-with-containment cover
    ///
    /// Covers the same function as [`TvFunc::bcf`] with fewer cubes, not
    /// all of them prime.
    pub fn mwc(&self) -> Cover {
        let cubes = mwc_sub(self, 0);
        match Cover::from_cubes(self.input_num(), &cubes) {
            Ok(cover) => cover,
            Err(err) => panic!("{}", err),
        }
    }

    /// Merge-with-containment cover as an expression
    pub fn mwc_expr(&self) -> Expr {
        self.mwc().expr()
    }
}

/// `true` when the cube reaches into the region where `r` is 1.
fn check_cube(cube: &Cube, r: &TvFunc) -> bool {
    !(&cube.tvfunc() & r).is_zero()
}

fn bcf_sub(f: &TvFunc, var: usize) -> Vec<Cube> {
    let ni = f.input_num();

    if f.is_zero() {
        return Vec::new();
    }
    if f.is_one() {
        return vec![Cube::new(ni)];
    }

    // split on var: the consensus part, then the two proper cofactors
    debug_assert!(var < ni);
    let f0 = match f.cofactor(var, true) {
        Ok(c) => c,
        Err(err) => panic!("{}", err),
    };
    let f1 = match f.cofactor(var, false) {
        Ok(c) => c,
        Err(err) => panic!("{}", err),
    };
    let fc = &f0 & &f1;

    let mut cc = bcf_sub(&fc, var + 1);
    let c0 = bcf_sub(&f0, var + 1);
    let c1 = bcf_sub(&f1, var + 1);

    // cubes leaving the consensus need the splitting literal
    let r = !&fc;
    let lit0 = Literal::negative(var);
    for cube in c0 {
        if check_cube(&cube, &r) {
            cc.push(&cube * lit0);
        }
    }
    let lit1 = Literal::positive(var);
    for cube in c1 {
        if check_cube(&cube, &r) {
            cc.push(&cube * lit1);
        }
    }
    cc
}

/// `true` when some cube of `cover` contains `cube` as a function.
fn check_containment(cube: &Cube, cover: &[Cube]) -> bool {
    cover.iter().any(|other| {
        base::cube_check_containment(cube.chunk(), other.chunk())
    })
}

fn mwc_sub(f: &TvFunc, var: usize) -> Vec<Cube> {
    let ni = f.input_num();

    if f.is_zero() {
        return Vec::new();
    }
    if f.is_one() {
        return vec![Cube::new(ni)];
    }

    debug_assert!(var < ni);
    let f0 = match f.cofactor(var, true) {
        Ok(c) => c,
        Err(err) => panic!("{}", err),
    };
    let f1 = match f.cofactor(var, false) {
        Ok(c) => c,
        Err(err) => panic!("{}", err),
    };

    let cov0 = mwc_sub(&f0, var + 1);
    let cov1 = mwc_sub(&f1, var + 1);

    // merge the two descending covers; cubes present on both sides (or
    // contained in the other side) lift without the splitting literal
    let lit0 = Literal::negative(var);
    let lit1 = Literal::positive(var);
    let mut ans: Vec<Cube> = Vec::with_capacity(cov0.len() + cov1.len());
    let mut i0 = 0;
    let mut i1 = 0;
    while i0 < cov0.len() && i1 < cov1.len() {
        let cube0 = &cov0[i0];
        let cube1 = &cov1[i1];
        match base::cube_compare(cube0.chunk(), cube1.chunk()) {
            Ordering::Greater => {
                if check_containment(cube0, &cov1) {
                    ans.push(cube0.clone());
                } else {
                    ans.push(cube0 * lit0);
                }
                i0 += 1;
            }
            Ordering::Less => {
                if check_containment(cube1, &cov0) {
                    ans.push(cube1.clone());
                } else {
                    ans.push(cube1 * lit1);
                }
                i1 += 1;
            }
            Ordering::Equal => {
                ans.push(cube0.clone());
                i0 += 1;
                i1 += 1;
            }
        }
    }
    while i0 < cov0.len() {
        let cube0 = &cov0[i0];
        if check_containment(cube0, &cov1) {
            ans.push(cube0.clone());
        } else {
            ans.push(cube0 * lit0);
        }
        i0 += 1;
    }
    while i1 < cov1.len() {
        let cube1 = &cov1[i1];
        if check_containment(cube1, &cov0) {
            ans.push(cube1.clone());
        } else {
            ans.push(cube1 * lit1);
        }
        i1 += 1;
    }
    ans.sort_by(|a, b| base::cube_compare(b.chunk(), a.chunk()));
    ans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xor3() -> TvFunc {
        let x0 = TvFunc::posi_literal(3, 0).unwrap();
        let x1 = TvFunc::posi_literal(3, 1).unwrap();
        let x2 = TvFunc::posi_literal(3, 2).unwrap();
        &(&x0 ^ &x1) ^ &x2
    }

    #[test]
    fn bcf_of_constants() {
        assert_eq!(TvFunc::zero(3).bcf().cube_num(), 0);
        let one = TvFunc::one(3).bcf();
        assert_eq!(one.cube_num(), 1);
        assert!(one.get_cube(0).unwrap().is_tautology());
    }

    #[test]
    fn bcf_covers_the_function() {
        let f = xor3();
        let cover = f.bcf();
        assert_eq!(cover.tvfunc(), f);
        // xor of three variables has eight minterm implicants
        assert_eq!(cover.cube_num(), 4);
    }

    #[test]
    fn bcf_finds_the_consensus_prime() {
        // f = x0 x1 + ~x0 x2 has consensus x1 x2
        let x0 = TvFunc::posi_literal(3, 0).unwrap();
        let x1 = TvFunc::posi_literal(3, 1).unwrap();
        let x2 = TvFunc::posi_literal(3, 2).unwrap();
        let f = &(&x0 & &x1) | &(&!&x0 & &x2);
        let cover = f.bcf();
        assert_eq!(cover.tvfunc(), f);
        let rendered = cover.to_string();
        assert!(rendered.contains("v1 v2"), "missing consensus in {}", rendered);
        assert_eq!(cover.cube_num(), 3);
    }

    #[test]
    fn bcf_cubes_are_prime() {
        let f = xor3();
        for cube in f.bcf().cubes() {
            // dropping any literal must leave the function
            for lit in cube.literal_list() {
                let widened = &cube / lit;
                let covered = (&widened.tvfunc() & &!&f).is_zero();
                assert!(!covered, "cube {} is not prime", cube);
            }
        }
    }

    #[test]
    fn mwc_covers_the_function() {
        let f = xor3();
        let cover = f.mwc();
        assert_eq!(cover.tvfunc(), f);

        let x0 = TvFunc::posi_literal(3, 0).unwrap();
        let x1 = TvFunc::posi_literal(3, 1).unwrap();
        let g = &x0 | &x1;
        assert_eq!(g.mwc().tvfunc(), g);
        assert_eq!(g.mwc().cube_num(), 2);
    }

    #[test]
    fn mwc_is_no_larger_than_bcf() {
        let funcs = [
            xor3(),
            TvFunc::cover(
                4,
                &[
                    vec![Literal::positive(0), Literal::positive(1)],
                    vec![Literal::negative(0), Literal::positive(2)],
                    vec![Literal::positive(3)],
                ],
            )
            .unwrap(),
        ];
        for f in funcs {
            assert!(f.mwc().cube_num() <= f.bcf().cube_num());
            assert_eq!(f.mwc().tvfunc(), f);
            assert_eq!(f.bcf().tvfunc(), f);
        }
    }
}
