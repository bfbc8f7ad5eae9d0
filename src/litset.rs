//! Literal sets for kernel enumeration
//!
//! A [`LitSet`] reuses the packed cube layout but reads it as a plain *set
//! of literals*: unlike a cube, both polarities of one variable may be
//! present at the same time. Kernel enumeration uses it to remember which
//! literals have already been divided out along the current recursion path.

use std::ops::AddAssign;

use crate::base;
use crate::cube::Cube;
use crate::error::ArgumentError;
use crate::literal::Literal;

/// A set of literals with both polarities allowed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LitSet {
    variable_num: usize,
    chunk: Vec<u64>,
}

impl LitSet {
    /// The empty set over `variable_num` variables
    pub fn new(variable_num: usize) -> Self {
        LitSet {
            variable_num,
            chunk: vec![0; base::cube_size(variable_num)],
        }
    }

    /// The fixed variable count
    pub fn variable_num(&self) -> usize {
        self.variable_num
    }

    /// Insert one literal
    ///
    /// Out-of-range literals are ignored in release builds.
    pub fn add(&mut self, lit: Literal) {
        debug_assert!(lit.varid() < self.variable_num);
        if lit.varid() < self.variable_num {
            base::cube_set_literal(&mut self.chunk, lit.varid(), lit.is_negative());
        }
    }

    /// `true` when the set holds `lit`
    pub fn check_literal(&self, lit: Literal) -> bool {
        if lit.varid() >= self.variable_num {
            return false;
        }
        self.chunk[base::block(lit.varid())] & base::lit_mask(lit.varid(), lit.is_negative()) != 0
    }

    /// `true` when the set and the cube share a literal
    pub fn check_intersect(&self, cube: &Cube) -> Result<bool, ArgumentError> {
        if self.variable_num != cube.variable_num() {
            return Err(ArgumentError::VariableNumMismatch {
                left: self.variable_num,
                right: cube.variable_num(),
            });
        }
        Ok(base::cube_check_intersect(&self.chunk, cube.chunk()))
    }

    /// Union with another set
    pub fn union_with(&mut self, other: &LitSet) -> Result<(), ArgumentError> {
        if self.variable_num != other.variable_num {
            return Err(ArgumentError::VariableNumMismatch {
                left: self.variable_num,
                right: other.variable_num,
            });
        }
        for (dst, src) in self.chunk.iter_mut().zip(other.chunk.iter()) {
            *dst |= src;
        }
        Ok(())
    }
}

impl AddAssign<Literal> for LitSet {
    fn add_assign(&mut self, lit: Literal) {
        self.add(lit);
    }
}

impl AddAssign<&LitSet> for LitSet {
    /// # Panics
    ///
    /// Panics when the variable counts differ; use [`LitSet::union_with`]
    /// for a checked version.
    fn add_assign(&mut self, other: &LitSet) {
        match self.union_with(other) {
            Ok(()) => {}
            Err(err) => panic!("{}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_polarities_coexist() {
        let mut set = LitSet::new(6);
        let a = Literal::positive(2);
        set += a;
        set += !a;
        assert!(set.check_literal(a));
        assert!(set.check_literal(!a));
    }

    #[test]
    fn union_accumulates() {
        let mut s1 = LitSet::new(6);
        s1 += Literal::positive(0);
        let mut s2 = LitSet::new(6);
        s2 += Literal::negative(5);
        s1 += &s2;
        assert!(s1.check_literal(Literal::positive(0)));
        assert!(s1.check_literal(Literal::negative(5)));
        assert!(!s1.check_literal(Literal::positive(5)));
    }

    #[test]
    fn intersect_with_cube_matches_polarity() {
        let mut set = LitSet::new(6);
        set += Literal::positive(1);
        let pos = Cube::from_literal(6, Literal::positive(1)).unwrap();
        let neg = Cube::from_literal(6, Literal::negative(1)).unwrap();
        assert!(set.check_intersect(&pos).unwrap());
        assert!(!set.check_intersect(&neg).unwrap());
        assert!(set.check_intersect(&Cube::new(5)).is_err());
    }
}
