//! Covers: canonical sums of cubes
//!
//! A [`Cover`] owns a chunk holding `cube_num` cubes back to back, always
//! kept in canonical form: strictly descending cube order with no
//! duplicates and no void cubes. Every public operation returns its result
//! in canonical form, so cover equality and hashing reduce to word
//! comparison of the chunk prefix.
//!
//! The empty cover is the constant 0; the cover holding only the tautology
//! cube is the constant 1.
//!
//! Binary operations come in two forms: checked methods ([`Cover::union`],
//! [`Cover::algdiv`], ...) that report mismatched variable counts as
//! [`ArgumentError`], and operator sugar (`|`, `-`, `*`, `/`) that panics
//! on the same condition. The algebra reads the way it is written in the
//! literature: `&f / lit` is the co-factor-style quotient used throughout
//! kernel extraction.

mod algdiv;
mod cofactor;
mod concat;
mod product;
mod read;
mod sort;

#[cfg(test)]
mod tests;

use std::cmp::Ordering;
use std::fmt;
use std::ops::{BitOr, BitOrAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::base;
use crate::cube::{Cube, Pat};
use crate::error::{ArgumentError, RangeError};
use crate::expression::Expr;
use crate::literal::Literal;
use crate::tvfunc::TvFunc;

/// A disjunction of cubes in canonical order
///
/// # Examples
///
/// ```
/// use sop_algebra::{Cover, Literal};
///
/// let a = Literal::positive(0);
/// let b = Literal::positive(1);
/// let c = Literal::positive(2);
/// let d = Literal::positive(3);
///
/// // F = ac + ad + bc + bd
/// let f = Cover::from_literal_lists(
///     10,
///     &[vec![a, c], vec![a, d], vec![b, c], vec![b, d]],
/// )
/// .unwrap();
/// let g = Cover::from_literal_lists(10, &[vec![a], vec![b]]).unwrap();
///
/// // algebraic division: F / (a + b) = c + d
/// let q = f.algdiv(&g).unwrap();
/// assert_eq!(q.literal_list(), vec![vec![c], vec![d]]);
/// ```
#[derive(Debug, Clone)]
pub struct Cover {
    variable_num: usize,
    cube_num: usize,
    chunk: Vec<u64>,
}

impl Cover {
    /// The empty cover (constant 0) over `variable_num` variables
    pub fn new(variable_num: usize) -> Self {
        Cover {
            variable_num,
            cube_num: 0,
            chunk: Vec::new(),
        }
    }

    /// A cover from a list of cubes
    ///
    /// Invalid cubes are dropped silently; the rest are brought into
    /// canonical order with duplicates removed.
    pub fn from_cubes(variable_num: usize, cubes: &[Cube]) -> Result<Self, ArgumentError> {
        let words = base::cube_size(variable_num);
        let mut chunk = Vec::with_capacity(cubes.len() * words);
        let mut num = 0;
        for cube in cubes {
            if cube.variable_num() != variable_num {
                return Err(ArgumentError::VariableNumMismatch {
                    left: variable_num,
                    right: cube.variable_num(),
                });
            }
            if cube.is_invalid() {
                continue;
            }
            chunk.extend_from_slice(cube.chunk());
            num += 1;
        }
        let mut cover = Cover {
            variable_num,
            cube_num: num,
            chunk,
        };
        cover.sort();
        Ok(cover)
    }

    /// A cover from lists of literals, one list per cube
    ///
    /// Contradictory lists produce void cubes, which are dropped.
    pub fn from_literal_lists(
        variable_num: usize,
        lists: &[Vec<Literal>],
    ) -> Result<Self, RangeError> {
        let mut cubes = Vec::with_capacity(lists.len());
        for list in lists {
            cubes.push(Cube::from_literals(variable_num, list)?);
        }
        // widths match by construction
        let mut cover = Cover::new(variable_num);
        for cube in &cubes {
            if cube.is_invalid() {
                continue;
            }
            cover.chunk.extend_from_slice(cube.chunk());
            cover.cube_num += 1;
        }
        cover.sort();
        Ok(cover)
    }

    /// The cover holding a single cube
    ///
    /// An invalid cube yields the empty cover.
    pub fn from_cube(cube: Cube) -> Self {
        if cube.is_invalid() {
            return Cover::new(cube.variable_num());
        }
        let variable_num = cube.variable_num();
        let chunk = cube.chunk().to_vec();
        Cover {
            variable_num,
            cube_num: 1,
            chunk,
        }
    }

    /// Internal constructor for results that are already canonical.
    pub(crate) fn from_parts(variable_num: usize, cube_num: usize, chunk: Vec<u64>) -> Self {
        let cover = Cover {
            variable_num,
            cube_num,
            chunk,
        };
        debug_assert!(cover.is_canonical());
        cover
    }

    #[cfg(debug_assertions)]
    fn is_canonical(&self) -> bool {
        (1..self.cube_num).all(|i| {
            base::cube_compare(self.cube_at(i - 1), self.cube_at(i)) == Ordering::Greater
        }) && (0..self.cube_num).all(|i| !base::cube_has_void(self.cube_at(i)))
    }

    #[cfg(not(debug_assertions))]
    fn is_canonical(&self) -> bool {
        true
    }

    /// The fixed variable count
    pub fn variable_num(&self) -> usize {
        self.variable_num
    }

    /// The number of cubes
    pub fn cube_num(&self) -> usize {
        self.cube_num
    }

    pub(crate) fn words(&self) -> usize {
        base::cube_size(self.variable_num)
    }

    pub(crate) fn cube_at(&self, i: usize) -> &[u64] {
        let w = self.words();
        &self.chunk[i * w..(i + 1) * w]
    }

    pub(crate) fn used_chunk(&self) -> &[u64] {
        &self.chunk[..self.cube_num * self.words()]
    }

    /// Total number of literals over all cubes
    pub fn literal_num(&self) -> usize {
        base::literal_num(self.used_chunk())
    }

    /// Number of cubes carrying the literal `lit`
    ///
    /// Out-of-range literals occur in no cube.
    pub fn literal_num_of(&self, lit: Literal) -> usize {
        if lit.varid() >= self.variable_num {
            return 0;
        }
        base::literal_num_lit(
            &self.chunk,
            self.cube_num,
            self.words(),
            base::block(lit.varid()),
            base::lit_mask(lit.varid(), lit.is_negative()),
        )
    }

    /// A fresh copy of the cube at index `i`
    pub fn get_cube(&self, i: usize) -> Result<Cube, RangeError> {
        if i >= self.cube_num {
            return Err(RangeError::CubeIndex {
                index: i,
                cube_num: self.cube_num,
            });
        }
        Ok(Cube::from_chunk(self.variable_num, self.cube_at(i).to_vec()))
    }

    /// The pattern of variable `var` inside cube `i`
    pub fn get_pat(&self, i: usize, var: usize) -> Result<Pat, RangeError> {
        if i >= self.cube_num {
            return Err(RangeError::CubeIndex {
                index: i,
                cube_num: self.cube_num,
            });
        }
        self.get_cube(i)?.get_pat(var)
    }

    /// Iterate over owned copies of the cubes, in canonical order
    pub fn cubes(&self) -> impl Iterator<Item = Cube> + '_ {
        (0..self.cube_num).map(move |i| Cube::from_chunk(self.variable_num, self.cube_at(i).to_vec()))
    }

    /// The literals of every cube, in canonical cube order
    pub fn literal_list(&self) -> Vec<Vec<Literal>> {
        self.cubes().map(|cube| cube.literal_list()).collect()
    }

    /// The cube of literals common to every cube of the cover
    ///
    /// Returns the tautology cube when no literal is shared by all cubes
    /// (and for the empty cover); dividing by the result is then the
    /// identity, which is what every caller wants.
    pub fn common_cube(&self) -> Cube {
        let w = self.words();
        let mut dst = vec![0u64; w];
        if self.cube_num > 0 {
            base::cube_copy(&mut dst, self.cube_at(0));
            for i in 1..self.cube_num {
                let cube = self.cube_at(i);
                for (d, &s) in dst.iter_mut().zip(cube.iter()) {
                    *d &= s;
                }
            }
        }
        Cube::from_chunk(self.variable_num, dst)
    }

    /// Stream comparison of two canonical covers
    ///
    /// The first differing cube decides; at a common prefix the shorter
    /// cover is the smaller one.
    pub fn compare(&self, other: &Cover) -> Result<Ordering, ArgumentError> {
        self.check_width(other)?;
        let n = self.cube_num.min(other.cube_num);
        for i in 0..n {
            let ord = base::cube_compare(self.cube_at(i), other.cube_at(i));
            if ord != Ordering::Equal {
                return Ok(ord);
            }
        }
        Ok(self.cube_num.cmp(&other.cube_num))
    }

    /// Deterministic hash of `(variable_num, cube_num, chunk prefix)`
    pub fn hash(&self) -> u64 {
        let mut h = base::hash(self.used_chunk());
        h ^= (self.variable_num as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15);
        h ^= (self.cube_num as u64).rotate_left(32);
        h
    }

    /// The cover as an expression (OR of its cube expressions)
    pub fn expr(&self) -> Expr {
        Expr::or(self.cubes().map(|cube| cube.expr()).collect())
    }

    /// The cover as a truth table
    pub fn tvfunc(&self) -> TvFunc {
        let mut f = TvFunc::zero(self.variable_num);
        for cube in self.cubes() {
            f |= &cube.tvfunc();
        }
        f
    }

    /// Write the cover using the given variable names
    ///
    /// Cubes are separated by `" + "`; variables without a name print as
    /// `v<i>`.
    pub fn print_with_names(&self, f: &mut dyn fmt::Write, names: &[&str]) -> fmt::Result {
        let mut sep = "";
        for cube in self.cubes() {
            f.write_str(sep)?;
            cube.print_with_names(f, names)?;
            sep = " + ";
        }
        Ok(())
    }

    pub(crate) fn check_width(&self, other: &Cover) -> Result<(), ArgumentError> {
        if self.variable_num != other.variable_num {
            return Err(ArgumentError::VariableNumMismatch {
                left: self.variable_num,
                right: other.variable_num,
            });
        }
        Ok(())
    }

    pub(crate) fn check_cube_width(&self, cube: &Cube) -> Result<(), ArgumentError> {
        if self.variable_num != cube.variable_num() {
            return Err(ArgumentError::VariableNumMismatch {
                left: self.variable_num,
                right: cube.variable_num(),
            });
        }
        Ok(())
    }

    pub(crate) fn check_lit(&self, lit: Literal) -> Result<(usize, u64), RangeError> {
        if lit.varid() >= self.variable_num {
            return Err(RangeError::Literal {
                varid: lit.varid(),
                variable_num: self.variable_num,
            });
        }
        Ok((
            base::block(lit.varid()),
            base::lit_mask(lit.varid(), lit.is_negative()),
        ))
    }
}

impl PartialEq for Cover {
    fn eq(&self, other: &Cover) -> bool {
        self.variable_num == other.variable_num
            && self.cube_num == other.cube_num
            && self.used_chunk() == other.used_chunk()
    }
}

impl Eq for Cover {}

impl PartialOrd for Cover {
    /// `None` when the variable counts differ
    fn partial_cmp(&self, other: &Cover) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl fmt::Display for Cover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print_with_names(f, &[])
    }
}

fn unwrap_arg<T>(result: Result<T, ArgumentError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}

fn unwrap_range<T>(result: Result<T, RangeError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}

impl BitOr<&Cover> for &Cover {
    type Output = Cover;

    /// # Panics
    ///
    /// Panics when the variable counts differ; use [`Cover::union`] for a
    /// checked version.
    fn bitor(self, rhs: &Cover) -> Cover {
        unwrap_arg(self.union(rhs))
    }
}

impl BitOrAssign<&Cover> for Cover {
    fn bitor_assign(&mut self, rhs: &Cover) {
        *self = &*self | rhs;
    }
}

impl Sub<&Cover> for &Cover {
    type Output = Cover;

    /// # Panics
    ///
    /// Panics when the variable counts differ; use [`Cover::diff`] for a
    /// checked version.
    fn sub(self, rhs: &Cover) -> Cover {
        unwrap_arg(self.diff(rhs))
    }
}

impl SubAssign<&Cover> for Cover {
    fn sub_assign(&mut self, rhs: &Cover) {
        *self = &*self - rhs;
    }
}

impl Mul<&Cover> for &Cover {
    type Output = Cover;

    /// # Panics
    ///
    /// Panics when the variable counts differ; use [`Cover::product`] for a
    /// checked version.
    fn mul(self, rhs: &Cover) -> Cover {
        unwrap_arg(self.product(rhs))
    }
}

impl Mul<&Cube> for &Cover {
    type Output = Cover;

    fn mul(self, rhs: &Cube) -> Cover {
        unwrap_arg(self.product_cube(rhs))
    }
}

impl Mul<Literal> for &Cover {
    type Output = Cover;

    fn mul(self, rhs: Literal) -> Cover {
        unwrap_range(self.product_literal(rhs))
    }
}

impl MulAssign<&Cover> for Cover {
    fn mul_assign(&mut self, rhs: &Cover) {
        *self = &*self * rhs;
    }
}

impl MulAssign<Literal> for Cover {
    fn mul_assign(&mut self, rhs: Literal) {
        *self = &*self * rhs;
    }
}

impl Div<&Cover> for &Cover {
    type Output = Cover;

    /// # Panics
    ///
    /// Panics when the variable counts differ; use [`Cover::algdiv`] for a
    /// checked version.
    fn div(self, rhs: &Cover) -> Cover {
        unwrap_arg(self.algdiv(rhs))
    }
}

impl Div<&Cube> for &Cover {
    type Output = Cover;

    fn div(self, rhs: &Cube) -> Cover {
        unwrap_arg(self.algdiv_cube(rhs))
    }
}

impl Div<Literal> for &Cover {
    type Output = Cover;

    fn div(self, rhs: Literal) -> Cover {
        unwrap_range(self.algdiv_literal(rhs))
    }
}

impl DivAssign<&Cover> for Cover {
    fn div_assign(&mut self, rhs: &Cover) {
        *self = &*self / rhs;
    }
}

impl DivAssign<&Cube> for Cover {
    fn div_assign(&mut self, rhs: &Cube) {
        *self = &*self / rhs;
    }
}

impl DivAssign<Literal> for Cover {
    fn div_assign(&mut self, rhs: Literal) {
        *self = &*self / rhs;
    }
}
