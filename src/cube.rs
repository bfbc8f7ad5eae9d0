//! Cubes: conjunctions of literals over a fixed variable count
//!
//! A [`Cube`] owns one packed chunk (see the `base` module for the bit
//! layout). The cube with no literals is the *tautology cube* (constant 1).
//! A product that puts both polarities on one variable yields the *invalid
//! cube*, an ordinary value that propagates through further products and
//! quotients and compares unequal to every valid cube.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Div, DivAssign, Mul, MulAssign};

use crate::base;
use crate::error::{ArgumentError, RangeError};
use crate::expression::Expr;
use crate::literal::Literal;
use crate::tvfunc::TvFunc;

/// The pattern a variable shows inside a cube
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pat {
    /// The variable does not appear
    X,
    /// The variable appears as a positive literal
    One,
    /// The variable appears as a negative literal
    Zero,
}

/// A conjunction of literals, packed two bits per variable
///
/// # Examples
///
/// ```
/// use sop_algebra::{Cube, Literal};
///
/// let a = Literal::positive(0);
/// let b = Literal::positive(1);
/// let cube = Cube::from_literals(4, &[a, b]).unwrap();
/// assert_eq!(cube.literal_num(), 2);
/// assert!(cube.check_literal(a));
/// assert_eq!(cube.to_string(), "v0 v1");
///
/// // contradictory literals make the invalid cube
/// let void = Cube::from_literals(4, &[a, !a]).unwrap();
/// assert!(void.is_invalid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube {
    variable_num: usize,
    chunk: Vec<u64>,
}

impl Cube {
    /// The tautology cube (no literals) over `variable_num` variables
    pub fn new(variable_num: usize) -> Self {
        Cube {
            variable_num,
            chunk: vec![0; base::cube_size(variable_num)],
        }
    }

    /// A cube holding the single literal `lit`
    pub fn from_literal(variable_num: usize, lit: Literal) -> Result<Self, RangeError> {
        Self::from_literals(variable_num, &[lit])
    }

    /// A cube holding all of `lits`
    ///
    /// Duplicate literals are discarded. Two literals of opposite polarity
    /// on the same variable make the result the invalid cube.
    pub fn from_literals(variable_num: usize, lits: &[Literal]) -> Result<Self, RangeError> {
        let mut cube = Cube::new(variable_num);
        for &lit in lits {
            if lit.varid() >= variable_num {
                return Err(RangeError::Literal {
                    varid: lit.varid(),
                    variable_num,
                });
            }
            if cube.check_literal(!lit) {
                return Ok(Cube::invalid(variable_num));
            }
            base::cube_set_literal(&mut cube.chunk, lit.varid(), lit.is_negative());
        }
        Ok(cube)
    }

    /// The invalid cube sentinel
    ///
    /// Every variable lane carries the void pattern, so the sentinel
    /// compares unequal to all valid cubes and any product or quotient
    /// touching it stays invalid.
    pub fn invalid(variable_num: usize) -> Self {
        let words = base::cube_size(variable_num);
        let mut chunk = vec![0u64; words];
        for (j, word) in chunk.iter_mut().enumerate() {
            let lanes = (variable_num - 32 * j).min(32);
            *word = !0u64 << (64 - 2 * lanes);
        }
        Cube {
            variable_num,
            chunk,
        }
    }

    pub(crate) fn from_chunk(variable_num: usize, chunk: Vec<u64>) -> Self {
        debug_assert_eq!(chunk.len(), base::cube_size(variable_num));
        Cube {
            variable_num,
            chunk,
        }
    }

    pub(crate) fn chunk(&self) -> &[u64] {
        &self.chunk
    }

    /// The fixed variable count
    pub fn variable_num(&self) -> usize {
        self.variable_num
    }

    /// Number of literals; 0 for the tautology cube and the invalid cube
    pub fn literal_num(&self) -> usize {
        if self.is_invalid() {
            0
        } else {
            base::literal_num(&self.chunk)
        }
    }

    /// `true` for the cube with no literals (the constant 1)
    pub fn is_tautology(&self) -> bool {
        self.chunk.iter().all(|&w| w == 0)
    }

    /// `true` for the invalid cube sentinel
    pub fn is_invalid(&self) -> bool {
        base::cube_has_void(&self.chunk)
    }

    /// The pattern of variable `var`
    pub fn get_pat(&self, var: usize) -> Result<Pat, RangeError> {
        if var >= self.variable_num {
            return Err(RangeError::Variable {
                var,
                variable_num: self.variable_num,
            });
        }
        Ok(pat_of_bits(base::get_pat_bits(&self.chunk, var)))
    }

    /// `true` when the cube carries `lit`
    ///
    /// Out-of-range literals are reported as absent.
    pub fn check_literal(&self, lit: Literal) -> bool {
        self.check_literal_parts(lit.varid(), lit.is_negative())
    }

    /// `true` when the cube carries the literal `(varid, inv)`
    pub fn check_literal_parts(&self, varid: usize, inv: bool) -> bool {
        if varid >= self.variable_num {
            return false;
        }
        self.chunk[base::block(varid)] & base::lit_mask(varid, inv) != 0
    }

    /// The literals of the cube, in increasing variable order
    pub fn literal_list(&self) -> Vec<Literal> {
        let mut lits = Vec::with_capacity(self.literal_num());
        for var in 0..self.variable_num {
            match base::get_pat_bits(&self.chunk, var) {
                0b10 => lits.push(Literal::positive(var)),
                0b01 => lits.push(Literal::negative(var)),
                _ => {}
            }
        }
        lits
    }

    /// `true` iff every literal of `other` is a literal of `self`
    ///
    /// Equivalently, `self` implies `other` as a Boolean function.
    pub fn check_containment(&self, other: &Cube) -> Result<bool, ArgumentError> {
        self.check_width(other)?;
        Ok(base::cube_check_containment(&self.chunk, &other.chunk))
    }

    /// `true` iff the cubes share some literal with the same polarity
    pub fn check_intersect(&self, other: &Cube) -> Result<bool, ArgumentError> {
        self.check_width(other)?;
        Ok(base::cube_check_intersect(&self.chunk, &other.chunk))
    }

    /// Product of two cubes
    ///
    /// The result is the invalid cube when the operands contradict, or when
    /// either operand is already invalid.
    pub fn product(&self, other: &Cube) -> Result<Cube, ArgumentError> {
        self.check_width(other)?;
        if self.is_invalid() || other.is_invalid() {
            return Ok(Cube::invalid(self.variable_num));
        }
        let mut dst = vec![0u64; self.chunk.len()];
        if base::cube_product(&mut dst, &self.chunk, &other.chunk) {
            Ok(Cube::from_chunk(self.variable_num, dst))
        } else {
            Ok(Cube::invalid(self.variable_num))
        }
    }

    /// Product with a single literal
    pub fn product_literal(&self, lit: Literal) -> Result<Cube, RangeError> {
        if lit.varid() >= self.variable_num {
            return Err(RangeError::Literal {
                varid: lit.varid(),
                variable_num: self.variable_num,
            });
        }
        if self.is_invalid() || self.check_literal(!lit) {
            return Ok(Cube::invalid(self.variable_num));
        }
        let mut dst = self.chunk.clone();
        base::cube_set_literal(&mut dst, lit.varid(), lit.is_negative());
        Ok(Cube::from_chunk(self.variable_num, dst))
    }

    /// Quotient of two cubes
    ///
    /// The result is the invalid cube when the divisor is not a
    /// sub-conjunction of `self`, or when either operand is invalid.
    pub fn quotient(&self, other: &Cube) -> Result<Cube, ArgumentError> {
        self.check_width(other)?;
        if self.is_invalid() || other.is_invalid() {
            return Ok(Cube::invalid(self.variable_num));
        }
        let mut dst = vec![0u64; self.chunk.len()];
        if base::cube_quotient(&mut dst, &self.chunk, &other.chunk) {
            Ok(Cube::from_chunk(self.variable_num, dst))
        } else {
            Ok(Cube::invalid(self.variable_num))
        }
    }

    /// Quotient by a single literal
    pub fn quotient_literal(&self, lit: Literal) -> Result<Cube, RangeError> {
        if lit.varid() >= self.variable_num {
            return Err(RangeError::Literal {
                varid: lit.varid(),
                variable_num: self.variable_num,
            });
        }
        if self.is_invalid() {
            return Ok(Cube::invalid(self.variable_num));
        }
        let mut dst = vec![0u64; self.chunk.len()];
        let blk = base::block(lit.varid());
        let mask = base::lit_mask(lit.varid(), lit.is_negative());
        if base::cube_quotient_lit(&mut dst, &self.chunk, blk, mask) {
            Ok(Cube::from_chunk(self.variable_num, dst))
        } else {
            Ok(Cube::invalid(self.variable_num))
        }
    }

    /// Total order on equal-width cubes
    pub fn compare(&self, other: &Cube) -> Result<Ordering, ArgumentError> {
        self.check_width(other)?;
        Ok(base::cube_compare(&self.chunk, &other.chunk))
    }

    /// Deterministic hash of the cube contents
    pub fn hash(&self) -> u64 {
        base::hash(&self.chunk)
    }

    /// The cube as an expression (AND of its literals)
    ///
    /// The tautology cube maps to the constant 1, the invalid cube to the
    /// constant 0.
    pub fn expr(&self) -> Expr {
        if self.is_invalid() {
            return Expr::zero();
        }
        Expr::and(self.literal_list().into_iter().map(Expr::from).collect())
    }

    /// The cube as a truth table
    pub fn tvfunc(&self) -> TvFunc {
        if self.is_invalid() {
            return TvFunc::zero(self.variable_num);
        }
        let mut f = TvFunc::one(self.variable_num);
        for lit in self.literal_list() {
            f &= &TvFunc::literal_unchecked(self.variable_num, lit.varid(), lit.is_negative());
        }
        f
    }

    /// Write the cube using the given variable names
    ///
    /// Falls back to `v<i>` for variables without a name.
    pub fn print_with_names(&self, f: &mut dyn fmt::Write, names: &[&str]) -> fmt::Result {
        if self.is_invalid() {
            return f.write_str("---");
        }
        let mut sep = "";
        for lit in self.literal_list() {
            f.write_str(sep)?;
            match names.get(lit.varid()) {
                Some(name) => f.write_str(name)?,
                None => write!(f, "v{}", lit.varid())?,
            }
            if lit.is_negative() {
                f.write_str("'")?;
            }
            sep = " ";
        }
        Ok(())
    }

    fn check_width(&self, other: &Cube) -> Result<(), ArgumentError> {
        if self.variable_num != other.variable_num {
            return Err(ArgumentError::VariableNumMismatch {
                left: self.variable_num,
                right: other.variable_num,
            });
        }
        Ok(())
    }
}

impl PartialOrd for Cube {
    /// `None` when the variable counts differ
    fn partial_cmp(&self, other: &Cube) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print_with_names(f, &[])
    }
}

impl Mul<&Cube> for &Cube {
    type Output = Cube;

    /// # Panics
    ///
    /// Panics when the variable counts differ; use [`Cube::product`] for a
    /// checked version.
    fn mul(self, rhs: &Cube) -> Cube {
        match self.product(rhs) {
            Ok(cube) => cube,
            Err(err) => panic!("{}", err),
        }
    }
}

impl Mul<Literal> for &Cube {
    type Output = Cube;

    /// # Panics
    ///
    /// Panics when the literal is out of range; use
    /// [`Cube::product_literal`] for a checked version.
    fn mul(self, rhs: Literal) -> Cube {
        match self.product_literal(rhs) {
            Ok(cube) => cube,
            Err(err) => panic!("{}", err),
        }
    }
}

impl Mul<Literal> for Cube {
    type Output = Cube;

    fn mul(self, rhs: Literal) -> Cube {
        &self * rhs
    }
}

impl Div<&Cube> for &Cube {
    type Output = Cube;

    /// # Panics
    ///
    /// Panics when the variable counts differ; use [`Cube::quotient`] for a
    /// checked version.
    fn div(self, rhs: &Cube) -> Cube {
        match self.quotient(rhs) {
            Ok(cube) => cube,
            Err(err) => panic!("{}", err),
        }
    }
}

impl Div<Literal> for &Cube {
    type Output = Cube;

    fn div(self, rhs: Literal) -> Cube {
        match self.quotient_literal(rhs) {
            Ok(cube) => cube,
            Err(err) => panic!("{}", err),
        }
    }
}

impl MulAssign<&Cube> for Cube {
    fn mul_assign(&mut self, rhs: &Cube) {
        let result = &*self * rhs;
        *self = result;
    }
}

impl MulAssign<Literal> for Cube {
    fn mul_assign(&mut self, rhs: Literal) {
        let result = &*self * rhs;
        *self = result;
    }
}

impl DivAssign<&Cube> for Cube {
    fn div_assign(&mut self, rhs: &Cube) {
        let result = &*self / rhs;
        *self = result;
    }
}

impl DivAssign<Literal> for Cube {
    fn div_assign(&mut self, rhs: Literal) {
        let result = &*self / rhs;
        *self = result;
    }
}

fn pat_of_bits(bits: u64) -> Pat {
    match bits {
        0b00 => Pat::X,
        0b10 => Pat::One,
        0b01 => Pat::Zero,
        _ => {
            // void never appears in a valid stored cube
            debug_assert!(false, "void pattern in stored cube");
            Pat::X
        }
    }
}
