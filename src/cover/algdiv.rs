//! Algebraic division
//!
//! The cover-by-cover division finds the largest quotient `Q` such that
//! `Q * G` stays inside the dividend with no overlap between quotient and
//! divisor cubes. Each dividend cube divides by at most one divisor cube,
//! so a single scratch pass collects the witness quotients, and a quotient
//! cube survives exactly when it is witnessed once per divisor cube.
//!
//! The by-cube and by-literal forms strip the divisor's literals from the
//! cubes that carry them; both preserve canonical order, so no re-sort is
//! needed.

use std::cmp::Ordering;

use super::Cover;
use crate::base;
use crate::cube::Cube;
use crate::error::{ArgumentError, RangeError};
use crate::literal::Literal;

impl Cover {
    /// Algebraic division by a cover
    pub fn algdiv(&self, other: &Cover) -> Result<Cover, ArgumentError> {
        self.check_width(other)?;
        let w = self.words();
        let num1 = self.cube_num;
        let num2 = other.cube_num;
        if num2 == 0 {
            // dividing by the constant 0 has no quotient
            return Ok(Cover::new(self.variable_num));
        }

        // witness quotients: scratch[i] = F[i] / G[j] for the first j that
        // divides F[i]
        let mut scratch = vec![0u64; num1 * w];
        let mut mark = vec![false; num1];
        for i in 0..num1 {
            let dst = &mut scratch[i * w..(i + 1) * w];
            for j in 0..num2 {
                if base::cube_quotient(dst, self.cube_at(i), other.cube_at(j)) {
                    mark[i] = true;
                    break;
                }
            }
        }

        // a quotient cube must be witnessed num2 times
        let mut pos_list = Vec::with_capacity(num1);
        for i in 0..num1 {
            if !mark[i] {
                continue;
            }
            let mut count = 1;
            let mut matched = Vec::new();
            for i2 in (i + 1)..num1 {
                if mark[i2]
                    && base::cube_compare(
                        &scratch[i * w..(i + 1) * w],
                        &scratch[i2 * w..(i2 + 1) * w],
                    ) == Ordering::Equal
                {
                    count += 1;
                    matched.push(i2);
                }
            }
            if count == num2 {
                pos_list.push(i);
                for pos in matched {
                    mark[pos] = false;
                }
            }
        }

        let mut chunk = Vec::with_capacity(pos_list.len() * w);
        for &pos in &pos_list {
            chunk.extend_from_slice(&scratch[pos * w..(pos + 1) * w]);
        }
        // emitted in first-witness order, which is descending
        Ok(Cover::from_parts(self.variable_num, pos_list.len(), chunk))
    }

    /// Quotient by a single cube
    pub fn algdiv_cube(&self, cube: &Cube) -> Result<Cover, ArgumentError> {
        self.check_cube_width(cube)?;
        if cube.is_invalid() {
            return Ok(Cover::new(self.variable_num));
        }
        let w = self.words();
        let mut chunk = vec![0u64; self.cube_num * w];
        let mut num = 0;
        for i in 0..self.cube_num {
            let dst = &mut chunk[num * w..(num + 1) * w];
            if base::cube_quotient(dst, self.cube_at(i), cube.chunk()) {
                num += 1;
            }
        }
        if w == 0 {
            num = self.cube_num;
        }
        chunk.truncate(num * w);
        Ok(Cover::from_parts(self.variable_num, num, chunk))
    }

    /// Quotient by a single literal
    ///
    /// Keeps the cubes carrying the literal, with that literal removed.
    pub fn algdiv_literal(&self, lit: Literal) -> Result<Cover, RangeError> {
        let (blk, mask) = self.check_lit(lit)?;
        let w = self.words();
        let mut chunk = Vec::with_capacity(self.cube_num * w);
        let mut num = 0;
        for i in 0..self.cube_num {
            let cube = self.cube_at(i);
            if cube[blk] & mask == 0 {
                continue;
            }
            let start = chunk.len();
            chunk.extend_from_slice(cube);
            chunk[start + blk] &= !mask;
            num += 1;
        }
        Ok(Cover::from_parts(self.variable_num, num, chunk))
    }
}
