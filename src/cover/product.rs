//! Cover products
//!
//! The cover-by-cover product computes every pairwise cube product, skips
//! the void ones and canonicalises the rest. The single-cube and literal
//! forms can merge distinct cubes into equal results, so they
//! canonicalise as well.

use super::Cover;
use crate::base;
use crate::cube::Cube;
use crate::error::{ArgumentError, RangeError};
use crate::literal::Literal;

impl Cover {
    /// Product of two covers
    pub fn product(&self, other: &Cover) -> Result<Cover, ArgumentError> {
        self.check_width(other)?;
        let w = self.words();
        let mut chunk = vec![0u64; self.cube_num * other.cube_num * w];
        let mut num = 0;
        for i in 0..self.cube_num {
            for j in 0..other.cube_num {
                let dst = &mut chunk[num * w..(num + 1) * w];
                if base::cube_product(dst, self.cube_at(i), other.cube_at(j)) {
                    num += 1;
                }
            }
        }
        if w == 0 {
            num = self.cube_num * other.cube_num;
        }
        let mut cover = Cover {
            variable_num: self.variable_num,
            cube_num: num,
            chunk,
        };
        cover.sort();
        Ok(cover)
    }

    /// Product with a single cube
    ///
    /// An invalid cube annihilates the cover.
    pub fn product_cube(&self, cube: &Cube) -> Result<Cover, ArgumentError> {
        self.check_cube_width(cube)?;
        if cube.is_invalid() {
            return Ok(Cover::new(self.variable_num));
        }
        let w = self.words();
        let mut chunk = vec![0u64; self.cube_num * w];
        let mut num = 0;
        for i in 0..self.cube_num {
            let dst = &mut chunk[num * w..(num + 1) * w];
            if base::cube_product(dst, self.cube_at(i), cube.chunk()) {
                num += 1;
            }
        }
        if w == 0 {
            num = self.cube_num;
        }
        let mut cover = Cover {
            variable_num: self.variable_num,
            cube_num: num,
            chunk,
        };
        cover.sort();
        Ok(cover)
    }

    /// Product with a single literal
    ///
    /// Cubes carrying the opposite polarity drop out; the rest gain the
    /// literal.
    pub fn product_literal(&self, lit: Literal) -> Result<Cover, RangeError> {
        let (blk, mask) = self.check_lit(lit)?;
        let opp = base::lit_mask(lit.varid(), lit.is_positive());
        let w = self.words();
        let mut chunk = Vec::with_capacity(self.cube_num * w);
        let mut num = 0;
        for i in 0..self.cube_num {
            let cube = self.cube_at(i);
            if cube[blk] & opp != 0 {
                continue;
            }
            let start = chunk.len();
            chunk.extend_from_slice(cube);
            chunk[start + blk] |= mask;
            num += 1;
        }
        let mut cover = Cover {
            variable_num: self.variable_num,
            cube_num: num,
            chunk,
        };
        cover.sort();
        Ok(cover)
    }
}
