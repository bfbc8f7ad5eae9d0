//! Cofactors
//!
//! The cofactor by a cube keeps the cubes consistent with it and removes
//! its literals from them. Removing literals can reorder or merge cubes,
//! so the result is canonicalised.

use super::Cover;
use crate::base;
use crate::cube::Cube;
use crate::error::{ArgumentError, RangeError};
use crate::literal::Literal;

impl Cover {
    /// Cofactor by a cube
    pub fn cofactor_cube(&self, cube: &Cube) -> Result<Cover, ArgumentError> {
        self.check_cube_width(cube)?;
        if cube.is_invalid() {
            return Ok(Cover::new(self.variable_num));
        }
        let w = self.words();
        let mut chunk = vec![0u64; self.cube_num * w];
        let mut num = 0;
        for i in 0..self.cube_num {
            let dst = &mut chunk[num * w..(num + 1) * w];
            if base::cube_cofactor(dst, self.cube_at(i), cube.chunk()) {
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

    /// Cofactor by a literal
    ///
    /// Cubes carrying the opposite polarity drop out; the variable's
    /// literal, if present, is removed from the rest.
    pub fn cofactor_literal(&self, lit: Literal) -> Result<Cover, RangeError> {
        self.check_lit(lit)?;
        let blk = base::block(lit.varid());
        let opp = base::lit_mask(lit.varid(), lit.is_positive());
        let lane = base::var_mask(lit.varid());
        let w = self.words();
        let mut chunk = vec![0u64; self.cube_num * w];
        let mut num = 0;
        for i in 0..self.cube_num {
            let dst = &mut chunk[num * w..(num + 1) * w];
            if base::cube_cofactor_lit(dst, self.cube_at(i), blk, opp, lane) {
                num += 1;
            }
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
