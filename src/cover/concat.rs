//! Union and difference as linear merges of canonical sequences

use std::cmp::Ordering;

use super::Cover;
use crate::base;
use crate::cube::Cube;
use crate::error::ArgumentError;

impl Cover {
    /// Union of two covers
    ///
    /// A linear merge of the two canonical sequences; duplicates appear
    /// once in the result.
    pub fn union(&self, other: &Cover) -> Result<Cover, ArgumentError> {
        self.check_width(other)?;
        Ok(self.merge_union(other.cube_num, other.used_chunk()))
    }

    /// Union with a single cube
    ///
    /// An invalid cube adds nothing.
    pub fn union_cube(&self, cube: &Cube) -> Result<Cover, ArgumentError> {
        self.check_cube_width(cube)?;
        if cube.is_invalid() {
            return Ok(self.clone());
        }
        Ok(self.merge_union(1, cube.chunk()))
    }

    /// Difference of two covers
    ///
    /// Keeps the cubes of `self` with no word-equal match in `other`.
    pub fn diff(&self, other: &Cover) -> Result<Cover, ArgumentError> {
        self.check_width(other)?;
        Ok(self.merge_diff(other.cube_num, other.used_chunk()))
    }

    /// Difference with a single cube
    pub fn diff_cube(&self, cube: &Cube) -> Result<Cover, ArgumentError> {
        self.check_cube_width(cube)?;
        if cube.is_invalid() {
            return Ok(self.clone());
        }
        Ok(self.merge_diff(1, cube.chunk()))
    }

    fn merge_union(&self, num2: usize, chunk2: &[u64]) -> Cover {
        let w = self.words();
        let num1 = self.cube_num;
        let mut chunk = Vec::with_capacity((num1 + num2) * w);
        let mut num = 0;
        let mut i = 0;
        let mut j = 0;
        while i < num1 && j < num2 {
            let cube2 = &chunk2[j * w..(j + 1) * w];
            match base::cube_compare(self.cube_at(i), cube2) {
                Ordering::Greater => {
                    chunk.extend_from_slice(self.cube_at(i));
                    i += 1;
                }
                Ordering::Less => {
                    chunk.extend_from_slice(cube2);
                    j += 1;
                }
                Ordering::Equal => {
                    chunk.extend_from_slice(self.cube_at(i));
                    i += 1;
                    j += 1;
                }
            }
            num += 1;
        }
        while i < num1 {
            chunk.extend_from_slice(self.cube_at(i));
            i += 1;
            num += 1;
        }
        while j < num2 {
            chunk.extend_from_slice(&chunk2[j * w..(j + 1) * w]);
            j += 1;
            num += 1;
        }
        if w == 0 {
            num = num.min(1);
        }
        Cover::from_parts(self.variable_num, num, chunk)
    }

    fn merge_diff(&self, num2: usize, chunk2: &[u64]) -> Cover {
        let w = self.words();
        let num1 = self.cube_num;
        let mut chunk = Vec::with_capacity(num1 * w);
        let mut num = 0;
        let mut i = 0;
        let mut j = 0;
        while i < num1 && j < num2 {
            let cube2 = &chunk2[j * w..(j + 1) * w];
            match base::cube_compare(self.cube_at(i), cube2) {
                Ordering::Greater => {
                    // only in the left cover, keep it
                    chunk.extend_from_slice(self.cube_at(i));
                    i += 1;
                    num += 1;
                }
                Ordering::Less => {
                    j += 1;
                }
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
            }
        }
        while i < num1 {
            chunk.extend_from_slice(self.cube_at(i));
            i += 1;
            num += 1;
        }
        Cover::from_parts(self.variable_num, num, chunk)
    }
}
