//! Kernel and co-kernel enumeration
//!
//! A kernel of a cover `F` is a cube-free cover reached by repeatedly
//! dividing `F` by a literal that occurs in at least two cubes and then by
//! the common cube of the quotient. Each kernel is paired with the cubes
//! that produced it (its co-kernels, kept as a cover).
//!
//! The enumeration follows the classical recursive scheme: candidate
//! literals are visited in ascending occurrence count, an already-covered
//! branch is pruned when the fresh common cube meets a literal divided out
//! earlier on the path, and results are memoised in a table keyed by the
//! kernel's canonical value, so equal kernels found along different paths
//! accumulate their co-kernels in one entry.

use std::collections::HashMap;

use crate::cover::Cover;
use crate::cube::Cube;
use crate::litset::LitSet;
use crate::literal::Literal;

struct Cell {
    kernel: Cover,
    cokernels: Cover,
}

/// Enumerator for kernels and co-kernels
///
/// # Examples
///
/// ```
/// use sop_algebra::{Cover, KernelGen, Literal};
///
/// let a = Literal::positive(0);
/// let b = Literal::positive(1);
/// let c = Literal::positive(2);
/// let d = Literal::positive(3);
///
/// // F = ac + ad + bc + bd
/// let f = Cover::from_literal_lists(
///     4,
///     &[vec![a, c], vec![a, d], vec![b, c], vec![b, d]],
/// )
/// .unwrap();
///
/// let mut gen = KernelGen::new();
/// let kernels = gen.all_kernels(&f);
/// assert!(kernels
///     .iter()
///     .any(|(k, _)| k.literal_list() == vec![vec![c], vec![d]]));
/// ```
pub struct KernelGen {
    cells: Vec<Cell>,
    /// kernel hash -> indices into `cells`
    buckets: HashMap<u64, Vec<usize>>,
}

impl KernelGen {
    /// A fresh enumerator
    pub fn new() -> Self {
        KernelGen {
            cells: Vec::new(),
            buckets: HashMap::new(),
        }
    }

    /// Enumerate every (kernel, co-kernel cover) pair of `cover`
    ///
    /// The degenerate pair `(cover, 1)` is included when the cover is
    /// itself cube-free.
    pub fn all_kernels(&mut self, cover: &Cover) -> Vec<(Cover, Cover)> {
        self.generate(cover);
        let cells = std::mem::take(&mut self.cells);
        self.buckets.clear();
        cells
            .into_iter()
            .map(|cell| (cell.kernel, cell.cokernels))
            .collect()
    }

    /// The kernel with the highest default value
    ///
    /// The default value of a kernel `K` with co-kernel cover `C` is
    /// `(|K| - 1) * lits(C) + (|C| - 1) * lits(K)`, the count of literals
    /// saved by extracting the kernel. Returns the empty cover when the
    /// only kernel is the cover itself.
    pub fn best_kernel(&mut self, cover: &Cover) -> Cover {
        self.best_kernel_by(cover, |kernel, cokernels| {
            let k_nc = kernel.cube_num() as i64;
            let k_nl = kernel.literal_num() as i64;
            let c_nc = cokernels.cube_num() as i64;
            let c_nl = cokernels.literal_num() as i64;
            (k_nc - 1) * c_nl + (c_nc - 1) * k_nl
        })
    }

    /// The kernel maximising a caller-supplied value function
    ///
    /// `value` receives each kernel and its co-kernel cover; the first
    /// kernel with the largest value wins.
    pub fn best_kernel_by<F>(&mut self, cover: &Cover, value: F) -> Cover
    where
        F: Fn(&Cover, &Cover) -> i64,
    {
        self.generate(cover);

        // a lone level-0 kernel equal to the cover itself is no divisor
        if self.cells.len() == 1 && self.cells[0].cokernels.literal_num() == 0 {
            self.clear();
            return Cover::new(cover.variable_num());
        }

        let mut best: Option<(usize, i64)> = None;
        for (i, cell) in self.cells.iter().enumerate() {
            let v = value(&cell.kernel, &cell.cokernels);
            if best.map_or(true, |(_, bv)| bv < v) {
                best = Some((i, v));
            }
        }
        let ans = match best {
            Some((i, _)) => self.cells.swap_remove(i).kernel,
            None => Cover::new(cover.variable_num()),
        };
        self.clear();
        ans
    }

    fn clear(&mut self) {
        self.cells.clear();
        self.buckets.clear();
    }

    fn generate(&mut self, cover: &Cover) {
        self.clear();

        // literals occurring at least twice, in ascending occurrence count
        let nv = cover.variable_num();
        let mut counted = Vec::new();
        for var in 0..nv {
            for lit in [Literal::positive(var), Literal::negative(var)] {
                let n = cover.literal_num_of(lit);
                if n >= 2 {
                    counted.push((n, lit));
                }
            }
        }
        counted.sort_by_key(|&(n, _)| n);
        let candidates: Vec<Literal> = counted.into_iter().map(|(_, lit)| lit).collect();

        let ccube0 = Cube::new(nv);
        let plits = LitSet::new(nv);
        self.kern_sub(cover, 0, &candidates, &ccube0, &plits);

        // the cover itself is a kernel when it is cube-free
        let ccube = cover.common_cube();
        if ccube.literal_num() == 0 {
            self.add(cover.clone(), &ccube);
        }
    }

    fn kern_sub(
        &mut self,
        cover: &Cover,
        pos: usize,
        candidates: &[Literal],
        ccube: &Cube,
        plits: &LitSet,
    ) {
        let mut plits1 = plits.clone();
        for (offset, &lit) in candidates[pos..].iter().enumerate() {
            let next = pos + offset + 1;

            if cover.literal_num_of(lit) <= 1 {
                continue;
            }

            // divide by the literal, then pull out the common cube
            let cover1 = cover / lit;
            let ccube1 = cover1.common_cube();
            if plits1
                .check_intersect(&ccube1)
                .unwrap_or_else(|err| panic!("{}", err))
            {
                // the common cube meets a literal already divided out, so
                // this kernel was produced along an earlier path
                continue;
            }

            let mut cover1 = cover1;
            cover1 /= &ccube1;

            // the full co-kernel cube for this branch
            let mut ccube1 = ccube1;
            ccube1 *= ccube;
            ccube1 *= lit;

            plits1 += lit;

            self.kern_sub(&cover1, next, candidates, &ccube1, &plits1);
            self.add(cover1, &ccube1);
        }
    }

    fn add(&mut self, kernel: Cover, cokernel: &Cube) {
        let hash = kernel.hash();
        let bucket = self.buckets.entry(hash).or_default();
        for &idx in bucket.iter() {
            if self.cells[idx].kernel == kernel {
                let merged = match self.cells[idx].cokernels.union_cube(cokernel) {
                    Ok(cover) => cover,
                    Err(err) => panic!("{}", err),
                };
                self.cells[idx].cokernels = merged;
                return;
            }
        }
        bucket.push(self.cells.len());
        self.cells.push(Cell {
            cokernels: Cover::from_cube(cokernel.clone()),
            kernel,
        });
    }
}

impl Default for KernelGen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lits(chars: &[usize]) -> Vec<Literal> {
        chars.iter().map(|&v| Literal::positive(v)).collect()
    }

    /// The eight-cube enumeration scenario:
    /// F = adf + aef + bdf + bef + cdf + cef + bfg + h over ten variables.
    fn sample_cover() -> Cover {
        let (a, b, c, d, e, f, g, h) = (0, 1, 2, 3, 4, 5, 6, 7);
        Cover::from_literal_lists(
            10,
            &[
                lits(&[a, d, f]),
                lits(&[a, e, f]),
                lits(&[b, d, f]),
                lits(&[b, e, f]),
                lits(&[c, d, f]),
                lits(&[c, e, f]),
                lits(&[b, f, g]),
                lits(&[h]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn all_kernels_of_sample() {
        let cover = sample_cover();
        let mut gen = KernelGen::new();
        let kernels = gen.all_kernels(&cover);

        let render: Vec<(String, String)> = kernels
            .iter()
            .map(|(k, c)| (k.to_string(), c.to_string()))
            .collect();

        assert_eq!(
            render,
            vec![
                ("v3 + v4".to_string(), "v0 v5 + v2 v5".to_string()),
                ("v3 + v4 + v6".to_string(), "v1 v5".to_string()),
                ("v0 + v1 + v2".to_string(), "v3 v5 + v4 v5".to_string()),
                (
                    "v0 v3 + v0 v4 + v1 v3 + v1 v4 + v1 v6 + v2 v3 + v2 v4".to_string(),
                    "v5".to_string()
                ),
                (
                    "v0 v3 v5 + v0 v4 v5 + v1 v3 v5 + v1 v4 v5 + v1 v5 v6 + v2 v3 v5 + v2 v4 v5 + v7"
                        .to_string(),
                    "".to_string()
                ),
            ]
        );
        // the degenerate pair carries the tautology co-kernel
        let last = &kernels[kernels.len() - 1];
        assert_eq!(last.1.cube_num(), 1);
        assert!(last.1.get_cube(0).unwrap().is_tautology());
    }

    #[test]
    fn equal_kernels_share_one_entry() {
        let cover = sample_cover();
        let mut gen = KernelGen::new();
        let kernels = gen.all_kernels(&cover);
        // d + e is reached through a and through c; one entry, two co-kernels
        let (_, cokernels) = kernels
            .iter()
            .find(|(k, _)| k.to_string() == "v3 + v4")
            .unwrap();
        assert_eq!(cokernels.cube_num(), 2);
    }

    #[test]
    fn best_kernel_picks_highest_value() {
        let cover = sample_cover();
        let mut gen = KernelGen::new();
        let best = gen.best_kernel(&cover);
        // value of (a + b + c) with co-kernels df + ef:
        //   (3 - 1) * 4 + (2 - 1) * 3 = 11, the maximum here
        assert_eq!(best.to_string(), "v0 + v1 + v2");
    }

    #[test]
    fn best_kernel_of_kernel_free_cover_is_empty() {
        // ab + c has no kernel other than itself
        let ab = vec![Literal::positive(0), Literal::positive(1)];
        let c = vec![Literal::positive(2)];
        let cover = Cover::from_literal_lists(3, &[ab, c]).unwrap();
        let mut gen = KernelGen::new();
        let best = gen.best_kernel(&cover);
        assert_eq!(best.cube_num(), 0);
    }

    #[test]
    fn custom_value_function() {
        let cover = sample_cover();
        let mut gen = KernelGen::new();
        // prefer the widest kernel
        let best = gen.best_kernel_by(&cover, |k, _| k.cube_num() as i64);
        assert_eq!(best.cube_num(), 8);
    }
}
