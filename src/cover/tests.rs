//! Tests for the cover module

use super::*;
use crate::error::ParseCoverError;
use std::cmp::Ordering;

fn lit(v: usize) -> Literal {
    Literal::positive(v)
}

#[test]
fn empty_cover() {
    let cover = Cover::new(10);
    assert_eq!(cover.variable_num(), 10);
    assert_eq!(cover.cube_num(), 0);
    assert_eq!(cover.literal_num(), 0);
    assert_eq!(cover.to_string(), "");
    assert!(cover.get_cube(0).is_err());
}

#[test]
fn construction_and_literal_counts() {
    // { ab, cd } over ten variables
    let cover =
        Cover::from_literal_lists(10, &[vec![lit(0), lit(1)], vec![lit(2), lit(3)]]).unwrap();
    assert_eq!(cover.cube_num(), 2);
    assert_eq!(cover.literal_num(), 4);
    for v in 0..4 {
        assert_eq!(cover.literal_num_of(lit(v)), 1);
        assert_eq!(cover.literal_num_of(!lit(v)), 0);
    }
    for v in 4..10 {
        assert_eq!(cover.literal_num_of(lit(v)), 0);
    }
    assert_eq!(
        cover.literal_list(),
        vec![vec![lit(0), lit(1)], vec![lit(2), lit(3)]]
    );
}

#[test]
fn sort_collapses_duplicates() {
    // construction order: b'c, bc', a'c, a'c, ac', ab'
    let cover = Cover::from_literal_lists(
        3,
        &[
            vec![!lit(1), lit(2)],
            vec![lit(1), !lit(2)],
            vec![!lit(0), lit(2)],
            vec![!lit(0), lit(2)],
            vec![lit(0), !lit(2)],
            vec![lit(0), !lit(1)],
        ],
    )
    .unwrap();
    assert_eq!(cover.cube_num(), 5);
    assert_eq!(
        cover.to_string(),
        "v0 v1' + v0 v2' + v0' v2 + v1 v2' + v1' v2"
    );
}

#[test]
fn canonical_order_is_strictly_descending() {
    let cover = Cover::from_literal_lists(
        8,
        &[
            vec![lit(4)],
            vec![lit(1), !lit(3)],
            vec![!lit(0), lit(5)],
            vec![lit(0), lit(7)],
            vec![lit(1), lit(2)],
        ],
    )
    .unwrap();
    for i in 1..cover.cube_num() {
        let prev = cover.get_cube(i - 1).unwrap();
        let cube = cover.get_cube(i).unwrap();
        assert_eq!(prev.compare(&cube).unwrap(), Ordering::Greater);
    }
}

#[test]
fn sort_is_stable_across_construction_orders() {
    let cubes = [
        vec![lit(0), lit(2)],
        vec![lit(1), !lit(4)],
        vec![!lit(0), lit(3)],
        vec![lit(5)],
        vec![lit(2), lit(3), lit(4)],
    ];
    let forward = Cover::from_literal_lists(6, &cubes).unwrap();
    let mut reversed = cubes.to_vec();
    reversed.reverse();
    let backward = Cover::from_literal_lists(6, &reversed).unwrap();
    assert_eq!(forward, backward);
    assert_eq!(forward.hash(), backward.hash());
}

#[test]
fn large_covers_exercise_the_merge_path() {
    // enough cubes to leave the hand-written small-n sorters
    let mut lists: Vec<Vec<Literal>> = Vec::new();
    for v in 0..40 {
        lists.push(vec![Literal::new(v % 40, v % 3 == 0), lit((v + 7) % 40)]);
    }
    let cover = Cover::from_literal_lists(40, &lists).unwrap();
    for i in 1..cover.cube_num() {
        assert_eq!(
            cover
                .get_cube(i - 1)
                .unwrap()
                .compare(&cover.get_cube(i).unwrap())
                .unwrap(),
            Ordering::Greater
        );
    }
    // same multiset, shuffled differently
    lists.rotate_left(13);
    lists.reverse();
    let other = Cover::from_literal_lists(40, &lists).unwrap();
    assert_eq!(cover, other);
    assert_eq!(cover.hash(), other.hash());
}

#[test]
fn union_identities() {
    let cover =
        Cover::from_literal_lists(4, &[vec![lit(0), lit(1)], vec![lit(2)]]).unwrap();
    let empty = Cover::new(4);
    assert_eq!(&cover | &empty, cover);
    assert_eq!(&empty | &cover, cover);
    assert_eq!(&cover | &cover, cover);

    let other = Cover::from_literal_lists(4, &[vec![lit(2)], vec![lit(3)]]).unwrap();
    let union = &cover | &other;
    assert_eq!(union.cube_num(), 3);
    assert_eq!(union.to_string(), "v0 v1 + v2 + v3");
}

#[test]
fn union_with_cube() {
    let cover = Cover::from_literal_lists(4, &[vec![lit(0)]]).unwrap();
    let cube = Cube::from_literal(4, lit(3)).unwrap();
    let union = cover.union_cube(&cube).unwrap();
    assert_eq!(union.to_string(), "v0 + v3");
    // an invalid cube adds nothing
    let void = Cube::invalid(4);
    assert_eq!(cover.union_cube(&void).unwrap(), cover);
}

#[test]
fn diff_identities() {
    let c1 = Cover::from_literal_lists(4, &[vec![lit(0)], vec![lit(1)]]).unwrap();
    let c2 = Cover::from_literal_lists(4, &[vec![lit(1)], vec![lit(2)]]).unwrap();
    assert_eq!((&c1 - &c1).cube_num(), 0);
    let diff = &c1 - &c2;
    assert_eq!(diff.to_string(), "v0");
    // (c1 | c2) - c2 == c1 - c2 for exact-match difference
    assert_eq!(&(&c1 | &c2) - &c2, diff);
}

#[test]
fn product_distributes_over_union_on_disjoint_support() {
    let a = Cover::from_literal_lists(6, &[vec![lit(0)], vec![lit(1)]]).unwrap();
    let b = Cover::from_literal_lists(6, &[vec![lit(2)]]).unwrap();
    let c = Cover::from_literal_lists(6, &[vec![lit(3), lit(4)]]).unwrap();
    let left = &a * &(&b | &c);
    let right = &(&a * &b) | &(&a * &c);
    assert_eq!(left, right);
}

#[test]
fn product_drops_contradictions() {
    let c1 = Cover::from_literal_lists(4, &[vec![lit(0)], vec![!lit(1)]]).unwrap();
    let c2 = Cover::from_literal_lists(4, &[vec![lit(1)]]).unwrap();
    // a * b and b' * b; the latter is void
    let product = &c1 * &c2;
    assert_eq!(product.to_string(), "v0 v1");

    // literal product keeps only consistent cubes
    let by_lit = &c1 * lit(1);
    assert_eq!(by_lit.to_string(), "v0 v1");
}

#[test]
fn product_with_cube_merges_duplicates() {
    // x + xd collapses once multiplied by d
    let cover =
        Cover::from_literal_lists(4, &[vec![lit(0)], vec![lit(0), lit(3)]]).unwrap();
    let cube = Cube::from_literal(4, lit(3)).unwrap();
    let product = cover.product_cube(&cube).unwrap();
    assert_eq!(product.cube_num(), 1);
    assert_eq!(product.to_string(), "v0 v3");
}

#[test]
fn algebraic_division_by_cover() {
    // F = ac + ad + bc + bd, G = a + b  ->  F/G = c + d
    let f = Cover::from_literal_lists(
        10,
        &[
            vec![lit(0), lit(2)],
            vec![lit(0), lit(3)],
            vec![lit(1), lit(2)],
            vec![lit(1), lit(3)],
        ],
    )
    .unwrap();
    let g = Cover::from_literal_lists(10, &[vec![lit(0)], vec![lit(1)]]).unwrap();
    let q = &f / &g;
    assert_eq!(q.literal_list(), vec![vec![lit(2)], vec![lit(3)]]);

    // division respects the witness count: a divisor cube with no partner
    // contributes nothing
    let g2 = Cover::from_literal_lists(10, &[vec![lit(0)], vec![lit(9)]]).unwrap();
    assert_eq!((&f / &g2).cube_num(), 0);
}

#[test]
fn division_reconstruction() {
    // F = (Q & G) | R exactly, with R = F - Q & G
    let f = Cover::from_literal_lists(
        10,
        &[
            vec![lit(0), lit(2)],
            vec![lit(0), lit(3)],
            vec![lit(1), lit(2)],
            vec![lit(1), lit(3)],
            vec![lit(4), lit(5)],
        ],
    )
    .unwrap();
    let g = Cover::from_literal_lists(10, &[vec![lit(0)], vec![lit(1)]]).unwrap();
    let q = &f / &g;
    let r = &f - &(&q * &g);
    assert_eq!(r.to_string(), "v4 v5");
    assert_eq!(&(&q * &g) | &r, f);
}

#[test]
fn division_by_cube_and_literal() {
    let f = Cover::from_literal_lists(
        10,
        &[
            vec![lit(0), lit(1), lit(2)],
            vec![lit(0), lit(1), lit(3)],
            vec![lit(4)],
        ],
    )
    .unwrap();
    let ab = Cube::from_literals(10, &[lit(0), lit(1)]).unwrap();
    let q = &f / &ab;
    assert_eq!(q.literal_list(), vec![vec![lit(2)], vec![lit(3)]]);

    let by_lit = &f / lit(0);
    assert_eq!(
        by_lit.literal_list(),
        vec![vec![lit(1), lit(2)], vec![lit(1), lit(3)]]
    );
}

#[test]
fn cofactor_by_literal_and_cube() {
    // F = ab + a'c + b
    let f = Cover::from_literal_lists(
        4,
        &[vec![lit(0), lit(1)], vec![!lit(0), lit(2)], vec![lit(1)]],
    )
    .unwrap();
    // cofactor by a: ab -> b, a'c drops, b stays; dedup leaves one cube
    let cof = f.cofactor_literal(lit(0)).unwrap();
    assert_eq!(cof.to_string(), "v1");

    let by_cube = f.cofactor_cube(&Cube::from_literal(4, lit(0)).unwrap()).unwrap();
    assert_eq!(by_cube, cof);

    // the cofactor multiplied back stays inside the cover
    let back = &cof * lit(0);
    let outside = &back.tvfunc() & &!&f.tvfunc();
    assert!(outside.is_zero());
}

#[test]
fn common_cube_extraction() {
    // F = ac + ad + ae'  ->  common cube a
    let f = Cover::from_literal_lists(
        10,
        &[
            vec![lit(0), lit(2)],
            vec![lit(0), lit(3)],
            vec![lit(0), !lit(4)],
        ],
    )
    .unwrap();
    let common = f.common_cube();
    assert_eq!(common.literal_list(), vec![lit(0)]);

    // F' = ac + a'd + ae' shares nothing; the tautology cube comes back
    let f2 = Cover::from_literal_lists(
        10,
        &[
            vec![lit(0), lit(2)],
            vec![!lit(0), lit(3)],
            vec![lit(0), !lit(4)],
        ],
    )
    .unwrap();
    assert!(f2.common_cube().is_tautology());
    assert_eq!(f2.common_cube().literal_num(), 0);

    // the empty cover also yields the tautology cube
    assert!(Cover::new(10).common_cube().is_tautology());
}

#[test]
fn compare_streams_canonical_sequences() {
    let c1 = Cover::from_literal_lists(4, &[vec![lit(0)], vec![lit(1)]]).unwrap();
    let c2 = Cover::from_literal_lists(4, &[vec![lit(0)]]).unwrap();
    let c3 = Cover::from_literal_lists(4, &[vec![lit(1)], vec![lit(2)]]).unwrap();
    // shorter prefix is smaller
    assert_eq!(c1.compare(&c2).unwrap(), Ordering::Greater);
    // first differing cube decides
    assert_eq!(c1.compare(&c3).unwrap(), Ordering::Greater);
    assert_eq!(c1.compare(&c1).unwrap(), Ordering::Equal);
    assert!(c1 > c3);
    // cross-width covers have no ordering
    assert_eq!(c1.partial_cmp(&Cover::new(5)), None);
    assert!(c1.compare(&Cover::new(5)).is_err());
}

#[test]
fn equality_is_canonical_byte_equality() {
    let c1 = Cover::from_literal_lists(4, &[vec![lit(0)], vec![lit(1)]]).unwrap();
    let c2 = Cover::from_literal_lists(4, &[vec![lit(1)], vec![lit(0)]]).unwrap();
    assert_eq!(c1, c2);
    assert_eq!(c1.hash(), c2.hash());
    // same cubes over a different width are a different cover
    let c3 = Cover::from_literal_lists(5, &[vec![lit(0)], vec![lit(1)]]).unwrap();
    assert_ne!(c1, c3);
}

#[test]
fn get_cube_returns_an_owned_copy() {
    let mut cover = Cover::from_literal_lists(4, &[vec![lit(0)], vec![lit(1)]]).unwrap();
    let cube = cover.get_cube(0).unwrap();
    assert_eq!(cube.literal_list(), vec![lit(0)]);
    cover *= lit(3);
    // the copy is unaffected by the mutation
    assert_eq!(cube.literal_list(), vec![lit(0)]);
}

#[test]
fn get_pat_checks_both_indices() {
    let cover = Cover::from_literal_lists(4, &[vec![lit(0), !lit(2)]]).unwrap();
    assert_eq!(cover.get_pat(0, 0).unwrap(), Pat::One);
    assert_eq!(cover.get_pat(0, 2).unwrap(), Pat::Zero);
    assert_eq!(cover.get_pat(0, 1).unwrap(), Pat::X);
    assert!(matches!(
        cover.get_pat(1, 0),
        Err(RangeError::CubeIndex { .. })
    ));
    assert!(matches!(
        cover.get_pat(0, 4),
        Err(RangeError::Variable { .. })
    ));
}

#[test]
fn mismatched_widths_are_argument_errors() {
    let c1 = Cover::new(4);
    let c2 = Cover::new(5);
    assert!(c1.union(&c2).is_err());
    assert!(c1.diff(&c2).is_err());
    assert!(c1.product(&c2).is_err());
    assert!(c1.algdiv(&c2).is_err());
    assert!(c1.product_literal(lit(7)).is_err());
    assert!(c1.algdiv_literal(lit(7)).is_err());
}

#[test]
fn expr_bridge() {
    // C = ab + c'  ->  "( ( 0 & 1 ) | ~2 )"
    let cover =
        Cover::from_literal_lists(3, &[vec![lit(0), lit(1)], vec![!lit(2)]]).unwrap();
    assert_eq!(cover.expr().to_string(), "( ( 0 & 1 ) | ~2 )");
    assert!(Cover::new(3).expr().is_zero());
}

#[test]
fn tvfunc_bridge() {
    let cover =
        Cover::from_literal_lists(3, &[vec![lit(0), lit(1)], vec![!lit(2)]]).unwrap();
    let f = cover.tvfunc();
    assert!(f.value(0b011)); // ab
    assert!(f.value(0b000)); // c'
    assert!(!f.value(0b100)); // only c set
    assert_eq!(f, cover.expr().tvfunc(3).unwrap());
}

#[test]
fn text_round_trip() {
    let text = "11-\n--0\n";
    let cover = Cover::from_text(text).unwrap();
    assert_eq!(cover.variable_num(), 3);
    assert_eq!(cover.cube_num(), 2);
    assert_eq!(cover.to_text(), text);

    // empty input is the empty cover
    let empty = Cover::from_text("").unwrap();
    assert_eq!(empty.cube_num(), 0);

    // a final line without a newline still counts
    let cover = Cover::from_text("1-").unwrap();
    assert_eq!(cover.cube_num(), 1);
    assert_eq!(cover.variable_num(), 2);
}

#[test]
fn text_parse_errors() {
    assert!(matches!(
        Cover::from_text("11-\n1-\n"),
        Err(ParseCoverError::WidthMismatch {
            line: 2,
            expected: 3,
            found: 2,
        })
    ));
    assert!(matches!(
        Cover::from_text("1x-\n"),
        Err(ParseCoverError::InvalidCharacter {
            line: 1,
            column: 2,
            found: 'x',
        })
    ));
}

#[test]
fn print_with_names_uses_the_name_list() {
    let cover =
        Cover::from_literal_lists(3, &[vec![lit(0), lit(1)], vec![!lit(2)]]).unwrap();
    let mut out = String::new();
    cover
        .print_with_names(&mut out, &["x", "y", "z"])
        .unwrap();
    assert_eq!(out, "x y + z'");
}
