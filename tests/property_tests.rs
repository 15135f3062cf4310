//! Integration property tests for spiral-matrix.
//!
//! These tests validate invariants that span extraction, matrix building,
//! and spiral reading through the public API.

use spiral_matrix::{
    build_matrix, extract_integers, spiral_from_text, spiral_read, BigUint, Matrix,
};
use proptest::prelude::*;

// Strategy: arbitrary rectangle of small integers
fn arb_rectangle() -> impl Strategy<Value = Vec<Vec<u64>>> {
    (1usize..10, 1usize..10).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::collection::vec(0u64..100, cols), rows)
    })
}

// Strategy: text alternating digit runs of at most six digits with non-digit noise
fn arb_noisy_text() -> impl Strategy<Value = String> {
    (
        prop::string::string_regex("[a-zA-Z ,;|+.\\-\n]{0,4}").unwrap(),
        prop::collection::vec(
            (
                prop::string::string_regex("[0-9]{1,6}").unwrap(),
                prop::string::string_regex("[a-zA-Z ,;|+.\\-\n]{1,4}").unwrap(),
            ),
            0..30,
        ),
    )
        .prop_map(|(lead, parts)| {
            let mut text = lead;
            for (digits, noise) in parts {
                text.push_str(&digits);
                text.push_str(&noise);
            }
            text
        })
}

fn sorted(mut values: Vec<u64>) -> Vec<u64> {
    values.sort_unstable();
    values
}

proptest! {
    /// Property: the spiral is a permutation of the matrix cells
    #[test]
    fn proptest_spiral_is_permutation_of_cells(rows in arb_rectangle()) {
        let cells: Vec<u64> = rows.iter().flatten().copied().collect();
        let matrix = Matrix::from_rows(rows).unwrap();

        let spiral = spiral_read(&matrix);

        prop_assert_eq!(spiral.len(), cells.len());
        prop_assert_eq!(sorted(spiral), sorted(cells));
    }

    /// Property: extraction matches a manual scan for maximal digit runs
    #[test]
    fn proptest_extraction_matches_digit_runs(text in arb_noisy_text()) {
        let expected: Vec<BigUint> = text
            .split(|c: char| !c.is_ascii_digit())
            .filter(|run| !run.is_empty())
            .map(|run| run.parse().unwrap())
            .collect();

        prop_assert_eq!(extract_integers(&text), expected);
    }

    /// Property: the text pipeline agrees with building then reading
    #[test]
    fn proptest_pipeline_composes_builder_and_reader(text in arb_noisy_text()) {
        match (build_matrix(&text), spiral_from_text(&text)) {
            (Ok(matrix), Ok(spiral)) => prop_assert_eq!(spiral_read(&matrix), spiral),
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            (built, piped) => {
                return Err(TestCaseError::fail(format!(
                    "builder and pipeline disagree: {:?} vs {:?}",
                    built, piped
                )));
            }
        }
    }
}
