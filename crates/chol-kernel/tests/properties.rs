use chol_kernel::fixtures::random_spd;
use chol_kernel::verify::{max_abs_diff, reconstruct, upper_max_abs};
use chol_kernel::{cholesky, decompose, DecomposeError, Matrix32, Outcome, N};
use proptest::prelude::*;

proptest! {
    #[test]
    fn random_spd_matrices_reconstruct(seed in any::<u64>()) {
        let a = random_spd(seed);
        let l = cholesky(&a).unwrap();
        let tol = 1e-12 * a.max_abs().max(1.0) * N as f64;
        prop_assert!(max_abs_diff(&reconstruct(&l), &a) <= tol);
        prop_assert_eq!(upper_max_abs(&l), 0.0);
        for j in 0..N {
            prop_assert!(l.get(j, j) > 0.0);
        }
    }

    #[test]
    fn any_asymmetric_pair_is_rejected(
        seed in any::<u64>(),
        row in 0usize..N,
        col in 0usize..N,
        delta in prop_oneof![1e-12f64..1.0, -1.0f64..-1e-12],
    ) {
        prop_assume!(row != col);
        let mut a = random_spd(seed);
        let value = a.get(row, col) + delta;
        prop_assume!(value != a.get(col, row));
        a.set(row, col, value);
        let mut l = Matrix32::zeros();
        prop_assert_eq!(decompose(&a, &mut l), Outcome::NotSymmetric);
        let (lo, hi) = if row < col { (row, col) } else { (col, row) };
        prop_assert_eq!(
            cholesky(&a).unwrap_err(),
            DecomposeError::NotSymmetric { row: lo, col: hi }
        );
    }

    #[test]
    fn non_positive_pivot_is_found_where_it_occurs(
        seed in any::<u64>(),
        pivot in 0usize..N,
        value in -100.0f64..=0.0,
    ) {
        let mut a = random_spd(seed);
        a.set(pivot, pivot, value);
        let mut l = Matrix32::zeros();
        prop_assert_eq!(decompose(&a, &mut l), Outcome::NotPositiveDefinite);
        match cholesky(&a).unwrap_err() {
            DecomposeError::NotPositiveDefinite { pivot: found, value: pivot_value } => {
                prop_assert_eq!(found, pivot);
                prop_assert!(pivot_value <= 0.0);
            }
            other => prop_assert!(false, "unexpected error {other:?}"),
        }
    }
}
