// ============================================================================
// Arithmetic Law Checks
// ============================================================================

use numvec::numeric::NumericVector;
use quickcheck::quickcheck;

quickcheck! {
    fn prop_add_commutative(pairs: Vec<(i32, i32)>) -> bool {
        let a: NumericVector<i32> = pairs.iter().map(|p| p.0).collect();
        let b: NumericVector<i32> = pairs.iter().map(|p| p.1).collect();
        a.checked_add(&b).unwrap() == b.checked_add(&a).unwrap()
    }

    fn prop_zero_is_additive_identity(data: Vec<i64>) -> bool {
        let v = NumericVector::from(data);
        let zero = NumericVector::zeros(v.len());
        v.checked_add(&zero).unwrap() == v
    }

    fn prop_sub_self_is_zero(data: Vec<i16>) -> bool {
        let v = NumericVector::from(data);
        v.checked_sub(&v).unwrap() == NumericVector::zeros(v.len())
    }

    fn prop_dot_symmetric(pairs: Vec<(i32, i32)>) -> bool {
        let a: NumericVector<i32> = pairs.iter().map(|p| p.0).collect();
        let b: NumericVector<i32> = pairs.iter().map(|p| p.1).collect();
        a.dot(&b) == b.dot(&a)
    }

    fn prop_scale_by_one(data: Vec<i32>) -> bool {
        let v = NumericVector::from(data);
        v.scale(1) == v
    }
}
