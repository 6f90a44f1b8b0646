//! Range bound arithmetic used by all pitch mutations.

// -------------------------------------------------------------------------------------------------

/// Result of a [`wrap`]: the folded value and the signed number of full range traversals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WrappedNumber {
    pub value: i32,
    pub num_wraps: i32,
}

// -------------------------------------------------------------------------------------------------

/// Fold `value` into the inclusive cyclic range `[lower, upper]`.
///
/// Bounds may be passed in any order. The returned value satisfies
/// `value == wrapped.value + wrapped.num_wraps * (upper - lower + 1)`.
pub fn wrap(value: i32, lower: i32, upper: i32) -> WrappedNumber {
    let (lower, upper) = if lower > upper {
        (upper, lower)
    } else {
        (lower, upper)
    };
    let width = upper - lower + 1;
    let offset = value - lower;
    WrappedNumber {
        value: lower + offset.rem_euclid(width),
        num_wraps: offset.div_euclid(width),
    }
}

/// Saturate `value` into `[lower, upper]`. Bounds may be passed in any order.
pub fn clamp(value: i32, lower: i32, upper: i32) -> i32 {
    value.clamp(lower.min(upper), lower.max(upper))
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    use pretty_assertions::assert_eq;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn wrap_bounds() {
        assert_eq!(wrap(11, 0, 11), WrappedNumber { value: 11, num_wraps: 0 });
        assert_eq!(wrap(12, 0, 11), WrappedNumber { value: 0, num_wraps: 1 });
        assert_eq!(wrap(-1, 0, 11), WrappedNumber { value: 11, num_wraps: -1 });
        assert_eq!(wrap(0, 0, 11), WrappedNumber { value: 0, num_wraps: 0 });
        assert_eq!(wrap(5, 3, 5), WrappedNumber { value: 5, num_wraps: 0 });
        assert_eq!(wrap(6, 3, 5), WrappedNumber { value: 3, num_wraps: 1 });
        assert_eq!(wrap(2, 3, 5), WrappedNumber { value: 5, num_wraps: -1 });
    }

    #[test]
    fn wrap_large_jumps() {
        // 9 wide range
        assert_eq!(wrap(60, 0, 8), WrappedNumber { value: 6, num_wraps: 6 });
        assert_eq!(wrap(-60, 0, 8), WrappedNumber { value: 3, num_wraps: -7 });
        assert_eq!(wrap(36, 0, 11), WrappedNumber { value: 0, num_wraps: 3 });
        assert_eq!(wrap(-25, 0, 11), WrappedNumber { value: 11, num_wraps: -3 });
    }

    #[test]
    fn wrap_inverted_bounds() {
        assert_eq!(wrap(12, 11, 0), wrap(12, 0, 11));
        assert_eq!(wrap(-13, 11, 0), wrap(-13, 0, 11));
        assert_eq!(wrap(4, 4, 4), WrappedNumber { value: 4, num_wraps: 0 });
        assert_eq!(wrap(6, 4, 4), WrappedNumber { value: 4, num_wraps: 2 });
    }

    #[test]
    fn wrap_invariants() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0x1234);
        for _ in 0..1000 {
            let lower = rng.random_range(-50..50);
            let upper = lower + rng.random_range(0..30);
            let value = rng.random_range(-1000..1000);
            let wrapped = wrap(value, lower, upper);
            assert!((lower..=upper).contains(&wrapped.value));
            assert_eq!(
                wrapped.value + wrapped.num_wraps * (upper - lower + 1),
                value
            );
            assert_eq!(wrap(wrapped.value, lower, upper).num_wraps, 0);
        }
    }

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp(10, 0, 9), 9);
        assert_eq!(clamp(-3, 0, 9), 0);
        assert_eq!(clamp(4, 0, 9), 4);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0x4321);
        for _ in 0..1000 {
            let a = rng.random_range(-100..100);
            let b = rng.random_range(-100..100);
            let x = rng.random_range(-200..200);
            assert_eq!(clamp(x, a, b), clamp(x, b, a));
        }
    }
}
