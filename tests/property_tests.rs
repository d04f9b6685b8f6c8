//! Property-based tests for validly.

use proptest::prelude::*;
use validly::prelude::*;

// ============================================================================
// DETERMINISM: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn min_length_deterministic(s in ".*") {
        let v = min_length(3);
        prop_assert_eq!(v.validate(&s), v.validate(&s));
    }

    #[test]
    fn max_length_deterministic(s in ".*") {
        let v = max_length(10);
        prop_assert_eq!(v.validate(&s), v.validate(&s));
    }

    #[test]
    fn in_range_deterministic(n in any::<i64>()) {
        let v = in_range(0i64, 100i64);
        prop_assert_eq!(v.validate(&n), v.validate(&n));
    }

    #[test]
    fn email_deterministic(s in ".*") {
        let v = email();
        prop_assert_eq!(v.validate(&s), v.validate(&s));
    }

    #[test]
    fn malformed_regex_deterministic(s in ".*") {
        let v = matches_regex("[never compiles");
        let r = v.validate(&s);
        prop_assert!(r.is_invalid());
        prop_assert_eq!(r, v.validate(&s));
    }
}

// ============================================================================
// INVALID IS NEVER EMPTY
// ============================================================================

proptest! {
    #[test]
    fn invalid_always_carries_errors(s in ".{0,30}") {
        let v = min_length(5).and(contains("@")).and(lowercase());
        let result = v.validate(&s);
        if result.is_invalid() {
            prop_assert!(!result.errors().is_empty());
        } else {
            prop_assert!(result.errors().is_empty());
        }
    }
}

// ============================================================================
// AND: fails iff either fails, error counts add up
// ============================================================================

proptest! {
    #[test]
    fn and_fails_iff_either_fails(s in ".{0,30}") {
        let a = min_length(3);
        let b = max_length(10);

        let a_result = a.validate(&s);
        let b_result = b.validate(&s);
        let combined = a.and(b).validate(&s);

        prop_assert_eq!(combined.is_valid(), a_result.is_valid() && b_result.is_valid());
        prop_assert_eq!(
            combined.errors().len(),
            a_result.errors().len() + b_result.errors().len()
        );
    }

    #[test]
    fn and_is_associative(s in ".{0,30}") {
        let assoc_left = min_length(3).and(max_length(10)).and(alphanumeric());
        let assoc_right = min_length(3).and(max_length(10).and(alphanumeric()));
        prop_assert_eq!(assoc_left.validate(&s), assoc_right.validate(&s));
    }
}

// ============================================================================
// OR: passes iff either passes
// ============================================================================

proptest! {
    #[test]
    fn or_passes_iff_either_passes(s in ".{0,20}") {
        let a = min_length(5);
        let b = max_length(3);

        let a_ok = a.validate(&s).is_valid();
        let b_ok = b.validate(&s).is_valid();
        let combined = a.or(b).validate(&s);

        prop_assert_eq!(combined.is_valid(), a_ok || b_ok);
        if combined.is_valid() {
            prop_assert!(combined.errors().is_empty());
        }
    }
}

// ============================================================================
// NOT: inverts the verdict, substitutes the error
// ============================================================================

proptest! {
    #[test]
    fn not_inverts_verdict(s in ".{0,20}") {
        let v = min_length(5);
        let negated = min_length(5).not("negated");

        prop_assert_eq!(v.validate(&s).is_valid(), negated.validate(&s).is_invalid());
    }

    #[test]
    fn double_negation_restores_verdict(s in ".{0,20}") {
        let v = min_length(5);
        let double_neg = min_length(5).not("inner").not("outer");

        prop_assert_eq!(v.validate(&s).is_valid(), double_neg.validate(&s).is_valid());
    }

    #[test]
    fn not_error_is_exactly_the_supplied_one(s in ".{5,20}") {
        // min_length(1) passes for any non-empty input, so NOT always fires.
        let negated = min_length(1).not("fixed error");
        let result = negated.validate(&s);
        prop_assert_eq!(result.errors().len(), 1);
        prop_assert_eq!(result.errors()[0].message.as_ref(), "fixed error");
    }
}

// ============================================================================
// EACH: error count equals failing element count, indices line up
// ============================================================================

proptest! {
    #[test]
    fn each_reports_one_error_per_failing_element(xs in prop::collection::vec(any::<i64>(), 0..20)) {
        let v = in_range(0i64, 50i64).each();
        let result = v.validate(xs.as_slice());

        let failing = xs.iter().filter(|&&x| !(0..=50).contains(&x)).count();
        prop_assert_eq!(result.errors().len(), failing);

        for error in result.errors() {
            let index: usize = error.context("index").unwrap().parse().unwrap();
            prop_assert!(!(0..=50).contains(&xs[index]));
        }
    }
}

// ============================================================================
// ERROR EQUALITY: content-based, order-insensitive context
// ============================================================================

proptest! {
    #[test]
    fn error_equality_ignores_context_insertion_order(
        k1 in "[a-z]{1,8}",
        k2 in "[a-z]{1,8}",
        v1 in "[a-z0-9]{0,8}",
        v2 in "[a-z0-9]{0,8}",
    ) {
        prop_assume!(k1 != k2);
        let a = ValidError::new("same")
            .with_context(k1.clone(), v1.clone())
            .with_context(k2.clone(), v2.clone());
        let b = ValidError::new("same")
            .with_context(k2, v2)
            .with_context(k1, v1);
        prop_assert_eq!(a, b);
    }
}
