//! Tests for the calculator utility functions

use courtside::calc::{add, divide, multiply, subtract};

#[test]
fn test_add_returns_sum() {
    assert_eq!(add(2.0, 3.0), 5.0);
    assert_eq!(add(-2.0, 3.0), 1.0);
    assert_eq!(add(0.0, 0.0), 0.0);
}

#[test]
fn test_subtract_returns_difference() {
    assert_eq!(subtract(5.0, 3.0), 2.0);
    assert_eq!(subtract(3.0, 5.0), -2.0);
    assert_eq!(subtract(0.0, 0.0), 0.0);
}

#[test]
fn test_multiply_returns_product() {
    assert_eq!(multiply(2.0, 3.0), 6.0);
    assert_eq!(multiply(-2.0, 3.0), -6.0);
    assert_eq!(multiply(0.0, 5.0), 0.0);
}

#[test]
fn test_divide_returns_quotient() {
    assert_eq!(divide(6.0, 3.0).unwrap(), 2.0);
    assert_eq!(divide(-6.0, 3.0).unwrap(), -2.0);
    assert_eq!(divide(0.0, 5.0).unwrap(), 0.0);
}

#[test]
fn test_divide_by_zero_message_for_every_dividend() {
    for a in [-3.5, -1.0, 0.0, 1.0, 6.0, 1e12] {
        let err = divide(a, 0.0).unwrap_err();
        assert_eq!(err.to_string(), "Division by zero is not allowed.");
    }
}

#[test]
fn test_divide_round_trips_through_multiply() {
    let samples = [-7.5, -2.0, -0.5, 0.0, 1.0, 3.25, 144.0];
    for a in samples {
        for b in samples {
            if b == 0.0 {
                continue;
            }
            let quotient = divide(a, b).unwrap();
            assert!(
                (multiply(quotient, b) - a).abs() <= f64::EPSILON * a.abs().max(1.0),
                "divide({a}, {b}) * {b} != {a}"
            );
        }
    }
}

#[test]
fn test_add_and_multiply_are_commutative() {
    let samples = [-4.0, -0.5, 0.0, 2.0, 9.75];
    for a in samples {
        for b in samples {
            assert_eq!(add(a, b), add(b, a));
            assert_eq!(multiply(a, b), multiply(b, a));
        }
    }
}

#[test]
fn test_subtract_and_divide_are_not_commutative() {
    assert_ne!(subtract(5.0, 3.0), subtract(3.0, 5.0));
    assert_ne!(divide(6.0, 3.0).unwrap(), divide(3.0, 6.0).unwrap());
}
