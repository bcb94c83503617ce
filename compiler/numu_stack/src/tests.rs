use super::*;

#[test]
fn passes_through_closure_value() {
    assert_eq!(ensure_sufficient_stack(|| 7 * 6), 42);
}

#[test]
fn passes_through_errors() {
    let result: Result<f64, String> = ensure_sufficient_stack(|| Err("division by zero".to_string()));
    assert_eq!(result, Err("division by zero".to_string()));
}

#[test]
fn nested_sum_recursion() {
    fn sum_to(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { n + sum_to(n - 1) })
    }

    assert_eq!(sum_to(100), 5050);
}

#[test]
fn very_deep_recursion_does_not_overflow() {
    // Deep enough to blow an 8MB stack without segment growth.
    fn count_down(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { count_down(n - 1) + 1 })
    }

    assert_eq!(count_down(200_000), 200_000);
}
