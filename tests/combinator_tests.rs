#![cfg(feature = "combinator")]
//! Integration tests for the combinator primitives.

use std::cell::{Cell, RefCell};

use fnkit::combinator::{
    always, compose, constant, identity, invoke, invoke_all, invoker, negate, never, partial,
    resolve, resolver, try_invoke_all,
};
use fnkit::function::{BoxedFunction, Function};
use fnkit::functions;
use rstest::rstest;

fn join4(first: &str, second: &str, third: &str, fourth: &str) -> String {
    format!("{first}{second}{third}{fourth}")
}

// =============================================================================
// partial
// =============================================================================

#[rstest]
fn test_partial_without_bound_arguments() {
    assert_eq!(partial(join4, ()).call(("a", "b", "c", "d")), "abcd");
}

#[rstest]
fn test_partial_bound_arguments_precede_call_arguments() {
    assert_eq!(partial(join4, ("a",)).call(("b", "c", "d")), "abcd");
    assert_eq!(partial(join4, ("a", "b")).call(("c", "d")), "abcd");
    assert_eq!(partial(join4, ("a", "b", "c")).call(("d",)), "abcd");
    assert_eq!(partial(join4, ("a", "b", "c", "d")).call(()), "abcd");
}

#[rstest]
fn test_partial_of_partial() {
    let bind_one = partial(join4, ("a",));
    let bind_two = partial(bind_one, ("b",));
    assert_eq!(bind_two.call(("c", "d")), "abcd");
}

#[rstest]
fn test_partial_propagates_errors() {
    let checked_divide = |numerator: i32, denominator: i32| {
        numerator
            .checked_div(denominator)
            .ok_or("division by zero")
    };
    let divide_ten = partial(checked_divide, (10,));
    assert_eq!(divide_ten.call((2,)), Ok(5));
    assert_eq!(divide_ten.call((0,)), Err("division by zero"));
}

// =============================================================================
// compose
// =============================================================================

#[rstest]
fn test_compose_passes_all_arguments_to_inner() {
    let sum = |left: i32, right: i32| left + right;
    let describe = |total: i32| format!("total: {total}");
    assert_eq!(compose(describe, sum).call((2, 3)), "total: 5");
}

#[rstest]
fn test_compose_with_zero_argument_inner() {
    let seed = || 21;
    let double = |value: i32| value * 2;
    assert_eq!(compose(double, seed).call(()), 42);
}

#[rstest]
fn test_compose_nests() {
    let increment = |value: i32| value + 1;
    let double = |value: i32| value * 2;
    let pipeline = compose(increment, compose(double, identity()));
    assert_eq!(pipeline.call((5,)), 11);
}

// =============================================================================
// identity / constant / always / never
// =============================================================================

#[rstest]
fn test_identity_returns_argument() {
    assert_eq!(identity().call((vec![1, 2],)), vec![1, 2]);
}

#[rstest]
fn test_constant_is_captured_at_construction() {
    let mut source = String::from("before");
    let captured = constant(source.clone());
    source.push_str(" and after");

    assert_eq!(captured.call(()), "before");
    assert_eq!(captured.call((1, 2, 3)), "before");
}

#[rstest]
fn test_always_and_never_ignore_arguments() {
    assert!(always().call(()));
    assert!(always().call((true,)));
    assert!(always().call((false,)));
    assert!(!never().call(()));
    assert!(!never().call((true,)));
    assert!(!never().call((false,)));
}

// =============================================================================
// negate
// =============================================================================

#[rstest]
fn test_negate_values() {
    assert_eq!(negate(true), false);
    assert_eq!(negate(false), true);
}

#[rstest]
fn test_negate_constant() {
    assert!(!negate(always()).call(("anything",)));
}

// =============================================================================
// invoke / invoker / invoke_all
// =============================================================================

#[rstest]
fn test_invoke_calls_immediately() {
    let calls = Cell::new(0);
    let result = invoke(
        |value: i32| {
            calls.set(calls.get() + 1);
            value + 1
        },
        (1,),
    );
    assert_eq!(result, 2);
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn test_invoker_preserves_order() {
    let log = RefCell::new(Vec::new());
    let first = |first: i32, second: i32| log.borrow_mut().push(("first", first, second));
    let second = |first: i32, second: i32| log.borrow_mut().push(("second", first, second));
    let fan_out = invoker(functions![first, second]);

    fan_out.call((1, 2));
    fan_out.call((3, 4));

    assert_eq!(
        *log.borrow(),
        vec![("first", 1, 2), ("second", 1, 2), ("first", 3, 4), ("second", 3, 4)]
    );
}

#[rstest]
fn test_invoke_all_returns_last_result() {
    let order = RefCell::new(Vec::new());
    let steps: Vec<BoxedFunction<'_, (), &str>> = functions![
        || {
            order.borrow_mut().push(1);
            "one"
        },
        || {
            order.borrow_mut().push(2);
            "two"
        },
    ];
    assert_eq!(invoke_all(steps), Some("two"));
    assert_eq!(*order.borrow(), vec![1, 2]);
}

#[rstest]
fn test_invoker_returns_first_error_and_skips_the_rest() {
    let log = RefCell::new(Vec::new());
    let validators: Vec<BoxedFunction<'_, (i32,), Result<(), String>>> = functions![
        |value: i32| {
            log.borrow_mut().push("sign");
            if value < 0 { Err(format!("{value} is negative")) } else { Ok(()) }
        },
        |value: i32| {
            log.borrow_mut().push("range");
            if value > 100 { Err(format!("{value} is too large")) } else { Ok(()) }
        },
    ];
    let validate = invoker(validators);

    assert_eq!(validate.call((-1,)), Err("-1 is negative".to_string()));
    assert_eq!(*log.borrow(), vec!["sign"]);

    assert_eq!(validate.call((50,)), Ok(()));
    assert_eq!(*log.borrow(), vec!["sign", "sign", "range"]);
}

#[rstest]
#[case(vec![Ok(1), Ok(2)], Ok(Some(2)))]
#[case(vec![Ok(1), Err("second"), Err("third")], Err("second"))]
#[case(vec![], Ok(None))]
fn test_try_invoke_all_results(
    #[case] results: Vec<Result<i32, &'static str>>,
    #[case] expected: Result<Option<i32>, &'static str>,
) {
    let calls = Cell::new(0);
    let steps: Vec<BoxedFunction<'_, (), Result<i32, &str>>> = results
        .into_iter()
        .map(|result| {
            let calls = &calls;
            BoxedFunction::new(move || {
                calls.set(calls.get() + 1);
                result
            })
        })
        .collect();
    let expected_calls = match expected {
        Err(_) => 2,
        Ok(Some(_)) => 2,
        Ok(None) => 0,
    };

    assert_eq!(try_invoke_all(steps), expected);
    assert_eq!(calls.get(), expected_calls);
}

// =============================================================================
// resolve / resolver
// =============================================================================

#[rstest]
fn test_resolve_values_and_functions() {
    assert_eq!(resolve(&constant("value"), ("ignored",)), "value");
    assert_eq!(resolve(&|text: &str| text.len(), ("four",)), 4);
}

#[rstest]
fn test_resolver_with_abc() {
    let resolve_abc = resolver(("a", "b", "c"));

    assert!(resolve_abc.call((true,)));
    assert!(!resolve_abc.call((false,)));
    assert!(resolve_abc.call((|a: &str, b: &str, c: &str| a == "a" && b == "b" && c == "c",)));
    assert!(!resolve_abc.call((|_: &str, _: &str, _: &str| false,)));
}
