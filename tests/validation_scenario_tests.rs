#![cfg(feature = "control")]
//! Scenario tests for accumulating validation.
//!
//! A price is checked by two independent rules. Composing the checks through
//! `ap` reports every rule that failed, in the order the `ap` calls were
//! chained.

use fantasia::control::{Either, NonEmptyVec, Validation};
use fantasia::typeclass::Catamorphism;
use rstest::rstest;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
struct Quote {
    with_tax: f64,
    discounted: f64,
}

impl fmt::Display for Quote {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:.2} taxed, {:.2} discounted", self.with_tax, self.discounted)
    }
}

fn parse(price: &str) -> Either<String, f64> {
    price
        .parse::<f64>()
        .map_err(|_| format!("{price} is not a number"))
        .into()
}

fn check_tax(price: f64) -> Validation<String, f64> {
    if price >= 5.0 {
        Validation::success(price * 1.2)
    } else {
        Validation::failure(format!("{price:.2} is below the taxable minimum"))
    }
}

fn check_discount(price: f64) -> Validation<String, f64> {
    if price >= 10.0 {
        Validation::success(price * 0.9)
    } else {
        Validation::failure(format!("{price:.2} is too cheap to discount"))
    }
}

fn quote(price: &str) -> Validation<String, Quote> {
    parse(price).to_validation().chain(|price| {
        let build = |with_tax: f64| move |discounted: f64| Quote { with_tax, discounted };
        Validation::of(build)
            .ap(check_tax(price))
            .ap(check_discount(price))
    })
}

#[rstest]
fn low_price_reports_both_failures_in_order() {
    let result = quote("2.00");
    assert_eq!(
        result,
        Validation::failures(NonEmptyVec::new(
            "2.00 is below the taxable minimum".to_string(),
            vec!["2.00 is too cheap to discount".to_string()],
        ))
    );
    assert_eq!(
        result.to_string(),
        "Failure(2.00 is below the taxable minimum, 2.00 is too cheap to discount)"
    );
}

#[rstest]
fn middle_price_reports_only_discount() {
    let errors = quote("7.50").errors().map(|errors| errors.join_with(" | "));
    assert_eq!(errors, Some("7.50 is too cheap to discount".to_string()));
}

#[rstest]
fn high_price_succeeds() {
    let result = quote("20");
    assert!(result.is_success());
    let quote = result.or_some(Quote { with_tax: 0.0, discounted: 0.0 });
    assert!((quote.with_tax - 24.0).abs() < 1e-9);
    assert!((quote.discounted - 18.0).abs() < 1e-9);
}

#[rstest]
fn high_price_renders_quote() {
    assert_eq!(quote("20").to_string(), "Success(24.00 taxed, 18.00 discounted)");
}

#[rstest]
fn unparsable_price_stops_before_checks() {
    let result = quote("abc");
    assert_eq!(result.errors().map(NonEmptyVec::len), Some(1));
    assert_eq!(result.to_string(), "Failure(abc is not a number)");
}

#[rstest]
fn success_of_function_with_two_failures_concatenates() {
    let combine = |a: i32| move |b: i32| a + b;
    let result = Validation::of(combine)
        .ap(Validation::<&str, i32>::failure("e1"))
        .ap(Validation::failure("e2"));
    assert_eq!(result, Validation::failures(NonEmptyVec::new("e1", vec!["e2"])));
}

#[rstest]
fn cata_joins_every_error() {
    let report = quote("2.00").cata(
        |quote| format!("{:.2}", quote.discounted),
        |errors| errors.join_with("; "),
    );
    assert_eq!(
        report,
        "2.00 is below the taxable minimum; 2.00 is too cheap to discount"
    );
}

#[rstest]
#[case(vec![], true)]
#[case(vec!["missing field"], false)]
fn try_failures_requires_an_error(#[case] errors: Vec<&str>, #[case] rejected: bool) {
    let result = Validation::<&str, i32>::try_failures(errors);
    assert_eq!(result.is_err(), rejected);
}
