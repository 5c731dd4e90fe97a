use adt_prelude::{as_option, Err, Nothing, Ok, Option, Result, Some};
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, PartialEq)]
struct ValueError(&'static str);

#[test]
fn arithmetic_pipeline_reaches_eighty() {
    let outcome: Result<i32, &str> = Ok(100)
        .map(|x| x / 2)
        .and_then(|x| if x > 10 { Ok(x - 10) } else { Err("too small") })
        .map(|x| x * 2);
    assert_eq!(outcome, Ok(80));
}

#[test]
fn arithmetic_pipeline_stops_on_small_input() {
    let outcome: Result<i32, &str> = Ok(10)
        .map(|x| x / 2)
        .and_then(|x| if x > 10 { Ok(x - 10) } else { Err("too small") })
        .map(|x| x * 2);
    assert_eq!(outcome, Err("too small"));
}

#[test]
fn error_instance_survives_map() {
    let original = Rc::new(ValueError("bad"));
    let failed: Result<i32, Rc<ValueError>> = Err(Rc::clone(&original));

    let mapped = failed.map(|x| x * 2);
    assert!(mapped.is_err());

    let recovered = mapped.unwrap_err();
    assert!(Rc::ptr_eq(&original, &recovered));
    assert_eq!(*recovered, ValueError("bad"));
}

#[test]
fn error_instance_survives_long_chain() {
    let original = Rc::new(ValueError("bad"));
    let recovered = Err::<i32, _>(Rc::clone(&original))
        .map(|x| x + 1)
        .and_then(|x| Ok(x * 2))
        .and(Ok::<u8, _>(1))
        .inspect(|_| unreachable!("Err never yields a value"))
        .unwrap_err();
    assert!(Rc::ptr_eq(&original, &recovered));
}

#[test]
fn nothing_stays_nothing_through_map() {
    let missing: Option<i32> = Nothing;
    assert!(missing.map(|x| x * 2).is_nothing());
}

#[test]
fn option_chain_renders_a_float() {
    let rendered = Some(10)
        .and_then(|x| Some(f64::from(x) / 2.0))
        .and_then(|x| Some(format!("{x:?}")))
        .unwrap();
    assert_eq!(rendered, "5.0");
}

#[test]
fn error_type_conversion_goes_through_map_err() {
    #[derive(Debug, PartialEq)]
    enum AppError {
        Parse(String),
        Range(i64),
    }

    fn parse(input: &str) -> Result<i64, String> {
        Result::from(input.parse::<i64>()).map_err(|e| e.to_string())
    }

    fn check(value: i64) -> Result<i64, AppError> {
        if (0..=65_535).contains(&value) {
            Ok(value)
        } else {
            Err(AppError::Range(value))
        }
    }

    let port = parse("8080").map_err(AppError::Parse).and_then(check);
    assert_eq!(port, Ok(8080));

    let too_big = parse("70000").map_err(AppError::Parse).and_then(check);
    assert_eq!(too_big, Err(AppError::Range(70_000)));

    let garbage = parse("eighty").map_err(AppError::Parse).and_then(check);
    assert!(matches!(garbage, Err(AppError::Parse(_))));
}

#[test]
fn config_lookup_with_defaults() {
    let env: HashMap<&str, &str> = HashMap::from([("PORT", "9000"), ("HOST", "")]);
    let get = |key: &str| as_option(env.get(key).copied());

    let port = get("PORT")
        .and_then(|raw| as_option(raw.parse::<u16>().ok()))
        .unwrap_or(80);
    assert_eq!(port, 9000);

    let host = get("HOST").filter(|h| !h.is_empty()).unwrap_or("localhost");
    assert_eq!(host, "localhost");

    let missing = get("TIMEOUT").map_or(30, |raw| raw.len());
    assert_eq!(missing, 30);
}

#[test]
fn collecting_successes_and_failures() {
    let inputs = ["1", "two", "3", "four"];
    let parsed: Vec<Result<i32, String>> = inputs
        .iter()
        .map(|raw| Result::from(raw.parse::<i32>()).map_err(|_| format!("not a number: {raw}")))
        .collect();

    let values: Vec<i32> = parsed.iter().flat_map(|r| r.iter().copied()).collect();
    assert_eq!(values, vec![1, 3]);

    let errors: Vec<String> = parsed
        .into_iter()
        .filter(|r| r.is_err())
        .map(|r| r.unwrap_err())
        .collect();
    assert_eq!(errors, vec!["not a number: two", "not a number: four"]);
}
