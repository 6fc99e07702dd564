//! End-to-end behavior across the value, guard, registry and container crates.

use pretty_assertions::assert_eq;
use typegate::prelude::*;
use typegate::{CallHistory, Hint, Homogeneous, Switch, ToPrimitive};

fn guard() -> Guard {
	Guard::new(CallHistory::new()).with_switch(Switch::new(true))
}

fn numbers(ns: &[i32]) -> Value {
	Value::array(ns.iter().copied().map(Value::from).collect())
}

/// `append` over arrays and the `Sum` monoid, curried in its second argument.
fn append(sum: &typegate::ProductType) -> Overload {
	let append = Overload::new("append");
	append.register(
		"Array",
		Func::new("append", 1, |args| {
			let xs = args[0].as_array().unwrap_or_default().to_vec();
			Ok(Value::function("", 1, move |args| {
				let mut out = xs.clone();
				out.extend_from_slice(args[0].as_array().unwrap_or_default());
				Ok(Value::array(out))
			}))
		}),
	);
	let ty = sum.clone();
	append.register(
		"Sum",
		Func::new("append", 1, move |args| {
			let ty = ty.clone();
			let n = ty.run(&args[0])?.as_number().unwrap_or(f64::NAN);
			Ok(Value::function("", 1, move |args| {
				let m = ty.run(&args[0])?.as_number().unwrap_or(f64::NAN);
				Ok(ty.construct(Value::Number(n + m)))
			}))
		}),
	);
	append
}

#[test]
fn guarded_overload_appends_arrays_and_sums() {
	let guard = guard();
	let sum = declare_type("Sum").unwrap();
	let append = guard.wrap("append", append(&sum).as_func());

	let next = append.call(&[numbers(&[1])]).unwrap();
	assert_eq!(next.call(&[numbers(&[2])]).unwrap(), numbers(&[1, 2]));
	assert_eq!(guard.history().entries(), vec!["append([Number])"]);

	let total = append
		.call(&[sum.construct(Value::from(2))])
		.and_then(|next| next.call(&[sum.construct(Value::from(3))]))
		.unwrap();
	assert_eq!(sum.run(&total).unwrap(), Value::from(5));
	assert_eq!(guard.history().latest().as_deref(), Some("append(Sum<Number>)"));

	let err = append.call(&[Value::from("abc")]).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::Overload);
	assert!(err.message().contains("no instance of append for String"), "got: {err}");
}

#[test]
fn descriptors_of_mixed_and_long_arrays() {
	assert_eq!(describe(&numbers(&[1, 2, 3])).to_string(), "[Number]");
	assert_eq!(
		describe(&Value::array(vec![Value::from(1), Value::from("a")])).to_string(),
		"[Number, String]"
	);
	let mut long: Vec<Value> = (0..8_i32).map(Value::from).collect();
	long.push(Value::from("x"));
	assert_eq!(describe(&Value::array(long)).to_string(), "[?]");
}

#[test]
fn arity_and_type_checks() {
	let guard = guard();
	let add = guard.wrap(
		"add",
		Func::new("add", 2, |args| {
			let sum: f64 = args.iter().filter_map(Value::as_number).sum();
			Ok(if args.iter().all(|arg| arg.as_number().is_some()) {
				Value::Number(sum)
			} else {
				Value::Undefined
			})
		}),
	);
	assert_eq!(add.call(&[Value::from(1), Value::from(2)]).unwrap(), Value::from(3));
	assert_eq!(add.call(&[Value::from(1)]).unwrap_err().kind(), ErrorKind::Arity);
	assert_eq!(
		add.call(&[Value::from(1), Value::Number(f64::NAN)]).unwrap_err().kind(),
		ErrorKind::ArgType
	);
	assert_eq!(
		add.call(&[Value::from(1), Value::from("a")]).unwrap_err().kind(),
		ErrorKind::ReturnType
	);
}

#[test]
fn private_switch_off_passes_nan_through() {
	let switch = Switch::new(false);
	let guard = Guard::new(CallHistory::new()).with_switch(switch);
	let id = guard.wrap("id", Func::new("id", 1, |args| Ok(args[0].clone())));
	let out = id.call(&[Value::Number(f64::NAN)]).unwrap();
	assert!(out.as_number().is_some_and(f64::is_nan));
}

#[test]
fn history_after_fifteen_calls() {
	let guard = guard();
	let id = guard.wrap("id", Func::new("id", 1, |args| Ok(args[0].clone())));
	for i in 0..15 {
		id.call(&[numbers(&vec![0; i])]).unwrap();
	}
	let entries = guard.history().entries();
	assert_eq!(entries.len(), 10);
	assert_eq!(entries[0], "id([Number])");
}

#[test]
fn homogeneous_array_writes() {
	let mut array = HomArray::new(numbers(&[1, 2, 3])).unwrap();
	assert_eq!(array.set(1, Value::from("x")).unwrap_err().kind(), ErrorKind::ArgType);
	array.set(3, Value::from(4)).unwrap();
	assert_eq!(array.set(5, Value::from(4)).unwrap_err().kind(), ErrorKind::ArgValue);
	assert_eq!(array.into_value(), numbers(&[1, 2, 3, 4]));
}

#[test]
fn disciplined_values_refuse_coercion() {
	let wrapped = Homogeneous::wrap(numbers(&[1])).unwrap();
	assert_eq!(wrapped.to_primitive(Hint::String).unwrap_err().kind(), ErrorKind::TypeCoercion);
	let boxed = Value::from(Int::new(3.0).unwrap());
	assert_eq!(boxed.to_primitive(Hint::Number).unwrap_err().kind(), ErrorKind::TypeCoercion);
	assert_eq!(numbers(&[1, 2]).to_primitive(Hint::String).unwrap(), Value::from("1,2"));
}

#[test]
fn sum_type_match_through_the_guard() {
	let guard = guard();
	let shape = declare_sum("Shape", &["Circle", "Square"]).unwrap();
	let area = Record::new()
		.with(
			"Circle",
			Value::function("", 1, |args| Ok(Value::Number(3.0 * args[0].as_number().unwrap_or(f64::NAN).powi(2)))),
		)
		.with(
			"Square",
			Value::function("", 1, |args| Ok(Value::Number(args[0].as_number().unwrap_or(f64::NAN).powi(2)))),
		);
	let square = shape.case("Square", vec![Value::from(4)]).unwrap();
	assert_eq!(shape.match_on(&guard, &square, &area).unwrap(), Value::from(16));

	let partial = Record::new().with("Circle", Value::from(0));
	let err = shape.match_on(&guard, &square, &partial).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::ArgValue);
}
