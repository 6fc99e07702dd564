use super::*;
use crate::ErrorKind;

#[test]
fn tags_follow_constructors() {
	assert_eq!(Value::from(1).tag(), "Number");
	assert_eq!(Value::array(vec![]).tag(), "Array");
	assert_eq!(Value::record(Record::new()).tag(), "Object");
	assert_eq!(Value::map(ValueMap::new()).tag(), "Map");
	assert_eq!(Value::object(Object::new("Sum", Record::new())).tag(), "Sum");
	assert_eq!(Value::function("append", 1, |_| Ok(Value::Null)).tag(), "append");
}

#[test]
fn same_value_zero_equates_nan() {
	assert!(same_value_zero(&Value::Number(f64::NAN), &Value::Number(f64::NAN)));
	assert!(same_value_zero(&Value::Number(0.0), &Value::Number(-0.0)));
	assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
}

#[test]
fn record_insert_replaces_in_place() {
	let mut record = Record::new().with("a", Value::from(1)).with("b", Value::from(2));
	assert_eq!(record.insert("a", Value::from(3)), Some(Value::from(1)));
	assert_eq!(record.keys().collect::<Vec<_>>(), vec!["a", "b"]);
	assert_eq!(record.get("a"), Some(&Value::from(3)));
	assert_eq!(record.remove("a"), Some(Value::from(3)));
	assert_eq!(record.len(), 1);
}

#[test]
fn map_and_set_dedupe_by_same_value_zero() {
	let mut set = ValueSet::new();
	assert!(set.insert(Value::Number(f64::NAN)));
	assert!(!set.insert(Value::Number(f64::NAN)));
	assert_eq!(set.len(), 1);

	let mut map = ValueMap::new();
	map.insert(Value::from("k"), Value::from(1));
	assert_eq!(map.insert(Value::from("k"), Value::from(2)), Some(Value::from(1)));
	assert_eq!(map.get(&Value::from("k")), Some(&Value::from(2)));
	assert_eq!(map.len(), 1);
}

#[test]
fn symbols_compare_by_identity() {
	let a = Symbol::new("s");
	let b = Symbol::new("s");
	assert_eq!(a, a.clone());
	assert_ne!(a, b);
}

#[test]
fn calling_non_function_is_arg_type_error() {
	let err = Value::from(1).call(&[]).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::ArgType);
}

#[test]
fn display_mimics_implicit_string_conversion() {
	assert_eq!(Value::Number(1.0).to_string(), "1");
	assert_eq!(Value::Number(f64::NEG_INFINITY).to_string(), "-Infinity");
	let arr = Value::array(vec![Value::from(1), Value::Null, Value::from("x")]);
	assert_eq!(arr.to_string(), "1,,x");
}

#[test]
fn trail_is_hidden_until_attached() {
	let func = Func::new("f", 0, |_| Ok(Value::Null));
	assert!(func.call_trail().is_none());
	assert!(!func.is_guarded());
	let traced = func.with_trail(vec!["f()".to_owned()].into());
	assert_eq!(traced.call_trail(), Some(&["f()".to_owned()][..]));
	assert!(traced.is_guarded());
}
