use pretty_assertions::assert_eq;
use rstest::rstest;
use typegate_value::{Descriptor, ErrorKind, Hint, ToPrimitive, Value, ValueMap, ValueSet};

use crate::{HomArray, HomMap, HomSet, Homogeneous};

fn numbers(ns: &[i32]) -> Value {
	Value::array(ns.iter().copied().map(Value::from).collect())
}

#[test]
fn array_rejects_off_type_write() {
	let mut array = HomArray::new(numbers(&[1, 2, 3])).unwrap();
	let err = array.set(1, Value::from("x")).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::ArgType);
	assert!(err.message().contains("expected [Number], received [String]"), "got: {err}");
	assert_eq!(array.get(1), Some(&Value::from(2)));
}

#[test]
fn array_write_at_length_appends() {
	let mut array = HomArray::new(numbers(&[1, 2, 3])).unwrap();
	array.set(3, Value::from(4)).unwrap();
	assert_eq!(array.into_value(), numbers(&[1, 2, 3, 4]));
}

#[test]
fn array_rejects_gaps() {
	let mut array = HomArray::new(numbers(&[1, 2, 3])).unwrap();
	let err = array.set(5, Value::from(4)).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::ArgValue);
	assert_eq!(array.len(), 3);
}

#[test]
fn array_removes_only_last() {
	let mut array = HomArray::new(numbers(&[1, 2, 3])).unwrap();
	assert_eq!(array.remove(0).unwrap_err().kind(), ErrorKind::ArgValue);
	assert_eq!(array.remove(2).unwrap(), Value::from(3));
	assert_eq!(array.pop(), Some(Value::from(2)));
	assert_eq!(array.as_slice(), &[Value::from(1)]);
}

#[test]
fn array_push_checks_element() {
	let mut array = HomArray::new(numbers(&[1])).unwrap();
	array.push(Value::from(2)).unwrap();
	assert!(array.push(Value::Null).is_err());
	assert_eq!(array.iter().count(), 2);
}

#[rstest]
#[case(Value::array(vec![Value::from(1), Value::from("a")]))]
#[case(Value::array((0..9).map(|i| if i == 8 { Value::Null } else { Value::from(i) }).collect()))]
#[case(Value::array(vec![]))]
#[case(Value::from(1))]
fn array_construction_rejects(#[case] value: Value) {
	assert_eq!(HomArray::new(value).unwrap_err().kind(), ErrorKind::ArgType);
}

#[test]
fn empty_array_takes_explicit_element() {
	let mut array = HomArray::empty(Descriptor::String).unwrap();
	assert_eq!(array.descriptor().to_string(), "[String]");
	array.push(Value::from("a")).unwrap();
	assert!(array.push(Value::from(1)).is_err());
}

#[rstest]
#[case(Descriptor::Unknown)]
#[case(Descriptor::Undefined)]
#[case(Descriptor::NaN)]
#[case(Descriptor::Infinity)]
#[case(Descriptor::array_of(Descriptor::Unknown))]
fn empty_constructors_need_concrete_elements(#[case] element: Descriptor) {
	assert_eq!(HomArray::empty(element.clone()).unwrap_err().kind(), ErrorKind::ArgType);
	assert_eq!(HomSet::empty(element.clone()).unwrap_err().kind(), ErrorKind::ArgType);
	assert_eq!(HomMap::empty(Descriptor::String, element.clone()).unwrap_err().kind(), ErrorKind::ArgType);
	assert_eq!(HomMap::empty(element, Descriptor::String).unwrap_err().kind(), ErrorKind::ArgType);
}

#[test]
fn nested_element_descriptors_must_match() {
	let mut array = HomArray::new(Value::array(vec![numbers(&[1]), numbers(&[2, 3])])).unwrap();
	assert_eq!(array.element(), Some(&Descriptor::array_of(Descriptor::Number)));
	array.push(numbers(&[4])).unwrap();
	assert!(array.push(Value::array(vec![Value::from("x")])).is_err());
}

#[test]
fn map_checks_pair_descriptor() {
	let entries: ValueMap = [(Value::from("a"), Value::from(1))].into_iter().collect();
	let mut map = HomMap::new(Value::map(entries)).unwrap();
	assert_eq!(map.descriptor().to_string(), "Map<String, Number>");

	assert_eq!(map.set(Value::from("b"), Value::from(2)).unwrap(), None);
	assert_eq!(map.set(Value::from("a"), Value::from(3)).unwrap(), Some(Value::from(1)));
	let err = map.set(Value::from(1), Value::from(2)).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::ArgType);
	assert!(err.message().contains("received Map<Number, Number>"), "got: {err}");

	assert_eq!(map.remove(&Value::from("a")), Some(Value::from(3)));
	assert!(!map.contains_key(&Value::from("a")));
	assert_eq!(map.len(), 1);
}

#[test]
fn mixed_map_is_rejected() {
	let entries: ValueMap = [(Value::from("a"), Value::from(1)), (Value::from("b"), Value::from("c"))]
		.into_iter()
		.collect();
	assert_eq!(HomMap::new(Value::map(entries)).unwrap_err().kind(), ErrorKind::ArgType);
}

#[test]
fn set_checks_members() {
	let items: ValueSet = [Value::from(1), Value::from(2)].into_iter().collect();
	let mut set = HomSet::new(Value::set(items)).unwrap();
	assert!(set.add(Value::from(3)).unwrap());
	assert!(!set.add(Value::from(3)).unwrap());
	assert_eq!(set.add(Value::from("x")).unwrap_err().kind(), ErrorKind::ArgType);
	assert!(set.contains(&Value::from(1)));
	assert!(set.remove(&Value::from(1)));
	assert_eq!(set.len(), 2);
}

#[test]
fn empty_set_needs_explicit_element() {
	assert!(HomSet::new(Value::set(ValueSet::new())).is_err());
	let mut set = HomSet::empty(Descriptor::Boolean).unwrap();
	assert!(set.add(Value::from(true)).unwrap());
}

#[test]
fn wrap_chooses_by_variant() {
	let wrapped = Homogeneous::wrap(numbers(&[1, 2])).unwrap();
	assert!(matches!(wrapped, Homogeneous::Array(_)));
	assert_eq!(wrapped.len(), 2);

	let items: ValueSet = [Value::from("a")].into_iter().collect();
	assert!(matches!(Homogeneous::wrap(Value::set(items)).unwrap(), Homogeneous::Set(_)));

	let err = Homogeneous::wrap(Value::from("abc")).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::ArgType);
}

#[rstest]
#[case(Hint::Default)]
#[case(Hint::Number)]
#[case(Hint::String)]
fn wrappers_refuse_coercion(#[case] hint: Hint) {
	let wrapped = Homogeneous::wrap(numbers(&[1])).unwrap();
	let err = wrapped.to_primitive(hint).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::TypeCoercion);
	assert!(err.message().contains("HomArray [Number]"), "got: {err}");
	assert!(HomMap::empty(Descriptor::String, Descriptor::Number).unwrap().to_primitive(hint).is_err());
	assert!(HomSet::empty(Descriptor::Number).unwrap().to_primitive(hint).is_err());
}
