//! Generators for values that survive a trip through a JSON writer.
//!
//! Most generators keep to what the parser reads back unchanged: no escapes
//! in strings and no exponents in numbers. [`BackslashString`] is the
//! exception, for checking that escaped backslashes are kept as written.

use quickcheck::{Arbitrary, Gen};

use crate::{Array, Map, Value};

/// A key or string value with no quote, backslash or control character.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlainString(pub(crate) String);

impl Arbitrary for PlainString {
    fn arbitrary(g: &mut Gen) -> Self {
        let s = String::arbitrary(g)
            .chars()
            .filter(|c| *c >= ' ' && !matches!(c, '"' | '\\'))
            .collect();
        Self(s)
    }
}

/// A string with no quote or control character and a fair share of
/// backslashes, which a JSON writer doubles.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BackslashString(pub(crate) String);

impl Arbitrary for BackslashString {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut s = String::new();
        for c in String::arbitrary(g).chars().filter(|c| *c >= ' ' && *c != '"') {
            if bool::arbitrary(g) {
                s.push('\\');
            }
            s.push(c);
        }
        if bool::arbitrary(g) {
            s.push('\\');
        }
        Self(s)
    }
}

/// A finite number with at most two decimals, small enough to be written
/// without an exponent.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct PlainNumber(pub(crate) f64);

impl Arbitrary for PlainNumber {
    fn arbitrary(g: &mut Gen) -> Self {
        Self(f64::from(i32::arbitrary(g)) / 100.0)
    }
}

impl Arbitrary for Value {
    fn arbitrary(g: &mut Gen) -> Self {
        fn gen_val(g: &mut Gen, depth: usize) -> Value {
            let kinds = if depth == 0 { 4 } else { 6 };
            match usize::arbitrary(g) % kinds {
                0 => Value::Null,
                1 => Value::Boolean(bool::arbitrary(g)),
                2 => Value::Number(PlainNumber::arbitrary(g).0),
                3 => Value::String(PlainString::arbitrary(g).0),
                4 => {
                    let len = usize::arbitrary(g) % 4;
                    let mut vec = Array::new();
                    for _ in 0..len {
                        vec.push(gen_val(g, depth - 1));
                    }
                    Value::Array(vec)
                }
                _ => Value::Object(gen_map(g, depth - 1)),
            }
        }

        fn gen_map(g: &mut Gen, depth: usize) -> Map {
            let len = usize::arbitrary(g) % 4;
            let mut map = Map::new();
            for _ in 0..len {
                map.insert(PlainString::arbitrary(g).0, gen_val(g, depth));
            }
            map
        }

        let depth = usize::arbitrary(g) % 4;
        gen_val(g, depth)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Value::Array(items) => Box::new(items.clone().into_iter()),
            Value::Object(members) => Box::new(members.clone().into_values()),
            _ => quickcheck::empty_shrinker(),
        }
    }
}

/// Wraps any value in a one-member object, the only shape accepted at the top
/// level.
pub(crate) fn rooted(value: Value) -> Value {
    [("root", value)].into_iter().collect()
}
