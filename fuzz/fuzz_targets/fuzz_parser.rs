#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use jsonstack::{ParserOptions, parse, parse_bytes, parse_with_options, tokenize};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde_json::{Map, Value};

const HEADER: usize = 1; // depth byte

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

static WS_TABLE: &[&[u8]] = &[
    b" ",
    b"\t",
    b"\n",
    b"\r",
    "\u{00A0}".as_bytes(),
    "\u{1680}".as_bytes(),
    "\u{2000}".as_bytes(),
    "\u{2003}".as_bytes(),
    "\u{2009}".as_bytes(),
    "\u{2028}".as_bytes(),
    "\u{2029}".as_bytes(),
    "\u{202F}".as_bytes(),
    "\u{3000}".as_bytes(),
    "\u{FEFF}".as_bytes(),
];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8);

        let mut prefix = HEADER;
        let limit = max_size - prefix;
        prefix += append_whitespace(&mut data[prefix..], limit);
        let limit = max_size - prefix;
        prefix += append_object(&mut data[prefix..], size.max(16), limit);
        let limit = max_size - prefix;
        prefix += append_whitespace(&mut data[prefix..], limit);

        prefix
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Append up to eight whitespace code points to `buf` without exceeding
/// `limit`. Returns the number of bytes written.
fn append_whitespace(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        if limit == 0 {
            return 0;
        }

        let n_codepoints = rng.random_range(1..=limit.min(8));
        let mut written = 0;

        for _ in 0..n_codepoints {
            let w = WS_TABLE[rng.random_range(0..WS_TABLE.len())];
            if written + w.len() > limit {
                break;
            }

            buf[written..written + w.len()].copy_from_slice(w);
            written += w.len();
        }
        written
    })
}

/// Serialize an arbitrary object into `data`. Truncation at `limit` is
/// allowed; a cut-off document is still interesting input.
fn append_object(data: &mut [u8], size: usize, limit: usize) -> usize {
    let object = loop {
        let s = with_rng(|rng| rng.random_range(size / 2..size * 2));
        let bytes: Vec<u8> = with_rng(|rng| (0..s).map(|_| rng.random::<u8>()).collect());
        let mut u = arbitrary::Unstructured::new(&bytes);
        if let Ok(members) = Vec::<(String, ArbitraryValue)>::arbitrary(&mut u) {
            break Value::Object(Map::from_iter(members.into_iter().map(|(k, v)| (k, v.0))));
        }
    };

    let serialized = serde_json::to_vec(&object).expect("Failed to serialize arbitrary value");

    let len = serialized.len().min(limit);
    data[..len].copy_from_slice(&serialized[..len]);

    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug)]
struct ArbitraryValue(Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let value = match u.choose_index(21)? {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => {
                // Exponents are outside the accepted number grammar.
                let n: i32 = u.arbitrary()?;
                let scale: u8 = u.int_in_range(0..=3)?;
                let n = f64::from(n) / 10f64.powi(i32::from(scale));
                Value::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            3..=10 => Value::String(u.arbitrary()?),
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            16..=20 => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                Value::Object(Map::from_iter(m.into_iter().map(|(k, v)| (k, v.0))))
            }
            _ => Err(arbitrary::Error::IncorrectFormat)?,
        };
        Ok(ArbitraryValue(value))
    }
}

fn parser(data: &[u8]) {
    let Some((&depth, data)) = data.split_first() else {
        return;
    };

    let from_bytes = parse_bytes(data);
    let Ok(text) = std::str::from_utf8(data) else {
        assert!(from_bytes.is_err(), "invalid UTF-8 must be rejected");
        return;
    };
    let chars = text.chars().count();

    let result = parse(text);
    assert_eq!(result, from_bytes);
    assert_eq!(result, parse(text), "parsing is not deterministic");

    match &result {
        Ok(value) => assert!(value.is_object(), "root must be an object"),
        Err(err) => {
            if let Some(offset) = err.offset() {
                assert!(offset <= chars, "offset {offset} beyond {chars} chars");
            }
        }
    }

    let mut last = None;
    for token in tokenize(text) {
        assert!(token.offset < chars);
        assert!(last.is_none_or(|prev| prev < token.offset));
        last = Some(token.offset);
    }

    // A tighter depth limit can only turn success into failure.
    let options = ParserOptions {
        max_depth: usize::from(depth % 16),
    };
    if let Ok(value) = parse_with_options(text, options) {
        assert_eq!(Ok(value), result);
    }
}

fuzz_target!(|data: &[u8]| parser(data));
