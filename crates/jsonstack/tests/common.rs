#![allow(missing_docs)]
#![allow(dead_code)]
#![allow(clippy::needless_raw_string_hashes)]

use core::fmt::Write;

use jsonstack::Value;

pub const ORIGINAL: &str = r#"
{
    "moderation": {
        "decision": "allow",
        "reason": null
    },
    "request": {
        "filename": "example.rs",
        "language": "rust",
        "options": {
            "opt_level": "2",
            "features": [
                "serde",
                "tokio"
            ]
        }
    },
    "snippets": [
        "fn main() {}",
        "println!(\"hi\")"
    ],
    "entities": [
        {
            "type": "function",
            "name": "main"
        },
        {
            "type": "macro",
            "name": "println"
        }
    ],
    "matrix": [
        [
            "a"
        ]
    ],
    "mixed": [
        "s",
        {
            "k": "v"
        },
        "t",
        [
            "u"
        ],
        "end"
    ],
    "trailing": {
        "status": "ok"
    },
    "object_in_array_last": [
        {
            "a": 1
        }
    ],
    "nested_objects": {
        "outer": {
            "inner": 1
        }
    }
}"#;

#[rustfmt::skip]
pub const COMPACT: &str = r#"{"moderation":{"decision":"allow","reason":null},"request":{"filename":"example.rs","language":"rust","options":{"opt_level":"2","features":["serde","tokio"]}},"snippets":["fn main() {}","println!(\"hi\")"],"entities":[{"type":"function","name":"main"},{"type":"macro","name":"println"}],"matrix":[["a"]],"mixed":["s",{"k":"v"},"t",["u"],"end"],"trailing":{"status":"ok"},"object_in_array_last":[{"a":1}],"nested_objects":{"outer":{"inner":1}}}"#;

/// One `path = scalar` line per leaf, in document order. Empty containers
/// print as `[]` / `{}`.
pub fn flatten(value: &Value) -> String {
    fn walk(value: &Value, path: &mut String, out: &mut Vec<String>) {
        let len = path.len();
        match value {
            Value::Object(members) if !members.is_empty() => {
                for (key, child) in members {
                    write!(path, "/{key}").unwrap();
                    walk(child, path, out);
                    path.truncate(len);
                }
            }
            Value::Array(items) if !items.is_empty() => {
                for (idx, child) in items.iter().enumerate() {
                    write!(path, "/{idx}").unwrap();
                    walk(child, path, out);
                    path.truncate(len);
                }
            }
            leaf => {
                let rendered = match leaf {
                    Value::Null => "null".to_string(),
                    Value::Boolean(b) => b.to_string(),
                    Value::Number(n) => n.to_string(),
                    Value::String(s) => format!("\"{s}\""),
                    Value::Array(_) => "[]".to_string(),
                    Value::Object(_) => "{}".to_string(),
                };
                out.push(format!("{path} = {rendered}"));
            }
        }
    }

    let mut out = Vec::new();
    walk(value, &mut String::new(), &mut out);
    out.join("\n")
}
