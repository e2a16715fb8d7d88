use serde_json::Value;
use std::io;

use super::{cell_text, is_record_list};

/// Write output as CSV to stdout.
///
/// A list of records becomes one row per record. Anything else becomes a
/// two-column field/value listing with nested keys dotted.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let body = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    match body {
        Value::Array(arr) => write_records(&mut wtr, arr),
        Value::Object(map) => {
            let _ = wtr.write_record(["field", "value"]);
            write_fields(&mut wtr, map, "");
        }
        _ => {
            let _ = wtr.write_record([&cell_text(body)]);
        }
    }

    let _ = wtr.flush();
}

fn write_fields(
    wtr: &mut csv::Writer<io::StdoutLock<'_>>,
    map: &serde_json::Map<String, Value>,
    prefix: &str,
) {
    for (key, val) in map {
        let name = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match val {
            Value::Object(inner) => write_fields(wtr, inner, &name),
            Value::Array(arr) if is_record_list(val) => {
                for (i, item) in arr.iter().enumerate() {
                    let _ = wtr.write_record([format!("{}.{}", name, i), cell_text(item)]);
                }
            }
            _ => {
                let _ = wtr.write_record([name, cell_text(val)]);
            }
        }
    }
}

fn write_records(wtr: &mut csv::Writer<io::StdoutLock<'_>>, arr: &[Value]) {
    if arr.is_empty() {
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
        let _ = wtr.write_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(*h).map(cell_text).unwrap_or_default())
                    .collect();
                let _ = wtr.write_record(&row);
            }
        }
    } else {
        for item in arr {
            let _ = wtr.write_record([&cell_text(item)]);
        }
    }
}
