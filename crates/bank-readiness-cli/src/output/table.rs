use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{cell_text, is_record_list};

/// Format output as tables using the tabled crate.
///
/// Scalars and string lists go into one Field/Value table; every list of
/// records (recommended banks, breakdown, ...) gets its own titled table.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result(result);
                print_envelope_notes(map);
            } else {
                print_object(map);
            }
        }
        Value::Array(arr) => print_records(arr),
        _ => println!("{}", cell_text(value)),
    }
}

fn print_result(result: &Value) {
    match result {
        Value::Object(map) => print_object(map),
        Value::Array(arr) => print_records(arr),
        other => println!("{}", cell_text(other)),
    }
}

fn print_object(map: &Map<String, Value>) {
    let mut fields = Vec::new();
    let mut sections = Vec::new();
    flatten(map, "", &mut fields, &mut sections);

    if !fields.is_empty() {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in fields {
            builder.push_record([key, val]);
        }
        println!("{}", Table::from(builder));
    }

    for (title, records) in sections {
        println!("\n{}:", title);
        print_records(records);
    }
}

/// Split an object into dotted scalar rows and nested record lists.
fn flatten<'a>(
    map: &'a Map<String, Value>,
    prefix: &str,
    fields: &mut Vec<(String, String)>,
    sections: &mut Vec<(String, &'a [Value])>,
) {
    for (key, val) in map {
        let name = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match val {
            Value::Object(inner) => flatten(inner, &name, fields, sections),
            Value::Array(arr) if is_record_list(val) => sections.push((name, arr.as_slice())),
            _ => fields.push((name, cell_text(val))),
        }
    }
}

fn print_records(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(cell_text).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }

        println!("{}", Table::from(builder));
    } else {
        for (i, item) in arr.iter().enumerate() {
            println!("{:>3}. {}", i + 1, cell_text(item));
        }
    }
}

fn print_envelope_notes(envelope: &Map<String, Value>) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}
