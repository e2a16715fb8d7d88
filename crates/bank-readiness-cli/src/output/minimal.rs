use serde_json::Value;

use super::cell_text;

/// Print just the headline answer.
///
/// Risk results print as `category (score)`, bank lists as their codes,
/// guidance as one item per line. Falls back to the first field.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    // a full report leads with its risk block
    let result_obj = result_obj.get("risk").unwrap_or(result_obj);

    if let Some(line) = risk_line(result_obj) {
        println!("{}", line);
        return;
    }

    if let Value::Object(map) = result_obj {
        let priority_keys = ["band", "code", "recommended", "required_documents", "interview_guidance"];
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    print_value(val);
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, cell_text(val));
            return;
        }
    }

    print_value(result_obj);
}

fn risk_line(value: &Value) -> Option<String> {
    let category = value.get("category")?.as_str()?;
    let score = value.get("score")?.as_u64()?;
    Some(format!("{} ({})", category, score))
}

fn print_value(value: &Value) {
    match value {
        Value::Array(arr) => {
            for item in arr {
                match item.get("bank_code").or_else(|| item.get("code")) {
                    Some(code) => println!("{}", cell_text(code)),
                    None => println!("{}", cell_text(item)),
                }
            }
        }
        other => println!("{}", cell_text(other)),
    }
}
