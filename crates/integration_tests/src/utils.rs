use colored::Colorize;
use serde_json::Value;

/// Structural comparison of two JSON documents.
///
/// Object key order is irrelevant. Any path ending in one of `ignore_fields`
/// is skipped on both sides.
pub fn compare_json(actual: &Value, expected: &Value, ignore_fields: &[&str]) -> ComparisonResult {
    let mut differences = Vec::new();

    compare_json_recursive(actual, expected, ignore_fields, "", &mut differences);

    if differences.is_empty() {
        ComparisonResult::Match
    } else {
        ComparisonResult::Mismatch { differences }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Difference {
    ValueMismatch {
        path: String,
        expected: Value,
        actual: Value,
    },
    MissingField {
        path: String,
    },
    ExtraField {
        path: String,
    },
    ArrayLengthMismatch {
        path: String,
        expected_len: usize,
        actual_len: usize,
    },
}

impl Difference {
    pub fn path(&self) -> &str {
        match self {
            Difference::ValueMismatch { path, .. }
            | Difference::MissingField { path }
            | Difference::ExtraField { path }
            | Difference::ArrayLengthMismatch { path, .. } => path,
        }
    }
}

fn join_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn is_ignored(path: &str, ignore_fields: &[&str]) -> bool {
    ignore_fields.iter().any(|&field| path == field || path.ends_with(&format!(".{field}")))
}

fn compare_json_recursive(
    actual: &Value,
    expected: &Value,
    ignore_fields: &[&str],
    path: &str,
    differences: &mut Vec<Difference>,
) {
    match (actual, expected) {
        (Value::Object(actual_obj), Value::Object(expected_obj)) => {
            for (key, expected_val) in expected_obj.iter() {
                let current_path = join_path(path, key);
                if is_ignored(&current_path, ignore_fields) {
                    continue;
                }

                match actual_obj.get(key) {
                    Some(actual_val) => compare_json_recursive(
                        actual_val,
                        expected_val,
                        ignore_fields,
                        &current_path,
                        differences,
                    ),
                    None => differences.push(Difference::MissingField { path: current_path }),
                }
            }

            for key in actual_obj.keys() {
                let current_path = join_path(path, key);
                if !expected_obj.contains_key(key) && !is_ignored(&current_path, ignore_fields) {
                    differences.push(Difference::ExtraField { path: current_path });
                }
            }
        }
        (Value::Array(actual_arr), Value::Array(expected_arr)) => {
            if actual_arr.len() != expected_arr.len() {
                differences.push(Difference::ArrayLengthMismatch {
                    path: path.to_string(),
                    expected_len: expected_arr.len(),
                    actual_len: actual_arr.len(),
                });
            }

            // Overlapping elements are still compared when lengths differ
            for (i, (actual_val, expected_val)) in actual_arr.iter().zip(expected_arr).enumerate() {
                compare_json_recursive(
                    actual_val,
                    expected_val,
                    ignore_fields,
                    &format!("{}[{}]", path, i),
                    differences,
                );
            }
        }
        (Value::Number(actual_num), Value::Number(expected_num)) => {
            // 0.0 and 0 describe the same price; integers never go through f64
            let either_float = actual_num.is_f64() || expected_num.is_f64();
            let same = actual_num == expected_num
                || (either_float
                    && matches!(
                        (actual_num.as_f64(), expected_num.as_f64()),
                        (Some(a), Some(e)) if a == e
                    ));
            if !same {
                differences.push(Difference::ValueMismatch {
                    path: path.to_string(),
                    expected: expected.clone(),
                    actual: actual.clone(),
                });
            }
        }
        (actual_val, expected_val) => {
            if actual_val != expected_val {
                differences.push(Difference::ValueMismatch {
                    path: path.to_string(),
                    expected: expected_val.clone(),
                    actual: actual_val.clone(),
                });
            }
        }
    }
}

#[derive(Debug)]
pub enum ComparisonResult {
    Match,
    Mismatch { differences: Vec<Difference> },
}

impl ComparisonResult {
    pub fn is_match(&self) -> bool {
        matches!(self, ComparisonResult::Match)
    }

    pub fn differences(&self) -> &[Difference] {
        match self {
            ComparisonResult::Match => &[],
            ComparisonResult::Mismatch { differences } => differences,
        }
    }

    /// Colored report, one block per difference: `-` actual, `+` expected
    pub fn format_diff(&self, case: &str) -> String {
        let differences = self.differences();
        if differences.is_empty() {
            return String::new();
        }

        let mut output = Vec::new();
        output.push(format!("\n{}", "=".repeat(80).bright_white()));
        output.push(format!(
            "{} {}",
            "RECORD MISMATCH".bright_yellow().bold(),
            case.bright_white()
        ));
        output.push(format!("{}\n", "=".repeat(80).bright_white()));

        for diff in differences {
            output.push(format!("{}", diff.path().bright_cyan()));
            match diff {
                Difference::ValueMismatch { expected, actual, .. } => {
                    output.push(format!("- {}", inline(actual)).red().to_string());
                    output.push(format!("+ {}", inline(expected)).green().to_string());
                }
                Difference::MissingField { .. } => {
                    output.push("+ (missing from output)".green().to_string());
                }
                Difference::ExtraField { .. } => {
                    output.push("- (not in expected fixture)".red().to_string());
                }
                Difference::ArrayLengthMismatch {
                    expected_len,
                    actual_len,
                    ..
                } => {
                    output.push(format!("- length {}", actual_len).red().to_string());
                    output.push(format!("+ length {}", expected_len).green().to_string());
                }
            }
        }

        output.push(String::new());
        output.push(format!("{}", "=".repeat(80).bright_white()));
        output.push(format!(
            "{} {}",
            "Total differences:".bright_cyan().bold(),
            differences.len().to_string().bright_white()
        ));

        output.join("\n")
    }
}

fn inline(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}
