use serde_json::Value;

pub const REQUIRED_FIELDS: [&str; 3] = ["name", "email", "age"];

/// Age at or above which a submitter is classified `Senior`.
pub const SENIOR_AGE: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Senior,
    Junior,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Senior => "Senior",
            Status::Junior => "Junior",
        }
    }

    pub fn classify(age: &Value) -> Self {
        if numeric_value(age) >= SENIOR_AGE {
            Status::Senior
        } else {
            Status::Junior
        }
    }
}

/// A validated submission. Values are kept exactly as received so the
/// appended cells match the input (numbers stay numbers, form strings stay
/// strings).
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub name: Value,
    pub email: Value,
    pub age: Value,
}

impl Submission {
    /// Extract the required fields, rejecting the submission if any is
    /// missing or empty. Returns the names of the offending fields.
    pub fn from_value(raw: &Value) -> Result<Self, Vec<&'static str>> {
        let missing: Vec<&'static str> = REQUIRED_FIELDS
            .into_iter()
            .filter(|f| raw.get(f).is_none_or(is_blank))
            .collect();

        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(Submission {
            name: raw["name"].clone(),
            email: raw["email"].clone(),
            age: raw["age"].clone(),
        })
    }

    pub fn status(&self) -> Status {
        Status::classify(&self.age)
    }

    /// The four cells appended to the sheet: name, email, age, status.
    pub fn row(&self) -> Vec<Value> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.age.clone(),
            Value::String(self.status().as_str().to_string()),
        ]
    }
}

/// Falsy values count as "not provided": null, false, zero and the empty string.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_none_or(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Loose numeric coercion for age comparison, following the rules browsers
/// and Node apply to `value >= 60`. Anything that is not a number becomes
/// NaN, which never compares as `>= SENIOR_AGE`.
fn numeric_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::Bool(true) => 1.0,
        Value::Bool(false) | Value::Null => 0.0,
        Value::String(s) => string_to_number(s),
        // Arrays compare through their comma-joined text: [70] is 70, [1,2] is NaN.
        Value::Array(items) => string_to_number(&join_array(items)),
        Value::Object(_) => f64::NAN,
    }
}

fn join_array(items: &[Value]) -> String {
    items
        .iter()
        .map(|item| match item {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Array(inner) => join_array(inner),
            Value::Object(_) => "[object Object]".to_string(),
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// String-to-number conversion: surrounding whitespace is ignored, blank is
/// 0, `0x`/`0o`/`0b` literals are accepted, and only the exact spelling
/// `Infinity` (optionally signed) is infinite.
fn string_to_number(raw: &str) -> f64 {
    // NEL is whitespace to Rust but not here; BOM is the reverse.
    let s = raw.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}');
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&s[2..], radix);
    }

    // Rules out "inf", "nan" and friends that `f64::from_str` would accept.
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
    .unwrap_or(f64::NAN)
}
