use serde::{Deserialize, Serialize};

/// Decimals shown for table values.
pub const TABLE_DECIMALS: usize = 1;

/// One formatted data row, ready for direct rendering: category name, unit
/// label, two time-point values, and a growth-rate display string. `unit` is
/// optional because category sheets usually omit the redundant per-row unit
/// column; the filler inserts the band's shared unit label when absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RowRecord {
    pub name: String,
    #[serde(default)]
    pub unit: Option<String>,
    pub value_t0: String,
    pub value_t1: String,
    pub growth: String,
}

impl RowRecord {
    /// The fixed 5-field form a table row renders, with the shared unit
    /// label substituted when the record carries none.
    pub fn fields<'a>(&'a self, unit_label: &'a str) -> [&'a str; 5] {
        [
            &self.name,
            self.unit.as_deref().unwrap_or(unit_label),
            &self.value_t0,
            &self.value_t1,
            &self.growth,
        ]
    }

    /// Build a record from raw numeric values, formatting them the way the
    /// rendered tables expect.
    pub fn from_values(name: impl Into<String>, v0: f64, v1: f64, span_years: u32) -> Self {
        Self {
            name: name.into(),
            unit: None,
            value_t0: format_value(v0, TABLE_DECIMALS),
            value_t1: format_value(v1, TABLE_DECIMALS),
            growth: format_pct(cagr(v0, v1, span_years)),
        }
    }
}

/// Thousands-separated fixed-decimal display string; NaN renders empty.
pub fn format_value(x: f64, decimals: usize) -> String {
    if x.is_nan() {
        return String::new();
    }
    let fixed = format!("{x:.decimals$}");
    let (int_part, frac) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(d) => ("-", d),
        None => ("", int_part),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    match frac {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Compound annual growth rate in percent. None when the inputs cannot
/// produce a meaningful rate (non-positive values or a zero-year span).
pub fn cagr(v0: f64, v1: f64, span_years: u32) -> Option<f64> {
    if v0 <= 0.0 || v1 <= 0.0 || span_years == 0 {
        return None;
    }
    Some(((v1 / v0).powf(1.0 / span_years as f64) - 1.0) * 100.0)
}

/// One-decimal percent display string; None renders empty.
pub fn format_pct(p: Option<f64>) -> String {
    match p {
        Some(v) if !v.is_nan() => format!("{v:.1}%"),
        _ => String::new(),
    }
}

/// Normalize a free-form units description from a summary sheet into the
/// short label the tables show.
pub fn unit_label_from_summary(units: &str) -> String {
    let u = units.to_lowercase();
    if u.contains("million") {
        "Million US$".to_string()
    } else if u.contains("billion") {
        "Billion US$".to_string()
    } else {
        units.to_string()
    }
}
