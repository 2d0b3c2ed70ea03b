//! Inventory records and their derived fields.

use serde::Serialize;

/// Number of positional columns an inventory row maps onto.
pub const RECORD_COLUMNS: usize = 5;

/// Identity of a record: the `(nsn, description)` pair.
///
/// NSNs alone are not unique in source data, so selections and UI state are
/// keyed by both fields.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RecordKey {
    pub nsn: String,
    pub description: String,
}

impl RecordKey {
    pub fn new(nsn: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            nsn: nsn.into(),
            description: description.into(),
        }
    }
}

/// A single inventory line.
///
/// The raw fields are trimmed on construction and the derived fields
/// (`quantity_numeric`, `kits`, `search_index`) are computed once; there is no
/// way to mutate a record after it is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    nsn: String,
    description: String,
    unit_of_measure: String,
    quantity: String,
    quantity_numeric: f64,
    kits_raw: String,
    kits: Vec<String>,
    #[serde(skip)]
    search_index: String,
}

impl Record {
    pub fn new(
        nsn: &str,
        description: &str,
        unit_of_measure: &str,
        quantity: &str,
        kits_raw: &str,
    ) -> Self {
        let nsn = nsn.trim().to_string();
        let description = description.trim().to_string();
        let unit_of_measure = unit_of_measure.trim().to_string();
        let quantity = quantity.trim().to_string();
        let kits_raw = kits_raw.trim().to_string();

        let quantity_numeric = parse_quantity(&quantity);
        let kits = split_kits(&kits_raw);
        let search_index = format!(
            "{nsn} {description} {unit_of_measure} {quantity} {kits_raw}"
        )
        .to_lowercase();

        Self {
            nsn,
            description,
            unit_of_measure,
            quantity,
            quantity_numeric,
            kits_raw,
            kits,
            search_index,
        }
    }

    /// Builds a record from positional cells, padding missing columns with
    /// empty strings and ignoring any beyond the fifth.
    pub fn from_cells<S: AsRef<str>>(cells: &[S]) -> Self {
        let cell = |idx: usize| cells.get(idx).map_or("", |value| value.as_ref());
        let [nsn, description, unit_of_measure, quantity, kits_raw]: [&str; RECORD_COLUMNS] =
            std::array::from_fn(cell);
        Self::new(nsn, description, unit_of_measure, quantity, kits_raw)
    }

    pub fn nsn(&self) -> &str {
        &self.nsn
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn unit_of_measure(&self) -> &str {
        &self.unit_of_measure
    }

    /// Quantity text exactly as found in the source (trimmed).
    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    /// Numeric quantity; `0` when the text does not start with a number.
    pub fn quantity_numeric(&self) -> f64 {
        self.quantity_numeric
    }

    /// Raw semicolon-delimited kit membership.
    pub fn kits_raw(&self) -> &str {
        &self.kits_raw
    }

    pub fn kits(&self) -> &[String] {
        &self.kits
    }

    /// Lowercased text the free-text filter matches against.
    pub fn search_index(&self) -> &str {
        &self.search_index
    }

    /// True when the record has neither an NSN nor a description.
    pub fn is_blank(&self) -> bool {
        self.nsn.is_empty() && self.description.is_empty()
    }

    pub fn key(&self) -> RecordKey {
        RecordKey::new(self.nsn.clone(), self.description.clone())
    }

    /// Compares identity without allocating a [`RecordKey`].
    pub fn has_key(&self, nsn: &str, description: &str) -> bool {
        self.nsn == nsn && self.description == description
    }

    pub fn same_identity(&self, other: &Record) -> bool {
        self.has_key(&other.nsn, &other.description)
    }
}

/// Splits a kit membership string on `;`, trimming entries and dropping
/// empty ones. Order and duplicates are preserved.
pub fn split_kits(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|kit| !kit.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses the leading numeric portion of a quantity string.
///
/// Accepts an optional sign, digits with an optional fraction, and an optional
/// exponent; trailing text is ignored (`"10 EA"` is `10`). Anything without a
/// numeric prefix yields `0`, as does negative zero.
pub fn parse_quantity(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if text[end..].starts_with("Infinity") {
        let value = if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        return value;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    match text[..end].parse::<f64>() {
        Ok(value) if value.is_nan() || value == 0.0 => 0.0,
        Ok(value) => value,
        Err(_) => 0.0,
    }
}
