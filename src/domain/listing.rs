use serde::{Deserialize, Deserializer, Serialize};

/// One byproduct lot offered on the marketplace, as stored in the
/// `byproducts` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub material: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_material: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub routing: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub distance: String,
    #[serde(rename = "rawVolume", default, deserialize_with = "null_as_default")]
    pub raw_volume: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_inr: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
}

/// Nullable columns come back as JSON `null`; read those as empty.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Listing {
    /// Name shown on cards and map popups: the custom override wins.
    pub fn display_name(&self) -> &str {
        match self.custom_material.as_deref() {
            Some(custom) if !custom.is_empty() => custom,
            _ => &self.material,
        }
    }

    /// Price used for ordering; absent prices sort as zero.
    pub fn price_or_zero(&self) -> f64 {
        self.price_inr.unwrap_or(0.0)
    }
}

/// Insert payload. Only these four columns are written by a submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewListing {
    pub material: String,
    pub routing: String,
    pub distance: String,
    #[serde(rename = "rawVolume")]
    pub raw_volume: f64,
}

/// Format a quantity the way the dashboard prints numbers: no trailing
/// zeros, so `12.0` renders as `12`.
pub fn format_quantity(value: f64) -> String {
    format!("{value}")
}

/// Thousands-separated rupee amount, e.g. `12500` -> `12,500`.
pub fn format_inr(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    let whole = rounded.trunc().abs() as u64;
    let cents = ((rounded.abs() - rounded.abs().trunc()) * 100.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded < 0.0 { "-" } else { "" };
    match cents {
        0 => format!("{sign}{grouped}"),
        c if c % 10 == 0 => format!("{sign}{grouped}.{}", c / 10),
        c => format!("{sign}{grouped}.{c:02}"),
    }
}
