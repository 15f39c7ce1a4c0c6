use serde::{Serialize, Serializer};

/// Catalog entry. Price is held in integer cents and rendered as a decimal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: i64,
    pub name: &'static str,
    #[serde(rename = "price", serialize_with = "cents_as_decimal")]
    pub price_cents: i64,
    pub stock: u32,
}

fn cents_as_decimal<S: Serializer>(cents: &i64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(*cents as f64 / 100.0)
}
