use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

/// An order acknowledgement. Generated per request and never stored.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub order_id: String,
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

impl Order {
    pub fn create(rng: &mut impl Rng) -> Self {
        Self {
            order_id: format!("ORD-{}", rng.gen_range(10_000..=99_999)),
            status: "created",
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn is_order_id(id: &str) -> bool {
        id.strip_prefix("ORD-")
            .map(|digits| digits.len() == 5 && digits.bytes().all(|b| b.is_ascii_digit()))
            .unwrap_or(false)
    }

    #[test]
    fn order_ids_have_five_digits() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let order = Order::create(&mut rng);
            assert!(is_order_id(&order.order_id), "bad id {}", order.order_id);
            assert_eq!(order.status, "created");
        }
    }

    #[test]
    fn leading_digit_is_never_zero() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1_000 {
            let order = Order::create(&mut rng);
            assert_ne!(order.order_id.as_bytes()[4], b'0');
        }
    }
}
