//! Derived price computation.
//!
//! The displayed total of a service is always computed from its stored
//! parts and never persisted, so it cannot drift from its inputs. Every
//! call site (single service payloads, the public catalog, request
//! aggregation) goes through `compute_total`.

use crate::models::Service;

/// Computes the total price from base price, VAT percent, and discount.
///
/// `total = base + base * vat / 100 - discount`. The result is not
/// clamped; a discount larger than base plus VAT yields a negative total.
pub fn compute_total(base_price: f64, vat_percent: f64, discount_amount: f64) -> f64 {
    base_price + base_price * vat_percent / 100.0 - discount_amount
}

/// Computes the total price of a service record.
///
/// Missing VAT or discount values are treated as 0 so a sparsely
/// populated record still prices cleanly.
pub fn total_of(service: &Service) -> f64 {
    compute_total(
        service.base_price,
        service.vat_percent.unwrap_or(0.0),
        service.discount_amount.unwrap_or(0.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_compute_total_with_vat_and_discount() {
        // 50 + 50*15/100 - 5 = 52.5
        assert_eq!(compute_total(50.0, 15.0, 5.0), 52.5);
    }

    #[test]
    fn test_compute_total_defaults() {
        assert_eq!(compute_total(80.0, 0.0, 0.0), 80.0);
    }

    #[test]
    fn test_compute_total_negative_not_clamped() {
        // Discount exceeding base plus VAT is preserved as-is
        assert_eq!(compute_total(10.0, 0.0, 25.0), -15.0);
    }

    #[test]
    fn test_total_of_coerces_missing_parts() {
        let service = sample_service(120.0, None, None);
        assert_eq!(total_of(&service), 120.0);

        let service = sample_service(50.0, Some(15.0), Some(5.0));
        assert_eq!(total_of(&service), 52.5);
    }

    fn sample_service(
        base_price: f64,
        vat_percent: Option<f64>,
        discount_amount: Option<f64>,
    ) -> Service {
        let now = chrono::NaiveDateTime::default();
        Service {
            id: 1,
            provider_id: 1,
            category_id: 1,
            name: "Haircut".to_string(),
            base_price,
            vat_percent,
            discount_amount,
            image: None,
            created_at: now,
            updated_at: now,
        }
    }

    proptest! {
        #[test]
        fn prop_total_matches_formula(
            base in 0.0f64..100_000.0,
            vat in 0.0f64..100.0,
            discount in 0.0f64..100_000.0,
        ) {
            let total = compute_total(base, vat, discount);
            prop_assert_eq!(total, base + base * vat / 100.0 - discount);
        }

        #[test]
        fn prop_total_is_deterministic(
            base in 0.0f64..100_000.0,
            vat in 0.0f64..100.0,
            discount in 0.0f64..100_000.0,
        ) {
            prop_assert_eq!(
                compute_total(base, vat, discount),
                compute_total(base, vat, discount)
            );
        }

        #[test]
        fn prop_zero_vat_zero_discount_is_identity(base in 0.0f64..100_000.0) {
            prop_assert_eq!(compute_total(base, 0.0, 0.0), base);
        }
    }
}
