use movie_tickets::prelude::*;
use proptest::prelude::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}

fn movie_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,20}"
}

proptest! {
    #[test]
    fn test_positive_sale_is_valid(
        name in movie_name(),
        count in 1..=10_000i32,
        price in 0.01f64..10_000.0,
    ) {
        prop_assert!(validate(&TicketSale::new(name, count, price)));
    }

    #[test]
    fn test_non_positive_price_is_invalid(
        name in movie_name(),
        count in any::<i32>(),
        price in -10_000.0f64..=0.0,
    ) {
        prop_assert!(!validate(&TicketSale::new(name, count, price)));
    }

    #[test]
    fn test_non_positive_count_is_invalid(
        name in movie_name(),
        count in i32::MIN..=0,
        price in any::<f64>(),
    ) {
        prop_assert!(!validate(&TicketSale::new(name, count, price)));
    }

    #[test]
    fn test_blank_name_is_invalid(
        name in "[ \t\n]{0,8}",
        count in any::<i32>(),
        price in any::<f64>(),
    ) {
        prop_assert!(!validate(&TicketSale::new(name, count, price)));
    }

    #[test]
    fn test_total_adds_fourteen_percent(
        count in 1..=10_000i32,
        price in 0.01f64..10_000.0,
    ) {
        let expected = f64::from(count) * price * 1.14;
        prop_assert!(approx(compute_total(count, price), expected));
    }
}

#[test]
fn test_vat_rate_is_fourteen_percent() {
    assert_eq!(VAT_RATE, 0.14);
}
