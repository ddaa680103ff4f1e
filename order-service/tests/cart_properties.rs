use catalog_service::{Catalog, MedicineRecord};
use order_service::{Cart, OrderError, OrderHistory, OrderStatus, PaymentMethod, PricingPolicy};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn catalog_records() -> Vec<MedicineRecord> {
    Catalog::new().all().to_vec()
}

fn arb_medicine() -> impl Strategy<Value = MedicineRecord> {
    proptest::sample::select(catalog_records())
}

fn arb_lines() -> impl Strategy<Value = Vec<(MedicineRecord, i64)>> {
    proptest::collection::vec((arb_medicine(), 1i64..20), 0..12)
}

proptest! {
    #[test]
    fn prop_adding_twice_sums_quantities(medicine in arb_medicine(), a in 1i64..100, b in 1i64..100) {
        let mut cart = Cart::new();
        cart.add_line(&medicine, a);
        cart.add_line(&medicine, b);
        prop_assert_eq!(cart.len(), 1);
        prop_assert_eq!(i64::from(cart.quantity_of(&medicine.id)), a + b);
    }

    #[test]
    fn prop_non_positive_quantity_removes(lines in arb_lines(), medicine in arb_medicine(), q in -50i64..=0) {
        let mut cart = Cart::new();
        for (m, qty) in &lines {
            cart.add_line(m, *qty);
        }
        cart.add_line(&medicine, 1);
        let before = cart.len();

        prop_assert!(cart.set_quantity(&medicine.id, q));
        prop_assert_eq!(cart.quantity_of(&medicine.id), 0);
        prop_assert_eq!(cart.len(), before - 1);
    }

    #[test]
    fn prop_lines_are_unique_and_positive(lines in arb_lines()) {
        let mut cart = Cart::new();
        for (m, qty) in &lines {
            cart.add_line(m, *qty);
        }
        let mut ids: Vec<&str> = cart.lines().iter().map(|l| l.medicine.id.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), total);
        prop_assert!(cart.lines().iter().all(|l| l.quantity >= 1));
    }

    #[test]
    fn prop_delivery_fee_rule(lines in arb_lines()) {
        let pricing = PricingPolicy::default();
        let mut cart = Cart::new();
        for (m, qty) in &lines {
            cart.add_line(m, *qty);
        }
        let totals = cart.compute_totals(&pricing);
        let subtotal: Decimal = cart
            .lines()
            .iter()
            .map(|l| l.medicine.price * Decimal::from(l.quantity))
            .sum();

        prop_assert_eq!(totals.subtotal, subtotal);
        let expected_fee = if subtotal > Decimal::from(50) { Decimal::ZERO } else { Decimal::from(5) };
        prop_assert_eq!(totals.delivery_fee, expected_fee);
        prop_assert_eq!(totals.total, totals.subtotal + totals.delivery_fee);
    }

    #[test]
    fn prop_checkout_total_matches_totals(lines in arb_lines(), medicine in arb_medicine()) {
        let pricing = PricingPolicy::default();
        let mut cart = Cart::new();
        for (m, qty) in &lines {
            cart.add_line(m, *qty);
        }
        cart.add_line(&medicine, 1);
        let expected = cart.compute_totals(&pricing).total;
        let item_count = cart.item_count();

        let order = cart.checkout("guest", "42 Elm Street", PaymentMethod::Card, &pricing).unwrap();
        prop_assert_eq!(order.total_amount, expected);
        prop_assert_eq!(order.item_count(), item_count);
        prop_assert_eq!(order.status, OrderStatus::Confirmed);
        prop_assert!(cart.is_empty());
    }
}

#[test]
fn test_empty_checkout_creates_no_order() {
    let pricing = PricingPolicy::default();
    let mut cart = Cart::new();
    let mut history = OrderHistory::new();

    if let Ok(order) = cart.checkout("guest", "1 Road", PaymentMethod::Card, &pricing) {
        history.append(order);
    }
    assert!(history.is_empty());
    assert_eq!(
        cart.checkout("guest", "1 Road", PaymentMethod::Card, &pricing),
        Err(OrderError::EmptyCart)
    );
}

#[test]
fn test_single_line_checkout() {
    let catalog = Catalog::new();
    let pricing = PricingPolicy::default();
    let mut cart = Cart::new();
    cart.add_line(catalog.get("med-101").unwrap(), 1);

    let totals = cart.compute_totals(&pricing);
    assert_eq!(totals.subtotal, Decimal::new(1299, 2));
    assert_eq!(totals.delivery_fee, Decimal::from(5));

    let order = cart.checkout("1", "123 Main St", PaymentMethod::CashOnDelivery, &pricing).unwrap();
    assert_eq!(order.total_amount, Decimal::new(1799, 2));
    assert_eq!(order.payment_method, PaymentMethod::CashOnDelivery);
    assert!(cart.is_empty());

    let mut history = OrderHistory::new();
    history.append(order.clone());
    assert_eq!(history.get(&order.id), Some(&order));
    assert_eq!(history.latest(), Some(&order));
}

#[test]
fn test_free_delivery_above_threshold() {
    let catalog = Catalog::new();
    let pricing = PricingPolicy::default();
    let mut cart = Cart::new();
    cart.add_line(catalog.get("med-101").unwrap(), 4);

    let totals = cart.compute_totals(&pricing);
    assert_eq!(totals.subtotal, Decimal::new(5196, 2));
    assert_eq!(totals.delivery_fee, Decimal::ZERO);
    assert_eq!(totals.total, totals.subtotal);
}

#[test]
fn test_payment_method_tags() {
    assert_eq!("card".parse::<PaymentMethod>().unwrap(), PaymentMethod::Card);
    assert_eq!(" COD ".parse::<PaymentMethod>().unwrap(), PaymentMethod::CashOnDelivery);
    assert!("bitcoin".parse::<PaymentMethod>().is_err());
    assert_eq!(
        serde_json::to_string(&PaymentMethod::CashOnDelivery).unwrap(),
        "\"cod\""
    );
}
