use chrono::NaiveDate;
use shared::CustomerRegion;

use super::*;

fn item(category: &str, quantity: u32, unit_price: f64) -> OrderItem {
    OrderItem {
        product_id: "prod-1".to_string(),
        product_name: "Test Product".to_string(),
        category: category.to_string(),
        quantity,
        unit_price,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// A Monday in June: no Black Friday, no holiday
fn regular_date() -> NaiveDate {
    date(2025, 6, 16)
}

// ========================================================================
// Subtotal
// ========================================================================

#[test]
fn test_subtotal_single_item() {
    let items = vec![item("general", 2, 50.0)];
    let result = compute_pricing(&items, CustomerRegion::Us, regular_date());
    assert_eq!(result.subtotal, 100.0);
}

#[test]
fn test_subtotal_multiple_items() {
    let items = vec![item("general", 2, 50.0), item("general", 3, 30.0)];
    let result = compute_pricing(&items, CustomerRegion::Us, regular_date());
    assert_eq!(result.subtotal, 190.0);
}

#[test]
fn test_empty_items_yield_zero_totals() {
    let result = compute_pricing(&[], CustomerRegion::Europe, regular_date());
    assert_eq!(result.subtotal, 0.0);
    assert!(result.discount.is_none());
    assert_eq!(result.discount_amount, 0.0);
    assert_eq!(result.region_adjustment, 0.0);
    assert_eq!(result.final_total, 0.0);
}

// ========================================================================
// Volume discounts
// ========================================================================

#[test]
fn test_no_discount_below_five_units() {
    let items = vec![item("general", 4, 100.0)];
    let result = compute_pricing(&items, CustomerRegion::Us, regular_date());
    assert!(result.discount.is_none());
    assert_eq!(result.discount_amount, 0.0);
}

#[test]
fn test_volume_5_plus() {
    let items = vec![item("general", 5, 100.0)];
    let result = compute_pricing(&items, CustomerRegion::Us, regular_date());

    let discount = result.discount.unwrap();
    assert_eq!(discount.discount_type, DiscountType::Volume5Plus);
    assert_eq!(discount.percentage, 10.0);
    assert_eq!(result.discount_amount, 50.0);
}

#[test]
fn test_volume_10_plus() {
    let items = vec![item("general", 10, 100.0)];
    let result = compute_pricing(&items, CustomerRegion::Us, regular_date());

    let discount = result.discount.unwrap();
    assert_eq!(discount.discount_type, DiscountType::Volume10Plus);
    assert_eq!(discount.percentage, 20.0);
    assert_eq!(result.discount_amount, 200.0);
}

#[test]
fn test_volume_50_plus() {
    let items = vec![item("general", 50, 100.0)];
    let result = compute_pricing(&items, CustomerRegion::Us, regular_date());

    let discount = result.discount.unwrap();
    assert_eq!(discount.discount_type, DiscountType::Volume50Plus);
    assert_eq!(discount.percentage, 30.0);
    assert_eq!(result.discount_amount, 1500.0);
}

#[test]
fn test_quantity_sums_across_lines() {
    // 3 + 3 = 6 units total -> 10% tier
    let items = vec![item("general", 3, 100.0), item("general", 3, 100.0)];
    let result = compute_pricing(&items, CustomerRegion::Us, regular_date());

    let discount = result.discount.unwrap();
    assert_eq!(discount.discount_type, DiscountType::Volume5Plus);
}

// ========================================================================
// Black Friday
// ========================================================================

#[test]
fn test_black_friday_dates() {
    assert_eq!(black_friday(2024), date(2024, 11, 29));
    assert_eq!(black_friday(2025), date(2025, 11, 28));
    assert_eq!(black_friday(2026), date(2026, 11, 27));
}

#[test]
fn test_earlier_november_friday_is_not_black_friday() {
    // 2025-11-21 is a Friday, but not the last one
    assert!(!is_black_friday(date(2025, 11, 21)));
    assert!(is_black_friday(date(2025, 11, 28)));
}

#[test]
fn test_black_friday_discount() {
    let items = vec![item("general", 1, 100.0)];
    let result = compute_pricing(&items, CustomerRegion::Us, date(2025, 11, 28));

    let discount = result.discount.unwrap();
    assert_eq!(discount.discount_type, DiscountType::BlackFriday);
    assert_eq!(discount.percentage, 25.0);
    assert_eq!(result.discount_amount, 25.0);
    assert_eq!(result.final_total, 75.0);
}

#[test]
fn test_black_friday_beats_small_volume_discount() {
    // 5 units would give 10%, Black Friday gives 25%
    let items = vec![item("general", 5, 100.0)];
    let result = compute_pricing(&items, CustomerRegion::Us, date(2025, 11, 28));

    let discount = result.discount.unwrap();
    assert_eq!(discount.discount_type, DiscountType::BlackFriday);
}

#[test]
fn test_large_volume_discount_beats_black_friday() {
    // 50 units give 30%, which outranks Black Friday's 25%
    let items = vec![item("general", 50, 100.0)];
    let result = compute_pricing(&items, CustomerRegion::Us, date(2025, 11, 28));

    let discount = result.discount.unwrap();
    assert_eq!(discount.discount_type, DiscountType::Volume50Plus);
    assert_eq!(result.discount_amount, 1500.0);
}

// ========================================================================
// Holiday sale
// ========================================================================

#[test]
fn test_holiday_sale_on_eligible_category() {
    let items = vec![item("electronics", 1, 100.0)];
    let result = compute_pricing(&items, CustomerRegion::Us, date(2025, 1, 1));

    let discount = result.discount.unwrap();
    assert_eq!(discount.discount_type, DiscountType::HolidaySale);
    assert_eq!(discount.percentage, 15.0);
    assert_eq!(result.discount_amount, 15.0);
    assert_eq!(result.final_total, 85.0);
}

#[test]
fn test_holiday_sale_category_match_is_case_insensitive() {
    let items = vec![item("Electronics", 1, 100.0)];
    let result = compute_pricing(&items, CustomerRegion::Us, date(2025, 12, 25));

    let discount = result.discount.unwrap();
    assert_eq!(discount.discount_type, DiscountType::HolidaySale);
}

#[test]
fn test_holiday_sale_requires_eligible_category() {
    let items = vec![item("furniture", 1, 100.0)];
    let result = compute_pricing(&items, CustomerRegion::Us, date(2025, 1, 1));
    assert!(result.discount.is_none());
}

#[test]
fn test_holiday_sale_applies_to_whole_subtotal_for_mixed_cart() {
    // One eligible line is enough; the 15% covers both lines
    let items = vec![item("furniture", 1, 100.0), item("clothing", 1, 100.0)];
    let result = compute_pricing(&items, CustomerRegion::Us, date(2025, 1, 1));

    let discount = result.discount.unwrap();
    assert_eq!(discount.discount_type, DiscountType::HolidaySale);
    assert_eq!(result.discount_amount, 30.0);
}

#[test]
fn test_eligible_category_without_holiday_gets_nothing() {
    let items = vec![item("electronics", 1, 100.0)];
    let result = compute_pricing(&items, CustomerRegion::Us, regular_date());
    assert!(result.discount.is_none());
}

// ========================================================================
// Region adjustment
// ========================================================================

#[test]
fn test_europe_adds_15_percent() {
    let items = vec![item("general", 1, 100.0)];
    let result = compute_pricing(&items, CustomerRegion::Europe, regular_date());

    assert!(result.discount.is_none());
    assert_eq!(result.region_adjustment_percentage, 15);
    assert_eq!(result.region_adjustment, 15.0);
    assert_eq!(result.final_total, 115.0);
}

#[test]
fn test_asia_subtracts_5_percent() {
    let items = vec![item("general", 1, 100.0)];
    let result = compute_pricing(&items, CustomerRegion::Asia, regular_date());

    assert_eq!(result.region_adjustment_percentage, -5);
    assert_eq!(result.region_adjustment, -5.0);
    assert_eq!(result.final_total, 95.0);
}

#[test]
fn test_us_has_no_adjustment() {
    let items = vec![item("general", 1, 100.0)];
    let result = compute_pricing(&items, CustomerRegion::Us, regular_date());

    assert_eq!(result.region_adjustment_percentage, 0);
    assert_eq!(result.region_adjustment, 0.0);
    assert_eq!(result.final_total, 100.0);
}

#[test]
fn test_region_adjustment_applies_after_discount() {
    // 10 units x 100 in EUROPE: 1000 - 200 = 800, then +15% of 800 = 120.
    // Adjusting the raw subtotal would give 150 instead.
    let items = vec![item("general", 10, 100.0)];
    let result = compute_pricing(&items, CustomerRegion::Europe, regular_date());

    assert_eq!(result.discount_amount, 200.0);
    assert_eq!(result.region_adjustment, 120.0);
    assert_eq!(result.final_total, 920.0);
}

// ========================================================================
// Rounding
// ========================================================================

#[test]
fn test_outputs_are_rounded_to_two_decimals() {
    // 33.33 * 3 = 99.99000000000001 in f64
    let items = vec![item("general", 3, 33.33)];
    let result = compute_pricing(&items, CustomerRegion::Us, regular_date());
    assert_eq!(result.subtotal, 99.99);
    assert_eq!(result.final_total, 99.99);
}

#[test]
fn test_no_floating_residue_in_any_monetary_field() {
    let items = vec![item("electronics", 7, 19.99)];
    let result = compute_pricing(&items, CustomerRegion::Europe, regular_date());

    for value in [
        result.subtotal,
        result.discount_amount,
        result.region_adjustment,
        result.final_total,
    ] {
        let cents = value * 100.0;
        assert!(
            (cents - cents.round()).abs() < 1e-9,
            "field {value} carries sub-cent residue"
        );
    }
}

// ========================================================================
// End-to-end scenarios
// ========================================================================

#[test]
fn test_scenario_volume_10_us() {
    let items = vec![item("general", 10, 100.0)];
    let result = compute_pricing(&items, CustomerRegion::Us, regular_date());

    assert_eq!(result.subtotal, 1000.0);
    assert_eq!(
        result.discount.as_ref().unwrap().discount_type,
        DiscountType::Volume10Plus
    );
    assert_eq!(result.discount_amount, 200.0);
    assert_eq!(result.region_adjustment, 0.0);
    assert_eq!(result.final_total, 800.0);
}

#[test]
fn test_scenario_no_discount_europe() {
    let items = vec![item("general", 1, 100.0)];
    let result = compute_pricing(&items, CustomerRegion::Europe, regular_date());

    assert_eq!(result.subtotal, 100.0);
    assert!(result.discount.is_none());
    assert_eq!(result.region_adjustment, 15.0);
    assert_eq!(result.final_total, 115.0);
}

#[test]
fn test_scenario_bulk_order_on_black_friday_in_europe() {
    let items = vec![item("general", 50, 100.0)];
    let result = compute_pricing(&items, CustomerRegion::Europe, date(2025, 11, 28));

    assert_eq!(result.subtotal, 5000.0);
    assert_eq!(
        result.discount.as_ref().unwrap().discount_type,
        DiscountType::Volume50Plus
    );
    assert_eq!(result.discount_amount, 1500.0);
    assert_eq!(result.region_adjustment, 525.0);
    assert_eq!(result.final_total, 4025.0);
}

// ========================================================================
// Promotional info / region info
// ========================================================================

#[test]
fn test_promotional_info_on_black_friday() {
    let info = promotional_info(date(2025, 11, 28));
    assert!(info.is_black_friday);
    assert!(!info.is_holiday);
    assert!(info.holiday_name.is_none());
}

#[test]
fn test_promotional_info_on_holiday() {
    let info = promotional_info(date(2025, 1, 1));
    assert!(!info.is_black_friday);
    assert!(info.is_holiday);
    assert_eq!(info.holiday_name.as_deref(), Some("New Year"));
}

#[test]
fn test_promotional_info_on_regular_day() {
    let info = promotional_info(regular_date());
    assert!(!info.is_black_friday);
    assert!(!info.is_holiday);
    assert!(info.holiday_name.is_none());
}

#[test]
fn test_region_pricing_info_table() {
    let europe = region_pricing_info(CustomerRegion::Europe);
    assert_eq!(europe.adjustment, 15);
    assert!(europe.description.contains("VAT"));

    let asia = region_pricing_info(CustomerRegion::Asia);
    assert_eq!(asia.adjustment, -5);

    let us = region_pricing_info(CustomerRegion::Us);
    assert_eq!(us.adjustment, 0);
    assert_eq!(us.description, "Standard pricing");
}

#[test]
fn test_discount_type_wire_names() {
    assert_eq!(
        serde_json::to_string(&DiscountType::Volume5Plus).unwrap(),
        "\"VOLUME_5_PLUS\""
    );
    assert_eq!(DiscountType::BlackFriday.as_str(), "BLACK_FRIDAY");
    assert_eq!(DiscountType::HolidaySale.as_str(), "HOLIDAY_SALE");
}
