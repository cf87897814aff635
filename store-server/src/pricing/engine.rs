//! Pricing computation
//!
//! 折扣候选生成、最优折扣选择与最终定价。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::CustomerRegion;

use super::{calendar, region};

/// Categories eligible for the holiday sale (case-insensitive match)
const HOLIDAY_SALE_CATEGORIES: [&str; 2] = ["electronics", "clothing"];

/// One order line as seen by the pricing engine
///
/// Ephemeral input, built by the caller per pricing call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    pub category: String,
    pub quantity: u32,
    pub unit_price: f64,
}

/// Discount families (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountType {
    #[serde(rename = "VOLUME_5_PLUS")]
    Volume5Plus,
    #[serde(rename = "VOLUME_10_PLUS")]
    Volume10Plus,
    #[serde(rename = "VOLUME_50_PLUS")]
    Volume50Plus,
    #[serde(rename = "BLACK_FRIDAY")]
    BlackFriday,
    #[serde(rename = "HOLIDAY_SALE")]
    HolidaySale,
}

impl DiscountType {
    /// Wire name, identical to the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountType::Volume5Plus => "VOLUME_5_PLUS",
            DiscountType::Volume10Plus => "VOLUME_10_PLUS",
            DiscountType::Volume50Plus => "VOLUME_50_PLUS",
            DiscountType::BlackFriday => "BLACK_FRIDAY",
            DiscountType::HolidaySale => "HOLIDAY_SALE",
        }
    }
}

/// A discount candidate that fired for the current order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountInfo {
    #[serde(rename = "type")]
    pub discount_type: DiscountType,
    pub percentage: f64,
    pub description: String,
}

/// Result of one pricing call
///
/// All monetary fields are rounded to 2 decimals; intermediates are not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingResult {
    pub subtotal: f64,
    pub discount: Option<DiscountInfo>,
    pub discount_amount: f64,
    pub region_adjustment: f64,
    pub region_adjustment_percentage: i32,
    pub final_total: f64,
}

/// Promotional status of a single date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionalInfo {
    pub is_black_friday: bool,
    pub is_holiday: bool,
    pub holiday_name: Option<String>,
}

/// Compute the pricing for one set of order lines
///
/// # Arguments
/// * `items` - Order lines; may be empty (all-zero result)
/// * `region` - Customer region, drives the post-discount adjustment
/// * `order_date` - Reference date for Black Friday / holiday rules
///
/// At most one discount applies: all candidate rules are evaluated
/// independently and the highest percentage wins. The region adjustment
/// is applied to the post-discount amount, never to the raw subtotal.
pub fn compute_pricing(
    items: &[OrderItem],
    region: CustomerRegion,
    order_date: NaiveDate,
) -> PricingResult {
    let subtotal: f64 = items
        .iter()
        .map(|item| item.unit_price * f64::from(item.quantity))
        .sum();

    let total_quantity: u32 = items.iter().map(|item| item.quantity).sum();

    let best_discount = applicable_discounts(items, total_quantity, order_date)
        .into_iter()
        .max_by(|a, b| a.percentage.total_cmp(&b.percentage));

    let discount_amount = best_discount
        .as_ref()
        .map(|d| subtotal * (d.percentage / 100.0))
        .unwrap_or(0.0);

    let after_discount = subtotal - discount_amount;

    let region_adjustment_percentage = region::region_adjustment_percentage(region);
    let region_adjustment = after_discount * (f64::from(region_adjustment_percentage) / 100.0);

    let final_total = after_discount + region_adjustment;

    PricingResult {
        subtotal: round2(subtotal),
        discount: best_discount,
        discount_amount: round2(discount_amount),
        region_adjustment: round2(region_adjustment),
        region_adjustment_percentage,
        final_total: round2(final_total),
    }
}

/// Promotional status for a date, independent of any order
pub fn promotional_info(date: NaiveDate) -> PromotionalInfo {
    let holiday = calendar::holiday_name(date);

    PromotionalInfo {
        is_black_friday: calendar::is_black_friday(date),
        is_holiday: holiday.is_some(),
        holiday_name: holiday.map(str::to_string),
    }
}

/// Evaluate every rule family and collect the candidates that fired
fn applicable_discounts(
    items: &[OrderItem],
    total_quantity: u32,
    order_date: NaiveDate,
) -> Vec<DiscountInfo> {
    let mut discounts = Vec::new();

    if let Some(volume) = volume_discount(total_quantity) {
        discounts.push(volume);
    }

    if calendar::is_black_friday(order_date) {
        discounts.push(DiscountInfo {
            discount_type: DiscountType::BlackFriday,
            percentage: 25.0,
            description: "Black Friday Sale - 25% off all products".to_string(),
        });
    }

    if calendar::is_holiday(order_date) && has_holiday_category(items) {
        discounts.push(DiscountInfo {
            discount_type: DiscountType::HolidaySale,
            percentage: 15.0,
            description: format!(
                "Holiday Sale - 15% off {}",
                HOLIDAY_SALE_CATEGORIES.join(", ")
            ),
        });
    }

    discounts
}

/// Volume tiers are mutually exclusive; the highest threshold met wins
fn volume_discount(total_quantity: u32) -> Option<DiscountInfo> {
    if total_quantity >= 50 {
        Some(DiscountInfo {
            discount_type: DiscountType::Volume50Plus,
            percentage: 30.0,
            description: "30% discount for 50+ units".to_string(),
        })
    } else if total_quantity >= 10 {
        Some(DiscountInfo {
            discount_type: DiscountType::Volume10Plus,
            percentage: 20.0,
            description: "20% discount for 10+ units".to_string(),
        })
    } else if total_quantity >= 5 {
        Some(DiscountInfo {
            discount_type: DiscountType::Volume5Plus,
            percentage: 10.0,
            description: "10% discount for 5+ units".to_string(),
        })
    } else {
        None
    }
}

/// One eligible item is enough; the discount covers the whole subtotal
fn has_holiday_category(items: &[OrderItem]) -> bool {
    items.iter().any(|item| {
        HOLIDAY_SALE_CATEGORIES
            .iter()
            .any(|category| item.category.eq_ignore_ascii_case(category))
    })
}

/// Round to 2 decimal places (bankers' rounding not required)
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
