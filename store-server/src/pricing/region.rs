//! Region pricing
//!
//! 区域调整是 region 的纯函数，只作用于折后金额。

use serde::{Deserialize, Serialize};
use shared::CustomerRegion;

/// Static description of one region's pricing policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionPricingInfo {
    pub region: CustomerRegion,
    /// Signed percentage applied to the post-discount amount
    pub adjustment: i32,
    pub description: String,
}

/// Signed adjustment percentage for a region
pub fn region_adjustment_percentage(region: CustomerRegion) -> i32 {
    match region {
        CustomerRegion::Europe => 15,
        CustomerRegion::Asia => -5,
        CustomerRegion::Us => 0,
    }
}

/// Static lookup describing a region's adjustment and its rationale
pub fn region_pricing_info(region: CustomerRegion) -> RegionPricingInfo {
    let description = match region {
        CustomerRegion::Europe => "Prices increased by 15% due to VAT",
        CustomerRegion::Asia => "Prices reduced by 5% due to lower logistics costs",
        CustomerRegion::Us => "Standard pricing",
    };

    RegionPricingInfo {
        region,
        adjustment: region_adjustment_percentage(region),
        description: description.to_string(),
    }
}
