//! Common types for the shared crate
//!
//! 客户区域等跨 crate 公用的领域类型

use serde::{Deserialize, Serialize};

/// Customer region (closed set)
///
/// 区域决定订单定价的区域调整比例：
///
/// | 区域 | 调整 | 说明 |
/// |------|------|------|
/// | US | 0% | 标准定价 |
/// | EUROPE | +15% | VAT |
/// | ASIA | -5% | 物流成本较低 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerRegion {
    #[serde(rename = "US")]
    Us,
    #[serde(rename = "EUROPE")]
    Europe,
    #[serde(rename = "ASIA")]
    Asia,
}

impl CustomerRegion {
    /// Wire name ("US" | "EUROPE" | "ASIA")
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerRegion::Us => "US",
            CustomerRegion::Europe => "EUROPE",
            CustomerRegion::Asia => "ASIA",
        }
    }
}

impl std::fmt::Display for CustomerRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CustomerRegion {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "US" => Ok(CustomerRegion::Us),
            "EUROPE" => Ok(CustomerRegion::Europe),
            "ASIA" => Ok(CustomerRegion::Asia),
            other => Err(UnknownRegion(other.to_string())),
        }
    }
}

/// Error for region strings outside the closed set
#[derive(Debug, thiserror::Error)]
#[error("unknown region: {0} (expected US, EUROPE or ASIA)")]
pub struct UnknownRegion(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_wire_names_round_trip() {
        for region in [
            CustomerRegion::Us,
            CustomerRegion::Europe,
            CustomerRegion::Asia,
        ] {
            let parsed: CustomerRegion = region.as_str().parse().unwrap();
            assert_eq!(parsed, region);
        }
    }

    #[test]
    fn region_serde_uses_uppercase_names() {
        let json = serde_json::to_string(&CustomerRegion::Europe).unwrap();
        assert_eq!(json, "\"EUROPE\"");

        let parsed: CustomerRegion = serde_json::from_str("\"ASIA\"").unwrap();
        assert_eq!(parsed, CustomerRegion::Asia);
    }

    #[test]
    fn unknown_region_is_rejected() {
        assert!("AFRICA".parse::<CustomerRegion>().is_err());
        // Wire names are case sensitive, matching the closed enum contract
        assert!("us".parse::<CustomerRegion>().is_err());
    }
}
