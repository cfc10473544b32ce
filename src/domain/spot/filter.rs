//! Filter chips for narrowing the spot list

use std::str::FromStr;

use super::model::{SpotRecord, SpotType, FEATURE_EV_CHARGING};

/// Spots priced at or below this hourly rate count as cheap
pub const CHEAP_PRICE_THRESHOLD: u32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpotFilter {
    #[default]
    All,
    Covered,
    Open,
    EvCharging,
    Cheap,
}

impl SpotFilter {
    /// Chip order as presented to the user
    pub const ALL: [SpotFilter; 5] = [
        SpotFilter::All,
        SpotFilter::Covered,
        SpotFilter::Open,
        SpotFilter::EvCharging,
        SpotFilter::Cheap,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Covered => "Covered",
            Self::Open => "Open",
            Self::EvCharging => "EV Charging",
            Self::Cheap => "Cheap",
        }
    }

    pub fn matches(&self, spot: &SpotRecord) -> bool {
        match self {
            Self::All => true,
            Self::Covered => spot.spot_type == SpotType::Covered,
            Self::Open => spot.spot_type == SpotType::Open,
            Self::EvCharging => spot.has_feature(FEATURE_EV_CHARGING),
            Self::Cheap => spot.price <= CHEAP_PRICE_THRESHOLD,
        }
    }
}

impl std::fmt::Display for SpotFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SpotFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "all" => Ok(Self::All),
            "covered" => Ok(Self::Covered),
            "open" => Ok(Self::Open),
            "ev" | "evcharging" => Ok(Self::EvCharging),
            "cheap" => Ok(Self::Cheap),
            _ => Err(format!(
                "unknown filter '{}' (expected one of: all, covered, open, ev-charging, cheap)",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::spot::model::sample_spot;

    #[test]
    fn cheap_includes_threshold_price() {
        assert!(SpotFilter::Cheap.matches(&sample_spot(1, 80, 5, 10)));
        assert!(!SpotFilter::Cheap.matches(&sample_spot(2, 81, 5, 10)));
    }

    #[test]
    fn type_filters() {
        let mut spot = sample_spot(1, 100, 5, 10);
        assert!(SpotFilter::Covered.matches(&spot));
        assert!(!SpotFilter::Open.matches(&spot));
        spot.spot_type = SpotType::Open;
        assert!(SpotFilter::Open.matches(&spot));
        assert!(SpotFilter::All.matches(&spot));
    }

    #[test]
    fn ev_filter_uses_feature_tags() {
        let mut spot = sample_spot(1, 100, 5, 10);
        assert!(!SpotFilter::EvCharging.matches(&spot));
        spot.features.push(FEATURE_EV_CHARGING.into());
        assert!(SpotFilter::EvCharging.matches(&spot));
    }

    #[test]
    fn parse_accepts_labels_and_slugs() {
        assert_eq!("EV Charging".parse::<SpotFilter>(), Ok(SpotFilter::EvCharging));
        assert_eq!("ev-charging".parse::<SpotFilter>(), Ok(SpotFilter::EvCharging));
        assert_eq!("Cheap".parse::<SpotFilter>(), Ok(SpotFilter::Cheap));
        assert!("valet".parse::<SpotFilter>().is_err());
    }

    #[test]
    fn labels_roundtrip_through_parse() {
        for filter in SpotFilter::ALL {
            assert_eq!(filter.label().parse::<SpotFilter>(), Ok(filter));
        }
    }
}
