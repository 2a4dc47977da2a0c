// Occupancy tier value object
// Display tiers over a capacity percentage; bounds are exclusive

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occupancy {
    Available,
    Busy,
    Full,
}

impl Occupancy {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage > 90.0 {
            Occupancy::Full
        } else if percentage > 70.0 {
            Occupancy::Busy
        } else {
            Occupancy::Available
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Occupancy::Available => "available",
            Occupancy::Busy => "busy",
            Occupancy::Full => "full",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_bounds_are_exclusive() {
        assert_eq!(Occupancy::from_percentage(70.0), Occupancy::Available);
        assert_eq!(Occupancy::from_percentage(70.1), Occupancy::Busy);
        assert_eq!(Occupancy::from_percentage(90.0), Occupancy::Busy);
        assert_eq!(Occupancy::from_percentage(90.1), Occupancy::Full);
        assert_eq!(Occupancy::from_percentage(0.0), Occupancy::Available);
        assert_eq!(Occupancy::from_percentage(100.0), Occupancy::Full);
    }
}
