//! Structural house profile used by catalog derivation.

use serde::{Deserialize, Serialize};

/// Counts and facts about the home that drive task derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseProfile {
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub kitchens: u32,
    pub living_rooms: u32,
    pub has_pets: bool,
    pub pet_description: Option<String>,
    pub floor_area_m2: f64,
}

impl Default for HouseProfile {
    fn default() -> Self {
        Self {
            bedrooms: 3,
            bathrooms: 2,
            kitchens: 1,
            living_rooms: 2,
            has_pets: false,
            pet_description: None,
            floor_area_m2: 120.0,
        }
    }
}

impl HouseProfile {
    /// Frequency adjustment factor for weekly tasks based on floor area.
    pub fn area_factor(&self) -> f64 {
        if self.floor_area_m2 > 200.0 {
            1.3
        } else if self.floor_area_m2 > 100.0 {
            1.1
        } else {
            1.0
        }
    }
}
