//! Static water features: one lake and one river.
//!
//! Water is not an obstacle. It only matters to the fishing rod, which
//! needs the player to stand close to it.

use frostvale_types::Vec2;

/// A body of water on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaterBody {
    /// A circular lake.
    Lake {
        /// Centre of the lake.
        center: Vec2,
        /// Radius of the lake.
        radius: f64,
    },
    /// An axis-aligned river strip.
    River {
        /// Lowest `x` covered.
        min_x: f64,
        /// Highest `x` covered.
        max_x: f64,
        /// Lowest `z` covered.
        min_z: f64,
        /// Highest `z` covered.
        max_z: f64,
    },
}

impl WaterBody {
    /// Distance from `point` to the nearest water, zero when inside.
    pub fn distance_to(&self, point: Vec2) -> f64 {
        match *self {
            Self::Lake { center, radius } => (point.distance(center) - radius).max(0.0),
            Self::River {
                min_x,
                max_x,
                min_z,
                max_z,
            } => {
                let dx = (min_x - point.x).max(point.x - max_x).max(0.0);
                let dz = (min_z - point.z).max(point.z - max_z).max(0.0);
                dx.hypot(dz)
            }
        }
    }
}

/// The stock map's water: the lake at (-30, -30) and the river at x = 20.
pub const WATER: [WaterBody; 2] = [
    WaterBody::Lake {
        center: Vec2::new(-30.0, -30.0),
        radius: 12.0,
    },
    WaterBody::River {
        min_x: 17.0,
        max_x: 23.0,
        min_z: -30.0,
        max_z: 30.0,
    },
];

/// Whether `point` is within `margin` of any water.
pub fn near_water(point: Vec2, margin: f64) -> bool {
    WATER.iter().any(|body| body.distance_to(point) <= margin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lake_shore_is_near_water() {
        assert!(near_water(Vec2::new(-30.0, -16.0), 3.0));
        assert!(near_water(Vec2::new(-30.0, -30.0), 0.0));
        assert!(!near_water(Vec2::new(-30.0, -14.0), 3.0));
    }

    #[test]
    fn river_bank_is_near_water() {
        assert!(near_water(Vec2::new(15.0, 0.0), 3.0));
        assert!(near_water(Vec2::new(25.5, 29.0), 3.0));
        assert!(!near_water(Vec2::new(20.0, 34.0), 3.0));
    }

    #[test]
    fn spawn_point_is_dry() {
        assert!(!near_water(Vec2::ZERO, 3.0));
    }
}
