//! Linear projection of stored coordinates onto the simulated map.
//!
//! The map is a fixed lat/lng box drawn as a 0-100 % square. Every marker
//! goes through [`project`]; points outside the box land outside 0-100 and
//! are simply drawn off-panel.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A lat/lng rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// Visible area of the simulated map.
    pub const MAP: BoundingBox = BoundingBox {
        min_lat: 40.704,
        max_lat: 40.720,
        min_lng: -74.013,
        max_lng: -73.999,
    };

    /// Area new reports are scattered over (`40.706 + [0, 0.014)`,
    /// `-74.013 + [0, 0.014)`).
    pub const SCATTER: BoundingBox = BoundingBox {
        min_lat: 40.706,
        max_lat: 40.720,
        min_lng: -74.013,
        max_lng: -73.999,
    };

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lng_span(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lng..=self.max_lng).contains(&lng)
    }

    /// A box is usable when every bound is finite and both spans are positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [self.min_lat, self.max_lat, self.min_lng, self.max_lng]
            .iter()
            .all(|v| v.is_finite());
        if !finite || self.lat_span() <= 0.0 || self.lng_span() <= 0.0 {
            return Err(ConfigError::InvalidBoundingBox(*self));
        }
        Ok(())
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::MAP
    }
}

/// Marker position as percentages of the map panel, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPosition {
    pub x_pct: f64,
    pub y_pct: f64,
}

impl MapPosition {
    pub fn in_view(&self) -> bool {
        (0.0..=100.0).contains(&self.x_pct) && (0.0..=100.0).contains(&self.y_pct)
    }
}

/// Project a coordinate into `bounds`. North is up, so latitude is inverted.
pub fn project(lat: f64, lng: f64, bounds: &BoundingBox) -> MapPosition {
    let x_pct = (lng - bounds.min_lng) / bounds.lng_span() * 100.0;
    let y_pct = (1.0 - (lat - bounds.min_lat) / bounds.lat_span()) * 100.0;
    MapPosition { x_pct, y_pct }
}

/// Decorative streets of the simulated map, as (offset %, width px).
pub const HORIZONTAL_ROADS: [(f32, f32); 2] = [(30.0, 18.0), (65.0, 28.0)];
pub const VERTICAL_ROADS: [(f32, f32); 3] = [(20.0, 18.0), (55.0, 28.0), (80.0, 12.0)];

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_corners() {
        let b = BoundingBox::MAP;
        let top_left = project(b.max_lat, b.min_lng, &b);
        assert!(top_left.x_pct.abs() < EPS);
        assert!(top_left.y_pct.abs() < EPS);

        let bottom_right = project(b.min_lat, b.max_lng, &b);
        assert!((bottom_right.x_pct - 100.0).abs() < EPS);
        assert!((bottom_right.y_pct - 100.0).abs() < EPS);
    }

    #[test]
    fn test_center() {
        let b = BoundingBox::MAP;
        let p = project(40.712, -74.006, &b);
        assert!((p.x_pct - 50.0).abs() < 1e-6);
        assert!((p.y_pct - 50.0).abs() < 1e-6);
        assert!(p.in_view());
    }

    #[test]
    fn test_deterministic() {
        let b = BoundingBox::MAP;
        let a = project(40.715, -74.009, &b);
        let c = project(40.715, -74.009, &b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_outside_box_not_clamped() {
        let b = BoundingBox::MAP;
        let p = project(40.730, -74.020, &b);
        assert!(p.x_pct < 0.0);
        assert!(p.y_pct < 0.0);
        assert!(!p.in_view());
    }

    #[test]
    fn test_validate_rejects_inverted_box() {
        let bad = BoundingBox {
            min_lat: 41.0,
            max_lat: 40.0,
            ..BoundingBox::MAP
        };
        assert!(bad.validate().is_err());
        assert!(BoundingBox::MAP.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_nan() {
        let bad = BoundingBox {
            min_lng: f64::NAN,
            ..BoundingBox::MAP
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_scatter_box_inside_map() {
        let s = BoundingBox::SCATTER;
        assert!(BoundingBox::MAP.contains(s.min_lat, s.min_lng));
        assert!(BoundingBox::MAP.contains(s.max_lat, s.max_lng));
    }
}
