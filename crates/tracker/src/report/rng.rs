use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::projection::BoundingBox;

/// RNG that places new reports on the map. The position is decorative and
/// ignores the entered address.
#[derive(Resource)]
pub struct ReportRng(pub ChaCha8Rng);

impl Default for ReportRng {
    fn default() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }
}

impl ReportRng {
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_config(seed: Option<u64>) -> Self {
        seed.map(Self::from_seed_u64).unwrap_or_default()
    }

    /// Uniform `(lat, lng)` in `[min, max)` of `bounds` on both axes.
    pub fn scatter(&mut self, bounds: &BoundingBox) -> (f64, f64) {
        let lat = bounds.min_lat + self.0.gen::<f64>() * bounds.lat_span();
        let lng = bounds.min_lng + self.0.gen::<f64>() * bounds.lng_span();
        (lat, lng)
    }
}
