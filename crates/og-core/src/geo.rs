//! Geographic coordinate type and great-circle distance.
//!
//! `Coordinate` uses `f64` latitude/longitude so that the values written to
//! `nodes.json` are exactly the decimals parsed from the extract.

use crate::{CoreError, CoreResult};

/// Mean Earth radius (IUGG), kilometres.
const EARTH_RADIUS_KM: f64 = 6_371.008_8;

/// A WGS-84 geographic coordinate.
///
/// Serializes as a two-element array `[lat, lon]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "(f64, f64)", into = "(f64, f64)"))]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Check that the coordinate lies on the globe.
    ///
    /// NaN and infinities fail both range checks.
    pub fn validate(self) -> CoreResult<Self> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(CoreError::LatitudeOutOfRange(self.lat));
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(CoreError::LongitudeOutOfRange(self.lon));
        }
        Ok(self)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(c: Coordinate) -> Self {
        (c.lat, c.lon)
    }
}

// ── DistanceUnit ──────────────────────────────────────────────────────────────

/// Unit in which [`haversine`] reports distances.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DistanceUnit {
    #[default]
    Meters,
    Kilometers,
    Miles,
    NauticalMiles,
    Feet,
}

impl DistanceUnit {
    /// How many of this unit make up one kilometre.
    fn per_km(self) -> f64 {
        match self {
            DistanceUnit::Meters        => 1_000.0,
            DistanceUnit::Kilometers    => 1.0,
            DistanceUnit::Miles         => 0.621_371_192,
            DistanceUnit::NauticalMiles => 0.539_956_803,
            DistanceUnit::Feet          => 3_280.839_895,
        }
    }

    /// Short suffix used in log lines.
    pub fn symbol(self) -> &'static str {
        match self {
            DistanceUnit::Meters        => "m",
            DistanceUnit::Kilometers    => "km",
            DistanceUnit::Miles         => "mi",
            DistanceUnit::NauticalMiles => "nmi",
            DistanceUnit::Feet          => "ft",
        }
    }
}

// ── Distance ──────────────────────────────────────────────────────────────────

/// Haversine great-circle distance between `a` and `b`, in `unit`.
///
/// Both coordinates are validated first; an out-of-range latitude or
/// longitude is rejected rather than silently wrapped.
///
/// ```
/// use og_core::{haversine, Coordinate, DistanceUnit};
///
/// let a = Coordinate::new(30.0, -88.0);
/// let b = Coordinate::new(31.0, -88.0);
/// let d = haversine(a, b, DistanceUnit::Kilometers).unwrap();
/// assert!((d - 111.195).abs() < 0.01);
/// ```
pub fn haversine(a: Coordinate, b: Coordinate, unit: DistanceUnit) -> CoreResult<f64> {
    let a = a.validate()?;
    let b = b.validate()?;

    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat * 0.5).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

    // Rounding can push `h` a hair above 1 for antipodal points.
    let c = 2.0 * h.min(1.0).sqrt().asin();
    Ok(EARTH_RADIUS_KM * c * unit.per_km())
}
