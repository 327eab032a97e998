//! World coordinates → in-game map latitude/longitude.

pub trait LatLonProjector {
    fn lat(&self, y: f32) -> f64;
    fn lon(&self, x: f32) -> f64;
}

/// Linear projection `shift + coord / div`, one set of constants per map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLonCalculator {
    pub lat_shift: f64,
    pub lat_div: f64,
    pub lon_shift: f64,
    pub lon_div: f64,
}

const KNOWN_MAPS: &[(&str, LatLonCalculator)] = &[
    ("TheIsland", LatLonCalculator::new(50.0, 8000.0, 50.0, 8000.0)),
    (
        "TheCenter",
        LatLonCalculator::new(30.34223747253418, 9584.0, 55.10416793823242, 9600.0),
    ),
    ("ScorchedEarth_P", LatLonCalculator::new(50.0, 8000.0, 50.0, 8000.0)),
    ("Aberration_P", LatLonCalculator::new(50.0, 8000.0, 50.0, 8000.0)),
    ("Ragnarok", LatLonCalculator::new(50.0, 13100.0, 50.0, 13100.0)),
];

impl LatLonCalculator {
    pub const fn new(lat_shift: f64, lat_div: f64, lon_shift: f64, lon_div: f64) -> Self {
        Self {
            lat_shift,
            lat_div,
            lon_shift,
            lon_div,
        }
    }

    /// Constants for a built-in map; names match case-insensitively.
    pub fn for_map(name: &str) -> Option<Self> {
        KNOWN_MAPS
            .iter()
            .find(|(map, _)| map.eq_ignore_ascii_case(name))
            .map(|(_, calc)| *calc)
    }

    pub fn known_maps() -> impl Iterator<Item = &'static str> {
        KNOWN_MAPS.iter().map(|(map, _)| *map)
    }
}

impl Default for LatLonCalculator {
    fn default() -> Self {
        KNOWN_MAPS[0].1
    }
}

impl LatLonProjector for LatLonCalculator {
    fn lat(&self, y: f32) -> f64 {
        self.lat_shift + f64::from(y) / self.lat_div
    }

    fn lon(&self, x: f32) -> f64 {
        self.lon_shift + f64::from(x) / self.lon_div
    }
}

/// Rounds half-up to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}
