use super::{Arithmetic, Vector};
use std::fmt;

/// # Way point definition
///
/// A way point pairs a time with a set of spatial coordinates: some
/// object is to be at the given coordinates at the given time.
///
/// The dimensionality of the coordinates is not fixed - it might be 1,
/// 2, 3, etc. Operations taking several way points expect them all to
/// have the same dimensionality.
///
/// Both the time and the coordinates are agnostic about origin and
/// units; the distance between two coordinates is Euclidean.
#[derive(Debug, Clone, PartialEq)]
pub struct WayPoint {
    time: i64,
    coordinates: Vector,
}
impl WayPoint {
    /// Create a way point at the given time and coordinates
    pub fn new(time: i64, coordinates: Vector) -> Self {
        assert!(!coordinates.is_empty());
        Self { time, coordinates }
    }
    /// The way point's time
    pub fn time(&self) -> i64 {
        self.time
    }
    /// The way point's coordinates
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }
    /// The dimensionality of the coordinates
    pub fn dim(&self) -> usize {
        self.coordinates.len()
    }
    /// The Euclidean distance between this way point and the given way
    /// point; symmetric and independent of the way points' times
    pub fn distance(&self, other: &WayPoint) -> f64 {
        self.coordinates.distance(&other.coordinates)
    }
    /// # Way point interpolation
    ///
    /// The way point of an object moving uniformly from `start` to
    /// `end`, at the given time. The end time must be later than the
    /// start time.
    ///
    /// A time outside of the \[start time, end time\] period
    /// extrapolates the same uniform motion before/after the period.
    pub fn interpolate(start: &WayPoint, end: &WayPoint, time: i64) -> WayPoint {
        assert!(start.time < end.time);
        assert_eq!(start.dim(), end.dim());
        // The interpolation time as a fraction of [start time, end time].
        let k = (time - start.time) as f64 / (end.time - start.time) as f64;
        WayPoint::new(time, start.coordinates.lerp(&end.coordinates, k))
    }
    /// Linearly interpolate between the start time and the end time:
    /// k=0 results in the start time, k=1 in the end time, rounding to
    /// the nearest discrete time in between
    pub fn interpolate_time(start: i64, end: i64, k: f64) -> i64 {
        start + (k * (end - start) as f64).round() as i64
    }
}
impl fmt::Display for WayPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coordinates: Vec<String> = self
            .coordinates
            .iter()
            .map(|c| format!("{:+.3}", c))
            .collect();
        write!(f, "t: {:>6} ; p: [{}]", self.time, coordinates.join(","))
    }
}
