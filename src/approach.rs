use super::WayPoint;
use std::fmt;

/// # Closest approach
///
/// The closest approach of two objects' motions over a common time
/// period.
///
/// When the relative motion is degenerate - the objects move in
/// parallel, or both stand still - the separation is constant over the
/// whole period and no single closest instant exists: only the distance
/// is defined. Otherwise the approach is located at a discrete time,
/// with one way point per object.
#[derive(Debug, Clone, PartialEq)]
pub enum ClosestApproach {
    /// Parallel or stationary relative motion at constant separation
    Degenerate { distance: f64 },
    /// A unique nearest instant; both way points share `time`
    Located {
        time: i64,
        way_point1: WayPoint,
        way_point2: WayPoint,
        distance: f64,
    },
}
impl ClosestApproach {
    /// Closest approach of two objects moving in parallel: only their
    /// constant separation is known
    pub fn degenerate(distance: f64) -> Self {
        assert!(distance >= 0f64);
        ClosestApproach::Degenerate { distance }
    }
    /// Closest approach located at the two objects' way points, which
    /// must share the same time; the distance is the separation of the
    /// way points' coordinates
    pub fn located(way_point1: WayPoint, way_point2: WayPoint) -> Self {
        assert_eq!(way_point1.time(), way_point2.time());
        assert_eq!(way_point1.dim(), way_point2.dim());
        let time = way_point1.time();
        let distance = way_point1.distance(&way_point2);
        ClosestApproach::Located {
            time,
            way_point1,
            way_point2,
            distance,
        }
    }
    /// The separation of the two objects at their closest approach
    pub fn distance(&self) -> f64 {
        match self {
            ClosestApproach::Degenerate { distance } => *distance,
            ClosestApproach::Located { distance, .. } => *distance,
        }
    }
    /// The time of the closest approach, or None for degenerate motion
    pub fn time(&self) -> Option<i64> {
        match self {
            ClosestApproach::Degenerate { .. } => None,
            ClosestApproach::Located { time, .. } => Some(*time),
        }
    }
    /// The two objects' way points at the closest approach, or None for
    /// degenerate motion
    pub fn way_points(&self) -> Option<(&WayPoint, &WayPoint)> {
        match self {
            ClosestApproach::Degenerate { .. } => None,
            ClosestApproach::Located {
                way_point1,
                way_point2,
                ..
            } => Some((way_point1, way_point2)),
        }
    }
    pub fn is_degenerate(&self) -> bool {
        matches!(self, ClosestApproach::Degenerate { .. })
    }
}
impl fmt::Display for ClosestApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClosestApproach::Degenerate { distance } => {
                write!(f, "parallel motion ; d: {:.6e}", distance)
            }
            ClosestApproach::Located {
                time,
                way_point1,
                way_point2,
                distance,
            } => write!(
                f,
                "t: {:>6} ; p1: [{}] ; p2: [{}] ; d: {:.6e}",
                time,
                way_point1
                    .coordinates()
                    .iter()
                    .map(|c| format!("{:+.3}", c))
                    .collect::<Vec<String>>()
                    .join(","),
                way_point2
                    .coordinates()
                    .iter()
                    .map(|c| format!("{:+.3}", c))
                    .collect::<Vec<String>>()
                    .join(","),
                distance
            ),
        }
    }
}
