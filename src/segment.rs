use super::{Arithmetic, ClosestApproach, WayPoint};

/// Interpolation parameter of the closest approach between two objects
/// moving uniformly, object 1 from `start1` to `end1` and object 2 from
/// `start2` to `end2`, over a common time period.
///
/// With $\vec\Delta_s$ the separation of the start locations and
/// $\vec\Delta_e$ the separation of the end locations, the squared
/// separation is quadratic in the interpolation parameter and its
/// unconstrained minimizer is
/// $$k^\star = \frac{\vec\Delta_s \cdot (\vec\Delta_s - \vec\Delta_e)}{\|\vec\Delta_s - \vec\Delta_e\|^2}$$
///
/// A zero denominator means zero relative velocity - parallel,
/// anti-parallel or both-stationary motion - and the quotient's IEEE
/// NaN/Infinity is the detector: the result is then NaN. Otherwise
/// $k^\star$ is clamped to \[0, 1\]; the true optimum may lie outside
/// the period (motion before the start or after the end), which is of
/// no interest here.
pub fn compute_closest_k(start1: &[f64], end1: &[f64], start2: &[f64], end2: &[f64]) -> f64 {
    assert_eq!(start1.len(), end1.len());
    assert_eq!(start2.len(), end2.len());
    assert_eq!(start1.len(), start2.len());
    let d_s = start1.sub(start2);
    let d_e = end1.sub(end2);
    let d_s_d_e = d_s.sub(&d_e);
    let k = d_s.dot(&d_s_d_e) / d_s_d_e.norm_square();
    if k.is_finite() {
        k.min(1f64).max(0f64)
    } else {
        f64::NAN
    }
}

// Instantaneous separation at interpolation parameter k; NaN stands for
// the constant separation of degenerate motion.
fn separation(start1: &WayPoint, end1: &WayPoint, start2: &WayPoint, end2: &WayPoint, k: f64) -> f64 {
    if k.is_nan() {
        start1.distance(start2)
    } else {
        let p1 = start1.coordinates().lerp(end1.coordinates(), k);
        let p2 = start2.coordinates().lerp(end2.coordinates(), k);
        p1.distance(&p2)
    }
}

/// # Segment closest approach
///
/// One object moves uniformly from way point `start1` to a later way
/// point `end1`; a second object moves uniformly from `start2` to
/// `end2`. The two motions share their start time and their end time,
/// so both positions are given by a single interpolation parameter k:
/// at k=0 the objects are at their start locations, at k=1 at their end
/// locations.
///
/// When and where are the two objects closest?
///
/// If the relative motion is degenerate (see [`compute_closest_k`]) the
/// objects remain at a fixed separation for the whole period and the
/// approach carries no time or locations, only the separation.
///
/// Otherwise the closest approach is almost certainly at a fractional
/// time. The reported time is discrete: the fractional time is rounded
/// down or up, whichever gives the smaller separation (the earlier on a
/// tie). The reported locations keep the continuous optimum, so a
/// small, bounded discrepancy between the reported time and the
/// locations that would be computed for it is deliberate.
pub struct SegmentClosestApproach {
    start1: WayPoint,
    end1: WayPoint,
    start2: WayPoint,
    end2: WayPoint,
    closest_k: f64,
    closest_approach: ClosestApproach,
}
impl SegmentClosestApproach {
    /// Determine the closest approach between object 1, moving from
    /// `start1` to `end1`, and object 2, moving from `start2` to
    /// `end2`. The way points must share one dimensionality, the start
    /// times must match, the end times must match and the end time must
    /// be later than the start time.
    pub fn new(start1: WayPoint, end1: WayPoint, start2: WayPoint, end2: WayPoint) -> Self {
        assert_eq!(start1.dim(), end1.dim());
        assert_eq!(start2.dim(), end2.dim());
        assert_eq!(start1.dim(), start2.dim());
        let start_time = start1.time();
        let end_time = end1.time();
        assert_eq!(start_time, start2.time());
        assert_eq!(end_time, end2.time());
        assert!(start_time < end_time);
        let delta_time = end_time - start_time;

        let closest_k = compute_closest_k(
            start1.coordinates(),
            end1.coordinates(),
            start2.coordinates(),
            end2.coordinates(),
        );

        let closest_approach = if closest_k.is_nan() {
            ClosestApproach::degenerate(separation(&start1, &end1, &start2, &end2, closest_k))
        } else {
            let closest_time = start_time as f64 + closest_k * delta_time as f64;
            // Make the time discrete - the floor or the next time, whichever
            // separation is smaller.
            let time1 = (closest_time.floor() as i64).max(start_time);
            let time2 = (time1 + 1).min(end_time);
            let time = if time1 == time2 {
                time1
            } else {
                let k1 = (time1 - start_time) as f64 / delta_time as f64;
                let k2 = (time2 - start_time) as f64 / delta_time as f64;
                let d1 = separation(&start1, &end1, &start2, &end2, k1);
                let d2 = separation(&start1, &end1, &start2, &end2, k2);
                if d1 <= d2 {
                    time1
                } else {
                    time2
                }
            };
            // The locations follow the continuous k, not the discrete time.
            let p1 = start1.coordinates().lerp(end1.coordinates(), closest_k);
            let p2 = start2.coordinates().lerp(end2.coordinates(), closest_k);
            ClosestApproach::located(WayPoint::new(time, p1), WayPoint::new(time, p2))
        };

        Self {
            start1,
            end1,
            start2,
            end2,
            closest_k,
            closest_approach,
        }
    }
    /// The start way point of object 1
    pub fn start1(&self) -> &WayPoint {
        &self.start1
    }
    /// The end way point of object 1
    pub fn end1(&self) -> &WayPoint {
        &self.end1
    }
    /// The start way point of object 2
    pub fn start2(&self) -> &WayPoint {
        &self.start2
    }
    /// The end way point of object 2
    pub fn end2(&self) -> &WayPoint {
        &self.end2
    }
    /// The interpolation parameter of the closest approach, clamped to
    /// \[0, 1\], or NaN for degenerate motion
    pub fn closest_k(&self) -> f64 {
        self.closest_k
    }
    /// The closest approach
    pub fn closest_approach(&self) -> &ClosestApproach {
        &self.closest_approach
    }
    pub fn into_closest_approach(self) -> ClosestApproach {
        self.closest_approach
    }
    /// The separation of the two objects at interpolation parameter k;
    /// for NaN - degenerate motion - the (constant) separation of the
    /// start locations
    pub fn distance_at(&self, k: f64) -> f64 {
        separation(&self.start1, &self.end1, &self.start2, &self.end2, k)
    }
}
