use super::{ClosestApproach, SegmentClosestApproach, WayPoint};
use log::{debug, trace};

/// # Route definition
///
/// A route is an ordered sequence of way points with strictly
/// increasing times; between consecutive way points the object moves
/// uniformly. A route has at least two way points and one coordinate
/// dimensionality throughout.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    way_points: Vec<WayPoint>,
}
impl Route {
    /// Create a route from its way points
    pub fn new(way_points: Vec<WayPoint>) -> Self {
        assert!(way_points.len() >= 2);
        assert!(way_points.windows(2).all(|w| w[0].time() < w[1].time()));
        let dim = way_points[0].dim();
        assert!(way_points.iter().all(|wp| wp.dim() == dim));
        Self { way_points }
    }
    /// The route's way points, in time order
    pub fn way_points(&self) -> &[WayPoint] {
        &self.way_points
    }
    pub fn len(&self) -> usize {
        self.way_points.len()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, WayPoint> {
        self.way_points.iter()
    }
    /// The dimensionality of the route's coordinates
    pub fn dim(&self) -> usize {
        self.way_points[0].dim()
    }
    pub fn first(&self) -> &WayPoint {
        &self.way_points[0]
    }
    pub fn last(&self) -> &WayPoint {
        &self.way_points[self.way_points.len() - 1]
    }
    /// The time of the route's first way point
    pub fn start_time(&self) -> i64 {
        self.first().time()
    }
    /// The time of the route's last way point
    pub fn end_time(&self) -> i64 {
        self.last().time()
    }
    /// The position along the route at the given time, or None outside
    /// the route's time span
    pub fn way_point_at(&self, time: i64) -> Option<WayPoint> {
        self.way_points
            .windows(2)
            .position(|w| w[0].time() <= time && time <= w[1].time())
            .map(|segment| {
                WayPoint::interpolate(
                    &self.way_points[segment],
                    &self.way_points[segment + 1],
                    time,
                )
            })
    }
    /// # Route alignment
    ///
    /// A way point for each of the given ascending times, interpolated
    /// along the route. Times before the route's first way point or
    /// after its last are skipped.
    ///
    /// The scan over the route's segments is forward-only, in lock-step
    /// with the ascending times; each segment is visited at most once.
    pub fn align(&self, times: &[i64]) -> Vec<WayPoint> {
        let way_points = &self.way_points;
        // Index of the current segment's start way point.
        let mut segment = 0;
        let mut aligned = Vec::with_capacity(times.len());
        for &time in times {
            if time < way_points[0].time() {
                // Before the route starts.
                continue;
            }
            while time > way_points[segment + 1].time() && segment + 2 < way_points.len() {
                segment += 1;
            }
            if time > way_points[segment + 1].time() {
                // Past the route's end; the remaining times lie further out.
                break;
            }
            aligned.push(WayPoint::interpolate(
                &way_points[segment],
                &way_points[segment + 1],
                time,
            ));
        }
        aligned
    }
}

/// The sequence of times on which two routes are to be aligned: the
/// union of both routes' way point times falling within the inclusive
/// overlap of the two routes' time spans, deduplicated and ascending.
/// Empty when the time spans do not overlap.
pub fn align_times(route1: &Route, route2: &Route) -> Vec<i64> {
    let start_time = route1.start_time().max(route2.start_time());
    let end_time = route1.end_time().min(route2.end_time());
    let mut merged: Vec<i64> = route1
        .iter()
        .chain(route2.iter())
        .map(|wp| wp.time())
        .filter(|&time| start_time <= time && time <= end_time)
        .collect();
    merged.sort_unstable();
    merged.dedup();
    debug!(
        "alignment window [{}, {}]: {} sample times",
        start_time,
        end_time,
        merged.len()
    );
    merged
}

/// # Route closest approach
///
/// One object follows `route1`, a second object follows `route2`. Over
/// time the separation between the objects varies (unless the motions
/// are parallel); this determines when and where they are closest.
///
/// Both routes are first resampled onto their aligned times, so that
/// each consecutive pair of aligned way points forms a pair of
/// synchronized linear segments to which [`SegmentClosestApproach`]
/// applies. In principle there may be several closest approaches, at
/// different times, with exactly the same separation; all of them are
/// reported, in time order. If the routes have no time period in
/// common, there is no closest approach.
pub struct RouteClosestApproach {
    route1: Route,
    route2: Route,
    aligned_times: Vec<i64>,
    aligned_route1: Vec<WayPoint>,
    aligned_route2: Vec<WayPoint>,
    closest_approaches: Vec<ClosestApproach>,
}
impl RouteClosestApproach {
    /// Determine the closest approaches between object 1, following
    /// `route1`, and object 2, following `route2`. The routes must
    /// share one coordinate dimensionality.
    pub fn new(route1: Route, route2: Route) -> Self {
        assert_eq!(route1.dim(), route2.dim());

        let aligned_times = align_times(&route1, &route2);
        let aligned_route1 = route1.align(&aligned_times);
        let aligned_route2 = route2.align(&aligned_times);
        assert_eq!(aligned_route1.len(), aligned_times.len());
        assert_eq!(aligned_route2.len(), aligned_times.len());

        let closest_approaches = if aligned_times.is_empty() {
            // The routes do not overlap in time.
            Vec::new()
        } else if aligned_times.len() == 1 {
            // The end time of one route is the start time of the other.
            vec![ClosestApproach::located(
                aligned_route1[0].clone(),
                aligned_route2[0].clone(),
            )]
        } else {
            // One closest approach per synchronized segment. An approach
            // landing exactly on a shared way point time (k=1) belongs to
            // the segment ending there and recurs as k=0 of the next
            // segment; record it once, for the latter, except on the final
            // segment which has no successor.
            let n_segments = aligned_times.len() - 1;
            let mut per_segment: Vec<ClosestApproach> = Vec::with_capacity(n_segments);
            for i in 0..n_segments {
                let ca = SegmentClosestApproach::new(
                    aligned_route1[i].clone(),
                    aligned_route1[i + 1].clone(),
                    aligned_route2[i].clone(),
                    aligned_route2[i + 1].clone(),
                );
                trace!(
                    "segment [{}, {}]: k = {}, d = {:.6e}",
                    aligned_times[i],
                    aligned_times[i + 1],
                    ca.closest_k(),
                    ca.closest_approach().distance()
                );
                if i == n_segments - 1 || ca.closest_k() != 1f64 {
                    per_segment.push(ca.into_closest_approach());
                }
            }
            // The tie set: every recorded approach matching the smallest
            // separation exactly.
            let min_distance = per_segment
                .iter()
                .map(|ca| ca.distance())
                .fold(f64::INFINITY, f64::min);
            per_segment.retain(|ca| ca.distance() == min_distance);
            debug!(
                "{} closest approach(es) at distance {:.6e}",
                per_segment.len(),
                min_distance
            );
            per_segment
        };

        Self {
            route1,
            route2,
            aligned_times,
            aligned_route1,
            aligned_route2,
            closest_approaches,
        }
    }
    /// The route for object 1
    pub fn route1(&self) -> &Route {
        &self.route1
    }
    /// The route for object 2
    pub fn route2(&self) -> &Route {
        &self.route2
    }
    /// The times on which both routes were aligned
    pub fn aligned_times(&self) -> &[i64] {
        &self.aligned_times
    }
    /// Route 1 resampled onto the aligned times
    pub fn aligned_route1(&self) -> &[WayPoint] {
        &self.aligned_route1
    }
    /// Route 2 resampled onto the aligned times
    pub fn aligned_route2(&self) -> &[WayPoint] {
        &self.aligned_route2
    }
    /// The closest approaches, in time order, all with the same
    /// separation; may be empty, when the routes' time spans do not
    /// overlap
    pub fn closest_approaches(&self) -> &[ClosestApproach] {
        &self.closest_approaches
    }
    pub fn into_closest_approaches(self) -> Vec<ClosestApproach> {
        self.closest_approaches
    }
}

/// The closest approaches between two routes, for callers that do not
/// need the aligned intermediates
pub fn closest_approaches(route1: &Route, route2: &Route) -> Vec<ClosestApproach> {
    RouteClosestApproach::new(route1.clone(), route2.clone()).into_closest_approaches()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const N_RANDOM_TESTS: usize = 100;

    fn wp(time: i64, x: f64, y: f64) -> WayPoint {
        WayPoint::new(time, vec![x, y])
    }

    fn route_1() -> Route {
        Route::new(vec![
            wp(0, 0f64, 0f64),
            wp(10, 0f64, 10f64),
            wp(20, 10f64, 10f64),
            wp(30, 10f64, 0f64),
            wp(40, 0f64, 0f64),
        ])
    }

    fn route_2() -> Route {
        Route::new(vec![wp(20, 5f64, 5f64), wp(30, 15f64, 5f64)])
    }

    fn any_route(rng: &mut StdRng) -> Route {
        let start_time = rng.random_range(0i64..1_000);
        let start_x = rng.random_range(-1_000f64..1_000f64);
        let start_y = rng.random_range(-1_000f64..1_000f64);
        let n = rng.random_range(2usize..10);
        random_route(rng, start_time, start_x, start_y, n)
    }

    fn random_route(rng: &mut StdRng, start_time: i64, start_x: f64, start_y: f64, n: usize) -> Route {
        let mut time = start_time;
        let mut x = start_x;
        let mut y = start_y;
        let mut way_points = Vec::with_capacity(n);
        for _ in 0..n {
            time += rng.random_range(100i64..10_000);
            x += rng.random_range(100f64..10_000f64);
            y += rng.random_range(100f64..10_000f64);
            way_points.push(wp(time, x, y));
        }
        Route::new(way_points)
    }

    // Per-unit-time scan over the routes' spans, for verification.
    fn brute_force(route1: &Route, route2: &Route) -> Option<f64> {
        let start_time = route1.start_time().min(route2.start_time());
        let end_time = route1.end_time().max(route2.end_time());
        (start_time..=end_time)
            .filter_map(|time| {
                let wp1 = route1.way_point_at(time)?;
                let wp2 = route2.way_point_at(time)?;
                Some(wp1.distance(&wp2))
            })
            .fold(None, |min, d| {
                Some(min.map_or(d, |m: f64| if d < m { d } else { m }))
            })
    }

    #[test]
    fn known_closest_approach() {
        let dca = RouteClosestApproach::new(route_1(), route_2());
        assert_eq!(dca.closest_approaches().len(), 1);
        let ca = &dca.closest_approaches()[0];
        assert_eq!(ca.time(), Some(25));
        assert_eq!(ca.distance(), 0f64);
        let (wp1, wp2) = ca.way_points().unwrap();
        assert_eq!(wp1.time(), 25);
        assert_eq!(wp2.time(), 25);
        assert_eq!(wp1.coordinates(), &[10f64, 5f64]);
        assert_eq!(wp2.coordinates(), &[10f64, 5f64]);
    }

    #[test]
    fn aligned_times_within_overlap() {
        let route1 = Route::new(vec![
            wp(0, 0f64, 0f64),
            wp(10, 2f64, 2f64),
            wp(20, 4f64, 2f64),
            wp(60, 0f64, 0f64),
        ]);
        let route2 = Route::new(vec![
            wp(0, 2f64, 8f64),
            wp(20, 0f64, 6f64),
            wp(40, 4f64, 2f64),
        ]);
        assert_eq!(align_times(&route1, &route2), vec![0, 10, 20, 40]);
    }

    #[test]
    fn alignment_round_trip() {
        let route = Route::new(vec![
            wp(0, 0.1, -0.3),
            wp(10, 0.3, 0.7),
            wp(30, -0.7, 0.2),
        ]);
        // A superset of the route's own times, within its span.
        let times = vec![0, 5, 10, 15, 20, 30];
        let aligned = route.align(&times);
        assert_eq!(aligned.len(), times.len());
        assert_eq!(aligned[0], route.way_points()[0]);
        assert_eq!(aligned[2], route.way_points()[1]);
        assert_eq!(aligned[5], route.way_points()[2]);
    }

    #[test]
    fn alignment_skips_out_of_span_times() {
        let route = Route::new(vec![wp(10, 0f64, 0f64), wp(20, 10f64, 10f64)]);
        let aligned = route.align(&[0, 5, 10, 15, 20, 25, 30]);
        let times: Vec<i64> = aligned.iter().map(|wp| wp.time()).collect();
        assert_eq!(times, vec![10, 15, 20]);
    }

    #[test]
    fn disjoint_routes_have_no_closest_approach() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..N_RANDOM_TESTS {
            let n1 = rng.random_range(2usize..10);
            let route1 = random_route(&mut rng, 0, 0f64, 0f64, n1);
            let route2_start_time = route1.end_time() + 5;
            let n2 = rng.random_range(2usize..10);
            let route2 = random_route(&mut rng, route2_start_time, 5f64, 5f64, n2);
            let dca = RouteClosestApproach::new(route1, route2);
            assert!(dca.aligned_times().is_empty());
            assert!(dca.closest_approaches().is_empty());
        }
    }

    #[test]
    fn instant_overlap_yields_single_approach() {
        let route1 = Route::new(vec![wp(0, 0f64, 0f64), wp(10, 10f64, 0f64)]);
        let route2 = Route::new(vec![wp(10, 10f64, 5f64), wp(20, 0f64, 5f64)]);
        let dca = RouteClosestApproach::new(route1, route2);
        assert_eq!(dca.aligned_times(), &[10]);
        assert_eq!(dca.closest_approaches().len(), 1);
        let ca = &dca.closest_approaches()[0];
        assert_eq!(ca.time(), Some(10));
        assert_eq!(ca.distance(), 5f64);
    }

    #[test]
    fn constant_separation_spans_tie() {
        // Parallel motion over every segment: each contributes its
        // constant-separation plateau to the tie set.
        let route1 = Route::new(vec![
            wp(0, 0f64, 0f64),
            wp(10, 10f64, 0f64),
            wp(20, 20f64, 0f64),
        ]);
        let route2 = Route::new(vec![
            wp(0, 0f64, 1f64),
            wp(10, 10f64, 1f64),
            wp(20, 20f64, 1f64),
        ]);
        let dca = RouteClosestApproach::new(route1, route2);
        assert_eq!(dca.closest_approaches().len(), 2);
        for ca in dca.closest_approaches() {
            assert!(ca.is_degenerate());
            assert_eq!(ca.distance(), 1f64);
        }
    }

    #[test]
    fn way_point_approach_is_not_counted_twice() {
        // Object 1 reaches object 2's column exactly at a way point time,
        // then retreats: the same instant is the optimum of both the
        // segment ending there (k=1) and the one starting there (k=0).
        let route1 = Route::new(vec![
            wp(0, 0f64, 0f64),
            wp(10, 10f64, 0f64),
            wp(20, 0f64, 0f64),
        ]);
        let route2 = Route::new(vec![wp(0, 10f64, 5f64), wp(20, 10f64, 5f64)]);
        let dca = RouteClosestApproach::new(route1, route2);
        assert_eq!(dca.closest_approaches().len(), 1);
        let ca = &dca.closest_approaches()[0];
        assert_eq!(ca.time(), Some(10));
        assert_eq!(ca.distance(), 5f64);
    }

    #[test]
    fn closest_approaches_are_time_ordered_and_tied() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..N_RANDOM_TESTS {
            let route1 = any_route(&mut rng);
            let route2 = any_route(&mut rng);
            let approaches = closest_approaches(&route1, &route2);
            for pair in approaches.windows(2) {
                assert_eq!(pair[0].distance(), pair[1].distance());
                if let (Some(t1), Some(t2)) = (pair[0].time(), pair[1].time()) {
                    assert!(t1 < t2);
                }
            }
        }
    }

    #[test]
    fn never_beaten_by_brute_force() {
        let mut rng = StdRng::seed_from_u64(10);
        for _ in 0..N_RANDOM_TESTS {
            let route1 = any_route(&mut rng);
            let route2 = any_route(&mut rng);
            let approaches = closest_approaches(&route1, &route2);
            let sampled = brute_force(&route1, &route2);
            match sampled {
                None => assert!(approaches.is_empty()),
                Some(sampled_distance) => {
                    assert!(!approaches.is_empty());
                    for ca in &approaches {
                        assert!(ca.distance() <= sampled_distance + 1e-5);
                    }
                }
            }
        }
    }

    #[test]
    fn intermediates_are_consistent() {
        let dca = RouteClosestApproach::new(route_1(), route_2());
        assert_eq!(dca.aligned_times(), &[20, 30]);
        assert_eq!(dca.aligned_route1().len(), 2);
        assert_eq!(dca.aligned_route2().len(), 2);
        assert_eq!(dca.aligned_route1()[0], wp(20, 10f64, 10f64));
        assert_eq!(dca.aligned_route2()[1], wp(30, 15f64, 5f64));
        assert_eq!(dca.route1(), &route_1());
        assert_eq!(dca.route2(), &route_2());
    }

    #[test]
    #[should_panic]
    fn route_requires_two_way_points() {
        Route::new(vec![wp(0, 0f64, 0f64)]);
    }

    #[test]
    #[should_panic]
    fn route_requires_increasing_times() {
        Route::new(vec![
            wp(0, 0f64, 0f64),
            wp(10, 1f64, 0f64),
            wp(10, 2f64, 0f64),
        ]);
    }

    #[test]
    #[should_panic]
    fn route_requires_uniform_dimensionality() {
        Route::new(vec![
            WayPoint::new(0, vec![0f64, 0f64]),
            WayPoint::new(10, vec![1f64, 0f64, 0f64]),
        ]);
    }

    #[test]
    fn way_point_at_samples_the_route() {
        let route = route_1();
        assert_eq!(route.way_point_at(0), Some(wp(0, 0f64, 0f64)));
        assert_eq!(route.way_point_at(5), Some(wp(5, 0f64, 5f64)));
        assert_eq!(route.way_point_at(25), Some(wp(25, 10f64, 5f64)));
        assert_eq!(route.way_point_at(40), Some(wp(40, 0f64, 0f64)));
        assert_eq!(route.way_point_at(-1), None);
        assert_eq!(route.way_point_at(41), None);
    }
}
