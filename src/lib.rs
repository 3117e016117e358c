//!
//! # Analytic Closest Approach
//!
//! Computes when and where two objects, each following a route of
//! space-time way points with uniform motion in between, are nearest
//! to each other.

pub mod approach;
pub mod route;
pub mod segment;
pub mod waypoint;
pub use approach::ClosestApproach;
pub use route::{align_times, closest_approaches, Route, RouteClosestApproach};
pub use segment::{compute_closest_k, SegmentClosestApproach};
pub use waypoint::WayPoint;

/// Spatial coordinates of arbitrary dimension
pub type Vector = Vec<f64>;

/// # Vector arithmetic
///
/// Operations on coordinate slices, which may be free vectors or
/// positional vectors anchored at the origin. Operands must share the
/// same dimension.
pub trait Arithmetic {
    /// Inner product: $\vec u \cdot \vec v = \sum_i u_i v_i$
    fn dot(&self, other: &[f64]) -> f64;
    /// Squared 2-norm: $\|\vec v\|^2$
    fn norm_square(&self) -> f64;
    /// 2-norm: $\|\vec v\|$
    fn norm(&self) -> f64;
    /// Euclidean distance to another positional vector
    fn distance(&self, other: &[f64]) -> f64;
    fn add(&self, other: &[f64]) -> Vector;
    /// Element-wise difference, self - other
    fn sub(&self, other: &[f64]) -> Vector;
    /// Element-wise product with the scalar s
    fn scale(&self, s: f64) -> Vector;
    /// Unit vector in the same direction; the norm must be positive
    fn unit(&self) -> Vector;
    /// Linear interpolation towards `end`:
    /// $$\vec p(k) = \vec v + k (\vec e - \vec v)$$
    /// k=0 yields self and k=1 yields `end`, both exactly; k outside
    /// [0,1] extrapolates the same uniform motion
    fn lerp(&self, end: &[f64], k: f64) -> Vector;
}
impl Arithmetic for [f64] {
    fn dot(&self, other: &[f64]) -> f64 {
        assert_eq!(self.len(), other.len());
        self.iter().zip(other).map(|(u, v)| u * v).sum()
    }
    fn norm_square(&self) -> f64 {
        self.dot(self)
    }
    fn norm(&self) -> f64 {
        self.norm_square().sqrt()
    }
    fn distance(&self, other: &[f64]) -> f64 {
        self.sub(other).norm()
    }
    fn add(&self, other: &[f64]) -> Vector {
        assert_eq!(self.len(), other.len());
        self.iter().zip(other).map(|(u, v)| u + v).collect()
    }
    fn sub(&self, other: &[f64]) -> Vector {
        assert_eq!(self.len(), other.len());
        self.iter().zip(other).map(|(u, v)| u - v).collect()
    }
    fn scale(&self, s: f64) -> Vector {
        self.iter().map(|v| s * v).collect()
    }
    fn unit(&self) -> Vector {
        let n = self.norm();
        assert!(n > 0f64);
        self.scale(1f64 / n)
    }
    fn lerp(&self, end: &[f64], k: f64) -> Vector {
        assert_eq!(self.len(), end.len());
        if k == 0f64 {
            return self.to_vec();
        }
        if k == 1f64 {
            return end.to_vec();
        }
        self.iter().zip(end).map(|(s, e)| s + k * (e - s)).collect()
    }
}
