//! Abstract 2-D regions supporting uniform sampling and bounding-box
//! reporting, used by the Poisson-disk sampler and the shape generators.

use crate::galaxy::rng::DeterministicRng;
use crate::galaxy::Point;

/// A bounding box as `(min, max)` corners, used by callers to size a
/// [`crate::galaxy::grid::SpatialGrid`].
pub type BoundingBox = (Point, Point);

pub trait Region {
    /// Draws a point uniformly distributed over the region's area.
    fn sample_uniform(&self, rng: &mut DeterministicRng) -> Point;

    /// True iff `p` lies within the region.
    fn contains(&self, p: Point) -> bool;

    fn bounding_box(&self) -> BoundingBox;
}

/// A disk of given `radius` centered at `center`. Also used, at a
/// prescribed center and radius, as the CLUSTER shape's per-cluster
/// region.
pub struct Disk {
    pub center: Point,
    pub radius: f64,
}

impl Region for Disk {
    fn sample_uniform(&self, rng: &mut DeterministicRng) -> Point {
        let u = rng.next_double();
        let v = rng.next_double();
        let rho = self.radius * u.sqrt();
        let theta = std::f64::consts::TAU * v;
        Point::new(
            self.center.x + rho * theta.cos(),
            self.center.y + rho * theta.sin(),
        )
    }

    fn contains(&self, p: Point) -> bool {
        self.center.distance(&p) <= self.radius
    }

    fn bounding_box(&self) -> BoundingBox {
        let r = self.radius;
        (
            Point::new(self.center.x - r, self.center.y - r),
            Point::new(self.center.x + r, self.center.y + r),
        )
    }
}

pub struct Annulus {
    pub center: Point,
    pub inner: f64,
    pub outer: f64,
}

impl Region for Annulus {
    fn sample_uniform(&self, rng: &mut DeterministicRng) -> Point {
        let u = rng.next_double();
        let v = rng.next_double();
        let rho = (self.inner * self.inner + u * (self.outer * self.outer - self.inner * self.inner)).sqrt();
        let theta = std::f64::consts::TAU * v;
        Point::new(
            self.center.x + rho * theta.cos(),
            self.center.y + rho * theta.sin(),
        )
    }

    fn contains(&self, p: Point) -> bool {
        let d = self.center.distance(&p);
        d >= self.inner && d <= self.outer
    }

    fn bounding_box(&self) -> BoundingBox {
        let r = self.outer;
        (
            Point::new(self.center.x - r, self.center.y - r),
            Point::new(self.center.x + r, self.center.y + r),
        )
    }
}

pub struct Rectangle {
    pub center: Point,
    pub width: f64,
    pub height: f64,
}

impl Region for Rectangle {
    fn sample_uniform(&self, rng: &mut DeterministicRng) -> Point {
        let hx = self.width / 2.0;
        let hy = self.height / 2.0;
        Point::new(
            self.center.x + (rng.next_double() * 2.0 - 1.0) * hx,
            self.center.y + (rng.next_double() * 2.0 - 1.0) * hy,
        )
    }

    fn contains(&self, p: Point) -> bool {
        (p.x - self.center.x).abs() <= self.width / 2.0
            && (p.y - self.center.y).abs() <= self.height / 2.0
    }

    fn bounding_box(&self) -> BoundingBox {
        (
            Point::new(self.center.x - self.width / 2.0, self.center.y - self.height / 2.0),
            Point::new(self.center.x + self.width / 2.0, self.center.y + self.height / 2.0),
        )
    }
}
