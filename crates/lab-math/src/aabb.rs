use crate::{DMat4, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Axis-Aligned Bounding Box in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb3 {
    pub min: Point3,
    pub max: Point3,
}

impl Aabb3 {
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    pub fn from_points(points: &[Point3]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;
        let mut min = first;
        let mut max = first;
        for &p in rest {
            min = min.min(p);
            max = max.max(p);
        }
        Some(Self { min, max })
    }

    pub fn center(&self) -> Point3 {
        (self.min + self.max) * 0.5
    }

    pub fn extents(&self) -> Vector3 {
        self.max - self.min
    }

    pub fn contains_point(&self, p: Point3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// The eight corners, bottom face first.
    pub fn corners(&self) -> [Point3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Point3::new(a.x, a.y, a.z),
            Point3::new(b.x, a.y, a.z),
            Point3::new(b.x, a.y, b.z),
            Point3::new(a.x, a.y, b.z),
            Point3::new(a.x, b.y, a.z),
            Point3::new(b.x, b.y, a.z),
            Point3::new(b.x, b.y, b.z),
            Point3::new(a.x, b.y, b.z),
        ]
    }

    /// Box enclosing this box after an affine transform.
    pub fn transformed(&self, m: &DMat4) -> Self {
        let corners = self.corners().map(|c| m.transform_point3(c));
        // Eight corners, never empty.
        Self::from_points(&corners).unwrap_or(*self)
    }
}
