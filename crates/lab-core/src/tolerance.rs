/// Tolerances for comparing generated geometry and camera bases.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Linear tolerance for distance and length comparisons (in world units)
    pub linear: f64,
    /// Angular tolerance (in radians). Also bounds the cosine of angles that
    /// should be right angles.
    pub angular: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-7;
    pub const DEFAULT_ANGULAR: f64 = 1e-9;

    pub fn default_precision() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
            angular: Self::DEFAULT_ANGULAR,
        }
    }

    /// Tolerance suited to values that went through f32 storage.
    pub fn single_precision() -> Self {
        Self {
            linear: 1e-4,
            angular: 1e-5,
        }
    }

    /// Check if two values are equal within linear tolerance
    pub fn linear_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.linear
    }

    /// Check if the cosine between two unit directions describes a right angle
    pub fn is_orthogonal(self, cosine: f64) -> bool {
        cosine.abs() < self.angular
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
