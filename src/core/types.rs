//! Vector, matrix, and obstacle types for the potential field.

use serde::{Deserialize, Serialize};

/// A 3D vector in the local navigation frame.
///
/// Components are (north, east, up) in meters. Registration input uses the
/// down-positive aviation convention; conversion happens at the registry
/// boundary so everything here is up-positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// North component in meters
    pub x: f64,
    /// East component in meters
    pub y: f64,
    /// Up component in meters
    pub z: f64,
}

impl Vec3 {
    /// Zero vector.
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a new vector.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(&self, other: &Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Squared Euclidean norm (avoids sqrt).
    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Euclidean norm.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Scale to unit length. Caller must ensure the norm is nonzero;
    /// the evaluator checks against its configured epsilon first.
    #[inline]
    pub fn normalized(&self) -> Vec3 {
        let inv = 1.0 / self.norm();
        Vec3::new(self.x * inv, self.y * inv, self.z * inv)
    }

    /// True when every component is a finite number.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Default for Vec3 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::ops::Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Mul<f64> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl std::ops::Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

/// A 3x3 matrix, used for the Hessian of the potential.
///
/// Row-major storage. Hessians are assembled with [`Mat3::symmetric`], which
/// mirrors the upper triangle so `m[i][j] == m[j][i]` holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mat3 {
    /// Rows in row-major order
    pub rows: [[f64; 3]; 3],
}

impl Mat3 {
    /// Zero matrix.
    pub const ZERO: Mat3 = Mat3 {
        rows: [[0.0; 3]; 3],
    };

    /// Build a symmetric matrix from its upper-triangular entries.
    #[inline]
    pub fn symmetric(xx: f64, xy: f64, xz: f64, yy: f64, yz: f64, zz: f64) -> Self {
        Self {
            rows: [[xx, xy, xz], [xy, yy, yz], [xz, yz, zz]],
        }
    }

    /// Matrix-vector product.
    #[inline]
    pub fn mul_vec(&self, v: &Vec3) -> Vec3 {
        Vec3::new(
            self.rows[0][0] * v.x + self.rows[0][1] * v.y + self.rows[0][2] * v.z,
            self.rows[1][0] * v.x + self.rows[1][1] * v.y + self.rows[1][2] * v.z,
            self.rows[2][0] * v.x + self.rows[2][1] * v.y + self.rows[2][2] * v.z,
        )
    }

    /// Quadratic form sᵀ·M·s.
    ///
    /// For a Hessian this is the second derivative of the field along `s`
    /// when `s` has unit length.
    #[inline]
    pub fn quadratic_form(&self, s: &Vec3) -> f64 {
        s.dot(&self.mul_vec(s))
    }

    /// Check symmetry within an absolute tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        (self.rows[0][1] - self.rows[1][0]).abs() <= tol
            && (self.rows[0][2] - self.rows[2][0]).abs() <= tol
            && (self.rows[1][2] - self.rows[2][1]).abs() <= tol
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::ops::Add for Mat3 {
    type Output = Mat3;
    fn add(self, rhs: Mat3) -> Mat3 {
        let mut rows = [[0.0; 3]; 3];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                *v = self.rows[i][j] + rhs.rows[i][j];
            }
        }
        Mat3 { rows }
    }
}

/// A cylindrical obstacle in the navigation frame.
///
/// The hazard region is a vertical cylinder of the given radius and height
/// centered at `position`. Immutable once registered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Center position (north, east, up) in meters
    pub position: Vec3,
    /// Cylinder radius in meters, non-negative
    pub radius: f64,
    /// Cylinder height in meters, non-negative
    pub height: f64,
}
