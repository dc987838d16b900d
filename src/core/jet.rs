//! Forward-mode automatic differentiation with second derivatives.
//!
//! A [`Jet3`] carries a function value together with its three first partials
//! and six independent second partials with respect to (x, y, z). Arithmetic
//! propagates all ten numbers through the chain rule, so any cost function
//! written against `Jet3` yields its exact gradient and Hessian in a single
//! evaluation, with no finite differencing and no hand-derived formulas.
//!
//! Each mixed partial is stored once (dxy, dxz, dyz), which makes Hessians
//! assembled from a jet symmetric by construction.

use crate::core::types::Vec3;

/// A second-order jet in three variables.
///
/// Represents f(x, y, z) along with ∂f/∂x, ∂f/∂y, ∂f/∂z and the six
/// independent entries of the Hessian:
///
/// ```text
/// H = [dxx  dxy  dxz]
///     [dxy  dyy  dyz]
///     [dxz  dyz  dzz]
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Jet3 {
    /// The function value f(x, y, z)
    pub v: f64,
    /// Partial derivative ∂f/∂x
    pub dx: f64,
    /// Partial derivative ∂f/∂y
    pub dy: f64,
    /// Partial derivative ∂f/∂z
    pub dz: f64,
    /// Second partial ∂²f/∂x²
    pub dxx: f64,
    /// Mixed partial ∂²f/∂x∂y
    pub dxy: f64,
    /// Mixed partial ∂²f/∂x∂z
    pub dxz: f64,
    /// Second partial ∂²f/∂y²
    pub dyy: f64,
    /// Mixed partial ∂²f/∂y∂z
    pub dyz: f64,
    /// Second partial ∂²f/∂z²
    pub dzz: f64,
}

impl Jet3 {
    /// A constant: value only, all derivatives zero.
    #[inline]
    pub fn constant(v: f64) -> Self {
        Self {
            v,
            dx: 0.0,
            dy: 0.0,
            dz: 0.0,
            dxx: 0.0,
            dxy: 0.0,
            dxz: 0.0,
            dyy: 0.0,
            dyz: 0.0,
            dzz: 0.0,
        }
    }

    /// Seed for the x variable (∂x/∂x = 1, everything else 0).
    #[inline]
    pub fn var_x(v: f64) -> Self {
        Self {
            dx: 1.0,
            ..Self::constant(v)
        }
    }

    /// Seed for the y variable.
    #[inline]
    pub fn var_y(v: f64) -> Self {
        Self {
            dy: 1.0,
            ..Self::constant(v)
        }
    }

    /// Seed for the z variable.
    #[inline]
    pub fn var_z(v: f64) -> Self {
        Self {
            dz: 1.0,
            ..Self::constant(v)
        }
    }

    /// Seed the three coordinates of a query point as jet variables.
    #[inline]
    pub fn seed(p: &Vec3) -> [Jet3; 3] {
        [Self::var_x(p.x), Self::var_y(p.y), Self::var_z(p.z)]
    }

    /// Exponential with derivatives.
    ///
    /// exp(f)' = exp(f)·f', exp(f)'' = exp(f)·(f'·f' + f'')
    #[inline]
    pub fn exp(self) -> Self {
        let e = self.v.exp();
        Self {
            v: e,
            dx: e * self.dx,
            dy: e * self.dy,
            dz: e * self.dz,
            dxx: e * (self.dx * self.dx + self.dxx),
            dxy: e * (self.dx * self.dy + self.dxy),
            dxz: e * (self.dx * self.dz + self.dxz),
            dyy: e * (self.dy * self.dy + self.dyy),
            dyz: e * (self.dy * self.dz + self.dyz),
            dzz: e * (self.dz * self.dz + self.dzz),
        }
    }

    /// Square root with derivatives.
    ///
    /// (√f)' = f'/(2√f), (√f)'' = f''/(2√f) − f'·f'/(4·f·√f)
    #[inline]
    pub fn sqrt(self) -> Self {
        let s = self.v.sqrt();
        let half_inv = 0.5 / s;
        let quarter_inv_cubed = 0.25 / (s * s * s);
        Self {
            v: s,
            dx: self.dx * half_inv,
            dy: self.dy * half_inv,
            dz: self.dz * half_inv,
            dxx: self.dxx * half_inv - self.dx * self.dx * quarter_inv_cubed,
            dxy: self.dxy * half_inv - self.dx * self.dy * quarter_inv_cubed,
            dxz: self.dxz * half_inv - self.dx * self.dz * quarter_inv_cubed,
            dyy: self.dyy * half_inv - self.dy * self.dy * quarter_inv_cubed,
            dyz: self.dyz * half_inv - self.dy * self.dz * quarter_inv_cubed,
            dzz: self.dzz * half_inv - self.dz * self.dz * quarter_inv_cubed,
        }
    }

    /// Reciprocal with derivatives.
    ///
    /// (1/f)' = −f'/f², (1/f)'' = −f''/f² + 2·f'·f'/f³
    #[inline]
    pub fn recip(self) -> Self {
        let inv = 1.0 / self.v;
        let inv_sq = inv * inv;
        let two_inv_cubed = 2.0 * inv_sq * inv;
        Self {
            v: inv,
            dx: -self.dx * inv_sq,
            dy: -self.dy * inv_sq,
            dz: -self.dz * inv_sq,
            dxx: -self.dxx * inv_sq + self.dx * self.dx * two_inv_cubed,
            dxy: -self.dxy * inv_sq + self.dx * self.dy * two_inv_cubed,
            dxz: -self.dxz * inv_sq + self.dx * self.dz * two_inv_cubed,
            dyy: -self.dyy * inv_sq + self.dy * self.dy * two_inv_cubed,
            dyz: -self.dyz * inv_sq + self.dy * self.dz * two_inv_cubed,
            dzz: -self.dzz * inv_sq + self.dz * self.dz * two_inv_cubed,
        }
    }

    /// Natural logarithm with derivatives.
    ///
    /// ln(f)' = f'/f, ln(f)'' = f''/f − f'·f'/f²
    #[inline]
    pub fn ln(self) -> Self {
        let inv = 1.0 / self.v;
        let inv_sq = inv * inv;
        Self {
            v: self.v.ln(),
            dx: self.dx * inv,
            dy: self.dy * inv,
            dz: self.dz * inv,
            dxx: self.dxx * inv - self.dx * self.dx * inv_sq,
            dxy: self.dxy * inv - self.dx * self.dy * inv_sq,
            dxz: self.dxz * inv - self.dx * self.dz * inv_sq,
            dyy: self.dyy * inv - self.dy * self.dy * inv_sq,
            dyz: self.dyz * inv - self.dy * self.dz * inv_sq,
            dzz: self.dzz * inv - self.dz * self.dz * inv_sq,
        }
    }

    /// Integer power with derivatives.
    ///
    /// (fⁿ)' = n·fⁿ⁻¹·f', (fⁿ)'' = n(n−1)·fⁿ⁻²·f'·f' + n·fⁿ⁻¹·f''
    #[inline]
    pub fn powi(self, n: i32) -> Self {
        let nf = f64::from(n);
        let p1 = nf * self.v.powi(n - 1);
        let p2 = nf * (nf - 1.0) * self.v.powi(n - 2);
        Self {
            v: self.v.powi(n),
            dx: p1 * self.dx,
            dy: p1 * self.dy,
            dz: p1 * self.dz,
            dxx: p2 * self.dx * self.dx + p1 * self.dxx,
            dxy: p2 * self.dx * self.dy + p1 * self.dxy,
            dxz: p2 * self.dx * self.dz + p1 * self.dxz,
            dyy: p2 * self.dy * self.dy + p1 * self.dyy,
            dyz: p2 * self.dy * self.dz + p1 * self.dyz,
            dzz: p2 * self.dz * self.dz + p1 * self.dzz,
        }
    }

    /// Gradient as a vector.
    #[inline]
    pub fn gradient(&self) -> Vec3 {
        Vec3::new(self.dx, self.dy, self.dz)
    }
}

impl std::ops::Add for Jet3 {
    type Output = Jet3;
    #[inline]
    fn add(self, rhs: Jet3) -> Jet3 {
        Jet3 {
            v: self.v + rhs.v,
            dx: self.dx + rhs.dx,
            dy: self.dy + rhs.dy,
            dz: self.dz + rhs.dz,
            dxx: self.dxx + rhs.dxx,
            dxy: self.dxy + rhs.dxy,
            dxz: self.dxz + rhs.dxz,
            dyy: self.dyy + rhs.dyy,
            dyz: self.dyz + rhs.dyz,
            dzz: self.dzz + rhs.dzz,
        }
    }
}

impl std::ops::Sub for Jet3 {
    type Output = Jet3;
    #[inline]
    fn sub(self, rhs: Jet3) -> Jet3 {
        Jet3 {
            v: self.v - rhs.v,
            dx: self.dx - rhs.dx,
            dy: self.dy - rhs.dy,
            dz: self.dz - rhs.dz,
            dxx: self.dxx - rhs.dxx,
            dxy: self.dxy - rhs.dxy,
            dxz: self.dxz - rhs.dxz,
            dyy: self.dyy - rhs.dyy,
            dyz: self.dyz - rhs.dyz,
            dzz: self.dzz - rhs.dzz,
        }
    }
}

impl std::ops::Mul for Jet3 {
    type Output = Jet3;
    #[inline]
    fn mul(self, rhs: Jet3) -> Jet3 {
        // Product rule: (fg)' = f'g + fg'
        // (fg)_ab = f_ab·g + f_a·g_b + f_b·g_a + f·g_ab
        Jet3 {
            v: self.v * rhs.v,
            dx: self.dx * rhs.v + self.v * rhs.dx,
            dy: self.dy * rhs.v + self.v * rhs.dy,
            dz: self.dz * rhs.v + self.v * rhs.dz,
            dxx: self.dxx * rhs.v + 2.0 * self.dx * rhs.dx + self.v * rhs.dxx,
            dxy: self.dxy * rhs.v + self.dx * rhs.dy + self.dy * rhs.dx + self.v * rhs.dxy,
            dxz: self.dxz * rhs.v + self.dx * rhs.dz + self.dz * rhs.dx + self.v * rhs.dxz,
            dyy: self.dyy * rhs.v + 2.0 * self.dy * rhs.dy + self.v * rhs.dyy,
            dyz: self.dyz * rhs.v + self.dy * rhs.dz + self.dz * rhs.dy + self.v * rhs.dyz,
            dzz: self.dzz * rhs.v + 2.0 * self.dz * rhs.dz + self.v * rhs.dzz,
        }
    }
}

impl std::ops::Div for Jet3 {
    type Output = Jet3;
    #[inline]
    fn div(self, rhs: Jet3) -> Jet3 {
        self * rhs.recip()
    }
}

impl std::ops::Neg for Jet3 {
    type Output = Jet3;
    #[inline]
    fn neg(self) -> Jet3 {
        Jet3 {
            v: -self.v,
            dx: -self.dx,
            dy: -self.dy,
            dz: -self.dz,
            dxx: -self.dxx,
            dxy: -self.dxy,
            dxz: -self.dxz,
            dyy: -self.dyy,
            dyz: -self.dyz,
            dzz: -self.dzz,
        }
    }
}

impl std::ops::Mul<f64> for Jet3 {
    type Output = Jet3;
    #[inline]
    fn mul(self, rhs: f64) -> Jet3 {
        Jet3 {
            v: self.v * rhs,
            dx: self.dx * rhs,
            dy: self.dy * rhs,
            dz: self.dz * rhs,
            dxx: self.dxx * rhs,
            dxy: self.dxy * rhs,
            dxz: self.dxz * rhs,
            dyy: self.dyy * rhs,
            dyz: self.dyz * rhs,
            dzz: self.dzz * rhs,
        }
    }
}

impl std::ops::Add<f64> for Jet3 {
    type Output = Jet3;
    #[inline]
    fn add(self, rhs: f64) -> Jet3 {
        Jet3 {
            v: self.v + rhs,
            ..self
        }
    }
}

impl std::ops::Sub<f64> for Jet3 {
    type Output = Jet3;
    #[inline]
    fn sub(self, rhs: f64) -> Jet3 {
        Jet3 {
            v: self.v - rhs,
            ..self
        }
    }
}
