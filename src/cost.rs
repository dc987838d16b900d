//! Per-obstacle cost models.
//!
//! The evaluator sums one cost contribution per obstacle and differentiates
//! it exactly through [`Jet3`] arithmetic. Any twice-differentiable function
//! of the query point works; the model is a pluggable policy so the field
//! shape can change without touching the derivative machinery.

use crate::config::CostConfig;
use crate::core::{Jet3, Obstacle};

/// A twice continuously differentiable per-obstacle cost function.
///
/// `p` is the query point seeded as jet variables, so returning any
/// expression built from it yields the exact gradient and Hessian of the
/// contribution alongside its value.
pub trait CostModel {
    fn cost(&self, p: &[Jet3; 3], obstacle: &Obstacle) -> Jet3;
}

/// Anisotropic Gaussian repulsion around the obstacle cylinder.
///
/// ```text
/// cost = A · exp(−(Δn² + Δe²)/(2σ_h²) − Δu²/(2σ_v²))
///
/// σ_h = radius + horizontal_margin
/// σ_v = height/2 + vertical_margin
/// ```
///
/// Peaks at the cylinder center, decays smoothly to zero with distance, and
/// widens with obstacle radius and height. The margins are strictly positive
/// so a point obstacle (radius = height = 0) still produces a smooth bump
/// rather than a singularity. C^∞ everywhere, which more than satisfies the
/// C² requirement of the derivative machinery.
#[derive(Debug, Clone)]
pub struct GaussianRepulsion {
    strength: f64,
    horizontal_margin: f64,
    vertical_margin: f64,
}

impl GaussianRepulsion {
    pub fn new(config: &CostConfig) -> Self {
        Self {
            strength: config.strength,
            horizontal_margin: config.horizontal_margin,
            vertical_margin: config.vertical_margin,
        }
    }
}

impl Default for GaussianRepulsion {
    fn default() -> Self {
        Self::new(&CostConfig::default())
    }
}

impl CostModel for GaussianRepulsion {
    fn cost(&self, p: &[Jet3; 3], obstacle: &Obstacle) -> Jet3 {
        let dn = p[0] - obstacle.position.x;
        let de = p[1] - obstacle.position.y;
        let du = p[2] - obstacle.position.z;

        let sigma_h = obstacle.radius + self.horizontal_margin;
        let sigma_v = 0.5 * obstacle.height + self.vertical_margin;
        let inv_two_h_sq = 1.0 / (2.0 * sigma_h * sigma_h);
        let inv_two_v_sq = 1.0 / (2.0 * sigma_v * sigma_v);

        let exponent = (dn * dn + de * de) * inv_two_h_sq + (du * du) * inv_two_v_sq;
        (-exponent).exp() * self.strength
    }
}
