//! Potential field evaluation over the obstacle registry.
//!
//! The evaluator is a stateless pure function of the registry's current
//! contents: every query re-accumulates the per-obstacle cost and its exact
//! derivatives, so results always reflect the latest obstacle set. One jet
//! pass per obstacle yields potential, gradient, and Hessian together.

use crate::config::FieldConfig;
use crate::core::{Jet3, Mat3, Vec3};
use crate::cost::{CostModel, GaussianRepulsion};
use crate::error::{FieldError, Result};
use crate::registry::ObstacleRegistry;

/// Everything a single accumulation pass produces at a query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSample {
    /// Scalar potential
    pub potential: f64,
    /// Exact gradient of the potential
    pub gradient: Vec3,
    /// Exact Hessian of the potential, symmetric by construction
    pub hessian: Mat3,
}

/// Potential field evaluator.
///
/// Owns the obstacle registry and a cost model, and computes field values
/// and derivatives at arbitrary query points. Generic over [`CostModel`] so
/// the repulsion shape can be swapped without re-deriving anything; the
/// default is [`GaussianRepulsion`].
///
/// # Example
/// ```
/// use kavach_field::{PotentialField, Vec3};
///
/// let mut field = PotentialField::new();
/// field.add_obstacle(0.0, 0.0, 0.0, 1.0, 1.0).unwrap();
///
/// let x = Vec3::new(2.0, 0.0, 1.0);
/// let gradient = field.gradient(&x).unwrap();
/// // The potential increases toward the obstacle, so the gradient at a
/// // point north of it points back south
/// assert!(gradient.x < 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct PotentialField<C: CostModel = GaussianRepulsion> {
    registry: ObstacleRegistry,
    cost_model: C,
    direction_epsilon: f64,
}

impl PotentialField<GaussianRepulsion> {
    /// Create an empty field with default configuration.
    pub fn new() -> Self {
        Self::from_config(&FieldConfig::default())
    }

    /// Create an empty field with the given configuration.
    pub fn from_config(config: &FieldConfig) -> Self {
        Self {
            registry: ObstacleRegistry::new(),
            cost_model: GaussianRepulsion::new(&config.cost),
            direction_epsilon: config.direction_epsilon,
        }
    }
}

impl Default for PotentialField<GaussianRepulsion> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CostModel> PotentialField<C> {
    /// Create an empty field with a custom cost model.
    pub fn with_cost_model(cost_model: C, config: &FieldConfig) -> Self {
        Self {
            registry: ObstacleRegistry::new(),
            cost_model,
            direction_epsilon: config.direction_epsilon,
        }
    }

    /// Register a cylindrical obstacle (NED input, see [`ObstacleRegistry`]).
    pub fn add_obstacle(
        &mut self,
        north: f64,
        east: f64,
        down: f64,
        radius: f64,
        height: f64,
    ) -> Result<()> {
        self.registry.add_obstacle(north, east, down, radius, height)
    }

    /// Reserved boundary ingestion stub, delegated to the registry.
    pub fn add_boundaries(&mut self, vertices: &[Vec3]) -> Result<()> {
        self.registry.add_boundaries(vertices)
    }

    /// Read access to the underlying registry.
    pub fn registry(&self) -> &ObstacleRegistry {
        &self.registry
    }

    /// Potential, gradient, and Hessian at `x` in one accumulation pass.
    pub fn sample(&self, x: &Vec3) -> Result<FieldSample> {
        if !x.is_finite() {
            return Err(FieldError::InvalidQuery(format!(
                "non-finite component in ({}, {}, {})",
                x.x, x.y, x.z
            )));
        }

        let p = Jet3::seed(x);
        let mut acc = Jet3::constant(0.0);
        for obstacle in self.registry.iter() {
            acc = acc + self.cost_model.cost(&p, obstacle);
        }

        Ok(FieldSample {
            potential: acc.v,
            gradient: acc.gradient(),
            hessian: Mat3::symmetric(acc.dxx, acc.dxy, acc.dxz, acc.dyy, acc.dyz, acc.dzz),
        })
    }

    /// Scalar potential at `x`. Zero when no obstacle is registered.
    pub fn potential(&self, x: &Vec3) -> Result<f64> {
        Ok(self.sample(x)?.potential)
    }

    /// Exact gradient of the potential at `x`.
    pub fn gradient(&self, x: &Vec3) -> Result<Vec3> {
        Ok(self.sample(x)?.gradient)
    }

    /// Exact Hessian of the potential at `x`.
    pub fn hessian(&self, x: &Vec3) -> Result<Mat3> {
        Ok(self.sample(x)?.hessian)
    }

    /// Rate of potential increase when moving from `x` along `s`.
    ///
    /// `s` is normalized internally; it need not be unit length.
    pub fn directional_derivative(&self, x: &Vec3, s: &Vec3) -> Result<f64> {
        let unit = self.normalize_direction(s)?;
        Ok(self.sample(x)?.gradient.dot(&unit))
    }

    /// Curvature of the potential along `s` at `x`: the quadratic form
    /// sᵀ·H(x)·s of the unit direction.
    ///
    /// This is the second derivative of t ↦ potential(x + t·u) at t = 0
    /// for the unit direction u. It depends on the query point only
    /// through the Hessian; the point itself never enters the quadratic
    /// form.
    pub fn second_directional_derivative(&self, x: &Vec3, s: &Vec3) -> Result<f64> {
        let unit = self.normalize_direction(s)?;
        Ok(self.sample(x)?.hessian.quadratic_form(&unit))
    }

    fn normalize_direction(&self, s: &Vec3) -> Result<Vec3> {
        if !s.is_finite() {
            return Err(FieldError::InvalidQuery(format!(
                "non-finite direction ({}, {}, {})",
                s.x, s.y, s.z
            )));
        }
        let norm = s.norm();
        if norm <= self.direction_epsilon {
            return Err(FieldError::DegenerateDirection {
                norm,
                epsilon: self.direction_epsilon,
            });
        }
        Ok(*s * (1.0 / norm))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn two_obstacle_field() -> PotentialField {
        let mut field = PotentialField::new();
        field.add_obstacle(1.0, 2.0, 3.0, 0.0, 0.0).unwrap();
        field.add_obstacle(0.0, 0.0, 0.0, 1.0, 1.0).unwrap();
        field
    }

    #[test]
    fn test_empty_field_is_identically_zero() {
        let field = PotentialField::new();
        let x = Vec3::new(3.0, -1.0, 2.0);

        assert_eq!(field.potential(&x).unwrap(), 0.0);
        assert_eq!(field.gradient(&x).unwrap(), Vec3::ZERO);
        assert_eq!(field.hessian(&x).unwrap(), Mat3::ZERO);

        let s = Vec3::new(1.0, 1.0, 0.0);
        assert_eq!(field.directional_derivative(&x, &s).unwrap(), 0.0);
        assert_eq!(field.second_directional_derivative(&x, &s).unwrap(), 0.0);
    }

    #[test]
    fn test_field_is_sum_of_contributions() {
        let x = Vec3::new(0.5, 0.5, 0.5);

        let mut only_a = PotentialField::new();
        only_a.add_obstacle(1.0, 2.0, 3.0, 0.0, 0.0).unwrap();
        let mut only_b = PotentialField::new();
        only_b.add_obstacle(0.0, 0.0, 0.0, 1.0, 1.0).unwrap();

        let both = two_obstacle_field();
        assert_relative_eq!(
            both.potential(&x).unwrap(),
            only_a.potential(&x).unwrap() + only_b.potential(&x).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_sample_matches_individual_queries() {
        let field = two_obstacle_field();
        let x = Vec3::new(1.0, 2.0, 1.0);
        let sample = field.sample(&x).unwrap();

        assert_eq!(sample.potential, field.potential(&x).unwrap());
        assert_eq!(sample.gradient, field.gradient(&x).unwrap());
        assert_eq!(sample.hessian, field.hessian(&x).unwrap());
    }

    #[test]
    fn test_hessian_symmetric() {
        let field = two_obstacle_field();
        let h = field.hessian(&Vec3::new(0.3, -0.7, 1.1)).unwrap();
        assert!(h.is_symmetric(0.0));
    }

    #[test]
    fn test_directional_derivative_identity() {
        let field = two_obstacle_field();
        let x = Vec3::new(1.0, 2.0, 1.0);
        let s = Vec3::new(3.0, -1.0, 2.0); // deliberately non-unit

        let dd = field.directional_derivative(&x, &s).unwrap();
        let expected = field.gradient(&x).unwrap().dot(&s.normalized());
        assert_relative_eq!(dd, expected, epsilon = 1e-15);
    }

    #[test]
    fn test_second_directional_derivative_is_pure_quadratic_form() {
        let field = two_obstacle_field();
        let x = Vec3::new(1.0, 2.0, 1.0);
        let s = Vec3::new(1.0, 1.0, 0.0);

        let d2 = field.second_directional_derivative(&x, &s).unwrap();
        let u = s.normalized();
        let h = field.hessian(&x).unwrap();
        assert_relative_eq!(d2, h.quadratic_form(&u), epsilon = 1e-15);

        // Translating both obstacles and the query leaves the curvature
        // unchanged; any formula that mixes the query point into the
        // quadratic form would break here.
        let mut shifted = PotentialField::new();
        shifted.add_obstacle(11.0, 2.0, 3.0, 0.0, 0.0).unwrap();
        shifted.add_obstacle(10.0, 0.0, 0.0, 1.0, 1.0).unwrap();
        let d2_shifted = shifted
            .second_directional_derivative(&Vec3::new(11.0, 2.0, 1.0), &s)
            .unwrap();
        assert_relative_eq!(d2, d2_shifted, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_direction_rejected() {
        let field = two_obstacle_field();
        let x = Vec3::new(1.0, 2.0, 1.0);
        let zero = Vec3::ZERO;

        assert!(matches!(
            field.directional_derivative(&x, &zero),
            Err(FieldError::DegenerateDirection { .. })
        ));
        assert!(matches!(
            field.second_directional_derivative(&x, &zero),
            Err(FieldError::DegenerateDirection { .. })
        ));

        // Near-zero below epsilon is degenerate too
        let tiny = Vec3::new(1e-12, 0.0, 0.0);
        assert!(field.directional_derivative(&x, &tiny).is_err());
    }

    #[test]
    fn test_non_finite_query_rejected() {
        let field = two_obstacle_field();
        let bad = Vec3::new(f64::NAN, 0.0, 0.0);

        assert!(matches!(
            field.potential(&bad),
            Err(FieldError::InvalidQuery(_))
        ));
        assert!(field.gradient(&bad).is_err());
        assert!(field.hessian(&bad).is_err());
    }

    #[test]
    fn test_smoke_scenario_outputs_finite() {
        let field = two_obstacle_field();
        let x = Vec3::new(1.0, 2.0, 1.0);
        let s = Vec3::new(1.0, 1.0, 0.0);

        let sample = field.sample(&x).unwrap();
        assert!(sample.potential.is_finite() && sample.potential > 0.0);
        assert!(sample.gradient.is_finite());
        assert!(sample.hessian.is_symmetric(0.0));
        assert!(field.directional_derivative(&x, &s).unwrap().is_finite());
        assert!(field
            .second_directional_derivative(&x, &s)
            .unwrap()
            .is_finite());
    }

    #[test]
    fn test_gradient_repels_from_obstacle() {
        // Gradient ascent climbs toward the hazard, so a path follower
        // moving along the negative gradient backs away from it.
        let mut field = PotentialField::new();
        field.add_obstacle(0.0, 0.0, 0.0, 1.0, 1.0).unwrap();

        let x = Vec3::new(2.0, 0.0, 0.0);
        let g = field.gradient(&x).unwrap();
        assert!(g.x < 0.0, "potential must increase toward the obstacle");
    }
}
