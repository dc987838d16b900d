//! KavachField - Artificial potential field engine for 3D obstacle avoidance
//!
//! Computes a repulsive potential over cylindrical obstacles in a local
//! navigation frame, together with its exact gradient, Hessian, and
//! directional derivatives. An outer path-following controller steers away
//! from hazards by descending the field and uses the curvature information
//! for local path corrections.
//!
//! # Architecture
//!
//! The crate is organized into 3 logical layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                    field/                           │  ← Evaluation
//! │        (accumulation, directional derivatives)      │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                cost/ + registry/                    │  ← Domain model
//! │        (repulsion policy, obstacle bookkeeping)     │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                           │  ← Foundation
//! │              (types, autodiff jets)                 │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Derivatives are exact: the per-obstacle cost is evaluated on
//! second-order forward-mode jets ([`Jet3`]), so the gradient and Hessian
//! fall out of one pass per obstacle with no finite differencing. Any C²
//! cost model plugs in through the [`CostModel`] trait without touching the
//! derivative machinery.
//!
//! # Example
//!
//! ```
//! use kavach_field::{PotentialField, Vec3};
//!
//! let mut field = PotentialField::new();
//! // NED input convention: third coordinate is down-positive
//! field.add_obstacle(1.0, 2.0, 3.0, 0.0, 0.0).unwrap();
//! field.add_obstacle(0.0, 0.0, 0.0, 1.0, 1.0).unwrap();
//!
//! let x = Vec3::new(1.0, 2.0, 1.0);
//! let s = Vec3::new(1.0, 1.0, 0.0);
//!
//! let potential = field.potential(&x).unwrap();
//! let slope = field.directional_derivative(&x, &s).unwrap();
//! assert!(potential > 0.0 && slope.is_finite());
//! ```

// ============================================================================
// Layer 1: Core foundation (no internal deps)
// ============================================================================
pub mod core;

// ============================================================================
// Layer 2: Domain model (depends on core)
// ============================================================================
pub mod config;
pub mod cost;
pub mod error;
pub mod registry;

// ============================================================================
// Layer 3: Evaluation (depends on core, domain model)
// ============================================================================
pub mod field;

// ============================================================================
// Convenience re-exports (flat namespace for common use)
// ============================================================================

pub use crate::core::{Jet3, Mat3, Obstacle, Vec3};
pub use config::{CostConfig, FieldConfig};
pub use cost::{CostModel, GaussianRepulsion};
pub use error::{FieldError, Result};
pub use field::{FieldSample, PotentialField};
pub use registry::ObstacleRegistry;
