//! Obstacle registry: append-only bookkeeping of avoidance hazards.

use crate::core::{Obstacle, Vec3};
use crate::error::{FieldError, Result};
use tracing::{debug, warn};

/// Ordered, append-only collection of registered obstacles.
///
/// Registration input uses the down-positive (NED) convention common in
/// aviation; the stored position is up-positive, so all field math runs in a
/// right-handed frame. Insertion order is preserved for reproducibility even
/// though the field sum is order-independent.
///
/// Not internally synchronized: wrap in `Arc<RwLock<_>>` if registration and
/// evaluation must overlap across threads, or freeze the set before
/// concurrent querying begins.
#[derive(Debug, Clone, Default)]
pub struct ObstacleRegistry {
    obstacles: Vec<Obstacle>,
}

impl ObstacleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a cylindrical obstacle.
    ///
    /// # Arguments
    /// * `north` - Obstacle NORTH position (m)
    /// * `east` - Obstacle EAST position (m)
    /// * `down` - Obstacle DOWN position (m); stored negated as "up"
    /// * `radius` - Obstacle radius (m), non-negative
    /// * `height` - Obstacle height (m), non-negative
    pub fn add_obstacle(
        &mut self,
        north: f64,
        east: f64,
        down: f64,
        radius: f64,
        height: f64,
    ) -> Result<()> {
        if !(north.is_finite() && east.is_finite() && down.is_finite()) {
            return Err(FieldError::InvalidObstacle(format!(
                "non-finite position ({}, {}, {})",
                north, east, down
            )));
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(FieldError::InvalidObstacle(format!(
                "radius must be finite and non-negative, got {}",
                radius
            )));
        }
        if !height.is_finite() || height < 0.0 {
            return Err(FieldError::InvalidObstacle(format!(
                "height must be finite and non-negative, got {}",
                height
            )));
        }

        let obstacle = Obstacle {
            position: Vec3::new(north, east, -down),
            radius,
            height,
        };
        debug!(
            "Registered obstacle #{} at ({:.2}, {:.2}, {:.2}) r={:.2} h={:.2}",
            self.obstacles.len(),
            obstacle.position.x,
            obstacle.position.y,
            obstacle.position.z,
            radius,
            height
        );
        self.obstacles.push(obstacle);
        Ok(())
    }

    /// Reserved for polygonal boundary ingestion.
    ///
    /// Boundary forces are not yet implemented. The vertices are validated
    /// so malformed input fails early, then discarded without altering the
    /// registry.
    pub fn add_boundaries(&mut self, vertices: &[Vec3]) -> Result<()> {
        for (i, v) in vertices.iter().enumerate() {
            if !v.is_finite() {
                return Err(FieldError::InvalidObstacle(format!(
                    "boundary vertex {} is non-finite",
                    i
                )));
            }
        }
        warn!(
            "Boundary forces not yet implemented; ignoring {} vertices",
            vertices.len()
        );
        Ok(())
    }

    /// Read-only ordered view of all registered obstacles.
    #[inline]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Iterate over registered obstacles in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Obstacle> {
        self.obstacles.iter()
    }

    /// Number of registered obstacles.
    #[inline]
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    /// True when no obstacle has been registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}
