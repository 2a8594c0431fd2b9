//! Spatial distributions: attack and block footprints.
//!
//! A distribution is evaluated in the *local frame* of its owner: the owner
//! stands at the origin and faces +x. [`Placement::to_local`] converts world
//! positions into that frame.
//!
//! Every test goes through three stages of increasing cost, and a negative at
//! any stage short-circuits the rest:
//!
//! ```text
//! fast_in_bounds  →  in_bounds  →  eval_at
//! (bounding box)     (exact area)   (arc / shape predicate)
//! ```

use crate::common::Vector2;

/// Position and orientation of the actor owning a distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub origin: Vector2,
    /// Unit facing direction. A zero vector is treated as facing +x.
    pub facing: Vector2,
}

impl Placement {
    pub fn new(origin: Vector2, facing: Vector2) -> Self {
        Self {
            origin,
            facing: facing.normalized().unwrap_or(Vector2::RIGHT),
        }
    }

    /// Express a world position in the owner's local frame.
    pub fn to_local(&self, world: Vector2) -> Vector2 {
        let offset = world - self.origin;
        // Rotate by -angle(facing): x along facing, y to its left.
        Vector2::new(offset.dot(self.facing), self.facing.cross(offset))
    }
}

/// Shape of an attack or block footprint.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpatialDistribution {
    /// Everything within `radius` of the owner (hammer swings).
    Circle { radius: f32 },
    /// A cone of `radius` opening `half_angle` radians to each side of the
    /// facing direction (sword arcs, shield block arcs).
    Sector { radius: f32, half_angle: f32 },
    /// A straight strip in front of the owner (spear thrusts).
    Line { length: f32, half_width: f32 },
}

impl SpatialDistribution {
    /// Cheap bounding-box check in the local frame.
    pub fn fast_in_bounds(&self, pos: Vector2) -> bool {
        let extent = self.reach();
        pos.x.abs() <= extent && pos.y.abs() <= extent
    }

    /// Exact containment in the distribution's outer area.
    pub fn in_bounds(&self, pos: Vector2) -> bool {
        match *self {
            SpatialDistribution::Circle { radius } | SpatialDistribution::Sector { radius, .. } => {
                pos.length_squared() <= radius * radius
            }
            SpatialDistribution::Line { length, half_width } => {
                (0.0..=length).contains(&pos.x) && pos.y.abs() <= half_width
            }
        }
    }

    /// Whether the shape actually affects `pos`, given it is in bounds.
    pub fn eval_at(&self, pos: Vector2) -> bool {
        match *self {
            SpatialDistribution::Circle { .. } | SpatialDistribution::Line { .. } => true,
            SpatialDistribution::Sector { half_angle, .. } => {
                // The owner's own position counts as inside the arc.
                if pos.length_squared() <= f32::EPSILON {
                    return true;
                }
                pos.y.atan2(pos.x).abs() <= half_angle
            }
        }
    }

    /// Staged test of a local-frame position.
    pub fn affects(&self, pos: Vector2) -> bool {
        self.fast_in_bounds(pos) && self.in_bounds(pos) && self.eval_at(pos)
    }

    /// Staged test of a world position against this distribution placed at `placement`.
    pub fn affects_world(&self, placement: &Placement, world: Vector2) -> bool {
        self.affects(placement.to_local(world))
    }

    /// Farthest distance from the owner that can be affected.
    pub fn reach(&self) -> f32 {
        match *self {
            SpatialDistribution::Circle { radius } | SpatialDistribution::Sector { radius, .. } => {
                radius
            }
            SpatialDistribution::Line { length, half_width } => length.max(half_width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_4;

    #[test]
    fn circle_contains_points_within_radius() {
        let circle = SpatialDistribution::Circle { radius: 2.0 };
        assert!(circle.affects(Vector2::new(1.0, 1.0)));
        assert!(circle.affects(Vector2::new(-2.0, 0.0)));
        // Inside the bounding box but outside the circle.
        let corner = Vector2::new(1.9, 1.9);
        assert!(circle.fast_in_bounds(corner));
        assert!(!circle.in_bounds(corner));
        assert!(!circle.affects(corner));
    }

    #[test]
    fn sector_only_covers_the_front_arc() {
        let sector = SpatialDistribution::Sector {
            radius: 3.0,
            half_angle: FRAC_PI_4,
        };
        assert!(sector.affects(Vector2::new(2.0, 0.5)));
        assert!(!sector.affects(Vector2::new(-2.0, 0.0)));
        assert!(!sector.affects(Vector2::new(0.5, 2.0)));
    }

    #[test]
    fn line_is_a_forward_strip() {
        let line = SpatialDistribution::Line {
            length: 4.0,
            half_width: 0.5,
        };
        assert!(line.affects(Vector2::new(3.5, 0.2)));
        assert!(!line.affects(Vector2::new(3.5, 0.8)));
        assert!(!line.affects(Vector2::new(-0.5, 0.0)));
    }

    #[test]
    fn placement_rotates_into_facing_frame() {
        let placement = Placement::new(Vector2::new(5.0, 5.0), Vector2::new(0.0, 2.0));
        let local = placement.to_local(Vector2::new(5.0, 7.0));
        assert!((local.x - 2.0).abs() < 1e-5);
        assert!(local.y.abs() < 1e-5);

        let sector = SpatialDistribution::Sector {
            radius: 3.0,
            half_angle: FRAC_PI_4,
        };
        assert!(sector.affects_world(&placement, Vector2::new(5.0, 7.0)));
        assert!(!sector.affects_world(&placement, Vector2::new(5.0, 3.0)));
    }

    #[test]
    fn zero_facing_defaults_to_right() {
        let placement = Placement::new(Vector2::ZERO, Vector2::ZERO);
        assert_eq!(placement.facing, Vector2::RIGHT);
    }
}
