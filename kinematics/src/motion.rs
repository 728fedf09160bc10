//! Per-particle kinematics shared by the batch and naive update paths.

use crate::config::Range3;
use crate::math::Vec3;

/// Phase 1: bounce a velocity off the bounding box.
///
/// A component flips sign when the particle sits past the matching bound and
/// is still heading outward. The min and max conditions on one axis cannot
/// both hold for a valid range, so each component flips at most once per
/// call. Positions are not clamped; a particle may overshoot a bound by up
/// to `|velocity| * dt` for one frame before the next call reflects it.
pub fn reflect(velocity: Vec3, position: Vec3, bounds: &Range3) -> Vec3 {
    let mut vel = velocity;

    if vel.x < 0.0 && position.x < bounds.min.x {
        vel.x = -vel.x;
    }
    if vel.y < 0.0 && position.y < bounds.min.y {
        vel.y = -vel.y;
    }
    if vel.z < 0.0 && position.z < bounds.min.z {
        vel.z = -vel.z;
    }
    if vel.x > 0.0 && position.x > bounds.max.x {
        vel.x = -vel.x;
    }
    if vel.y > 0.0 && position.y > bounds.max.y {
        vel.y = -vel.y;
    }
    if vel.z > 0.0 && position.z > bounds.max.z {
        vel.z = -vel.z;
    }

    vel
}

/// Phase 2: Euler position integration.
///
/// `dt` is not validated; a negative value integrates backward in time.
pub fn integrate(position: Vec3, velocity: Vec3, dt: f32) -> Vec3 {
    position + velocity * dt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Range3 {
        Range3::new(Vec3::zero(), Vec3::splat(10.0))
    }

    #[test]
    fn reflects_outward_velocity_at_min_bound() {
        let vel = reflect(
            Vec3::new(-2.0, -3.0, -4.0),
            Vec3::new(-0.5, -0.5, -0.5),
            &unit_box(),
        );
        assert_eq!(vel, Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn reflects_outward_velocity_at_max_bound() {
        let vel = reflect(
            Vec3::new(2.0, 3.0, 4.0),
            Vec3::new(10.5, 10.5, 10.5),
            &unit_box(),
        );
        assert_eq!(vel, Vec3::new(-2.0, -3.0, -4.0));
    }

    #[test]
    fn inward_velocity_is_untouched_outside_bounds() {
        // Already heading back in: no flip even while past the bound.
        let vel = reflect(Vec3::new(2.0, 0.0, 0.0), Vec3::new(-1.0, 5.0, 5.0), &unit_box());
        assert_eq!(vel, Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn no_flip_inside_bounds() {
        let vel = reflect(Vec3::new(-2.0, 3.0, -1.0), Vec3::splat(5.0), &unit_box());
        assert_eq!(vel, Vec3::new(-2.0, 3.0, -1.0));
    }

    #[test]
    fn flipped_sign_does_not_retrigger_opposite_check() {
        // After the min-bound flip the velocity is positive, but the max
        // condition also needs position > max, which cannot hold here.
        let vel = reflect(Vec3::new(-2.0, 0.0, 0.0), Vec3::new(-1.0, 5.0, 5.0), &unit_box());
        assert_eq!(vel.x, 2.0);
    }

    #[test]
    fn axes_reflect_independently() {
        let vel = reflect(
            Vec3::new(-1.0, 2.0, 3.0),
            Vec3::new(-0.1, 10.1, 5.0),
            &unit_box(),
        );
        assert_eq!(vel, Vec3::new(1.0, -2.0, 3.0));
    }

    #[test]
    fn zero_velocity_never_flips() {
        let vel = reflect(Vec3::zero(), Vec3::new(-5.0, 15.0, 5.0), &unit_box());
        assert_eq!(vel, Vec3::zero());
    }

    #[test]
    fn integration_is_exact_euler() {
        let pos = integrate(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, -2.0, 0.5), 0.5);
        assert_eq!(pos, Vec3::new(3.0, 1.0, 3.25));
    }

    #[test]
    fn negative_dt_integrates_backward() {
        let pos = integrate(Vec3::splat(5.0), Vec3::new(1.0, 2.0, 3.0), -1.0);
        assert_eq!(pos, Vec3::new(4.0, 3.0, 2.0));
    }

    #[test]
    fn zero_dt_leaves_position_unchanged() {
        let pos = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(integrate(pos, Vec3::splat(9.0), 0.0), pos);
    }
}
