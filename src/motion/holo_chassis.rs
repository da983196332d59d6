use libm::fabsf;
use nalgebra::SMatrix;

use crate::math::vector2::Vector2;

use super::omni_wheel::{check_rolling_radius, OmniWheel};
use super::{BodyVelocity, ChassisError};

// |sin| of the angle between two rolling directions below which they count as parallel
const PARALLEL_TOLERANCE: f32 = 1e-4;

/// An assembly of independently driven omni-wheels forming a holonomic drive.
///
/// Wheel order is fixed at construction and is the order speeds are returned
/// in. Three wheels with pairwise non-parallel rolling directions are needed
/// to control both translation axes and rotation, but any count (including
/// zero) is accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HoloChassis<const N: usize> {
    wheels: [OmniWheel; N],
}

impl<const N: usize> HoloChassis<N> {
    pub fn new(wheels: [OmniWheel; N]) -> HoloChassis<N> {
        let chassis = HoloChassis { wheels };

        debug!("holo chassis configured with {=usize} wheels", N);
        if !chassis.is_holonomic() {
            warn!("holo chassis wheel set is not holonomic, some motions cannot be commanded");
        }

        chassis
    }

    /// Builds a chassis of identical wheels mounted tangentially on a circle
    /// of `distance_to_center` mm, one per entry of `mount_angles_deg`
    /// (clockwise from +Y).
    pub fn from_radial_mounts(
        mount_angles_deg: [f32; N],
        wheel_radius: f32,
        distance_to_center: f32,
    ) -> Result<HoloChassis<N>, ChassisError> {
        check_rolling_radius(wheel_radius)?;

        Ok(Self::new(mount_angles_deg.map(|angle_deg| {
            OmniWheel::radial_mount(angle_deg, wheel_radius, distance_to_center)
        })))
    }

    pub fn wheels(&self) -> &[OmniWheel; N] {
        &self.wheels
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Wheel speeds in rev/s for a translation of `dx`, `dy` mm/s and a
    /// clockwise rotation of `rotation_deg_s` about the chassis origin.
    ///
    /// Nothing is clamped, results may exceed what the motors can do.
    pub fn get_wheel_speeds(&self, dx: f32, dy: f32, rotation_deg_s: f32) -> [f32; N] {
        self.get_wheel_speeds_about(dx, dy, rotation_deg_s, Vector2::ZERO)
    }

    /// As `get_wheel_speeds`, rotating about `origin` instead. `dx`, `dy` is
    /// then the velocity of `origin` itself.
    pub fn get_wheel_speeds_about(&self, dx: f32, dy: f32, rotation_deg_s: f32, origin: Vector2) -> [f32; N] {
        self.wheel_speeds_for(&BodyVelocity::new(dx, dy, rotation_deg_s), origin)
    }

    pub fn wheel_speeds_for(&self, velocity: &BodyVelocity, origin: Vector2) -> [f32; N] {
        let mut speeds = [0.0; N];
        for (speed, wheel) in speeds.iter_mut().zip(self.wheels.iter()) {
            *speed = wheel.speed_for(velocity.velocity_at(wheel.position(), origin));
        }

        speeds
    }

    /// Linear map from `[dx, dy, rotation_deg_s]` to wheel speeds for rotation about `origin`.
    pub fn body_to_wheel_matrix(&self, origin: Vector2) -> SMatrix<f32, N, 3> {
        SMatrix::<f32, N, 3>::from_fn(|row, col| {
            let wheel = &self.wheels[row];
            let drive_vector = wheel.drive_vector();
            let scale = drive_vector.magnitude_squared();

            match col {
                0 => drive_vector.x / scale,
                1 => drive_vector.y / scale,
                _ => {
                    let tangent = (wheel.position() - origin).perpendicular();
                    tangent.dot(drive_vector) * 1.0f32.to_radians() / scale
                }
            }
        })
    }

    /// True when some three wheels have pairwise non-parallel rolling directions.
    pub fn is_holonomic(&self) -> bool {
        let dirs = self.wheels.map(|wheel| wheel.rolling_direction());
        let parallel = |a: usize, b: usize| fabsf(dirs[a].perp_dot(dirs[b])) <= PARALLEL_TOLERANCE;

        for i in 0..N {
            for j in (i + 1)..N {
                if parallel(i, j) {
                    continue;
                }

                for k in (j + 1)..N {
                    if !parallel(i, k) && !parallel(j, k) {
                        return true;
                    }
                }
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use nalgebra::Vector3;

    fn wheel(x: f32, y: f32, dx: f32, dy: f32) -> OmniWheel {
        OmniWheel::from_drive_vector(Vector2::new(x, y), Vector2::new(dx, dy)).unwrap()
    }

    #[test]
    fn front_wheel_under_clockwise_rotation() {
        let chassis = HoloChassis::new([wheel(0.0, 100.0, 100.0, 0.0)]);
        let speeds = chassis.get_wheel_speeds(0.0, 0.0, 90.0);
        assert_relative_eq!(speeds[0], core::f32::consts::FRAC_PI_2, max_relative = 1e-6);
    }

    #[test]
    fn empty_chassis() {
        let chassis = HoloChassis::<0>::new([]);
        assert!(chassis.is_empty());
        assert_eq!(chassis.len(), 0);
        assert!(chassis.get_wheel_speeds(100.0, -20.0, 45.0).is_empty());
        assert!(chassis.get_wheel_speeds_about(0.0, 0.0, 90.0, Vector2::new(5.0, 5.0)).is_empty());
        assert!(!chassis.is_holonomic());
        assert_eq!(chassis.body_to_wheel_matrix(Vector2::ZERO).nrows(), 0);
    }

    #[test]
    fn holonomic_detection() {
        let kiwi = HoloChassis::from_radial_mounts([0.0, 120.0, 240.0], 30.0, 100.0).unwrap();
        assert!(kiwi.is_holonomic());

        let two = HoloChassis::new([wheel(0.0, 100.0, 1.0, 0.0), wheel(100.0, 0.0, 0.0, 1.0)]);
        assert!(!two.is_holonomic());

        // all four rolling along X, no matter where they sit
        let parallel = HoloChassis::new([
            wheel(-50.0, 50.0, 1.0, 0.0),
            wheel(50.0, 50.0, -2.0, 0.0),
            wheel(50.0, -50.0, 1.0, 0.0),
            wheel(-50.0, -50.0, 3.0, 0.0),
        ]);
        assert!(!parallel.is_holonomic());

        // two parallel wheels plus two that break the tie
        let mixed = HoloChassis::new([
            wheel(0.0, 50.0, 1.0, 0.0),
            wheel(0.0, -50.0, 1.0, 0.0),
            wheel(50.0, 0.0, 0.0, 1.0),
            wheel(-50.0, 0.0, 1.0, 1.0),
        ]);
        assert!(mixed.is_holonomic());
    }

    #[test]
    fn matrix_matches_direct_computation() {
        let chassis = HoloChassis::from_radial_mounts([330.0, 45.0, 135.0, 210.0], 30.0, 81.4).unwrap();
        let origin = Vector2::new(20.0, -35.0);
        let t = chassis.body_to_wheel_matrix(origin);

        for (dx, dy, rot) in [(0.0, 0.0, 0.0), (500.0, 0.0, 0.0), (-120.0, 330.0, 45.0), (0.0, 0.0, -720.0)] {
            let direct = chassis.get_wheel_speeds_about(dx, dy, rot, origin);
            let mapped = t * Vector3::new(dx, dy, rot);
            for (a, b) in direct.iter().zip(mapped.iter()) {
                assert_abs_diff_eq!(*a, *b, epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn body_velocity_from_controller_vector() {
        let chassis = HoloChassis::from_radial_mounts([0.0, 120.0, 240.0], 25.0, 90.0).unwrap();
        let velocity = BodyVelocity::from(Vector3::new(150.0, -75.0, 30.0));

        assert_eq!(
            chassis.wheel_speeds_for(&velocity, Vector2::ZERO),
            chassis.get_wheel_speeds(150.0, -75.0, 30.0)
        );
        assert_eq!(Vector3::from(velocity), Vector3::new(150.0, -75.0, 30.0));
    }
}
