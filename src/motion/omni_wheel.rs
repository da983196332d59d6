use core::f32::consts::PI;

use libm::{cosf, sinf};
use num_traits::Zero;

use crate::math::vector2::Vector2;

use super::{ChassisError, WheelSpecFault};

/// Raw wheel description as it comes out of configuration.
///
/// Exactly one of (`angle_deg`, `radius`) or (`dx`, `dy`) has to be filled in,
/// `OmniWheel::try_from_spec` rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WheelSpec {
    /// contact point relative to the chassis center, mm
    pub position: Vector2,
    /// direction of travel, degrees clockwise from +Y viewed from above
    pub angle_deg: Option<f32>,
    /// effective rolling radius, mm
    pub radius: Option<f32>,
    /// contact point travel per revolution, mm
    pub dx: Option<f32>,
    pub dy: Option<f32>,
}

impl WheelSpec {
    pub const fn at(x: f32, y: f32) -> WheelSpec {
        WheelSpec {
            position: Vector2::new(x, y),
            angle_deg: None,
            radius: None,
            dx: None,
            dy: None,
        }
    }

    pub const fn with_angle(self, angle_deg: f32, radius: f32) -> WheelSpec {
        WheelSpec {
            angle_deg: Some(angle_deg),
            radius: Some(radius),
            ..self
        }
    }

    pub const fn with_drive_vector(self, dx: f32, dy: f32) -> WheelSpec {
        WheelSpec {
            dx: Some(dx),
            dy: Some(dy),
            ..self
        }
    }
}

/// A single omni-wheel: rollers perpendicular to the main wheel, so it rolls
/// along its drive vector and slides freely across it.
///
/// The drive vector is the contact point displacement after one full
/// revolution at positive speed. Its length is the effective circumference,
/// which lets wheels of different sizes share a chassis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OmniWheel {
    position: Vector2,
    drive_vector: Vector2,
}

impl OmniWheel {
    pub fn try_from_spec(spec: &WheelSpec) -> Result<OmniWheel, ChassisError> {
        let drive_vector = match (spec.angle_deg, spec.radius, spec.dx, spec.dy) {
            (None, None, Some(dx), Some(dy)) => Vector2::new(dx, dy),
            (Some(angle_deg), Some(radius), None, None) => drive_vector_from_angle(angle_deg, radius),
            (None, None, None, None) => return Err(reject(WheelSpecFault::Missing)),
            (angle_deg, radius, dx, dy) => {
                let polar = angle_deg.is_some() || radius.is_some();
                let cartesian = dx.is_some() || dy.is_some();
                let fault = if polar && cartesian {
                    WheelSpecFault::Conflicting
                } else {
                    WheelSpecFault::Incomplete
                };
                return Err(reject(fault));
            }
        };

        Self::from_drive_vector(spec.position, drive_vector)
    }

    pub fn from_drive_vector(position: Vector2, drive_vector: Vector2) -> Result<OmniWheel, ChassisError> {
        check_drive_vector(drive_vector)?;

        Ok(OmniWheel { position, drive_vector })
    }

    /// `angle_deg` is clockwise from +Y, `radius` is the effective rolling radius.
    pub fn from_angle(position: Vector2, angle_deg: f32, radius: f32) -> Result<OmniWheel, ChassisError> {
        Self::from_drive_vector(position, drive_vector_from_angle(angle_deg, radius))
    }

    /// Wheel mounted tangentially at `distance` from the center, at polar angle
    /// `mount_angle_deg` clockwise from +Y. Positive speed pushes the chassis
    /// clockwise.
    pub fn from_radial_mount(mount_angle_deg: f32, radius: f32, distance: f32) -> Result<OmniWheel, ChassisError> {
        check_rolling_radius(radius)?;

        Ok(Self::radial_mount(mount_angle_deg, radius, distance))
    }

    // caller has run check_rolling_radius
    pub(crate) fn radial_mount(mount_angle_deg: f32, radius: f32, distance: f32) -> OmniWheel {
        let mount_rads = mount_angle_deg.to_radians();
        OmniWheel {
            position: Vector2::new(sinf(mount_rads) * distance, cosf(mount_rads) * distance),
            drive_vector: drive_vector_from_angle(mount_angle_deg + 90.0, radius),
        }
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn drive_vector(&self) -> Vector2 {
        self.drive_vector
    }

    /// Distance travelled per revolution, mm.
    pub fn circumference(&self) -> f32 {
        self.drive_vector.magnitude()
    }

    pub fn rolling_direction(&self) -> Vector2 {
        self.drive_vector.normalized()
    }

    /// Revolutions per second needed for the contact point to follow
    /// `velocity` (mm/s). The component across the rolling direction is
    /// taken up by the rollers and ignored.
    pub fn speed_for(&self, velocity: Vector2) -> f32 {
        velocity.dot(self.drive_vector) / self.drive_vector.magnitude_squared()
    }
}

fn drive_vector_from_angle(angle_deg: f32, radius: f32) -> Vector2 {
    let angle_rads = angle_deg.to_radians();
    let circumference = 2.0 * PI * radius;
    Vector2::new(sinf(angle_rads) * circumference, cosf(angle_rads) * circumference)
}

// speed_for divides by |dv|^2, so that is what has to be usable, not just the components
fn check_drive_vector(drive_vector: Vector2) -> Result<(), ChassisError> {
    let divisor = drive_vector.magnitude_squared();

    if !drive_vector.is_finite() || !divisor.is_finite() {
        return Err(reject(WheelSpecFault::NonFiniteDriveVector));
    }

    if drive_vector.is_zero() || divisor == 0.0 {
        return Err(reject(WheelSpecFault::ZeroDriveVector));
    }

    Ok(())
}

/// A radius that yields a valid drive vector at 0 degrees yields one at every angle.
pub(crate) fn check_rolling_radius(radius: f32) -> Result<(), ChassisError> {
    check_drive_vector(drive_vector_from_angle(0.0, radius))
}

fn reject(fault: WheelSpecFault) -> ChassisError {
    error!("rejecting omni-wheel specification: {}", fault);
    fault.into()
}
