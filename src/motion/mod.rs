use core::fmt;

use nalgebra::Vector3;

use crate::math::vector2::Vector2;

pub mod holo_chassis;
pub mod omni_wheel;
pub mod params;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WheelSpecFault {
    /// neither (angle, radius) nor (dx, dy) was given
    Missing,
    /// both (angle, radius) and (dx, dy) were given
    Conflicting,
    /// only one half of a pair was given
    Incomplete,
    ZeroDriveVector,
    NonFiniteDriveVector,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChassisError {
    InvalidWheelSpecification(WheelSpecFault),
}

impl From<WheelSpecFault> for ChassisError {
    fn from(fault: WheelSpecFault) -> Self {
        ChassisError::InvalidWheelSpecification(fault)
    }
}

impl fmt::Display for WheelSpecFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            WheelSpecFault::Missing => "must specify exactly one of angle and radius or dx,dy vector, got neither",
            WheelSpecFault::Conflicting => "must specify exactly one of angle and radius or dx,dy vector, got both",
            WheelSpecFault::Incomplete => "angle and radius, or dx and dy, must be given together",
            WheelSpecFault::ZeroDriveVector => "drive vector is zero",
            WheelSpecFault::NonFiniteDriveVector => "drive vector is not finite",
        };
        f.write_str(reason)
    }
}

impl fmt::Display for ChassisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChassisError::InvalidWheelSpecification(fault) => {
                write!(f, "invalid wheel specification: {}", fault)
            }
        }
    }
}

/// Commanded chassis motion for one control tick.
///
/// `translation` is in mm/s along the chassis axes, `rotation_deg_s` is
/// clockwise-positive viewed from above.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BodyVelocity {
    pub translation: Vector2,
    pub rotation_deg_s: f32,
}

impl BodyVelocity {
    pub const fn new(dx: f32, dy: f32, rotation_deg_s: f32) -> BodyVelocity {
        BodyVelocity {
            translation: Vector2::new(dx, dy),
            rotation_deg_s,
        }
    }

    /// Velocity (mm/s) of the chassis point `point` when this motion is applied about `origin`.
    pub fn velocity_at(&self, point: Vector2, origin: Vector2) -> Vector2 {
        let r = point - origin;

        let mut v = self.translation;
        v += r.perpendicular() * self.rotation_deg_s.to_radians();
        v
    }

    pub fn scale(self, k: f32) -> BodyVelocity {
        BodyVelocity {
            translation: self.translation.scale(k),
            rotation_deg_s: self.rotation_deg_s * k,
        }
    }
}

// x, y, theta ordering matches the controller's body velocity vectors
impl From<Vector3<f32>> for BodyVelocity {
    fn from(v: Vector3<f32>) -> Self {
        BodyVelocity::new(v.x, v.y, v.z)
    }
}

impl From<BodyVelocity> for Vector3<f32> {
    fn from(v: BodyVelocity) -> Self {
        Vector3::new(v.translation.x, v.translation.y, v.rotation_deg_s)
    }
}
