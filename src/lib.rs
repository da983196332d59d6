#![cfg_attr(not(test), no_std)]

// must stay first so the logging macros are visible to the modules below
pub(crate) mod fmt;

pub mod math;
pub mod motion;

pub use math::{vector2::Vector2, MathError};
pub use motion::{
    holo_chassis::HoloChassis,
    omni_wheel::{OmniWheel, WheelSpec},
    BodyVelocity, ChassisError, WheelSpecFault,
};
