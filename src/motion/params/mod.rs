use super::{holo_chassis::HoloChassis, ChassisError};

pub mod robot_physical_params;

use robot_physical_params::*;

pub fn ateam_chassis() -> Result<HoloChassis<4>, ChassisError> {
    HoloChassis::from_radial_mounts(
        ATEAM_WHEEL_MOUNT_ANGLES_DEG,
        ATEAM_WHEEL_RADIUS_MM,
        ATEAM_WHEEL_DISTANCE_TO_CENTER_MM,
    )
}

pub fn kiwi_chassis() -> Result<HoloChassis<3>, ChassisError> {
    HoloChassis::from_radial_mounts(
        KIWI_WHEEL_MOUNT_ANGLES_DEG,
        KIWI_WHEEL_RADIUS_MM,
        KIWI_WHEEL_DISTANCE_TO_CENTER_MM,
    )
}
