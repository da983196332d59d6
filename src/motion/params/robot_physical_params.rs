// four wheel A-Team drivetrain
pub const ATEAM_WHEEL_MOUNT_ANGLES_DEG: [f32; 4] = [330.0, 45.0, 135.0, 210.0]; // Degrees from y+, clockwise
pub const ATEAM_WHEEL_RADIUS_MM: f32 = 30.0; // was 24.7  // wheel dia 49mm
pub const ATEAM_WHEEL_DISTANCE_TO_CENTER_MM: f32 = 81.4; // from center of wheel body to center of robot

// three wheel kiwi drive, wheels 120 degrees apart
pub const KIWI_WHEEL_MOUNT_ANGLES_DEG: [f32; 3] = [0.0, 120.0, 240.0];
pub const KIWI_WHEEL_RADIUS_MM: f32 = 24.0;
pub const KIWI_WHEEL_DISTANCE_TO_CENTER_MM: f32 = 120.0;
