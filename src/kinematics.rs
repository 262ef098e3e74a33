/// Defines the velocity of a robot chassis.
pub mod chassis_speeds;

/// Defines the velocities of the wheels of a differential drive.
pub mod differential_drive_wheel_speeds;

/// Provides the conversion between chassis and wheel velocities of a differential drive.
pub mod differential_drive_kinematics;

/// Provides pose tracking for a differential drive.
pub mod differential_drive_odometry;

pub use chassis_speeds::ChassisSpeeds;
pub use differential_drive_kinematics::DifferentialDriveKinematics;
pub use differential_drive_odometry::DifferentialDriveOdometry;
pub use differential_drive_wheel_speeds::DifferentialDriveWheelSpeeds;
