/// Defines the rotation in the plane.
pub mod rotation2d;

/// Defines the position in the plane.
pub mod translation2d;

/// Defines the position and orientation in the plane.
pub mod pose2d;

/// Defines the relative rigid transform between two poses.
pub mod transform2d;

/// Defines the change in pose along an arc.
pub mod twist2d;

pub use pose2d::Pose2d;
pub use rotation2d::Rotation2d;
pub use transform2d::Transform2d;
pub use translation2d::Translation2d;
pub use twist2d::Twist2d;

/// The tolerance used when comparing geometric values for equality.
pub(crate) const GEOMETRY_EPSILON: f64 = 1e-9;
