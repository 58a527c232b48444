//! Navigate module: camera pose sources.
//!
//! The draw context asks a `Navigator` for one pose per frame and treats it
//! as read-only. Input handling and damping live with the host.

mod navigator;
mod look_at_navigator;

pub use navigator::{Navigator, NavigatorPose};
pub use look_at_navigator::LookAtNavigator;
