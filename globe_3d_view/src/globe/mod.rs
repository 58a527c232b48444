//! Globe module: geographic positions, the reference ellipsoid, and the
//! injected elevation source used to size clip distances.
//!
//! Cartesian axes follow the globe convention used throughout the view
//! core: +Y is the polar axis, +Z passes through (0°, 0°), and +X through
//! (0°, 90°E).

mod position;
mod sector;
mod elevation;
mod ellipsoid;
mod globe;

pub use position::{Location, Position, normalize_latitude, normalize_longitude};
pub use sector::Sector;
pub use elevation::{ElevationBounds, ElevationSource, FixedElevationBounds, ZeroElevation};
pub use ellipsoid::Ellipsoid;
pub use globe::Globe;
