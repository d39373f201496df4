pub mod geo;
pub mod marker;
pub mod permission;

pub use geo::{GeoPoint, Region};
pub use marker::Marker;
pub use permission::PermissionStatus;
