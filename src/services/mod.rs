pub mod geolocation;
pub mod permissions;

pub use geolocation::{current_position, FetchPolicy, LocationError};
pub use permissions::request_location_permission;
