pub mod use_location;
pub mod use_markers;

pub use use_location::{use_location, UseLocationHandle};
pub use use_markers::{use_markers, UseMarkersHandle};
