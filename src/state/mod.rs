// Contenedores de estado puros. Viven dentro de los hooks de cada pantalla
// (sin store global) y se testean sin navegador.

pub mod location;
pub mod markers;

pub use location::{LocationPhase, LocationTracker};
pub use markers::{AddMarkerOutcome, MarkerStore};
