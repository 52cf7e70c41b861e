pub mod contour;

pub use contour::{are_polylines_identical, Contour};
