pub mod coord;
pub mod shapes;

pub use coord::Coord;
pub use shapes::Rect;
