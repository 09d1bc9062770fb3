pub mod error;
pub mod quadtree;

pub use common::{Coord, Rect};
pub use error::{QuadtreeError, QuadtreeResult};
pub use quadtree::{Config, QuadTree, StorageCounts, TreeItem, NOT_INSERTED};
