//! Depth-bounded quadtree over axis-aligned boxes.
//!
//! Nodes, element rectangles and leaf membership links all live in
//! [`ArenaList`]s and refer to each other by index. Node extents are never
//! stored: every traversal starts from the root half extent and halves it on
//! the way down.

use crate::error::{QuadtreeError, QuadtreeResult};
use arena_list::ArenaList;
use common::{Coord, Rect};
use smallvec::SmallVec;
use std::cell::RefCell;

mod api;
mod config;
mod core;
mod maintenance;
mod query_rect;
mod storage;
mod types;

pub use api::StorageCounts;
pub use config::Config;
pub use storage::QuadTree;
pub use types::{TreeItem, NOT_INSERTED};

use storage::VisitScratch;
use types::*;
