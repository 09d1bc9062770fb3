pub mod error;
pub mod list;

pub use error::{ArenaError, ArenaResult};
pub use list::ArenaList;
