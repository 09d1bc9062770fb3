use arena_list::ArenaError;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum QuadtreeError {
    AlreadyInserted { index: i32 },
    NotFound { index: i32 },
    InvalidConfiguration { reason: &'static str },
    InvalidRectExtent { extent: String },
    Arena(ArenaError),
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

impl fmt::Display for QuadtreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadtreeError::AlreadyInserted { index } => {
                write!(f, "item is already inserted (index: {})", index)
            }
            QuadtreeError::NotFound { index } => {
                write!(f, "item is not in the quadtree (index: {})", index)
            }
            QuadtreeError::InvalidConfiguration { reason } => {
                write!(f, "invalid quadtree configuration: {}", reason)
            }
            QuadtreeError::InvalidRectExtent { extent } => {
                write!(
                    f,
                    "rectangle extents must satisfy min <= max on both axes ({})",
                    extent
                )
            }
            QuadtreeError::Arena(err) => write!(f, "arena error: {}", err),
        }
    }
}

impl std::error::Error for QuadtreeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuadtreeError::Arena(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ArenaError> for QuadtreeError {
    fn from(err: ArenaError) -> Self {
        QuadtreeError::Arena(err)
    }
}
