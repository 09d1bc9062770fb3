use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArenaError {
    OutOfBounds { index: u32, size: usize },
    DoubleErase { index: u32 },
}

pub type ArenaResult<T> = Result<T, ArenaError>;

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArenaError::OutOfBounds { index, size } => {
                write!(
                    f,
                    "arena index out of range (index: {}, size: {})",
                    index, size
                )
            }
            ArenaError::DoubleErase { index } => {
                write!(f, "arena record is already free (index: {})", index)
            }
        }
    }
}

impl std::error::Error for ArenaError {}
