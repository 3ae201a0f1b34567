use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    DegenerateCurve { points: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateCurve { points } => {
                write!(f, "degenerate curve: {points} points, need at least 2")
            }
        }
    }
}

impl std::error::Error for Error {}
