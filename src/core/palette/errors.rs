use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteError {
    TooFewColours { total_colours: usize },
    TooFewSeeds { seeds: usize },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewColours { total_colours } => {
                write!(f, "palette needs at least 2 colours, got {}", total_colours)
            }
            Self::TooFewSeeds { seeds } => {
                write!(f, "palette needs at least 2 seed colours, got {}", seeds)
            }
        }
    }
}

impl Error for PaletteError {}
