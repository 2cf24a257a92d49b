use crate::core::data::viewport::ViewportError;
use crate::core::palette::errors::PaletteError;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum ExplorerError {
    Palette(PaletteError),
    Viewport(ViewportError),
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Palette(err) => write!(f, "palette: {}", err),
            Self::Viewport(err) => write!(f, "viewport: {}", err),
        }
    }
}

impl Error for ExplorerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Palette(err) => Some(err),
            Self::Viewport(err) => Some(err),
        }
    }
}

impl From<PaletteError> for ExplorerError {
    fn from(err: PaletteError) -> Self {
        Self::Palette(err)
    }
}

impl From<ViewportError> for ExplorerError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}
