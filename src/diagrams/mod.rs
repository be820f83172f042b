// Copyright @yucwang 2021

pub mod diffuse;
pub mod grating;

use crate::core::angle_grid::GridError;
use crate::core::evaluator::EvaluatorError;
use crate::materials::MaterialError;
use crate::math::bitmap::Bitmap;
use crate::plot::polar::PlotError;

use std::fmt;

#[derive(Debug)]
pub enum DiagramError {
    Grid(GridError),
    Evaluator(EvaluatorError),
    Material(MaterialError),
    Plot(PlotError),
}

impl From<GridError> for DiagramError {
    fn from(err: GridError) -> Self {
        DiagramError::Grid(err)
    }
}

impl From<EvaluatorError> for DiagramError {
    fn from(err: EvaluatorError) -> Self {
        DiagramError::Evaluator(err)
    }
}

impl From<MaterialError> for DiagramError {
    fn from(err: MaterialError) -> Self {
        DiagramError::Material(err)
    }
}

impl From<PlotError> for DiagramError {
    fn from(err: PlotError) -> Self {
        DiagramError::Plot(err)
    }
}

impl fmt::Display for DiagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagramError::Grid(err) => write!(f, "grid error: {}", err),
            DiagramError::Evaluator(err) => write!(f, "{}", err),
            DiagramError::Material(err) => write!(f, "{}", err),
            DiagramError::Plot(err) => write!(f, "plot error: {}", err),
        }
    }
}

impl std::error::Error for DiagramError {}

pub trait DispersionDiagram {
    fn name(&self) -> &'static str;

    /// Produce the figure, `None` when the diagram has nothing to draw.
    fn generate(&self) -> Result<Option<Bitmap>, DiagramError>;
}
