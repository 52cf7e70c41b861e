use crate::error::{OperationError, Result};
use crate::geometry::Contour;

/// Finds closed contours whose enclosed area falls below a threshold.
///
/// Areas are computed in the contours' native unit and multiplied by the
/// area scale before comparison, so a threshold given in cm² can be applied
/// to contours measured in mm² with a scale of `0.01`. Open contours are
/// never islands.
#[derive(Debug)]
pub struct FindIslands {
    threshold: f64,
    area_scale: f64,
}

impl FindIslands {
    /// Creates a new `FindIslands` query with an area scale of `1.0`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidThreshold` if `threshold` is negative
    /// or not finite.
    pub fn new(threshold: f64) -> Result<Self> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(OperationError::InvalidThreshold {
                parameter: "threshold",
                value: threshold,
            }
            .into());
        }
        Ok(Self {
            threshold,
            area_scale: 1.0,
        })
    }

    /// Sets the factor converting native areas into the threshold's unit.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `scale` is not a finite
    /// positive number.
    pub fn with_area_scale(mut self, scale: f64) -> Result<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "area scale must be finite and positive, got {scale}"
            ))
            .into());
        }
        self.area_scale = scale;
        Ok(self)
    }

    /// Executes the query, returning the indices of islands in input order.
    #[must_use]
    pub fn execute(&self, contours: &[Contour]) -> Vec<usize> {
        contours
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_closed() && c.area() * self.area_scale < self.threshold)
            .map(|(i, _)| i)
            .collect()
    }
}
