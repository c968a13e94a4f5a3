//! Presentation boundary
//!
//! Rendering lives outside the core. Anything that wants to draw, print, or
//! export curves implements `CurveSink` and receives plain numeric slices.

use std::convert::Infallible;

/// Receives one labelled summary curve at a time
pub trait CurveSink {
    type Error;

    /// Accept one device's curve; all slices have the same length as `days`
    fn accept(
        &mut self,
        name: &str,
        days: &[usize],
        mean: &[f64],
        lower: &[f64],
        upper: &[f64],
    ) -> Result<(), Self::Error>;

    /// Called once after the last curve
    fn finish(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A curve as received by `CollectingSink`
#[derive(Debug, Clone, PartialEq)]
pub struct CollectedCurve {
    pub name: String,
    pub days: Vec<usize>,
    pub mean: Vec<f64>,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

/// Sink that keeps everything it is given
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub curves: Vec<CollectedCurve>,
    pub finished: bool,
}

impl CurveSink for CollectingSink {
    type Error = Infallible;

    fn accept(
        &mut self,
        name: &str,
        days: &[usize],
        mean: &[f64],
        lower: &[f64],
        upper: &[f64],
    ) -> Result<(), Self::Error> {
        self.curves.push(CollectedCurve {
            name: name.to_string(),
            days: days.to_vec(),
            mean: mean.to_vec(),
            lower: lower.to_vec(),
            upper: upper.to_vec(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<(), Self::Error> {
        self.finished = true;
        Ok(())
    }
}
