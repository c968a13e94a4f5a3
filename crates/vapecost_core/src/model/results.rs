//! Simulation results
//!
//! Contains the output types from running simulations: single cost paths,
//! fixed-shape ensembles of paths, and the per-day summary curves derived
//! from them.

use serde::{Deserialize, Serialize};

use super::device::DeviceProfile;
use crate::error::{Result, SimulationError};

/// Cumulative spend at the end of each simulated day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostPath {
    pub costs: Vec<f64>,
    /// Number of replenishment events that occurred along the path
    pub replenishments: usize,
}

impl CostPath {
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Spend at the end of the horizon, `None` for an empty path
    pub fn final_cost(&self) -> Option<f64> {
        self.costs.last().copied()
    }
}

/// A `num_paths × total_days` matrix of cost paths, stored row-major.
///
/// Every row has exactly `total_days` entries. Row order carries no meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ensemble {
    total_days: usize,
    num_paths: usize,
    values: Vec<f64>,
}

impl Ensemble {
    /// Build an ensemble from simulated paths sharing one horizon
    pub fn from_paths(total_days: usize, paths: Vec<CostPath>) -> Result<Self> {
        Self::from_rows(total_days, paths.into_iter().map(|p| p.costs))
    }

    /// Build an ensemble from raw rows, rejecting any row whose length is not `total_days`
    pub fn from_rows<I>(total_days: usize, rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vec<f64>>,
    {
        let mut values = Vec::new();
        let mut num_paths = 0;
        for row in rows {
            if row.len() != total_days {
                return Err(SimulationError::invalid(
                    "ensemble",
                    format!("row {num_paths} has {} columns", row.len()),
                    "every row must have total_days columns",
                ));
            }
            values.extend(row);
            num_paths += 1;
        }
        Ok(Self {
            total_days,
            num_paths,
            values,
        })
    }

    pub fn total_days(&self) -> usize {
        self.total_days
    }

    pub fn num_paths(&self) -> usize {
        self.num_paths
    }

    pub fn is_empty(&self) -> bool {
        self.num_paths == 0
    }

    /// Row `index`, or `None` when out of range
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        if index >= self.num_paths {
            return None;
        }
        let start = index * self.total_days;
        Some(&self.values[start..start + self.total_days])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.num_paths).filter_map(move |i| self.row(i))
    }

    /// All values on `day` (0-based) across every path
    pub fn column(&self, day: usize) -> Vec<f64> {
        if day >= self.total_days {
            return Vec::new();
        }
        self.values
            .iter()
            .skip(day)
            .step_by(self.total_days)
            .copied()
            .collect()
    }
}

/// Per-day mean and percentile band of an ensemble
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryCurve {
    pub mean: Vec<f64>,
    pub lower_band: Vec<f64>,
    pub upper_band: Vec<f64>,
    /// Percentile used for `lower_band`, as a fraction (0.05 for P5)
    pub lower_percentile: f64,
    /// Percentile used for `upper_band`, as a fraction (0.95 for P95)
    pub upper_percentile: f64,
}

impl SummaryCurve {
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }

    /// 1-based day numbers aligned with the curve, for plotting
    pub fn days(&self) -> Vec<usize> {
        (1..=self.len()).collect()
    }

    /// Expected spend at the end of the horizon
    pub fn final_mean(&self) -> Option<f64> {
        self.mean.last().copied()
    }

    /// (lower, upper) band at the end of the horizon
    pub fn final_band(&self) -> Option<(f64, f64)> {
        Some((*self.lower_band.last()?, *self.upper_band.last()?))
    }
}

/// Summary curve for one device in a comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceCurve {
    pub device: DeviceProfile,
    pub curve: SummaryCurve,
}
