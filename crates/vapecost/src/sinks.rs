//! Text and JSON renderers for summary curves

use std::io::{self, Write};

use serde::Serialize;
use vapecost_core::CurveSink;

/// Prints each device as an aligned table of sampled days
pub struct TableSink<W: Write> {
    out: W,
    every: usize,
}

impl<W: Write> TableSink<W> {
    /// `every` is the day stride; 0 is treated as 1
    pub fn new(out: W, every: usize) -> Self {
        Self {
            out,
            every: every.max(1),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CurveSink for TableSink<W> {
    type Error = io::Error;

    fn accept(
        &mut self,
        name: &str,
        days: &[usize],
        mean: &[f64],
        lower: &[f64],
        upper: &[f64],
    ) -> io::Result<()> {
        writeln!(self.out, "{name}")?;
        writeln!(
            self.out,
            "{:>6}  {:>10}  {:>10}  {:>10}",
            "day", "mean", "p5", "p95"
        )?;

        let last = days.len().saturating_sub(1);
        for i in 0..days.len() {
            if (i + 1) % self.every != 0 && i != last {
                continue;
            }
            writeln!(
                self.out,
                "{:>6}  {:>10.2}  {:>10.2}  {:>10.2}",
                days[i], mean[i], lower[i], upper[i]
            )?;
        }
        writeln!(self.out)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[derive(Debug, Serialize)]
struct CurveRecord {
    name: String,
    days: Vec<usize>,
    mean: Vec<f64>,
    lower: Vec<f64>,
    upper: Vec<f64>,
}

/// Buffers every curve and writes one JSON array on finish
pub struct JsonSink<W: Write> {
    out: W,
    records: Vec<CurveRecord>,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            records: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CurveSink for JsonSink<W> {
    type Error = serde_json::Error;

    fn accept(
        &mut self,
        name: &str,
        days: &[usize],
        mean: &[f64],
        lower: &[f64],
        upper: &[f64],
    ) -> Result<(), Self::Error> {
        self.records.push(CurveRecord {
            name: name.to_string(),
            days: days.to_vec(),
            mean: mean.to_vec(),
            lower: lower.to_vec(),
            upper: upper.to_vec(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<(), Self::Error> {
        serde_json::to_writer_pretty(&mut self.out, &self.records)?;
        writeln!(self.out).map_err(serde_json::Error::io)?;
        self.out.flush().map_err(serde_json::Error::io)
    }
}
