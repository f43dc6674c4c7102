//! Drives one production strategy through the sampling loop and reports time and memory.
//!
//! The report is written as plain lines to any [`Write`]:
//!
//! ```text
//! Memoria inicial: 2.1 MB
//! alloc::vec::Vec<person_producer::person::Person>
//! {'id': 0, 'nombre': 'Juan', 'carrera': 'Medicina', 'edad': 19}
//! ...
//! Tiempo de ejecución: 0.41 segundos
//! Memoria final: 48.3 MB
//! ```

use std::any::type_name_of_val;
use std::fmt::Display;
use std::io::Write;
use std::time::{Duration, Instant};

use log::info;

use crate::error::ProducerError;
use crate::memory::MemorySampler;
use crate::producer::{produce_all, produce_lazy};

pub const DEFAULT_COUNT: u64 = 1_000_000;
pub const SAMPLE_INTERVAL: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Build the whole `Vec` first, then walk it
    Eager,
    /// Walk a generator that draws each record on request
    Lazy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub produced: u64,
    pub sampled: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub strategy: Strategy,
    pub initial_mb: f64,
    pub final_mb: f64,
    pub elapsed: Duration,
    pub tally: Tally,
}

/// Consumes `people`, writing every `every`-th element (by 0-based position) to `out`.
///
/// # Errors
/// Errors when writing to `out` fails
///
/// # Panics
/// If `every` is zero
pub fn print_samples<I, W>(people: I, every: u64, out: &mut W) -> Result<Tally, ProducerError>
where
    I: IntoIterator,
    I::Item: Display,
    W: Write + ?Sized,
{
    assert!(every > 0, "sample interval must be positive");
    let mut tally = Tally::default();
    for (idx, person) in (0_u64..).zip(people) {
        if idx % every == 0 {
            writeln!(out, "{}", person)?;
            tally.sampled += 1;
        }
        tally.produced += 1;
    }
    Ok(tally)
}

/// Runs one benchmark pass over `count` records and writes the report to `out`.
///
/// # Errors
/// Errors when the memory sampler fails or when writing to `out` fails
pub fn run<M, W>(
    strategy: Strategy,
    count: u64,
    sampler: &mut M,
    out: &mut W,
) -> Result<Report, ProducerError>
where
    M: MemorySampler + ?Sized,
    W: Write + ?Sized,
{
    let initial_mb = sampler.resident_mb()?;
    writeln!(out, "Memoria inicial: {} MB", initial_mb)?;

    let start = Instant::now();
    let report = match strategy {
        Strategy::Eager => {
            let people = produce_all(count);
            writeln!(out, "{}", type_name_of_val(&people))?;
            let tally = print_samples(&people, SAMPLE_INTERVAL, out)?;
            // `people` is still alive for the final sample
            finish(strategy, initial_mb, start, tally, sampler, out)?
        }
        Strategy::Lazy => {
            let people = produce_lazy(count);
            writeln!(out, "{}", type_name_of_val(&people))?;
            let tally = print_samples(people, SAMPLE_INTERVAL, out)?;
            finish(strategy, initial_mb, start, tally, sampler, out)?
        }
    };

    info!(
        "{:?} pass over {} records took {:.2?}, memory {:.2} MB -> {:.2} MB",
        report.strategy, count, report.elapsed, report.initial_mb, report.final_mb
    );
    Ok(report)
}

fn finish<M, W>(
    strategy: Strategy,
    initial_mb: f64,
    start: Instant,
    tally: Tally,
    sampler: &mut M,
    out: &mut W,
) -> Result<Report, ProducerError>
where
    M: MemorySampler + ?Sized,
    W: Write + ?Sized,
{
    let elapsed = start.elapsed();
    writeln!(out, "Tiempo de ejecución: {} segundos", elapsed.as_secs_f64())?;
    let final_mb = sampler.resident_mb()?;
    writeln!(out, "Memoria final: {} MB", final_mb)?;
    Ok(Report {
        strategy,
        initial_mb,
        final_mb,
        elapsed,
        tally,
    })
}
