//! Progress feedback for long searches.
//!
//! The search calls a [`ProgressReporter`] each time it accepts a solution, with the
//! running count. Three reporters are provided:
//!
//! * [`CounterPrinter`] – writes `1,2,3,…` to any [`io::Write`], the classic
//!   calculator output.
//! * [`Silent`] – discards everything (tests, benches, `--quiet`).
//! * `SpinnerProgress` – an `indicatif` spinner, only with the `progress` feature.
//!
//! [`fmt_dur`] renders the elapsed time of a run for log summaries.

use std::io::{self, Write};
use std::time::Duration;

#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

/// Receiver of search progress events.
pub trait ProgressReporter {
    /// Called after each accepted solution; `count` is the number accepted so far.
    fn on_solution(&mut self, count: usize) -> io::Result<()>;

    /// Called once when the sweep is over.
    fn finish(&mut self, _count: usize) -> io::Result<()> {
        Ok(())
    }
}

/// Reporter that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl ProgressReporter for Silent {
    fn on_solution(&mut self, _count: usize) -> io::Result<()> {
        Ok(())
    }
}

/// Writes the running count as `"{count},"` after each accepted solution.
pub struct CounterPrinter<W: Write> {
    out: W,
}

impl<W: Write> CounterPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProgressReporter for CounterPrinter<W> {
    fn on_solution(&mut self, count: usize) -> io::Result<()> {
        write!(self.out, "{count},")?;
        self.out.flush()
    }

    fn finish(&mut self, _count: usize) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// Spinner showing the running count and the elapsed time.
#[cfg(feature = "progress")]
pub struct SpinnerProgress {
    pb: ProgressBar,
}

#[cfg(feature = "progress")]
impl SpinnerProgress {
    pub fn new() -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {pos} solutions | {elapsed_precise} | {msg}")
                .expect("indicatif template"),
        );
        pb.enable_steady_tick(Duration::from_millis(200));
        Self { pb }
    }
}

#[cfg(feature = "progress")]
impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "progress")]
impl ProgressReporter for SpinnerProgress {
    fn on_solution(&mut self, count: usize) -> io::Result<()> {
        self.pb.set_position(count as u64);
        Ok(())
    }

    fn finish(&mut self, count: usize) -> io::Result<()> {
        self.pb.finish_with_message(format!("{count} raw solutions"));
        Ok(())
    }
}

/// Human-readable duration: `"253µs"`, `"42ms"` or `"3.14s"`.
#[inline]
pub fn fmt_dur(d: Duration) -> String {
    let us = d.as_micros();
    if us < 1_000 {
        format!("{us}µs")
    } else {
        let ms = d.as_millis();
        if ms < 1_000 {
            format!("{ms}ms")
        } else {
            let s = d.as_secs_f32();
            format!("{s:.2}s")
        }
    }
}
