//! Command-line arguments and interactive prompts.
//!
//! Every bound can be given as a flag; the outside diameters, when missing, are
//! asked for on the terminal. A confirmation gate
//! precedes the search unless `--yes` is passed.
//!
//! Prompting goes through generic [`BufRead`]/[`Write`] handles so the dialogue can
//! be driven from tests.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::constants::{
    DEFAULT_MAX_PLANETS, DEFAULT_MAX_RATIO, DEFAULT_MIN_MODULE, DEFAULT_MIN_PLANETS,
    DEFAULT_MIN_RATIO, DEFAULT_MIN_SUN_BORE, DEFAULT_MIN_TEETH,
};
use crate::gearbox_errors::GearboxError;
use crate::search_bounds::SearchBounds;

/// Tooth-count search for split-ring compound (differential) planetary gearboxes
#[derive(Parser, Debug, Clone)]
#[command(name = "gearbox-search")]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    // ===== Envelope =====
    /// Minimum outside diameter (prompted for when omitted)
    #[arg(long = "min-od")]
    pub min_od: Option<f64>,

    /// Maximum outside diameter, exclusive (prompted for when omitted)
    #[arg(long = "max-od")]
    pub max_od: Option<f64>,

    // ===== Target =====
    /// Minimum gear ratio
    #[arg(long = "min-ratio", default_value_t = DEFAULT_MIN_RATIO)]
    pub min_ratio: f64,

    /// Maximum gear ratio
    #[arg(long = "max-ratio", default_value_t = DEFAULT_MAX_RATIO)]
    pub max_ratio: f64,

    // ===== Manufacturing =====
    /// Minimum number of teeth on every gear
    #[arg(long = "min-teeth", default_value_t = DEFAULT_MIN_TEETH)]
    pub min_teeth: u32,

    /// Minimum tooth module
    #[arg(long = "min-module", default_value_t = DEFAULT_MIN_MODULE)]
    pub min_module: f64,

    /// Minimum number of planets
    #[arg(long = "min-planets", default_value_t = DEFAULT_MIN_PLANETS)]
    pub min_planets: u32,

    /// Maximum number of planets
    #[arg(long = "max-planets", default_value_t = DEFAULT_MAX_PLANETS)]
    pub max_planets: u32,

    /// Minimum sun-2 bore metric kept in the results
    #[arg(long = "min-sun-bore", default_value_t = DEFAULT_MIN_SUN_BORE)]
    pub min_sun_bore: f64,

    // ===== Run control =====
    /// Skip the confirmation prompt
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,

    /// Also write the final solutions to this CSV file
    #[arg(long = "csv")]
    pub csv: Option<PathBuf>,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl CliArgs {
    /// Resolve the search bounds, prompting for the diameters that were not given.
    ///
    /// Arguments
    /// -----------------
    /// * `input`, `output`: terminal handles used for the prompts.
    ///
    /// Return
    /// ----------
    /// * `Err(GearboxError::MalformedInput)` when a prompted diameter is not a number.
    /// * `Err(GearboxError::InvalidBounds)` when the assembled bounds fail validation.
    pub fn resolve_bounds<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<SearchBounds, GearboxError> {
        let min_od = match self.min_od {
            Some(v) => v,
            None => prompt_f64(input, output, " Min Outside diameter: ", "min outside diameter")?,
        };
        let max_od = match self.max_od {
            Some(v) => v,
            None => prompt_f64(input, output, " Max Outside diameter: ", "max outside diameter")?,
        };

        SearchBounds::builder()
            .outside_diameter(min_od, max_od)
            .ratio(self.min_ratio, self.max_ratio)
            .min_teeth(self.min_teeth)
            .min_module(self.min_module)
            .planets(self.min_planets, self.max_planets)
            .min_sun_bore(self.min_sun_bore)
            .build()
    }
}

/// Read one line from `input`; `Ok(None)` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, GearboxError> {
    let mut line = String::new();
    let n = input.read_line(&mut line)?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Print `label` and parse the answer as a number.
pub fn prompt_f64<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    field: &str,
) -> Result<f64, GearboxError> {
    write!(output, "{label}")?;
    output.flush()?;
    let answer = read_line(input)?.unwrap_or_default();
    answer
        .parse::<f64>()
        .map_err(|_| GearboxError::MalformedInput {
            field: field.to_string(),
            value: answer.clone(),
        })
}

/// Ask whether to run the search; only `y`/`Y` proceeds.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool, GearboxError> {
    write!(output, " Proceed to calculation? (y/n): ")?;
    output.flush()?;
    Ok(read_line(input)?
        .map(|a| a.eq_ignore_ascii_case("y"))
        .unwrap_or(false))
}
