//! CSV export of final solutions.
//!
//! One header row with the serialized field names of [`Solution`] (`GR`, `np`, `zr1`, …),
//! then one record per solution in the given order.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::gearbox_errors::GearboxError;
use crate::solution::Solution;

/// Write `solutions` as CSV into any writer.
pub fn write_csv<W: Write>(solutions: &[Solution], out: W) -> Result<(), GearboxError> {
    let mut wtr = csv::Writer::from_writer(out);
    for s in solutions {
        wtr.serialize(s)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `solutions` as CSV into the file at `path`, creating or truncating it.
pub fn save_csv(solutions: &[Solution], path: &Path) -> Result<(), GearboxError> {
    let file = File::create(path)?;
    write_csv(solutions, file)
}
