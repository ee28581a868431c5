//! # Tabular display for search results
//!
//! [`SolutionsDisplay`] borrows a slice of [`Solution`]s and renders it as a table
//! when formatted with `{}`, without cloning the data.
//!
//! Columns use the short gear labels:
//!
//! ```text
//! # | GR | np | zr1 | zp1 | zs1 | grsp1 | m1 | zr2 | zp2 | zs2 | m2 | zs2id
//! ```
//!
//! `GR` is shown with one decimal, modules with three, `grsp1` and `zs2id` with one.
//!
//! ```rust,ignore
//! use gearbox_search::display::SolutionsDisplayExt;
//!
//! println!("{}", report.solutions.show());
//! ```

use std::fmt;

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::solution::Solution;

const HEADERS: [&str; 13] = [
    "#", "GR", "np", "zr1", "zp1", "zs1", "grsp1", "m1", "zr2", "zp2", "zs2", "m2", "zs2id",
];

/// Display adaptor rendering solutions as a table.
pub struct SolutionsDisplay<'a> {
    solutions: &'a [Solution],
}

impl<'a> SolutionsDisplay<'a> {
    pub fn new(solutions: &'a [Solution]) -> Self {
        Self { solutions }
    }

    fn row(index: usize, s: &Solution) -> Row {
        let cells = [
            index.to_string(),
            format!("{:.1}", s.display_ratio()),
            s.planet_count.to_string(),
            s.stage1_ring_teeth.to_string(),
            s.stage1_planet_teeth.to_string(),
            s.stage1_sun_teeth.to_string(),
            format!("{:.1}", s.planet_to_sun_ratio_stage1),
            format!("{:.3}", s.stage1_module),
            s.stage2_ring_teeth.to_string(),
            s.stage2_planet_teeth.to_string(),
            s.stage2_sun_teeth.to_string(),
            format!("{:.3}", s.stage2_module),
            format!("{:.1}", s.stage2_sun_bore_metric),
        ];
        Row::from(
            cells
                .into_iter()
                .map(|c| Cell::new(c).set_alignment(CellAlignment::Right)),
        )
    }

    /// Build the `comfy-table` representation.
    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Disabled)
            .set_header(HEADERS);
        for (i, s) in self.solutions.iter().enumerate() {
            table.add_row(Self::row(i, s));
        }
        table
    }
}

impl fmt::Display for SolutionsDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.solutions.is_empty() {
            return writeln!(f, "No solutions (n=0)");
        }
        writeln!(f, "Solutions (n={})", self.solutions.len())?;
        writeln!(f, "{}", self.table())
    }
}

/// Ergonomic constructor of [`SolutionsDisplay`] on solution collections.
pub trait SolutionsDisplayExt {
    fn show(&self) -> SolutionsDisplay<'_>;
}

impl SolutionsDisplayExt for [Solution] {
    fn show(&self) -> SolutionsDisplay<'_> {
        SolutionsDisplay::new(self)
    }
}

impl SolutionsDisplayExt for Vec<Solution> {
    fn show(&self) -> SolutionsDisplay<'_> {
        SolutionsDisplay::new(self.as_slice())
    }
}
