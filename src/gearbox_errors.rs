use std::backtrace::BacktraceStatus;
use std::io::{self, Write};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GearboxError {
    #[error("Malformed input for {field}: {value:?} is not a number")]
    MalformedInput { field: String, value: String },

    #[error("Invalid search bounds: {0}")]
    InvalidBounds(String),

    #[error("Unable to perform I/O operation: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),
}

impl GearboxError {
    /// Short label of the error category, printed by the top-level handler.
    pub fn category(&self) -> &'static str {
        match self {
            GearboxError::MalformedInput { .. } => "MalformedInput",
            GearboxError::InvalidBounds(_) => "InvalidBounds",
            GearboxError::Io(_) => "Io",
            GearboxError::Csv(_) => "Csv",
        }
    }
}

impl PartialEq for GearboxError {
    fn eq(&self, other: &Self) -> bool {
        use GearboxError::*;
        match (self, other) {
            (
                MalformedInput {
                    field: fa,
                    value: va,
                },
                MalformedInput {
                    field: fb,
                    value: vb,
                },
            ) => fa == fb && va == vb,
            (InvalidBounds(a), InvalidBounds(b)) => a == b,

            // Not comparable: equal if same variant
            (Io(_), Io(_)) => true,
            (Csv(_), Csv(_)) => true,

            _ => false,
        }
    }
}

/// Write the top-level diagnostic of a failed run.
///
/// Prints the error category (the [`GearboxError`] label when the chain holds one),
/// the message, every underlying cause and the call stack captured when the error
/// was raised.
pub fn write_report<W: Write>(err: &anyhow::Error, out: &mut W) -> io::Result<()> {
    let category = err
        .downcast_ref::<GearboxError>()
        .map_or("Other", GearboxError::category);
    writeln!(out, "Error type: {category}")?;
    writeln!(out, "Error message: {err}")?;
    for cause in err.chain().skip(1) {
        writeln!(out, "  caused by: {cause}")?;
    }

    let backtrace = err.backtrace();
    match backtrace.status() {
        BacktraceStatus::Captured => writeln!(out, "Call stack:\n{backtrace}"),
        _ => writeln!(
            out,
            "Call stack: not captured (set RUST_BACKTRACE=1 to record it)"
        ),
    }
}

#[cfg(test)]
mod gearbox_errors_test {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_category_labels() {
        let err = GearboxError::MalformedInput {
            field: "min outside diameter".into(),
            value: "abc".into(),
        };
        assert_eq!(err.category(), "MalformedInput");
        assert_eq!(
            err.to_string(),
            "Malformed input for min outside diameter: \"abc\" is not a number"
        );

        let err = GearboxError::InvalidBounds("min_planets > max_planets".into());
        assert_eq!(err.category(), "InvalidBounds");
    }

    #[test]
    fn test_partial_eq() {
        let a = GearboxError::InvalidBounds("x".into());
        assert_eq!(a, GearboxError::InvalidBounds("x".into()));
        assert_ne!(a, GearboxError::InvalidBounds("y".into()));

        let io_a = GearboxError::from(std::io::Error::other("a"));
        let io_b = GearboxError::from(std::io::Error::other("b"));
        assert_eq!(io_a, io_b);
        assert_ne!(io_a, a);
    }

    #[test]
    fn test_write_report() {
        let err: anyhow::Error = Err::<(), _>(GearboxError::InvalidBounds(
            "min_planets > max_planets".into(),
        ))
        .context("resolving search bounds")
        .unwrap_err();

        let mut out = Vec::new();
        write_report(&err, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Error type: InvalidBounds"));
        assert_eq!(lines.next(), Some("Error message: resolving search bounds"));
        assert_eq!(
            lines.next(),
            Some("  caused by: Invalid search bounds: min_planets > max_planets")
        );
        assert!(lines.next().unwrap().starts_with("Call stack"));
    }

    #[test]
    fn test_write_report_foreign_error() {
        let err = anyhow::anyhow!("terminal closed");
        let mut out = Vec::new();
        write_report(&err, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Error type: Other\nError message: terminal closed\n"));
        assert!(text.contains("Call stack"));
    }
}
