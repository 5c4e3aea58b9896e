//! Fixed-layout report writer. The `div:` block is printed only when a
//! division result exists; absence is the caller's signal to fail.
use std::io::{self, Write};

use crate::types::Computation;

/// Write the report in the fixed textual layout:
///
/// ```text
/// Inputs:
///   a: 10
///   b: 3
/// Outputs:
///   mul: 30
///   div:
///     quotient: 3
///     remainder: 1
/// ```
pub fn write_report<W: Write>(out: &mut W, result: &Computation) -> io::Result<()> {
    writeln!(out, "Inputs:")?;
    writeln!(out, "  a: {}", result.input.a)?;
    writeln!(out, "  b: {}", result.input.b)?;
    writeln!(out, "Outputs:")?;
    writeln!(out, "  mul: {}", result.mul)?;
    if let Some(div) = result.div {
        writeln!(out, "  div:")?;
        writeln!(out, "    quotient: {}", div.quotient)?;
        writeln!(out, "    remainder: {}", div.remainder)?;
    }
    Ok(())
}

/// Render the report to a `String`, for embedding and tests.
pub fn render(result: &Computation) -> String {
    let mut buf = Vec::new();
    // Vec<u8> writes cannot fail
    write_report(&mut buf, result).expect("write to Vec");
    String::from_utf8(buf).expect("report is ASCII")
}
