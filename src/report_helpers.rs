use std::io::{self, Write};

use serde::Serialize;

/// Serialize `value` as compact JSON followed by a newline.
pub fn write_json_line(out: &mut impl Write, value: &impl Serialize) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}

#[cfg(test)]
#[path = "report_helpers_test.rs"]
mod tests;
