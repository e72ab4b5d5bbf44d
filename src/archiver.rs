use std::fs::File;
use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::models::ResultSet;

/// Writes the result set as a JSON array with 4-space indentation,
/// replacing any previous file. Non-ASCII text stays unescaped.
pub fn save_to_file(results: &ResultSet, filename: &str) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    results.serialize(&mut ser)?;

    let mut file =
        File::create(filename).with_context(|| format!("Failed to create {}", filename))?;
    file.write_all(&buf)?;
    Ok(())
}
