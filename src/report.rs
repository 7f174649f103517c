//! Rendering of scan results for the terminal.

use anyhow::Result;
use filmtag_parser::output::{GenericFormat, KeyValueFormat, OutputFormat};
use filmtag_parser::{AssetKind, ParsedFilename};
use serde::Serialize;
use std::path::Path;

use crate::config::OutputFormatKind;
use crate::scanner::Identification;

#[derive(Serialize)]
struct EntryRecord<'a> {
    path: String,
    kind: AssetKind,
    result: &'a ParsedFilename,
}

/// Render one scan result.
pub fn render(parsed: &ParsedFilename, format: OutputFormatKind) -> Result<String> {
    Ok(match format {
        OutputFormatKind::Generic => GenericFormat.format(parsed).to_string(),
        OutputFormatKind::Kv => KeyValueFormat.format(parsed).to_string().trim_end().to_string(),
        OutputFormatKind::Json => serde_json::to_string(parsed)?,
    })
}

/// Render one walked entry, labelled with its path relative to the root.
pub fn render_entry(
    entry: &Identification,
    relative: &Path,
    format: OutputFormatKind,
) -> Result<String> {
    let path = relative.display().to_string();
    Ok(match format {
        OutputFormatKind::Generic => format!("{}: {}", path, render(&entry.parsed, format)?),
        OutputFormatKind::Kv => {
            let kind = if entry.kind.is_directory() { "directory" } else { "file" };
            format!("path: {}\nkind: {}\n{}", path, kind, render(&entry.parsed, format)?)
        }
        OutputFormatKind::Json => serde_json::to_string(&EntryRecord {
            path,
            kind: entry.kind,
            result: &entry.parsed,
        })?,
    })
}

/// Join rendered records the way the format expects.
pub fn join(records: &[String], format: OutputFormatKind) -> String {
    match format {
        OutputFormatKind::Kv => records.join("\n\n"),
        OutputFormatKind::Generic | OutputFormatKind::Json => records.join("\n"),
    }
}
