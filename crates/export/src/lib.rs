//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod table {
    use super::ExportError;
    use serde::Serialize;
    use std::io::Write;

    /// Write serializable rows as CSV; the header comes from the first row's field names.
    pub fn write_records<W, T>(writer: W, records: &[T]) -> Result<(), ExportError>
    where
        W: Write,
        T: Serialize,
    {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for record in records {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

pub mod report {
    use super::ExportError;
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::io::Write;

    /// Pretty-print any result as JSON followed by a newline.
    pub fn write_json<W, T>(mut writer: W, value: &T) -> Result<(), ExportError>
    where
        W: Write,
        T: Serialize + ?Sized,
    {
        to_writer_pretty(&mut writer, value)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Row {
        ratio: f64,
        total_dv_km_s: f64,
    }

    #[test]
    fn csv_header_follows_field_names() {
        let rows = [
            Row {
                ratio: 2.0,
                total_dv_km_s: 1.5,
            },
            Row {
                ratio: 3.0,
                total_dv_km_s: 2.25,
            },
        ];
        let mut buf = Vec::new();
        table::write_records(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines, ["ratio,total_dv_km_s", "2.0,1.5", "3.0,2.25"]);
    }

    #[test]
    fn json_report_is_pretty_and_newline_terminated() {
        let mut buf = Vec::new();
        report::write_json(
            &mut buf,
            &Row {
                ratio: 15.0,
                total_dv_km_s: 4.03,
            },
        )
        .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with("}\n"));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["ratio"], 15.0);
    }

    #[test]
    fn writer_for_path_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/sweep.csv");
        {
            let mut writer = writer_for_path(&path).unwrap();
            writeln!(writer, "ratio").unwrap();
        }
        assert_eq!(fs::read_to_string(path).unwrap(), "ratio\n");
    }
}
