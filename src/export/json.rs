//! JSONレポート出力

use super::OtaReport;
use crate::error::Result;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub fn write_json(report: &OtaReport, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}
