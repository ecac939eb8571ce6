//! Excelレポート出力
//!
//! - Details シート: 行番号 / 列 / キー / 値 / 原文（抽出ペアごとに1行）
//! - Keys シート: 検出キー一覧

use super::OtaReport;
use crate::error::Result;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};
use std::path::Path;

const DETAIL_HEADERS: [&str; 5] = ["Row", "Column", "Key", "Value", "Raw"];
const DETAIL_WIDTHS: [f64; 5] = [8.0, 18.0, 20.0, 30.0, 60.0];

pub fn generate_excel(report: &OtaReport, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xAAAAAA));

    let value_format = Format::new()
        .set_align(FormatAlign::Top)
        .set_text_wrap()
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let details = workbook.add_worksheet();
    details.set_name("Details")?;

    for (col, (title, width)) in DETAIL_HEADERS.iter().zip(DETAIL_WIDTHS).enumerate() {
        details.write_string_with_format(0, col as u16, *title, &header_format)?;
        details.set_column_width(col as u16, width)?;
    }

    let mut row: u32 = 1;
    for detail in &report.details.rows {
        // ペアがない行も原文を残す
        let pairs: Vec<(&str, &str)> = if detail.fields.is_empty() {
            vec![("", "")]
        } else {
            detail.fields.iter().collect()
        };

        for (key, value) in pairs {
            details.write_number_with_format(row, 0, detail.row_index as f64, &value_format)?;
            details.write_string_with_format(row, 1, &detail.column, &value_format)?;
            details.write_string_with_format(row, 2, key, &value_format)?;
            details.write_string_with_format(row, 3, value, &value_format)?;
            details.write_string_with_format(row, 4, &detail.raw_text, &value_format)?;
            row += 1;
        }
    }

    let keys = workbook.add_worksheet();
    keys.set_name("Keys")?;
    keys.write_string_with_format(0, 0, "Detected key", &header_format)?;
    keys.set_column_width(0, 30.0)?;
    for (i, key) in report.details.detected_keys.iter().enumerate() {
        keys.write_string(i as u32 + 1, 0, key)?;
    }

    workbook.save(output_path)?;

    tracing::debug!(path = %output_path.display(), rows = row - 1, "Excelレポートを保存");
    Ok(())
}
