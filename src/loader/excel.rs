//! スプレッドシートの読み込み（calamine）
//!
//! 1行目をヘッダーとし、以降の1行 = 1レコード。
//! 空セル・エラーセルは欠損として落とす。

use crate::error::{PriceCheckError, Result};
use calamine::{open_workbook_auto, Data, DataType, Range, Reader};
use price_check_common::Record;
use std::collections::HashMap;
use std::path::Path;

pub fn load_sheet_records(path: &Path, sheet: Option<&str>) -> Result<Vec<Record>> {
    if !path.exists() {
        return Err(PriceCheckError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)?;

    let range = match sheet {
        Some(name) => {
            if !workbook.sheet_names().iter().any(|s| s == name) {
                return Err(PriceCheckError::SheetNotFound(name.to_string()));
            }
            workbook.worksheet_range(name)?
        }
        None => workbook
            .worksheet_range_at(0)
            .ok_or_else(|| PriceCheckError::SheetNotFound("(先頭シート)".into()))??,
    };

    Ok(range_records(&range))
}

/// セル範囲をレコード化（空行はスキップ）
pub fn range_records(range: &Range<Data>) -> Vec<Record> {
    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Vec::new();
    };
    let headers = header_names(header_row);

    rows.map(|row| {
        Record::from_pairs(
            headers
                .iter()
                .zip(row)
                .filter_map(|(header, cell)| cell_text(cell).map(|text| (header.as_str(), text))),
        )
    })
    .filter(|record| !record.is_empty())
    .collect()
}

/// 空ヘッダーは `Unnamed: <列番号>`、重複は `.1`, `.2` ... を付ける
fn header_names(cells: &[Data]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();

    cells
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let base = cell_text(cell).unwrap_or_else(|| format!("Unnamed: {}", i));
            let count = seen.entry(base.clone()).or_insert(0);
            let name = if *count == 0 {
                base
            } else {
                format!("{}.{}", base, count)
            };
            *count += 1;
            name
        })
        .collect()
}

/// セルのテキスト表現。欠損は `None`
pub fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(s.clone()),
        Data::Float(f) => float_text(*f),
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(true) => Some("True".into()),
        Data::Bool(false) => Some("False".into()),
        Data::DateTime(_) => cell
            .as_datetime()
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .or_else(|| Some(cell.to_string())),
        other => Some(other.to_string()),
    }
}

/// 整数値の浮動小数は小数部なしで表示。
/// 空セルを含む価格列でも `125.0` とは書かず `125` になる
fn float_text(f: f64) -> Option<String> {
    if f.is_nan() {
        None
    } else if f.fract() == 0.0 && f.abs() < 1e15 {
        Some(format!("{}", f as i64))
    } else {
        Some(format!("{}", f))
    }
}
