//! レポート行の書式

use price_check_common::{py_dict, py_str, Record};

pub const DESCRIPTION_FIELD: &str = "description";
pub const PRICE_FIELD: &str = "price";
pub const STOCK_CODE_FIELD: &str = "stock_code";

pub const SEPARATOR_WIDTH: usize = 50;

/// `Found: <説明> | Price: <価格> | Code: <在庫コード>`（欠損は `None`）
pub fn json_found(record: &Record) -> String {
    format!(
        "Found: {} | Price: {} | Code: {}",
        field_or_none(record, DESCRIPTION_FIELD),
        field_or_none(record, PRICE_FIELD),
        field_or_none(record, STOCK_CODE_FIELD),
    )
}

/// `Found Row: {'列': '値', ...}`
pub fn row_found(record: &Record) -> String {
    format!("Found Row: {}", py_dict(record))
}

pub fn retry_found(record: &Record) -> String {
    format!("Found Retry: {}", py_dict(record))
}

/// `Retrying Excel with '70' and 'boru'...`
pub fn retrying(keywords: &[String]) -> String {
    let quoted: Vec<String> = keywords.iter().map(|k| py_str(k)).collect();
    format!("Retrying Excel with {}...", quoted.join(" and "))
}

pub fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// 改行を含むメッセージを1行に畳む
pub fn single_line(message: &str) -> String {
    message.lines().collect::<Vec<_>>().join(" ")
}

fn field_or_none<'a>(record: &'a Record, field: &str) -> &'a str {
    record.get(field).unwrap_or("None")
}
