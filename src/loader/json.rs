//! JSON価格データの読み込み
//!
//! カテゴリキーの下に入れ子になったエントリ配列を再帰的にたどり、
//! 1エントリ = 1レコードに平坦化する。

use crate::error::{PriceCheckError, Result};
use price_check_common::Record;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub const SOURCE_FILE_FIELD: &str = "source_file";
pub const CATEGORY_KEY_FIELD: &str = "category_key";

pub fn load_json_records(path: &Path) -> Result<Vec<Record>> {
    if !path.exists() {
        return Err(PriceCheckError::FileNotFound(path.display().to_string()));
    }

    let reader = BufReader::new(File::open(path)?);
    let value: Value = serde_json::from_reader(reader)?;

    let source = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(flatten_value(&value, &source))
}

/// 読み込み済みJSONを平坦化
///
/// - 配列の値: 要素のうちオブジェクトを1件ずつレコード化
///   （`source_file` / `category_key` を付与）
/// - オブジェクトの値: 再帰
/// - それ以外: 無視
pub fn flatten_value(value: &Value, source: &str) -> Vec<Record> {
    let mut records = Vec::new();
    collect(value, source, &mut records);
    records
}

fn collect(value: &Value, source: &str, records: &mut Vec<Record>) {
    let Value::Object(map) = value else {
        return;
    };

    for (key, child) in map {
        match child {
            Value::Array(items) => {
                for item in items {
                    if let Value::Object(entry) = item {
                        records.push(entry_record(entry, source, key));
                    }
                }
            }
            Value::Object(_) => collect(child, source, records),
            _ => {}
        }
    }
}

fn entry_record(entry: &Map<String, Value>, source: &str, category: &str) -> Record {
    let mut record = Record::new();
    for (key, value) in entry {
        if let Some(text) = value_text(value) {
            record.insert(key.as_str(), text);
        }
    }
    record.insert(SOURCE_FILE_FIELD, source);
    record.insert(CATEGORY_KEY_FIELD, category);
    record
}

/// null は欠損扱い
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}
