//! レポート用の表記
//!
//! 既存レポートとの互換のため、キーワード一覧と行データは
//! Pythonの `repr` と同じ書式（`['a', 'b']` / `{'k': 'v'}`）で出力する。

use crate::record::Record;
use std::fmt::Write;

/// 文字列リテラル表記。`'` を含み `"` を含まない場合のみダブルクォート
pub fn py_str(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// `['a', 'b']`
pub fn py_list<S: AsRef<str>>(items: &[S]) -> String {
    let inner: Vec<String> = items.iter().map(|s| py_str(s.as_ref())).collect();
    format!("[{}]", inner.join(", "))
}

/// `{'k': 'v', ...}`
pub fn py_dict(record: &Record) -> String {
    let inner: Vec<String> = record
        .fields()
        .map(|(k, v)| format!("{}: {}", py_str(k), py_str(v)))
        .collect();
    format!("{{{}}}", inner.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_py_str_plain() {
        assert_eq!(py_str("parça"), "'parça'");
    }

    #[test]
    fn test_py_str_quotes() {
        assert_eq!(py_str("70'lik"), "\"70'lik\"");
        assert_eq!(py_str("a'b\"c"), "'a\\'b\"c'");
        assert_eq!(py_str("say \"hi\""), "'say \"hi\"'");
    }

    #[test]
    fn test_py_str_escapes() {
        assert_eq!(py_str("a\\b"), "'a\\\\b'");
        assert_eq!(py_str("line\nnext"), "'line\\nnext'");
        assert_eq!(py_str("\u{1}"), "'\\x01'");
    }

    #[test]
    fn test_py_list() {
        assert_eq!(py_list(&["alt", "parça"]), "['alt', 'parça']");
        let empty: [&str; 0] = [];
        assert_eq!(py_list(&empty), "[]");
    }

    #[test]
    fn test_py_dict() {
        let record = Record::from_pairs([("Stok Kodu", "352123900200"), ("Fiyat", "12.5")]);
        assert_eq!(
            py_dict(&record),
            "{'Stok Kodu': '352123900200', 'Fiyat': '12.5'}"
        );
        assert_eq!(py_dict(&Record::new()), "{}");
    }
}
