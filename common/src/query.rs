//! キーワード照合
//!
//! 全キーワード（AND）が大文字小文字を区別せず部分一致すればマッチ。

use crate::record::Record;

/// 名前付きのキーワード集合
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub name: String,
    keywords: Vec<String>,
    /// 照合の元になった表記（レポート出力用）
    original: Vec<String>,
}

impl Query {
    pub fn new<S: AsRef<str>>(name: impl Into<String>, keywords: &[S]) -> Self {
        let original: Vec<String> = keywords.iter().map(|k| k.as_ref().to_string()).collect();
        Self {
            name: name.into(),
            keywords: original.iter().map(|k| k.to_lowercase()).collect(),
            original,
        }
    }

    /// 指定時の表記のままのキーワード
    pub fn keywords(&self) -> &[String] {
        &self.original
    }

    /// 小文字化済みテキストに対する照合
    pub fn matches_text(&self, lowered: &str) -> bool {
        self.keywords.iter().all(|k| lowered.contains(k.as_str()))
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.matches_text(&record.search_text())
    }

    /// 指定フィールドだけを対象に照合
    pub fn matches_fields<S: AsRef<str>>(&self, record: &Record, fields: &[S]) -> bool {
        self.matches_text(&record.search_text_of(fields))
    }

    /// 読み込み順を保ったまま一致レコードを抽出
    pub fn search<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    /// `fields` が `None` なら全フィールド対象
    pub fn search_in<'a, S: AsRef<str>>(
        &self,
        records: &'a [Record],
        fields: Option<&[S]>,
    ) -> Vec<&'a Record> {
        match fields {
            Some(fields) => records
                .iter()
                .filter(|r| self.matches_fields(r, fields))
                .collect(),
            None => self.search(records),
        }
    }
}

/// 単発照合用のショートカット
pub fn matches<S: AsRef<str>>(record: &Record, keywords: &[S]) -> bool {
    Query::new("", keywords).matches(record)
}
