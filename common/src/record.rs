//! 検索対象レコード
//!
//! JSONエントリ・スプレッドシート行を平坦化した1件分のデータ。
//! フィールドは読み込み順を保持し、欠損値（null / 空セル）は持たない。

/// フィールド名 → テキスト値の順序付きマップ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// (フィールド名, 値) の列から生成
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut record = Self::new();
        for (key, value) in pairs {
            record.insert(key, value);
        }
        record
    }

    /// フィールドを設定。既存キーは位置を保ったまま上書き
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// 全フィールド値をスペース区切りで連結し小文字化した検索用テキスト
    pub fn search_text(&self) -> String {
        join_lower(self.fields.iter().map(|(_, v)| v.as_str()))
    }

    /// 指定フィールドのみの検索用テキスト（存在しないフィールドは無視）
    pub fn search_text_of<S: AsRef<str>>(&self, names: &[S]) -> String {
        join_lower(names.iter().filter_map(|name| self.get(name.as_ref())))
    }
}

fn join_lower<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values.collect::<Vec<_>>().join(" ").to_lowercase()
}
