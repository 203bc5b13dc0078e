//! 生テキストの行スキャン
//!
//! JSONをパースせず、在庫コードやカテゴリキーが何行目にあるかを探す。
//! 大文字小文字を区別する単純な部分一致。

use crate::error::{PriceCheckError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// 既定の行表示幅（文字数）
pub const DEFAULT_LINE_WIDTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineHit {
    /// 1始まり
    pub line: usize,
    pub target: String,
    pub text: String,
}

/// 1行・1ターゲットごとに1件（ターゲット指定順）
pub fn scan_lines<S: AsRef<str>>(path: &Path, targets: &[S]) -> Result<Vec<LineHit>> {
    let scan = scan_file(path, targets);
    match scan.error {
        Some(e) => Err(e),
        None => Ok(scan.hits),
    }
}

/// 途中で読めなくなったファイルのスキャン結果。
/// `error` があっても、それまでのヒットは `hits` に残る
#[derive(Debug)]
pub struct LineScan {
    pub hits: Vec<LineHit>,
    pub error: Option<PriceCheckError>,
}

pub fn scan_file<S: AsRef<str>>(path: &Path, targets: &[S]) -> LineScan {
    let mut hits = Vec::new();
    let error = scan_into(path, targets, &mut hits).err();

    debug!(path = %path.display(), hits = hits.len(), failed = error.is_some(), "line scan");
    LineScan { hits, error }
}

fn scan_into<S: AsRef<str>>(path: &Path, targets: &[S], hits: &mut Vec<LineHit>) -> Result<()> {
    let reader = BufReader::new(File::open(path)?);

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        for target in targets {
            let target = target.as_ref();
            if line.contains(target) {
                hits.push(LineHit {
                    line: i + 1,
                    target: target.to_string(),
                    text: line.clone(),
                });
            }
        }
    }

    Ok(())
}

/// ファイルごとに `File:` 見出しとヒット行を書き出す。
/// 読めなくなった時点までのヒットを書いてからエラー行を書き、次のファイルへ進む。
/// 戻り値はヒット総数
pub fn write_line_report<W: Write, S: AsRef<str>>(
    out: &mut W,
    files: &[PathBuf],
    targets: &[S],
    width: Option<usize>,
) -> Result<usize> {
    let mut total = 0;

    for path in files {
        write!(out, "\nFile: {}\n", path.display())?;
        let scan = scan_file(path, targets);
        for hit in &scan.hits {
            writeln!(out, "Line {}: {}", hit.line, clip(hit.text.trim(), width))?;
        }
        total += scan.hits.len();

        if let Some(e) = scan.error {
            warn!(path = %path.display(), error = %e, "line scan failed");
            writeln!(out, "Error reading file: {}", e)?;
        }
    }

    Ok(total)
}

fn clip(text: &str, width: Option<usize>) -> &str {
    match width.and_then(|w| text.char_indices().nth(w)) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
