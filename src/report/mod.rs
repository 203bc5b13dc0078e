//! 照合結果のテキストレポート出力

pub mod format;

use crate::error::{PriceCheckError, Result};
use crate::loader::DataSet;
use price_check_common::{py_list, Plan, Record, ReportStyle, Target};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// 表示上限（`None` は無制限）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub json_limit: Option<usize>,
    pub excel_limit: Option<usize>,
}

/// 書き出した件数の集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub targets: usize,
    pub json_matches: usize,
    pub excel_matches: usize,
    pub retries: usize,
    pub misses: usize,
}

pub fn write_report_file(
    path: &Path,
    plan: &Plan,
    data: &DataSet,
    options: ReportOptions,
) -> Result<ReportSummary> {
    create_parent(path)?;
    let mut out = BufWriter::new(File::create(path)?);
    let summary = write_report(&mut out, plan, data, options)?;
    out.flush()?;
    info!(path = %path.display(), ?summary, "report written");
    Ok(summary)
}

/// 読み込み失敗時: エラー1行のみのレポートで上書き
pub fn write_load_error(path: &Path, error: &PriceCheckError) -> Result<()> {
    create_parent(path)?;
    std::fs::write(path, format::single_line(&error.to_string()))?;
    Ok(())
}

pub fn write_report<W: Write>(
    out: &mut W,
    plan: &Plan,
    data: &DataSet,
    options: ReportOptions,
) -> Result<ReportSummary> {
    let mut summary = ReportSummary::default();

    match plan.style {
        ReportStyle::Checklist => {
            writeln!(out, "--- {} ---", plan.title)?;
            writeln!(out)?;
            for target in &plan.targets {
                write_checklist_target(out, plan, target, data, options, &mut summary)?;
            }
        }
        ReportStyle::Sections => {
            for (i, target) in plan.targets.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                write_section(out, plan, target, data, options, &mut summary)?;
            }
        }
    }

    Ok(summary)
}

fn write_checklist_target<W: Write>(
    out: &mut W,
    plan: &Plan,
    target: &Target,
    data: &DataSet,
    options: ReportOptions,
    summary: &mut ReportSummary,
) -> Result<()> {
    summary.targets += 1;
    writeln!(out, "checking: {}", target.name)?;

    if let Some(query) = target.json_query() {
        writeln!(out, "  > Searching JSON with keywords: {}", py_list(query.keywords()))?;
        let found = query.search_in(&data.json, plan.json_fields.as_deref());
        debug!(target = %target.name, matches = found.len(), "JSON search");

        if found.is_empty() {
            summary.misses += 1;
            writeln!(out, "    - No matches in JSON.")?;
        }
        for record in limited(&found, options.json_limit) {
            summary.json_matches += 1;
            writeln!(out, "    - {}", format::json_found(record))?;
        }
    }

    if let Some(query) = target.excel_query() {
        writeln!(out, "  > Searching Excel with keywords: {}", py_list(query.keywords()))?;
        let found = query.search(&data.sheet);
        debug!(target = %target.name, matches = found.len(), "Excel search");

        if found.is_empty() {
            if let Some(retry) = target.fallback_query() {
                summary.retries += 1;
                writeln!(out, "    - {}", format::retrying(retry.keywords()))?;
                let retried = retry.search(&data.sheet);
                info!(target = %target.name, matches = retried.len(), "Excel fallback search");
                for record in limited(&retried, options.excel_limit) {
                    writeln!(out, "      - {}", format::retry_found(record))?;
                }
            }
            summary.misses += 1;
            writeln!(out, "    - No matches in Excel.")?;
        }
        for record in limited(&found, options.excel_limit) {
            summary.excel_matches += 1;
            writeln!(out, "    - {}", format::row_found(record))?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", format::separator())?;
    Ok(())
}

fn write_section<W: Write>(
    out: &mut W,
    plan: &Plan,
    target: &Target,
    data: &DataSet,
    options: ReportOptions,
    summary: &mut ReportSummary,
) -> Result<()> {
    summary.targets += 1;
    writeln!(out, "--- {} ---", target.name)?;
    writeln!(out)?;

    if let Some(query) = target.json_query() {
        let found = query.search_in(&data.json, plan.json_fields.as_deref());
        for record in limited(&found, options.json_limit) {
            summary.json_matches += 1;
            writeln!(out, "{}", format::json_found(record))?;
        }
    }

    if let Some(query) = target.excel_query() {
        let found = query.search(&data.sheet);
        for record in limited(&found, options.excel_limit) {
            summary.excel_matches += 1;
            writeln!(out, "{}", format::row_found(record))?;
        }
    }

    Ok(())
}

fn limited<'a>(records: &'a [&'a Record], limit: Option<usize>) -> &'a [&'a Record] {
    match limit {
        Some(n) if n < records.len() => &records[..n],
        _ => records,
    }
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
