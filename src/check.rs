//! 価格チェックの一括実行（読み込み → 照合 → レポート）

use crate::config::Config;
use crate::error::{PriceCheckError, Result};
use crate::loader::{self, DataSet};
use crate::report::{self, ReportOptions, ReportSummary};
use price_check_common::Plan;
use std::path::{Path, PathBuf};
use tracing::error;

#[derive(Debug, Clone)]
pub struct CheckRequest {
    pub plan: Plan,
    pub json_paths: Vec<PathBuf>,
    /// 指定時は `json_paths` の代わりにフォルダ直下の .json を読む
    pub json_dir: Option<PathBuf>,
    pub excel_path: PathBuf,
    pub sheet: Option<String>,
    pub output: PathBuf,
    pub options: ReportOptions,
}

impl CheckRequest {
    /// 設定ファイルのパス・上限値で組み立てる
    pub fn from_config(config: &Config, plan: Plan) -> Self {
        Self {
            plan,
            json_paths: config.json_paths(),
            json_dir: None,
            excel_path: config.excel_path(),
            sheet: config.sheet.clone(),
            output: config.output_path(),
            options: ReportOptions {
                json_limit: config.json_limit,
                excel_limit: config.excel_limit,
            },
        }
    }
}

/// プランが使うデータだけ読み込む。
/// 読み込みに失敗したらレポートをエラー1行で上書きし、照合には進まない
pub fn run_check(request: &CheckRequest) -> Result<ReportSummary> {
    let data = match load_for_plan(request) {
        Ok(data) => data,
        Err(e) => {
            error!(error = %e, "load failed");
            report::write_load_error(&request.output, &e)?;
            return Err(e);
        }
    };

    report::write_report_file(&request.output, &request.plan, &data, request.options)
}

fn load_for_plan(request: &CheckRequest) -> Result<DataSet> {
    let discovered;
    let json_paths: &[PathBuf] = if !request.plan.needs_json() {
        &[]
    } else if let Some(dir) = &request.json_dir {
        // フォルダが無いのもJSONの読み込み失敗として扱う
        discovered = loader::discover_json_files(dir)
            .map_err(|e| PriceCheckError::load(loader::JSON_LOAD_CONTEXT, e))?;
        &discovered
    } else {
        &request.json_paths
    };
    let excel_path: Option<&Path> = request
        .plan
        .needs_excel()
        .then_some(request.excel_path.as_path());

    loader::load_data_set(json_paths, excel_path, request.sheet.as_deref())
}
