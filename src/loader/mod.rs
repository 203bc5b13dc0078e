pub mod excel;
pub mod json;

use crate::error::{PriceCheckError, Result};
use price_check_common::Record;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

pub use excel::load_sheet_records;
pub use json::{flatten_value, load_json_records};

pub const JSON_LOAD_CONTEXT: &str = "Error loading JSONs";
pub const EXCEL_LOAD_CONTEXT: &str = "Error reading Excel file";

/// 読み込み済みの検索対象一式（読み込み後は変更しない）
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    pub json: Vec<Record>,
    pub sheet: Vec<Record>,
}

/// JSONを全て読み込んだ後にスプレッドシートを読む。最初の失敗で中断
pub fn load_data_set(
    json_paths: &[PathBuf],
    excel_path: Option<&Path>,
    sheet: Option<&str>,
) -> Result<DataSet> {
    let mut data = DataSet::default();

    for path in json_paths {
        let records = load_json_records(path)
            .map_err(|e| PriceCheckError::load(JSON_LOAD_CONTEXT, e))?;
        info!(path = %path.display(), records = records.len(), "loaded JSON");
        data.json.extend(records);
    }

    if let Some(path) = excel_path {
        data.sheet = load_sheet_records(path, sheet)
            .map_err(|e| PriceCheckError::load(EXCEL_LOAD_CONTEXT, e))?;
        info!(path = %path.display(), rows = data.sheet.len(), "loaded spreadsheet");
    }

    Ok(data)
}

/// フォルダ直下の .json ファイル一覧（ファイル名順）
pub fn discover_json_files(folder: &Path) -> Result<Vec<PathBuf>> {
    if !folder.exists() {
        return Err(PriceCheckError::FolderNotFound(folder.display().to_string()));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(folder)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file())
        .filter(|p| {
            p.extension()
                .map(|ext| ext.eq_ignore_ascii_case("json"))
                .unwrap_or(false)
        })
        .collect();

    files.sort();
    debug!(folder = %folder.display(), count = files.len(), "discovered JSON files");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_discover_json_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();
        fs::write(dir.path().join("a.JSON"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("c.json"), "{}").unwrap();

        let files = discover_json_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.JSON", "b.json"]);
    }

    #[test]
    fn test_discover_missing_folder() {
        let result = discover_json_files(Path::new("/nonexistent/data"));
        assert!(matches!(result, Err(PriceCheckError::FolderNotFound(_))));
    }

    #[test]
    fn test_load_data_set_stops_at_first_json_error() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.json");
        let bad = dir.path().join("bad.json");
        fs::write(&good, r#"{"items": [{"description": "ok"}]}"#).unwrap();
        fs::write(&bad, "{ not json").unwrap();

        let err = load_data_set(&[good, bad], None, None).unwrap_err();
        assert!(err.to_string().starts_with(JSON_LOAD_CONTEXT));
    }

    #[test]
    fn test_load_data_set_json_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prices.json");
        fs::write(&path, r#"{"a": [{"description": "x"}, {"description": "y"}]}"#).unwrap();

        let data = load_data_set(&[path], None, None).unwrap();
        assert_eq!(data.json.len(), 2);
        assert!(data.sheet.is_empty());
    }
}
