use crate::error::{PriceCheckError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const PRICES_JSON: &str = "product-prices.json";
pub const ACCESSORIES_JSON: &str = "accessories.json";
pub const PRICE_LIST_XLSX: &str = "son_fiyat_listesi190126.xlsx";
pub const REPORT_FILE: &str = "price_check_output.txt";
pub const LINES_REPORT_FILE: &str = "lines.txt";

/// JSON照合結果の既定の表示上限
pub const DEFAULT_JSON_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// データファイルの置き場所（相対パスの基準）
    pub data_dir: PathBuf,
    pub json_files: Vec<PathBuf>,
    pub excel_file: PathBuf,
    pub output_file: PathBuf,
    /// 省略時は10件。`null` を明示すると全件出力
    pub json_limit: Option<usize>,
    pub excel_limit: Option<usize>,
    /// 省略時は先頭シート
    pub sheet: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            json_files: vec![PRICES_JSON.into(), ACCESSORIES_JSON.into()],
            excel_file: PRICE_LIST_XLSX.into(),
            output_file: REPORT_FILE.into(),
            json_limit: Some(DEFAULT_JSON_LIMIT),
            excel_limit: None,
            sheet: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// 指定パスから読み込み。ファイルがなければ既定値
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PriceCheckError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("price-check").join("config.json"))
    }

    /// data_dir 基準で解決（絶対パスはそのまま）
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_dir.join(path)
        }
    }

    pub fn json_paths(&self) -> Vec<PathBuf> {
        self.json_files.iter().map(|p| self.resolve(p)).collect()
    }

    pub fn excel_path(&self) -> PathBuf {
        self.resolve(&self.excel_file)
    }

    pub fn output_path(&self) -> PathBuf {
        self.resolve(&self.output_file)
    }

    pub fn set_data_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.data_dir = dir;
        self.save()
    }
}
