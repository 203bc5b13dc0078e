use thiserror::Error;

#[derive(Error, Debug)]
pub enum PriceCheckError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Excel読み込みエラー: {0}")]
    ExcelRead(#[from] calamine::Error),

    #[error("シートが見つかりません: {0}")]
    SheetNotFound(String),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    /// 読み込み失敗（レポートに1行だけ書き出して終了）
    #[error("{context}: {source}")]
    Load {
        context: &'static str,
        #[source]
        source: Box<PriceCheckError>,
    },

    #[error(transparent)]
    Common(#[from] price_check_common::Error),
}

impl PriceCheckError {
    pub fn load(context: &'static str, source: PriceCheckError) -> Self {
        PriceCheckError::Load {
            context,
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, PriceCheckError>;
