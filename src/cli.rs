use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "price-check")]
#[command(about = "価格データ（JSON/Excel）のキーワード検索・レポート出力ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 設定ファイル（デフォルト: ~/.config/price-check/config.json）
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// JSONとExcelをプランに沿って照合しレポートを出力
    Check {
        /// プランJSONファイル（省略時は組み込みの価格チェック）
        #[arg(short, long)]
        plan: Option<PathBuf>,

        /// JSONファイル（複数指定可）
        #[arg(long = "json")]
        json: Vec<PathBuf>,

        /// このフォルダ直下の .json を全て読み込む
        #[arg(long, conflicts_with = "json")]
        json_dir: Option<PathBuf>,

        /// Excelファイル
        #[arg(long)]
        excel: Option<PathBuf>,

        /// シート名（省略時は先頭シート）
        #[arg(long)]
        sheet: Option<String>,

        /// 出力レポート
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON照合結果の表示上限
        #[arg(long)]
        json_limit: Option<usize>,

        /// JSON照合結果を全件出力
        #[arg(long, conflicts_with = "json_limit")]
        no_json_limit: bool,

        /// Excel照合結果の表示上限
        #[arg(long)]
        excel_limit: Option<usize>,
    },

    /// Excelのみをキーワード検索
    Excel {
        /// ターゲット名（レポートの見出し）
        #[arg(required = true)]
        name: String,

        /// キーワード（全て含む行のみ）
        #[arg(required = true)]
        keywords: Vec<String>,

        /// Excelファイル
        #[arg(long)]
        excel: Option<PathBuf>,

        /// シート名
        #[arg(long)]
        sheet: Option<String>,

        /// 出力レポート
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// レポートタイトル（省略時は "PRICE CHECK REPORT (<名前>)"）
        #[arg(short, long)]
        title: Option<String>,

        /// 表示上限
        #[arg(long)]
        excel_limit: Option<usize>,
    },

    /// JSONファイルの生テキストから行を検索
    Lines {
        /// 検索文字列（在庫コード・カテゴリキーなど）
        #[arg(required = true)]
        targets: Vec<String>,

        /// 対象ファイル（省略時は設定のJSONファイル）
        #[arg(long = "file")]
        files: Vec<PathBuf>,

        /// 出力ファイル（デフォルト: データフォルダ/lines.txt）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 行の表示幅（文字数）
        #[arg(short, long, default_value_t = crate::lines::DEFAULT_LINE_WIDTH)]
        width: usize,

        /// 行を切り詰めない
        #[arg(long)]
        full: bool,
    },

    /// 設定を表示/編集
    Config {
        /// データフォルダを設定
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_defaults() {
        let cli = Cli::try_parse_from(["price-check", "check"]).unwrap();
        match cli.command {
            Commands::Check { plan, json, json_limit, no_json_limit, .. } => {
                assert!(plan.is_none());
                assert!(json.is_empty());
                assert!(json_limit.is_none());
                assert!(!no_json_limit);
            }
            _ => panic!("expected check"),
        }
    }

    #[test]
    fn test_parse_repeated_json() {
        let cli = Cli::try_parse_from([
            "price-check", "check", "--json", "a.json", "--json", "b.json", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Check { json, .. } => assert_eq!(json.len(), 2),
            _ => panic!("expected check"),
        }
    }

    #[test]
    fn test_json_dir_conflicts_with_json() {
        let result = Cli::try_parse_from([
            "price-check", "check", "--json", "a.json", "--json-dir", "data",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_excel() {
        let cli = Cli::try_parse_from(["price-check", "excel", "VİDA", "vida"]).unwrap();
        match cli.command {
            Commands::Excel { name, keywords, title, .. } => {
                assert_eq!(name, "VİDA");
                assert_eq!(keywords, vec!["vida"]);
                assert!(title.is_none());
            }
            _ => panic!("expected excel"),
        }
    }

    #[test]
    fn test_excel_requires_keyword() {
        assert!(Cli::try_parse_from(["price-check", "excel", "VİDA"]).is_err());
    }

    #[test]
    fn test_parse_lines() {
        let cli = Cli::try_parse_from([
            "price-check", "lines", "352123900200", "352131100200", "--file", "x.json", "--full",
        ])
        .unwrap();
        match cli.command {
            Commands::Lines { targets, files, width, full, .. } => {
                assert_eq!(targets.len(), 2);
                assert_eq!(files, vec![PathBuf::from("x.json")]);
                assert_eq!(width, crate::lines::DEFAULT_LINE_WIDTH);
                assert!(full);
            }
            _ => panic!("expected lines"),
        }
    }
}
