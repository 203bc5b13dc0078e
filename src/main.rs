use clap::Parser;
use price_check::{check, cli, config, error, lines};
use check::CheckRequest;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use price_check_common::Plan;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Check {
            plan,
            json,
            json_dir,
            excel,
            sheet,
            output,
            json_limit,
            no_json_limit,
            excel_limit,
        } => {
            println!("🔎 price-check - 価格チェック\n");

            let plan = match plan {
                Some(path) => Plan::from_file(&path)?,
                None => Plan::price_check(),
            };

            let mut request = CheckRequest::from_config(&config, plan);
            if json_dir.is_some() {
                request.json_dir = json_dir;
            } else if !json.is_empty() {
                request.json_paths = json;
            }
            if let Some(path) = excel {
                request.excel_path = path;
            }
            if sheet.is_some() {
                request.sheet = sheet;
            }
            if let Some(path) = output {
                request.output = path;
            }
            if no_json_limit {
                request.options.json_limit = None;
            } else if json_limit.is_some() {
                request.options.json_limit = json_limit;
            }
            if excel_limit.is_some() {
                request.options.excel_limit = excel_limit;
            }

            println!("[1/2] データを読み込み・照合中...");
            let summary = check::run_check(&request)?;
            println!(
                "✔ {}件のターゲット (JSON {}件 / Excel {}件 / 再検索 {}回)\n",
                summary.targets, summary.json_matches, summary.excel_matches, summary.retries
            );

            println!("[2/2] レポートを保存");
            println!("✔ {}", request.output.display());
            println!("\n✅ 完了");
        }

        Commands::Excel {
            name,
            keywords,
            excel,
            sheet,
            output,
            title,
            excel_limit,
        } => {
            println!("🔎 price-check - Excel検索\n");

            let title = title.unwrap_or_else(|| format!("PRICE CHECK REPORT ({})", name));
            let keyword_refs: Vec<&str> = keywords.iter().map(String::as_str).collect();
            let plan = Plan::single(&title, &name, &keyword_refs);

            let mut request = CheckRequest::from_config(&config, plan);
            if let Some(path) = excel {
                request.excel_path = path;
            }
            if sheet.is_some() {
                request.sheet = sheet;
            }
            request.output = output.unwrap_or_else(|| default_excel_output(&config, &name));
            if excel_limit.is_some() {
                request.options.excel_limit = excel_limit;
            }

            let summary = check::run_check(&request)?;
            println!("✔ {}行が一致", summary.excel_matches);
            println!("✔ レポート: {}", request.output.display());
        }

        Commands::Lines {
            targets,
            files,
            output,
            width,
            full,
        } => {
            println!("🔎 price-check - 行検索\n");

            let files = if files.is_empty() { config.json_paths() } else { files };
            let output = output.unwrap_or_else(|| config.resolve(Path::new(config::LINES_REPORT_FILE)));
            if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }

            let mut out = BufWriter::new(std::fs::File::create(&output)?);
            let width = if full { None } else { Some(width) };
            let total = lines::write_line_report(&mut out, &files, &targets, width)?;
            out.flush()?;

            println!("✔ {}ファイル / {}件ヒット", files.len(), total);
            println!("✔ レポート: {}", output.display());
        }

        Commands::Config { set_data_dir, show } => {
            let mut config = config;

            if let Some(dir) = set_data_dir {
                config.set_data_dir(dir)?;
                println!("✔ データフォルダを設定しました");
            }

            if show {
                println!("設定:");
                println!("  データフォルダ: {}", config.data_dir.display());
                for path in config.json_paths() {
                    println!("  JSON: {}", path.display());
                }
                println!("  Excel: {}", config.excel_path().display());
                println!("  シート: {}", config.sheet.as_deref().unwrap_or("(先頭シート)"));
                println!("  出力: {}", config.output_path().display());
                println!("  JSON表示上限: {}", limit_label(config.json_limit));
                println!("  Excel表示上限: {}", limit_label(config.excel_limit));
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("price_check=debug")
    } else {
        EnvFilter::new("price_check=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// `price_check_output_<名前>.txt`
fn default_excel_output(config: &Config, name: &str) -> PathBuf {
    let slug: String = name
        .to_lowercase()
        .chars()
        // 結合文字（İ → i̇ の上点など）は落とす
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    config.resolve(Path::new(&format!("price_check_output_{}.txt", slug)))
}

fn limit_label(limit: Option<usize>) -> String {
    limit.map(|n| n.to_string()).unwrap_or_else(|| "なし".into())
}
