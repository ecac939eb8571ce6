use clap::Parser;
use ota_search::{cli, config, display, error, export, interactive, logging, workbook};
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use error::{OtaSearchError, Result};
use ota_search_common::extract_key_values;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use workbook::{OtaTable, TableCache};

fn main() {
    if let Err(e) = run() {
        eprintln!("✖ {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let mut config = Config::load()?;

    let sheet = cli.sheet.clone().unwrap_or_else(|| config.sheet_name.clone());
    let mut cache = TableCache::new();

    match cli.command {
        Commands::List { query } => {
            let table = load(&mut cache, cli.workbook.as_deref(), &sheet, &config)?;
            let outcome = table.search(query.as_deref().unwrap_or(""));
            print!("{}", display::render_outcome(&outcome));
        }

        Commands::Search { query, key, raw, format } => {
            let table = load(&mut cache, cli.workbook.as_deref(), &sheet, &config)?;
            let outcome = table.search(&query);
            let details = outcome.selected().map(|name| table.details(name));

            match format {
                OutputFormat::Text => {
                    print!("{}", display::render_outcome(&outcome));
                    if let Some(details) = &details {
                        println!("→ {}\n", details.ota);
                        print!("{}", display::render_details(details, key.as_deref(), raw));
                    }
                }
                OutputFormat::Json => {
                    let view = display::SearchView::new(&query, &outcome, details.as_ref(), key.as_deref());
                    println!("{}", serde_json::to_string_pretty(&view)?);
                }
            }
        }

        Commands::Extract { text } => {
            let fields = extract_key_values(&text);
            println!("{}", serde_json::to_string_pretty(&fields)?);
        }

        Commands::Interactive => {
            let path = workbook::resolve_workbook(cli.workbook.as_deref(), &config, Path::new("."))?;
            interactive::run_interactive(&mut cache, &path, &sheet, &config)?;
        }

        Commands::Export { query, output, format } => {
            println!("📄 ota-search - エクスポート\n");

            let table = load(&mut cache, cli.workbook.as_deref(), &sheet, &config)?;
            let selected = table
                .best_match(&query)
                .ok_or_else(|| OtaSearchError::NoMatch(query.clone()))?;
            println!("→ {}", selected);

            let report = export::OtaReport::new(&table, table.details(&selected));
            let output = output.unwrap_or_else(|| PathBuf::from("."));
            export::export_report(&report, format, &output)?;

            println!("\n✅ エクスポート完了");
        }

        Commands::Config { set_workbook, set_sheet, show } => {
            if let Some(path) = set_workbook {
                config.set_workbook(path)?;
                println!("✔ ワークブックのパスを設定しました");
            }

            if let Some(sheet) = set_sheet {
                config.set_sheet(sheet)?;
                println!("✔ シート名を設定しました");
            }

            if show {
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                let paths: Vec<String> = config.workbook_paths.iter().map(|p| p.display().to_string()).collect();
                println!("  ワークブック候補: {}", paths.join(", "));
                println!("  シート: {}", config.sheet_name);
                println!("  OTA名列: {}", config.name_aliases.join(", "));
                println!("  明細列: {}", config.detail_aliases.join(", "));
            }
        }
    }

    Ok(())
}

fn load(cache: &mut TableCache, explicit: Option<&Path>, sheet: &str, config: &Config) -> Result<Rc<OtaTable>> {
    let path = workbook::resolve_workbook(explicit, config, Path::new("."))?;
    cache.get_or_load(&path, sheet, config)
}
