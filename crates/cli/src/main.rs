//! apitab CLI
//!
//! Command-line interface for turning one OpenAPI 3.x endpoint into
//! tabular API descriptions (Excel workbook or CSV files).

use anyhow::{Context, Result};
use apitab_flattener::{
    build_request_body_table, build_request_params_table, build_response_body_table,
};
use apitab_parser::{apply_filters, validate_spec, DocumentParser};
use apitab_writer::{write_csv, write_excel};
use clap::Parser;
use colored::*;
use std::path::PathBuf;

mod config;

use config::AppConfig;

#[derive(Parser)]
#[command(name = "apitab")]
#[command(version, about = "Convert OpenAPI 3.x specs into tabular API descriptions", long_about = None)]
#[command(after_help = "EXAMPLES:\n  \
    # Excel workbook next to the input (petstore_api_tab_desc.xlsx)\n  \
    apitab petstore.yaml\n\n  \
    # CSV files with an explicit base name\n  \
    apitab petstore.yaml pet_tables --config csv-config.toml\n\n  \
    # Multi-endpoint specs need a [filtering] section in the config")]
struct Cli {
    /// Path to the OpenAPI YAML or JSON file
    input_file: PathBuf,

    /// Output base name (default: <input stem>_api_tab_desc)
    output_file: Option<String>,

    /// Path to the config file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("Failed to load config: {}", cli.config.display()))?;
    let format = config.output.format.trim().to_lowercase();
    let base_name = resolve_base_name(&cli, &config);

    println!("{} Input file: {}", "→".cyan(), cli.input_file.display());
    println!("{} Output base: {}", "→".cyan(), base_name.yellow());
    println!("{} Format: {}", "→".cyan(), format.yellow());

    let parser = DocumentParser::from_file(&cli.input_file)
        .context("Failed to load OpenAPI document")?;
    let spec = parser.into_spec();

    let rules = config.filter_rules();
    let spec = apply_filters(&spec, &rules).context("Endpoint filtering failed")?;

    if config.input.validate {
        validate_spec(&spec).context("Document validation failed")?;
        println!("{} Document is structurally valid", "✓".green());
    }

    let params = build_request_params_table(&spec);
    let request = build_request_body_table(&spec);
    let responses = build_response_body_table(&spec);

    println!("{} Parameter rows: {}", "✓".green(), params.len());
    println!("{} Request body rows: {}", "✓".green(), request.len());
    println!("{} Response body rows: {}", "✓".green(), responses.len());

    match format.as_str() {
        "xlsx" | "excel" => {
            let out_path = format!("{base_name}.xlsx");
            write_excel(&out_path, &params, &request, &responses)
                .context("Failed to write Excel workbook")?;
            println!("\n{} Wrote {}", "✓".green().bold(), out_path);
        }
        "csv" => {
            write_csv(&base_name, &params, &request, &responses)
                .context("Failed to write CSV files")?;
            println!("\n{} Wrote CSV files with base {}", "✓".green().bold(), base_name);
        }
        other => anyhow::bail!("Unsupported output format: {other}"),
    }

    Ok(())
}

/// Output base name precedence: CLI argument, then a meaningful config
/// override, then `<input stem>_api_tab_desc`
fn resolve_base_name(cli: &Cli, config: &AppConfig) -> String {
    if let Some(output) = &cli.output_file {
        return output.clone();
    }
    if let Some(name) = &config.output.file_name {
        let name = name.trim();
        if !name.is_empty() && !name.eq_ignore_ascii_case("api_tab_desc") {
            return name.to_string();
        }
    }
    let stem = cli
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("spec");
    format!("{stem}_api_tab_desc")
}
