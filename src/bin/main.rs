//! ItemsAdder to Geyser CLI
//!
//! Convert an ItemsAdder pack into a Bedrock resource pack and Geyser mappings.

use clap::Parser;
use itemsadder_geyser::{convert, ConversionReport, ConverterConfig};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "itemsadder-geyser")]
#[command(author, version, about = "Convert ItemsAdder packs to Geyser format", long_about = None)]
struct Cli {
    /// Path to the ItemsAdder pack (folder or ZIP file)
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory for the converted pack
    #[arg(short, long, default_value = "./output")]
    output: PathBuf,

    /// Name for the output pack
    #[arg(long, default_value = "itemsadder-geyser-pack")]
    pack_name: String,

    /// Create a ZIP file of the converted pack
    #[arg(long)]
    create_zip: bool,

    /// Log every skipped file and fallback
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "itemsadder_geyser=debug"
    } else {
        "itemsadder_geyser=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default.into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ConverterConfig::default()
        .with_pack_name(cli.pack_name)
        .with_zip(cli.create_zip);

    println!("ItemsAdder to Geyser Converter");
    println!("Converting {:?} into {:?}...", cli.input, cli.output);

    match convert(&cli.input, &cli.output, &config) {
        Ok(report) => {
            print_summary(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Conversion failed: {}", e);
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn print_summary(report: &ConversionReport) {
    println!("\nConversion Summary:");
    println!("  Items found:      {}", report.items);
    println!("  Blocks found:     {}", report.blocks);
    println!(
        "  Resource pack:    {}",
        if report.had_resource_pack { "Yes" } else { "No" }
    );
    if report.inferred {
        println!("  Definitions:      inferred from textures");
    }
    println!("  Textures copied:  {}", report.copied_textures);
    if report.extra_assets > 0 {
        println!("  Other assets:     {}", report.extra_assets);
    }
    println!("  Item atlas:       {} textures", report.item_textures);
    println!("  Terrain atlas:    {} textures", report.terrain_textures);
    println!("  Items mappings:   {:?}", report.items_mappings);
    println!("  Blocks mappings:  {:?}", report.blocks_mappings);
    println!("  Output pack:      {:?}", report.pack_dir);
    if let Some(zip_path) = &report.zip_path {
        println!("  ZIP file:         {:?}", zip_path);
    }

    println!("\nConversion completed successfully!");
    println!("Next steps:");
    println!("  - Place items.json in Geyser's custom_mappings folder");
    if report.blocks > 0 {
        println!("  - Place blocks.json in Geyser's custom_mappings folder");
    }
    println!("  - Place the resource pack in Geyser's packs folder");
    println!("  - Restart your server or reload Geyser");
}
