//! vsix-pack CLI

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::*;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vsix_pack::utils::helpers::absolutize;
use vsix_pack::{pack_extension, PackConfig, SelectionStrategy, SystemRunner};

#[derive(Parser)]
#[command(name = "vsix-pack")]
#[command(about = "Package a VS Code extension with vsce and collect the .vsix", long_about = None)]
#[command(version)]
struct Cli {
    /// Project root holding extensions-defaults/ and extensions-extra/
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Extension source root (defaults below --root)
    #[arg(long)]
    extension_root: Option<PathBuf>,

    /// Directory receiving the archive (defaults below --root)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// How to choose between several archives
    #[arg(long, value_enum, default_value_t = Selection::Lexicographic)]
    select: Selection,

    /// Print debug diagnostics
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Selection {
    /// Greatest file name
    Lexicographic,
    /// Highest version in the file name
    Semver,
    /// Most recently modified file
    Newest,
}

impl From<Selection> for SelectionStrategy {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::Lexicographic => SelectionStrategy::Lexicographic,
            Selection::Semver => SelectionStrategy::SemanticVersion,
            Selection::Newest => SelectionStrategy::Newest,
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "vsix_pack=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn build_config(cli: &Cli) -> Result<PackConfig> {
    let root = absolutize(&cli.root).context("Failed to resolve project root")?;
    let mut config = PackConfig::from_project_root(&root);

    if let Some(dir) = &cli.extension_root {
        config.extension_root = absolutize(dir).context("Failed to resolve extension root")?;
    }
    if let Some(dir) = &cli.output_dir {
        config.output_root = absolutize(dir).context("Failed to resolve output directory")?;
    }

    Ok(config.with_selection(cli.select.into()))
}

fn run(cli: &Cli) -> Result<()> {
    let config = build_config(cli)?;

    println!("{}", "VSIX Packager".bold().blue());
    println!("{}", "=".repeat(50).blue());
    println!("Extension: {}", config.extension_root.display());
    println!();

    let result = pack_extension(&config, &SystemRunner)?;

    println!();
    println!(
        "{}",
        format!("✅ Copied {} to {}", result.archive_name, result.destination.display())
            .green()
            .bold()
    );
    println!();
    println!("📊 Summary:");
    print!("{}", vsix_pack::report::generate_summary(&result));

    if result.matches_expected_name() == Some(false) {
        if let Some(manifest) = &result.manifest {
            println!();
            println!(
                "{}",
                format!(
                    "⚠️  Expected {} from package.json, collected {}",
                    manifest.expected_archive_name(),
                    result.archive_name
                )
                .yellow()
            );
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{}", "❌ Packaging failed!".red().bold());
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}
