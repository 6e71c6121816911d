//! Patch translated text back into copies of the original mockup
//! files, keyed by the elements' custom ids.

use std::path::PathBuf;

use clap::Parser;
use log::info;
use mockup_i18n_helpers::translate::{translate_mockups, TranslationCatalog};

/// Rewrite mockup files with texts from a translation XML file.
#[derive(Parser)]
#[command(name = "mockup-gettext", version, about)]
struct Cli {
    /// Directory holding the original mockup files.
    #[arg(short, long)]
    mockups: PathBuf,

    /// Translation XML file, shaped like a mockup-xgettext XML export.
    #[arg(short, long)]
    translation: PathBuf,

    /// Directory the translated copies are written to. Must not exist
    /// yet.
    #[arg(short, long, default_value = "translation")]
    output: PathBuf,

    /// Increase output verbosity.
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::init_from_env(env_logger::Env::default().filter_or(
        "RUST_LOG",
        if cli.verbose { "debug" } else { "info" },
    ));

    let catalog = TranslationCatalog::from_file(&cli.translation)?;
    info!("Read {} translations from {}", catalog.len(), cli.translation.display());
    let patched = translate_mockups(&cli.mockups, &catalog, &cli.output)?;
    info!("Rewrote {patched} text properties in {}", cli.output.display());
    Ok(())
}
