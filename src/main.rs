use std::{fs, path::PathBuf};

use clap::Parser;
use datev_export::{entities::ExportPeriod, errors::Result, util::DatevExportUtil};

#[derive(Parser, Debug)]
#[command(
    name = "datev-export",
    version,
    about = "DATEV-Export eines Praxisverwaltungs-Backups"
)]
struct Cli {
    /// Backup-Archiv (Zip) der Praxisverwaltung
    archive: PathBuf,

    /// Zu exportierender Monat
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
    month: u32,

    /// Zu exportierendes Jahr
    #[arg(short, long, value_parser = clap::value_parser!(i32).range(2000..))]
    year: i32,

    /// Zieldatei für den Buchungsstapel
    #[arg(short, long)]
    output: PathBuf,

    /// Optionale Zieldatei für die Gegenprobe (EC- und Überweisungszahlungen)
    #[arg(long)]
    check: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<()> {
    let period = ExportPeriod::new(cli.year, cli.month)?;
    let (records, datev, crosscheck) =
        DatevExportUtil::new().from_archive(&cli.archive, period)?;

    for warning in &records.warnings {
        tracing::warn!("{warning}");
    }

    // Files are only written once the whole month converted cleanly.
    fs::write(&cli.output, datev)?;
    if let Some(check) = &cli.check {
        fs::write(check, crosscheck)?;
    }

    println!("{}", records.summary);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "datev_export=info".into()),
        )
        .init();

    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        tracing::error!("{error}");
        std::process::exit(1);
    }
}
