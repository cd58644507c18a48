use clap::Parser;
use std::io::Write;
use std::time::Instant;

use lev::{top, Dictionary};

mod cli;
use cli::{display, Cli, USAGE};

fn init_logging(default_level: &str) {
    let env = env_logger::Env::new()
        .filter_or("LEV_LOG", default_level)
        .write_style("LEV_LOG_STYLE");
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let Some(query) = cli.query() else {
        println!("{}", USAGE);
        return;
    };

    if let Err(e) = run(&cli, query) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, query: &str) -> Result<(), Box<dyn std::error::Error>> {
    let owned;
    let dictionary: &Dictionary = match &cli.dict {
        Some(path) => {
            owned = Dictionary::from_path(path)?;
            &owned
        }
        None => Dictionary::embedded()?,
    };

    let algorithm = cli.effective_algorithm();
    log::info!(
        "scoring {} words against {:?} with {}",
        dictionary.len(),
        query,
        algorithm
    );

    let started = Instant::now();
    let suggestions = top(query, dictionary.words(), algorithm, cli.limit)?;
    log::info!("ranked in {:?}", started.elapsed());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if cli.json {
        write_json(&mut out, &suggestions)?;
        return Ok(());
    }

    let colored = display::use_colors();
    for line in display::render(query, &suggestions, colored) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(feature = "serde_json")]
fn write_json(
    out: &mut impl Write,
    suggestions: &[lev::Suggestion],
) -> Result<(), Box<dyn std::error::Error>> {
    serde_json::to_writer_pretty(&mut *out, suggestions)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(not(feature = "serde_json"))]
fn write_json(
    _out: &mut impl Write,
    _suggestions: &[lev::Suggestion],
) -> Result<(), Box<dyn std::error::Error>> {
    Err("--json requires the `serde_json` feature".into())
}
