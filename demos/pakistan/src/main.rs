//! pakistan — interactive fastest-route finder over 15 Pakistani cities.
//!
//! Asks for a start city, a destination and an average speed, then prints a
//! receipt with the legs, total distance, travel time, fuel and fuel cost.
//!
//! Run with:
//!   cargo run -p pakistan -- [--cities cities.csv --roads roads.csv]
//!                            [--config config.json] [--csv-out DIR] [--verbose]
//!
//! Without `--cities`/`--roads` the built-in network is used.  `config.json`
//! holds any subset of `NavConfig` fields, e.g.
//! `{ "fuel_kind": "diesel", "max_speed_kmh": 120 }`.

mod console;
mod network;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use log::{LevelFilter, info};
use simple_logger::SimpleLogger;

use nav_core::NavConfig;
use nav_network::{RoadNetwork, load_network_csv};
use nav_output::{CsvWriter, OutputWriter, ReceiptWriter, TripSummary};

use network::build_network;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Default)]
struct Args {
    cities:  Option<PathBuf>,
    roads:   Option<PathBuf>,
    config:  Option<PathBuf>,
    csv_out: Option<PathBuf>,
    verbose: bool,
}

impl Args {
    fn parse(mut raw: impl Iterator<Item = String>) -> Result<Self> {
        let mut args = Args::default();
        while let Some(flag) = raw.next() {
            let mut value = || raw.next().with_context(|| format!("{flag} needs a value"));
            match flag.as_str() {
                "--cities"  => args.cities  = Some(value()?.into()),
                "--roads"   => args.roads   = Some(value()?.into()),
                "--config"  => args.config  = Some(value()?.into()),
                "--csv-out" => args.csv_out = Some(value()?.into()),
                "--verbose" | "-v" => args.verbose = true,
                other => bail!("unknown argument {other:?}"),
            }
        }
        Ok(args)
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<NavConfig> {
    let config = match path {
        None => NavConfig::default(),
        Some(p) => {
            let file = std::fs::File::open(p)
                .with_context(|| format!("opening config {}", p.display()))?;
            serde_json::from_reader(io::BufReader::new(file))
                .with_context(|| format!("parsing config {}", p.display()))?
        }
    };
    config.validate()?;
    Ok(config)
}

fn load_network(args: &Args) -> Result<RoadNetwork> {
    match (&args.cities, &args.roads) {
        (None, None) => Ok(build_network()?),
        (Some(cities), Some(roads)) => Ok(load_network_csv(cities, roads)?),
        _ => bail!("--cities and --roads must be given together"),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse(std::env::args().skip(1))?;

    SimpleLogger::new()
        .with_level(if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn })
        .init()?;

    let config = load_config(args.config.as_ref())?;
    let network = load_network(&args)?;
    info!(
        "network ready: {} cities, {} roads",
        network.city_count(),
        network.road_count()
    );

    let mut csv = match &args.csv_out {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            Some(CsvWriter::new(dir)?)
        }
        None => None,
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut receipt = ReceiptWriter::new(io::stdout());

    run(&mut input, &mut receipt, csv.as_mut(), &network, &config)?;

    if let Some(csv) = csv.as_mut() {
        csv.finish()?;
        println!("Wrote {} route(s) to CSV.", csv.routes_written());
    }
    println!("\nThank you for using the route finder. Drive safely!");
    Ok(())
}

/// Menu loop: prompt, route, print, repeat until the user declines or input ends.
fn run<R: BufRead>(
    input:   &mut R,
    receipt: &mut ReceiptWriter<io::Stdout>,
    mut csv: Option<&mut CsvWriter>,
    network: &RoadNetwork,
    config:  &NavConfig,
) -> Result<()> {
    let mut out = io::stdout();
    loop {
        writeln!(out, "\n=============================================")?;
        writeln!(out, "{:^45}", "INTER-CITY ROUTE FINDER")?;
        writeln!(out, "=============================================")?;
        console::print_menu(&mut out, network)?;

        let Some(start) = console::prompt_city(input, &mut out, "\nEnter start city", network)? else {
            return Ok(());
        };
        let Some(end) = console::prompt_city(input, &mut out, "Enter destination city", network)? else {
            return Ok(());
        };
        let Some(speed) = console::prompt_speed(input, &mut out, config)? else {
            return Ok(());
        };

        match network.find_shortest_route(start, end, speed) {
            Ok(route) => {
                let summary = TripSummary::new(&route, config);
                receipt.write_route(network, &route, &summary)?;
                receipt.finish()?;
                if let Some(csv) = csv.as_deref_mut() {
                    csv.write_route(network, &route, &summary)?;
                }
            }
            Err(e) => writeln!(out, "\nError: {e}")?,
        }

        if !console::prompt_again(input, &mut out)? {
            return Ok(());
        }
    }
}
