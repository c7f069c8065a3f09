use std::path::PathBuf;
use std::time::Instant;

use clap::{arg, Command};
use log::info;

use swap_tour::io::{read_cities, CityListing, RouteReport};
use swap_tour::local_search::{find_best_cycle, SearchConfig, DEFAULT_SWAP_BUDGET};
use swap_tour::models::Tour;
use swap_tour::{logging, Result};

fn cli() -> Command {
    Command::new("swap-tour")
        .about("Finds a short cycle through the cities of a tab-separated city file")
        .arg(
            arg!([CITIES] "Tab-separated file: region, name, latitude, longitude")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("city-data.txt"),
        )
        .arg(
            arg!(--budget <N> "Total number of swap attempts")
                .value_parser(clap::value_parser!(usize))
                .required(false)
                .default_value("10000"),
        )
        .arg(
            arg!(--seed <N> "Random seed for the improvement phase")
                .value_parser(clap::value_parser!(u64))
                .required(false)
                .default_value("0")
                .conflicts_with("random"),
        )
        .arg(arg!(--random "Seed from entropy instead of --seed"))
        .arg(
            arg!(--"log-level" <LEVEL> "off, error, warn, info, debug, or trace")
                .required(false)
                .default_value("warn"),
        )
}

fn main() {
    let matches = cli().get_matches();

    let mut config = SearchConfig::default().with_swap_budget(
        *matches
            .get_one::<usize>("budget")
            .unwrap_or(&DEFAULT_SWAP_BUDGET),
    );
    config = if matches.get_flag("random") {
        config.without_seed()
    } else {
        config.with_seed(*matches.get_one::<u64>("seed").unwrap_or(&0))
    };

    let path = matches
        .get_one::<PathBuf>("CITIES")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("city-data.txt"));
    let level = matches
        .get_one::<String>("log-level")
        .map(String::as_str)
        .unwrap_or("warn");

    if let Err(e) = run(path, level, &config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(path: PathBuf, level: &str, config: &SearchConfig) -> Result<()> {
    logging::init_logger(logging::parse_level(level)?)?;
    let now = Instant::now();

    let cities = read_cities(&path)?;
    print!("{}", CityListing::new(&cities));

    let tour = Tour::new(cities)?;
    let result = find_best_cycle(&tour, config)?;

    print!("{}", RouteReport::new(&result.tour)?);

    info!(
        "output: n={} initial={:.2} final={:.2} time={:.2}s",
        result.tour.len(),
        result.initial_distance,
        result.total_distance,
        now.elapsed().as_secs_f32()
    );
    Ok(())
}
