use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use itertools::Itertools;
use serde::Serialize;
use travel_paths::{
    graphs::Edge,
    search::path::total_weight,
    travel::{loading::load_travel_graph, planner::TravelPlanner, Transport, TravelGraph},
    utility::get_progressspinner,
};

/// Finds a route between two cities of a travel network loaded from a
/// cities and a transports csv file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Cities file with a `name` column
    #[arg(short, long)]
    cities: PathBuf,

    /// Transports file with `origin,destination,type,price,duration` columns
    #[arg(short, long)]
    transports: PathBuf,

    /// Name of the city to start from
    #[arg(short, long)]
    from: String,

    /// Name of the city to travel to
    #[arg(short = 'o', long)]
    to: String,

    /// What the route should minimize
    #[arg(short, long, value_enum, default_value_t = Criterion::Fastest)]
    by: Criterion,

    /// Print the route as json instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Criterion {
    /// Minimize the total travel time
    Fastest,
    /// Minimize the total price
    Cheapest,
    /// Minimize the number of legs
    Direct,
}

#[derive(Serialize)]
struct RouteLeg<'a> {
    from: &'a str,
    to: &'a str,
    mode: &'static str,
    price: f64,
    minutes: f64,
}

#[derive(Serialize)]
struct RouteSummary<'a> {
    legs: Vec<RouteLeg<'a>>,
    total_price: f64,
    total_minutes: f64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = get_progressspinner("Loading travel network");
    let graph = load_travel_graph(&args.cities, &args.transports)?;
    spinner.finish_and_clear();

    let planner = TravelPlanner::new(graph);
    let route = match args.by {
        Criterion::Fastest => planner.fastest_route(&args.from, &args.to)?,
        Criterion::Cheapest => planner.cheapest_route(&args.from, &args.to)?,
        Criterion::Direct => planner.most_direct_route(&args.from, &args.to)?,
    };

    if route.is_empty() && args.from != args.to {
        println!("No route from {} to {} found", args.from, args.to);
        return Ok(());
    }

    print_route(planner.graph(), &route, args.json);
    Ok(())
}

fn print_route(graph: &TravelGraph, route: &[Transport], json: bool) {
    let legs = route
        .iter()
        .map(|leg| RouteLeg {
            from: graph.city_name(leg.source()),
            to: graph.city_name(leg.target()),
            mode: leg.mode().label(),
            price: leg.price(),
            minutes: leg.minutes(),
        })
        .collect_vec();

    let summary = RouteSummary {
        total_price: total_weight(route, Transport::price),
        total_minutes: total_weight(route, Transport::minutes),
        legs,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary).unwrap());
        return;
    }

    for leg in &summary.legs {
        println!(
            "{} -> {}, Type: {}, Cost: ${}, Duration: {} minutes",
            leg.from, leg.to, leg.mode, leg.price, leg.minutes
        );
    }
    println!(
        "Total over {} legs: ${}, {} minutes",
        summary.legs.len(),
        summary.total_price,
        summary.total_minutes
    );
}
