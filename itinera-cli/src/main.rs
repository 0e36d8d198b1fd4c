//! Command-line front end for the itinera routing engine
//!
//! Loads a network from `--network <csv>` or the built-in dataset and
//! exposes point-to-point routing, tour planning, a network summary
//! and a menu-driven interactive mode. "No route found" is a normal
//! answer and exits zero; bad input exits non-zero.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use itinera_core::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "itinera", version, about = "Multi-modal intercity route planner")]
struct Cli {
    /// Network CSV with header `city,node_type,node_name,lat,lon`;
    /// falls back to the built-in dataset when absent or unreadable
    #[arg(long, global = true)]
    network: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a route between two named nodes
    Route {
        /// Name of the start node
        #[arg(long)]
        from: String,
        /// Name of the destination node
        #[arg(long)]
        to: String,
        #[arg(long, default_value_t = 0.5)]
        time_weight: f64,
        #[arg(long, default_value_t = 0.5)]
        cost_weight: f64,
        /// Print the route as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Also write a self-contained Leaflet map page to this file
        #[arg(long)]
        map: Option<PathBuf>,
    },
    /// Plan an optimal closed tour over 2 to 10 named stops
    Tour {
        /// Stop name, repeatable; the first stop is the start and end
        #[arg(long = "stop", required = true)]
        stops: Vec<String>,
        #[arg(long, default_value_t = 0.5)]
        time_weight: f64,
        #[arg(long, default_value_t = 0.5)]
        cost_weight: f64,
        /// Print the route as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Also write a self-contained Leaflet map page to this file
        #[arg(long)]
        map: Option<PathBuf>,
    },
    /// Summarize the loaded network
    Network,
    /// Menu-driven planning on stdin
    Interactive,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let network = network_or_builtin(cli.network.as_deref())?;

    match cli.command {
        Command::Route {
            from,
            to,
            time_weight,
            cost_weight,
            json,
            map,
        } => {
            let start = resolve_node(&network, &from)?;
            let end = resolve_node(&network, &to)?;
            let route = shortest_path(&network, start, end, time_weight, cost_weight)?;
            emit(&network, route.as_ref(), json, map.as_deref())
        }
        Command::Tour {
            stops,
            time_weight,
            cost_weight,
            json,
            map,
        } => {
            let ids = stops
                .iter()
                .map(|name| resolve_node(&network, name))
                .collect::<Result<Vec<_>, _>>()?;
            let route = solve_tour(&network, &ids, time_weight, cost_weight)?;
            emit(&network, route.as_ref(), json, map.as_deref())
        }
        Command::Network => {
            print_network_summary(&network);
            Ok(())
        }
        Command::Interactive => interactive(&network),
    }
}

fn resolve_node(network: &TransportNetwork, name: &str) -> Result<NodeId, Error> {
    network
        .find_node_by_name(name)
        .ok_or_else(|| Error::InvalidData(format!("no node named {name:?} in the network")))
}

/// Print a computed route (or the no-route message) and optionally
/// write the map page.
fn emit(
    network: &TransportNetwork,
    route: Option<&RoutePath>,
    json: bool,
    map: Option<&Path>,
) -> Result<(), Error> {
    let Some(route) = route else {
        println!("No route found.");
        return Ok(());
    };

    if json {
        println!("{}", RouteReport::new(network, route).to_json_string());
    } else {
        print!("{}", format_route(network, route));
    }
    if let Some(file) = map {
        write_leaflet_map(network, route, file)?;
        println!("Map written to {}", file.display());
    }
    Ok(())
}

fn print_network_summary(network: &TransportNetwork) {
    println!(
        "{} cities, {} nodes",
        network.city_count(),
        network.node_count()
    );
    for city in network.cities() {
        let mut parts = Vec::new();
        for kind in [NodeKind::Landmark, NodeKind::Airport, NodeKind::HsrStation] {
            if let Some(node) = city.representative(kind).and_then(|id| network.node(id)) {
                parts.push(format!("{} {:?}", kind.label(), node.name));
            }
        }
        println!("  {}: {}", city.name, parts.join(", "));
    }
}

/// Read one trimmed line, `None` on end of input.
fn prompt(input: &mut impl BufRead, text: &str) -> io::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt_node(input: &mut impl BufRead, network: &TransportNetwork, text: &str) -> io::Result<Option<NodeId>> {
    loop {
        let Some(name) = prompt(input, text)? else {
            return Ok(None);
        };
        match network.find_node_by_name(&name) {
            Some(id) => return Ok(Some(id)),
            None => println!("Unknown node: {name}"),
        }
    }
}

fn prompt_weight(input: &mut impl BufRead, text: &str) -> io::Result<Option<f64>> {
    loop {
        let Some(line) = prompt(input, text)? else {
            return Ok(None);
        };
        match line.parse::<f64>() {
            Ok(weight) if weight.is_finite() && weight >= 0.0 => return Ok(Some(weight)),
            _ => println!("Please enter a non-negative number."),
        }
    }
}

fn interactive_route(input: &mut impl BufRead, network: &TransportNetwork) -> Result<(), Error> {
    let Some(start) = prompt_node(input, network, "Start node: ")? else {
        return Ok(());
    };
    let Some(end) = prompt_node(input, network, "Destination node: ")? else {
        return Ok(());
    };
    let Some(time_weight) = prompt_weight(input, "Time weight: ")? else {
        return Ok(());
    };
    let Some(cost_weight) = prompt_weight(input, "Cost weight: ")? else {
        return Ok(());
    };

    let route = shortest_path(network, start, end, time_weight, cost_weight)?;
    emit(network, route.as_ref(), false, None)
}

fn interactive_tour(input: &mut impl BufRead, network: &TransportNetwork) -> Result<(), Error> {
    println!("Enter up to {MAX_TOUR_STOPS} stops, first one is the start; 'done' to finish.");
    let mut stops: Vec<NodeId> = Vec::new();
    while stops.len() < MAX_TOUR_STOPS {
        let Some(name) = prompt(input, &format!("Stop {}: ", stops.len() + 1))? else {
            return Ok(());
        };
        if name == "done" {
            break;
        }
        match network.find_node_by_name(&name) {
            Some(id) => stops.push(id),
            None => println!("Unknown node: {name}"),
        }
    }
    if stops.len() < 2 {
        println!("A tour needs at least two stops.");
        return Ok(());
    }

    let Some(time_weight) = prompt_weight(input, "Time weight: ")? else {
        return Ok(());
    };
    let Some(cost_weight) = prompt_weight(input, "Cost weight: ")? else {
        return Ok(());
    };

    println!("Solving tour...");
    let route = solve_tour(network, &stops, time_weight, cost_weight)?;
    emit(network, route.as_ref(), false, None)
}

fn interactive(network: &TransportNetwork) -> Result<(), Error> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!();
        println!("========== itinera route planner ==========");
        println!("1. Plan a route");
        println!("2. Plan a tour");
        println!("3. Quit");
        let Some(choice) = prompt(&mut input, "Choice: ")? else {
            break;
        };
        match choice.as_str() {
            "1" => interactive_route(&mut input, network)?,
            "2" => interactive_tour(&mut input, network)?,
            "3" => break,
            _ => println!("Please choose 1, 2 or 3."),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn route_subcommand_parses() {
        let cli = Cli::parse_from([
            "itinera",
            "route",
            "--from",
            "Forbidden City",
            "--to",
            "The Bund",
            "--time-weight",
            "0.8",
            "--json",
        ]);
        match cli.command {
            Command::Route {
                from,
                to,
                time_weight,
                cost_weight,
                json,
                map,
            } => {
                assert_eq!(from, "Forbidden City");
                assert_eq!(to, "The Bund");
                assert_eq!(time_weight, 0.8);
                assert_eq!(cost_weight, 0.5);
                assert!(json);
                assert!(map.is_none());
            }
            other => panic!("parsed into {other:?}"),
        }
    }

    #[test]
    fn tour_subcommand_collects_repeated_stops() {
        let cli = Cli::parse_from([
            "itinera", "tour", "--stop", "A", "--stop", "B", "--stop", "C",
        ]);
        match cli.command {
            Command::Tour { stops, .. } => assert_eq!(stops, vec!["A", "B", "C"]),
            other => panic!("parsed into {other:?}"),
        }
    }
}
