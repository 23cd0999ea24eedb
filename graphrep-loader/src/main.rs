use clap::{App, Arg};
use graphrep::graph::Adjacency;
use graphrep_loader::{save_snapshot, GraphLoader, LoadError, LoadedGraph, Representation};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = App::new("graphrep-loader")
        .about("Loads a `from:to:weight` graph file into one of the graph representations")
        .arg(Arg::with_name("graph").required(true))
        .arg(
            Arg::with_name("repr")
                .long("repr")
                .takes_value(true)
                .default_value("list")
                .help("adjacency-list, adjacency-matrix or edge-list"),
        )
        .arg(
            Arg::with_name("strict")
                .long("strict")
                .help("Fail on edges the graph rejects"),
        )
        .arg(
            Arg::with_name("snapshot")
                .long("snapshot")
                .takes_value(true)
                .help("Write the loaded graph as a bincode snapshot"),
        )
        .arg(Arg::with_name("verbose").short("v").help("Log rejected edges"))
        .get_matches();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if matches.is_present("verbose") {
            "debug"
        } else {
            "info"
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if let Err(err) = run(&matches) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run(matches: &clap::ArgMatches) -> Result<(), LoadError> {
    let representation: Representation = matches.value_of("repr").unwrap_or("list").parse()?;
    let graph_path = matches.value_of("graph").unwrap_or_default();

    let load_timer = Instant::now();

    let graph = GraphLoader::new()
        .strict(matches.is_present("strict"))
        .read_file_into(LoadedGraph::new(representation), graph_path)?;

    println!(
        "Loaded {} graph with {} nodes and {} edges in {:.2} seconds",
        graph.representation(),
        graph.number_of_nodes(),
        graph.number_of_edges(),
        load_timer.elapsed().as_secs_f32()
    );

    if let Some(snapshot_path) = matches.value_of("snapshot") {
        save_snapshot(&graph, snapshot_path)?;
        println!("Snapshot written to {}", snapshot_path);
    }
    Ok(())
}
