use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, Command};
use rand::Rng;
use std::{fs, path::PathBuf};
use tsp_challenges::{
    generators::{
        generate_average_case_input, generate_best_case_input, generate_worst_case_input_with,
        WorstCaseLayout,
    },
    travelling_salesman::{Challenge, Difficulty, InputCase},
    CostModel, TspError,
};
use tsp_runtime::{load_matrix, load_route, load_settings, run_benchmark, solve};
use tsp_utils::{compress_obj, jsonify, u8s_from_str};

fn cli() -> Command {
    Command::new("tsp-runtime")
        .about("Solves and benchmarks small travelling salesman instances")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("solve")
                .about("Finds a minimum cost tour")
                .arg(
                    arg!(<ALGORITHM> "One of exact, greedy, held_karp")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<MATRIX> "Cost matrix json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the tour will be saved to this file path")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Generates a benchmark cost matrix")
                .arg(
                    arg!(<CASE> "One of best, average, worst, euclidean")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<CITIES> "Number of cities").value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--seed [SEED] "A string used in seed generation, random if omitted")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--layout [LAYOUT] "Placement of expensive edges in the worst case")
                        .default_value("cycle")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--instance [INSTANCE] "Output the whole instance, including positions and baseline")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the output will be saved to this file path")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("verify")
                .about("Computes the cost of a tour")
                .arg(
                    arg!(<MATRIX> "Cost matrix json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<ROUTE> "Route json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("benchmark")
                .about("Times every configured algorithm on generated instances")
                .arg(
                    arg!(<SETTINGS> "Settings json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the samples will be saved to this file path (default json)")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--compress [COMPRESS] "If output file is set, the samples will be compressed as zlib")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("solve", sub_m)) => solve_command(
            sub_m.get_one::<String>("ALGORITHM").unwrap().clone(),
            sub_m.get_one::<String>("MATRIX").unwrap().clone(),
            sub_m.get_one::<PathBuf>("output").cloned(),
        ),
        Some(("generate", sub_m)) => generate_command(
            sub_m.get_one::<String>("CASE").unwrap().clone(),
            *sub_m.get_one::<usize>("CITIES").unwrap(),
            sub_m.get_one::<String>("seed").cloned(),
            sub_m.get_one::<String>("layout").unwrap().clone(),
            sub_m.get_flag("instance"),
            sub_m.get_one::<PathBuf>("output").cloned(),
        ),
        Some(("verify", sub_m)) => verify_command(
            sub_m.get_one::<String>("MATRIX").unwrap().clone(),
            sub_m.get_one::<String>("ROUTE").unwrap().clone(),
        ),
        Some(("benchmark", sub_m)) => benchmark_command(
            sub_m.get_one::<String>("SETTINGS").unwrap().clone(),
            sub_m.get_one::<PathBuf>("output").cloned(),
            sub_m.get_flag("compress"),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn write_output(output_file: Option<PathBuf>, contents: &str) -> Result<()> {
    if let Some(path) = output_file {
        fs::write(&path, contents)?;
        log::info!("output written to: {:?}", path);
    } else {
        println!("{}", contents);
    }
    Ok(())
}

fn solve_command(algorithm: String, matrix: String, output_file: Option<PathBuf>) -> Result<()> {
    let matrix = load_matrix(&matrix)?;
    let output = solve(&algorithm, &matrix)?;
    if output.cost.is_none() {
        return Err(TspError::NoValidTour.into());
    }
    log::info!(
        "{} solved {} cities in {:.3} ms",
        algorithm,
        matrix.num_cities(),
        output.elapsed_ms
    );
    write_output(output_file, &jsonify(&output)?)
}

fn generate_command(
    case: String,
    num_cities: usize,
    seed: Option<String>,
    layout: String,
    instance: bool,
    output_file: Option<PathBuf>,
) -> Result<()> {
    let case: InputCase = case.parse()?;
    let layout: WorstCaseLayout = layout.parse()?;

    let contents = match (&seed, case, instance) {
        (None, InputCase::Best, false) => jsonify(&generate_best_case_input(num_cities))?,
        (None, InputCase::Average, false) => jsonify(&generate_average_case_input(num_cities))?,
        (None, InputCase::Worst, false) => {
            jsonify(&generate_worst_case_input_with(num_cities, layout))?
        }
        _ => {
            let seed = match &seed {
                Some(seed) => u8s_from_str(seed),
                None => rand::thread_rng().gen(),
            };
            let difficulty = Difficulty {
                num_cities,
                case,
                layout,
            };
            let challenge = Challenge::generate_instance(&seed, &difficulty)?;
            if instance {
                jsonify(&challenge)?
            } else {
                jsonify(&challenge.distance_matrix)?
            }
        }
    };
    write_output(output_file, &contents)
}

fn verify_command(matrix: String, route: String) -> Result<()> {
    let matrix = load_matrix(&matrix)?;
    let route = load_route(&route)?;
    let cost = matrix.tour_cost(&route)?;
    println!("{}", cost);
    Ok(())
}

fn benchmark_command(settings: String, output_file: Option<PathBuf>, compress: bool) -> Result<()> {
    let settings = load_settings(&settings)?;
    let samples = run_benchmark(&settings)?;
    log::info!("collected {} samples", samples.len());
    match output_file {
        Some(path) if compress => {
            fs::write(&path, compress_obj(&samples)?)?;
            log::info!("samples written to: {:?}", path);
            Ok(())
        }
        output_file => write_output(output_file, &jsonify(&samples)?),
    }
}
