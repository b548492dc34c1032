use clap::{
    crate_authors, crate_description, crate_name, crate_version, value_t, App, AppSettings, Arg,
    ArgMatches, SubCommand,
};
use log::info;
use qtrd::{
    brute_force::{brute_force_minimum, par_brute_force_minimum},
    checker::diagnose_solution,
    config::VerifyConfig,
    error::{Error as QtrdError, Found},
    interval_graph::{random_graph, IntervalGraph},
    render::{draw_graph, Renderer, TextRenderer},
    solver::solve,
    verifier::Algorithm,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::error::Error;

fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}

fn handle_verify(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let mut config = VerifyConfig {
        samples: value_t!(matches, "samples", usize)?,
        max_random_order: value_t!(matches, "max-order", usize)?,
        algorithm: value_t!(matches, "algorithm", Algorithm)?,
        save_name: matches.value_of("save-example").map(str::to_string),
        parallel: matches.is_present("parallel"),
        ..VerifyConfig::default()
    };
    if let Some(directory) = matches.value_of("directory") {
        config.directory = directory.into();
    }
    if matches.is_present("order") {
        config.order = Some(value_t!(matches, "order", usize)?);
    }
    if matches.is_present("seed") {
        config.seed = Some(value_t!(matches, "seed", u64)?);
    }
    let report = config.verifier().run(config.graphs())?;
    info!("{}", report);
    Ok(())
}

fn handle_solve(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let graph: IntervalGraph = matches.value_of("INTERVALS").unwrap_or_default().parse()?;
    let (solution, weight) = solve(&graph);
    println!(
        "{}",
        TextRenderer::default().render(&graph, &solution, "QTRD from algorithm")
    );
    println!("weight: {}", weight);
    diagnose_solution(&graph, &solution)?;
    if matches.is_present("check") {
        let (_, expected) = if matches.is_present("parallel") {
            par_brute_force_minimum(&graph)?
        } else {
            brute_force_minimum(&graph)?
        };
        println!("brute force weight: {}", expected);
        if expected != weight {
            return Err(QtrdError::Mismatch {
                algorithm: Algorithm::Dp,
                expected,
                found: Found::Weight(weight),
            }
            .into());
        }
    }
    Ok(())
}

fn handle_draw(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let seed = if matches.is_present("seed") {
        value_t!(matches, "seed", u64)?
    } else {
        rand::thread_rng().gen()
    };
    let order = value_t!(matches, "order", usize)?;
    let graph = random_graph(order, &mut StdRng::seed_from_u64(seed));
    info!("seed {}", seed);
    println!("{}", graph);
    println!("{}", draw_graph(&graph));
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    let matches = App::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("verify")
                .about("Compares an algorithm with the brute force on many graphs")
                .arg(
                    Arg::with_name("samples")
                        .help("Number of random graphs")
                        .short("s")
                        .long("samples")
                        .takes_value(true)
                        .default_value("1"),
                )
                .arg(
                    Arg::with_name("order")
                        .help("Checks every graph of this order instead of random ones")
                        .short("o")
                        .long("order")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("max-order")
                        .help("Largest order of a random graph")
                        .long("max-order")
                        .takes_value(true)
                        .default_value("12"),
                )
                .arg(Arg::with_name("seed").long("seed").takes_value(true))
                .arg(
                    Arg::with_name("algorithm")
                        .long("algorithm")
                        .takes_value(true)
                        .default_value("dp")
                        .possible_values(&["dp", "greedy"]),
                )
                .arg(
                    Arg::with_name("save-example")
                        .help("Saves the drawings of a counterexample under this name")
                        .long("save-example")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("directory")
                        .help("Directory of the saved counterexamples")
                        .long("directory")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("parallel")
                        .help("Runs the brute force on all cores")
                        .long("parallel")
                        .takes_value(false),
                ),
        )
        .subcommand(
            SubCommand::with_name("solve")
                .about("Solves one graph given as left:right,left:right,...")
                .arg(Arg::with_name("INTERVALS").required(true))
                .arg(
                    Arg::with_name("check")
                        .help("Compares the weight with the brute force")
                        .long("check")
                        .takes_value(false),
                )
                .arg(
                    Arg::with_name("parallel")
                        .long("parallel")
                        .takes_value(false)
                        .requires("check"),
                ),
        )
        .subcommand(
            SubCommand::with_name("draw")
                .about("Draws a random interval graph")
                .arg(
                    Arg::with_name("order")
                        .long("order")
                        .takes_value(true)
                        .default_value("5"),
                )
                .arg(Arg::with_name("seed").long("seed").takes_value(true)),
        )
        .get_matches();
    if let Some(matches) = matches.subcommand_matches("verify") {
        handle_verify(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("solve") {
        handle_solve(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("draw") {
        handle_draw(matches)?;
    }
    Ok(())
}
