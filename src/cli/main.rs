#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use clap::Parser;

use otter_acts::{
    context::Context,
    input::Problem,
    types::err,
};

mod config;
#[cfg(feature = "log")]
mod logging;

use config::{config_from_args, Args};

fn main() {
    let args = Args::parse();

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Args>();
        return;
    }

    let level = log::LevelFilter::from(args.log_level);
    #[cfg(feature = "log")]
    start_logging(level);
    log::set_max_level(level);

    let config = match config_from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            println!("c Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let Some(path) = &args.file else {
        println!("c A problem file is required");
        std::process::exit(1);
    };

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            println!("c Unable to read {}: {e}", path.display());
            std::process::exit(1);
        }
    };

    let batch = match Problem::from_json(&contents)
        .map_err(err::ErrorKind::from)
        .and_then(Problem::into_batch)
    {
        Ok(batch) => batch,
        Err(e) => {
            println!("e {e}");
            std::process::exit(2);
        }
    };

    let horizon = args.horizon.unwrap_or(batch.horizon);
    println!(
        "c {} fluent(s), {} statement(s), {} query(s), to horizon {horizon}",
        batch.scenario.fluents().len(),
        batch.scenario.statements().len(),
        batch.queries.len()
    );

    let the_context = Context::from_config(config, batch.scenario);

    match the_context.answer(&batch.queries, horizon) {
        Ok(answers) => {
            for (index, (query, answer)) in batch.queries.iter().zip(answers).enumerate() {
                println!("c q{} {query}", index + 1);
                println!("q{} {answer}", index + 1);
            }
        }
        Err(e) => {
            println!("e {e}");
            std::process::exit(2);
        }
    }
}

#[cfg(feature = "log")]
fn start_logging(level: log::LevelFilter) {
    if let Err(e) = logging::init(level) {
        println!("c Logging is unavailable: {e}");
    }
}
