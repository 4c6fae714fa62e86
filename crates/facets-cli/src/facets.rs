//! Subset census CLI
//!
//! Usage: facets [<input> <output>] [options]
//!
//! Options:
//!   --max-sets <N>     Maximum number of sets to read (default: 1000)
//!   --allow-empty      Accept blank lines as empty sets
//!   --max-subsets <N>  Refuse inputs that need more than N subset visits
//!   --verify           Cross-check the result with the reference census
//!   --help, -h         Show help
//!
//! When the paths are omitted they are asked for on standard input.
//!
//! Example: facets sets.txt counts.txt

use facets_census::DEFAULT_MAX_SETS;
use facets_census::app::census::{CensusJob, run_census};
use facets_census::domain::census::CensusOptions;
use facets_census::domain::set_store::StoreConfig;
use std::env;
use std::io::{self, BufRead, Write};
use std::time::Instant;

struct Args {
    input: Option<String>,
    output: Option<String>,
    max_sets: usize,
    allow_empty: bool,
    max_subsets: Option<u128>,
    verify: bool,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [<input> <output>] [options]", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <input>            File with one comma-separated set per line");
    eprintln!("  <output>           File receiving one count per subset size");
    eprintln!();
    eprintln!("Options:");
    eprintln!(
        "  --max-sets <N>     Maximum number of sets to read (default: {})",
        DEFAULT_MAX_SETS
    );
    eprintln!("  --allow-empty      Accept blank lines as empty sets");
    eprintln!("  --max-subsets <N>  Refuse inputs that need more than N subset visits");
    eprintln!("  --verify           Cross-check the result with the reference census");
    eprintln!("  --help, -h         Show this help message");
    eprintln!();
    eprintln!("Paths that are not given are asked for interactively.");
}

fn parse_value<T: std::str::FromStr>(
    args: &[String],
    i: &mut usize,
    name: &str,
) -> Result<T, String> {
    *i += 1;
    let raw = args
        .get(*i)
        .ok_or_else(|| format!("Missing value for {}", name))?;
    raw.parse()
        .map_err(|_| format!("Invalid value for {}: {}", name, raw))
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();

    let mut paths: Vec<String> = Vec::new();
    let mut max_sets = DEFAULT_MAX_SETS;
    let mut allow_empty = false;
    let mut max_subsets = None;
    let mut verify = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--max-sets" => max_sets = parse_value(&args, &mut i, "--max-sets")?,
            "--allow-empty" => allow_empty = true,
            "--max-subsets" => max_subsets = Some(parse_value(&args, &mut i, "--max-subsets")?),
            "--verify" => verify = true,
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                if paths.len() == 2 {
                    return Err(format!("Unexpected argument: {}", arg));
                }
                paths.push(arg.to_string());
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    let mut paths = paths.into_iter();

    Ok(Args {
        input: paths.next(),
        output: paths.next(),
        max_sets,
        allow_empty,
        max_subsets,
        verify,
    })
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn resolve_path(given: Option<String>, label: &str) -> String {
    if let Some(path) = given {
        return path;
    }

    match prompt(label) {
        Ok(path) if !path.is_empty() => path,
        Ok(_) => {
            eprintln!("Error: {} is required", label);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error reading {}: {}", label, e);
            std::process::exit(1);
        }
    }
}

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&env::args().next().unwrap_or_default());
            std::process::exit(1);
        }
    };

    let input = resolve_path(args.input, "Input file");
    let output = resolve_path(args.output, "Output file");

    let job = CensusJob::new(&input, &output)
        .with_store_config(
            StoreConfig::default()
                .with_capacity(args.max_sets)
                .with_allow_empty(args.allow_empty),
        )
        .with_verify(args.verify);

    println!("Computing census for {}...", input);
    let start = Instant::now();

    let progress_callback = |current: usize, total: usize| {
        if current.is_multiple_of(100) || current == total {
            let progress = if total > 0 {
                (current as f64 / total as f64) * 100.0
            } else {
                100.0
            };
            print!(
                "\r[Census] Progress: {:.2}% ({}/{} sets)",
                progress, current, total
            );
            io::stdout().flush().ok();
        }
    };

    let mut options = CensusOptions::default().with_progress(progress_callback);
    if let Some(budget) = args.max_subsets {
        options = options.with_max_subsets(budget);
    }

    let report = match run_census(&job, options) {
        Ok(report) => report,
        Err(e) => {
            println!();
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!();
    println!(
        "Processed {} sets ({} subsets visited) in {:.2} seconds",
        report.set_count,
        report.visited_subsets,
        start.elapsed().as_secs_f64()
    );
    println!(
        "Distinct subsets: {} (largest size {})",
        report.histogram.total(),
        report
            .histogram
            .max_size()
            .map_or_else(|| "-".to_string(), |size| size.to_string())
    );
    if args.verify {
        println!("Reference census agrees.");
    }
    println!("Wrote {} lines to {}.", report.lines_written, output);
}
