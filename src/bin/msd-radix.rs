//! Console front-end for the sorter and the array record store.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use argh::FromArgs;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use msd_radix::bench;
use msd_radix::input::{format_values, load_values, parse_values, random_values, save_values};
use msd_radix::radix;
use msd_radix::store::{ArrayRecord, ArrayStore};

#[derive(FromArgs)]
/// MSD radix sorting over a configurable radix, with a flat record store of
/// original/sorted array pairs and a bulk-operation timing harness.
struct Cli {
    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Sort(SortCmd),
    Gen(GenCmd),
    Add(AddCmd),
    List(ListCmd),
    Update(UpdateCmd),
    Delete(DeleteCmd),
    Bench(BenchCmd),
}

#[derive(FromArgs)]
#[argh(subcommand, name = "sort")]
/// Sort integers given inline or read from a file.
struct SortCmd {
    /// integers to sort
    #[argh(positional)]
    values: Vec<String>,
    /// read the array from this file instead of the arguments
    #[argh(option)]
    file: Option<PathBuf>,
    /// radix used for digit partitioning
    #[argh(option, default = "10")]
    radix: u32,
    /// write the sorted array to this file
    #[argh(option)]
    save: Option<PathBuf>,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "gen")]
/// Generate a random array.
struct GenCmd {
    /// number of values
    #[argh(option, default = "10")]
    len: usize,
    /// smallest value drawn
    #[argh(option, default = "0")]
    min: i64,
    /// largest value drawn
    #[argh(option, default = "100")]
    max: i64,
    /// seed for reproducible output
    #[argh(option)]
    seed: Option<u64>,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "add")]
/// Sort an array and store the original/sorted pair.
struct AddCmd {
    /// integers to store
    #[argh(positional)]
    values: Vec<String>,
    /// store file
    #[argh(option, default = "PathBuf::from(\"arrays.jsonl\")")]
    db: PathBuf,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "list")]
/// List stored arrays, newest first.
struct ListCmd {
    /// store file
    #[argh(option, default = "PathBuf::from(\"arrays.jsonl\")")]
    db: PathBuf,
    /// print full array texts instead of truncating them
    #[argh(switch)]
    full: bool,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "update")]
/// Replace a stored array with a new one (re-sorted on the way in).
struct UpdateCmd {
    /// record id to replace
    #[argh(option)]
    id: u64,
    /// replacement integers
    #[argh(positional)]
    values: Vec<String>,
    /// store file
    #[argh(option, default = "PathBuf::from(\"arrays.jsonl\")")]
    db: PathBuf,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "delete")]
/// Delete a stored array by id.
struct DeleteCmd {
    /// record id to delete
    #[argh(option)]
    id: u64,
    /// store file
    #[argh(option, default = "PathBuf::from(\"arrays.jsonl\")")]
    db: PathBuf,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "bench")]
/// Time bulk insert, select+sort verification, and clear cycles.
struct BenchCmd {
    /// store file; omitted runs against an in-memory store
    #[argh(option)]
    db: Option<PathBuf>,
    /// records per cycle, repeatable
    #[argh(option)]
    count: Vec<usize>,
    /// records verified per cycle
    #[argh(option, default = "100")]
    sample: usize,
    /// seed for reproducible runs
    #[argh(option)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli: Cli = argh::from_env();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Sort(cmd) => {
            let values = match &cmd.file {
                Some(path) => load_values(path)
                    .with_context(|| format!("reading {}", path.display()))?,
                None => parse_values(&cmd.values.join(" "))?,
            };
            let sorted = radix::sort_with_radix(&values, cmd.radix)?;
            println!("{}", format_values(&sorted));
            if let Some(path) = &cmd.save {
                save_values(path, &sorted)
                    .with_context(|| format!("writing {}", path.display()))?;
            }
        }
        Command::Gen(cmd) => {
            let mut rng = seeded(cmd.seed);
            let values = random_values(cmd.len, cmd.min, cmd.max, &mut rng)?;
            println!("{}", format_values(&values));
        }
        Command::Add(cmd) => {
            let values = parse_values(&cmd.values.join(" "))?;
            let sorted = radix::sort(&values)?;
            let mut store = ArrayStore::open(&cmd.db)?;
            let id = store.insert(&format_values(&values), &format_values(&sorted))?;
            println!("stored as id {id}");
        }
        Command::List(cmd) => {
            let store = ArrayStore::open(&cmd.db)?;
            let records = store.records();
            if records.is_empty() {
                println!("store is empty");
            }
            for record in records {
                print_record(&record, cmd.full);
            }
        }
        Command::Update(cmd) => {
            let values = parse_values(&cmd.values.join(" "))?;
            let sorted = radix::sort(&values)?;
            let mut store = ArrayStore::open(&cmd.db)?;
            store.update(cmd.id, &format_values(&values), &format_values(&sorted))?;
            println!("updated id {}", cmd.id);
        }
        Command::Delete(cmd) => {
            let mut store = ArrayStore::open(&cmd.db)?;
            store.delete(cmd.id)?;
            println!("deleted id {}", cmd.id);
        }
        Command::Bench(cmd) => {
            let mut store = match &cmd.db {
                Some(path) => ArrayStore::open(path)?,
                None => ArrayStore::in_memory(),
            };
            let counts = if cmd.count.is_empty() {
                vec![100, 1000, 10000]
            } else {
                cmd.count.clone()
            };
            let mut rng = seeded(cmd.seed);
            for timing in bench::run_all(&mut store, &counts, cmd.sample, &mut rng)? {
                println!("{timing}");
            }
        }
    }
    Ok(())
}

fn seeded(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn print_record(record: &ArrayRecord, full: bool) {
    let original = clip(&record.original, full);
    let sorted = clip(&record.sorted, full);
    let flag = if record.is_sorted { "yes" } else { "no" };
    println!(
        "#{:<5} {:<24} {:<24} sorted: {:<3} {}",
        record.id,
        original,
        sorted,
        flag,
        record.created_at.format("%Y-%m-%d %H:%M:%S"),
    );
}

/// Long array texts are clipped for the table view, the way the interactive
/// list does it.
fn clip(text: &str, full: bool) -> String {
    const LIMIT: usize = 20;
    if full || text.len() <= LIMIT {
        text.to_owned()
    } else {
        format!("{}...", &text[..LIMIT - 3])
    }
}
