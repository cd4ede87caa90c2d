use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod align;
mod index;
mod util;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(
    name = "bwt-rust",
    author,
    version,
    about = "Naive BWT toolkit: rotation-matrix construction, inversion and exact matching",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the sorted rotation matrix of a sequence
    Matrix {
        /// Input sequence ('$' not allowed, lowercase accepted)
        sequence: String,
    },
    /// Rebuild a sequence from its BWT structures (round-trip check)
    Invert {
        /// Input sequence
        sequence: String,
    },
    /// Map one or more query strings onto a target sequence
    Map {
        /// Target sequence
        target: String,
        /// Query strings
        #[arg(required = true)]
        queries: Vec<String>,
        #[arg(short = 't', long = "threads", default_value_t = 1)]
        threads: usize,
    },
    /// Interactive demo: choose one of three mapping scenarios
    Demo {
        /// RNG seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Matrix { sequence } => run_matrix(&sequence),
        Commands::Invert { sequence } => run_invert(&sequence),
        Commands::Map { target, queries, threads } => run_map(&target, &queries, threads),
        Commands::Demo { seed } => run_demo(seed),
    }
}

fn run_matrix(sequence: &str) -> Result<()> {
    let seq = util::dna::normalize_seq(sequence.as_bytes());
    util::dna::ensure_no_sentinel(&seq)?;
    for row in index::rotation::build_matrix(&seq) {
        println!("{} {}", String::from_utf8_lossy(&row.text), row.offset);
    }
    Ok(())
}

fn run_invert(sequence: &str) -> Result<()> {
    let seq = util::dna::normalize_seq(sequence.as_bytes());
    let rebuilt = index::fm::invert(&seq)?;
    println!("{}", String::from_utf8_lossy(&rebuilt));
    Ok(())
}

fn run_map(target: &str, queries: &[String], threads: usize) -> Result<()> {
    let target = util::dna::normalize_seq(target.as_bytes());
    let queries: Vec<Vec<u8>> = queries
        .iter()
        .map(|q| util::dna::normalize_seq(q.as_bytes()))
        .collect();

    let results = align::map_queries(&target, &queries, align::MapOpt { threads })?;

    let mut out = std::io::BufWriter::new(std::io::stdout());
    for res in &results {
        align::write_alignments(&mut out, &target, &res.query, res.offsets.as_deref())?;
    }
    Ok(())
}

fn run_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let choice = prompt("Choose what type of test would you like to perform: [1,2,3]? ")?;
    match choice.trim() {
        "1" => demo_insert(&mut rng, 1),
        "2" => demo_insert(&mut rng, 2),
        "3" => demo_absent(&mut rng),
        other => anyhow::bail!("unknown scenario '{}', expected 1, 2 or 3", other),
    }
}

/// 场景 1/2：把查询串随机插入基因组 times 次再映射，必然可命中。
fn demo_insert(rng: &mut StdRng, times: usize) -> Result<()> {
    let genome = util::dna::random_seq(rng, prompt_length()?);
    println!("{}\n", String::from_utf8_lossy(&genome));

    let query = prompt_query(&format!(
        "Please type in the query sequence to insert {} time(s) in the genome: ",
        times
    ))?;
    let genome = util::dna::insert_random(rng, &genome, &query, times);
    println!("{}\n", String::from_utf8_lossy(&genome));

    report(&genome, &query)
}

/// 场景 3：基因组保持原样，要求输入一个不在其中的查询串，映射应判负。
fn demo_absent(rng: &mut StdRng) -> Result<()> {
    let genome = util::dna::random_seq(rng, prompt_length()?);
    println!("{}\n", String::from_utf8_lossy(&genome));

    let query = prompt_query("Please type in a query sequence that is NOT present in the genome: ")?;
    println!();

    report(&genome, &query)
}

fn report(genome: &[u8], query: &[u8]) -> Result<()> {
    let offsets = index::fm::match_offsets(genome, query)?;
    let mut out = std::io::BufWriter::new(std::io::stdout());
    align::write_alignments(&mut out, genome, query, offsets.as_deref())
}

fn prompt(msg: &str) -> Result<String> {
    use std::io::Write;
    print!("{}", msg);
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line)
}

fn prompt_length() -> Result<usize> {
    let line = prompt("Please choose the genome's length: ")?;
    line.trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid genome length '{}': {}", line.trim(), e))
}

fn prompt_query(msg: &str) -> Result<Vec<u8>> {
    let line = prompt(msg)?;
    let query = util::dna::normalize_seq(line.trim().as_bytes());
    anyhow::ensure!(!query.is_empty(), "query must not be empty");
    util::dna::ensure_no_sentinel(&query)?;
    Ok(query)
}
