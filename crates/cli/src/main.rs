//! Textbook OS-algorithm simulator CLI.
//!
//! This binary provides a single entry point for all simulation kinds. It performs:
//! 1. **Generic dispatch:** Run a complete JSON request file (`oslab run`).
//! 2. **Direct runs:** One subcommand per simulation kind with inline arguments.
//! 3. **Reporting:** Plain-text trace tables and metrics, or raw JSON with `--json`.

use clap::{Parser, Subcommand, ValueEnum};
use std::{fs, process};

use oslab_core::{Request, bankers, cpu, disk, dispatch, memory};

mod report;

#[derive(Parser, Debug)]
#[command(
    name = "oslab",
    author,
    version,
    about = "Deterministic simulator for textbook OS resource-allocation algorithms",
    long_about = "Compute the exact step-by-step decisions a textbook algorithm makes: CPU \
                  dispatch schedules, page-replacement frame timelines, disk head paths, and \
                  Banker's safety verdicts.\n\nExamples:\n  \
                  oslab cpu -a srtf -f processes.json\n  \
                  oslab memory -f 3 -r 7,0,1,2,0,3,0,4,2,3,0,3,2\n  \
                  oslab disk -a sstf --head 53 --max-cylinder 199 -r 98,183,37,122,14,124,65,67\n  \
                  oslab run request.json --json"
)]
struct Cli {
    /// Emit the raw JSON response instead of a formatted report.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Dispatch a complete JSON request file (tagged with "simulation").
    Run {
        /// Request file path.
        file: String,
    },

    /// Schedule a CPU workload from a JSON process file.
    Cpu {
        /// Dispatch policy.
        #[arg(short, long, value_enum)]
        algorithm: CpuAlg,

        /// Time quantum (Round Robin only).
        #[arg(short, long)]
        quantum: Option<u32>,

        /// JSON file holding an array of processes.
        #[arg(short, long)]
        file: String,
    },

    /// Run a reference string through FIFO and LRU side by side.
    Memory {
        /// Number of page frames.
        #[arg(short, long)]
        frames: usize,

        /// Comma-separated page reference string.
        #[arg(short, long, value_delimiter = ',')]
        references: Vec<u32>,
    },

    /// Order a disk request queue into a head-movement path.
    Disk {
        /// Head-movement policy.
        #[arg(short, long, value_enum)]
        algorithm: DiskAlg,

        /// Starting head position.
        #[arg(long)]
        head: u32,

        /// Highest addressable cylinder.
        #[arg(long)]
        max_cylinder: u32,

        /// Comma-separated cylinder requests in queue order.
        #[arg(short, long, value_delimiter = ',')]
        requests: Vec<u32>,
    },

    /// Check a resource-allocation snapshot for safety.
    Deadlock {
        /// JSON file holding available/max/allocation.
        #[arg(short, long)]
        file: String,
    },
}

/// CPU dispatch policies exposed on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CpuAlg {
    Fcfs,
    Sjf,
    Srtf,
    Priority,
    Rr,
}

impl From<CpuAlg> for cpu::CpuAlgorithm {
    fn from(alg: CpuAlg) -> Self {
        match alg {
            CpuAlg::Fcfs => Self::Fcfs,
            CpuAlg::Sjf => Self::Sjf,
            CpuAlg::Srtf => Self::Srtf,
            CpuAlg::Priority => Self::Priority,
            CpuAlg::Rr => Self::RoundRobin,
        }
    }
}

/// Disk head-movement policies exposed on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum DiskAlg {
    Fcfs,
    Sstf,
    Scan,
    Cscan,
}

impl From<DiskAlg> for disk::DiskAlgorithm {
    fn from(alg: DiskAlg) -> Self {
        match alg {
            DiskAlg::Fcfs => Self::Fcfs,
            DiskAlg::Sstf => Self::Sstf,
            DiskAlg::Scan => Self::Scan,
            DiskAlg::Cscan => Self::CScan,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run { file } => cmd_run(&file, cli.json),
        Commands::Cpu {
            algorithm,
            quantum,
            file,
        } => cmd_cpu(algorithm, quantum, &file, cli.json),
        Commands::Memory { frames, references } => cmd_memory(frames, &references, cli.json),
        Commands::Disk {
            algorithm,
            head,
            max_cylinder,
            requests,
        } => cmd_disk(algorithm, head, max_cylinder, &requests, cli.json),
        Commands::Deadlock { file } => cmd_deadlock(&file, cli.json),
    }
}

fn cmd_run(file: &str, json: bool) {
    let request: Request = load_json(file);
    let response = dispatch(&request).unwrap_or_else(|e| fail(&e));
    if json {
        print_json(&response);
    } else {
        report::print_response(&response);
    }
}

fn cmd_cpu(algorithm: CpuAlg, quantum: Option<u32>, file: &str, json: bool) {
    let processes: Vec<cpu::Process> = load_json(file);
    let request = cpu::CpuRequest {
        algorithm: algorithm.into(),
        quantum,
        processes,
    };
    let response = cpu::simulate(&request).unwrap_or_else(|e| fail(&e));
    if json {
        print_json(&response);
    } else {
        report::print_cpu(&format!("{algorithm:?}").to_uppercase(), &response);
    }
}

fn cmd_memory(frames: usize, references: &[u32], json: bool) {
    let comparison = memory::compare(frames, references).unwrap_or_else(|e| fail(&e));
    if json {
        print_json(&comparison);
    } else {
        report::print_memory(&comparison);
    }
}

fn cmd_disk(algorithm: DiskAlg, head: u32, max_cylinder: u32, requests: &[u32], json: bool) {
    let request = disk::DiskRequest {
        algorithm: algorithm.into(),
        requests: requests.to_vec(),
        head,
        max_cylinder,
    };
    let response = disk::simulate(&request).unwrap_or_else(|e| fail(&e));
    if json {
        print_json(&response);
    } else {
        report::print_disk(&format!("{algorithm:?}").to_uppercase(), &response);
    }
}

fn cmd_deadlock(file: &str, json: bool) {
    let request: bankers::BankersRequest = load_json(file);
    let response = bankers::check(&request).unwrap_or_else(|e| fail(&e));
    if json {
        print_json(&response);
    } else {
        report::print_deadlock(&response);
    }
}

/// Reads and deserializes a JSON input file, exiting with a message on failure.
fn load_json<T: serde::de::DeserializeOwned>(path: &str) -> T {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {path}: {e}");
        process::exit(1);
    });
    serde_json::from_str(&text).unwrap_or_else(|e| {
        eprintln!("Error parsing {path}: {e}");
        process::exit(1);
    })
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => fail(&e),
    }
}

fn fail(error: &dyn std::fmt::Display) -> ! {
    eprintln!("Error: {error}");
    process::exit(1);
}
