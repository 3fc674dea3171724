//! Plain-text report formatting.
//!
//! Renders simulation results as banner-delimited sections with aligned
//! key/value rows: a schedule table with per-process metrics, a frame timeline,
//! a head-movement path, and a safety verdict.

use oslab_core::Response;
use oslab_core::bankers::BankersResponse;
use oslab_core::cpu::CpuResponse;
use oslab_core::disk::DiskResponse;
use oslab_core::memory::{MemoryComparison, PolicyRun};

const RULE: &str = "==========================================================";
const THIN: &str = "----------------------------------------------------------";

/// Prints whichever report a dispatch result calls for.
pub fn print_response(response: &Response) {
    match response {
        Response::Cpu(r) => print_cpu("CPU", r),
        Response::Memory(r) => print_policy_run("PAGE REPLACEMENT", r),
        Response::Disk(r) => print_disk("DISK", r),
        Response::Deadlock(r) => print_deadlock(r),
    }
}

/// Prints a CPU schedule with per-process metrics and aggregates.
pub fn print_cpu(label: &str, response: &CpuResponse) {
    println!("\n{RULE}");
    println!("{label} SCHEDULE");
    println!("{RULE}");
    for seg in &response.schedule {
        println!("  t={:<4} .. {:<6} {}", seg.start, seg.end, seg.pid);
    }
    println!("{THIN}");
    println!("PER-PROCESS METRICS");
    println!(
        "  {:<8} {:>7} {:>5} {:>5} {:>5} {:>6} {:>7} {:>10} {:>8}",
        "pid", "arrival", "burst", "prio", "start", "compl", "waiting", "turnaround", "response"
    );
    for m in &response.metrics {
        let start = m
            .start
            .map_or_else(|| "-".to_string(), |s| s.to_string());
        println!(
            "  {:<8} {:>7} {:>5} {:>5} {:>5} {:>6} {:>7} {:>10} {:>8}",
            m.pid, m.arrival, m.burst, m.priority, start, m.completion, m.waiting, m.turnaround,
            m.response
        );
    }
    println!("{THIN}");
    println!("  utilization            {:.2}%", response.utilization);
    println!("  throughput             {:.4}", response.throughput);
    println!("  avg.waiting            {:.2}", response.avg_waiting);
    println!("  avg.turnaround         {:.2}", response.avg_turnaround);
    println!("  avg.response           {:.2}", response.avg_response);
}

/// Prints the FIFO and LRU runs side by side.
pub fn print_memory(comparison: &MemoryComparison) {
    print_policy_run("FIFO", &comparison.fifo);
    print_policy_run("LRU", &comparison.lru);
}

/// Prints one page replacement timeline.
pub fn print_policy_run(label: &str, run: &PolicyRun) {
    println!("\n{RULE}");
    println!("{label} FRAME TIMELINE");
    println!("{RULE}");
    for step in &run.timeline {
        let frames: Vec<String> = step
            .frames
            .iter()
            .map(|f| f.map_or_else(|| "-".to_string(), |p| p.to_string()))
            .collect();
        let mark = if step.hit { "hit" } else { "FAULT" };
        println!(
            "  step {:<3} page {:<4} [ {} ]  {}",
            step.step,
            step.page,
            frames.join("  "),
            mark
        );
    }
    println!("{THIN}");
    println!("  faults                 {}", run.faults);
    println!("  hit.ratio              {:.2}%", run.hit_ratio * 100.0);
}

/// Prints a head-movement path and its seek total.
pub fn print_disk(label: &str, response: &DiskResponse) {
    println!("\n{RULE}");
    println!("{label} HEAD PATH");
    println!("{RULE}");
    let path: Vec<String> = response.path.iter().map(ToString::to_string).collect();
    println!("  {}", path.join(" -> "));
    println!("{THIN}");
    println!("  total.seek             {}", response.total_seek);
}

/// Prints a safety verdict, sequence, and need matrix.
pub fn print_deadlock(response: &BankersResponse) {
    println!("\n{RULE}");
    println!("BANKER'S SAFETY CHECK");
    println!("{RULE}");
    println!("NEED (max - allocation)");
    for (i, row) in response.need.iter().enumerate() {
        let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
        println!("  P{:<3} [ {} ]", i, cells.join("  "));
    }
    println!("{THIN}");
    if response.safe {
        let order: Vec<String> = response.sequence.iter().map(|i| format!("P{i}")).collect();
        println!("  verdict                SAFE");
        println!("  sequence               {}", order.join(" -> "));
    } else {
        println!("  verdict                UNSAFE");
        println!("  sequence               (none)");
    }
}
