//! Output formatting for solver results

use crate::executor::SolverResult;
use advent_core::PuzzleInfo;
use chrono::TimeDelta;

pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    pub fn print_result(&self, result: &SolverResult) {
        match &result.answer {
            Ok(answer) if self.quiet => println!("{answer}"),
            Ok(_) => println!("{}", format_result(result)),
            Err(e) if self.quiet => eprintln!("Error: {e}"),
            Err(e) => eprintln!("{}: Error - {e}", label(result)),
        }
    }

    /// Totals after every result has been printed
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let failures = results.len() - successes;

        let total_parse_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .filter_map(|r| r.parse_duration)
            .sum();
        let total_solve_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();
        let elapsed = TimeDelta::from_std(self.start_time.elapsed()).unwrap_or(TimeDelta::MAX);

        println!();
        println!("--- Summary ---");
        println!("Parts: {successes} solved, {failures} failed");
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!("Elapsed wall-clock time: {}", format_duration(elapsed));
    }
}

/// The registered puzzles, one per line
pub fn print_list(puzzles: &[PuzzleInfo]) {
    for info in puzzles {
        println!("{}", format_info(info));
    }
    println!("{} puzzle(s)", puzzles.len());
}

fn format_info(info: &PuzzleInfo) -> String {
    format!(
        "{}/{:02} {} ({} part{})",
        info.year,
        info.day,
        info.title,
        info.parts,
        if info.parts == 1 { "" } else { "s" }
    )
}

fn label(result: &SolverResult) -> String {
    format!(
        "{}/{:02} {} part {}",
        result.year, result.day, result.title, result.part
    )
}

/// Label, answer and timings of a successful result
fn format_result(result: &SolverResult) -> String {
    let answer = result.answer.as_deref().unwrap_or_default();
    let parse = result
        .parse_duration
        .map(|d| format!("parse {}, ", format_duration(d)))
        .unwrap_or_default();
    let timing = format!("({parse}solve {})", format_duration(result.solve_duration));

    if answer.contains('\n') {
        format!("{}: {timing}\n{answer}", label(result))
    } else {
        format!("{}: {answer} {timing}", label(result))
    }
}

fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{micros}µs")
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
