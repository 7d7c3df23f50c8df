pub mod benchmarks;
pub mod commit_hash;
pub mod datasheet;
pub mod report;

use bench_reports::Feedback;

/// Print feedback items to stderr.
pub fn print_feedback(feedback: &[Feedback]) {
    for item in feedback {
        eprintln!("{item}");
    }
}
