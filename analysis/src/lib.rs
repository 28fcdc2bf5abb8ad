//! Pure statistics over recorded games, without any I/O

pub mod report;
pub mod standings;
pub mod stats;

/// Runs the whole pipeline from raw records to the dense report
pub fn report(records: &[common::GameRecord], config: &common::TrackerConfig) -> common::Report {
    let stats = stats::compute_stats(records, config);
    let totals = stats::compute_totals(&stats, config);

    report::build_report(&stats, &totals, config)
}
