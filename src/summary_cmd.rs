//! Summary command: run the analysis and log an overview.

use anyhow::Result;
use tracing::{info, info_span, warn};

use hydrofreq_analysis::AnalysisReport;

use crate::analyze_cmd::load_and_analyze;
use crate::cli::SummaryArgs;
use crate::config;

pub fn run(args: SummaryArgs) -> Result<()> {
    let _cmd = info_span!("summary").entered();

    let mut config = config::load(args.common.config.as_deref())?;
    let report = load_and_analyze(&mut config, &args.common)?;
    log_overview(&report);
    Ok(())
}

fn log_overview(report: &AnalysisReport) {
    let r = &report.record;
    info!(
        first_year = r.first_year,
        last_year = r.last_year,
        years = r.n_years,
        present = r.n_present,
        slots = r.n_slots,
        "record"
    );

    for unit in &report.frequency {
        match unit.outcome.computed() {
            Some(fit) => {
                let quantiles: Vec<String> = fit
                    .quantiles
                    .iter()
                    .map(|q| format!("T{}={:.2}", q.return_period, q.value))
                    .collect();
                info!(
                    window = %unit.window,
                    family = %unit.family,
                    n = unit.sample_size,
                    quantiles = %quantiles.join(" "),
                    "frequency"
                );
            }
            None => {
                if let Some(f) = unit.outcome.failure() {
                    warn!(window = %unit.window, family = %unit.family, failure = %f, "frequency not computable");
                }
            }
        }
    }

    for unit in &report.spi {
        if let Some(result) = unit.outcome.computed() {
            let counts: Vec<String> = result
                .counts
                .iter()
                .filter(|(_, n)| *n > 0)
                .map(|(c, n)| format!("{c}: {n}"))
                .collect();
            info!(window = %unit.window, family = %unit.family, categories = %counts.join(", "), "spi");
        }
    }
}
