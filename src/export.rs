//! CSV export of simulated samples, one row per draw.

use std::io;
use std::path::Path;

use tracing::info;

use crate::error::validation;

const HEADER: [&str; 3] = ["draw", "terminal_price", "payoff"];

/// Write aligned sample columns to any writer.
///
/// All three slices must have the same length; row `i` holds draw `i`, the
/// terminal price it produced and that price's payoff.
pub fn write_samples<W: io::Write>(
    writer: W,
    draws: &[f64],
    terminal_prices: &[f64],
    payoffs: &[f64],
) -> anyhow::Result<()> {
    validation::same_len("terminal_prices", draws.len(), terminal_prices.len())?;
    validation::same_len("payoffs", draws.len(), payoffs.len())?;

    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;
    for ((&draw, &terminal_price), &payoff) in draws.iter().zip(terminal_prices).zip(payoffs) {
        wtr.write_record(&[
            draw.to_string(),
            terminal_price.to_string(),
            payoff.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write aligned sample columns to a CSV file.
pub fn write_samples_csv(
    path: impl AsRef<Path>,
    draws: &[f64],
    terminal_prices: &[f64],
    payoffs: &[f64],
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    write_samples(file, draws, terminal_prices, payoffs)?;
    info!(path = %path.display(), rows = draws.len(), "samples exported");
    Ok(())
}
