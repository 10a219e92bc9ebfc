//! Equal-width histograms of simulated samples and their SVG rendering.

use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::error::{validation, PricingError, PricingResult};

/// One histogram bucket covering `[lower, upper)`; the last bucket is closed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width histogram over the sample range.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Histogram {
    bins: Vec<Bin>,
    total: usize,
}

impl Histogram {
    /// Bin `values` into `bins` buckets spanning `[min, max]`.
    ///
    /// When every sample is identical the range is widened on each side by half
    /// the value's magnitude (at least 0.5), so huge constants still get a
    /// non-degenerate range.
    pub fn from_samples(values: &[f64], bins: usize) -> PricingResult<Self> {
        validation::non_empty(values)?;
        if bins == 0 {
            return Err(PricingError::InvalidConfig(
                "histogram needs at least one bin".to_string(),
            ));
        }
        if let Some(&bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(PricingError::InvalidParameter {
                name: "sample",
                value: bad,
                constraint: "histogram samples must be finite",
            });
        }

        let (mut lo, mut hi) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if hi - lo <= 0.0 {
            let pad = 0.5 * lo.abs().max(1.0);
            lo -= pad;
            hi += pad;
        }

        let width = (hi - lo) / bins as f64;
        let mut counts = vec![0usize; bins];
        for &v in values {
            let idx = (((v - lo) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        let buckets = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| Bin {
                lower: lo + width * i as f64,
                upper: if i + 1 == bins { hi } else { lo + width * (i + 1) as f64 },
                count,
            })
            .collect();

        Ok(Self {
            bins: buckets,
            total: values.len(),
        })
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Number of samples binned
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    /// Lower edge of the first bin and upper edge of the last
    pub fn range(&self) -> (f64, f64) {
        match (self.bins.first(), self.bins.last()) {
            (Some(first), Some(last)) => (first.lower, last.upper),
            _ => (0.0, 0.0),
        }
    }
}

/// Render a histogram as an SVG bar chart.
pub fn render_svg(
    path: impl AsRef<Path>,
    histogram: &Histogram,
    title: &str,
    x_label: &str,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let (x_min, x_max) = histogram.range();
    let y_max = (histogram.max_count() as f64 * 1.05).max(1.0);

    let root = SVGBackend::new(path, (1280, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 30))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc("Frequency")
        .draw()?;

    chart.draw_series(histogram.bins().iter().map(|bin| {
        Rectangle::new(
            [(bin.lower, 0.0), (bin.upper, bin.count as f64)],
            BLUE.mix(0.6).filled(),
        )
    }))?;

    root.present()?;
    info!(path = %path.display(), bins = histogram.bins().len(), "histogram written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_sum_to_total() {
        let values: Vec<f64> = (0..1000).map(|i| (i as f64 * 0.37).sin() * 10.0).collect();
        let hist = Histogram::from_samples(&values, 17).unwrap();
        assert_eq!(hist.bins().len(), 17);
        assert_eq!(hist.bins().iter().map(|b| b.count).sum::<usize>(), 1000);
        assert_eq!(hist.total(), 1000);
    }

    #[test]
    fn test_max_value_lands_in_last_bin() {
        let hist = Histogram::from_samples(&[0.0, 1.0, 2.0, 3.0, 4.0], 4).unwrap();
        let counts: Vec<usize> = hist.bins().iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![1, 1, 1, 2]);
        assert_eq!(hist.range(), (0.0, 4.0));
    }

    #[test]
    fn test_constant_samples() {
        let hist = Histogram::from_samples(&[5.0; 10], 3).unwrap();
        assert_eq!(hist.range(), (2.5, 7.5));
        assert_eq!(hist.bins()[1].count, 10);

        let hist = Histogram::from_samples(&[0.0; 4], 2).unwrap();
        assert_eq!(hist.range(), (-0.5, 0.5));
    }

    #[test]
    fn test_huge_constant_samples_keep_a_range() {
        let hist = Histogram::from_samples(&[1e17; 8], 4).unwrap();
        let (lo, hi) = hist.range();
        assert!(hi > lo, "range ({lo}, {hi})");
        assert!(hist.bins().iter().all(|b| b.upper > b.lower));
        assert_eq!(hist.bins().iter().map(|b| b.count).sum::<usize>(), 8);
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            Histogram::from_samples(&[], 10),
            Err(PricingError::EmptySampleSet)
        );
        assert!(Histogram::from_samples(&[1.0], 0).is_err());
        assert!(Histogram::from_samples(&[1.0, f64::NAN], 2).is_err());
    }
}
