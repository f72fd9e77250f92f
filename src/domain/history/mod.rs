//! History domain — aggregated portfolio value over time.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single `(timestamp, total portfolio value)` sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    /// Unix timestamp in milliseconds.
    pub timestamp: i64,
    /// Total portfolio value in USD.
    pub value: f64,
}

/// Sum per-asset price series into one portfolio value series.
///
/// Each input is `(amount, series)` where `series` is the asset's
/// `(ms_epoch, price)` samples. For every sample, `amount * price` is
/// accumulated under that exact timestamp key; the result is emitted
/// ascending with one point per timestamp.
///
/// The join is strict equality on timestamps — no interpolation, no
/// nearest-sample matching. Assets sampled on offset grids therefore land
/// in separate output points, each reflecting only the assets that had a
/// sample at that instant. Requesting daily granularity for long windows
/// keeps upstream grids aligned in practice.
pub fn aggregate_series<I>(series_by_holding: I) -> Vec<HistoryPoint>
where
    I: IntoIterator<Item = (f64, Vec<(i64, f64)>)>,
{
    let mut total_by_ts: BTreeMap<i64, f64> = BTreeMap::new();

    for (amount, series) in series_by_holding {
        for (ts, price) in series {
            *total_by_ts.entry(ts).or_insert(0.0) += amount * price;
        }
    }

    total_by_ts
        .into_iter()
        .map(|(timestamp, value)| HistoryPoint { timestamp, value })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_assets_partial_overlap() {
        // b has no sample at t=200, so that point reflects a alone.
        let points = aggregate_series(vec![
            (1.0, vec![(100, 10.0), (200, 20.0)]),
            (1.0, vec![(100, 5.0)]),
        ]);
        assert_eq!(
            points,
            vec![
                HistoryPoint {
                    timestamp: 100,
                    value: 15.0
                },
                HistoryPoint {
                    timestamp: 200,
                    value: 20.0
                },
            ]
        );
    }

    #[test]
    fn test_amount_scales_prices() {
        let points = aggregate_series(vec![(2.5, vec![(100, 10.0)])]);
        assert_eq!(points[0].value, 25.0);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let points = aggregate_series(Vec::new());
        assert!(points.is_empty());
    }

    #[test]
    fn test_failed_series_contributes_nothing() {
        let with_empty = aggregate_series(vec![
            (1.0, vec![(100, 10.0), (200, 20.0)]),
            (999.0, Vec::new()),
        ]);
        let without = aggregate_series(vec![(1.0, vec![(100, 10.0), (200, 20.0)])]);
        assert_eq!(with_empty, without);
    }

    #[test]
    fn test_output_strictly_ascending_unique() {
        let points = aggregate_series(vec![
            (1.0, vec![(300, 1.0), (100, 2.0), (200, 3.0)]),
            (1.0, vec![(200, 4.0), (100, 5.0)]),
        ]);
        assert_eq!(points.len(), 3);
        for pair in points.windows(2) {
            assert!(pair[0].timestamp < pair[1].timestamp);
        }
    }

    #[test]
    fn test_aggregation_merges_commutatively() {
        // Aggregating {a, b} and {c} separately, then merging point-wise,
        // equals aggregating {a, b, c} directly.
        let a = (1.0, vec![(100, 10.0), (200, 20.0)]);
        let b = (2.0, vec![(100, 5.0)]);
        let c = (3.0, vec![(200, 7.0), (300, 1.0)]);

        let all = aggregate_series(vec![a.clone(), b.clone(), c.clone()]);
        let ab = aggregate_series(vec![a, b]);
        let just_c = aggregate_series(vec![c]);

        let merged = aggregate_series(vec![
            (1.0, ab.iter().map(|p| (p.timestamp, p.value)).collect()),
            (1.0, just_c.iter().map(|p| (p.timestamp, p.value)).collect()),
        ]);
        assert_eq!(merged, all);
    }
}
