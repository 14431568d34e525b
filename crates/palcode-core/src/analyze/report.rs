// crates/palcode-core/src/analyze/report.rs

use serde::Serialize;

use crate::color::rgb::{Channel, Rgb};
use crate::index::{ColorIndex, BAND_COUNT, SLOTS_PER_BAND};

/// Signed per-channel error for one palette entry: `computed - reference`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorEntry {
    pub index: ColorIndex,
    pub computed: Rgb,
    pub reference: Rgb,
    /// `[red, green, blue]`
    pub error: [i16; 3],
}

impl ErrorEntry {
    pub fn new(index: ColorIndex, computed: Rgb, reference: Rgb) -> Self {
        let d = |ch: Channel| computed.channel(ch) as i16 - reference.channel(ch) as i16;
        Self {
            index,
            computed,
            reference,
            error: [d(Channel::Red), d(Channel::Green), d(Channel::Blue)],
        }
    }

    #[inline]
    pub fn channel(&self, ch: Channel) -> i16 {
        match ch {
            Channel::Red => self.error[0],
            Channel::Green => self.error[1],
            Channel::Blue => self.error[2],
        }
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        self.error == [0, 0, 0]
    }

    pub fn max_abs(&self) -> u16 {
        self.error.iter().map(|e| e.unsigned_abs()).max().unwrap_or(0)
    }
}

/// Aggregates over every channel value of a set of entries.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ErrorSummary {
    /// Mean absolute error over all channel values.
    pub mae: f64,
    /// Largest signed error.
    pub max_error: i16,
    /// Smallest (most negative) signed error.
    pub min_error: i16,
    /// Channel values with a non-zero error.
    pub non_zero: usize,
    /// Channel values compared (3 per entry).
    pub total: usize,
    /// `100 * (1 - non_zero / total)`
    pub percent_correct: f64,
}

impl ErrorSummary {
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a ErrorEntry>,
    {
        let mut abs_sum: u64 = 0;
        let mut max_error = i16::MIN;
        let mut min_error = i16::MAX;
        let mut non_zero = 0usize;
        let mut total = 0usize;

        for e in entries {
            for &v in &e.error {
                abs_sum += v.unsigned_abs() as u64;
                max_error = max_error.max(v);
                min_error = min_error.min(v);
                if v != 0 {
                    non_zero += 1;
                }
                total += 1;
            }
        }

        if total == 0 {
            return Self {
                mae: 0.0,
                max_error: 0,
                min_error: 0,
                non_zero: 0,
                total: 0,
                percent_correct: 100.0,
            };
        }

        Self {
            mae: abs_sum as f64 / total as f64,
            max_error,
            min_error,
            non_zero,
            total,
            percent_correct: 100.0 * (1.0 - non_zero as f64 / total as f64),
        }
    }

    /// Largest absolute error in either direction.
    pub fn max_abs(&self) -> u16 {
        self.max_error.unsigned_abs().max(self.min_error.unsigned_abs())
    }
}

/// Summary restricted to one band (19 entries, 57 channel values).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BandSummary {
    pub band: usize,
    #[serde(flatten)]
    pub summary: ErrorSummary,
}

/// Full result of comparing an encoder against a reference palette.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ErrorReport {
    pub entries: Vec<ErrorEntry>,
    pub summary: ErrorSummary,
}

impl ErrorReport {
    pub fn from_entries(entries: Vec<ErrorEntry>) -> Self {
        let summary = ErrorSummary::from_entries(&entries);
        Self { entries, summary }
    }

    /// One channel's signed errors in index order.
    pub fn channel_series(&self, ch: Channel) -> Vec<i16> {
        self.entries.iter().map(|e| e.channel(ch)).collect()
    }

    pub fn red(&self) -> Vec<i16> {
        self.channel_series(Channel::Red)
    }

    pub fn green(&self) -> Vec<i16> {
        self.channel_series(Channel::Green)
    }

    pub fn blue(&self) -> Vec<i16> {
        self.channel_series(Channel::Blue)
    }

    pub fn band_summaries(&self) -> Vec<BandSummary> {
        (0..BAND_COUNT)
            .map(|band| {
                let rows = self
                    .entries
                    .iter()
                    .skip(band * SLOTS_PER_BAND)
                    .take(SLOTS_PER_BAND);
                BandSummary {
                    band,
                    summary: ErrorSummary::from_entries(rows),
                }
            })
            .collect()
    }

    /// Up to `n` inexact entries, largest absolute error first, ties by index.
    pub fn worst(&self, n: usize) -> Vec<&ErrorEntry> {
        let mut rows: Vec<&ErrorEntry> = self.entries.iter().filter(|e| !e.is_exact()).collect();
        rows.sort_by(|a, b| b.max_abs().cmp(&a.max_abs()).then_with(|| a.index.cmp(&b.index)));
        rows.truncate(n);
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(i: usize, computed: Rgb, reference: Rgb) -> ErrorEntry {
        ErrorEntry::new(ColorIndex::new(i).unwrap(), computed, reference)
    }

    #[test]
    fn entry_error_is_computed_minus_reference() {
        let e = entry(40, Rgb::new(191, 159, 95), Rgb::new(191, 175, 143));
        assert_eq!(e.error, [0, -16, -48]);
        assert_eq!(e.channel(Channel::Blue), -48);
        assert_eq!(e.max_abs(), 48);
        assert!(!e.is_exact());
    }

    #[test]
    fn summary_over_mixed_entries() {
        let rows = vec![
            entry(0, Rgb::gray(10), Rgb::gray(10)),
            entry(1, Rgb::new(12, 10, 10), Rgb::new(10, 10, 13)),
        ];
        let s = ErrorSummary::from_entries(&rows);
        assert_eq!(s.total, 6);
        assert_eq!(s.non_zero, 2);
        assert_eq!(s.max_error, 2);
        assert_eq!(s.min_error, -3);
        assert_eq!(s.max_abs(), 3);
        assert!((s.mae - 5.0 / 6.0).abs() < 1e-12);
        assert!((s.percent_correct - 100.0 * 4.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn empty_summary_is_clean() {
        let s = ErrorSummary::from_entries(&Vec::<ErrorEntry>::new());
        assert_eq!(s.total, 0);
        assert_eq!(s.percent_correct, 100.0);
    }

    #[test]
    fn worst_orders_by_magnitude_then_index() {
        let report = ErrorReport::from_entries(vec![
            entry(0, Rgb::gray(1), Rgb::gray(0)),
            entry(1, Rgb::gray(0), Rgb::gray(0)),
            entry(2, Rgb::gray(0), Rgb::gray(5)),
            entry(3, Rgb::gray(2), Rgb::gray(1)),
        ]);
        let w: Vec<usize> = report.worst(10).iter().map(|e| e.index.get()).collect();
        assert_eq!(w, vec![2, 0, 3]);
        assert_eq!(report.worst(1).len(), 1);
    }
}
