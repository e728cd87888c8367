use crate::models::PriceSample;
use std::collections::VecDeque;

/// Bounded FIFO of recent price samples with a rolling average that is
/// recomputed on every push, so the average always describes exactly the
/// samples currently held.
#[derive(Debug)]
pub struct HistoryBuffer {
    samples: VecDeque<PriceSample>,
    capacity: usize,
    average: Option<f64>,
}

impl HistoryBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity.max(1)),
            capacity: capacity.max(1),
            average: None,
        }
    }

    /// Append a sample, evicting the oldest one once the buffer is full.
    pub fn push(&mut self, sample: PriceSample) {
        self.samples.push_back(sample);
        if self.samples.len() > self.capacity {
            self.samples.pop_front();
        }

        let sum: f64 = self.samples.iter().map(|s| s.price).sum();
        self.average = Some(sum / self.samples.len() as f64);
    }

    /// Mean of the samples currently held; `None` while empty.
    pub fn average(&self) -> Option<f64> {
        self.average
    }

    pub fn latest(&self) -> Option<&PriceSample> {
        self.samples.back()
    }

    /// Current contents, oldest first.
    pub fn snapshot(&self) -> Vec<PriceSample> {
        self.samples.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_prices(buffer: &mut HistoryBuffer, prices: &[f64]) {
        for &price in prices {
            buffer.push(PriceSample::new(price));
        }
    }

    #[test]
    fn test_empty_buffer_has_no_average() {
        let buffer = HistoryBuffer::new(10);
        assert!(buffer.average().is_none());
        assert!(buffer.latest().is_none());
        assert!(buffer.snapshot().is_empty());
    }

    #[test]
    fn test_length_tracks_pushes_up_to_capacity() {
        let mut buffer = HistoryBuffer::new(10);
        for tick in 1..=15u32 {
            buffer.push(PriceSample::new(100.0 + tick as f64));
            assert_eq!(buffer.snapshot().len(), (tick as usize).min(10));
        }
    }

    #[test]
    fn test_fifo_eviction_drops_oldest() {
        let mut buffer = HistoryBuffer::new(3);
        push_prices(&mut buffer, &[1.0, 2.0, 3.0, 4.0]);

        let prices: Vec<f64> = buffer.snapshot().iter().map(|s| s.price).collect();
        assert_eq!(prices, vec![2.0, 3.0, 4.0]);
        assert_eq!(buffer.latest().unwrap().price, 4.0);
    }

    #[test]
    fn test_twelve_ticks_keeps_last_ten_and_averages_them() {
        let mut buffer = HistoryBuffer::new(10);
        let prices: Vec<f64> = (100..=111).map(f64::from).collect();
        push_prices(&mut buffer, &prices);

        let held: Vec<f64> = buffer.snapshot().iter().map(|s| s.price).collect();
        let expected: Vec<f64> = (102..=111).map(f64::from).collect();
        assert_eq!(held, expected);
        assert!((buffer.average().unwrap() - 106.5).abs() < 1e-9);
    }

    #[test]
    fn test_average_matches_snapshot_contents() {
        let mut buffer = HistoryBuffer::new(5);
        push_prices(&mut buffer, &[10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0]);

        let snapshot = buffer.snapshot();
        let mean: f64 =
            snapshot.iter().map(|s| s.price).sum::<f64>() / snapshot.len() as f64;
        assert!((buffer.average().unwrap() - mean).abs() < 1e-9);
    }

    #[test]
    fn test_single_sample_average_is_that_sample() {
        let mut buffer = HistoryBuffer::new(10);
        buffer.push(PriceSample::new(68123.45));
        assert_eq!(buffer.average(), Some(68123.45));
        assert_eq!(buffer.latest().unwrap().price, 68123.45);
    }
}
