//! Sliding-window mean over a stream of values

use std::collections::VecDeque;

use crate::error::{Result, TidbitsError};

pub const DEFAULT_WINDOW: usize = 3;

/// Iterator yielding the mean of each full window of `window` consecutive
/// values. Produces `len - window + 1` items, or none for shorter input.
#[derive(Debug, Clone)]
pub struct MovingAverage<I> {
    inner: I,
    window: usize,
    buffer: VecDeque<f64>,
    sum: f64,
}

/// Wrap `values` in a [`MovingAverage`] over `window` elements.
pub fn moving_average<I>(values: I, window: usize) -> Result<MovingAverage<I::IntoIter>>
where
    I: IntoIterator<Item = f64>,
{
    if window == 0 {
        return Err(TidbitsError::InvalidWindow);
    }
    Ok(MovingAverage {
        inner: values.into_iter(),
        window,
        buffer: VecDeque::with_capacity(window),
        sum: 0.0,
    })
}

impl<I: Iterator<Item = f64>> Iterator for MovingAverage<I> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        while self.buffer.len() < self.window - 1 {
            let value = self.inner.next()?;
            self.sum += value;
            self.buffer.push_back(value);
        }

        let value = self.inner.next()?;
        self.sum += value;
        self.buffer.push_back(value);
        let mean = self.sum / self.window as f64;

        if let Some(oldest) = self.buffer.pop_front() {
            self.sum -= oldest;
        }
        Some(mean)
    }
}
