/// Evenly spaced evaluation times, produced on demand.
///
/// Yields `count` times from `start` to `end` inclusive. The last time is
/// exactly `end`.
///
/// ```
/// use splashdown::support::ode::EvaluationGrid;
///
/// let grid = EvaluationGrid::linspace(0.0, 8.0, 1_000_000);
/// assert_eq!(grid.len(), 1_000_000);
///
/// let times: Vec<f64> = EvaluationGrid::linspace(0.0, 1.0, 5).collect();
/// assert_eq!(times, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
#[derive(Debug, Clone)]
pub struct EvaluationGrid {
    start: f64,
    end: f64,
    count: usize,
    next: usize,
}

impl EvaluationGrid {
    /// Creates a grid of `count` evenly spaced times over `[start, end]`.
    ///
    /// A single-point grid yields only `start`.
    #[must_use]
    pub fn linspace(start: f64, end: f64, count: usize) -> Self {
        Self {
            start,
            end,
            count,
            next: 0,
        }
    }
}

impl Iterator for EvaluationGrid {
    type Item = f64;

    #[allow(clippy::cast_precision_loss)]
    fn next(&mut self) -> Option<f64> {
        if self.next >= self.count {
            return None;
        }

        let i = self.next;
        self.next += 1;

        if i + 1 == self.count && self.count > 1 {
            return Some(self.end);
        }

        let fraction = if self.count > 1 {
            i as f64 / (self.count - 1) as f64
        } else {
            0.0
        };
        Some(self.start + (self.end - self.start) * fraction)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for EvaluationGrid {}
