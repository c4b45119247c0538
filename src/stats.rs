/// Summary of the visible part of a series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub last: f64,
    pub count: usize,
}

impl SeriesStats {
    /// Stats over `samples`, ignoring non-finite values. `None` when nothing
    /// finite remains.
    pub fn over(samples: &[f64]) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut count = 0;
        let mut last = None;

        for &v in samples.iter().filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
            sum += v;
            count += 1;
            last = Some(v);
        }

        last.map(|last| Self {
            min,
            max,
            mean: sum / count as f64,
            last,
            count,
        })
    }
}
