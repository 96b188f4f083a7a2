/// Progress of a row-producing pass against a known total.
/// The row iterator updates it on every pull; the host reads snapshots
/// between batches to redraw its progress indicator.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Progress {
    /// Rows produced so far
    pub produced: u64,
    /// Known or estimated total (entry count, bin count, or point count)
    pub total: u64,
}

impl Progress {
    /// Creates a fresh progress counter for the given total.
    pub fn new(total: u64) -> Self {
        Progress { produced: 0, total }
    }

    /// Completion ratio in `0.0..=1.0`; a zero total reads as complete.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.produced as f64 / self.total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::sheet::progress::Progress;

    #[test]
    fn progress_ratio() {
        let mut progress = Progress::new(4);
        assert_eq!(progress.ratio(), 0.0);
        progress.produced = 2;
        assert_eq!(progress.ratio(), 0.5);
        progress.produced = 4;
        assert_eq!(progress.ratio(), 1.0);
    }

    #[test]
    fn progress_empty_total() {
        assert_eq!(Progress::new(0).ratio(), 1.0);
    }
}
