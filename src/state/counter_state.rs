//! CounterState - The Counter Widget's Value

/// Ephemeral counter value shared by the counter widget and the table caption
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterState {
    count: u64,
}

impl CounterState {
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Increase by exactly one and return the new value
    pub fn increment(&mut self) -> u64 {
        self.count = self.count.saturating_add(1);
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample::sample_rows;

    #[test]
    fn test_increment_by_one_per_click() {
        let mut counter = CounterState::default();
        assert_eq!(counter.count(), 0);
        for expected in 1..=5 {
            assert_eq!(counter.increment(), expected);
            assert_eq!(counter.count(), expected);
        }
    }

    #[test]
    fn test_table_rows_independent_of_count() {
        let mut counter = CounterState::default();
        let before = sample_rows();
        for _ in 0..3 {
            counter.increment();
        }
        assert_eq!(sample_rows(), before);
        assert_eq!(sample_rows().len(), 5);
    }
}
