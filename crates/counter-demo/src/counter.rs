/// A counter that remembers every value it has taken
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    value: i64,
    history: Vec<i64>,
}

impl Default for Counter {
    fn default() -> Self {
        Self {
            value: 0,
            history: vec![0],
        }
    }
}

impl Counter {
    #[inline]
    pub fn value(&self) -> i64 {
        self.value
    }

    #[inline]
    pub fn history(&self) -> &[i64] {
        &self.history
    }

    pub fn increment(&mut self) {
        self.set(self.value.saturating_add(1));
    }

    pub fn decrement(&mut self) {
        self.set(self.value.saturating_sub(1));
    }

    pub fn reset(&mut self) {
        self.set(0);
    }

    /// Every assignment is recorded, even when the value does not change
    fn set(&mut self, value: i64) {
        self.value = value;
        self.history.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let counter = Counter::default();
        assert_eq!(counter.value(), 0);
        assert_eq!(counter.history(), &[0]);
    }

    #[test]
    fn every_change_is_recorded() {
        let mut counter = Counter::default();
        counter.increment();
        counter.increment();
        counter.decrement();
        counter.reset();
        counter.reset();
        counter.decrement();
        assert_eq!(counter.value(), -1);
        assert_eq!(counter.history(), &[0, 1, 2, 1, 0, 0, -1]);
    }
}
