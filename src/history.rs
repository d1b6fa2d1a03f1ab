//! Fixed-capacity ring buffer for the per-second sample history.
//!
//! New samples overwrite the oldest once the buffer is full. Readers get an
//! O(1) `(first, count)` snapshot and resolve logical positions (0 = oldest)
//! through modular indexing, so the graph never needs a copy of the data.
//! There is no concurrent writer: the buffer is pushed from the sample
//! scheduler and read during the render tick of the same loop.

/// Circular store of the last `N` samples, oldest-to-newest.
///
/// The logical sequence of valid samples is `samples[(first + i) % N]` for
/// `i in [0, count)`; `count` never exceeds `N` (the capacity check happens
/// before the write, so there is no transient over-count).
pub struct SampleHistory<const N: usize> {
    samples: [f32; N],
    first: usize,
    count: usize,
}

impl<const N: usize> SampleHistory<N> {
    // A zero-capacity history is a configuration error; reject it at build
    // time since the capacity is a compile-time constant.
    const CAPACITY_OK: () = assert!(N > 0, "SampleHistory capacity must be non-zero");

    /// Create an empty history.
    pub const fn new() -> Self {
        let () = Self::CAPACITY_OK;
        Self {
            samples: [0.0; N],
            first: 0,
            count: 0,
        }
    }

    /// Record a sample, overwriting the oldest one when full. Never fails.
    pub fn push(
        &mut self,
        value: f32,
    ) {
        let next = (self.first + self.count) % N;
        self.samples[next] = value;
        if self.count == N {
            self.first = (self.first + 1) % N;
        } else {
            self.count += 1;
        }
    }

    /// O(1) read access descriptor: `(first, count)`.
    pub const fn snapshot(&self) -> (usize, usize) { (self.first, self.count) }

    /// Sample at logical position `i` (0 = oldest). The index is reduced
    /// modulo capacity, so this is total; callers pass `i < len()`.
    pub fn get(
        &self,
        i: usize,
    ) -> f32 {
        self.samples[(self.first + i) % N]
    }

    /// The most recent sample, if any.
    pub fn newest(&self) -> Option<f32> {
        if self.count == 0 {
            None
        } else {
            Some(self.get(self.count - 1))
        }
    }

    /// Iterate samples oldest-to-newest.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ { (0..self.count).map(move |i| self.get(i)) }

    /// Number of valid samples (`0..=N`).
    pub const fn len(&self) -> usize { self.count }

    pub const fn is_empty(&self) -> bool { self.count == 0 }

    pub const fn capacity(&self) -> usize { N }
}

impl<const N: usize> Default for SampleHistory<N> {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let history: SampleHistory<8> = SampleHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.snapshot(), (0, 0));
        assert!(history.newest().is_none());
    }

    #[test]
    fn test_push_on_empty() {
        let mut history: SampleHistory<8> = SampleHistory::new();
        history.push(1.5);
        assert_eq!(history.len(), 1);
        assert_eq!(history.get(0), 1.5);
        assert_eq!(history.newest(), Some(1.5));
    }

    #[test]
    fn test_count_never_exceeds_capacity() {
        let mut history: SampleHistory<8> = SampleHistory::new();
        for i in 0..100 {
            history.push(i as f32);
            assert!(history.len() <= 8);
        }
        assert_eq!(history.len(), 8);
    }

    #[test]
    fn test_wraparound_keeps_last_n() {
        // N + 5 pushes leave exactly the last N values, oldest-first
        let mut history: SampleHistory<8> = SampleHistory::new();
        for i in 0..13 {
            history.push(i as f32);
        }
        let values: Vec<f32> = history.iter().collect();
        assert_eq!(values, vec![5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
    }

    #[test]
    fn test_retained_window_matches_pushes() {
        let mut history: SampleHistory<8> = SampleHistory::new();
        for total in 1..=20usize {
            history.push(total as f32 - 1.0);
            let expect = total.min(8);
            assert_eq!(history.len(), expect);
            // Oldest retained value is push number total - expect
            assert_eq!(history.get(0), (total - expect) as f32);
        }
    }

    #[test]
    fn test_scenario_112_capacity_200_pushes() {
        let mut history: SampleHistory<112> = SampleHistory::new();
        for i in 0..200 {
            history.push(i as f32);
        }
        let (first, count) = history.snapshot();
        assert_eq!(count, 112);
        assert_eq!(first, 88);
        assert_eq!(history.get(0), 88.0);
        assert_eq!(history.get(111), 199.0);
        for (i, value) in history.iter().enumerate() {
            assert_eq!(value, (88 + i) as f32);
        }
    }

    #[test]
    fn test_newest_index_formula() {
        let mut history: SampleHistory<4> = SampleHistory::new();
        for i in 0..11 {
            history.push(i as f32);
            let (first, count) = history.snapshot();
            assert_eq!(history.get(count - 1), i as f32);
            assert_eq!((first + count - 1) % 4, (i as usize) % 4);
        }
    }
}
