//! Runtime tunables for field installation.

/// Limits and knobs for building GF(p^n) power tables.
///
/// # Example
///
/// ```
/// use gfcalc::FieldConfig;
///
/// let config = FieldConfig::default().with_max_table_size(1 << 16);
/// assert_eq!(config.max_table_size, 1 << 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FieldConfig {
    /// Largest accepted multiplicative group order `p^n - 1`.
    pub max_table_size: u64,

    /// Number of table entries built between cancellation checks.
    pub cancel_check_interval: usize,

    /// Entries per independently seeded chunk when the `parallel` feature is on.
    pub parallel_chunk: usize,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            max_table_size: 1 << 24,
            cancel_check_interval: 4096,
            parallel_chunk: 1 << 14,
        }
    }
}

impl FieldConfig {
    pub fn with_max_table_size(mut self, max_table_size: u64) -> Self {
        self.max_table_size = max_table_size;
        self
    }

    pub fn with_cancel_check_interval(mut self, interval: usize) -> Self {
        self.cancel_check_interval = interval.max(1);
        self
    }

    pub fn with_parallel_chunk(mut self, chunk: usize) -> Self {
        self.parallel_chunk = chunk.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = FieldConfig::default();
        assert_eq!(config.max_table_size, 1 << 24);
        assert_eq!(config.cancel_check_interval, 4096);
    }

    #[test]
    fn setters_clamp_to_one() {
        let config = FieldConfig::default()
            .with_cancel_check_interval(0)
            .with_parallel_chunk(0);
        assert_eq!(config.cancel_check_interval, 1);
        assert_eq!(config.parallel_chunk, 1);
    }
}
