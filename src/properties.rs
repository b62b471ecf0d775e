use crate::error::Error;

/// Deployment mode of the shared counter store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// A single store instance; keys are plain strings.
    #[default]
    Single,
    /// A sharded store; keys are wrapped in a co-location tag so every entry
    /// touched by one atomic allocation routes to the same shard.
    Cluster,
}

/// How id names map onto physical records in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Many id names share one record, addressed by (record key, field name).
    #[default]
    PerField,
    /// Each id name owns an independent record under a fully qualified key.
    PerKey,
}

/// Per-id-name configuration. Immutable once the generator is built.
#[derive(Debug, Clone)]
pub struct IdProperties {
    /// How many ids one remote allocation reserves.
    pub delta: u32,
    /// Lowest id ever issued; the counter wraps back here when `max_value`
    /// would be exceeded.
    pub min_value: i64,
    /// Upper bound of the id space; see [`SegmentAllocator`] for the
    /// wraparound policy.
    ///
    /// [`SegmentAllocator`]: crate::SegmentAllocator
    pub max_value: i64,
    pub mode: Mode,
    /// Key prefix, also used by the string-presentation variant.
    pub prefix: String,
}

impl Default for IdProperties {
    fn default() -> Self {
        Self {
            delta: 1000,
            min_value: 1,
            max_value: i64::MAX,
            mode: Mode::Single,
            prefix: String::new(),
        }
    }
}

impl IdProperties {
    /// Properties with the given segment size and default bounds.
    pub fn new(delta: u32) -> Self {
        Self {
            delta,
            ..Default::default()
        }
    }

    /// Set the lowest id ever issued.
    pub fn min_value(mut self, min_value: i64) -> Self {
        self.min_value = min_value;
        self
    }

    /// Set the upper bound of the id space.
    pub fn max_value(mut self, max_value: i64) -> Self {
        self.max_value = max_value;
        self
    }

    /// Set the deployment mode.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the key/presentation prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub(crate) fn validate(&self, name: &str) -> Result<(), Error> {
        let fail = |reason| Error::InvalidProperties {
            name: name.to_string(),
            reason,
        };
        if self.delta == 0 {
            return Err(fail("delta must be at least 1"));
        }
        if self.min_value < 0 {
            return Err(fail("min_value must be non-negative"));
        }
        if self.min_value >= self.max_value {
            return Err(fail("min_value must be less than max_value"));
        }
        // A segment larger than the id space would overlap earlier segments
        // on every single allocation.
        if self.delta as i64 - 1 > self.max_value - self.min_value {
            return Err(fail("delta exceeds the span between min_value and max_value"));
        }
        Ok(())
    }
}
