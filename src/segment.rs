use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use crate::allocator::SegmentAllocator;
use crate::error::Error;
use crate::key::ResolvedKey;
use crate::properties::IdProperties;

/// A contiguous range reserved from the shared counter and dispensed locally.
/// Ids handed out are `(lower, upper]`; the cursor holds the last value
/// taken and starts at `lower`.
#[derive(Debug)]
struct Segment {
    upper: i64,
    cursor: AtomicI64,
}

impl Segment {
    fn new(lower: i64, upper: i64) -> Self {
        Self {
            upper,
            cursor: AtomicI64::new(lower),
        }
    }

    /// Claim the next id, or `None` once the range is exhausted. Lock-free;
    /// concurrent claims past `upper` overshoot the cursor harmlessly and
    /// fall through to the refill path.
    fn take(&self) -> Option<i64> {
        let prev = self.cursor.fetch_add(1, Ordering::Relaxed);
        (prev < self.upper).then(|| prev + 1)
    }
}

/// Per-id-name segment cache.
///
/// The live segment sits behind an `RwLock`: dispensing takes the read side
/// (uncontended in steady state) and a single atomic increment, refill takes
/// the write side. Unrelated id names hold unrelated slots and never contend;
/// contention on one id name is limited to the refill window.
pub(crate) struct Slot {
    segment: RwLock<Option<Segment>>,
}

impl Slot {
    pub(crate) fn new() -> Self {
        Self {
            segment: RwLock::new(None),
        }
    }

    /// Dispense the next id, refilling from the allocator on exhaustion.
    ///
    /// A failed allocation leaves the exhausted segment exactly as it was,
    /// so the next call re-attempts the refill rather than dispensing from a
    /// half-initialized range.
    pub(crate) fn next(
        &self,
        id_name: &str,
        key: &ResolvedKey,
        props: &IdProperties,
        allocator: &dyn SegmentAllocator,
    ) -> Result<i64, Error> {
        loop {
            {
                let guard = self.segment.read().map_err(|_| Error::MutexPoisoned)?;
                if let Some(id) = guard.as_ref().and_then(Segment::take) {
                    return Ok(id);
                }
            }

            let mut guard = self.segment.write().map_err(|_| Error::MutexPoisoned)?;
            // Another thread may have refilled while we waited for the lock.
            if let Some(id) = guard.as_ref().and_then(Segment::take) {
                return Ok(id);
            }

            let upper =
                allocator.allocate(key, props.delta, props.min_value, props.max_value)?;
            let lower = upper - props.delta as i64;
            if let Some(old) = guard.as_ref() {
                if upper <= old.upper {
                    tracing::warn!(
                        id_name,
                        upper,
                        "counter wrapped around to min_value; earlier ids may repeat"
                    );
                }
            }
            tracing::debug!(id_name, lower, upper, "segment refilled");
            *guard = Some(Segment::new(lower, upper));
        }
    }
}
