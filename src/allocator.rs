use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::Error;
use crate::key::ResolvedKey;

/// The atomic range-reservation capability backing every generator.
///
/// `allocate` advances the counter stored under `key` by `delta` and returns
/// the new value, which becomes the upper bound of a freshly reserved segment
/// `(upper - delta, upper]`. The read-advance-write must be indivisible with
/// respect to all other callers sharing the same key, across processes.
/// This is the property the whole engine's uniqueness rests on, so remote
/// implementations must use a server-side atomic primitive (script, stored
/// procedure, compare-and-swap loop), never a client-side read-then-write.
///
/// Counter arithmetic, which every implementation must reproduce exactly:
/// - a counter that has never been touched rests at `min_value - 1`;
/// - if `stored + delta > max_value`, the counter is reset to `min_value - 1`
///   before adding `delta` (wraparound);
/// - the counter is advanced by `delta` and the new value returned.
///
/// So the first allocation for `min_value = 1, delta = 1000` returns `1000`
/// and the segment dispenses `1..=1000`. After a wraparound, previously
/// issued ids repeat; callers are expected to size `[min_value, max_value]`
/// so that a full cycle outlives any live reference to an id.
///
/// Callers guarantee `delta >= 1` and `0 <= min_value < max_value` with
/// `delta <= max_value - min_value + 1`; the builder validates this before a
/// generator exists.
///
/// `allocate` is the only call that may block a dispensing thread, so remote
/// implementations must bound it with their transport's timeout. Failures and
/// timeouts must surface as [`Error::RemoteUnavailable`] without any partial
/// mutation; returning a locally invented value instead would silently break
/// cross-process uniqueness.
pub trait SegmentAllocator: Send + Sync {
    fn allocate(
        &self,
        key: &ResolvedKey,
        delta: u32,
        min_value: i64,
        max_value: i64,
    ) -> Result<i64, Error>;
}

/// In-process reference implementation of [`SegmentAllocator`]: a counter map
/// behind a mutex, so each `allocate` call is atomic by construction.
///
/// This is the transport used when the builder is given no allocator, and the
/// yardstick transports are tested against. It provides **no cross-process
/// uniqueness**: two processes each holding their own `MemoryAllocator`
/// will happily issue the same ids. Deployments spanning processes must
/// inject an allocator backed by a shared store.
#[derive(Default)]
pub struct MemoryAllocator {
    counters: Mutex<HashMap<String, i64>>,
}

impl MemoryAllocator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SegmentAllocator for MemoryAllocator {
    fn allocate(
        &self,
        key: &ResolvedKey,
        delta: u32,
        min_value: i64,
        max_value: i64,
    ) -> Result<i64, Error> {
        let mut counters = self.counters.lock().map_err(|_| Error::MutexPoisoned)?;
        let stored = counters.entry(key.to_string()).or_insert(min_value - 1);
        let wraps = stored
            .checked_add(delta as i64)
            .map_or(true, |next| next > max_value);
        if wraps {
            *stored = min_value - 1;
        }
        *stored += delta as i64;
        Ok(*stored)
    }
}
