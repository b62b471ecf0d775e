use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::allocator::SegmentAllocator;
use crate::builder::Builder;
use crate::error::Error;
use crate::key::{resolve, ResolvedKey};
use crate::properties::{IdProperties, Strategy};
use crate::segment::Slot;

/// Everything the generator holds for one id name: the immutable properties,
/// the store key (resolved once, per-process), and the segment slot.
pub(crate) struct Entry {
    pub(crate) props: IdProperties,
    pub(crate) key: ResolvedKey,
    pub(crate) slot: Slot,
}

/// SharedGenerator is shared between IdGenerator handles.
/// This struct is not exposed to the public.
pub(crate) struct SharedGenerator {
    pub(crate) allocator: Arc<dyn SegmentAllocator>,
    pub(crate) strategy: Strategy,
    pub(crate) scope: String,
    pub(crate) default_properties: Option<IdProperties>,
    pub(crate) entries: RwLock<HashMap<String, Arc<Entry>>>,
}

/// IdGenerator hands out unique `i64` ids for named logical counters.
///
/// Most calls are served from a process-local segment without any I/O; only
/// when a segment is exhausted does the generator make one call to its
/// [`SegmentAllocator`] to reserve the next range. It is thread-safe and can
/// be cloned to be used in multiple threads; clones share all state.
pub struct IdGenerator(pub(crate) Arc<SharedGenerator>);

impl IdGenerator {
    /// Create a new [`Builder`] to construct an IdGenerator.
    pub fn builder() -> Builder {
        Builder::new()
    }

    pub(crate) fn new_inner(shared: Arc<SharedGenerator>) -> Self {
        Self(shared)
    }

    /// Generate the next id for `id_name`.
    ///
    /// The returned value is unique among all ids issued for the same
    /// resolved key (across threads and, with a store-backed allocator,
    /// across processes) until the counter wraps around. The call only
    /// blocks when the current segment is exhausted and a new range has to be
    /// reserved remotely; a remote failure surfaces as
    /// [`Error::RemoteUnavailable`] and is never papered over with a locally
    /// generated id.
    pub fn next_id(&self, id_name: &str) -> Result<i64, Error> {
        let entry = self.entry(id_name)?;
        entry
            .slot
            .next(id_name, &entry.key, &entry.props, self.0.allocator.as_ref())
    }

    /// Generate the next id for `id_name`, prefixed with the configured
    /// prefix. Pure presentation over [`next_id`](Self::next_id).
    pub fn next_id_str(&self, id_name: &str) -> Result<String, Error> {
        let entry = self.entry(id_name)?;
        let id = entry
            .slot
            .next(id_name, &entry.key, &entry.props, self.0.allocator.as_ref())?;
        Ok(format!("{}{}", entry.props.prefix, id))
    }

    fn entry(&self, id_name: &str) -> Result<Arc<Entry>, Error> {
        {
            let entries = self.0.entries.read().map_err(|_| Error::MutexPoisoned)?;
            if let Some(entry) = entries.get(id_name) {
                return Ok(Arc::clone(entry));
            }
        }

        let Some(default) = &self.0.default_properties else {
            return Err(Error::UnknownIdName(id_name.to_string()));
        };

        let mut entries = self.0.entries.write().map_err(|_| Error::MutexPoisoned)?;
        // Another thread may have inserted the entry while we waited.
        let entry = entries.entry(id_name.to_string()).or_insert_with(|| {
            Arc::new(Entry {
                props: default.clone(),
                key: resolve(id_name, default, self.0.strategy, &self.0.scope),
                slot: Slot::new(),
            })
        });
        Ok(Arc::clone(entry))
    }
}

/// Returns a new `IdGenerator` referencing the same state as `self`.
/// This is used for concurrent use.
impl Clone for IdGenerator {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}
