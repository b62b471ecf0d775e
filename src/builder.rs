use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::allocator::{MemoryAllocator, SegmentAllocator};
use crate::error::Error;
use crate::generator::{Entry, IdGenerator, SharedGenerator};
use crate::key::{resolve, GLOBAL_SCOPE};
use crate::properties::{IdProperties, Strategy};
use crate::segment::Slot;

/// A builder for constructing an [`IdGenerator`].
///
/// Configuration is supplied once and validated in [`finalize`](Self::finalize);
/// nothing is hot-reloaded afterwards.
pub struct Builder {
    application_name: Option<String>,
    global: bool,
    strategy: Strategy,
    allocator: Option<Arc<dyn SegmentAllocator>>,
    properties: HashMap<String, IdProperties>,
    default_properties: Option<IdProperties>,
}

impl Default for Builder {
    fn default() -> Self {
        Builder::new()
    }
}

impl Builder {
    /// Construct a new builder for the build of [`IdGenerator`].
    pub fn new() -> Self {
        Self {
            application_name: None,
            global: false,
            strategy: Strategy::default(),
            allocator: None,
            properties: HashMap::new(),
            default_properties: None,
        }
    }

    /// Set the application name used as the key scope when the generator is
    /// not global. Required unless [`global`](Self::global) is enabled.
    pub fn application_name(mut self, name: impl Into<String>) -> Self {
        self.application_name = Some(name.into());
        self
    }

    /// Share the id space across all applications instead of scoping it to
    /// one application name.
    pub fn global(mut self, global: bool) -> Self {
        self.global = global;
        self
    }

    /// Select how id names map onto physical store records.
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Inject the allocation transport. Defaults to [`MemoryAllocator`],
    /// which is single-process only; anything spanning processes must supply
    /// an allocator backed by the shared store.
    pub fn allocator(mut self, allocator: Arc<dyn SegmentAllocator>) -> Self {
        self.allocator = Some(allocator);
        self
    }

    /// Register one id name with its properties.
    pub fn register(mut self, id_name: impl Into<String>, props: IdProperties) -> Self {
        self.properties.insert(id_name.into(), props);
        self
    }

    /// Set the properties applied to id names that were never registered.
    /// Without a default, an unknown id name is a configuration error.
    pub fn default_properties(mut self, props: IdProperties) -> Self {
        self.default_properties = Some(props);
        self
    }

    /// Finish building and create an [`IdGenerator`] instance.
    /// This method will return an error if any registered properties fail
    /// validation or the scope is under-specified.
    pub fn finalize(self) -> Result<IdGenerator, Error> {
        let scope = if self.global {
            GLOBAL_SCOPE.to_string()
        } else {
            match self.application_name {
                Some(name) if !name.is_empty() => name,
                _ => return Err(Error::MissingApplicationName),
            }
        };

        for (name, props) in &self.properties {
            props.validate(name)?;
        }
        if let Some(default) = &self.default_properties {
            default.validate("(default)")?;
        }

        let allocator = self
            .allocator
            .unwrap_or_else(|| Arc::new(MemoryAllocator::new()));

        // Resolve every registered key up front; resolution is pure and the
        // configuration is frozen, so it is never recomputed per call.
        let entries = self
            .properties
            .into_iter()
            .map(|(name, props)| {
                let key = resolve(&name, &props, self.strategy, &scope);
                let entry = Arc::new(Entry {
                    props,
                    key,
                    slot: Slot::new(),
                });
                (name, entry)
            })
            .collect();

        Ok(IdGenerator::new_inner(Arc::new(SharedGenerator {
            allocator,
            strategy: self.strategy,
            scope,
            default_properties: self.default_properties,
            entries: RwLock::new(entries),
        })))
    }
}
