//! A distributed segmented ID generator.
//!
//! Many independent processes can hand out globally unique, mostly-increasing
//! `i64` ids for named logical counters without a network round trip per id.
//! Each process reserves a `delta`-sized range (a *segment*) from a shared
//! counter store through one atomic allocation, then dispenses that range
//! locally; only segment exhaustion touches the network.
//!
//! ## Quickstart
//!
//! Add the following to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! segmented-id = "0.1"
//! ```
//!
//! Use the library like this:
//!
//! ```
//! use segmented_id::{IdGenerator, IdProperties};
//!
//! let gen = IdGenerator::builder()
//!     .application_name("orders")
//!     .register("order", IdProperties::new(1000))
//!     .finalize()
//!     .unwrap();
//!
//! assert_eq!(gen.next_id("order").unwrap(), 1);
//! assert_eq!(gen.next_id("order").unwrap(), 2);
//! ```
//!
//! ## Concurrent use
//!
//! IdGenerator is thread-safe. `clone` it before moving to another thread:
//! ```
//! use segmented_id::{IdGenerator, IdProperties};
//! use std::thread;
//!
//! let gen = IdGenerator::builder()
//!     .application_name("orders")
//!     .register("order", IdProperties::new(1000))
//!     .finalize()
//!     .unwrap();
//!
//! let mut children = Vec::new();
//! for _ in 0..10 {
//!     let thread_gen = gen.clone();
//!     children.push(thread::spawn(move || {
//!         println!("{}", thread_gen.next_id("order").unwrap());
//!     }));
//! }
//!
//! for child in children {
//!     child.join().unwrap();
//! }
//! ```
//!
//! ## Distributed use
//!
//! Uniqueness across processes comes from the [`SegmentAllocator`] injected
//! at build time: its `allocate` must advance the shared counter atomically
//! server-side. The built-in [`MemoryAllocator`] satisfies the contract
//! within one process and is the default; deployments spanning processes
//! implement the trait over their store (a server-side script, a stored
//! procedure, a CAS loop) and pass it to
//! [`Builder::allocator`](crate::Builder::allocator).

mod allocator;
mod builder;
mod error;
mod generator;
mod key;
mod properties;
mod segment;

pub use allocator::*;
pub use builder::*;
pub use error::*;
pub use generator::IdGenerator;
pub use key::ResolvedKey;
pub use properties::*;
