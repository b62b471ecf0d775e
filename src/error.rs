// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::error::Error as StdError;
use thiserror::Error;

/// Convenience type alias for wrapped error sources.
pub type BoxDynError = Box<dyn StdError + 'static + Send + Sync>;

/// The error type for this crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("no id properties registered for `{0}` and no default policy configured")]
    UnknownIdName(String),
    #[error("invalid id properties for `{name}`: {reason}")]
    InvalidProperties { name: String, reason: &'static str },
    #[error("application_name is required unless the generator is global")]
    MissingApplicationName,
    #[error("remote allocation for key `{key}` failed: {source}")]
    RemoteUnavailable {
        key: String,
        #[source]
        source: BoxDynError,
    },
    #[error("mutex is poisoned (i.e. a panic happened while it was locked)")]
    MutexPoisoned,
}
