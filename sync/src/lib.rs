pub mod errors;
pub use errors::{Result, SyncError};

pub mod scope;
pub use scope::{AccountId, ScopeKey};

pub mod kind;
pub use kind::DataKind;

pub mod staleness;

pub mod store;
pub use store::{CacheEntry, CacheStore, KindData};
#[cfg(test)]
mod store_test;

pub mod pagination;
pub use pagination::{PageDirection, PaginationState, Paginator};
#[cfg(test)]
mod pagination_test;

pub mod live;
pub use live::{LiveSnapshot, LiveState};
#[cfg(test)]
mod live_test;

pub mod aggregate;
pub use aggregate::Sourced;

pub mod fetch;
pub use fetch::{FetchCommand, FetchOutcome, FetchPayload};

pub mod view;
pub use view::{DisplayData, RenderSignal, ViewData};

pub mod engine;
pub use engine::{RenderCallback, SyncEngine};
