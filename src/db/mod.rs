// SPDX-License-Identifier: MIT

//! Storage layer (in-memory).

pub mod memory;

pub use memory::{Database, Table};

/// A storable record: the store assigns the identifier on first insert and
/// the identifier is immutable thereafter.
pub trait Record: Clone {
    fn id(&self) -> Option<u64>;
    fn set_id(&mut self, id: u64);
}
