//! Entry domain types and the abstract entry store.
//!
//! This module defines:
//! - Time entries (worked shifts) and non-accounting entries (absences)
//! - The closed set of absence types and their per-type day ceilings
//! - The `EntryStore` trait the persistence layer implements
//! - An in-memory store for tests
//! - The entry service that serializes validate-then-persist per owner

pub mod memory;
pub mod service;
pub mod store;
pub mod types;


pub use memory::InMemoryStore;
pub use service::{EntryError, EntryService};
pub use store::{DateRange, EntryStore, StoreError};
pub use types::{
    AbsenceType, NonAccountingEntry, NonAccountingEntryDraft, TimeEntry, TimeEntryDraft,
    VACATION_ALLOWANCE_DAYS,
};
