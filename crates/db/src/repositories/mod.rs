//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations, hiding
//! the `SeaORM` implementation details from the rest of the application.
//! Every entry query is scoped by the owning user.

pub mod holiday;
pub mod non_accounting_entry;
pub mod time_entry;
pub mod user;

pub use holiday::{HolidayError, HolidayRepository};
pub use non_accounting_entry::{
    NonAccountingEntryError, NonAccountingEntryRepository, UpdateNonAccountingEntry,
};
pub use time_entry::{TimeEntryError, TimeEntryRepository, UpdateTimeEntry};
pub use user::{CreateUserInput, UserError, UserRepository};
