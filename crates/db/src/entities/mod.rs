//! `SeaORM` entity definitions.

pub mod holidays;
pub mod non_accounting_entries;
pub mod sea_orm_active_enums;
pub mod time_entries;
pub mod users;
