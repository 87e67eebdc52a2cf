//! Initial database migration.
//!
//! Creates the enum, tables, indexes, triggers, and the overlap exclusion
//! constraint on non-accounting periods.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: EXTENSIONS & ENUMS
        // ============================================================
        db.execute_unprepared(EXTENSIONS_SQL).await?;
        db.execute_unprepared(ENUMS_SQL).await?;

        // ============================================================
        // PART 2: CORE TABLES
        // ============================================================
        db.execute_unprepared(USERS_SQL).await?;
        db.execute_unprepared(TIME_ENTRIES_SQL).await?;
        db.execute_unprepared(NON_ACCOUNTING_ENTRIES_SQL).await?;
        db.execute_unprepared(HOLIDAYS_SQL).await?;

        // ============================================================
        // PART 3: TRIGGERS & FUNCTIONS
        // ============================================================
        db.execute_unprepared(TRIGGERS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_SQL).await?;
        Ok(())
    }
}

const EXTENSIONS_SQL: &str = r"
-- btree_gist lets the exclusion constraint mix equality on user_id with
-- range overlap on the absence period.
CREATE EXTENSION IF NOT EXISTS btree_gist;
";

const ENUMS_SQL: &str = r"
CREATE TYPE absence_type AS ENUM (
    'vacation',
    'medical_leave',
    'marriage_leave',
    'bereavement_leave',
    'other'
);
";

const USERS_SQL: &str = r"
CREATE TABLE users (
    id UUID PRIMARY KEY,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    display_name TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const TIME_ENTRIES_SQL: &str = r"
CREATE TABLE time_entries (
    id UUID PRIMARY KEY,
    user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    entry_date DATE NOT NULL,
    start_time TIME NOT NULL,
    end_time TIME NOT NULL,
    comment TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_time_entries_user_date ON time_entries(user_id, entry_date);
";

const NON_ACCOUNTING_ENTRIES_SQL: &str = r"
CREATE TABLE non_accounting_entries (
    id UUID PRIMARY KEY,
    user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    start_date DATE NOT NULL,
    days INTEGER NOT NULL CHECK (days > 0),
    kind absence_type NOT NULL,
    comment TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),

    -- Second line of defense behind the per-owner write lock: two periods
    -- for the same user must never overlap, even across server instances.
    CONSTRAINT non_accounting_no_overlap EXCLUDE USING gist (
        user_id WITH =,
        daterange(start_date, start_date + days, '[)') WITH &&
    )
);

CREATE INDEX idx_non_accounting_user_start
    ON non_accounting_entries(user_id, start_date);
";

const HOLIDAYS_SQL: &str = r"
CREATE TABLE holidays (
    id UUID PRIMARY KEY,
    holiday_date DATE NOT NULL UNIQUE,
    name TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const TRIGGERS_SQL: &str = r"
CREATE OR REPLACE FUNCTION set_updated_at()
RETURNS TRIGGER AS $$
BEGIN
    NEW.updated_at = now();
    RETURN NEW;
END;
$$ LANGUAGE plpgsql;

CREATE TRIGGER users_updated_at
    BEFORE UPDATE ON users
    FOR EACH ROW EXECUTE FUNCTION set_updated_at();

CREATE TRIGGER time_entries_updated_at
    BEFORE UPDATE ON time_entries
    FOR EACH ROW EXECUTE FUNCTION set_updated_at();

CREATE TRIGGER non_accounting_entries_updated_at
    BEFORE UPDATE ON non_accounting_entries
    FOR EACH ROW EXECUTE FUNCTION set_updated_at();
";

const DROP_SQL: &str = r"
DROP TABLE IF EXISTS holidays;
DROP TABLE IF EXISTS non_accounting_entries;
DROP TABLE IF EXISTS time_entries;
DROP TABLE IF EXISTS users;
DROP FUNCTION IF EXISTS set_updated_at();
DROP TYPE IF EXISTS absence_type;
";
