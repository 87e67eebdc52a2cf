//! Database enum mappings.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Kind of a non-accounting entry, mirrored from the `absence_type`
/// database enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "absence_type")]
pub enum AbsenceType {
    /// Paid vacation.
    #[sea_orm(string_value = "vacation")]
    Vacation,
    /// Medical leave.
    #[sea_orm(string_value = "medical_leave")]
    MedicalLeave,
    /// Marriage leave.
    #[sea_orm(string_value = "marriage_leave")]
    MarriageLeave,
    /// Bereavement leave.
    #[sea_orm(string_value = "bereavement_leave")]
    BereavementLeave,
    /// Any other justified absence.
    #[sea_orm(string_value = "other")]
    Other,
}

impl From<worklog_core::entry::AbsenceType> for AbsenceType {
    fn from(kind: worklog_core::entry::AbsenceType) -> Self {
        use worklog_core::entry::AbsenceType as Core;
        match kind {
            Core::Vacation => Self::Vacation,
            Core::MedicalLeave => Self::MedicalLeave,
            Core::MarriageLeave => Self::MarriageLeave,
            Core::BereavementLeave => Self::BereavementLeave,
            Core::Other => Self::Other,
        }
    }
}

impl From<AbsenceType> for worklog_core::entry::AbsenceType {
    fn from(kind: AbsenceType) -> Self {
        match kind {
            AbsenceType::Vacation => Self::Vacation,
            AbsenceType::MedicalLeave => Self::MedicalLeave,
            AbsenceType::MarriageLeave => Self::MarriageLeave,
            AbsenceType::BereavementLeave => Self::BereavementLeave,
            AbsenceType::Other => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_with_core_enum() {
        use worklog_core::entry::AbsenceType as Core;
        for kind in [
            Core::Vacation,
            Core::MedicalLeave,
            Core::MarriageLeave,
            Core::BereavementLeave,
            Core::Other,
        ] {
            let db: AbsenceType = kind.into();
            let back: Core = db.into();
            assert_eq!(back, kind);
        }
    }
}
