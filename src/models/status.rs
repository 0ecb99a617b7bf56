use clap::ValueEnum;
use serde::Serialize;

/// Employment status of an employee, assigned once at first insert from
/// the static roster and never retroactively changed.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, ValueEnum)]
pub enum EmploymentStatus {
    Permanent,
    JobOrder,
}

impl EmploymentStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EmploymentStatus::Permanent => "permanent",
            EmploymentStatus::JobOrder => "job-order",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "permanent" => Some(EmploymentStatus::Permanent),
            "job-order" => Some(EmploymentStatus::JobOrder),
            _ => None,
        }
    }

    pub fn is_permanent(&self) -> bool {
        matches!(self, EmploymentStatus::Permanent)
    }
}
