use crate::domain::{DeveloperScale, EmployeesBucket};

/// Multiplier for studios whose size is not known
pub const NEUTRAL_MULTIPLIER: f64 = 1.00;

/// ARPPU multiplier per studio headcount range
pub fn studio_multiplier(bucket: EmployeesBucket) -> f64 {
    match bucket {
        EmployeesBucket::UpTo10 => 0.70,
        EmployeesBucket::UpTo50 => 0.85,
        EmployeesBucket::UpTo100 => 1.00,
        EmployeesBucket::UpTo250 => 1.20,
        EmployeesBucket::UpTo500 => 1.40,
        EmployeesBucket::UpTo1000 => 1.70,
        EmployeesBucket::UpTo5000 => 2.10,
        EmployeesBucket::UpTo10000 => 2.50,
        EmployeesBucket::Over10000 => 3.00,
    }
}

/// Resolve an optional developer scale; unknown resolves to [`NEUTRAL_MULTIPLIER`]
pub fn scale_multiplier(scale: Option<&DeveloperScale>) -> f64 {
    scale
        .map(|s| studio_multiplier(s.employees_bucket))
        .unwrap_or(NEUTRAL_MULTIPLIER)
}
