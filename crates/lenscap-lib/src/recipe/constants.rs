//! Conversion factors from chamber throughput to unit throughput.

/// Lenses coated per chamber cycle.
pub const LENSES_PER_CHAMBER: f64 = 56.0;

/// Jobs (lens pairs) completed per chamber cycle.
pub const JOBS_PER_CHAMBER: f64 = 28.0;
