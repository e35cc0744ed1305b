//! Simulation domain models.
//!
//! | Type | Meaning |
//! |------|---------|
//! | Job | Named unit of work with remaining cycles |
//! | Slice | One dispatch of a job on the simulated timeline |

mod job;
mod slice;

pub use job::{parse_jobs, total_cycles, Job};
pub use slice::Slice;
