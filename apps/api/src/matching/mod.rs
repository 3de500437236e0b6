//! Skill matching and profile strength scoring.
//!
//! Everything in here is pure and synchronous: callers fetch the candidate and
//! job rows, hand them over, and serialize whatever comes back.

pub mod skills;
pub mod strength;

pub use skills::{job_requires_any, rank_jobs_by_match, skills_overlap, RankedJob, SkillRequirements};
pub use strength::{compute_pie_segments, compute_strength, CandidateProfile, PieSegment, ProfileStrength};
