//! Skill matching: ranks job postings by how many of their required skills a
//! candidate claims.
//!
//! Matching rule: two labels match when, after lowercasing, either one contains
//! the other ("React" matches "React Native", "JS" does not match "JavaScript").
//! Labels are not trimmed or otherwise normalized.

use serde::Serialize;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Anything that declares a list of required skills.
pub trait SkillRequirements {
    fn required_skills(&self) -> &[String];
}

/// A job annotated with its match percentage. The job's own fields are
/// flattened next to `matchScore` when serialized.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedJob<J> {
    #[serde(flatten)]
    pub job: J,
    pub match_score: u32, // 0 – 100
}

// ────────────────────────────────────────────────────────────────────────────
// Ranking
// ────────────────────────────────────────────────────────────────────────────

/// Scores every job against `candidate_skills` and returns them best match
/// first. The sort is stable: jobs with equal scores keep their input order.
pub fn rank_jobs_by_match<J, I>(candidate_skills: &[String], jobs: I) -> Vec<RankedJob<J>>
where
    J: SkillRequirements,
    I: IntoIterator<Item = J>,
{
    let candidate = lowercase_all(candidate_skills);

    let mut ranked: Vec<RankedJob<J>> = jobs
        .into_iter()
        .map(|job| {
            let match_score = score_lowered(&candidate, job.required_skills());
            RankedJob { job, match_score }
        })
        .collect();

    ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    ranked
}

/// Percentage of `required` covered by `candidate_skills`, rounded, in [0, 100].
///
/// Each candidate skill counts once if it matches any required skill, so
/// duplicate candidate labels can push the raw ratio past 1.0; the result is
/// capped. A job with no requirements always scores 0.
pub fn match_score(candidate_skills: &[String], required: &[String]) -> u32 {
    score_lowered(&lowercase_all(candidate_skills), required)
}

fn score_lowered(candidate: &[String], required: &[String]) -> u32 {
    let required = lowercase_all(required);

    let matched = candidate
        .iter()
        .filter(|skill| required.iter().any(|req| contains_either(skill, req)))
        .count();

    let ratio = matched as f64 / required.len().max(1) as f64;
    (ratio * 100.0).min(100.0).round() as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Filter predicates for the browse endpoints
// ────────────────────────────────────────────────────────────────────────────

/// True if any profile skill matches any queried skill (bidirectional rule).
pub fn skills_overlap(profile_skills: &[String], query: &[String]) -> bool {
    let query = lowercase_all(query);
    profile_skills.iter().any(|skill| {
        let skill = skill.to_lowercase();
        query.iter().any(|q| contains_either(&skill, q))
    })
}

/// True if the job lists at least one skill and some listed skill contains
/// one of the queried skills. One-directional: searching "React" finds
/// "React Native" jobs, searching "React Native" does not find "React" jobs.
pub fn job_requires_any(job_skills: &[String], query: &[String]) -> bool {
    if job_skills.is_empty() {
        return false;
    }
    let job_skills = lowercase_all(job_skills);
    query.iter().any(|q| {
        let q = q.to_lowercase();
        job_skills.iter().any(|js| js.contains(&q))
    })
}

fn contains_either(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

fn lowercase_all(skills: &[String]) -> Vec<String> {
    skills.iter().map(|s| s.to_lowercase()).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
