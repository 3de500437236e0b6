use serde::Serialize;

/// Profile categories in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Bio,
    Skills,
    Education,
    Experience,
    Location,
    Photo,
    Resume,
}

impl Category {
    pub const fn label(self) -> &'static str {
        match self {
            Category::Bio => "Bio",
            Category::Skills => "Skills",
            Category::Education => "Education",
            Category::Experience => "Experience",
            Category::Location => "Location",
            Category::Photo => "Photo",
            Category::Resume => "Resume",
        }
    }
}

/// Max points per category. Sums to exactly 100.
pub const CATEGORY_WEIGHTS: [(Category, u32); 7] = [
    (Category::Bio, 15),
    (Category::Skills, 30),
    (Category::Education, 15),
    (Category::Experience, 15),
    (Category::Location, 15),
    (Category::Photo, 5),
    (Category::Resume, 5),
];

/// Points per declared skill; full Skills credit at six.
pub const POINTS_PER_SKILL: u32 = 5;

pub const PIE_PALETTE: [&str; 7] = [
    "#4a90e2", "#5cb85c", "#f0ad4e", "#5bc0de", "#9b59b6", "#e74c3c", "#95a5a6",
];

/// Borrowed view over the profile fields that count toward strength.
#[derive(Debug, Clone, Copy, Default)]
pub struct CandidateProfile<'a> {
    pub skills: &'a [String],
    pub bio: Option<&'a str>,
    pub education: Option<&'a str>,
    pub experience: Option<&'a str>,
    pub location: Option<&'a str>,
    pub profile_pic: Option<&'a str>,
    pub resume: Option<&'a str>,
}

impl<'a> CandidateProfile<'a> {
    fn text_for(&self, category: Category) -> Option<&'a str> {
        match category {
            Category::Bio => self.bio,
            Category::Education => self.education,
            Category::Experience => self.experience,
            Category::Location => self.location,
            Category::Photo => self.profile_pic,
            Category::Resume => self.resume,
            Category::Skills => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownEntry {
    pub label: &'static str,
    pub max: u32,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileStrength {
    pub score: u32, // 0 – 100
    pub breakdown: Vec<BreakdownEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSegment {
    pub label: &'static str,
    pub value: u32,
    pub percent: u32,
    pub color: &'static str,
}

/// Weighted completeness score for a candidate profile.
///
/// Text categories earn all or nothing depending on whether the field is
/// non-empty after trimming. Skills earn `POINTS_PER_SKILL` each up to the
/// category max. `None` yields a zero score with an empty breakdown.
pub fn compute_strength(candidate: Option<&CandidateProfile<'_>>) -> ProfileStrength {
    let Some(candidate) = candidate else {
        return ProfileStrength {
            score: 0,
            breakdown: vec![],
        };
    };

    let breakdown: Vec<BreakdownEntry> = CATEGORY_WEIGHTS
        .iter()
        .map(|&(category, max)| {
            let value = match category {
                Category::Skills => skill_credit(candidate.skills.len(), max),
                _ if is_filled(candidate.text_for(category)) => max,
                _ => 0,
            };
            BreakdownEntry {
                label: category.label(),
                max,
                value,
            }
        })
        .collect();

    let total: u32 = breakdown.iter().map(|entry| entry.value).sum();

    ProfileStrength {
        score: total.min(100),
        breakdown,
    }
}

/// Splits the nonzero breakdown entries into pie slices, each sized by its
/// share of the summed values rather than of 100.
pub fn compute_pie_segments(candidate: Option<&CandidateProfile<'_>>) -> Vec<PieSegment> {
    let ProfileStrength { breakdown, .. } = compute_strength(candidate);

    let total = match breakdown.iter().map(|entry| entry.value).sum::<u32>() {
        0 => 1,
        sum => sum,
    };

    breakdown
        .into_iter()
        .filter(|entry| entry.value > 0)
        .enumerate()
        .map(|(i, entry)| PieSegment {
            label: entry.label,
            value: entry.value,
            percent: ((entry.value as f64 / total as f64) * 100.0).round() as u32,
            color: PIE_PALETTE[i % PIE_PALETTE.len()],
        })
        .collect()
}

fn skill_credit(skill_count: usize, max: u32) -> u32 {
    skill_count
        .saturating_mul(POINTS_PER_SKILL as usize)
        .min(max as usize) as u32
}

fn is_filled(text: Option<&str>) -> bool {
    text.is_some_and(|t| !t.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("skill-{i}")).collect()
    }

    fn value_of(strength: &ProfileStrength, label: &str) -> u32 {
        strength
            .breakdown
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.value)
            .unwrap()
    }

    #[test]
    fn test_weights_sum_to_100() {
        let total: u32 = CATEGORY_WEIGHTS.iter().map(|(_, w)| w).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_none_is_zero_with_empty_breakdown() {
        let strength = compute_strength(None);
        assert_eq!(strength.score, 0);
        assert!(strength.breakdown.is_empty());
        assert!(compute_pie_segments(None).is_empty());
    }

    #[test]
    fn test_bio_location_three_skills_scores_45() {
        let skill_list = skills(3);
        let profile = CandidateProfile {
            skills: &skill_list,
            bio: Some("Final-year CS student at KNUST"),
            location: Some("Kumasi, Ashanti"),
            ..Default::default()
        };
        let strength = compute_strength(Some(&profile));
        assert_eq!(strength.score, 45);
        assert_eq!(value_of(&strength, "Bio"), 15);
        assert_eq!(value_of(&strength, "Skills"), 15);
        assert_eq!(value_of(&strength, "Location"), 15);
        assert_eq!(value_of(&strength, "Education"), 0);
    }

    #[test]
    fn test_breakdown_in_table_order() {
        let strength = compute_strength(Some(&CandidateProfile::default()));
        let labels: Vec<_> = strength.breakdown.iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            vec!["Bio", "Skills", "Education", "Experience", "Location", "Photo", "Resume"]
        );
        assert_eq!(strength.score, 0);
    }

    #[test]
    fn test_whitespace_only_text_earns_nothing() {
        let profile = CandidateProfile {
            bio: Some("   \n\t"),
            education: Some(""),
            ..Default::default()
        };
        assert_eq!(compute_strength(Some(&profile)).score, 0);
    }

    #[test]
    fn test_skill_credit_monotonic_and_saturates_at_six() {
        let mut previous = 0;
        for n in 0..=10 {
            let skill_list = skills(n);
            let profile = CandidateProfile {
                skills: &skill_list,
                ..Default::default()
            };
            let value = value_of(&compute_strength(Some(&profile)), "Skills");
            assert!(value >= previous, "credit dropped at {n} skills");
            assert!(value <= 30);
            previous = value;
        }
        assert_eq!(skill_credit(6, 30), 30);
        assert_eq!(skill_credit(10, 30), 30);
        assert_eq!(skill_credit(5, 30), 25);
    }

    #[test]
    fn test_full_profile_scores_100() {
        let skill_list = skills(8);
        let profile = CandidateProfile {
            skills: &skill_list,
            bio: Some("bio"),
            education: Some("BSc Computer Science, University of Ghana"),
            experience: Some("Volunteer web developer"),
            location: Some("Accra"),
            profile_pic: Some("https://cdn.example.com/p.png"),
            resume: Some("https://cdn.example.com/cv.pdf"),
        };
        let strength = compute_strength(Some(&profile));
        assert_eq!(strength.score, 100);
        assert!(strength.breakdown.iter().all(|e| e.value == e.max));
    }

    #[test]
    fn test_pie_segments_share_of_nonzero_total() {
        let skill_list = skills(3);
        let profile = CandidateProfile {
            skills: &skill_list,
            bio: Some("bio"),
            location: Some("Tamale"),
            ..Default::default()
        };
        let segments = compute_pie_segments(Some(&profile));
        assert_eq!(segments.len(), 3);
        // 15 / 45 each
        assert!(segments.iter().all(|s| s.percent == 33));
        assert_eq!(segments[0].label, "Bio");
        assert_eq!(segments[0].color, "#4a90e2");
        assert_eq!(segments[1].label, "Skills");
        assert_eq!(segments[1].color, "#5cb85c");
        assert_eq!(segments[2].label, "Location");
        assert_eq!(segments[2].color, "#f0ad4e");
    }

    #[test]
    fn test_pie_percentages_sum_to_about_100() {
        let skill_list = skills(2);
        let profile = CandidateProfile {
            skills: &skill_list,
            education: Some("HND Marketing"),
            profile_pic: Some("pic.jpg"),
            resume: Some("cv.pdf"),
            ..Default::default()
        };
        let segments = compute_pie_segments(Some(&profile));
        let sum: u32 = segments.iter().map(|s| s.percent).sum();
        assert!((98..=102).contains(&sum), "sum was {sum}");
    }

    #[test]
    fn test_pie_empty_when_score_zero() {
        assert!(compute_pie_segments(Some(&CandidateProfile::default())).is_empty());
    }
}
