//! Flattened view of an applicant, as shown to the model and echoed in results.

use serde::Serialize;

use crate::models::applicant::ApplicantRow;

pub const UNKNOWN_DEPARTMENT: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicantProfile {
    pub name: String,
    pub department: String,
    pub year: i32,
    /// Mean of the positive per-term grade points, two decimals.
    pub cgpa: f64,
    pub backlogs: i32,
    pub has_resume: bool,
    pub internships: usize,
}

impl ApplicantProfile {
    pub fn derive(applicant: &ApplicantRow) -> Self {
        Self {
            name: full_name(
                applicant.first_name.as_deref(),
                applicant.last_name.as_deref(),
            ),
            department: applicant
                .department
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or(UNKNOWN_DEPARTMENT)
                .to_string(),
            year: applicant.year.unwrap_or(0),
            cgpa: grade_average(applicant.sgpa.iter().flatten().copied()),
            backlogs: applicant.live_backlogs.unwrap_or(0),
            has_resume: applicant.resume.as_deref().is_some_and(|r| !r.is_empty()),
            internships: applicant.internships.as_ref().map_or(0, |i| i.0.len()),
        }
    }
}

/// `"first last"` with missing parts treated as empty, trimmed.
pub fn full_name(first: Option<&str>, last: Option<&str>) -> String {
    format!("{} {}", first.unwrap_or(""), last.unwrap_or("")).trim().to_string()
}

/// Mean of the strictly positive values, rounded to two decimals; 0 when there are none.
pub fn grade_average<I>(values: I) -> f64
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .filter(|v| v.is_finite() && *v > 0.0)
        .fold((0.0_f64, 0u32), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        return 0.0;
    }
    round2(sum / f64::from(count))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// First `max` characters of `text`. Never splits a code point.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::test_support::bare_applicant;
    use serde_json::json;
    use sqlx::types::Json;

    #[test]
    fn test_grade_average_ignores_zero_and_missing_terms() {
        let avg = grade_average([Some(8.5), Some(0.0), Some(9.0), None]);
        assert_eq!(avg, 8.75);
    }

    #[test]
    fn test_grade_average_of_nothing_is_zero() {
        assert_eq!(grade_average([Some(0.0), None]), 0.0);
        assert_eq!(grade_average(std::iter::empty()), 0.0);
    }

    #[test]
    fn test_grade_average_rounds_to_two_decimals() {
        let avg = grade_average([Some(8.0), Some(9.0), Some(9.0)]);
        assert_eq!(avg, 8.67);
    }

    #[test]
    fn test_full_name_is_empty_safe() {
        assert_eq!(full_name(Some("Asha"), Some("Rao")), "Asha Rao");
        assert_eq!(full_name(Some("Asha"), None), "Asha");
        assert_eq!(full_name(None, Some("Rao")), "Rao");
        assert_eq!(full_name(None, None), "");
    }

    #[test]
    fn test_derive_applies_defaults() {
        let profile = ApplicantProfile::derive(&bare_applicant());
        assert_eq!(profile.name, "");
        assert_eq!(profile.department, UNKNOWN_DEPARTMENT);
        assert_eq!(profile.year, 0);
        assert_eq!(profile.cgpa, 0.0);
        assert_eq!(profile.backlogs, 0);
        assert!(!profile.has_resume);
        assert_eq!(profile.internships, 0);
    }

    #[test]
    fn test_derive_reads_full_profile() {
        let applicant = ApplicantRow {
            first_name: Some("Asha".into()),
            last_name: Some("Rao".into()),
            department: Some("Computer".into()),
            year: Some(4),
            sgpa: Some(vec![Some(8.5), Some(0.0), Some(9.0), None]),
            live_backlogs: Some(1),
            internships: Some(Json(vec![json!({"company": "Acme"}), json!({"company": "Initech"})])),
            resume: Some("https://files.example/asha.pdf".into()),
            ..bare_applicant()
        };
        let profile = ApplicantProfile::derive(&applicant);
        assert_eq!(profile.name, "Asha Rao");
        assert_eq!(profile.department, "Computer");
        assert_eq!(profile.year, 4);
        assert_eq!(profile.cgpa, 8.75);
        assert_eq!(profile.backlogs, 1);
        assert!(profile.has_resume);
        assert_eq!(profile.internships, 2);
    }

    #[test]
    fn test_truncate_chars_is_char_safe() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("short", 500), "short");
        assert_eq!(truncate_chars("", 3), "");
    }
}
