//! Resume summaries produced by the ingestion pipeline.

use std::fmt;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Unique identifier of a submitted resume.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResumeId(pub String);

impl ResumeId {
    /// Creates a resume identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResumeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Feedback generated for a resume by the scoring pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    /// Overall score, nominally 0 to 100. May be fractional.
    pub overall_score: f64,
}

impl Feedback {
    /// Score rounded for display and clamped to 0..=100.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn display_score(&self) -> u8 {
        if self.overall_score.is_nan() {
            return 0;
        }
        self.overall_score.round().clamp(0.0, 100.0) as u8
    }
}

/// Read-only summary of a previously submitted resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSummary {
    /// Identity of the submission.
    pub id: ResumeId,
    /// Company the resume targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Job title the resume targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    /// Scoring output.
    pub feedback: Feedback,
    /// Content store path of the rendered first-page image.
    pub image_path: String,
    /// Content store path of the submitted document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_path: Option<String>,
    /// When the resume was submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

impl ResumeSummary {
    /// Creates a summary with only the required fields set.
    #[must_use]
    pub fn new(id: impl Into<String>, overall_score: f64, image_path: impl Into<String>) -> Self {
        Self {
            id: ResumeId::new(id),
            company_name: None,
            job_title: None,
            feedback: Feedback { overall_score },
            image_path: image_path.into(),
            resume_path: None,
            submitted_at: None,
        }
    }

    /// Sets the company name.
    #[must_use]
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company_name = Some(company.into());
        self
    }

    /// Sets the job title.
    #[must_use]
    pub fn with_job_title(mut self, title: impl Into<String>) -> Self {
        self.job_title = Some(title.into());
        self
    }

    /// Heading shown on the resume card.
    ///
    /// Company name first, then job title, then a generic label.
    #[must_use]
    pub fn heading(&self) -> &str {
        non_blank(self.company_name.as_deref())
            .or_else(|| non_blank(self.job_title.as_deref()))
            .unwrap_or("Resume")
    }

    /// Secondary line under the heading, only when both strings are present.
    #[must_use]
    pub fn subheading(&self) -> Option<&str> {
        non_blank(self.company_name.as_deref()).and(non_blank(self.job_title.as_deref()))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parses a JSON catalog of resume summaries, newest first.
///
/// # Errors
///
/// Returns an error if the JSON is not a list of summaries.
pub fn parse_catalog(json: &str) -> Result<Vec<ResumeSummary>> {
    let mut resumes: Vec<ResumeSummary> = serde_json::from_str(json)?;
    // Undated entries sort last
    resumes.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    Ok(resumes)
}

/// Loads the resume catalog file. A missing file is an empty catalog.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub async fn load_catalog(path: &Path) -> Result<Vec<ResumeSummary>> {
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No resume catalog at {:?}", path);
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };
    let resumes = parse_catalog(&contents)?;
    tracing::info!("Loaded {} resumes from {:?}", resumes.len(), path);
    Ok(resumes)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn heading_prefers_company() {
        let resume = ResumeSummary::new("r1", 80.0, "img/r1.png")
            .with_company("Acme")
            .with_job_title("Engineer");
        assert_eq!(resume.heading(), "Acme");
        assert_eq!(resume.subheading(), Some("Engineer"));
    }

    #[test]
    fn heading_falls_back_to_job_title() {
        let resume = ResumeSummary::new("r1", 80.0, "img/r1.png").with_job_title("Engineer");
        assert_eq!(resume.heading(), "Engineer");
        assert_eq!(resume.subheading(), None);
    }

    #[test]
    fn heading_generic_when_untitled() {
        let resume = ResumeSummary::new("r1", 80.0, "img/r1.png").with_company("   ");
        assert_eq!(resume.heading(), "Resume");
    }

    #[test]
    fn parse_catalog_camel_case() {
        let json = r#"[
            {"id": "a", "feedback": {"overallScore": 71}, "imagePath": "/a.png",
             "submittedAt": "2026-01-02T10:00:00Z"},
            {"id": "b", "companyName": "Acme", "feedback": {"overallScore": 90},
             "imagePath": "/b.png", "resumePath": "/b.pdf",
             "submittedAt": "2026-03-04T10:00:00Z"},
            {"id": "c", "feedback": {"overallScore": 12}, "imagePath": "/c.png"}
        ]"#;
        let resumes = parse_catalog(json).unwrap();
        let ids: Vec<&str> = resumes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
        assert_eq!(resumes[0].company_name.as_deref(), Some("Acme"));
        assert_eq!(resumes[0].resume_path.as_deref(), Some("/b.pdf"));
        assert_eq!(resumes[0].feedback.display_score(), 90);
    }

    #[test]
    fn parse_catalog_accepts_fractional_scores() {
        let json = r#"[
            {"id": "a", "feedback": {"overallScore": 85.5}, "imagePath": "/a.png"},
            {"id": "b", "feedback": {"overallScore": 70}, "imagePath": "/b.png"},
            {"id": "c", "feedback": {"overallScore": 104.2}, "imagePath": "/c.png"}
        ]"#;
        let resumes = parse_catalog(json).unwrap();
        assert_eq!(resumes.len(), 3);
        assert!((resumes[0].feedback.overall_score - 85.5).abs() < f64::EPSILON);
        assert_eq!(resumes[0].feedback.display_score(), 86);
        assert_eq!(resumes[1].feedback.display_score(), 70);
        assert_eq!(resumes[2].feedback.display_score(), 100);
    }

    #[test]
    fn display_score_clamps_negative_and_nan() {
        let mut feedback = Feedback { overall_score: -3.0 };
        assert_eq!(feedback.display_score(), 0);
        feedback.overall_score = f64::NAN;
        assert_eq!(feedback.display_score(), 0);
    }

    #[test]
    fn parse_catalog_rejects_garbage() {
        assert!(parse_catalog("{\"not\": \"a list\"}").is_err());
    }

    #[tokio::test]
    async fn load_catalog_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let resumes = load_catalog(&dir.path().join("resumes.json")).await.unwrap();
        assert!(resumes.is_empty());
    }
}
