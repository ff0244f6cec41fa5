use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::Database;
use crate::dto::inspection::{
    ChecklistItemInput, InspectionDetailResponse, InspectionSubmission,
};
use crate::error::{Result, StorageError};
use crate::models::Inspection;
use crate::repository::cadet::CadetRepository;
use crate::repository::inspection::InspectionRepository;

pub const MAX_ITEM_SCORE: i32 = 3;

const MAX_COMMENT_CHARS: usize = 255;

/// Qualitative label derived from an inspection total.
///
/// The breakpoints are fixed against the published 20-item checklist (60 max
/// points) and are NOT rescaled when an engine is built over a catalog of a
/// different size. That matches how units actually grade; a short synthetic
/// catalog will simply bottom out at the low ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Rating {
    Excellent,
    MeetsStandard,
    NeedsImprovement,
    Unacceptable,
}

impl Rating {
    pub fn from_total(total: i32) -> Self {
        if total >= 45 {
            Rating::Excellent
        } else if total >= 30 {
            Rating::MeetsStandard
        } else if total >= 16 {
            Rating::NeedsImprovement
        } else {
            Rating::Unacceptable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent",
            Rating::MeetsStandard => "Meets Standard",
            Rating::NeedsImprovement => "Needs Improvement",
            Rating::Unacceptable => "Unacceptable",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One section of the inspection checklist and its item labels
#[derive(Debug, Clone)]
pub struct ChecklistSection {
    pub name: String,
    pub items: Vec<String>,
}

/// The catalog of checklist labels an engine scores against. Passed in at
/// construction so tests can run synthetic catalogs; `standard()` is the
/// organization's published form.
#[derive(Debug, Clone)]
pub struct ChecklistCatalog {
    sections: Vec<ChecklistSection>,
}

impl ChecklistCatalog {
    pub fn new(sections: Vec<ChecklistSection>) -> Self {
        Self { sections }
    }

    /// The published Personal Appearance & Uniform Inspection form: five
    /// sections, twenty items.
    pub fn standard() -> Self {
        let section = |name: &str, items: &[&str]| ChecklistSection {
            name: name.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        };

        Self::new(vec![
            section(
                "Personal Appearance",
                &["Haircut", "Cleanliness", "Shave/Cosmetics"],
            ),
            section(
                "Garments",
                &[
                    "Cleanliness",
                    "Press/Ironing",
                    "No loose strings/frays",
                    "Shirt tucked properly",
                    "Proper sizing/fit",
                    "No unauthorized bracelets",
                    "Sleeves rolled properly (cuff visible)",
                    "Undershirt correct (color/cut)",
                ],
            ),
            section(
                "Accouterments",
                &["Patches", "Insignia", "Ribbons/order", "Gig line"],
            ),
            section("Footwear", &["Boot blousing", "Shine / Cleanliness"]),
            section(
                "Military Bearing",
                &["Posture", "Hands at seam", "Focus / Bearing"],
            ),
        ])
    }

    /// Every `(section, item)` label pair, in form order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.sections
            .iter()
            .flat_map(|s| s.items.iter().map(move |i| (s.name.as_str(), i.as_str())))
    }

    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    fn contains(&self, section: &str, item: &str) -> bool {
        self.entries().any(|(s, i)| s == section && i == item)
    }
}

/// The outcome of aggregating one checklist: total, derived rating, combined
/// comment blob. Recomputing from the same input yields an identical value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectionResult {
    pub total: i32,
    pub rating: Rating,
    pub comments: String,
}

/// Aggregates a scored checklist against a fixed catalog.
#[derive(Debug, Clone)]
pub struct ScoreEngine {
    catalog: ChecklistCatalog,
}

impl ScoreEngine {
    pub fn new(catalog: ChecklistCatalog) -> Self {
        Self { catalog }
    }

    pub fn standard() -> Self {
        Self::new(ChecklistCatalog::standard())
    }

    /// Pure aggregation: validates the checklist covers the catalog exactly,
    /// sums the item scores, derives the rating and assembles the combined
    /// comment. No side effects; calling twice on the same input returns the
    /// same result.
    pub fn calculate(
        &self,
        items: &[ChecklistItemInput],
        overall_comment: &str,
    ) -> Result<InspectionResult> {
        if items.is_empty() {
            return Err(StorageError::Validation(
                "checklist has no items".to_string(),
            ));
        }

        let mut seen: HashSet<(&str, &str)> = HashSet::new();

        for item in items {
            if !(0..=MAX_ITEM_SCORE).contains(&item.score) {
                return Err(StorageError::Validation(format!(
                    "score {} for '{} / {}' is outside 0..={}",
                    item.score, item.section, item.name, MAX_ITEM_SCORE
                )));
            }

            if !self.catalog.contains(&item.section, &item.name) {
                return Err(StorageError::Validation(format!(
                    "'{} / {}' is not on the inspection checklist",
                    item.section, item.name
                )));
            }

            if !seen.insert((item.section.as_str(), item.name.as_str())) {
                return Err(StorageError::Validation(format!(
                    "'{} / {}' appears more than once",
                    item.section, item.name
                )));
            }
        }

        let expected = self.catalog.item_count();
        if seen.len() != expected {
            return Err(StorageError::Validation(format!(
                "checklist covers {} of {} catalog items",
                seen.len(),
                expected
            )));
        }

        let total: i32 = items.iter().map(|i| i.score).sum();

        Ok(InspectionResult {
            total,
            rating: Rating::from_total(total),
            comments: combine_comments(items, overall_comment),
        })
    }
}

/// Per-item comments become `"<section> - <comment>"`, the overall comment
/// becomes `"Overall: <comment>"`, joined with `" | "` and capped at 255
/// characters for the comments column.
fn combine_comments(items: &[ChecklistItemInput], overall_comment: &str) -> String {
    let mut parts: Vec<String> = items
        .iter()
        .filter(|i| !i.comment.trim().is_empty())
        .map(|i| format!("{} - {}", i.section, i.comment.trim()))
        .collect();

    let overall = overall_comment.trim();
    if !overall.is_empty() {
        parts.push(format!("Overall: {overall}"));
    }

    let combined = parts.join(" | ");
    if combined.chars().count() > MAX_COMMENT_CHARS {
        combined.chars().take(MAX_COMMENT_CHARS).collect()
    } else {
        combined
    }
}

/// Score a submission and persist it: one inspection row per cadet per date,
/// updated in place on resubmission, with the per-item breakdown written only
/// when the schema carries it.
pub async fn submit_inspection(
    db: &Database,
    engine: &ScoreEngine,
    submission: &InspectionSubmission,
) -> Result<Uuid> {
    let result = engine.calculate(&submission.items, &submission.overall_comment)?;

    let cadet = CadetRepository::new(db.pool())
        .find_by_cap_id(submission.cap_id)
        .await?;

    let breakdown = db
        .capabilities()
        .per_item_scores
        .then_some(submission.items.as_slice());

    let inspection_id = InspectionRepository::new(db.pool())
        .upsert(
            cadet.cadet_id,
            submission.inspector_cap_id,
            submission.inspection_date,
            &result,
            breakdown,
        )
        .await?;

    info!(
        cap_id = submission.cap_id,
        total = result.total,
        rating = %result.rating,
        "stored inspection"
    );

    Ok(inspection_id)
}

/// All inspections recorded for a cadet, newest first
pub async fn list_inspections(db: &Database, cap_id: i64) -> Result<Vec<Inspection>> {
    let cadet = CadetRepository::new(db.pool()).find_by_cap_id(cap_id).await?;

    InspectionRepository::new(db.pool())
        .list_for_cadet(cadet.cadet_id)
        .await
}

/// Load a stored inspection with its per-item rows for editing or display
pub async fn load_inspection(
    db: &Database,
    cap_id: i64,
    date: &str,
) -> Result<InspectionDetailResponse> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
        StorageError::Validation(format!("malformed date '{date}', expected YYYY-MM-DD"))
    })?;

    let cadet = CadetRepository::new(db.pool()).find_by_cap_id(cap_id).await?;

    let repo = InspectionRepository::new(db.pool());
    let inspection = repo
        .find_by_cadet_and_date(cadet.cadet_id, date)
        .await?
        .ok_or_else(|| {
            StorageError::not_found("inspection", format!("cadet {cap_id} on {date}"))
        })?;

    let items = if db.capabilities().per_item_scores {
        repo.item_scores(inspection.inspection_id).await?
    } else {
        Vec::new()
    };

    Ok(InspectionDetailResponse {
        inspection_id: inspection.inspection_id,
        cap_id: cadet.cap_id,
        inspector_cap_id: inspection.inspector_cap_id,
        inspection_date: inspection.inspection_date,
        total_score: inspection.total_score,
        rating: inspection.rating,
        comments: inspection.comments,
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(section: &str, name: &str, score: i32, comment: &str) -> ChecklistItemInput {
        ChecklistItemInput {
            section: section.to_string(),
            name: name.to_string(),
            score,
            comment: comment.to_string(),
        }
    }

    /// A full standard checklist with every item at `score`
    fn full_checklist(score: i32) -> Vec<ChecklistItemInput> {
        ChecklistCatalog::standard()
            .entries()
            .map(|(section, name)| item(section, name, score, ""))
            .collect()
    }

    /// A full standard checklist whose scores sum to exactly `total`
    fn checklist_with_total(total: i32) -> Vec<ChecklistItemInput> {
        let mut remaining = total;
        ChecklistCatalog::standard()
            .entries()
            .map(|(section, name)| {
                let score = remaining.min(MAX_ITEM_SCORE);
                remaining -= score;
                item(section, name, score, "")
            })
            .collect()
    }

    #[test]
    fn test_total_is_sum_of_scores() {
        let engine = ScoreEngine::standard();
        let result = engine.calculate(&full_checklist(2), "").unwrap();
        assert_eq!(result.total, 40);
        assert_eq!(result.rating, Rating::MeetsStandard);
        assert_eq!(result.comments, "");
    }

    #[test]
    fn test_rating_boundaries_exact() {
        let cases = [
            (60, Rating::Excellent),
            (45, Rating::Excellent),
            (44, Rating::MeetsStandard),
            (30, Rating::MeetsStandard),
            (29, Rating::NeedsImprovement),
            (16, Rating::NeedsImprovement),
            (15, Rating::Unacceptable),
            (0, Rating::Unacceptable),
        ];

        let engine = ScoreEngine::standard();
        for (total, expected) in cases {
            assert_eq!(Rating::from_total(total), expected, "total {total}");

            let result = engine.calculate(&checklist_with_total(total), "").unwrap();
            assert_eq!(result.total, total);
            assert_eq!(result.rating, expected, "total {total} through calculate");
        }
    }

    #[test]
    fn test_calculate_is_idempotent() {
        let engine = ScoreEngine::standard();
        let items = checklist_with_total(37);

        let first = engine.calculate(&items, "looking sharp").unwrap();
        let second = engine.calculate(&items, "looking sharp").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_checklist_rejected() {
        let engine = ScoreEngine::standard();
        let err = engine.calculate(&[], "").unwrap_err();
        assert!(matches!(err, StorageError::Validation(_)));
    }

    #[test]
    fn test_out_of_range_score_rejected() {
        let engine = ScoreEngine::standard();

        for bad in [-1, 4] {
            let mut items = full_checklist(2);
            items[0].score = bad;
            let err = engine.calculate(&items, "").unwrap_err();
            assert!(matches!(err, StorageError::Validation(_)), "score {bad}");
        }
    }

    #[test]
    fn test_unknown_item_rejected() {
        let engine = ScoreEngine::standard();
        let mut items = full_checklist(2);
        items[0].name = "Cape".to_string();

        let err = engine.calculate(&items, "").unwrap_err();
        assert!(matches!(err, StorageError::Validation(_)));
    }

    #[test]
    fn test_duplicate_item_rejected() {
        let engine = ScoreEngine::standard();
        let mut items = full_checklist(2);
        items[1] = items[0].clone();

        let err = engine.calculate(&items, "").unwrap_err();
        assert!(matches!(err, StorageError::Validation(_)));
    }

    #[test]
    fn test_missing_item_rejected() {
        let engine = ScoreEngine::standard();
        let mut items = full_checklist(2);
        items.pop();

        let err = engine.calculate(&items, "").unwrap_err();
        assert!(matches!(err, StorageError::Validation(_)));
    }

    #[test]
    fn test_comments_combined_in_order() {
        let engine = ScoreEngine::standard();
        let mut items = full_checklist(3);
        items[0].comment = "needs a trim".to_string();
        items[18].comment = " slouching ".to_string();

        let result = engine.calculate(&items, "overall solid").unwrap();
        assert_eq!(
            result.comments,
            "Personal Appearance - needs a trim | Military Bearing - slouching | Overall: overall solid"
        );
    }

    #[test]
    fn test_comments_truncated_to_255_chars() {
        let engine = ScoreEngine::standard();
        let mut items = full_checklist(3);
        for item in items.iter_mut() {
            item.comment = "x".repeat(40);
        }

        let result = engine.calculate(&items, "").unwrap();
        assert_eq!(result.comments.chars().count(), 255);
    }

    #[test]
    fn test_synthetic_catalog_keeps_canonical_breakpoints() {
        // A two-item catalog maxes out at 6 points, which the fixed scale
        // still grades as Unacceptable.
        let catalog = ChecklistCatalog::new(vec![ChecklistSection {
            name: "Synthetic".to_string(),
            items: vec!["One".to_string(), "Two".to_string()],
        }]);
        let engine = ScoreEngine::new(catalog);

        let items = vec![
            item("Synthetic", "One", 3, ""),
            item("Synthetic", "Two", 3, ""),
        ];
        let result = engine.calculate(&items, "").unwrap();
        assert_eq!(result.total, 6);
        assert_eq!(result.rating, Rating::Unacceptable);
    }

    #[test]
    fn test_standard_catalog_has_twenty_items() {
        assert_eq!(ChecklistCatalog::standard().item_count(), 20);
    }
}
