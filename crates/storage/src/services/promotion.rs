use std::collections::HashSet;

use tracing::info;
use uuid::Uuid;

use crate::Database;
use crate::dto::promotion::{PromotionOutlook, RequirementStatus};
use crate::error::{Result, StorageError};
use crate::models::{Rank, Requirement};
use crate::repository::cadet::CadetRepository;
use crate::repository::rank::RankRepository;
use crate::repository::requirement::RequirementRepository;

/// The rank a cadet currently holds: the awarded rank with the highest order.
/// Awards that no longer resolve to a catalog rank are ignored.
pub fn current_rank<'a>(member_rank_ids: &[Uuid], catalog: &'a [Rank]) -> Option<&'a Rank> {
    let awarded: HashSet<Uuid> = member_rank_ids.iter().copied().collect();

    catalog
        .iter()
        .filter(|r| awarded.contains(&r.rank_id))
        .max_by_key(|r| r.rank_order)
}

/// The next promotion target.
///
/// With a current rank, it is the catalog rank with the smallest order
/// strictly above it; `None` means the cadet holds the top rank. With no
/// current rank, it is the entry-level rank, or `None` on an empty catalog.
/// Duplicate order values mean the catalog is corrupted; refuse to guess
/// rather than silently pick one.
pub fn next_rank<'a>(member_rank_ids: &[Uuid], catalog: &'a [Rank]) -> Result<Option<&'a Rank>> {
    let mut orders = HashSet::new();
    for rank in catalog {
        if !orders.insert(rank.rank_order) {
            return Err(StorageError::DataIntegrity(format!(
                "rank catalog has duplicate order {} ('{}')",
                rank.rank_order, rank.name
            )));
        }
    }

    let next = match current_rank(member_rank_ids, catalog) {
        Some(current) => catalog
            .iter()
            .filter(|r| r.rank_order > current.rank_order)
            .min_by_key(|r| r.rank_order),
        None => catalog.iter().min_by_key(|r| r.rank_order),
    };

    Ok(next)
}

/// Flag each requirement complete iff a completion record exists for it,
/// preserving the input order.
pub fn classify_requirements(
    requirements: Vec<Requirement>,
    completed: &HashSet<Uuid>,
) -> Vec<RequirementStatus> {
    requirements
        .into_iter()
        .map(|r| RequirementStatus {
            complete: completed.contains(&r.requirement_id),
            requirement_id: r.requirement_id,
            name: r.name,
            description: r.description,
        })
        .collect()
}

/// A cadet's full promotion picture: current rank, next rank, and the status
/// of every requirement gating the next rank.
pub async fn promotion_outlook(db: &Database, cap_id: i64) -> Result<PromotionOutlook> {
    let cadet = CadetRepository::new(db.pool()).find_by_cap_id(cap_id).await?;

    let rank_repo = RankRepository::new(db.pool());
    let catalog = rank_repo.list_ordered().await?;
    let awarded = rank_repo.member_rank_ids(cadet.cadet_id).await?;

    let current = current_rank(&awarded, &catalog).cloned();
    let next = next_rank(&awarded, &catalog)?.cloned();

    let requirements = match &next {
        Some(rank) => {
            let req_repo = RequirementRepository::new(db.pool());
            let linked = req_repo.list_for_rank(rank.rank_id).await?;
            let completed = req_repo.completed_for_cadet(cadet.cadet_id).await?;
            classify_requirements(linked, &completed)
        }
        None => Vec::new(),
    };

    Ok(PromotionOutlook {
        cap_id,
        current_rank: current,
        next_rank: next,
        requirements,
    })
}

/// Mark or unmark a requirement for a cadet. Idempotent in both directions;
/// toggling toward the state that already holds is a no-op.
pub async fn toggle_requirement(
    db: &Database,
    cap_id: i64,
    requirement_id: Uuid,
    completed: bool,
) -> Result<()> {
    let cadet = CadetRepository::new(db.pool()).find_by_cap_id(cap_id).await?;

    RequirementRepository::new(db.pool())
        .set_completion(cadet.cadet_id, requirement_id, completed)
        .await?;

    info!(cap_id, %requirement_id, completed, "requirement toggled");

    Ok(())
}

/// Award a rank with replace semantics: the cadet's prior awards are cleared
/// and the new rank set within one transaction.
pub async fn set_rank(db: &Database, cap_id: i64, rank_id: Uuid) -> Result<()> {
    let cadet = CadetRepository::new(db.pool()).find_by_cap_id(cap_id).await?;

    RankRepository::new(db.pool())
        .set_cadet_rank(cadet.cadet_id, rank_id)
        .await?;

    info!(cap_id, %rank_id, "rank set");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(name: &str, order: i32) -> Rank {
        Rank {
            rank_id: Uuid::new_v4(),
            name: name.to_string(),
            rank_order: order,
        }
    }

    fn requirement(name: &str) -> Requirement {
        Requirement {
            requirement_id: Uuid::new_v4(),
            name: name.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_no_current_rank_targets_entry_rank() {
        let catalog = vec![rank("Airman", 1), rank("Sergeant", 2), rank("Chief", 5)];

        let next = next_rank(&[], &catalog).unwrap().unwrap();
        assert_eq!(next.rank_order, 1);
        assert_eq!(next.name, "Airman");
    }

    #[test]
    fn test_next_rank_is_smallest_strictly_greater_order() {
        let catalog = vec![rank("Airman", 1), rank("Sergeant", 2), rank("Chief", 5)];

        let next = next_rank(&[catalog[1].rank_id], &catalog).unwrap().unwrap();
        assert_eq!(next.rank_order, 5);
    }

    #[test]
    fn test_top_rank_has_no_next() {
        let catalog = vec![rank("Airman", 1), rank("Sergeant", 2), rank("Chief", 5)];

        assert!(next_rank(&[catalog[2].rank_id], &catalog).unwrap().is_none());
    }

    #[test]
    fn test_empty_catalog_has_no_next() {
        assert!(next_rank(&[], &[]).unwrap().is_none());
    }

    #[test]
    fn test_current_rank_is_highest_awarded_order() {
        let catalog = vec![rank("Airman", 1), rank("Sergeant", 2), rank("Chief", 5)];
        let awarded = vec![catalog[0].rank_id, catalog[1].rank_id];

        let current = current_rank(&awarded, &catalog).unwrap();
        assert_eq!(current.rank_order, 2);

        let next = next_rank(&awarded, &catalog).unwrap().unwrap();
        assert_eq!(next.rank_order, 5);
    }

    #[test]
    fn test_duplicate_orders_are_a_data_integrity_error() {
        let catalog = vec![rank("Airman", 1), rank("Imposter", 1)];

        let err = next_rank(&[], &catalog).unwrap_err();
        assert!(matches!(err, StorageError::DataIntegrity(_)));
    }

    #[test]
    fn test_awards_missing_from_catalog_are_ignored() {
        let catalog = vec![rank("Airman", 1), rank("Sergeant", 2)];

        let next = next_rank(&[Uuid::new_v4()], &catalog).unwrap().unwrap();
        assert_eq!(next.rank_order, 1);
    }

    #[test]
    fn test_classify_marks_completed_requirements() {
        let drill = requirement("Drill Test");
        let essay = requirement("Leadership Essay");
        let mut completed = HashSet::new();

        let statuses = classify_requirements(vec![drill.clone(), essay.clone()], &completed);
        assert_eq!(statuses.len(), 2);
        assert!(statuses.iter().all(|s| !s.complete));
        assert_eq!(statuses[0].name, "Drill Test");

        completed.insert(drill.requirement_id);
        let statuses = classify_requirements(vec![drill.clone(), essay], &completed);
        assert!(statuses[0].complete);
        assert!(!statuses[1].complete);
    }

    #[test]
    fn test_promotion_scenario_airman_to_sergeant() {
        let airman = rank("Airman", 1);
        let sergeant = rank("Sergeant", 2);
        let catalog = vec![airman.clone(), sergeant.clone()];

        let next = next_rank(&[airman.rank_id], &catalog).unwrap().unwrap();
        assert_eq!(next.rank_id, sergeant.rank_id);

        let drill = requirement("Drill Test");
        let statuses = classify_requirements(vec![drill.clone()], &HashSet::new());
        assert_eq!(statuses[0].name, "Drill Test");
        assert!(!statuses[0].complete);

        let completed: HashSet<Uuid> = [drill.requirement_id].into_iter().collect();
        let statuses = classify_requirements(vec![drill], &completed);
        assert!(statuses[0].complete);
    }
}
