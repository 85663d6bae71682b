use crate::shared::catalog::CatalogListState;
use crate::shared::remote::RemoteList;
use contracts::domain::a003_criterion::CriterionModelSummary;

pub type CriterionListState = CatalogListState<()>;

/// A translation with a matching status stands in for a root that fails the
/// status filter
pub fn create_state() -> CriterionListState {
    CatalogListState::new(true)
}

pub fn create_models() -> RemoteList<CriterionModelSummary> {
    RemoteList::new()
}
