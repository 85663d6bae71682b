use crate::shared::catalog::CatalogListState;
use crate::shared::remote::RemoteList;
use contracts::domain::a002_dimension::DimensionModelSummary;

pub type DimensionListState = CatalogListState<()>;

pub fn create_state() -> DimensionListState {
    CatalogListState::new(false)
}

pub fn create_models() -> RemoteList<DimensionModelSummary> {
    RemoteList::new()
}
