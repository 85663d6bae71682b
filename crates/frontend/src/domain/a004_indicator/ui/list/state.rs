use crate::shared::catalog::CatalogListState;
use crate::shared::remote::RemoteList;
use contracts::domain::a004_indicator::{IndicatorExtra, IndicatorModelSummary};

pub type IndicatorListState = CatalogListState<IndicatorExtra>;

pub fn create_state() -> IndicatorListState {
    CatalogListState::new(true)
}

pub fn create_models() -> RemoteList<IndicatorModelSummary> {
    RemoteList::new()
}
