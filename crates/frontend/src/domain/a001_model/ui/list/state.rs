use crate::shared::catalog::CatalogListState;
use crate::shared::remote::RemoteList;
use contracts::domain::a001_model::{ModelDetail, ModelExtra};

pub type ModelListState = CatalogListState<ModelExtra>;

/// Models never promote translations by status
pub fn create_state() -> ModelListState {
    CatalogListState::new(false)
}

pub fn create_details() -> RemoteList<ModelDetail> {
    RemoteList::new()
}
