pub mod dto;

pub use dto::{ModelDetail, ModelExtra, ModelRow, ModelTreeDto, UserTypeDto};
