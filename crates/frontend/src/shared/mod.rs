pub mod api_utils;
pub mod catalog;
pub mod components;
pub mod date_utils;
pub mod fetch;
pub mod icons;
pub mod language_service;
pub mod list_utils;
pub mod number_format;
pub mod page_frame;
pub mod page_standard;
pub mod remote;
