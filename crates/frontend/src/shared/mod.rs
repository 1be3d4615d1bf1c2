pub mod api_utils;
pub mod cascade;
pub mod components;
pub mod date_utils;
pub mod fetch;
pub mod filter_utils;
pub mod options;
pub mod pagination;
pub mod select;
