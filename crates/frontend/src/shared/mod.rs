pub mod api_client;
pub mod api_utils;
pub mod components;
pub mod data_table;
pub mod date_utils;
pub mod dialogs;
pub mod icons;
pub mod list_state;
pub mod number_format;
