pub mod alert;
pub mod badge;

pub use alert::ErrorAlert;
pub use badge::{Badge, StatusBadge};
