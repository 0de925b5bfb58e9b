pub mod catalog;
pub mod dashboard;
pub mod editor;
pub mod post_service;
