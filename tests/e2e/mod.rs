pub mod configuration;
pub mod split_view;
