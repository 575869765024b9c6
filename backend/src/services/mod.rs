pub mod designs;
pub mod generation;
pub mod photos;
pub mod registry;
pub mod settings;
pub mod users;
