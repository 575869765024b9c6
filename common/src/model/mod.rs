pub mod design;
pub mod settings;
pub mod template;
pub mod user;
