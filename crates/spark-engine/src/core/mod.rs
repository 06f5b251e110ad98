pub mod settings;
pub mod time;
