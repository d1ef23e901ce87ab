pub mod book;
pub mod logging;
pub mod settings;
