//! Rule settings source implementations.

mod env;
mod file;
mod settings_source;
mod static_source;

pub use env::EnvSource;
pub use file::FileSource;
pub use settings_source::SettingsSource;
pub use static_source::StaticSource;
