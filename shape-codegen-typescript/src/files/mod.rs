//! Files written to the destination directory.

mod tsconfig;
mod unit_file;

pub use tsconfig::TsConfig;
pub use unit_file::UnitFile;
