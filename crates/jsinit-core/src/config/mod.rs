//! Configuration read from the environment

pub mod package_manager;

pub use package_manager::{package_manager_from_env, PackageManager, PackageManagerChoice};
