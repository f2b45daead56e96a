// Library for tests to access modules

pub mod config;
pub mod docker_repo;
pub mod error;
pub mod models;
pub mod routes;
pub mod store_repo;
pub mod sysinfo_repo;
pub mod traffic;
pub mod version;
pub mod version_resolver;
