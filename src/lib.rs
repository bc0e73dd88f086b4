// Library for tests to access modules

pub mod config;
pub mod dashboard;
pub mod models;
pub mod routes;
pub mod upstream;
pub mod uptime;
pub mod version;
pub mod view;
