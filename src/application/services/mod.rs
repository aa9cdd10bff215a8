/// Module containing the harvesting service for posts, graphs and searches
pub mod harvest_service;

pub use harvest_service::HarvestServiceImpl;
