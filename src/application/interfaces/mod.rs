/// Paginated remote calls
pub mod api;
/// Harvesting service interface
pub mod harvest;
