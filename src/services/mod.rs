pub mod map_service;
pub mod match_service;
pub mod profile_service;
pub mod venue_directory;

pub use map_service::{BrowserMapAdapter, MapAdapter, MapService};
pub use match_service::MatchService;
pub use profile_service::ProfileService;
pub use venue_directory::VenueDirectory;
