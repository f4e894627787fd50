pub mod market_data_service;
pub mod export_service;
pub mod health_service;

pub use market_data_service::MarketDataService;
pub use export_service::{ ExportService, UserDataExport };
pub use health_service::{ HealthService, SystemHealth };
