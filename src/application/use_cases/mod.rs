/// Use cases module containing application business logic orchestration
mod generate_advanced_report;
mod generate_report;
mod lookup_gavs;

pub use generate_advanced_report::GenerateAdvancedReportUseCase;
pub use generate_report::GenerateReportUseCase;
pub use lookup_gavs::LookupGavsUseCase;
