/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the reporting core isolated.
mod output_format;
mod report_request;
mod report_response;

pub use output_format::OutputFormat;
pub use report_request::{AdvancedReportRequest, LookupRequest, ReportRequest, ReportSubject};
pub use report_response::{AdvancedReportResponse, LookupResponse, ReportResponse};
