//! Reports module - period summaries for export.

mod reports_model;
mod reports_service;
mod reports_traits;

pub use reports_model::FinancialReport;
pub use reports_service::ReportService;
pub use reports_traits::ReportServiceTrait;
