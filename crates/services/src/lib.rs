#![forbid(unsafe_code)]

pub mod controller;
pub mod error;
pub mod report_service;
pub mod source;

pub use controller::{FetchTicket, ReportController, TicketStatus, ViewState};
pub use error::LoadError;
pub use report_service::ReportService;
pub use source::{DatasetSource, FileDatasetSource, HttpDatasetSource, StaticDatasetSource};
