mod loading;
mod not_found;
mod report;
mod report_app;
mod search;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use loading::LoadingView;
pub use not_found::NotFoundView;
pub use report::ReportView;
pub use report_app::ReportApp;
#[cfg(test)]
pub(crate) use report_app::ReportTestHandles;
pub use search::SearchView;
