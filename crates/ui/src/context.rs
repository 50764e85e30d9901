use std::sync::Arc;

use services::ReportService;

pub trait UiApp: Send + Sync {
    fn report_service(&self) -> Arc<ReportService>;
}

#[derive(Clone)]
pub struct AppContext {
    report_service: Arc<ReportService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            report_service: app.report_service(),
        }
    }

    #[must_use]
    pub fn report_service(&self) -> Arc<ReportService> {
        Arc::clone(&self.report_service)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
