use std::sync::Arc;

use dioxus::core::{NoOpMutations, ScopeId};
use dioxus::prelude::*;
use report_core::ReportDataset;
use services::{DatasetSource, ReportService, StaticDatasetSource};

use crate::context::{UiApp, build_app_context};
use crate::views::{NotFoundView, ReportApp, ReportTestHandles, ReportView, SearchView};
use crate::vm::ReportVm;

pub const SCENARIO: &str = r#"{"students":{"김생글":{"studentInfo":{"name":"김생글","class":"A","reportTitle":"T","period":"P"},"skillsData":[{"name":"W1","score":70}],"sentences":["잘했어요"],"learningHistory":[{"date":"1/1","topic":"글쓰기","performance":"A"}],"nextGoals":["더 연습"],"teacherComment":"good job"}}}"#;

#[derive(Clone)]
struct TestApp {
    report_service: Arc<ReportService>,
}

impl UiApp for TestApp {
    fn report_service(&self) -> Arc<ReportService> {
        Arc::clone(&self.report_service)
    }
}

#[derive(Props, Clone)]
struct AppHarnessProps {
    app: Arc<TestApp>,
    handles: ReportTestHandles,
}

impl PartialEq for AppHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn AppHarness(props: AppHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { ReportApp {} }
}

#[component]
fn ReportHarness(report: ReportVm) -> Element {
    rsx! { ReportView { report, on_back: move |()| {} } }
}

#[component]
fn SearchHarness() -> Element {
    rsx! { SearchView { on_submit: move |_name: String| {} } }
}

#[component]
fn NotFoundHarness() -> Element {
    rsx! { NotFoundView { on_back: move |()| {} } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    handles: Option<ReportTestHandles>,
}

impl ViewHarness {
    /// Submit a name as if typed into the search form.
    pub fn submit(&mut self, name: &str) {
        let submit = self.report_handles().submit();
        let name = name.to_string();
        self.dom.in_scope(ScopeId::APP, || submit.call(name));
        drive_dom(&mut self.dom);
    }

    /// Press the back button on the not-found or report page.
    pub fn back(&mut self) {
        let back = self.report_handles().back();
        self.dom.in_scope(ScopeId::APP, || back.call(()));
        drive_dom(&mut self.dom);
    }

    fn report_handles(&self) -> &ReportTestHandles {
        self.handles.as_ref().expect("app harness has report handles")
    }

    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn scenario_dataset() -> ReportDataset {
    ReportDataset::from_json(SCENARIO).expect("scenario dataset")
}

pub fn setup_app_harness(source: Arc<dyn DatasetSource>) -> ViewHarness {
    let app = Arc::new(TestApp {
        report_service: Arc::new(ReportService::new(source)),
    });
    let handles = ReportTestHandles::default();
    let dom = VirtualDom::new_with_props(
        AppHarness,
        AppHarnessProps {
            app,
            handles: handles.clone(),
        },
    );
    ViewHarness {
        dom,
        handles: Some(handles),
    }
}

pub fn setup_static_app_harness() -> ViewHarness {
    setup_app_harness(Arc::new(StaticDatasetSource::new(scenario_dataset())))
}

pub fn setup_report_harness(report: ReportVm) -> ViewHarness {
    let dom = VirtualDom::new_with_props(ReportHarness, ReportHarnessProps { report });
    ViewHarness { dom, handles: None }
}

pub fn setup_search_harness() -> ViewHarness {
    ViewHarness {
        dom: VirtualDom::new(SearchHarness),
        handles: None,
    }
}

pub fn setup_not_found_harness() -> ViewHarness {
    ViewHarness {
        dom: VirtualDom::new(NotFoundHarness),
        handles: None,
    }
}
