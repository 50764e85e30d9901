#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;
use services::{FetchTicket, ReportController, ViewState};

use crate::context::AppContext;
use crate::views::{LoadingView, NotFoundView, ReportView, SearchView};
use crate::vm::map_report;

/// Root of the report page. Owns the lookup controller for the session and
/// runs one dataset fetch per ticket it hands out.
#[component]
pub fn ReportApp() -> Element {
    let ctx = use_context::<AppContext>();
    let service = ctx.report_service();
    let (controller, initial_ticket) = use_hook(|| {
        let mut controller = ReportController::new();
        let ticket = controller.begin_initial_load();
        (Signal::new(controller), ticket)
    });

    let fetch = use_callback(move |ticket: FetchTicket| {
        let service = service.clone();
        let mut controller = controller;
        spawn(async move {
            let result = service.load_dataset().await;
            controller.write().apply(&ticket, result);
        });
    });

    use_hook(|| fetch.call(initial_ticket.clone()));

    let on_submit = use_callback(move |name: String| {
        let mut controller = controller;
        let ticket = controller.write().submit_name(name);
        fetch.call(ticket);
    });

    let on_back = use_callback(move |()| {
        let mut controller = controller;
        let ticket = controller.write().go_back();
        if let Some(ticket) = ticket {
            fetch.call(ticket);
        }
    });

    #[cfg(test)]
    {
        use_hook(|| {
            if let Some(handles) = try_consume_context::<ReportTestHandles>() {
                handles.register(on_submit, on_back);
            }
        });
    }

    let view = controller.read().view();

    rsx! {
        div { class: "report-root",
            match view {
                ViewState::Loading => rsx! {
                    LoadingView {}
                },
                ViewState::Searching => rsx! {
                    SearchView { on_submit }
                },
                ViewState::NotFound => rsx! {
                    NotFoundView { on_back }
                },
                ViewState::Displaying(report) => rsx! {
                    ReportView { report: map_report(&report), on_back }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ReportTestHandles {
    submit: Rc<RefCell<Option<Callback<String>>>>,
    back: Rc<RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl ReportTestHandles {
    pub(crate) fn register(&self, submit: Callback<String>, back: Callback<()>) {
        *self.submit.borrow_mut() = Some(submit);
        *self.back.borrow_mut() = Some(back);
    }

    pub(crate) fn submit(&self) -> Callback<String> {
        (*self.submit.borrow()).expect("report submit registered")
    }

    pub(crate) fn back(&self) -> Callback<()> {
        (*self.back.borrow()).expect("report back registered")
    }
}
