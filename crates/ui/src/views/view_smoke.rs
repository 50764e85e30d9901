use std::sync::Arc;

use report_core::{LookupKey, ReportDataset};
use services::{DatasetSource, LoadError};

use super::test_harness::{
    scenario_dataset, setup_app_harness, setup_not_found_harness, setup_report_harness,
    setup_search_harness, setup_static_app_harness,
};
use crate::vm::map_report;

#[test]
fn search_view_smoke_renders_form() {
    let mut harness = setup_search_harness();
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("생글방글 학생 리포트"), "missing title in {html}");
    assert!(
        html.contains("학생 이름을 정확히 입력해주세요"),
        "missing placeholder in {html}"
    );
    assert!(html.contains("리포트 보러가기"), "missing submit in {html}");
}

#[test]
fn not_found_view_smoke_renders_back_button() {
    let mut harness = setup_not_found_harness();
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("학생을 찾을 수 없어요"), "missing message in {html}");
    assert!(html.contains("다시 찾아볼까요?"), "missing back in {html}");
}

#[test]
fn report_view_smoke_renders_every_section() {
    let dataset = scenario_dataset();
    let report = dataset.resolve(&LookupKey::from("김생글")).unwrap();
    let mut harness = setup_report_harness(map_report(&report));
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "T",
        "P",
        "김생글",
        "글쓰기 성장 그래프",
        "W1",
        "70",
        "height: 100.0%",
        "김생글 학생이 쓴 멋진 문장이에요!",
        "잘했어요",
        "1/1",
        "글쓰기",
        "더 연습",
        "good job",
        "처음으로 돌아가기",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[test]
fn report_view_smoke_keeps_sentence_order() {
    let raw = super::test_harness::SCENARIO.replace(
        r#""sentences":["잘했어요"]"#,
        r#""sentences":["셋째 문장","첫째 문장","둘째 문장"]"#,
    );
    let dataset = ReportDataset::from_json(&raw).unwrap();
    let report = dataset.resolve(&LookupKey::from("김생글")).unwrap();
    let mut harness = setup_report_harness(map_report(&report));
    harness.rebuild();
    let html = harness.render();

    let third = html.find("셋째 문장").expect("third sentence");
    let first = html.find("첫째 문장").expect("first sentence");
    let second = html.find("둘째 문장").expect("second sentence");
    assert!(third < first && first < second, "order changed in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn report_app_smoke_shows_form_after_initial_load() {
    let mut harness = setup_static_app_harness();
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("불러오는 중이에요"), "missing loading in {html}");

    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("학생 이름을 정확히 입력해주세요"),
        "missing form in {html}"
    );
}

struct FailingSource;

#[async_trait::async_trait]
impl DatasetSource for FailingSource {
    fn describe(&self) -> String {
        "failing".to_string()
    }

    async fn load(&self) -> Result<ReportDataset, LoadError> {
        Err(LoadError::Io {
            path: "reportData.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        })
    }
}

#[tokio::test(flavor = "current_thread")]
async fn report_app_smoke_stays_loading_when_fetch_fails() {
    let mut harness = setup_app_harness(Arc::new(FailingSource));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("불러오는 중이에요"), "missing loading in {html}");
    assert!(
        !html.contains("학생 이름을 정확히 입력해주세요"),
        "form shown after failed load: {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn report_app_smoke_submit_report_and_back() {
    let mut harness = setup_static_app_harness();
    harness.rebuild();
    harness.drive_async().await;

    harness.submit("김생글");
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("good job"), "missing report in {html}");
    assert!(html.contains("처음으로 돌아가기"), "missing back in {html}");

    harness.back();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("학생 이름을 정확히 입력해주세요"),
        "missing form after back in {html}"
    );
    assert!(!html.contains("good job"), "report still shown: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn report_app_smoke_unknown_and_empty_names_are_not_found() {
    let mut harness = setup_static_app_harness();
    harness.rebuild();
    harness.drive_async().await;

    for name in ["없음", ""] {
        harness.submit(name);
        harness.drive_async().await;
        let html = harness.render();
        assert!(
            html.contains("학생을 찾을 수 없어요"),
            "{name:?}: missing not-found in {html}"
        );

        harness.back();
        harness.drive_async().await;
        let html = harness.render();
        assert!(
            html.contains("학생 이름을 정확히 입력해주세요"),
            "{name:?}: missing form in {html}"
        );
    }
}
