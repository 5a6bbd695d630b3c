//! End-to-end session flow tests against the HTTP stub.

use legacymap_client::{
    AnalysisApiClient, AnalysisSession, ApiClientConfig, AppError, RiskLevel, ViewMode,
    SUMMARY_FAILURE_MESSAGE,
};

use crate::http_stub::spawn_stub;

const ANALYSIS_BODY: &str = r#"{
    "repo_id": "repo-1",
    "summary": {
        "total_files": 3,
        "total_functions": 10,
        "total_loc": 500,
        "average_risk_score": 2.4
    },
    "files": [
        {"path": "com/example/UserManager.java", "loc": 210,
         "imports_count": 6, "risk_score": 31.5, "risk_level": "HIGH"},
        {"path": "com/example/Report.java", "loc": 90,
         "imports_count": 2, "risk_score": 8.0, "risk_level": "LOW"}
    ],
    "functions": [
        {"name": "UserManager", "file": "com/example/UserManager.java", "type": "class"},
        {"name": "addUser", "file": "com/example/UserManager.java", "type": "function"},
        {"name": "render", "file": "com/example/Report.java", "type": "function"}
    ]
}"#;

const DETAIL_BODY: &str = r#"{
    "language": "java",
    "called_in": [
        {"file": "com/example/Main.java", "lines": [14, 27], "count": 2}
    ],
    "dependencies": ["User", "Logger"],
    "call_count": 2
}"#;

const SUMMARY_BODY: &str = r###"{"summary": "## Overview\nThe codebase is small but risky."}"###;

fn session_against(base_url: &str) -> AnalysisSession {
    let client = AnalysisApiClient::with_config(ApiClientConfig::for_base_url(base_url))
        .expect("client");
    AnalysisSession::with_client(client)
}

#[tokio::test]
async fn full_session_flow() {
    let base_url = spawn_stub(|method, path| match (method, path) {
        ("POST", "/upload-analyze") => (200, ANALYSIS_BODY.to_string()),
        ("GET", p) if p.starts_with("/function-details/repo-1/") => {
            (200, DETAIL_BODY.to_string())
        }
        ("POST", "/generate-summary/repo-1") => (200, SUMMARY_BODY.to_string()),
        _ => (404, r#"{"detail": "Not Found"}"#.to_string()),
    })
    .await;

    let mut session = session_against(&base_url);
    assert_eq!(session.mode(), ViewMode::Landing);

    session.start();
    session
        .stage_archive("project.zip", vec![0x50, 0x4b, 0x03, 0x04])
        .unwrap();
    session.submit_archive().await.unwrap();

    assert_eq!(session.mode(), ViewMode::Dashboard);
    let result = session.dashboard_content().expect("dashboard content");
    assert_eq!(result.repo_id, "repo-1");
    assert_eq!(result.summary.total_functions, 10);
    assert_eq!(result.files[0].risk_level, RiskLevel::High);

    // Derived views over the live result.
    let view = session.dashboard_view().expect("view");
    assert_eq!(view.filtered_functions("user").len(), 2);
    let top = view.top_risk_files(5);
    assert_eq!(top[0].path, "com/example/UserManager.java");

    // Detail enrichment merges onto the base record.
    let func = result.functions[1].clone();
    session.open_function(func).await.unwrap();
    let selected = session.details().selected().unwrap().expect("selection");
    assert_eq!(selected.record.name, "addUser");
    let detail = selected.detail.expect("merged detail");
    assert_eq!(detail.language, "java");
    assert_eq!(detail.call_count, 2);
    assert!(!session.details().is_loading().unwrap());

    session.close_details().unwrap();
    assert!(session.details().selected().unwrap().is_some());

    // Session-level summary enrichment.
    session.generate_summary().await.unwrap();
    let summary = session.summary().summary().unwrap().expect("summary");
    assert!(summary.starts_with("## Overview"));

    // Reset discards the result and every enrichment.
    session.reset().unwrap();
    assert_eq!(session.mode(), ViewMode::Upload);
    assert!(session.dashboard_content().is_none());
    assert!(session.details().selected().unwrap().is_none());
    assert!(session.summary().summary().unwrap().is_none());
}

#[tokio::test]
async fn upload_error_detail_is_surfaced_inline() {
    let base_url = spawn_stub(|method, path| match (method, path) {
        ("POST", "/upload-analyze") => {
            (400, r#"{"detail": "Only ZIP files are supported"}"#.to_string())
        }
        _ => (404, String::new()),
    })
    .await;

    let mut session = session_against(&base_url);
    session.start();
    session.stage_archive("project.zip", vec![1, 2, 3]).unwrap();

    let err = session.submit_archive().await.unwrap_err();
    assert!(matches!(err, AppError::Http { status: 400, .. }));

    // Inline message, staged input preserved, mode unchanged.
    assert_eq!(session.upload().error(), Some("Only ZIP files are supported"));
    assert_eq!(session.upload().staged().unwrap().name, "project.zip");
    assert_eq!(session.mode(), ViewMode::Upload);
}

#[tokio::test]
async fn upload_error_without_detail_falls_back_to_generic_message() {
    let base_url = spawn_stub(|method, path| match (method, path) {
        ("POST", "/upload-analyze") => (500, "not json".to_string()),
        _ => (404, String::new()),
    })
    .await;

    let mut session = session_against(&base_url);
    session.start();
    session.stage_archive("project.zip", vec![1]).unwrap();

    let err = session.submit_archive().await.unwrap_err();
    match err {
        AppError::Http { status, detail } => {
            assert_eq!(status, 500);
            assert_eq!(detail, "Analysis failed");
        }
        other => panic!("expected Http error, got {other}"),
    }
}

#[tokio::test]
async fn malformed_analysis_payload_is_rejected() {
    // 200 with a payload missing repo_id must fail parse-or-reject,
    // never produce a partially-populated result.
    let base_url = spawn_stub(|method, path| match (method, path) {
        ("POST", "/upload-analyze") => (200, r#"{"summary": {}}"#.to_string()),
        _ => (404, String::new()),
    })
    .await;

    let mut session = session_against(&base_url);
    session.start();
    session.stage_archive("project.zip", vec![1]).unwrap();

    let err = session.submit_archive().await.unwrap_err();
    assert!(matches!(err, AppError::InvalidResponse(_)));
    assert_eq!(session.mode(), ViewMode::Upload);
}

#[tokio::test]
async fn detail_fetch_http_failure_degrades_gracefully() {
    let base_url = spawn_stub(|method, path| match (method, path) {
        ("POST", "/upload-analyze") => (200, ANALYSIS_BODY.to_string()),
        ("GET", _) => (500, String::new()),
        _ => (404, String::new()),
    })
    .await;

    let mut session = session_against(&base_url);
    session.start();
    session.stage_archive("project.zip", vec![1]).unwrap();
    session.submit_archive().await.unwrap();

    let func = session.dashboard_content().unwrap().functions[1].clone();
    session.open_function(func).await.unwrap();

    // Base record still shown, no detail, no surfaced error.
    let selected = session.details().selected().unwrap().unwrap();
    assert_eq!(selected.record.name, "addUser");
    assert!(selected.detail.is_none());
    assert!(!session.details().is_loading().unwrap());
    assert!(session.details().is_open().unwrap());
}

#[tokio::test]
async fn summary_http_failure_sets_fixed_message() {
    let base_url = spawn_stub(|method, path| match (method, path) {
        ("POST", "/upload-analyze") => (200, ANALYSIS_BODY.to_string()),
        ("POST", _) => (500, String::new()),
        _ => (404, String::new()),
    })
    .await;

    let mut session = session_against(&base_url);
    session.start();
    session.stage_archive("project.zip", vec![1]).unwrap();
    session.submit_archive().await.unwrap();

    session.generate_summary().await.unwrap();
    assert_eq!(
        session.summary().summary().unwrap().as_deref(),
        Some(SUMMARY_FAILURE_MESSAGE)
    );
    assert!(!session.summary().is_generating().unwrap());
}

#[tokio::test]
async fn file_path_is_encoded_in_detail_request() {
    // The stub checks the exact path reqwest sends: the file identifier
    // must arrive as one encoded segment, the function name raw.
    let base_url = spawn_stub(|method, path| match (method, path) {
        ("POST", "/upload-analyze") => (200, ANALYSIS_BODY.to_string()),
        ("GET", "/function-details/repo-1/com%2Fexample%2FUserManager.java/addUser") => {
            (200, DETAIL_BODY.to_string())
        }
        _ => (404, String::new()),
    })
    .await;

    let mut session = session_against(&base_url);
    session.start();
    session.stage_archive("project.zip", vec![1]).unwrap();
    session.submit_archive().await.unwrap();

    let func = session.dashboard_content().unwrap().functions[1].clone();
    session.open_function(func).await.unwrap();

    let selected = session.details().selected().unwrap().unwrap();
    assert!(selected.detail.is_some(), "encoded route was not hit");
}
