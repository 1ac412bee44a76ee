use std::path::PathBuf;
use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use zava_ar::AppState;
use zava_ar::config::{AppConfig, ServerConfig, ShellConfig};
use zava_ar::server::router;
use zava_ar::shell::{MobileMenu, ShellEvent, ShellEventForm, ShellEventKind};

fn test_server() -> TestServer {
    let config = AppConfig {
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
            static_dir: PathBuf::from("static"),
        },
        shell: ShellConfig::default(),
    };
    TestServer::new(router(AppState {
        config: Arc::new(config),
    }))
    .expect("Failed to build test server")
}

fn form(event: &ShellEvent, active_tab: &str, menu: MobileMenu) -> ShellEventForm {
    ShellEventForm::new(event, active_tab, menu)
}

#[tokio::test]
async fn test_root_redirects_to_default_tab() {
    let server = test_server();

    let response = server.get("/").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/dashboard");
}

#[tokio::test]
async fn test_healthz() {
    let server = test_server();
    let response = server.get("/healthz").await;
    response.assert_status_ok();
    response.assert_text("ok");
}

#[tokio::test]
async fn test_tab_page_renders_document() {
    let server = test_server();

    let response = server.get("/dashboard").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"data-active-tab="dashboard""#));
    assert!(html.contains(r#"data-menu="closed""#));
    assert!(!html.contains(r#"id="mobile-menu""#));
    assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);
}

#[tokio::test]
async fn test_tab_page_with_open_menu() {
    let server = test_server();

    let response = server.get("/payments").add_query_param("menu", "open").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains(r#"id="mobile-menu""#));
    assert!(html.contains(r#"data-menu="open""#));
}

#[tokio::test]
async fn test_unknown_tab_is_not_an_error() {
    let server = test_server();

    let response = server.get("/unknown-tab").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Section not found"));
    assert!(!html.contains(r#"aria-current="page""#));
}

#[tokio::test]
async fn test_desktop_nav_changes_tab_and_keeps_menu() {
    let server = test_server();
    let event = ShellEvent::DesktopNav {
        tab: "invoices".into(),
    };

    let response = server
        .post("/shell/events")
        .form(&form(&event, "dashboard", MobileMenu::Open))
        .await;
    response.assert_status_ok();
    assert_eq!(response.header("hx-push-url"), "/invoices");

    let html = response.text();
    assert!(html.starts_with("<div"));
    assert!(html.contains(r#"data-active-tab="invoices""#));
    assert!(html.contains(r#"data-menu="open""#));
}

#[tokio::test]
async fn test_mobile_toggle_flips_menu_only() {
    let server = test_server();

    let opened = server
        .post("/shell/events")
        .form(&form(&ShellEvent::MobileToggle, "payments", MobileMenu::Closed))
        .await;
    opened.assert_status_ok();
    assert!(opened.maybe_header("hx-push-url").is_none());
    let html = opened.text();
    assert!(html.contains(r#"data-menu="open""#));
    assert!(html.contains(r#"data-active-tab="payments""#));

    let closed = server
        .post("/shell/events")
        .form(&form(&ShellEvent::MobileToggle, "payments", MobileMenu::Open))
        .await;
    assert!(closed.text().contains(r#"data-menu="closed""#));
}

#[tokio::test]
async fn test_mobile_nav_selects_tab_and_closes_menu() {
    let server = test_server();
    let event = ShellEvent::MobileNav {
        tab: "analytics".into(),
    };

    let response = server
        .post("/shell/events")
        .form(&form(&event, "payments", MobileMenu::Open))
        .await;
    response.assert_status_ok();
    assert_eq!(response.header("hx-push-url"), "/analytics");

    let html = response.text();
    assert!(html.contains(r#"data-active-tab="analytics""#));
    assert!(html.contains(r#"data-menu="closed""#));
    assert!(!html.contains(r#"id="mobile-menu""#));
}

#[tokio::test]
async fn test_nav_event_without_tab_is_rejected() {
    let server = test_server();
    let body = ShellEventForm {
        event: ShellEventKind::MobileNav,
        tab: None,
        active_tab: "payments".into(),
        menu: MobileMenu::Open,
    };

    let response = server.post("/shell/events").form(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_pushed_url_reloads_the_same_tab() {
    let server = test_server();

    for tab in ["a/b", "x?menu=open", "q#frag", "50% paid"] {
        let event = ShellEvent::DesktopNav { tab: tab.into() };
        let response = server
            .post("/shell/events")
            .form(&form(&event, "dashboard", MobileMenu::Closed))
            .await;
        response.assert_status_ok();

        let pushed = response
            .header("hx-push-url")
            .to_str()
            .expect("pushed url is ascii")
            .to_owned();

        let reloaded = server.get(&pushed).await;
        reloaded.assert_status_ok();

        let html = reloaded.text();
        let expected = format!(r#"data-active-tab="{tab}""#);
        assert!(html.contains(&expected), "{tab} pushed as {pushed}");
        assert!(html.contains(r#"data-menu="closed""#), "{tab} pushed as {pushed}");
    }
}

#[tokio::test]
async fn test_empty_tab_is_not_pushed() {
    let server = test_server();
    let event = ShellEvent::MobileNav { tab: String::new() };

    let response = server
        .post("/shell/events")
        .form(&form(&event, "payments", MobileMenu::Open))
        .await;
    response.assert_status_ok();
    assert!(response.maybe_header("hx-push-url").is_none());

    let html = response.text();
    assert!(html.contains(r#"data-active-tab="""#));
    assert!(html.contains(r#"data-menu="closed""#));
}
