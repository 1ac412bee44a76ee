use axum::{
    Form, Router,
    extract::{Path, Query, State},
    http::{HeaderName, HeaderValue},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;
use url::Url;

use crate::AppState;
use crate::config::AppConfig;
use crate::error::ServerError;
use crate::navigation::NAVIGATION;
use crate::shell::{MobileMenu, NavigationShell, ShellEventForm};
use crate::ui;

/// HTMX response header updating the browser location.
pub const HX_PUSH_URL: HeaderName = HeaderName::from_static("hx-push-url");

/// Browser path of the page showing `tab`, with the id encoded as a single
/// path segment so `/`, `?`, `#` and `%` survive the trip back through
/// `/{tab}`.
///
/// `None` for ids no path segment can carry: the empty id and the dot
/// segments, which browsers normalise away.
pub fn tab_location(tab: &str) -> Option<String> {
    if matches!(tab, "" | "." | "..") {
        return None;
    }
    let mut url = Url::parse("http://localhost/").ok()?;
    url.path_segments_mut().ok()?.pop_if_empty().push(tab);
    Some(url.path().to_owned())
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let static_dir = state.config.server.static_dir.clone();

    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route(ui::EVENTS_PATH, post(shell_event))
        .route("/{tab}", get(tab_page))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let addr = config.bind_address();
    let app = router(AppState {
        config: Arc::clone(&config),
    });

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        default_tab = %config.shell.default_tab,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// GET / - Redirect to the default section.
async fn index(State(state): State<AppState>) -> Redirect {
    let location = tab_location(&state.config.shell.default_tab)
        .unwrap_or_else(|| format!("/{}", NAVIGATION[0].id));
    Redirect::to(&location)
}

/// GET /healthz
async fn healthz() -> &'static str {
    "ok"
}

/// Query parameters for section pages.
#[derive(Debug, Deserialize)]
struct PageQuery {
    /// Mobile drawer state; closed when absent.
    #[serde(default)]
    menu: MobileMenu,
}

/// GET /{tab} - Full document for a section.
async fn tab_page(
    State(state): State<AppState>,
    Path(tab): Path<String>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    Html(ui::render_document(&state.config.shell, &tab, query.menu))
}

/// POST /shell/events - Replay one interaction and re-render the shell.
///
/// The handler plays the parent: its tab-change callback records the requested
/// tab, which then becomes the active tab of the re-rendered shell.
async fn shell_event(
    State(state): State<AppState>,
    Form(form): Form<ShellEventForm>,
) -> Result<Response, ServerError> {
    let event = form.event()?;

    let mut requested: Option<String> = None;
    let menu = {
        let mut shell = NavigationShell::new(form.active_tab.as_str(), |tab: &str| {
            requested = Some(tab.to_owned());
        })
        .with_menu(form.menu);
        shell.dispatch(&event);
        shell.menu()
    };

    let active_tab = requested.as_deref().unwrap_or(&form.active_tab);
    let html = ui::render_shell(&state.config.shell, active_tab, menu);
    let mut response = Html(html).into_response();

    if let Some(tab) = &requested {
        match tab_location(tab).map(|location| HeaderValue::from_str(&location)) {
            Some(Ok(location)) => {
                response.headers_mut().insert(HX_PUSH_URL, location);
            }
            Some(Err(e)) => {
                tracing::warn!(tab = %tab, error = %e, "Tab location is not a valid header");
            }
            None => {
                tracing::debug!(tab = %tab, "Tab has no addressable location; history not updated");
            }
        }
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_location_plain_ids() {
        for item in &NAVIGATION {
            assert_eq!(tab_location(item.id), Some(format!("/{}", item.id)));
        }
    }

    #[test]
    fn test_tab_location_encodes_one_segment() {
        assert_eq!(tab_location("a/b").as_deref(), Some("/a%2Fb"));
        assert_eq!(tab_location("x?menu=open").as_deref(), Some("/x%3Fmenu=open"));
        assert_eq!(tab_location("q#frag").as_deref(), Some("/q%23frag"));
        assert_eq!(tab_location("50%").as_deref(), Some("/50%25"));
        assert_eq!(tab_location("two words").as_deref(), Some("/two%20words"));
    }

    #[test]
    fn test_tab_location_unaddressable_ids() {
        assert_eq!(tab_location(""), None);
        assert_eq!(tab_location("."), None);
        assert_eq!(tab_location(".."), None);
    }
}
