//! HTTP form surface.
//!
//! Serves the summarizer as a small web form: a free-text query field, a
//! selector listing every known code, and a result area with a PDF
//! download link when resolution succeeds.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/` | Form page; renders the resolution when `query`/`code` params are present |
//! | `GET`  | `/export/{code}` | PDF download for a resolved code |
//! | `GET`  | `/health` | Health check (returns version) |
//!
//! Free text takes precedence over the selector when both are submitted.
//! User-supplied text is HTML-escaped before interpolation.

use axum::{
    extract::{Path, Query},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::export::{build_pdf, export_filename};
use crate::kb::KnowledgeBase;
use crate::resolve::{resolve, resolve_selection, Resolution, EMPTY_QUERY_MESSAGE, NOT_FOUND_MESSAGE};

/// Shared application state passed to all route handlers.
#[derive(Clone)]
struct AppState {
    #[allow(dead_code)]
    config: Arc<Config>,
}

/// Starts the form server.
///
/// Binds to the address configured in `[server].bind` and runs until the
/// process is terminated.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let bind_addr = config.server.bind.clone();
    let state = AppState {
        config: Arc::new(config.clone()),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(handle_index))
        .route("/export/{code}", get(handle_export))
        .route("/health", get(handle_health))
        .layer(cors)
        .with_state(state);

    println!("AS Summarizer listening on http://{}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============ GET /health ============

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============ GET / ============

/// Query-string parameters of the form submission.
#[derive(Deserialize, Default)]
struct FormParams {
    /// Free-text query ("Summarize AS 10").
    query: Option<String>,
    /// Explicit selection from the code dropdown.
    code: Option<String>,
}

async fn handle_index(Query(params): Query<FormParams>) -> Html<String> {
    let query = params.query.as_deref().unwrap_or("").trim();
    let code = params.code.as_deref().unwrap_or("").trim();
    let submitted = params.query.is_some() || params.code.is_some();

    let result_html = if !submitted {
        String::new()
    } else if !query.is_empty() {
        render_resolution(&resolve(query))
    } else if !code.is_empty() {
        render_resolution(&resolve_selection(code))
    } else {
        format!(
            r#"<p class="warning">{}</p>"#,
            html_escape(EMPTY_QUERY_MESSAGE)
        )
    };

    Html(render_page(query, code, &result_html))
}

fn render_page(query: &str, selected: &str, result_html: &str) -> String {
    let kb = KnowledgeBase::global();
    let mut options = String::from(r#"<option value="">Select an AS</option>"#);
    for entry_code in kb.codes() {
        let chosen = if entry_code.eq_ignore_ascii_case(selected) {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            r#"<option value="{0}"{1}>{0}</option>"#,
            html_escape(entry_code),
            chosen
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>AS Summarizer</title>
<style>
body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }}
input[type=text] {{ width: 100%; padding: 0.4rem; }}
.warning {{ color: #a00; }}
.summary {{ white-space: pre-wrap; }}
</style>
</head>
<body>
<h1>Accounting Standards (AS) Summarizer</h1>
<p>Get quick summaries of ICAI Accounting Standards. Ask questions like
"Summarize AS 10" or "Explain AS 12 with example".</p>
<form method="get" action="/">
<p><label>Type an AS query:<br><input type="text" name="query" value="{query}" placeholder="e.g. Summarize AS 10 or Explain AS 2"></label></p>
<p><label>Or select from list:<br><select name="code">{options}</select></label></p>
<p><button type="submit">Get Summary</button></p>
</form>
{result_html}
</body>
</html>
"#,
        query = html_escape(query),
        options = options,
        result_html = result_html,
    )
}

/// Render the result area. The export link appears only on success.
fn render_resolution(resolution: &Resolution) -> String {
    match resolution.code {
        Some(code) => {
            let mut html = format!(
                r#"<hr><h2>{}</h2><p class="summary">{}</p>"#,
                html_escape(code),
                html_escape(resolution.summary)
            );
            if !resolution.examples.is_empty() {
                html.push_str("<h3>Real-life Examples</h3><ol>");
                for example in resolution.examples {
                    html.push_str(&format!("<li>{}</li>", html_escape(example)));
                }
                html.push_str("</ol>");
            }
            html.push_str(&format!(
                r#"<p><a href="/export/{}">Download Summary as PDF</a></p>"#,
                urlencode(code)
            ));
            html
        }
        None => format!(
            r#"<hr><p class="warning">{}</p>"#,
            html_escape(resolution.summary)
        ),
    }
}

// ============ GET /export/{code} ============

async fn handle_export(Path(code): Path<String>) -> Response {
    let entry = match KnowledgeBase::global().get(&code) {
        Some(entry) => entry,
        None => {
            return (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_string()).into_response();
        }
    };

    match build_pdf(entry) {
        Ok(bytes) => {
            let disposition =
                format!("attachment; filename=\"{}\"", export_filename(entry.code));
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "application/pdf".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                bytes,
            )
                .into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("export failed: {}", e),
        )
            .into_response(),
    }
}

// ============ helpers ============

fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encode a code for use in the export path ("AS 1" → "AS%201").
fn urlencode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_lists_every_code() {
        let page = render_page("", "", "");
        for entry_code in KnowledgeBase::global().codes() {
            assert!(page.contains(&format!(">{}<", entry_code)));
        }
        assert!(page.contains("Select an AS"));
    }

    #[test]
    fn test_selected_code_is_marked() {
        let page = render_page("", "AS 10", "");
        assert!(page.contains(r#"<option value="AS 10" selected>AS 10</option>"#));
    }

    #[test]
    fn test_success_renders_export_link() {
        let html = render_resolution(&resolve("Summarize AS 10"));
        assert!(html.contains("AS 10: Property, Plant and Equipment"));
        assert!(html.contains(r#"href="/export/AS%2010""#));
        assert!(html.contains("<ol>"));
    }

    #[test]
    fn test_not_found_has_no_export_link() {
        let html = render_resolution(&resolve("AS 99"));
        // Apostrophes in the warning are escaped, so match around them.
        assert!(html.contains("find a summary for that AS."));
        assert!(!html.contains("/export/"));
    }

    #[test]
    fn test_query_is_escaped() {
        let page = render_page("<script>alert(1)</script>", "", "");
        assert!(!page.contains("<script>alert"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_urlencode_spaces() {
        assert_eq!(urlencode("AS 1"), "AS%201");
    }
}
