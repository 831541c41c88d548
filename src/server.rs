//! HTTP front end.
//!
//! - `GET  /`: HTML form, plus the rendered words inline when given
//! - `GET  /svg`: the document as `image/svg+xml`
//! - `PUT  /svg`: same, words taken from a form body and the query string
//!
//! Parameters: `words` (repeatable, each value split on whitespace) and
//! `grid=1` to draw the debugging grid.

use axum::Router;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::engine::Engine;

/// Words and options parsed from a request.
#[derive(Debug, Clone, PartialEq, Eq)]
struct WordsRequest {
    words: Vec<String>,
    grid: bool,
}

impl WordsRequest {
    fn from_params(params: &[(String, String)], max_words: usize) -> Self {
        let mut words: Vec<String> = params
            .iter()
            .filter(|(key, _)| key == "words")
            .flat_map(|(_, value)| value.split_whitespace().map(str::to_string))
            .collect();
        words.truncate(max_words);
        let grid = params.iter().any(|(key, value)| key == "grid" && value == "1");
        Self { words, grid }
    }
}

/// Routes for `engine`.
pub fn router(engine: Engine) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/svg", get(svg).put(svg_put))
        .layer(TraceLayer::new_for_http())
        .with_state(engine)
}

/// Serve on `addr` until Ctrl-C.
pub async fn serve(engine: Engine, addr: &str) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        version = env!("CARGO_PKG_VERSION"),
        "firstones HTTP server listening"
    );
    axum::serve(listener, router(engine))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("received Ctrl-C, shutting down"),
        Err(e) => {
            tracing::error!(error = %e, "cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    }
}

type Params = Vec<(String, String)>;

async fn svg(State(engine): State<Engine>, Form(params): Form<Params>) -> Response {
    render_svg(&engine, &params)
}

/// Body parameters come first, then the query string. A body that is not
/// an urlencoded form is ignored.
async fn svg_put(
    State(engine): State<Engine>,
    Query(query): Query<Params>,
    body: Result<Form<Params>, FormRejection>,
) -> Response {
    let mut params = match body {
        Ok(Form(form)) => form,
        Err(e) => {
            tracing::debug!(error = %e, "ignoring PUT body");
            Vec::new()
        }
    };
    params.extend(query);
    render_svg(&engine, &params)
}

fn render_svg(engine: &Engine, params: &[(String, String)]) -> Response {
    let request = WordsRequest::from_params(params, engine.config().max_words);
    if request.words.is_empty() {
        return (StatusCode::BAD_REQUEST, "No words provided").into_response();
    }

    match engine.render_words(&request.words, request.grid) {
        Ok(rendered) => (
            [(header::CONTENT_TYPE, "image/svg+xml")],
            rendered.document.into_string(),
        )
            .into_response(),
        Err(e) => {
            tracing::debug!(error = %e, words = ?request.words, "rejected words");
            (
                StatusCode::BAD_REQUEST,
                format!("Error generating SVG: {}", error_chain(&e)),
            )
                .into_response()
        }
    }
}

async fn index(State(engine): State<Engine>, Form(params): Form<Params>) -> Html<String> {
    let request = WordsRequest::from_params(&params, engine.config().max_words);
    let result = if request.words.is_empty() {
        String::new()
    } else {
        match engine.render_words(&request.words, request.grid) {
            Ok(rendered) => rendered.document.into_string(),
            Err(e) => format!(
                "<p class=\"error\">Error: {}</p>\n",
                escape_html(&error_chain(&e))
            ),
        }
    };
    Html(page(&request, &result))
}

/// `error: cause: cause`, the way the messages read on the command line.
fn error_chain(e: &dyn std::error::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn page(request: &WordsRequest, result: &str) -> String {
    let words = escape_html(&request.words.join(" "));
    let checked = if request.grid { " checked" } else { "" };
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>First Ones</title>
<style>
  body {{ font-family: sans-serif; max-width: 50em; margin: 2em auto; }}
  svg {{ width: 100%; height: auto; }}
  .error {{ color: darkred; }}
</style>
</head>
<body>
<h1>First Ones</h1>
<form method="get" action="/">
  <input type="text" name="words" size="40" value="{words}" placeholder="SH-fEEt-R-All en:hello">
  <label><input type="checkbox" name="grid" value="1"{checked}> grid</label>
  <input type="submit" value="Render">
</form>
<p>Words are phonemes like <code>SH-fEEt/R-All</code>, or plain words with an
optional language prefix like <code>en:hello</code> or <code>es:ca/sa</code>.</p>
{result}
</body>
</html>
"#
    )
}
