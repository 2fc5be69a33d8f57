//! Request handlers for the dashboard.

use crate::error::DashboardError;
use crate::lists::{ItemList, ListRenderer, RenderContext};
use crate::state::AppState;
use crate::templates::{self, escape_html};
use crate::urls;
use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::Html,
};

/// Query parameters shared by the list pages.
#[derive(Debug, serde::Deserialize)]
pub struct ListQuery {
    pub db: Option<String>,
    pub table: Option<String>,
    /// Set by the client when an asynchronous request reloads the whole
    /// page rather than inserting rows.
    #[serde(default)]
    pub ajax_page_request: bool,
}

fn is_ajax(headers: &HeaderMap) -> bool {
    headers
        .get("x-requested-with")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.eq_ignore_ascii_case("XMLHttpRequest"))
}

fn list_context(
    state: &AppState,
    query: &ListQuery,
    headers: &HeaderMap,
    table: Option<String>,
) -> RenderContext {
    RenderContext {
        db: query
            .db
            .clone()
            .unwrap_or_else(|| state.default_db().to_string()),
        table,
        ajax: is_ajax(headers),
        ajax_page_request: query.ajax_page_request,
    }
}

/// Render a list either as a full page or, for asynchronous requests,
/// as the bare fragment.
async fn render_list_page(
    state: &AppState,
    items: ItemList,
    ctx: RenderContext,
) -> Result<Html<String>, DashboardError> {
    let title = items.title();
    let renderer = ListRenderer::new(state.privileges(), state.adapter(), state.titles());
    let fragment = renderer.render_list(&items, &ctx).await?;
    Ok(Html(if ctx.ajax {
        fragment
    } else {
        templates::layout(title, &fragment)
    }))
}

/// Handler for the home page.
pub async fn home(State(state): State<AppState>) -> Html<String> {
    let db = state.default_db();
    let content = format!(
        r##"<div class="mb-8">
            <h1 class="text-3xl font-bold text-gray-900">Stored programs</h1>
            <p class="mt-2 text-gray-600">Database <code class="bg-gray-200 px-2 py-1 rounded">{db}</code></p>
        </div>
        <div class="flex gap-4">
            <a href="{routines}" class="bg-white border border-gray-200 rounded-xl px-6 py-4 shadow-sm hover:bg-gray-100 transition-colors">
                <i class="fas fa-gears"></i> Routines
            </a>
            <a href="{triggers}" class="bg-white border border-gray-200 rounded-xl px-6 py-4 shadow-sm hover:bg-gray-100 transition-colors">
                <i class="fas fa-bolt"></i> Triggers
            </a>
            <a href="{events}" class="bg-white border border-gray-200 rounded-xl px-6 py-4 shadow-sm hover:bg-gray-100 transition-colors">
                <i class="fas fa-clock"></i> Events
            </a>
        </div>"##,
        db = escape_html(db),
        routines = urls::build(urls::DB_ROUTINES, &[("db", db)]),
        triggers = urls::build(urls::DB_TRIGGERS, &[("db", db)]),
        events = urls::build(urls::DB_EVENTS, &[("db", db)]),
    );
    Html(templates::layout("Home", &content))
}

/// Handler for the routine list.
pub async fn routines(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
    headers: HeaderMap,
) -> Result<Html<String>, DashboardError> {
    let ctx = list_context(&state, &query, &headers, None);
    let items = ItemList::Routines(state.adapter().list_routines(&ctx.db).await?);
    render_list_page(&state, items, ctx).await
}

/// Handler for the database-level trigger list.
pub async fn database_triggers(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
    headers: HeaderMap,
) -> Result<Html<String>, DashboardError> {
    let ctx = list_context(&state, &query, &headers, None);
    let items = ItemList::Triggers(state.adapter().list_triggers(&ctx.db, None).await?);
    render_list_page(&state, items, ctx).await
}

/// Handler for the table-level trigger list.
pub async fn table_triggers(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
    headers: HeaderMap,
) -> Result<Html<String>, DashboardError> {
    let table = query
        .table
        .clone()
        .ok_or_else(|| DashboardError::InvalidRequest("table parameter is required".into()))?;
    let ctx = list_context(&state, &query, &headers, Some(table));
    let items = ItemList::Triggers(
        state
            .adapter()
            .list_triggers(&ctx.db, ctx.table.as_deref())
            .await?,
    );
    render_list_page(&state, items, ctx).await
}

/// Handler for the event list.
pub async fn events(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
    headers: HeaderMap,
) -> Result<Html<String>, DashboardError> {
    let ctx = list_context(&state, &query, &headers, None);
    let items = ItemList::Events(state.adapter().list_events(&ctx.db).await?);
    render_list_page(&state, items, ctx).await
}

/// Query parameters for the generic SQL endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct SqlQuery {
    pub sql_query: String,
    pub goto: Option<String>,
}

/// Handler for the generic SQL endpoint the drop links submit to.
pub async fn sql(
    State(state): State<AppState>,
    Query(query): Query<SqlQuery>,
) -> Result<Html<String>, DashboardError> {
    if query.sql_query.trim().is_empty() {
        return Err(DashboardError::InvalidRequest(
            "sql_query parameter is required".into(),
        ));
    }

    let affected = state.adapter().execute(&query.sql_query).await?;

    let back = query.goto.unwrap_or_else(|| "/".to_string());
    let content = format!(
        r##"<div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
            <p class="text-green-700 font-medium"><i class="fas fa-check"></i> Statement executed, {affected} row(s) affected.</p>
            <p class="mt-3"><code class="bg-gray-100 px-2 py-1 rounded text-sm">{statement}</code></p>
            <a href="{back}" class="mt-4 inline-block text-indigo-600 hover:underline">Back to list</a>
        </div>"##,
        affected = affected,
        statement = escape_html(&query.sql_query),
        back = escape_html(&back),
    );
    Ok(Html(templates::layout("SQL", &content)))
}
