//! Stored-program list views.
//!
//! One renderer, three variants. [`render_list`] builds the shared
//! shell (form, legend, empty-list placeholder, data table, bulk-action
//! control) and delegates each row to the variant's builder in
//! [`routines`], [`triggers`] or [`events`]. Privilege checks and
//! metadata lookups happen per row, through the injected collaborators.
//!
//! [`render_list`]: ListRenderer::render_list

pub mod events;
pub mod routines;
pub mod triggers;

use crate::error::DashboardError;
use crate::templates::{self, escape_html};
use crate::titles::TitleSet;
use crate::urls;
use marlin_core::{EventItem, MetadataStore, RoutineItem, TriggerItem};
use marlin_privileges::PrivilegeChecker;

/// The `id` of the list form, shared with the bulk-action control.
const FORM_ID: &str = "item-list-form";

/// Request-scoped values the renderer needs.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Database the list belongs to.
    pub db: String,
    /// Table scope. `None` means a database-level trigger list.
    pub table: Option<String>,
    /// Whether the response answers an asynchronous request.
    pub ajax: bool,
    /// Whether that asynchronous request reloads the whole page (as
    /// opposed to inserting rows into markup already on the client).
    pub ajax_page_request: bool,
}

impl RenderContext {
    /// Marker class for data rows. Rows inserted into an existing page
    /// start hidden so the client can reveal them without duplicates
    /// flickering in.
    pub fn row_class(&self) -> &'static str {
        if self.ajax && !self.ajax_page_request {
            "ajax-insert hide"
        } else {
            ""
        }
    }
}

/// The items of one list view.
#[derive(Debug, Clone)]
pub enum ItemList {
    Routines(Vec<RoutineItem>),
    Triggers(Vec<TriggerItem>),
    Events(Vec<EventItem>),
}

impl ItemList {
    pub fn len(&self) -> usize {
        match self {
            ItemList::Routines(items) => items.len(),
            ItemList::Triggers(items) => items.len(),
            ItemList::Events(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Legend title.
    pub fn title(&self) -> &'static str {
        match self {
            ItemList::Routines(_) => "Routines",
            ItemList::Triggers(_) => "Triggers",
            ItemList::Events(_) => "Events",
        }
    }

    /// Reference-manual chapter for the legend's documentation link.
    pub fn docs_chapter(&self) -> &'static str {
        match self {
            ItemList::Routines(_) => "stored-routines",
            ItemList::Triggers(_) => "triggers",
            ItemList::Events(_) => "event-scheduler",
        }
    }

    /// Message shown when the list is empty.
    pub fn empty_message(&self) -> &'static str {
        match self {
            ItemList::Routines(_) => "There are no routines to display.",
            ItemList::Triggers(_) => "There are no triggers to display.",
            ItemList::Events(_) => "There are no events to display.",
        }
    }

    /// Where the list form submits. Table-scoped trigger lists post to
    /// the table route, everything else to its database route.
    fn form_action(&self, ctx: &RenderContext) -> &'static str {
        match self {
            ItemList::Routines(_) => urls::DB_ROUTINES,
            ItemList::Triggers(_) => {
                if ctx.table.is_some() {
                    urls::TABLE_TRIGGERS
                } else {
                    urls::DB_TRIGGERS
                }
            }
            ItemList::Events(_) => urls::DB_EVENTS,
        }
    }
}

/// Renders the privilege-gated list views.
pub struct ListRenderer<'a> {
    pub(crate) privileges: &'a dyn PrivilegeChecker,
    pub(crate) metadata: &'a dyn MetadataStore,
    pub(crate) titles: &'a TitleSet,
}

impl<'a> ListRenderer<'a> {
    pub fn new(
        privileges: &'a dyn PrivilegeChecker,
        metadata: &'a dyn MetadataStore,
        titles: &'a TitleSet,
    ) -> Self {
        Self {
            privileges,
            metadata,
            titles,
        }
    }

    /// Render one list view as an HTML fragment.
    pub async fn render_list(
        &self,
        items: &ItemList,
        ctx: &RenderContext,
    ) -> Result<String, DashboardError> {
        // One of the two blocks is hidden: the placeholder when there
        // are items, the table when there are none.
        let (placeholder_class, table_class) = if items.is_empty() {
            ("", " hide")
        } else {
            (" hide", "")
        };

        let (header_cells, column_count) = Self::headers(items, ctx);
        let placeholder_cells = "            <td></td>\n".repeat(column_count);

        let row_class = ctx.row_class();
        let mut rows = String::new();
        match items {
            ItemList::Routines(routines) => {
                for routine in routines {
                    rows.push_str(&self.routine_row(routine, ctx, row_class).await?);
                }
            }
            ItemList::Triggers(triggers) => {
                for trigger in triggers {
                    rows.push_str(&self.trigger_row(trigger, ctx, row_class));
                }
            }
            ItemList::Events(events) => {
                for event in events {
                    rows.push_str(&self.event_row(event, ctx, row_class));
                }
            }
        }

        let bulk_actions = if items.is_empty() {
            String::new()
        } else {
            templates::select_all_control(FORM_ID)
        };

        Ok(format!(
            r##"<form id="{form_id}" class="ajax" action="{action}" method="post">
{hidden_fields}<fieldset class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
    <legend class="px-2 font-semibold text-gray-900">
        {title}
        {docs_link}
    </legend>
    <div class="nothing-to-display{placeholder_class} text-gray-500" id="nothing-to-display">
        {empty_message}
    </div>
    <table class="data-table min-w-full divide-y divide-gray-200{table_class}">
        <tr class="text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
{header_cells}        </tr>
        <tr class="hide">
{placeholder_cells}        </tr>
{rows}    </table>
    {bulk_actions}
</fieldset>
</form>
"##,
            form_id = FORM_ID,
            action = items.form_action(ctx),
            hidden_fields = urls::hidden_form_fields(&ctx.db, ctx.table.as_deref()),
            title = items.title(),
            docs_link = templates::mysql_docs_link(items.docs_chapter()),
            placeholder_class = placeholder_class,
            empty_message = items.empty_message(),
            table_class = table_class,
            header_cells = header_cells,
            placeholder_cells = placeholder_cells,
            rows = rows,
            bulk_actions = bulk_actions,
        ))
    }

    /// Header cells and total column count for a list. The hidden
    /// placeholder row must carry one `td` per column so colspans stay
    /// well-formed.
    fn headers(items: &ItemList, ctx: &RenderContext) -> (String, usize) {
        let mut cells = String::new();
        let mut columns = 0;
        match items {
            ItemList::Routines(_) => {
                push_th(&mut cells, &mut columns, "", 1);
                push_th(&mut cells, &mut columns, "Name", 1);
                push_th(&mut cells, &mut columns, "Action", 4);
                push_th(&mut cells, &mut columns, "Type", 1);
                push_th(&mut cells, &mut columns, "Returns", 1);
            }
            ItemList::Triggers(_) => {
                push_th(&mut cells, &mut columns, "", 1);
                push_th(&mut cells, &mut columns, "Name", 1);
                if ctx.table.is_none() {
                    push_th(&mut cells, &mut columns, "Table", 1);
                }
                push_th(&mut cells, &mut columns, "Action", 3);
                push_th(&mut cells, &mut columns, "Time", 1);
                push_th(&mut cells, &mut columns, "Event", 1);
            }
            ItemList::Events(_) => {
                push_th(&mut cells, &mut columns, "", 1);
                push_th(&mut cells, &mut columns, "Name", 1);
                push_th(&mut cells, &mut columns, "Status", 1);
                push_th(&mut cells, &mut columns, "Action", 3);
                push_th(&mut cells, &mut columns, "Type", 1);
            }
        }
        (cells, columns)
    }

    /// The cell holding an item's checkbox and hidden drop statement,
    /// shared by all three row builders.
    pub(crate) fn name_cells(name: &str, drop_sql: &str) -> String {
        format!(
            r##"            <td>
                <input type="checkbox" class="checkall" name="item_name[]" value="{name}">
            </td>
            <td>
                <span class="drop-sql hide">{drop_sql}</span>
                <strong>{name}</strong>
            </td>
"##,
            name = escape_html(name),
            drop_sql = escape_html(drop_sql),
        )
    }
}

fn push_th(cells: &mut String, columns: &mut usize, label: &str, colspan: usize) {
    if colspan > 1 {
        cells.push_str(&format!(
            "            <th colspan=\"{colspan}\">{label}</th>\n"
        ));
    } else {
        cells.push_str(&format!("            <th>{label}</th>\n"));
    }
    *columns += colspan;
}

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;
    use marlin_core::{MetadataStore, RoutineKind};
    use marlin_privileges::{Privilege, PrivilegeChecker};

    pub struct FakePrivileges {
        pub user: String,
        pub superuser: bool,
        pub granted: Vec<Privilege>,
    }

    impl FakePrivileges {
        pub fn with(granted: Vec<Privilege>) -> Self {
            Self {
                user: "ana@localhost".to_string(),
                superuser: false,
                granted,
            }
        }

        pub fn none() -> Self {
            Self::with(vec![])
        }
    }

    impl PrivilegeChecker for FakePrivileges {
        fn current_user(&self) -> &str {
            &self.user
        }

        fn is_superuser(&self) -> bool {
            self.superuser
        }

        fn has_privilege(&self, privilege: Privilege, _db: &str, _table: Option<&str>) -> bool {
            self.granted.contains(&privilege)
        }
    }

    pub struct FakeMetadata {
        pub definer: Option<String>,
        pub definition: Option<String>,
    }

    impl FakeMetadata {
        pub fn empty() -> Self {
            Self {
                definer: None,
                definition: None,
            }
        }
    }

    #[async_trait]
    impl MetadataStore for FakeMetadata {
        async fn definer_of(
            &self,
            _db: &str,
            _kind: RoutineKind,
            _name: &str,
        ) -> anyhow::Result<Option<String>> {
            Ok(self.definer.clone())
        }

        async fn definition_of(
            &self,
            _db: &str,
            _kind: RoutineKind,
            _name: &str,
        ) -> anyhow::Result<Option<String>> {
            Ok(self.definition.clone())
        }
    }

    pub fn page_context(db: &str, table: Option<&str>) -> super::RenderContext {
        super::RenderContext {
            db: db.to_string(),
            table: table.map(str::to_string),
            ajax: false,
            ajax_page_request: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    fn event(name: &str) -> EventItem {
        EventItem {
            name: name.to_string(),
            status: "ENABLED".to_string(),
            kind: "RECURRING".to_string(),
        }
    }

    #[tokio::test]
    async fn empty_list_shows_placeholder_and_no_bulk_actions() {
        let privileges = FakePrivileges::none();
        let metadata = FakeMetadata::empty();
        let titles = TitleSet::default();
        let renderer = ListRenderer::new(&privileges, &metadata, &titles);

        let html = renderer
            .render_list(&ItemList::Events(vec![]), &page_context("shop", None))
            .await
            .unwrap();

        assert!(html.contains(r#"<div class="nothing-to-display text-gray-500""#));
        assert!(html.contains(r#"divide-gray-200 hide">"#));
        assert!(!html.contains("Export selected"));
        assert!(!html.contains("Drop selected"));
    }

    #[tokio::test]
    async fn non_empty_list_renders_one_row_per_item_in_order() {
        let privileges = FakePrivileges::none();
        let metadata = FakeMetadata::empty();
        let titles = TitleSet::default();
        let renderer = ListRenderer::new(&privileges, &metadata, &titles);

        let items = ItemList::Events(vec![event("beta"), event("alpha")]);
        let html = renderer
            .render_list(&items, &page_context("shop", None))
            .await
            .unwrap();

        // Input order wins over name order.
        let beta = html.find("<strong>beta</strong>").unwrap();
        let alpha = html.find("<strong>alpha</strong>").unwrap();
        assert!(beta < alpha);

        // Header row + hidden placeholder row + one row per item.
        assert_eq!(html.matches("<tr").count(), 4);

        // Placeholder is hidden, table shown, bulk actions present.
        assert!(html.contains(r#"<div class="nothing-to-display hide text-gray-500""#));
        assert!(!html.contains(r#"divide-gray-200 hide">"#));
        assert!(html.contains("Export selected"));
    }

    #[tokio::test]
    async fn ajax_insert_rows_start_hidden() {
        let privileges = FakePrivileges::none();
        let metadata = FakeMetadata::empty();
        let titles = TitleSet::default();
        let renderer = ListRenderer::new(&privileges, &metadata, &titles);

        let ctx = RenderContext {
            db: "shop".to_string(),
            table: None,
            ajax: true,
            ajax_page_request: false,
        };
        let html = renderer
            .render_list(&ItemList::Events(vec![event("e1")]), &ctx)
            .await
            .unwrap();
        assert!(html.contains(r#"<tr class="ajax-insert hide">"#));

        let ctx = RenderContext {
            ajax_page_request: true,
            ..ctx
        };
        let html = renderer
            .render_list(&ItemList::Events(vec![event("e1")]), &ctx)
            .await
            .unwrap();
        assert!(!html.contains("ajax-insert"));
    }

    #[tokio::test]
    async fn placeholder_row_matches_column_count() {
        let privileges = FakePrivileges::none();
        let metadata = FakeMetadata::empty();
        let titles = TitleSet::default();
        let renderer = ListRenderer::new(&privileges, &metadata, &titles);

        // Events: checkbox + name + status + 3 action columns + type.
        let html = renderer
            .render_list(&ItemList::Events(vec![]), &page_context("shop", None))
            .await
            .unwrap();
        assert_eq!(html.matches("<td></td>").count(), 6);

        // Routines: checkbox + name + 4 action columns + type + returns.
        let html = renderer
            .render_list(&ItemList::Routines(vec![]), &page_context("shop", None))
            .await
            .unwrap();
        assert_eq!(html.matches("<td></td>").count(), 7);
    }

    #[tokio::test]
    async fn trigger_form_posts_to_table_route_when_table_in_scope() {
        let privileges = FakePrivileges::none();
        let metadata = FakeMetadata::empty();
        let titles = TitleSet::default();
        let renderer = ListRenderer::new(&privileges, &metadata, &titles);

        let html = renderer
            .render_list(
                &ItemList::Triggers(vec![]),
                &page_context("shop", Some("orders")),
            )
            .await
            .unwrap();
        assert!(html.contains(r#"action="/table/triggers""#));
        assert!(html.contains(r#"name="table" value="orders""#));

        let html = renderer
            .render_list(&ItemList::Triggers(vec![]), &page_context("shop", None))
            .await
            .unwrap();
        assert!(html.contains(r#"action="/database/triggers""#));
    }
}
