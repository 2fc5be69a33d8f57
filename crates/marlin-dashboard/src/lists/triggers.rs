//! Trigger rows.
//!
//! Edit is gated on the TRIGGER privilege in the current scope, drop on
//! TRIGGER at the database level. Export carries no gate. The timing
//! and event columns come from closed server enumerations and render
//! verbatim.

use crate::lists::{ListRenderer, RenderContext};
use crate::templates::escape_html;
use crate::urls;
use marlin_core::TriggerItem;
use marlin_privileges::Privilege;

impl<'a> ListRenderer<'a> {
    pub(crate) fn trigger_row(
        &self,
        trigger: &TriggerItem,
        ctx: &RenderContext,
        row_class: &str,
    ) -> String {
        // On a database-level list each trigger links to its own
        // table's list; on a table-level list the column is dropped.
        let table_cell = match ctx.table {
            None => format!(
                r##"            <td>
                <a href="{href}">{table}</a>
            </td>
"##,
                href = urls::build(
                    urls::TABLE_TRIGGERS,
                    &[("db", ctx.db.as_str()), ("table", trigger.table.as_str())]
                ),
                table = escape_html(&trigger.table),
            ),
            Some(_) => String::new(),
        };

        let edit_cell = if self
            .privileges
            .has_privilege(Privilege::Trigger, &ctx.db, ctx.table.as_deref())
        {
            let mut params = vec![("db", ctx.db.as_str())];
            if let Some(table) = ctx.table.as_deref() {
                params.push(("table", table));
            }
            params.push(("edit_item", "1"));
            params.push(("item_name", trigger.name.as_str()));
            format!(
                r#"<a class="ajax edit-anchor" href="{href}">{label}</a>"#,
                href = urls::build(urls::DB_TRIGGERS, &params),
                label = self.titles.edit,
            )
        } else {
            self.titles.no_edit.clone()
        };

        let mut params = vec![("db", ctx.db.as_str())];
        if let Some(table) = ctx.table.as_deref() {
            params.push(("table", table));
        }
        params.push(("export_item", "1"));
        params.push(("item_name", trigger.name.as_str()));
        let export_cell = format!(
            r#"<a class="ajax export-anchor" href="{href}">{label}</a>"#,
            href = urls::build(urls::DB_TRIGGERS, &params),
            label = self.titles.export,
        );

        let drop_cell = if self.privileges.has_privilege(Privilege::Trigger, &ctx.db, None) {
            let goto = urls::build(urls::DB_TRIGGERS, &[("db", ctx.db.as_str())]);
            let mut params = vec![("db", ctx.db.as_str())];
            if let Some(table) = ctx.table.as_deref() {
                params.push(("table", table));
            }
            params.push(("sql_query", trigger.drop_statement.as_str()));
            params.push(("goto", goto.as_str()));
            format!(
                r#"<a class="ajax drop-anchor" href="{href}">{label}</a>"#,
                href = urls::build(urls::SQL, &params),
                label = self.titles.drop,
            )
        } else {
            self.titles.no_drop.clone()
        };

        format!(
            r##"        <tr class="{row_class}">
{name_cells}{table_cell}            <td>{edit_cell}</td>
            <td>{export_cell}</td>
            <td>{drop_cell}</td>
            <td>{action_timing}</td>
            <td>{event_manipulation}</td>
        </tr>
"##,
            row_class = row_class,
            name_cells = Self::name_cells(&trigger.name, &trigger.drop_statement),
            table_cell = table_cell,
            edit_cell = edit_cell,
            export_cell = export_cell,
            drop_cell = drop_cell,
            action_timing = trigger.action_timing,
            event_manipulation = trigger.event_manipulation,
        )
    }
}
