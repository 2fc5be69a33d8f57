//! Event rows.
//!
//! All three actions sit behind the EVENT privilege on the database.

use crate::lists::{ListRenderer, RenderContext};
use crate::urls;
use marlin_core::EventItem;
use marlin_privileges::Privilege;
use marlin_sql::drop_event_statement;

impl<'a> ListRenderer<'a> {
    pub(crate) fn event_row(
        &self,
        event: &EventItem,
        ctx: &RenderContext,
        row_class: &str,
    ) -> String {
        let drop_sql = drop_event_statement(&event.name);
        let has_event = self.privileges.has_privilege(Privilege::Event, &ctx.db, None);

        let edit_cell = if has_event {
            format!(
                r#"<a class="ajax edit-anchor" href="{href}">{label}</a>"#,
                href = urls::build(
                    urls::DB_EVENTS,
                    &[
                        ("db", ctx.db.as_str()),
                        ("edit_item", "1"),
                        ("item_name", event.name.as_str()),
                    ]
                ),
                label = self.titles.edit,
            )
        } else {
            self.titles.no_edit.clone()
        };

        let export_cell = if has_event {
            format!(
                r#"<a class="ajax export-anchor" href="{href}">{label}</a>"#,
                href = urls::build(
                    urls::DB_EVENTS,
                    &[
                        ("db", ctx.db.as_str()),
                        ("export_item", "1"),
                        ("item_name", event.name.as_str()),
                    ]
                ),
                label = self.titles.export,
            )
        } else {
            self.titles.no_export.clone()
        };

        let drop_cell = if has_event {
            let goto = urls::build(urls::DB_EVENTS, &[("db", ctx.db.as_str())]);
            format!(
                r#"<a class="ajax drop-anchor" href="{href}">{label}</a>"#,
                href = urls::build(
                    urls::SQL,
                    &[
                        ("db", ctx.db.as_str()),
                        ("sql_query", drop_sql.as_str()),
                        ("goto", goto.as_str()),
                    ]
                ),
                label = self.titles.drop,
            )
        } else {
            self.titles.no_drop.clone()
        };

        format!(
            r##"        <tr class="{row_class}">
{name_cells}            <td>{status}</td>
            <td>{edit_cell}</td>
            <td>{export_cell}</td>
            <td>{drop_cell}</td>
            <td>{kind}</td>
        </tr>
"##,
            row_class = row_class,
            name_cells = Self::name_cells(&event.name, &drop_sql),
            status = event.status,
            edit_cell = edit_cell,
            export_cell = export_cell,
            drop_cell = drop_cell,
            kind = event.kind,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::lists::test_support::*;
    use crate::lists::{ItemList, ListRenderer};
    use crate::titles::TitleSet;
    use marlin_core::EventItem;
    use marlin_privileges::Privilege;

    fn event(name: &str) -> EventItem {
        EventItem {
            name: name.to_string(),
            status: "ENABLED".to_string(),
            kind: "ONE TIME".to_string(),
        }
    }

    async fn render(privileges: &FakePrivileges) -> String {
        let metadata = FakeMetadata::empty();
        let titles = TitleSet::default();
        let renderer = ListRenderer::new(privileges, &metadata, &titles);
        renderer
            .render_list(&ItemList::Events(vec![event("e1")]), &page_context("shop", None))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn event_privilege_gates_all_three_actions() {
        let privileges = FakePrivileges::none();
        let html = render(&privileges).await;
        assert!(html.contains("Edit</span>"));
        assert!(html.contains("Export</span>"));
        assert!(html.contains("Drop</span>"));
        assert!(!html.contains("edit-anchor"));
        assert!(!html.contains("export-anchor"));
        assert!(!html.contains("drop-anchor"));

        let privileges = FakePrivileges::with(vec![Privilege::Event]);
        let html = render(&privileges).await;
        assert!(html.contains("edit-anchor"));
        assert!(html.contains("export-anchor"));
        assert!(html.contains("drop-anchor"));
    }

    #[tokio::test]
    async fn drop_statement_is_exact_and_visible_in_the_row() {
        let privileges = FakePrivileges::none();
        let html = render(&privileges).await;
        assert!(html.contains(r#"<span class="drop-sql hide">DROP EVENT IF EXISTS `e1`</span>"#));
    }

    #[tokio::test]
    async fn status_and_kind_render_verbatim() {
        let privileges = FakePrivileges::none();
        let html = render(&privileges).await;
        assert!(html.contains("<td>ENABLED</td>"));
        assert!(html.contains("<td>ONE TIME</td>"));
    }
}
