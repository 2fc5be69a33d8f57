//! Routine rows.
//!
//! The edit and export links require more than a privilege bit: editing
//! a routine means dropping and recreating it, so both are reserved for
//! the routine's recorded definer holding CREATE ROUTINE (or a
//! superuser). The execute link depends on the routine's parameter
//! list, read out of its definition.

use crate::error::DashboardError;
use crate::lists::{ListRenderer, RenderContext};
use crate::templates::escape_html;
use crate::urls;
use marlin_core::RoutineItem;
use marlin_privileges::Privilege;
use marlin_sql::{drop_routine_statement, has_input_parameters, parse_parameters};

impl<'a> ListRenderer<'a> {
    pub(crate) async fn routine_row(
        &self,
        routine: &RoutineItem,
        ctx: &RenderContext,
        row_class: &str,
    ) -> Result<String, DashboardError> {
        let drop_sql = drop_routine_statement(routine.kind, &routine.name);

        let definer = self
            .metadata
            .definer_of(&ctx.db, routine.kind, &routine.name)
            .await?;

        // Editing drops and recreates the routine, so require CREATE
        // ROUTINE in addition to being the definer.
        let can_alter = (self
            .privileges
            .has_privilege(Privilege::CreateRoutine, &ctx.db, None)
            && definer.as_deref() == Some(self.privileges.current_user()))
            || self.privileges.is_superuser();

        let edit_cell = if can_alter {
            format!(
                r#"<a class="ajax edit-anchor" href="{href}">{label}</a>"#,
                href = urls::build(urls::DB_ROUTINES, &self.item_params(ctx, routine, "edit_item")),
                label = self.titles.edit,
            )
        } else {
            self.titles.no_edit.clone()
        };

        let execute_cell = self.execute_cell(routine, ctx).await?;

        let export_cell = if can_alter {
            format!(
                r#"<a class="ajax export-anchor" href="{href}">{label}</a>"#,
                href = urls::build(
                    urls::DB_ROUTINES,
                    &self.item_params(ctx, routine, "export_item")
                ),
                label = self.titles.export,
            )
        } else {
            self.titles.no_export.clone()
        };

        let goto = urls::build(urls::DB_ROUTINES, &[("db", ctx.db.as_str())]);
        let mut drop_params = scope_params(ctx);
        drop_params.push(("sql_query", drop_sql.as_str()));
        drop_params.push(("goto", goto.as_str()));
        let drop_cell = format!(
            r#"<a class="ajax drop-anchor" href="{href}">{label}</a>"#,
            href = urls::build(urls::SQL, &drop_params),
            label = self.titles.drop,
        );

        Ok(format!(
            r##"        <tr class="{row_class}">
{name_cells}            <td>{edit_cell}</td>
            <td>{execute_cell}</td>
            <td>{export_cell}</td>
            <td>{drop_cell}</td>
            <td>{kind}</td>
            <td dir="ltr">{returns}</td>
        </tr>
"##,
            row_class = row_class,
            name_cells = Self::name_cells(&routine.name, &drop_sql),
            edit_cell = edit_cell,
            execute_cell = execute_cell,
            export_cell = export_cell,
            drop_cell = drop_cell,
            kind = routine.kind,
            returns = escape_html(&routine.returns),
        ))
    }

    /// The execute cell. A hidden definition omits the action entirely;
    /// a visible one picks direct execution or the parameter dialog
    /// based on whether any parameter takes input.
    async fn execute_cell(
        &self,
        routine: &RoutineItem,
        ctx: &RenderContext,
    ) -> Result<String, DashboardError> {
        let Some(definition) = self
            .metadata
            .definition_of(&ctx.db, routine.kind, &routine.name)
            .await?
        else {
            return Ok(String::new());
        };

        let params = parse_parameters(&definition)?;

        if !self.privileges.has_privilege(Privilege::Execute, &ctx.db, None) {
            return Ok(self.titles.no_execute.clone());
        }

        let cell = if has_input_parameters(routine.kind, &params) {
            format!(
                r#"<a class="ajax exec-anchor" href="{href}">{label}</a>"#,
                href = urls::build(
                    urls::DB_ROUTINES,
                    &self.item_params(ctx, routine, "execute_dialog")
                ),
                label = self.titles.execute,
            )
        } else {
            // No values to collect; submit the execution straight away.
            let action_params = [
                ("execute_routine", "1"),
                ("item_name", routine.name.as_str()),
                ("item_type", routine.kind.as_str()),
            ];
            format!(
                r#"<a class="ajax exec-anchor" href="{href}" data-post="{payload}">{label}</a>"#,
                href = urls::build(urls::DB_ROUTINES, &scope_params(ctx)),
                payload = urls::query_string(&action_params),
                label = self.titles.execute,
            )
        };
        Ok(cell)
    }

    /// db/table scope plus the item coordinates, for edit/export/dialog
    /// links.
    fn item_params<'p>(
        &self,
        ctx: &'p RenderContext,
        routine: &'p RoutineItem,
        action: &'static str,
    ) -> Vec<(&'p str, &'p str)> {
        let mut params = scope_params(ctx);
        params.push((action, "1"));
        params.push(("item_name", routine.name.as_str()));
        params.push(("item_type", routine.kind.as_str()));
        params
    }
}

fn scope_params(ctx: &RenderContext) -> Vec<(&str, &str)> {
    let mut params = vec![("db", ctx.db.as_str())];
    if let Some(table) = ctx.table.as_deref() {
        params.push(("table", table));
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lists::test_support::*;
    use crate::lists::ItemList;
    use crate::titles::TitleSet;
    use marlin_core::RoutineKind;

    fn procedure(name: &str) -> RoutineItem {
        RoutineItem {
            name: name.to_string(),
            kind: RoutineKind::Procedure,
            returns: String::new(),
        }
    }

    async fn render(
        privileges: &FakePrivileges,
        metadata: &FakeMetadata,
        routine: RoutineItem,
    ) -> String {
        let titles = TitleSet::default();
        let renderer = ListRenderer::new(privileges, metadata, &titles);
        renderer
            .render_list(
                &ItemList::Routines(vec![routine]),
                &page_context("shop", None),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn script_name_is_escaped_everywhere() {
        let privileges = FakePrivileges::none();
        let metadata = FakeMetadata::empty();
        let html = render(&privileges, &metadata, procedure("<script>")).await;

        assert!(!html.contains("<script>"));
        // Checkbox value, drop-SQL span and the displayed name.
        assert_eq!(html.matches("&lt;script&gt;").count(), 3);
    }

    #[tokio::test]
    async fn procedure_with_input_parameters_gets_dialog_action() {
        let privileges = FakePrivileges::with(vec![Privilege::Execute]);
        let metadata = FakeMetadata {
            definer: None,
            definition: Some("CREATE PROCEDURE p1(IN a INT, OUT b INT) BEGIN END".to_string()),
        };
        let html = render(&privileges, &metadata, procedure("p1")).await;

        assert!(html.contains("execute_dialog=1"));
        assert!(!html.contains("data-post"));
    }

    #[tokio::test]
    async fn out_only_procedure_gets_direct_action() {
        let privileges = FakePrivileges::with(vec![Privilege::Execute]);
        let metadata = FakeMetadata {
            definer: None,
            definition: Some("CREATE PROCEDURE p1(OUT b INT) BEGIN END".to_string()),
        };
        let html = render(&privileges, &metadata, procedure("p1")).await;

        assert!(html.contains(r#"data-post="execute_routine=1&item_name=p1&item_type=PROCEDURE""#));
        assert!(!html.contains("execute_dialog"));
    }

    #[tokio::test]
    async fn function_parameters_always_need_the_dialog() {
        let privileges = FakePrivileges::with(vec![Privilege::Execute]);
        let metadata = FakeMetadata {
            definer: None,
            definition: Some("CREATE FUNCTION f1(x INT) RETURNS INT RETURN x".to_string()),
        };
        let routine = RoutineItem {
            name: "f1".to_string(),
            kind: RoutineKind::Function,
            returns: "int".to_string(),
        };
        let html = render(&privileges, &metadata, routine).await;

        assert!(html.contains("execute_dialog=1"));
    }

    #[tokio::test]
    async fn missing_definition_omits_execute_action() {
        let privileges = FakePrivileges::with(vec![Privilege::Execute]);
        let metadata = FakeMetadata::empty();
        let html = render(&privileges, &metadata, procedure("p1")).await;

        assert!(!html.contains("exec-anchor"));
        assert!(!html.contains("Execute</span>"));
    }

    #[tokio::test]
    async fn missing_execute_privilege_shows_disabled_label() {
        let privileges = FakePrivileges::none();
        let metadata = FakeMetadata {
            definer: None,
            definition: Some("CREATE PROCEDURE p1() BEGIN END".to_string()),
        };
        let html = render(&privileges, &metadata, procedure("p1")).await;

        assert!(!html.contains("exec-anchor"));
        assert!(html.contains("Execute</span>"));
    }

    #[tokio::test]
    async fn non_definer_without_privilege_gets_disabled_edit_and_export() {
        let privileges = FakePrivileges::with(vec![Privilege::Execute]);
        let metadata = FakeMetadata {
            definer: Some("bob@localhost".to_string()),
            definition: None,
        };
        let html = render(&privileges, &metadata, procedure("p1")).await;

        assert!(!html.contains("edit-anchor"));
        assert!(!html.contains("export-anchor"));
        assert!(html.contains("Edit</span>"));
        assert!(html.contains("Export</span>"));
    }

    #[tokio::test]
    async fn definer_with_create_routine_gets_edit_and_export() {
        let privileges = FakePrivileges::with(vec![Privilege::CreateRoutine]);
        let metadata = FakeMetadata {
            definer: Some("ana@localhost".to_string()),
            definition: None,
        };
        let html = render(&privileges, &metadata, procedure("p1")).await;

        assert!(html.contains("edit-anchor"));
        assert!(html.contains("export-anchor"));
        assert!(html.contains("edit_item=1"));
        assert!(html.contains("export_item=1"));
    }

    #[tokio::test]
    async fn superuser_gets_edit_without_matching_definer() {
        let mut privileges = FakePrivileges::none();
        privileges.superuser = true;
        let metadata = FakeMetadata {
            definer: Some("bob@localhost".to_string()),
            definition: None,
        };
        let html = render(&privileges, &metadata, procedure("p1")).await;

        assert!(html.contains("edit-anchor"));
    }

    #[tokio::test]
    async fn drop_link_is_always_rendered() {
        let privileges = FakePrivileges::none();
        let metadata = FakeMetadata::empty();
        let html = render(&privileges, &metadata, procedure("p1")).await;

        assert!(html.contains("drop-anchor"));
        assert!(html.contains("/sql?db=shop&sql_query=DROP%20PROCEDURE%20IF%20EXISTS%20%60p1%60"));
    }
}
