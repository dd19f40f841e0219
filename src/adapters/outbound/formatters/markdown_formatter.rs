use crate::application::read_models::{
    ComparisonReport, ComponentView, OverviewReport, ReportMetadataView, RowView,
};
use crate::ports::outbound::ComparisonFormatter;
use crate::reconciliation::domain::{ComponentKind, RowStatus};
use crate::shared::Result;

const OVERVIEW_HEADER: &str =
    "| Kind | Templates | Components | In sync | Divergent | Rename | To add | To remove |\n";
const OVERVIEW_SEPARATOR: &str =
    "|------|-----------|------------|---------|-----------|--------|--------|-----------|\n";

/// MarkdownFormatter adapter rendering reports as Markdown tables
///
/// A cell of a matched row shows `template → device` when the two sides
/// differ and the shared value otherwise.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn cell(template: Option<&str>, live: Option<&str>) -> String {
        let text = match (template, live) {
            (Some(template), Some(live)) if template != live => {
                format!("{} → {}", template, live)
            }
            (Some(value), _) | (None, Some(value)) => value.to_string(),
            (None, None) => String::new(),
        };
        Self::escape_markdown_table_cell(&text)
    }

    fn status_cell(status: RowStatus) -> String {
        match status {
            RowStatus::InSync => "✅ in sync".to_string(),
            RowStatus::Divergent => "⚠️ divergent".to_string(),
            RowStatus::RenameCandidate => "✏️ rename".to_string(),
            RowStatus::Addable => "➕ missing on device".to_string(),
            RowStatus::Removable => "➖ not in device type".to_string(),
        }
    }

    /// Printable field captions in descriptor order
    fn field_captions(kind: ComponentKind) -> Vec<&'static str> {
        kind.field_descriptors()
            .iter()
            .filter(|descriptor| descriptor.exportable && descriptor.printable)
            .map(|descriptor| descriptor.caption)
            .collect()
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_metadata(&self, output: &mut String, metadata: &ReportMetadataView) {
        output.push_str(&format!(
            "Generated {} by {} {} (report {})\n\n",
            metadata.timestamp, metadata.tool_name, metadata.tool_version, metadata.report_id
        ));
    }

    fn render_counts(&self, output: &mut String, report: &ComparisonReport) {
        let counts = &report.counts;
        output.push_str("| Templates | Components | To add | To remove | Out of sync |\n");
        output.push_str("|-----------|------------|--------|-----------|-------------|\n");
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n\n",
            counts.templates, counts.components, counts.addable, counts.removable, counts.out_of_sync
        ));
    }

    fn render_rows(&self, output: &mut String, kind: ComponentKind, rows: &[RowView]) {
        if rows.is_empty() {
            output.push_str(&format!(
                "*No {} on the device or its device type*\n",
                kind.verbose_name_plural()
            ));
            return;
        }

        let mut columns = vec!["Status", "Template", "Device"];
        if kind.is_typed() {
            columns.push("Type");
        }
        columns.push("Label");
        columns.extend(Self::field_captions(kind));
        columns.extend(["Description", "Differences"]);

        output.push_str(&format!("| {} |\n", columns.join(" | ")));
        output.push_str(&format!(
            "|{}|\n",
            columns
                .iter()
                .map(|column| "-".repeat(column.chars().count() + 2))
                .collect::<Vec<_>>()
                .join("|")
        ));

        for row in rows {
            output.push_str(&self.render_row(kind, row));
        }
    }

    fn render_row(&self, kind: ComponentKind, row: &RowView) -> String {
        let template = row.template.as_ref();
        let live = row.component.as_ref();
        let side = |view: Option<&ComponentView>, pick: &dyn Fn(&ComponentView) -> String| {
            view.map(pick)
        };

        let mut cells = vec![
            Self::status_cell(row.status),
            template
                .map(|view| Self::escape_markdown_table_cell(&view.name))
                .unwrap_or_default(),
            live.map(|view| Self::escape_markdown_table_cell(&view.name))
                .unwrap_or_default(),
        ];

        let type_of = |view: &ComponentView| view.type_display.clone().unwrap_or_default();
        if kind.is_typed() {
            cells.push(Self::cell(
                side(template, &type_of).as_deref(),
                side(live, &type_of).as_deref(),
            ));
        }

        let label_of = |view: &ComponentView| view.label.clone();
        cells.push(Self::cell(
            side(template, &label_of).as_deref(),
            side(live, &label_of).as_deref(),
        ));

        for caption in Self::field_captions(kind) {
            let field_of = |view: &ComponentView| {
                view.printable_fields()
                    .find(|field| field.caption == caption)
                    .map(|field| field.value.to_string())
                    .unwrap_or_default()
            };
            cells.push(Self::cell(
                side(template, &field_of).as_deref(),
                side(live, &field_of).as_deref(),
            ));
        }

        let description_of = |view: &ComponentView| view.description.clone();
        cells.push(Self::cell(
            side(template, &description_of).as_deref(),
            side(live, &description_of).as_deref(),
        ));
        cells.push(row.differences.join(", "));

        format!("| {} |\n", cells.join(" | "))
    }
}

impl ComparisonFormatter for MarkdownFormatter {
    fn format_comparison(&self, report: &ComparisonReport) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!(
            "# {} comparison: {}\n\n",
            capitalized(report.kind.verbose_name()),
            Self::escape_markdown_table_cell(&report.device.name)
        ));
        self.render_metadata(&mut output, &report.metadata);
        self.render_counts(&mut output, report);
        self.render_rows(&mut output, report.kind, &report.rows);
        Ok(output)
    }

    fn format_overview(&self, report: &OverviewReport) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!(
            "# Component overview: {}\n\n",
            Self::escape_markdown_table_cell(&report.device.name)
        ));
        self.render_metadata(&mut output, &report.metadata);

        output.push_str(OVERVIEW_HEADER);
        output.push_str(OVERVIEW_SEPARATOR);
        for kind in &report.kinds {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} | {} |\n",
                capitalized(kind.kind.verbose_name_plural()),
                kind.templates,
                kind.components,
                kind.in_sync,
                kind.divergent,
                kind.rename,
                kind.addable,
                kind.removable
            ));
        }
        output.push('\n');
        if report.in_sync {
            output.push_str("✅ Device matches its device type\n");
        } else {
            output.push_str("⚠️ Device differs from its device type\n");
        }
        Ok(output)
    }
}

fn capitalized(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::{ComparisonResponse, DeviceOverview, KindOverview};
    use crate::application::read_models::ReportBuilder;
    use crate::reconciliation::domain::{
        ComponentData, ComponentTemplate, Device, LiveComponent, UnifiedComponent,
    };
    use crate::reconciliation::policies::EqualityPolicy;
    use crate::reconciliation::services::{DiffEngine, ReportGenerator};

    fn device() -> Device {
        Device {
            id: 1,
            name: "edge|1".to_string(),
            device_type_id: 2,
        }
    }

    fn interface_report() -> ComparisonReport {
        let templates = [
            ComponentTemplate {
                id: 1,
                device_type_id: 2,
                kind: ComponentKind::Interface,
                data: ComponentData::new("Gi0/1")
                    .with_type("1000base-t", "1000BASE-T")
                    .with_label("uplink")
                    .with_attribute("mgmt_only", false),
                sibling_id: None,
            },
            ComponentTemplate {
                id: 2,
                device_type_id: 2,
                kind: ComponentKind::Interface,
                data: ComponentData::new("Gi0/2").with_type("1000base-t", "1000BASE-T"),
                sibling_id: None,
            },
        ];
        let live = [LiveComponent {
            id: 10,
            device_id: 1,
            kind: ComponentKind::Interface,
            data: ComponentData::new("gi0/1")
                .with_type("1000base-t", "1000BASE-T")
                .with_label("core")
                .with_attribute("mgmt_only", false),
            sibling_id: None,
        }];
        let rows = DiffEngine::default().diff(
            &templates
                .iter()
                .map(|t| UnifiedComponent::from_template(t, None))
                .collect::<Vec<_>>(),
            &live
                .iter()
                .map(|c| UnifiedComponent::from_live(c, None))
                .collect::<Vec<_>>(),
        );
        let response = ComparisonResponse {
            device: device(),
            kind: ComponentKind::Interface,
            rows,
            template_count: 2,
            live_count: 1,
        };
        ReportBuilder::comparison(
            &response,
            &ReportGenerator::generate_metadata("component-sync", "0.3.0"),
            &EqualityPolicy::default(),
        )
    }

    #[test]
    fn test_comparison_table() {
        let output = MarkdownFormatter::new()
            .format_comparison(&interface_report())
            .unwrap();

        assert!(output.starts_with("# Interface comparison: edge\\|1\n"));
        assert!(output.contains("| 2 | 1 | 1 | 0 | 1 |"));
        assert!(output.contains(
            "| Status | Template | Device | Type | Label | Management only | Description | Differences |"
        ));
        assert!(output.contains("| ✏️ rename | Gi0/1 | gi0/1 | 1000BASE-T | uplink → core | false |  | Label |"));
        assert!(output.contains("| ➕ missing on device | Gi0/2 |  | 1000BASE-T |  |  |  |  |"));
    }

    #[test]
    fn test_empty_comparison() {
        let mut report = interface_report();
        report.rows.clear();
        let output = MarkdownFormatter::new().format_comparison(&report).unwrap();
        assert!(output.contains("*No interfaces on the device or its device type*"));
    }

    #[test]
    fn test_overview_table() {
        let overview = DeviceOverview {
            device: device(),
            kinds: vec![
                KindOverview::from_rows(ComponentKind::Interface, 0, 0, &[]),
                KindOverview::from_rows(ComponentKind::PowerPort, 2, 0, &[]),
            ],
        };
        let report = ReportBuilder::overview(
            &overview,
            &ReportGenerator::generate_metadata("component-sync", "0.3.0"),
        );
        let output = MarkdownFormatter::new().format_overview(&report).unwrap();
        assert!(output.contains("| Interfaces | 0 | 0 | 0 | 0 | 0 | 0 | 0 |"));
        assert!(output.contains("| Power ports | 2 | 0 |"));
        assert!(output.ends_with("✅ Device matches its device type\n"));
    }
}
