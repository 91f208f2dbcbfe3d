//! Rendering of comparison reports, system specs, titles and catalog rows.
//!
//! Renderers return strings; handlers decide where to print them.

use serde::Serialize;
use specfit_core::{
    ComparisonReport, Dimension, DimensionVerdict, ProfileKind, Quantity, Retailer, SystemProfile,
    Title, TitleCategory, TitleRegistry,
};
use specfit_db::CatalogRow;

use super::Style;
use super::tables::format_optional;

const LABEL_WIDTH: usize = 13;
const VALUE_WIDTH: usize = 11;

/// Human-readable report for one title.
pub fn render_report(
    title: &Title,
    report: &ComparisonReport,
    retailer: &Retailer,
    style: Style,
) -> String {
    let mut lines = vec![
        style.bold(&format!("{}: {} requirements", title.name, report.kind)),
        String::new(),
    ];

    for (verdict, link) in retailer.rows(report) {
        let status = if verdict.passed {
            style.pass("PASS")
        } else {
            style.fail("FAIL")
        };
        lines.push(format!(
            "  {status}  {:<LABEL_WIDTH$} required {:<VALUE_WIDTH$} you have {}",
            verdict.dimension.label(),
            verdict.required.to_string(),
            verdict.actual,
        ));
        lines.push(format!("        {}", verdict.message));
        if let Some(url) = link {
            lines.push(format!("        Upgrade: {url}"));
        }
    }

    lines.push(String::new());
    let failed = report.failures().count();
    lines.push(if failed == 0 {
        style.pass(&format!("All {} checks passed.", report.verdicts.len()))
    } else {
        style.fail(&format!(
            "{failed} of {} checks failed.",
            report.verdicts.len()
        ))
    });

    lines.join("\n")
}

#[derive(Serialize)]
struct VerdictView<'a> {
    #[serde(flatten)]
    verdict: &'a DimensionVerdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    remediation_url: Option<String>,
}

#[derive(Serialize)]
struct ReportView<'a> {
    title: &'a str,
    application_id: i64,
    kind: ProfileKind,
    all_passed: bool,
    verdicts: Vec<VerdictView<'a>>,
}

/// JSON document for one report, with upgrade links resolved.
pub fn report_json(
    title: &Title,
    report: &ComparisonReport,
    retailer: &Retailer,
) -> Result<String, serde_json::Error> {
    let view = ReportView {
        title: &title.name,
        application_id: report.application_id,
        kind: report.kind,
        all_passed: report.all_passed(),
        verdicts: retailer
            .rows(report)
            .into_iter()
            .map(|(verdict, link)| VerdictView {
                verdict,
                remediation_url: link.map(String::from),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&view)
}

/// The sampled specs of this machine, one dimension per line.
pub fn render_system_profile(system: &SystemProfile) -> String {
    Dimension::DISPLAY_ORDER
        .iter()
        .map(|&dimension| {
            let value = match dimension {
                Dimension::Vram if !system.has_gpu() => "none detected".to_string(),
                _ => system_quantity(system, dimension).to_string(),
            };
            format!("{:<LABEL_WIDTH$} {value}", dimension.label())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

const fn system_quantity(system: &SystemProfile, dimension: Dimension) -> Quantity {
    match dimension {
        Dimension::CpuCores => Quantity::Count(system.cpu_cores),
        Dimension::CpuSpeed => Quantity::Gigahertz(system.cpu_speed_ghz),
        Dimension::Ram => Quantity::Gigabytes(system.ram_gb),
        Dimension::Vram => Quantity::Gigabytes(system.vram_gb),
        Dimension::Storage => Quantity::Gigabytes(system.storage_gb),
    }
}

/// Titles grouped by category.
pub fn render_titles(registry: &TitleRegistry, style: Style) -> String {
    let mut sections = Vec::new();
    for category in [TitleCategory::VideoGame, TitleCategory::Application] {
        let mut titles: Vec<&Title> = registry.in_category(category).collect();
        if titles.is_empty() {
            continue;
        }
        titles.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

        let mut lines = vec![style.bold(&category.to_string())];
        lines.extend(
            titles
                .iter()
                .map(|t| format!("  {:<30} {:>4}", t.name, t.id)),
        );
        sections.push(lines.join("\n"));
    }
    sections.join("\n\n")
}

/// Stored rows of one tier, labeled with registry names where known.
pub fn render_catalog_rows(
    kind: ProfileKind,
    rows: &[CatalogRow],
    registry: &TitleRegistry,
) -> String {
    let mut lines = vec![format!("{kind} ({} rows)", rows.len())];
    if rows.is_empty() {
        lines.push("  (empty)".to_string());
    }

    for row in rows {
        let profile = &row.profile;
        let name = registry
            .by_id(profile.application_id)
            .map_or("-", |t| t.name.as_str());
        lines.push(format!(
            "  {:>4}  {:<28} cores {:<3} speed {:<5} ram {:<5} vram {:<6} storage {:<6} imported {}",
            profile.application_id,
            name,
            format_optional(&profile.cpu_cores, "?"),
            format_optional(&profile.cpu_speed_ghz, "?"),
            format_optional(&profile.ram_gb, "?"),
            format_optional(&profile.vram_gb, "?"),
            format_optional(&profile.storage_gb, "?"),
            row.imported_at
                .map_or_else(|| "-".to_string(), |t| t.format("%Y-%m-%d %H:%M").to_string()),
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use specfit_core::{ComparisonEngine, RequirementProfile};

    use super::*;

    fn elden_ring() -> Title {
        Title::new("Elden Ring", 12, TitleCategory::VideoGame)
    }

    fn failing_report() -> ComparisonReport {
        let required = RequirementProfile::new(12, ProfileKind::Minimum)
            .with_cpu(6, 2.8)
            .with_ram_gb(16.0)
            .with_storage_gb(60.0)
            .with_vram_gb(3.0);
        let system = SystemProfile {
            cpu_cores: 8,
            cpu_speed_ghz: 3.6,
            ram_gb: 8.0,
            storage_gb: 250.0,
            vram_gb: 4.0,
        };
        ComparisonEngine::compare(&required, &system).unwrap()
    }

    #[test]
    fn test_render_report_lists_every_dimension() {
        let text = render_report(
            &elden_ring(),
            &failing_report(),
            &Retailer::default(),
            Style::plain(),
        );

        assert!(text.starts_with("Elden Ring: minimum requirements"));
        for dimension in Dimension::DISPLAY_ORDER {
            assert!(text.contains(dimension.label()), "missing {dimension}");
        }
        assert!(text.contains("Your RAM is below the minimum specs (have 8.00 GB, need 16.00 GB)."));
        assert!(text.contains("Upgrade: https://www.newegg.com/search?query=16gb+ram"));
        assert!(text.ends_with("1 of 5 checks failed."));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_report_json_includes_links_for_failures_only() {
        let json = report_json(&elden_ring(), &failing_report(), &Retailer::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["title"], "Elden Ring");
        assert_eq!(value["kind"], "minimum");
        assert_eq!(value["all_passed"], false);

        let verdicts = value["verdicts"].as_array().unwrap();
        assert_eq!(verdicts.len(), 5);
        assert_eq!(verdicts[2]["dimension"], "ram");
        assert_eq!(
            verdicts[2]["remediation_url"],
            "https://www.newegg.com/search?query=16gb+ram"
        );
        assert!(verdicts[0].get("remediation_url").is_none());
    }

    #[test]
    fn test_render_system_profile_without_gpu() {
        let system = SystemProfile {
            cpu_cores: 4,
            cpu_speed_ghz: 2.5,
            ram_gb: 8.0,
            storage_gb: 120.5,
            vram_gb: 0.0,
        };
        let text = render_system_profile(&system);
        assert!(text.contains("CPU speed     2.50 GHz"));
        assert!(text.contains("VRAM          none detected"));
        assert!(text.contains("Free storage  120.50 GB"));
    }

    #[test]
    fn test_render_titles_groups_by_category() {
        let text = render_titles(&TitleRegistry::builtin(), Style::plain());
        let games = text.find("Video Games").unwrap();
        let apps = text.find("Applications").unwrap();
        assert!(games < apps);
        assert!(text[apps..].contains("Blender"));
        assert!(text[..apps].contains("Minecraft"));
    }

    #[test]
    fn test_render_empty_catalog() {
        let text = render_catalog_rows(ProfileKind::Recommended, &[], &TitleRegistry::builtin());
        assert_eq!(text, "recommended (0 rows)\n  (empty)");
    }
}
