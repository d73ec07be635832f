use std::path::Path;

use crate::runner::SceneReport;

/// Everything one run produced, as written with `--output`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RunReport {
    pub grid: String,
    pub roundtrip_failures: usize,
    pub results: Vec<SceneReport>,
}

impl RunReport {
    pub fn failed_scenes(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| !r.passed())
            .map(|r| r.scene_name.as_str())
            .collect()
    }
}

/// Load a report from a JSON file. Returns None if the file doesn't exist.
pub fn load_report(path: &Path) -> Option<RunReport> {
    let contents = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&contents).ok()
}

/// Save a report to a JSON file.
pub fn save_report(path: &Path, report: &RunReport) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(report).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

/// Format results as a markdown summary table.
pub fn format_markdown(results: &[SceneReport]) -> String {
    let mut out = String::new();
    out.push_str("| Scene | Entities | Invalid | Expected | Out of bounds | Detached | Wall cells | Time (ms) | Status |\n");
    out.push_str("|-------|----------|---------|----------|---------------|----------|------------|-----------|--------|\n");

    for r in results {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} | {:.3} | {} |\n",
            r.scene_name,
            r.entity_count,
            r.invalid.len(),
            r.expected_invalid,
            r.out_of_bounds,
            r.detached,
            r.wall_surface_cells,
            r.elapsed_ms,
            if r.passed() { "ok" } else { "MISMATCH" },
        ));
    }

    out
}

/// List the colliding entities of every scene that has any.
pub fn format_conflicts(results: &[SceneReport]) -> String {
    let mut out = String::new();
    for r in results.iter().filter(|r| !r.invalid.is_empty()) {
        out.push_str(&format!("  - {}: {}\n", r.scene_name, r.invalid.join(", ")));
    }
    if out.is_empty() {
        out.push_str("No conflicts.\n");
    }
    out
}
