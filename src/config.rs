use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str =
    "https://docs.godotengine.org/en/stable/classes/class_{}.html";
pub const DEFAULT_OUTPUT_DIR: &str = "godot_docs_md";
pub const DEFAULT_CHUNK_SIZE: usize = 4000;
pub const DEFAULT_NOT_FOUND_MARKER: &str = "Page not found";

const DEFAULT_CLASSES: &[&str] = &["Node", "Area3D", "Camera3D", "CharacterBody3D"];

/// Run configuration. Defaults reproduce the stock class list and paths;
/// every field can be overridden from the CLI.
pub struct Config {
    /// URL template with a single `{}` placeholder for the class name.
    pub base_url: String,
    pub classes: Vec<String>,
    pub output_dir: PathBuf,
    /// Maximum characters per markdown chunk (soft limit, see chunk.rs).
    pub chunk_size: usize,
    /// Phrase the docs host renders inside 200 responses for missing pages.
    pub not_found_marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            classes: DEFAULT_CLASSES.iter().map(|s| s.to_string()).collect(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            chunk_size: DEFAULT_CHUNK_SIZE,
            not_found_marker: DEFAULT_NOT_FOUND_MARKER.to_string(),
        }
    }
}

impl Config {
    pub fn url_for(&self, class_name: &str) -> String {
        self.base_url.replacen("{}", class_name, 1)
    }

    /// Ordered URL candidates for a class: lower-cased name first, then the
    /// name as given. Identical candidates are collapsed so an already
    /// lower-case name yields a single attempt.
    pub fn url_candidates(&self, class_name: &str) -> Vec<String> {
        let mut candidates = vec![self.url_for(&class_name.to_lowercase())];
        let as_given = self.url_for(class_name);
        if as_given != candidates[0] {
            candidates.push(as_given);
        }
        candidates
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_for_substitutes_class_name() {
        let config = Config::default();
        assert_eq!(
            config.url_for("node"),
            "https://docs.godotengine.org/en/stable/classes/class_node.html"
        );
    }

    #[test]
    fn candidates_lowercase_first_then_as_given() {
        let config = Config::default();
        let urls = config.url_candidates("Area3D");
        assert_eq!(urls.len(), 2);
        assert!(urls[0].contains("class_area3d.html"));
        assert!(urls[1].contains("class_Area3D.html"));
    }

    #[test]
    fn candidates_deduplicate_lowercase_names() {
        let config = Config::default();
        let urls = config.url_candidates("node");
        assert_eq!(urls, vec![config.url_for("node")]);
    }
}
