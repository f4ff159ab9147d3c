pub struct TableFormatter {
    index_width: usize,
    name_width: usize,
}

impl TableFormatter {
    pub fn new(projects: &[String]) -> Self {
        let name_width = projects
            .iter()
            .map(|p| p.chars().count())
            .max()
            .unwrap_or(16)
            .clamp(7, 50); // Between "Project" header min and reasonable terminal width max

        let index_width = projects.len().to_string().chars().count().max(1);

        Self {
            index_width,
            name_width,
        }
    }

    pub fn print_table(&self, projects: &[String]) {
        self.print_header();
        for (i, project) in projects.iter().enumerate() {
            self.print_row(i + 1, project);
        }
        self.print_footer();
    }

    fn print_header(&self) {
        println!("{}", self.top_border());
        println!(
            "│ {:>width_index$} │ {:<width_name$} │",
            "#",
            "Project",
            width_index = self.index_width,
            width_name = self.name_width,
        );
        println!("{}", self.separator());
    }

    fn print_row(&self, index: usize, project: &str) {
        println!(
            "│ {:>width_index$} │ {:<width_name$} │",
            index,
            truncate(project, self.name_width),
            width_index = self.index_width,
            width_name = self.name_width,
        );
    }

    fn print_footer(&self) {
        println!("{}", self.bottom_border());
    }

    fn top_border(&self) -> String {
        format!(
            "┌{}┬{}┐",
            "─".repeat(self.index_width + 2),
            "─".repeat(self.name_width + 2),
        )
    }

    fn separator(&self) -> String {
        format!(
            "├{}┼{}┤",
            "─".repeat(self.index_width + 2),
            "─".repeat(self.name_width + 2),
        )
    }

    fn bottom_border(&self) -> String {
        format!(
            "└{}┴{}┘",
            "─".repeat(self.index_width + 2),
            "─".repeat(self.name_width + 2),
        )
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings
/// including emoji and multi-byte characters.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        // Safely truncate at character boundaries, not byte boundaries
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_pads() {
        assert_eq!(truncate("app", 7), "app    ");
    }

    #[test]
    fn test_truncate_long_string_adds_ellipsis() {
        assert_eq!(truncate("a-very-long-project-name", 10), "a-very-...");
    }

    #[test]
    fn test_truncate_exact_length_unchanged() {
        assert_eq!(truncate("app-one", 7), "app-one");
    }

    #[test]
    fn test_truncate_multibyte_safe() {
        // Must not panic on non-ASCII input
        let result = truncate("café-app-with-a-long-name", 10);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_formatter_width_tracks_longest_name() {
        let projects = vec![
            "app-one".to_string(),
            "a-much-longer-project-name".to_string(),
        ];
        let formatter = TableFormatter::new(&projects);
        assert_eq!(formatter.name_width, 26);
    }

    #[test]
    fn test_formatter_width_clamped() {
        let projects = vec!["a-b".to_string()];
        let formatter = TableFormatter::new(&projects);
        assert_eq!(formatter.name_width, 7);

        let long = "x".repeat(80) + "-y";
        let formatter = TableFormatter::new(&[long]);
        assert_eq!(formatter.name_width, 50);
    }

    #[test]
    fn test_index_width_grows_with_count() {
        let projects: Vec<String> = (0..12).map(|i| format!("app-{i}")).collect();
        let formatter = TableFormatter::new(&projects);
        assert_eq!(formatter.index_width, 2);
    }
}
