//! Plain-text rendering helpers shared by the CLI commands.

use crate::domain::{Entry, LevelContent};
use crate::library::AuditIssue;

const RULE_WIDTH: usize = 80;
const NAME_WIDTH: usize = 44;

/// Shorten `text` to at most `width` characters, marking the cut with "..."
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Framed heading used by `show` and `config`
pub fn banner(lines: &[String]) -> String {
    let mut out = format!("╔{}╗\n", "═".repeat(RULE_WIDTH - 2));
    for line in lines {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(&format!("╚{}╝", "═".repeat(RULE_WIDTH - 2)));
    out
}

/// Table of entries: id, category, name
pub fn entry_table<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> String {
    let mut out = format!("{:<40} {:<24} {}\n", "ID", "CATEGORY", "NAME");
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');

    for entry in entries {
        out.push_str(&format!(
            "{:<40} {:<24} {}\n",
            entry.id.as_str(),
            entry.category.as_str(),
            truncate(&entry.name, NAME_WIDTH)
        ));
    }
    out
}

fn bullets(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("\n{}:\n", heading));
    for item in items {
        out.push_str(&format!("  - {}\n", item));
    }
}

/// Header block plus clinical sections and a level overview
pub fn entry_detail(entry: &Entry) -> String {
    let mut header = vec![
        format!("ID: {}", entry.id),
        format!("Name: {}", entry.name),
    ];
    if let Some(localized) = &entry.localized_name {
        header.push(format!("Spanish: {}", localized));
    }
    header.push(format!("Category: {}", entry.category));
    header.push(format!("Status: {} (v{})", entry.status, entry.version));
    header.push(format!("Updated: {}", entry.updated_at.format("%Y-%m-%d")));
    if !entry.tags.systems.is_empty() {
        header.push(format!("Systems: {}", entry.tags.systems.join(", ")));
    }

    let mut out = banner(&header);
    out.push('\n');

    if let Some(description) = &entry.description {
        out.push_str(&format!("\n{}\n", description));
    }

    if let Some(clinical) = &entry.clinical {
        out.push_str(&format!("\nPathophysiology:\n  {}\n", clinical.pathophysiology));
        bullets(&mut out, "Clinical features", &clinical.clinical_features);
        bullets(&mut out, "Diagnostics", &clinical.diagnostics);
        bullets(&mut out, "Treatment", &clinical.treatment);
        bullets(&mut out, "Complications", &clinical.complications);
        out.push_str(&format!("\nFor patients:\n  {}\n", clinical.patient_explanation));
        bullets(&mut out, "Emergency signs", &clinical.emergency_signs);
    }

    if !entry.levels.is_empty() {
        out.push_str("\nLevels:\n");
        for (level, content) in &entry.levels {
            out.push_str(&format!(
                "  {} ({:<12}) {}\n",
                level,
                level.label(),
                truncate(&content.summary, 60)
            ));
        }
        out.push_str("\nUse --level N to read one level\n");
    }

    out
}

/// Full text of one level
pub fn level_detail(entry: &Entry, content: &LevelContent) -> String {
    let mut out = banner(&[
        format!("{} ({})", entry.name, entry.id),
        format!("Level {} - {}", content.level, content.level.label()),
    ]);
    out.push('\n');

    out.push_str(&format!("\n{}\n\n{}\n", content.summary, content.explanation));

    let terms: Vec<String> = content
        .key_terms
        .iter()
        .map(|t| format!("{}: {}", t.term, t.definition))
        .collect();
    bullets(&mut out, "Key terms", &terms);
    bullets(&mut out, "Analogies", &content.analogies);
    bullets(&mut out, "Examples", &content.examples);
    if let Some(notes) = &content.clinical_notes {
        out.push_str(&format!("\nClinical notes:\n  {}\n", notes));
    }
    bullets(&mut out, "Counseling points", &content.patient_counseling_points);

    out
}

/// One audit finding per line
pub fn audit_line(issue: &AuditIssue) -> String {
    format!(
        "{:<8} {:<40} [{}] {}",
        issue.severity.to_string().to_uppercase(),
        issue.entry_id.as_str(),
        issue.check,
        issue.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ComplexityLevel, ContentKind};

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 8), "abcde...");
        // Multi-byte characters must not split
        assert_eq!(truncate("Enfermedad celíaca", 13), "Enfermedad...");
    }

    #[test]
    fn test_entry_table_lists_rows() {
        let entries = [
            Entry::new("a", ContentKind::Topic, "Alpha"),
            Entry::new("b", ContentKind::Concept, "Beta"),
        ];
        let table = entry_table(&entries);
        assert_eq!(table.lines().count(), 4);
        assert!(table.contains("concept"));
    }

    #[test]
    fn test_level_detail_includes_terms() {
        let content = LevelContent::new(ComplexityLevel::BASIC, "Summary", "Body")
            .with_term("villi", "Finger-like projections");
        let entry = Entry::new("x", ContentKind::Condition, "X").with_level(content.clone());

        let text = level_detail(&entry, &content);
        assert!(text.contains("Level 1 - basic"));
        assert!(text.contains("villi: Finger-like projections"));
        assert!(!text.contains("Clinical notes"));
    }
}
