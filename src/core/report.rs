use crate::domain::model::TriageResult;
use chrono::Local;

const BANNER: &str = "========================================";

/// Display parameters for the console report. Passed explicitly so rendering
/// carries no process-wide state.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Message cells longer than this are truncated with a trailing `...`.
    pub max_col_width: usize,
    /// Cap on table rows; `None` shows all rows.
    pub max_rows: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_col_width: 50,
            max_rows: None,
        }
    }
}

/// Renders the per-message table and both summaries as plain text. Callers
/// only invoke this when at least one record was processed.
pub fn render_report(result: &TriageResult, options: &RenderOptions) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(BANNER.to_string());
    lines.push("  SUPPORT TRIAGE - RESULTS".to_string());
    lines.push(format!("  generated {}", Local::now().format("%Y-%m-%d %H:%M")));
    lines.push(BANNER.to_string());
    lines.push(String::new());

    lines.push("--- Processed Messages ---".to_string());
    render_table(result, options, &mut lines);

    lines.push(String::new());
    lines.push("--- Summary by Category ---".to_string());
    render_counts(
        result.by_category.iter().map(|(label, count)| (label.to_string(), *count)),
        &mut lines,
    );

    lines.push(String::new());
    lines.push("--- Summary by Sentiment ---".to_string());
    render_counts(
        result.by_sentiment.iter().map(|(label, count)| (label.to_string(), *count)),
        &mut lines,
    );

    lines.push(String::new());
    lines.push(BANNER.to_string());

    lines.join("\n")
}

fn render_table(result: &TriageResult, options: &RenderOptions, lines: &mut Vec<String>) {
    let shown = match options.max_rows {
        Some(cap) => result.messages.len().min(cap),
        None => result.messages.len(),
    };

    let cells: Vec<(String, &str, &str)> = result.messages[..shown]
        .iter()
        .map(|m| {
            (
                truncate(&m.message, options.max_col_width),
                m.category.name(),
                m.sentiment.name(),
            )
        })
        .collect();

    let message_width = cells
        .iter()
        .map(|(message, _, _)| message.chars().count())
        .chain(std::iter::once("message".len()))
        .max()
        .unwrap_or(0);
    let category_width = cells
        .iter()
        .map(|(_, category, _)| category.len())
        .chain(std::iter::once("category".len()))
        .max()
        .unwrap_or(0);

    lines.push(format!(
        "{:<mw$}  {:<cw$}  {}",
        "message",
        "category",
        "sentiment",
        mw = message_width,
        cw = category_width,
    ));

    for (message, category, sentiment) in &cells {
        lines.push(format!(
            "{:<mw$}  {:<cw$}  {}",
            message,
            category,
            sentiment,
            mw = message_width,
            cw = category_width,
        ));
    }

    let omitted = result.messages.len() - shown;
    if omitted > 0 {
        lines.push(format!("... ({} more rows)", omitted));
    }
}

fn render_counts(entries: impl Iterator<Item = (String, usize)>, lines: &mut Vec<String>) {
    let entries: Vec<(String, usize)> = entries.collect();
    let label_width = entries
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    for (label, count) in &entries {
        lines.push(format!("{:<lw$}  {}", label, count, lw = label_width));
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}
