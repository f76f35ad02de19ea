//! Text bar charts for terminal output

/// Create a simple bar representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render labelled rows as a horizontal bar chart, one line per row
///
/// Each line carries the value to two decimals after its bar.
pub fn format_bar_chart(rows: &[(String, f64)], bar_width: usize) -> String {
    let label_width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    let max_value = rows.iter().map(|(_, value)| *value).fold(0.0, f64::max);

    let mut output = String::new();
    for (label, value) in rows {
        output.push_str(&format!(
            "{:<width$} │{} {:.2}\n",
            label,
            format_bar(*value, max_value, bar_width),
            value,
            width = label_width
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(5.0, 10.0, 4), "██░░");
        assert_eq!(format_bar(10.0, 10.0, 4), "████");
        assert_eq!(format_bar(0.0, 10.0, 4), "    ");
        assert_eq!(format_bar(-3.0, 10.0, 4), "    ");
        assert_eq!(format_bar(3.0, 0.0, 4), "    ");
    }

    #[test]
    fn test_format_bar_chart_aligns_labels() {
        let rows = vec![("a".to_string(), 2.0), ("bbb".to_string(), 4.0)];
        let chart = format_bar_chart(&rows, 4);
        assert_eq!(chart, "a   │██░░ 2.00\nbbb │████ 4.00\n");
    }

    #[test]
    fn test_format_bar_chart_empty() {
        assert_eq!(format_bar_chart(&[], 4), "");
    }
}
