#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN_WIDTH: usize = 6;
const SEPARATOR: &str = "  ";

/// Render an aligned table for string rows.
///
/// Widths are measured in characters so accented labels line up.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| char_len(cell))
                .max()
                .unwrap_or(0)
                .max(char_len(header))
                .max(MIN_COLUMN_WIDTH)
        })
        .collect();

    shrink_to_fit(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let divider = "-".repeat(char_len(&header_line));

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).map_or("-", String::as_str);
                let text = truncate(cell, *width);
                let padded = pad(&text, *width, looks_numeric(&text));
                if options.color {
                    colorize_status(&padded, &text)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        lines.push(line);
    }
    lines.join("\n")
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Narrow the widest columns one character at a time until the table fits.
fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();

    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > char_len(headers[*idx]).max(MIN_COLUMN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);
        let Some(idx) = widest else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if char_len(value) <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(char_len(value)));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().all(|ch| ch.is_ascii_digit() || ch == '.')
}

/// Color known status words. `padded` is the cell as laid out, `text` its content.
fn colorize_status(padded: &str, text: &str) -> String {
    let code = match text.trim() {
        "true" | "complete" | "completed" => "32",
        "in_progress" | "pending" => "33",
        "false" => "31",
        _ => return padded.to_string(),
    };
    padded.replacen(text, &format!("\u{1b}[{code}m{text}\u{1b}[0m"), 1)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn accented_cells_align() {
        let rows = vec![
            vec!["Réa Mère".to_string(), "5".to_string()],
            vec!["Bloc".to_string(), "4".to_string()],
        ];
        let table = render_entity_table(&["sector", "zones"], &rows, PLAIN);
        let widths: Vec<usize> = table.lines().map(|l| l.chars().count()).collect();
        assert_eq!(widths[2], widths[3]);
        assert_eq!(widths[0], widths[2]);
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let rows = vec![vec!["chk-1".to_string()]];
        let table = render_entity_table(&["id", "zone"], &rows, PLAIN);
        let row = table.lines().nth(2).unwrap();
        assert!(row.trim_end().ends_with('-'));
    }

    #[test]
    fn max_width_truncates_widest_column() {
        let rows = vec![vec![
            "jrn-1".to_string(),
            "Un message beaucoup trop long pour la colonne".to_string(),
        ]];
        let table = render_entity_table(
            &["id", "message"],
            &rows,
            TableOptions {
                max_width: Some(30),
                color: false,
            },
        );
        let row = table.lines().nth(2).unwrap();
        assert!(row.chars().count() <= 30);
        assert!(row.contains('…'));
    }

    #[test]
    fn color_wraps_status_words_only() {
        let rows = vec![vec!["complete".to_string(), "Bloc".to_string()]];
        let table = render_entity_table(
            &["status", "sector"],
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        let row = table.lines().nth(2).unwrap();
        assert!(row.contains("\u{1b}[32mcomplete\u{1b}[0m"));
        assert!(!row.contains("\u{1b}[32mBloc"));
    }
}
