use std::io::IsTerminal;

use crate::cli::{ColorMode, GlobalFlags};

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

impl TableOptions {
    /// Width from `COLUMNS` (ignored below 40). Color follows `--color`;
    /// `auto` colors only an interactive, non-quiet stdout without `NO_COLOR`.
    #[must_use]
    pub fn for_flags(flags: &GlobalFlags) -> Self {
        let color = match flags.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                !flags.quiet
                    && std::io::stdout().is_terminal()
                    && std::env::var_os("NO_COLOR").is_none()
            }
        };

        let max_width = std::env::var("COLUMNS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|width| *width >= 40);

        Self { max_width, color }
    }
}

/// Render an aligned table for string rows.
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
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, 0))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string();
    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(value, *width);
                let plain_len = truncated.chars().count();
                let cell = if options.color {
                    colorize_relation(&truncated)
                } else {
                    truncated
                };
                pad(&cell, *width, plain_len)
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(6))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = widest else {
            break;
        };
        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Left-align `value` to `width`. `plain_len` is the visible length when
/// `value` carries color codes; zero means measure it.
fn pad(value: &str, width: usize, plain_len: usize) -> String {
    let visible = if plain_len == 0 {
        value.chars().count()
    } else {
        plain_len
    };
    format!("{value}{}", " ".repeat(width.saturating_sub(visible)))
}

fn colorize_relation(value: &str) -> String {
    let code = match value {
        "Shared" | "loaded" => Some("32"),
        "Collected" => Some("33"),
        "Both" => Some("35"),
        "failed" => Some("31"),
        _ => None,
    };

    match code {
        Some(code) => format!("\u{1b}[{code}m{value}\u{1b}[0m"),
        None => value.to_string(),
    }
}
