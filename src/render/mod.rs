//! Terminal rendering of a classified comparison.
//!
//! Consumes the per-line classification and produces the two-column view
//! with a line-number gutter and a `+a -r ~m` summary row. Colors come from
//! `colored`; tests disable them with `colored::control::set_override`.

use colored::{ColoredString, Colorize};

use crate::diff::DiffSummary;
use crate::project::{Comparison, DocView, LineMark};

/// Render both documents side by side, one gutter-numbered row per line.
pub fn side_by_side(cmp: &Comparison) -> String {
    let rows = cmp.left.lines.len().max(cmp.right.lines.len());
    let gutter = rows.to_string().len();
    let left_width = cmp
        .left
        .lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for i in 0..rows {
        let left = column(&cmp.left, i, gutter, left_width);
        let right = column(&cmp.right, i, gutter, 0);
        out.push_str(&format!("{left} | {right}\n"));
    }
    out
}

/// Aggregate counts in the `+a -r ~m` form.
pub fn summary(summary: &DiffSummary) -> String {
    format!(
        "{} {} {}",
        format!("+{}", summary.added).green().bold(),
        format!("-{}", summary.removed).red().bold(),
        format!("~{}", summary.modified).yellow().bold(),
    )
}

fn column(view: &DocView, i: usize, gutter: usize, width: usize) -> String {
    match view.lines.get(i) {
        Some(line) => {
            let mark = view.marks[i];
            let text = format!("{:>gutter$} {} {:<width$}", i + 1, sigil(mark), line);
            paint(text, mark).to_string()
        }
        // The shorter side runs out of lines; keep the columns aligned.
        None => format!("{:>gutter$}   {:<width$}", "", ""),
    }
}

fn sigil(mark: LineMark) -> char {
    match mark {
        LineMark::Unchanged => ' ',
        LineMark::Added => '+',
        LineMark::Removed => '-',
        LineMark::ModifiedLeft | LineMark::ModifiedRight => '~',
    }
}

fn paint(text: String, mark: LineMark) -> ColoredString {
    match mark {
        LineMark::Unchanged => text.normal(),
        LineMark::Added => text.green(),
        LineMark::Removed => text.red(),
        LineMark::ModifiedLeft | LineMark::ModifiedRight => text.yellow(),
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use crate::project::compare_texts;

    use super::*;

    fn render_plain(left: &str, right: &str) -> (String, String) {
        colored::control::set_override(false);
        let cmp = compare_texts(left, right).unwrap();
        (side_by_side(&cmp), summary(&cmp.summary))
    }

    #[test]
    fn test_rows_cover_the_longer_side() {
        let (view, _) = render_plain(r#"{"a": 1}"#, r#"{"a": 1, "b": 2}"#);

        // Left has 3 lines, right has 4; the view has 4 rows.
        check!(view.lines().count() == 4);
        check!(view.lines().all(|row| row.contains(" | ")));
    }

    #[test]
    fn test_changed_rows_carry_sigils() {
        let (view, _) = render_plain(r#"{"a": 1, "b": 2}"#, r#"{"a": 9}"#);

        let b_row = view
            .lines()
            .find(|row| row.contains("\"b\""))
            .expect("row for b");
        check!(b_row.trim_start().starts_with("3 -"));

        let a_row = view
            .lines()
            .find(|row| row.contains("\"a\""))
            .expect("row for a");
        check!(a_row.matches('~').count() == 2, "modified on both sides");
    }

    #[test]
    fn test_summary_counts_in_order() {
        let (_, line) = render_plain(r#"{"a": 1, "b": 2}"#, r#"{"a": 9, "c": 1}"#);

        check!(line == "+1 -1 ~1");
    }
}
