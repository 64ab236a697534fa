use std::fmt::Write;

use ktab_common::PadStringExt;
use ktab_table::{ColumnSpec, ColumnVisibility, Pager, SortOrder, TableView};

#[cfg(test)]
#[path = "./render.tests.rs"]
mod render_tests;

/// Renders the pager's page of the table view as plain text lines:
/// header, rows and a footer with page and filter information.
pub fn render_page<T>(table: &TableView<T>, visibility: &ColumnVisibility, pager: &mut Pager) -> String {
    let columns = visibility.visible(table.columns()).collect::<Vec<_>>();
    let labels = header_labels(table, &columns);
    let widths = column_widths(table, &columns, &labels);

    let mut output = String::new();
    push_line(&mut output, &columns, &widths, |i, _| labels[i].clone());

    for row in table.page(pager) {
        push_line(&mut output, &columns, &widths, |_, column| column.text(row));
    }

    output.push_str(&footer_text(table, pager));
    output.push('\n');
    output
}

/// Renders distinct filter values with their occurrence count badges.
pub fn render_facets<T>(table: &TableView<T>) -> String {
    let mut output = String::new();
    for column in table.columns().iter().filter(|c| c.is_filterable()) {
        let Some(values) = table.facets().values(column.id()) else {
            continue;
        };

        let _ = writeln!(output, "{}:", column.label());
        for value in values {
            let value_text = if value.is_empty() { "-" } else { value };
            let _ = writeln!(output, "  {} ({})", value_text, table.facets().count(column.id(), value));
        }
    }

    output
}

/// Builds column labels with the `↑`/`↓` marker on the active sort column.
fn header_labels<T>(table: &TableView<T>, columns: &[&ColumnSpec<T>]) -> Vec<String> {
    let sort = table.sort_state();
    columns
        .iter()
        .map(|column| {
            if column.id() == sort.key() {
                let marker = if sort.order() == SortOrder::Descending { '↓' } else { '↑' };
                format!("{}{}", column.label(), marker)
            } else {
                column.label().to_owned()
            }
        })
        .collect()
}

/// Computes a width for every visible column from its label and all values in
/// the filtered view, so widths stay stable across pages.
fn column_widths<T>(table: &TableView<T>, columns: &[&ColumnSpec<T>], labels: &[String]) -> Vec<usize> {
    let mut widths = labels.iter().map(|label| label.chars().count()).collect::<Vec<_>>();

    for row in table.iter() {
        for (i, column) in columns.iter().enumerate() {
            widths[i] = widths[i].max(column.text(row).chars().count());
        }
    }

    widths
}

fn push_line<T>(output: &mut String, columns: &[&ColumnSpec<T>], widths: &[usize], cell: impl Fn(usize, &ColumnSpec<T>) -> String) {
    for (i, column) in columns.iter().copied().enumerate() {
        if i > 0 {
            output.push(' ');
        }

        output.push_cell(&cell(i, column), widths[i], column.is_right_aligned());
    }

    output.push('\n');
}

fn footer_text<T>(table: &TableView<T>, pager: &Pager) -> String {
    let mut footer = format!(
        "page {}/{} | {} of {} rows",
        pager.page_index() + 1,
        pager.page_count(table.len()),
        table.len(),
        table.full_len()
    );

    if table.has_active_filters() {
        footer.push_str(" | filtered");
    }

    footer
}
