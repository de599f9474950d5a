use anyhow::Result;
use colored::{ColoredString, Colorize};
use corrmat_view::{CellTag, DisplayTable};
use std::path::Path;
use tracing::info;

const NUMERIC_WIDTH: usize = 8;

/// Prints the table with one colored cell per tag.
pub fn print_table(table: &DisplayTable) {
    let label_width = table
        .rows
        .iter()
        .map(|row| row[0].len())
        .max()
        .unwrap_or(0)
        .max(2);

    let mut header = format!("{:<width$}", "", width = label_width);
    for title in table.headers.iter().skip(1) {
        header.push(' ');
        header.push_str(&format!("{:>width$}", title, width = NUMERIC_WIDTH));
    }
    println!("{}", header.bold());

    for (row, row_tags) in table.rows.iter().zip(table.tags.iter()) {
        let label = format!("{:<width$}", row[0], width = label_width);
        print!("{}", paint(&label, row_tags[0]));
        for (cell, tag) in row.iter().zip(row_tags.iter()).skip(1) {
            let cell = format!("{:>width$}", cell, width = NUMERIC_WIDTH);
            print!(" {}", paint(&cell, *tag));
        }
        println!();
    }
}

// padding happens before coloring; escape codes would break the alignment
fn paint(text: &str, tag: CellTag) -> ColoredString {
    match tag {
        CellTag::Neutral => text.bold(),
        CellTag::Identity => text.cyan(),
        CellTag::Positive => text.green(),
        CellTag::Negative => text.red(),
    }
}

/// Writes headers and rows (without color tags) to `path` as CSV.
pub fn export_csv(table: &DisplayTable, path: &Path) -> Result<()> {
    let mut out = String::new();
    out.push_str(&table.headers.join(","));
    out.push('\n');
    for row in &table.rows {
        out.push_str(&row.join(","));
        out.push('\n');
    }

    std::fs::write(path, out)?;
    info!("table exported to {}", path.display());
    Ok(())
}
