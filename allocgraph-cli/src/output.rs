use comfy_table::{presets, CellAlignment, Table};
use serde::Serialize;

use crate::app::GlobalOptions;

/// Print `data` as JSON (if `--json`) or call `display_fn` for human-readable output.
pub fn print_output<T: Serialize>(
    data: &T,
    opts: &GlobalOptions,
    display_fn: impl FnOnce(&T),
) -> anyhow::Result<()> {
    if opts.json {
        println!("{}", serde_json::to_string_pretty(data)?);
    } else {
        display_fn(data);
    }
    Ok(())
}

/// Joins ids for a one-line listing, `-` when there are none.
pub fn id_list<S: AsRef<str>>(ids: &[S], separator: &str) -> String {
    if ids.is_empty() {
        return "-".to_string();
    }
    ids.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(separator)
}

/// Labelled numeric grid: a left-aligned label column followed by
/// right-aligned value columns, indented two spaces.
pub struct Grid {
    table: Table,
}

impl Grid {
    pub fn new<'a>(label: &str, values: impl IntoIterator<Item = &'a str>) -> Self {
        let mut header = vec![label.to_string()];
        header.extend(values.into_iter().map(str::to_string));
        let last = header.len() - 1;

        let mut table = Table::new();
        table.load_preset(presets::NOTHING).set_header(header);
        for (i, col) in table.column_iter_mut().enumerate() {
            if i > 0 {
                col.set_cell_alignment(CellAlignment::Right);
            }
            col.set_padding((u16::from(i > 0), u16::from(i < last)));
        }
        Self { table }
    }

    pub fn push(&mut self, label: &str, values: impl IntoIterator<Item = impl ToString>) {
        let mut row = vec![label.to_string()];
        row.extend(values.into_iter().map(|v| v.to_string()));
        self.table.add_row(row);
    }

    fn render(&self) -> String {
        self.table
            .lines()
            .map(|line| format!("  {}\n", line.trim_end()))
            .collect()
    }

    pub fn print(&self) {
        print!("{}", self.render());
    }
}
