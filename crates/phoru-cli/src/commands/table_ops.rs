use std::fmt::Write;

use phoru_core::{LengthClass, MappingTable};

/// Sorted listing of every class, one `\t <latin> : <cyrillic>` line per entry.
pub fn format_tables(table: &MappingTable) -> String {
    let mut out = String::new();
    for class in LengthClass::ALL {
        for (latin, cyrillic) in table.entries(class) {
            let _ = writeln!(out, "\t {latin} : {cyrillic}");
        }
    }
    out
}

/// Text shown after the flag list in `--help`.
pub fn help_text(table: &MappingTable) -> String {
    format!(
        "example:\n\t echo privet mir | phoru\n\n\
         translation tables:\n{}\n\
         in server mode:\n\t phoru --http :6060\n",
        format_tables(table)
    )
}
