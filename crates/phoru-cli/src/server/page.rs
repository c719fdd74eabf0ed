//! HTML page for the web form.

use std::fmt::Write;

use phoru_core::{LengthClass, MappingTable};

pub struct PageData<'a> {
    pub input: &'a str,
    pub output: Option<&'a str>,
    pub table: &'a MappingTable,
}

const CELL: &str = "border: 1px solid black; padding: 7px; text-align: center";
const TABLE: &str = "border: 1px solid black; border-collapse: collapse";

pub fn render(data: &PageData<'_>) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str(
        "<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"utf-8\">\n  <title>Phoru</title>\n</head>\n<body>\n",
    );
    html.push_str("<h1>Translate from pseudo-phonetic Russian into Cyrillic Russian.</h1>\n");

    html.push_str("<form action=\"/\" method=\"POST\" id=\"translateform\">\n");
    let _ = writeln!(
        html,
        "<textarea rows=\"5\" cols=\"100\" name=\"inputtext\" form=\"translateform\">{}</textarea>",
        escape(data.input)
    );
    html.push_str("<input type=\"submit\" id=\"textsubmit\" value=\"Translate\">\n</form>\n");

    if let Some(output) = data.output.filter(|o| !o.is_empty()) {
        let _ = writeln!(
            html,
            "<h2>Conversion result</h2>\n<pre>{}</pre>",
            escape(output)
        );
    }

    html.push_str("<h2>Conversion table</h2>\n");
    for class in LengthClass::ALL {
        push_table(&mut html, data.table, class);
    }
    html.push_str("</body>\n</html>\n");
    html
}

fn push_table(html: &mut String, table: &MappingTable, class: LengthClass) {
    if table.class_len(class) == 0 {
        return;
    }
    let _ = writeln!(html, "<table class=\"{class}\" style=\"{TABLE}\">");
    html.push_str("<tr>");
    for (latin, _) in table.entries(class) {
        let _ = write!(html, "<td style=\"{CELL}\">{}</td>", escape(latin));
    }
    html.push_str("</tr>\n<tr>");
    for (_, cyrillic) in table.entries(class) {
        let mut buf = [0u8; 4];
        let _ = write!(
            html,
            "<td style=\"{CELL}\">{}</td>",
            escape(cyrillic.encode_utf8(&mut buf))
        );
    }
    html.push_str("</tr>\n</table>\n");
}

/// Escape text for HTML element content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
