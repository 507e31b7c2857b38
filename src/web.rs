use std::{collections::BTreeMap, fmt::Write as _, io::Write};

use anyhow::Context;

use crate::{
    format::format_number,
    source::{self, NamedSource, SourceOutcome, COLUMN1_FALLBACK, COLUMN2_FALLBACK},
};

const RELOAD_NOTICE: &str = "File created, reload the page";

/// Runs every source without any interactive step, keyed by source name.
pub fn collect(sources: &[NamedSource]) -> BTreeMap<String, SourceOutcome> {
    sources
        .iter()
        .map(|source| (source.name.clone(), source::process(source)))
        .collect()
}

pub fn render_page(sources: &[NamedSource], results: &BTreeMap<String, SourceOutcome>) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html>\n<head>\n");
    html.push_str("    <link rel=\"stylesheet\" href=\"style.css\">\n");
    html.push_str("    <title>Statistical Calculation</title>\n");
    html.push_str("</head>\n<body>\n");
    html.push_str("    <div class=\"container\">\n");
    html.push_str("        <h1>Mean and Standard Deviation</h1>\n");

    for source in sources {
        let _ = writeln!(html, "        <div class=\"resultado\">");
        let _ = writeln!(html, "            <h2>{}</h2>", escape(&capitalize(&source.name)));

        match results.get(&source.name) {
            Some(SourceOutcome::Computed(summary)) => {
                let _ = writeln!(
                    html,
                    "            <p><strong>Count:</strong> {}</p>",
                    summary.count
                );
                let _ = writeln!(
                    html,
                    "            <p><strong>Mean:</strong> <span class=\"numero\">{}</span></p>",
                    format_number(summary.mean)
                );
                let _ = writeln!(
                    html,
                    "            <p><strong>Standard deviation:</strong> <span class=\"numero\">{}</span></p>",
                    format_number(summary.std_dev)
                );
            }
            Some(SourceOutcome::Created { .. }) => {
                let _ = writeln!(html, "            <div class=\"error\">{RELOAD_NOTICE}</div>");
            }
            Some(SourceOutcome::Failed { reason }) => {
                let _ = writeln!(html, "            <div class=\"error\">{}</div>", escape(reason));
            }
            None => {
                let _ = writeln!(html, "            <div class=\"error\">No result</div>");
            }
        }

        html.push_str("        </div>\n");
    }

    html.push_str("        <div class=\"resultado\">\n");
    html.push_str("            <h2>Data</h2>\n");
    html.push_str("            <p>Data tables</p>\n");
    html.push_str("            <ul>\n");
    let _ = writeln!(html, "                <li>{COLUMN1_FALLBACK}</li>");
    let _ = writeln!(html, "                <li>{COLUMN2_FALLBACK}</li>");
    html.push_str("            </ul>\n");
    html.push_str("        </div>\n");
    html.push_str("    </div>\n");
    html.push_str("</body>\n</html>\n");

    html
}

/// Writes the page, preceded by a CGI header when a web server is listening.
pub fn run<W: Write>(sources: &[NamedSource], cgi: bool, mut out: W) -> anyhow::Result<()> {
    let results = collect(sources);
    let page = render_page(sources, &results);

    if cgi {
        write!(out, "Content-Type: text/html; charset=utf-8\r\n\r\n")?;
    }
    out.write_all(page.as_bytes())
        .context("Error writing HTML page")?;
    out.flush().context("Error flushing HTML page")
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
