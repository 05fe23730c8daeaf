use std::collections::VecDeque;
use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Node};

static THOUSANDS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?\d{1,3}(,\d{3})+(\.\d+)?$").expect("thousands pattern is valid")
});

/// One `<table>` block with row/column spans expanded into a rectangular grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Header rows, outermost first.
    pub header: Vec<Vec<Option<String>>>,
    /// Data rows (`<tbody>`, bare `<tr>`, then `<tfoot>`).
    pub body: Vec<Vec<Option<String>>>,
}

impl RawTable {
    /// Width of the widest row.
    pub fn width(&self) -> usize {
        self.header
            .iter()
            .chain(self.body.iter())
            .map(Vec::len)
            .max()
            .unwrap_or(0)
    }

    /// `true` when no cell carries any text.
    pub fn is_blank(&self) -> bool {
        self.header
            .iter()
            .chain(self.body.iter())
            .flatten()
            .all(Option::is_none)
    }
}

#[derive(Debug)]
struct Cell {
    is_th: bool,
    text: Option<String>,
    rowspan: usize,
    colspan: usize,
}

/// Reads every visible `<table>` in `html` that has at least one non-empty cell, in
/// document order.
///
/// Nested tables are returned as blocks of their own. Empty tables (layout spacers, tables
/// with only blank cells) are not counted. Markup is parsed the way a browser
/// would, so unclosed or misplaced tags do not abort parsing. Elements hidden with
/// `display: none` are skipped.
pub fn parse_tables(html: &str) -> Vec<RawTable> {
    let document = Html::parse_document(html);
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "table" && !hidden_within(*el))
        .map(read_table)
        .filter(|t| !t.is_blank())
        .collect()
}

fn read_table(table: ElementRef<'_>) -> RawTable {
    let mut head = Vec::new();
    let mut body = Vec::new();
    let mut foot = Vec::new();

    for child in child_elements(table) {
        match child.value().name() {
            "thead" => head.extend(rows_of(child)),
            "tbody" => body.extend(rows_of(child)),
            "tfoot" => foot.extend(rows_of(child)),
            "tr" => body.push(read_row(child)),
            _ => {}
        }
    }

    // without <thead>, leading all-<th> rows act as the header
    if head.is_empty() {
        while body
            .first()
            .is_some_and(|r: &Vec<Cell>| !r.is_empty() && r.iter().all(|c| c.is_th))
        {
            head.push(body.remove(0));
        }
    }

    let mut raw = RawTable {
        header: expand_spans(head),
        body: expand_spans(body),
    };
    raw.body.extend(expand_spans(foot));

    let width = raw.width();
    for row in raw.header.iter_mut().chain(raw.body.iter_mut()) {
        row.resize(width, None);
    }
    raw
}

fn rows_of(section: ElementRef<'_>) -> Vec<Vec<Cell>> {
    child_elements(section)
        .filter(|el| el.value().name() == "tr")
        .map(read_row)
        .collect()
}

fn read_row(tr: ElementRef<'_>) -> Vec<Cell> {
    child_elements(tr)
        .filter(|el| matches!(el.value().name(), "td" | "th"))
        .map(|el| Cell {
            is_th: el.value().name() == "th",
            text: cell_text(el),
            rowspan: span_attr(el, "rowspan"),
            colspan: span_attr(el, "colspan"),
        })
        .collect()
}

fn child_elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    el.children()
        .filter_map(ElementRef::wrap)
        .filter(|child| !is_hidden(*child))
}

fn span_attr(el: ElementRef<'_>, name: &str) -> usize {
    el.value()
        .attr(name)
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(1)
}

fn is_hidden(el: ElementRef<'_>) -> bool {
    el.value().attr("style").is_some_and(|style| {
        let compact: String = style.chars().filter(|c| !c.is_whitespace()).collect();
        compact.to_ascii_lowercase().contains("display:none")
    })
}

fn hidden_within(el: ElementRef<'_>) -> bool {
    is_hidden(el) || el.ancestors().filter_map(ElementRef::wrap).any(is_hidden)
}

/// Visible text of a cell with whitespace runs collapsed; `None` if nothing is left.
fn cell_text(cell: ElementRef<'_>) -> Option<String> {
    let mut raw = String::new();
    collect_text(cell, &mut raw);
    let text = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        return None;
    }
    if THOUSANDS_RE.is_match(&text) {
        return Some(text.replace(',', ""));
    }
    Some(text)
}

fn collect_text(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(t) => out.push_str(t),
            Node::Element(_) => {
                if let Some(inner) = ElementRef::wrap(child)
                    && !is_hidden(inner)
                {
                    collect_text(inner, out);
                }
            }
            _ => {}
        }
    }
}

/// Copies spanning cells into every grid slot they cover.
///
/// Spans never cross sections; a rowspan running past the last row adds rows of its own.
fn expand_spans(rows: Vec<Vec<Cell>>) -> Vec<Vec<Option<String>>> {
    let mut grid = Vec::with_capacity(rows.len());
    // (column, text, rows still to fill)
    let mut pending: VecDeque<(usize, Option<String>, usize)> = VecDeque::new();

    for row in rows {
        let mut out = Vec::new();
        let mut next = VecDeque::new();
        let mut col = 0;

        for cell in row {
            while pending.front().is_some_and(|p| p.0 <= col) {
                let Some((prev_col, text, left)) = pending.pop_front() else {
                    break;
                };
                out.push(text.clone());
                if left > 1 {
                    next.push_back((prev_col, text, left - 1));
                }
                col += 1;
            }
            for _ in 0..cell.colspan {
                out.push(cell.text.clone());
                if cell.rowspan > 1 {
                    next.push_back((col, cell.text.clone(), cell.rowspan - 1));
                }
                col += 1;
            }
        }
        for (prev_col, text, left) in pending.drain(..) {
            out.push(text.clone());
            if left > 1 {
                next.push_back((prev_col, text, left - 1));
            }
        }

        grid.push(out);
        pending = next;
    }

    while !pending.is_empty() {
        let mut out = Vec::new();
        let mut next = VecDeque::new();
        for (prev_col, text, left) in pending.drain(..) {
            out.push(text.clone());
            if left > 1 {
                next.push_back((prev_col, text, left - 1));
            }
        }
        grid.push(out);
        pending = next;
    }

    grid
}
