//! A minimal HTML table builder.
//!
//! Cells are inserted one at a time at a `(row, column)` coordinate. Rows and
//! columns without any cell are rendered as empty `<td>` elements up to the
//! largest coordinate used. A cell with a `rowspan` or `colspan` attribute hides
//! the cells it covers.

use std::{collections::BTreeMap, fmt};

/// One table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    content: String,
    attributes: Vec<(String, String)>,
}

impl TableCell {
    /// Returns the cell's markup, already escaped.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the attributes in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Returns the value of an attribute.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_str())
    }

    fn span(&self, name: &str) -> usize {
        self.attribute(name)
            .and_then(|value| value.trim().parse().ok())
            .filter(|span| *span > 0)
            .unwrap_or(1)
    }
}

/// Sparse `(row, column)` store rendered as a `<table>`.
///
/// # Examples
///
/// ```
/// use wordlace_render::table::HtmlTable;
///
/// let mut table = HtmlTable::new();
/// table.add_cell("A & B", 0, 0, [("colspan", "2")]);
/// table.add_cell("hidden", 0, 1, [("class", "x")]);
/// table.add_cell("C", 1, 1, [("class", "letter")]);
///
/// assert_eq!(
///     table.to_string(),
///     "<table>\n\
///      <tr><td colspan=\"2\">A &amp; B</td></tr>\n\
///      <tr><td></td><td class=\"letter\">C</td></tr>\n\
///      </table>"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlTable {
    attributes: Vec<(String, String)>,
    cells: BTreeMap<(usize, usize), TableCell>,
}

impl HtmlTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an attribute to the `<table>` element.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Inserts a text cell, replacing any cell at the same coordinate.
    ///
    /// The text is escaped.
    pub fn add_cell<I, K, V>(&mut self, content: &str, row: usize, column: usize, attributes: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.add_markup_cell(escape(content), row, column, attributes);
    }

    /// Inserts a cell whose content is trusted markup, inserted as-is.
    pub fn add_markup_cell<I, K, V>(
        &mut self,
        markup: impl Into<String>,
        row: usize,
        column: usize,
        attributes: I,
    ) where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let cell = TableCell {
            content: markup.into(),
            attributes: attributes
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        };
        self.cells.insert((row, column), cell);
    }

    /// Returns the cell at a coordinate.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<&TableCell> {
        self.cells.get(&(row, column))
    }

    /// Returns the number of rendered rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells
            .iter()
            .map(|(&(row, _), cell)| row + cell.span("rowspan"))
            .max()
            .unwrap_or(0)
    }

    /// Returns the number of rendered columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.cells
            .iter()
            .map(|(&(_, column), cell)| column + cell.span("colspan"))
            .max()
            .unwrap_or(0)
    }

    fn is_covered(&self, row: usize, column: usize) -> bool {
        self.cells.iter().any(|(&(r, c), cell)| {
            (r, c) != (row, column)
                && (r..r + cell.span("rowspan")).contains(&row)
                && (c..c + cell.span("colspan")).contains(&column)
        })
    }
}

impl fmt::Display for HtmlTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<table")?;
        write_attributes(f, &self.attributes)?;
        writeln!(f, ">")?;
        for row in 0..self.rows() {
            write!(f, "<tr>")?;
            for column in 0..self.columns() {
                if self.is_covered(row, column) {
                    continue;
                }
                match self.cell(row, column) {
                    Some(cell) => {
                        write!(f, "<td")?;
                        write_attributes(f, &cell.attributes)?;
                        write!(f, ">{}</td>", cell.content)?;
                    }
                    None => write!(f, "<td></td>")?,
                }
            }
            writeln!(f, "</tr>")?;
        }
        write!(f, "</table>")
    }
}

fn write_attributes(f: &mut fmt::Formatter<'_>, attributes: &[(String, String)]) -> fmt::Result {
    for (name, value) in attributes {
        write!(f, " {}=\"{}\"", escape(name), escape(value))?;
    }
    Ok(())
}

/// Escapes text for use in HTML content and attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
