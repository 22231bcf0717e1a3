//! Tabular list model
//!
//! A [`TableModel`] describes columns, optional per-row actions and optional
//! pagination; [`TableModel::render`] turns a slice of records into a
//! [`RenderedTable`] that the UI maps one-to-one onto markup.

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::rc::Rc;

use crate::action::RowAction;
use crate::pagination::{PaginationDescriptor, PaginationView};

/// Message shown when a list has no records
pub const DEFAULT_EMPTY_MESSAGE: &str = "No records found.";

/// An item shown as a table row.
///
/// Only `key` is required. `field` looks values up in the record's serde
/// representation, following dotted paths (`category.name`).
pub trait Record: Serialize {
    fn key(&self) -> String;

    fn field(&self, name: &str) -> Option<String> {
        serialized_field(self, name)
    }
}

/// Resolve a dotted path against the serde representation of `value`
pub fn serialized_field<T: Serialize + ?Sized>(value: &T, path: &str) -> Option<String> {
    let root = serde_json::to_value(value).ok()?;
    let mut current = &root;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    display_value(current)
}

fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(if *b { "Yes" } else { "No" }.to_string()),
        Value::Number(n) => Some(n.to_string()),
        // Related objects display by name
        Value::Object(map) => map.get("name").and_then(display_value),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(display_value).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
    }
}

/// Colour family of a badge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tone {
    #[default]
    Neutral,
    Success,
    Info,
    Warning,
    Danger,
}

impl Tone {
    /// Tailwind background and text classes for a badge
    pub fn class(&self) -> &'static str {
        match self {
            Tone::Neutral => "bg-gray-600/20 text-gray-300",
            Tone::Success => "bg-green-600/20 text-green-400",
            Tone::Info => "bg-blue-600/20 text-blue-400",
            Tone::Warning => "bg-yellow-600/20 text-yellow-400",
            Tone::Danger => "bg-red-600/20 text-red-400",
        }
    }
}

/// Renderable content of one table cell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Badge { text: String, tone: Tone },
    Image { src: String, alt: String },
    Link { text: String, href: String },
    #[default]
    Empty,
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    pub fn badge(text: impl Into<String>, tone: Tone) -> Self {
        Cell::Badge {
            text: text.into(),
            tone,
        }
    }

    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Cell::Link {
            text: text.into(),
            href: href.into(),
        }
    }

    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Cell::Image {
            src: src.into(),
            alt: alt.into(),
        }
    }

    /// `Text` for present values, `Empty` otherwise
    pub fn from_option(value: Option<String>) -> Self {
        value.map(Cell::Text).unwrap_or(Cell::Empty)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// How a column reads its value from a record
pub enum Accessor<R> {
    /// Named (possibly dotted) field of the record
    Field(&'static str),
    /// Computed from the whole record
    Derived(Rc<dyn Fn(&R) -> Cell>),
}

impl<R> Clone for Accessor<R> {
    fn clone(&self) -> Self {
        match self {
            Accessor::Field(name) => Accessor::Field(*name),
            Accessor::Derived(f) => Accessor::Derived(Rc::clone(f)),
        }
    }
}

impl<R> fmt::Debug for Accessor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Accessor::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

impl<R: Record> Accessor<R> {
    pub fn read(&self, record: &R) -> Cell {
        match self {
            Accessor::Field(name) => Cell::from_option(record.field(name)),
            Accessor::Derived(f) => f(record),
        }
    }
}

#[derive(Debug)]
pub struct Column<R> {
    pub label: String,
    pub accessor: Accessor<R>,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            accessor: self.accessor.clone(),
        }
    }
}

impl<R> Column<R> {
    pub fn field(label: impl Into<String>, name: &'static str) -> Self {
        Self {
            label: label.into(),
            accessor: Accessor::Field(name),
        }
    }

    pub fn derived(label: impl Into<String>, f: impl Fn(&R) -> Cell + 'static) -> Self {
        Self {
            label: label.into(),
            accessor: Accessor::Derived(Rc::new(f)),
        }
    }
}

pub type ActionsFn<R> = Rc<dyn Fn(&R) -> Vec<RowAction>>;

/// Column layout, row actions and pagination of a list screen
pub struct TableModel<R> {
    columns: Vec<Column<R>>,
    actions: Option<ActionsFn<R>>,
    pagination: Option<PaginationDescriptor>,
    empty_message: String,
}

impl<R> Clone for TableModel<R> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
            actions: self.actions.clone(),
            pagination: self.pagination.clone(),
            empty_message: self.empty_message.clone(),
        }
    }
}

impl<R: Record> TableModel<R> {
    pub fn new(columns: Vec<Column<R>>) -> Self {
        Self {
            columns,
            actions: None,
            pagination: None,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }

    pub fn actions(mut self, f: impl Fn(&R) -> Vec<RowAction> + 'static) -> Self {
        self.actions = Some(Rc::new(f));
        self
    }

    pub fn pagination(mut self, descriptor: Option<PaginationDescriptor>) -> Self {
        self.pagination = descriptor;
        self
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn headers(&self) -> Vec<String> {
        let mut headers: Vec<String> = self.columns.iter().map(|c| c.label.clone()).collect();
        if self.actions.is_some() {
            headers.push("Actions".to_string());
        }
        headers
    }

    pub fn render(&self, records: &[R]) -> RenderedTable {
        let headers = self.headers();

        let body = if records.is_empty() {
            TableBody::Empty {
                message: self.empty_message.clone(),
                colspan: headers.len().max(1),
            }
        } else {
            TableBody::Rows(records.iter().map(|r| self.render_row(r)).collect())
        };

        RenderedTable {
            headers,
            body,
            pagination: self.pagination.as_ref().and_then(PaginationDescriptor::view),
        }
    }

    fn render_row(&self, record: &R) -> RenderedRow {
        RenderedRow {
            key: record.key(),
            cells: self.columns.iter().map(|c| c.accessor.read(record)).collect(),
            actions: self.actions.as_ref().map(|f| f(record)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub key: String,
    pub cells: Vec<Cell>,
    /// `Some` whenever the table has an actions column, even if empty
    pub actions: Option<Vec<RowAction>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Rows(Vec<RenderedRow>),
    /// One full-width row carrying the empty message
    Empty { message: String, colspan: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    pub headers: Vec<String>,
    pub body: TableBody,
    pub pagination: Option<PaginationView>,
}

impl RenderedTable {
    pub fn row_count(&self) -> usize {
        match &self.body {
            TableBody::Rows(rows) => rows.len(),
            TableBody::Empty { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Verb;
    use crate::pagination::PageTemplate;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Item {
        id: u32,
        title: String,
        note: Option<String>,
        owner: Owner,
        tags: Vec<String>,
    }

    #[derive(Serialize)]
    struct Owner {
        name: String,
    }

    impl Record for Item {
        fn key(&self) -> String {
            self.id.to_string()
        }
    }

    fn item(id: u32, title: &str) -> Item {
        Item {
            id,
            title: title.into(),
            note: None,
            owner: Owner { name: "ada".into() },
            tags: vec!["a".into(), "b".into()],
        }
    }

    fn columns() -> Vec<Column<Item>> {
        vec![
            Column::field("Title", "title"),
            Column::field("Owner", "owner"),
            Column::derived("Length", |i: &Item| Cell::text(i.title.len().to_string())),
        ]
    }

    #[test]
    fn test_field_lookup() {
        let it = item(1, "Hello");
        assert_eq!(it.field("title").as_deref(), Some("Hello"));
        assert_eq!(it.field("owner.name").as_deref(), Some("ada"));
        assert_eq!(it.field("owner").as_deref(), Some("ada"));
        assert_eq!(it.field("tags").as_deref(), Some("a, b"));
        assert_eq!(it.field("tags.1").as_deref(), Some("b"));
        assert_eq!(it.field("note"), None);
        assert_eq!(it.field("missing"), None);
        assert_eq!(it.field("id").as_deref(), Some("1"));
    }

    #[test]
    fn test_rows_follow_column_order() {
        let table = TableModel::new(columns()).render(&[item(1, "Hello"), item(2, "Hi")]);
        assert_eq!(table.headers, vec!["Title", "Owner", "Length"]);

        let TableBody::Rows(rows) = &table.body else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].key, "1");
        assert_eq!(
            rows[0].cells,
            vec![Cell::text("Hello"), Cell::text("ada"), Cell::text("5")]
        );
        assert!(rows[0].actions.is_none());
    }

    #[test]
    fn test_missing_field_renders_empty_cell() {
        let table = TableModel::new(vec![Column::field("Note", "note")]).render(&[item(1, "x")]);
        let TableBody::Rows(rows) = table.body else {
            panic!("expected rows");
        };
        assert!(rows[0].cells[0].is_empty());
    }

    #[test]
    fn test_empty_records_single_row() {
        for n in 0..4 {
            let cols: Vec<Column<Item>> = columns().into_iter().take(n).collect();
            let table = TableModel::new(cols)
                .empty_message("No posts yet.")
                .render(&[]);
            assert_eq!(table.row_count(), 1);
            assert_eq!(
                table.body,
                TableBody::Empty {
                    message: "No posts yet.".into(),
                    colspan: n.max(1),
                }
            );
        }
    }

    #[test]
    fn test_actions_column() {
        let model = TableModel::new(columns()).actions(|i: &Item| {
            vec![
                RowAction::get("Edit", format!("/admin/items/{}/edit", i.id)),
                RowAction::delete(format!("/items/{}", i.id)),
            ]
        });
        assert_eq!(model.headers().last().map(String::as_str), Some("Actions"));

        let table = model.render(&[item(7, "x")]);
        let TableBody::Rows(rows) = table.body else {
            panic!("expected rows");
        };
        let actions = rows[0].actions.as_ref().unwrap();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].target, "/admin/items/7/edit");
        assert_eq!(actions[1].verb, Verb::Delete);
        assert!(actions[1].confirm.is_some());

        // Empty table still spans the actions column
        let table = model.render(&[]);
        assert!(matches!(table.body, TableBody::Empty { colspan: 4, .. }));
    }

    #[test]
    fn test_pagination_passthrough() {
        let desc = PaginationDescriptor {
            current_page: 1,
            last_page: 3,
            per_page: 2,
            total: 5,
            template: PageTemplate::new("/admin/items"),
        };
        let table = TableModel::new(columns())
            .pagination(Some(desc.clone()))
            .render(&[item(1, "a"), item(2, "b")]);
        let view = table.pagination.unwrap();
        assert_eq!(view.links.len(), 3);
        assert_eq!(view.summary, "Showing 1 to 2 of 5");

        let single = PaginationDescriptor {
            last_page: 1,
            ..desc
        };
        let table = TableModel::new(columns())
            .pagination(Some(single))
            .render(&[item(1, "a")]);
        assert!(table.pagination.is_none());
    }

    #[test]
    fn test_tone_classes_are_distinct() {
        let tones = [Tone::Neutral, Tone::Success, Tone::Info, Tone::Warning, Tone::Danger];
        let classes: std::collections::HashSet<&str> = tones.iter().map(Tone::class).collect();
        assert_eq!(classes.len(), tones.len());
        assert_eq!(Tone::default().class(), "bg-gray-600/20 text-gray-300");
        assert!(Tone::Danger.class().contains("red"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let model = TableModel::new(columns());
        let records = [item(1, "a")];
        assert_eq!(model.render(&records), model.render(&records));
    }
}
