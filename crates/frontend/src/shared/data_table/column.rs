//! Column descriptors and the content a formatted cell produces.

use std::fmt;
use std::sync::Arc;

use leptos::prelude::{AnyView, ViewFn};

use super::cell::CellValue;

/// Badge tone of a chip cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChipTone {
    #[default]
    Default,
    Primary,
    Secondary,
    Info,
    Success,
    Warning,
    Error,
}

impl ChipTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChipTone::Default => "default",
            ChipTone::Primary => "primary",
            ChipTone::Secondary => "secondary",
            ChipTone::Info => "info",
            ChipTone::Success => "success",
            ChipTone::Warning => "warning",
            ChipTone::Error => "error",
        }
    }
}

type ToneFn = Arc<dyn Fn(Option<&CellValue>) -> ChipTone + Send + Sync>;

/// Tone of a chip: fixed, or computed from the cell value.
#[derive(Clone)]
pub enum ChipColor {
    Static(ChipTone),
    ByValue(ToneFn),
}

impl ChipColor {
    pub fn by_value<F>(f: F) -> Self
    where
        F: Fn(Option<&CellValue>) -> ChipTone + Send + Sync + 'static,
    {
        ChipColor::ByValue(Arc::new(f))
    }

    pub fn resolve(&self, value: Option<&CellValue>) -> ChipTone {
        match self {
            ChipColor::Static(tone) => *tone,
            ChipColor::ByValue(f) => f(value),
        }
    }
}

impl Default for ChipColor {
    fn default() -> Self {
        ChipColor::Static(ChipTone::Default)
    }
}

impl fmt::Debug for ChipColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChipColor::Static(tone) => f.debug_tuple("Static").field(tone).finish(),
            ChipColor::ByValue(_) => f.write_str("ByValue(..)"),
        }
    }
}

/// What a formatted cell displays.
#[derive(Clone)]
pub enum CellContent {
    Empty,
    Text(String),
    Chip { label: String, tone: ChipTone },
    /// Arbitrary markup produced by a custom renderer.
    View(ViewFn),
}

impl CellContent {
    pub fn text(value: impl Into<String>) -> Self {
        CellContent::Text(value.into())
    }

    pub fn chip(label: impl Into<String>, tone: ChipTone) -> Self {
        CellContent::Chip {
            label: label.into(),
            tone,
        }
    }

    pub fn view<F>(f: F) -> Self
    where
        F: Fn() -> AnyView + Send + Sync + 'static,
    {
        CellContent::View(ViewFn::from(f))
    }

    /// Plain text of the cell, if it has any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellContent::Text(s) => Some(s),
            CellContent::Chip { label, .. } => Some(label),
            CellContent::Empty | CellContent::View(_) => None,
        }
    }
}

impl fmt::Debug for CellContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellContent::Empty => f.write_str("Empty"),
            CellContent::Text(s) => f.debug_tuple("Text").field(s).finish(),
            CellContent::Chip { label, tone } => f
                .debug_struct("Chip")
                .field("label", label)
                .field("tone", tone)
                .finish(),
            CellContent::View(_) => f.write_str("View(..)"),
        }
    }
}

impl PartialEq for CellContent {
    /// Views never compare equal.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CellContent::Empty, CellContent::Empty) => true,
            (CellContent::Text(a), CellContent::Text(b)) => a == b,
            (
                CellContent::Chip { label: a, tone: ta },
                CellContent::Chip { label: b, tone: tb },
            ) => a == b && ta == tb,
            _ => false,
        }
    }
}

type RenderFn<R> = Arc<dyn Fn(Option<&CellValue>, &R) -> CellContent + Send + Sync>;

/// How a column turns its value into content.
pub enum ColumnKind<R> {
    Plain,
    Chip(ChipColor),
    Currency,
    Date,
    DateTime,
    /// Replaces type-based formatting entirely.
    Custom(RenderFn<R>),
}

impl<R> Clone for ColumnKind<R> {
    fn clone(&self) -> Self {
        match self {
            ColumnKind::Plain => ColumnKind::Plain,
            ColumnKind::Chip(color) => ColumnKind::Chip(color.clone()),
            ColumnKind::Currency => ColumnKind::Currency,
            ColumnKind::Date => ColumnKind::Date,
            ColumnKind::DateTime => ColumnKind::DateTime,
            ColumnKind::Custom(f) => ColumnKind::Custom(Arc::clone(f)),
        }
    }
}

impl<R> fmt::Debug for ColumnKind<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Plain => f.write_str("Plain"),
            ColumnKind::Chip(color) => f.debug_tuple("Chip").field(color).finish(),
            ColumnKind::Currency => f.write_str("Currency"),
            ColumnKind::Date => f.write_str("Date"),
            ColumnKind::DateTime => f.write_str("DateTime"),
            ColumnKind::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// One column of the table.
///
/// ```ignore
/// let columns: Vec<Column<Product>> = vec![
///     Column::new("name", "Product"),
///     Column::new("category", "Category").chip(ChipTone::Primary),
///     Column::new("price", "Price").currency(),
/// ];
/// ```
pub struct Column<R> {
    pub field: String,
    pub header: String,
    pub kind: ColumnKind<R>,
}

impl<R> Column<R> {
    pub fn new(field: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            header: header.into(),
            kind: ColumnKind::Plain,
        }
    }

    pub fn chip(mut self, tone: ChipTone) -> Self {
        self.kind = ColumnKind::Chip(ChipColor::Static(tone));
        self
    }

    pub fn chip_by<F>(mut self, f: F) -> Self
    where
        F: Fn(Option<&CellValue>) -> ChipTone + Send + Sync + 'static,
    {
        self.kind = ColumnKind::Chip(ChipColor::by_value(f));
        self
    }

    pub fn currency(mut self) -> Self {
        self.kind = ColumnKind::Currency;
        self
    }

    pub fn date(mut self) -> Self {
        self.kind = ColumnKind::Date;
        self
    }

    pub fn datetime(mut self) -> Self {
        self.kind = ColumnKind::DateTime;
        self
    }

    pub fn render<F>(mut self, f: F) -> Self
    where
        F: Fn(Option<&CellValue>, &R) -> CellContent + Send + Sync + 'static,
    {
        self.kind = ColumnKind::Custom(Arc::new(f));
        self
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            header: self.header.clone(),
            kind: self.kind.clone(),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("field", &self.field)
            .field("header", &self.header)
            .field("kind", &self.kind)
            .finish()
    }
}
