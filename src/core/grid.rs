//! Tabular projection of customers and trainings.
//!
//! Column definitions are plain metadata (field, header, filter kind and a
//! value getter). [`GridQuery`] is the small grid host that applies
//! filters, sorting and paging on top of them.

use crate::errors::{AppError, AppResult};
use crate::models::{Customer, Training};
use crate::utils::date::{Timestamp, day_key, format_timestamp, parse_date};
use chrono::NaiveDate;
use regex::Regex;
use std::cmp::Ordering;
use std::str::FromStr;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Text,
    Number,
    Date,
    /// Column cannot be filtered.
    None,
}

/// Value produced by a column getter for one row.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(i64),
    /// `None` when the source timestamp is absent or malformed.
    Date(Option<Timestamp>),
    Empty,
}

impl CellValue {
    fn text(value: Option<&str>) -> Self {
        match value {
            Some(s) => CellValue::Text(s.to_string()),
            None => CellValue::Empty,
        }
    }

    /// Display form used by the table renderer.
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Date(Some(ts)) => format_timestamp(ts),
            CellValue::Date(None) | CellValue::Empty => String::new(),
        }
    }

    fn as_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.to_lowercase(),
            other => other.display().to_lowercase(),
        }
    }
}

pub struct ColumnDef<T> {
    /// Source field; `None` for derived columns.
    pub field: Option<&'static str>,
    pub header: &'static str,
    pub filter: FilterKind,
    pub sortable: bool,
    pub value: fn(&T) -> CellValue,
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ColumnDef<T> {}

impl<T> ColumnDef<T> {
    fn new(
        field: Option<&'static str>,
        header: &'static str,
        filter: FilterKind,
        value: fn(&T) -> CellValue,
    ) -> Self {
        Self {
            field,
            header,
            filter,
            sortable: true,
            value,
        }
    }

    /// Name used to address the column from the command line: the field
    /// name, or the lowercased header for derived columns.
    pub fn key(&self) -> String {
        match self.field {
            Some(f) => f.to_string(),
            None => self.header.to_lowercase(),
        }
    }

    pub fn cell(&self, row: &T) -> CellValue {
        (self.value)(row)
    }
}

pub fn customer_columns() -> Vec<ColumnDef<Customer>> {
    vec![
        ColumnDef::new(Some("firstname"), "First Name", FilterKind::Text, |c: &Customer| {
            CellValue::text(c.firstname.as_deref())
        }),
        ColumnDef::new(Some("lastname"), "Last Name", FilterKind::Text, |c: &Customer| {
            CellValue::text(c.lastname.as_deref())
        }),
        ColumnDef::new(Some("email"), "Email", FilterKind::Text, |c: &Customer| {
            CellValue::text(c.email.as_deref())
        }),
        ColumnDef::new(Some("phone"), "Phone", FilterKind::Text, |c: &Customer| {
            CellValue::text(c.phone.as_deref())
        }),
        ColumnDef::new(Some("streetaddress"), "Address", FilterKind::Text, |c: &Customer| {
            CellValue::text(c.streetaddress.as_deref())
        }),
        ColumnDef::new(Some("postcode"), "Postcode", FilterKind::Text, |c: &Customer| {
            CellValue::text(c.postcode.as_deref())
        }),
        ColumnDef::new(Some("city"), "City", FilterKind::Text, |c: &Customer| {
            CellValue::text(c.city.as_deref())
        }),
    ]
}

pub fn training_columns() -> Vec<ColumnDef<Training>> {
    vec![
        ColumnDef::new(Some("date"), "Date", FilterKind::Date, |t: &Training| {
            CellValue::Date(t.start())
        }),
        ColumnDef::new(Some("duration"), "Duration (min)", FilterKind::Number, |t: &Training| {
            t.duration.map(CellValue::Number).unwrap_or(CellValue::Empty)
        }),
        ColumnDef::new(Some("activity"), "Activity", FilterKind::Text, |t: &Training| {
            CellValue::text(t.activity.as_deref())
        }),
        // Derived; never touches the record.
        ColumnDef::new(None, "Customer", FilterKind::Text, |t: &Training| {
            CellValue::Text(t.customer_name())
        }),
    ]
}

/// Calendar-day comparator for date columns.
///
/// Absent cell → `Less`, i.e. "before" any filter date. Otherwise only
/// year, month and day are compared; the time of day is ignored.
pub fn compare_dates(filter: NaiveDate, cell: Option<&Timestamp>) -> Ordering {
    let Some(cell) = cell else {
        return Ordering::Less;
    };
    day_key(&cell.date_naive()).cmp(&day_key(&filter))
}

// ---------------------------
// Filters
// ---------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Contains,
    NotContains,
    Equals,
    NotEquals,
    LessThan,
    GreaterThan,
}

impl FilterOp {
    fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "~" => Some(FilterOp::Contains),
            "!~" => Some(FilterOp::NotContains),
            "=" => Some(FilterOp::Equals),
            "!=" => Some(FilterOp::NotEquals),
            "<" => Some(FilterOp::LessThan),
            ">" => Some(FilterOp::GreaterThan),
            _ => None,
        }
    }

    fn accepts(self, ord: Ordering) -> bool {
        match self {
            FilterOp::Equals => ord == Ordering::Equal,
            FilterOp::NotEquals => ord != Ordering::Equal,
            FilterOp::LessThan => ord == Ordering::Less,
            FilterOp::GreaterThan => ord == Ordering::Greater,
            FilterOp::Contains | FilterOp::NotContains => false,
        }
    }
}

static FILTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_]*)\s*(!~|!=|~|=|<|>)\s*(.*?)\s*$")
        .expect("filter expression regex")
});

/// `<column><op><value>`, e.g. `city~hel`, `duration>45`, `date=2024-05-10`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnFilter {
    pub column: String,
    pub op: FilterOp,
    pub value: String,
}

impl FromStr for ColumnFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = FILTER_RE
            .captures(s)
            .ok_or_else(|| AppError::InvalidFilter(s.to_string()))?;
        let op = FilterOp::from_symbol(&caps[2]).ok_or_else(|| AppError::InvalidFilter(s.to_string()))?;
        Ok(Self {
            column: caps[1].to_lowercase(),
            op,
            value: caps[3].to_string(),
        })
    }
}

enum Operand {
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

struct ResolvedFilter<'c, T> {
    column: &'c ColumnDef<T>,
    op: FilterOp,
    operand: Operand,
}

impl<T> ResolvedFilter<'_, T> {
    fn matches(&self, row: &T) -> bool {
        let cell = self.column.cell(row);
        match &self.operand {
            Operand::Text(needle) => {
                let hay = cell.as_text();
                match self.op {
                    FilterOp::Contains => hay.contains(needle.as_str()),
                    FilterOp::NotContains => !hay.contains(needle.as_str()),
                    op => op.accepts(hay.as_str().cmp(needle.as_str())),
                }
            }
            Operand::Number(n) => match cell {
                CellValue::Number(v) => (v as f64)
                    .partial_cmp(n)
                    .is_some_and(|ord| self.op.accepts(ord)),
                _ => false,
            },
            Operand::Date(d) => match cell {
                CellValue::Date(ts) => self.op.accepts(compare_dates(*d, ts.as_ref())),
                _ => self.op.accepts(compare_dates(*d, None)),
            },
        }
    }
}

fn find_column<'c, T>(columns: &'c [ColumnDef<T>], key: &str) -> AppResult<&'c ColumnDef<T>> {
    columns
        .iter()
        .find(|c| c.key() == key)
        .ok_or_else(|| AppError::UnknownColumn(key.to_string()))
}

fn resolve<'c, T>(columns: &'c [ColumnDef<T>], f: &ColumnFilter) -> AppResult<ResolvedFilter<'c, T>> {
    let column = find_column(columns, &f.column)?;
    let reject = || AppError::InvalidFilter(format!("{}: unsupported operator for column", f.column));
    let operand = match column.filter {
        FilterKind::None => return Err(reject()),
        FilterKind::Text => Operand::Text(f.value.to_lowercase()),
        FilterKind::Number => {
            if matches!(f.op, FilterOp::Contains | FilterOp::NotContains) {
                return Err(reject());
            }
            let n = f
                .value
                .parse::<f64>()
                .map_err(|_| AppError::InvalidFilter(format!("{}: not a number: {}", f.column, f.value)))?;
            Operand::Number(n)
        }
        FilterKind::Date => {
            if matches!(f.op, FilterOp::Contains | FilterOp::NotContains) {
                return Err(reject());
            }
            let d = parse_date(&f.value).ok_or_else(|| AppError::InvalidDate(f.value.clone()))?;
            Operand::Date(d)
        }
    };
    Ok(ResolvedFilter {
        column,
        op: f.op,
        operand,
    })
}

// ---------------------------
// Sorting
// ---------------------------

/// `<column>[:asc|:desc]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub column: String,
    pub descending: bool,
}

impl FromStr for SortSpec {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (column, dir) = s.split_once(':').unwrap_or((s, "asc"));
        let column = column.trim().to_lowercase();
        if column.is_empty() {
            return Err(AppError::InvalidSort(s.to_string()));
        }
        let descending = match dir.trim().to_ascii_lowercase().as_str() {
            "asc" => false,
            "desc" => true,
            _ => return Err(AppError::InvalidSort(s.to_string())),
        };
        Ok(Self { column, descending })
    }
}

fn compare_cells(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Number(x), CellValue::Number(y)) => x.cmp(y),
        // Missing dates first.
        (CellValue::Date(x), CellValue::Date(y)) => x.cmp(y),
        (CellValue::Empty, CellValue::Empty) => Ordering::Equal,
        (CellValue::Empty, _) => Ordering::Less,
        (_, CellValue::Empty) => Ordering::Greater,
        _ => a.as_text().cmp(&b.as_text()),
    }
}

// ---------------------------
// Query
// ---------------------------

#[derive(Debug, Clone, Default)]
pub struct GridQuery {
    pub filters: Vec<ColumnFilter>,
    pub sort: Option<SortSpec>,
}

impl GridQuery {
    /// Rows passing every filter, sorted when requested. Sorting is stable.
    pub fn apply<'r, T>(&self, columns: &[ColumnDef<T>], rows: &'r [T]) -> AppResult<Vec<&'r T>> {
        let resolved = self
            .filters
            .iter()
            .map(|f| resolve(columns, f))
            .collect::<AppResult<Vec<_>>>()?;

        let mut out: Vec<&T> = rows
            .iter()
            .filter(|row| resolved.iter().all(|f| f.matches(row)))
            .collect();

        if let Some(sort) = &self.sort {
            let column = find_column(columns, &sort.column)?;
            if !column.sortable {
                return Err(AppError::InvalidSort(sort.column.clone()));
            }
            out.sort_by(|a, b| {
                let ord = compare_cells(&column.cell(a), &column.cell(b));
                if sort.descending { ord.reverse() } else { ord }
            });
        }

        Ok(out)
    }
}

/// One page of rows (1-based page index) and the total number of pages.
pub fn paginate<T>(rows: &[T], page: usize, page_size: usize) -> (&[T], usize) {
    let size = page_size.max(1);
    let pages = rows.len().div_ceil(size).max(1);
    let page = page.clamp(1, pages);
    let start = (page - 1) * size;
    let end = (start + size).min(rows.len());
    (&rows[start.min(rows.len())..end], pages)
}

/// Display strings for a set of rows.
pub fn render_rows<T>(columns: &[ColumnDef<T>], rows: &[&T]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| columns.iter().map(|c| c.cell(row).display()).collect())
        .collect()
}
