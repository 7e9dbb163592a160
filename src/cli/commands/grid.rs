use crate::core::grid::{ColumnDef, ColumnFilter, GridQuery, SortSpec, paginate, render_rows};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::Table;

/// Build a grid query from the raw `--filter` / `--sort` arguments.
pub(crate) fn build_query(filters: &[String], sort: &Option<String>) -> AppResult<GridQuery> {
    let filters = filters
        .iter()
        .map(|f| f.parse::<ColumnFilter>())
        .collect::<AppResult<Vec<_>>>()?;
    let sort = sort.as_deref().map(str::parse::<SortSpec>).transpose()?;
    Ok(GridQuery { filters, sort })
}

/// Filter, sort, page and print one grid.
pub(crate) fn show<T>(
    title: &str,
    columns: &[ColumnDef<T>],
    rows: &[T],
    query: &GridQuery,
    page: usize,
    page_size: usize,
) -> AppResult<()> {
    let selected = query.apply(columns, rows)?;

    header(title);

    if selected.is_empty() {
        info(format!("No rows match ({} loaded).", rows.len()));
        return Ok(());
    }

    let (visible, pages) = paginate(&selected, page, page_size);
    let headers: Vec<&str> = columns.iter().map(|c| c.header).collect();
    let table = Table::fitted(&headers, render_rows(columns, visible));

    print!("{}", table.render());
    println!(
        "\n{} of {} rows | page {}/{}",
        visible.len(),
        selected.len(),
        page.clamp(1, pages),
        pages
    );
    Ok(())
}
