use super::grid::{build_query, show};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::customer_columns;
use crate::errors::AppResult;
use crate::models::store::load_customers;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Customers {
        filters,
        sort,
        page,
    } = cmd
    {
        let query = build_query(filters, sort)?;
        let customers = load_customers(Path::new(&cfg.customers_file))?;
        show(
            "Customers",
            &customer_columns(),
            &customers.items,
            &query,
            *page,
            cfg.page_size,
        )?;
    }
    Ok(())
}
