//! Holdings state for the portfolio page.

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod portfolio_test;

use crate::net::types::PortfolioStock;

/// Holdings list the portfolio page works on, provided as an
/// `RwSignal<PortfolioState>` at the app root so an add on one visit is
/// still there on the next.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PortfolioState {
    pub stocks: Vec<PortfolioStock>,
    pub loading: bool,
}

impl PortfolioState {
    /// Replace the whole list with a fresh fetch.
    pub fn set_stocks(&mut self, stocks: Vec<PortfolioStock>) {
        self.stocks = stocks;
        self.loading = false;
    }

    /// Insert a holding, replacing any existing row with the same id.
    pub fn upsert(&mut self, stock: PortfolioStock) {
        match self.stocks.iter_mut().find(|s| s.id == stock.id) {
            Some(existing) => *existing = stock,
            None => self.stocks.push(stock),
        }
    }

    /// Drop the holding with the given id, if present.
    pub fn remove(&mut self, stock_id: i64) {
        self.stocks.retain(|s| s.id != stock_id);
    }

    /// Sum of recorded purchase amounts; holdings without one contribute
    /// nothing.
    pub fn total_invested(&self) -> f64 {
        self.stocks.iter().filter_map(|s| s.amount_invested).sum()
    }
}
