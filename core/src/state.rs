//! Filter state holder: the dataset plus the active filter set.
//!
//! RULE: The dataset is fixed at construction. Filter changes only
//! ever produce new derived views; they never touch the records.

use crate::{
    error::DashResult,
    filter::{self, FilterSet},
    transaction::Transaction,
    types::{Region, RiskStatus, Selection, TxnType},
    views::{DashboardView, RiskAnalysisView, SortOrder, TransactionTable},
};

pub struct FilterState {
    transactions: Vec<Transaction>,
    filters:      FilterSet,
}

impl FilterState {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions, filters: FilterSet::default() }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn set_region(&mut self, region: Selection<Region>) {
        self.filters.region = region;
    }

    pub fn set_risk_level(&mut self, risk_level: Selection<RiskStatus>) {
        self.filters.risk_level = risk_level;
    }

    pub fn set_type(&mut self, txn_type: Selection<TxnType>) {
        self.filters.txn_type = txn_type;
    }

    /// `""` clears the bound. A malformed date leaves the filter unchanged.
    pub fn set_start_date(&mut self, raw: &str) -> DashResult<()> {
        self.filters.start_date = filter::parse_date_bound(raw)?;
        Ok(())
    }

    /// `""` clears the bound. A malformed date leaves the filter unchanged.
    pub fn set_end_date(&mut self, raw: &str) -> DashResult<()> {
        self.filters.end_date = filter::parse_date_bound(raw)?;
        Ok(())
    }

    /// Replace every field at once.
    pub fn set_filters(&mut self, filters: FilterSet) {
        self.filters = filters;
    }

    pub fn reset(&mut self) {
        log::debug!("Filters reset to defaults");
        self.filters = FilterSet::default();
    }

    pub fn filtered(&self) -> Vec<Transaction> {
        filter::apply(&self.transactions, &self.filters)
    }

    /// The overview page aggregates the whole dataset, not the filtered view.
    pub fn dashboard(&self) -> DashboardView {
        DashboardView::build(&self.transactions)
    }

    /// Overview KPIs restricted to the active filters.
    pub fn filtered_dashboard(&self) -> DashboardView {
        DashboardView::build(&self.filtered())
    }

    pub fn risk_analysis(&self) -> RiskAnalysisView {
        RiskAnalysisView::build(&self.filtered())
    }

    pub fn table(&self, order: SortOrder) -> TransactionTable {
        TransactionTable::build(&self.filtered(), order)
    }
}
