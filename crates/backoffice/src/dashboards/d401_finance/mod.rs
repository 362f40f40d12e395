//! d401 Finance: журнал денежных операций

mod fixtures;

use contracts::domain::a001_finance_transaction::FinanceTransaction;

use crate::shared::list::{FilterSpec, IdGenerator, SequentialIds};
use crate::shared::schema::DashboardSchema;

pub use fixtures::sample_transactions;

pub struct FinanceDashboard;

impl DashboardSchema for FinanceDashboard {
    type Record = FinanceTransaction;

    fn key() -> &'static str {
        "d401_finance"
    }

    fn title() -> &'static str {
        "Finance transactions"
    }

    fn filter_spec() -> FilterSpec {
        FilterSpec {
            search_fields: &["description", "account", "reference"],
            category_field: Some("category"),
            date_field: Some("date"),
        }
    }

    fn id_generator() -> Option<Box<dyn IdGenerator<u64>>> {
        Some(Box::new(SequentialIds::new()))
    }

    fn sample_data() -> Vec<FinanceTransaction> {
        sample_transactions()
    }
}
