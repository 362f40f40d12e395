pub mod aggregate;

pub use aggregate::{FinanceTransaction, PaymentStatus, TransactionCategory};
