use contracts::domain::a001_finance_transaction::TransactionCategory::{Expense, Income, Transfer};
use contracts::domain::a001_finance_transaction::{FinanceTransaction, PaymentStatus, TransactionCategory};

fn tx(
    date: &str,
    description: &str,
    account: &str,
    category: TransactionCategory,
    amount: f64,
    status: PaymentStatus,
    reference: &str,
) -> FinanceTransaction {
    FinanceTransaction::new(date, description, account, category, amount, status).with_reference(reference)
}

pub fn sample_transactions() -> Vec<FinanceTransaction> {
    vec![
        tx("2024-06-28", "Customer payment PT Sinar Jaya", "BCA Operational", Income, 125_000_000.0, PaymentStatus::Paid, "INV-2024-0611"),
        tx("2024-06-27", "Office rent Q3", "Mandiri Main", Expense, 45_000_000.0, PaymentStatus::Pending, "RENT-Q3"),
        tx("2024-06-25", "Transfer to petty cash", "BCA Operational", Transfer, 5_000_000.0, PaymentStatus::Paid, "PC-0625"),
        tx("2024-06-21", "Electricity PLN June", "Mandiri Main", Expense, 8_750_000.0, PaymentStatus::Overdue, "PLN-0624"),
        tx("2024-06-19", "Customer payment CV Maju Bersama", "BCA Operational", Income, 38_400_000.0, PaymentStatus::Pending, "INV-2024-0598"),
        tx("2024-06-17", "Fleet fuel card top-up", "BRI Fleet", Expense, 12_300_000.0, PaymentStatus::Paid, "FUEL-0617"),
        tx("2024-06-14", "Consulting fee refund", "Mandiri Main", Income, 2_150_000.0, PaymentStatus::Cancelled, "RF-0614"),
        tx("2024-06-12", "Payroll June", "Mandiri Payroll", Expense, 310_000_000.0, PaymentStatus::Paid, "PAY-0624"),
        tx("2024-06-10", "Transfer to payroll account", "Mandiri Main", Transfer, 310_000_000.0, PaymentStatus::Paid, "TRF-0610"),
        tx("2024-06-07", "Internet and telephone", "BCA Operational", Expense, 3_900_000.0, PaymentStatus::Paid, "TEL-0624"),
        tx("2024-06-05", "Customer payment PT Nusantara Logistik", "BCA Operational", Income, 76_250_000.0, PaymentStatus::Overdue, "INV-2024-0577"),
        tx("2024-06-03", "Software subscriptions", "BCA Operational", Expense, 6_480_000.0, PaymentStatus::Pending, "SUB-0624"),
    ]
}
