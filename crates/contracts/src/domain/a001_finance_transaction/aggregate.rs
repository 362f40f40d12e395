use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::common::field_access::{parse_number, unknown_field};
use crate::domain::common::{FieldAccess, Record};
use crate::shared::metadata::{FieldMetadata, ValidationRules};

// ============================================================================
// Enums
// ============================================================================

/// Тип финансовой операции
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransactionCategory {
    Income,
    #[default]
    Expense,
    Transfer,
}

impl TransactionCategory {
    pub const VALUES: &'static [&'static str] = &["Income", "Expense", "Transfer"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
            Self::Transfer => "Transfer",
        }
    }

    pub fn all() -> Vec<TransactionCategory> {
        vec![Self::Income, Self::Expense, Self::Transfer]
    }
}

impl FromStr for TransactionCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown transaction category: {}", s))
    }
}

impl std::fmt::Display for TransactionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Статус оплаты
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Overdue,
    Cancelled,
}

impl PaymentStatus {
    pub const VALUES: &'static [&'static str] = &["Pending", "Paid", "Overdue", "Cancelled"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
            Self::Overdue => "Overdue",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn all() -> Vec<PaymentStatus> {
        vec![Self::Pending, Self::Paid, Self::Overdue, Self::Cancelled]
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown payment status: {}", s))
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Record
// ============================================================================

/// Финансовая операция (журнал доходов и расходов)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinanceTransaction {
    pub id: Option<u64>,
    /// Дата операции, ISO yyyy-mm-dd
    pub date: String,
    pub description: String,
    pub account: String,
    pub category: TransactionCategory,
    pub amount: f64,
    pub status: PaymentStatus,
    /// Номер счёта/платёжки, необязательный
    pub reference: String,
}

impl FinanceTransaction {
    pub fn new(
        date: &str,
        description: &str,
        account: &str,
        category: TransactionCategory,
        amount: f64,
        status: PaymentStatus,
    ) -> Self {
        Self {
            id: None,
            date: date.into(),
            description: description.into(),
            account: account.into(),
            category,
            amount,
            status,
            reference: String::new(),
        }
    }

    pub fn with_reference(mut self, reference: &str) -> Self {
        self.reference = reference.into();
        self
    }
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::date("date", "Date").with_rules(ValidationRules::required()),
    FieldMetadata::text("description", "Description")
        .with_rules(ValidationRules::required().with_max_length(200)),
    FieldMetadata::text("account", "Account").with_rules(ValidationRules::required()),
    FieldMetadata::enumeration("category", "Category", TransactionCategory::VALUES),
    FieldMetadata::number("amount", "Amount").with_rules(ValidationRules::non_negative()),
    FieldMetadata::enumeration("status", "Status", PaymentStatus::VALUES),
    FieldMetadata::text("reference", "Reference").hidden_in_list(),
];

impl Record for FinanceTransaction {
    type Id = u64;

    fn id(&self) -> Option<Self::Id> {
        self.id
    }

    fn assign_id(&mut self, id: Self::Id) {
        self.id = Some(id);
    }

    fn title(&self) -> String {
        self.description.clone()
    }

    fn record_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "finance_transaction"
    }

    fn element_name() -> &'static str {
        "Transaction"
    }

    fn list_name() -> &'static str {
        "Finance transactions"
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }
}

impl FieldAccess for FinanceTransaction {
    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "id" => self.id.map(|id| id.to_string()),
            "date" => Some(self.date.clone()),
            "description" => Some(self.description.clone()),
            "account" => Some(self.account.clone()),
            "category" => Some(self.category.to_string()),
            "amount" => Some(self.amount.to_string()),
            "status" => Some(self.status.to_string()),
            "reference" => Some(self.reference.clone()),
            _ => None,
        }
    }

    fn set_field_value(&mut self, field: &str, value: &str) -> Result<(), String> {
        match field {
            "date" => self.date = value.trim().to_string(),
            "description" => self.description = value.to_string(),
            "account" => self.account = value.to_string(),
            "category" => self.category = value.parse()?,
            "amount" => self.amount = parse_number(value, "Amount")?,
            "status" => self.status = value.parse()?,
            "reference" => self.reference = value.to_string(),
            _ => return Err(unknown_field(field)),
        }
        Ok(())
    }
}
