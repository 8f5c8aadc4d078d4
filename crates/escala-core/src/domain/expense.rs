//! Custom expenses logged during the day, outside the planned itinerary.

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};
use super::money::Cents;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Food,
    Transport,
    Shopping,
    Tickets,
    #[default]
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 5] = [
        ExpenseCategory::Food,
        ExpenseCategory::Transport,
        ExpenseCategory::Shopping,
        ExpenseCategory::Tickets,
        ExpenseCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "food",
            ExpenseCategory::Transport => "transport",
            ExpenseCategory::Shopping => "shopping",
            ExpenseCategory::Tickets => "tickets",
            ExpenseCategory::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "food" => ExpenseCategory::Food,
            "transport" => ExpenseCategory::Transport,
            "shopping" => ExpenseCategory::Shopping,
            "tickets" => ExpenseCategory::Tickets,
            _ => ExpenseCategory::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Comida",
            ExpenseCategory::Transport => "Transporte",
            ExpenseCategory::Shopping => "Compras",
            ExpenseCategory::Tickets => "Entradas",
            ExpenseCategory::Other => "Otros",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomExpense {
    pub id: String,
    pub title: String,
    pub amount: Cents,
    #[serde(default)]
    pub category: ExpenseCategory,
    /// Epoch milliseconds
    pub timestamp: i64,
}

impl Entity for CustomExpense {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Raw form input for a new expense
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub title: String,
    pub amount: String,
    pub category: ExpenseCategory,
}

impl ExpenseDraft {
    pub fn into_expense(self, id: String, timestamp: i64) -> DomainResult<CustomExpense> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DomainError::InvalidInput("expense title is empty".to_string()));
        }
        let amount = Cents::parse(&self.amount)?;
        Ok(CustomExpense {
            id,
            title: title.to_string(),
            amount,
            category: self.category,
            timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_to_expense() {
        let draft = ExpenseDraft { title: "Helado".into(), amount: "3,20".into(), category: ExpenseCategory::Food };
        let e = draft.into_expense("exp-1".into(), 42).unwrap();
        assert_eq!(e.amount, Cents(320));
        assert_eq!(e.category, ExpenseCategory::Food);
    }

    #[test]
    fn test_draft_rejects_bad_amount() {
        let draft = ExpenseDraft { title: "Helado".into(), amount: "tres".into(), category: ExpenseCategory::Food };
        assert!(draft.into_expense("exp-1".into(), 0).is_err());
    }

    #[test]
    fn test_category_round_trip_through_str() {
        for c in ExpenseCategory::ALL {
            assert_eq!(ExpenseCategory::from_str(c.as_str()), c);
        }
    }
}
