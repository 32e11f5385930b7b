use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

use crate::{Category, MoneyCents, Transaction, TransactionKind};

use super::{BreakdownItem, breakdown, start_of_month};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Balance {
    pub total_income: MoneyCents,
    pub total_expense: MoneyCents,
    pub balance: MoneyCents,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MonthlyStats {
    pub income: MoneyCents,
    pub expense: MoneyCents,
    pub balance: MoneyCents,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FinanceReport {
    pub balance: Balance,
    pub monthly: MonthlyStats,
    pub transaction_count: usize,
    pub expense_breakdown: Vec<BreakdownItem<MoneyCents>>,
}

fn totals<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Balance {
    let mut result = Balance::default();
    for tx in transactions {
        match tx.kind {
            TransactionKind::Income => result.total_income += tx.amount,
            TransactionKind::Expense => result.total_expense += tx.amount,
        }
    }
    result.balance = result.total_income - result.total_expense;
    result
}

/// All-time income, expense and their difference.
pub fn balance(transactions: &[Transaction]) -> Balance {
    totals(transactions)
}

/// Same sums restricted to `[first day of the local month, now]`.
pub fn monthly_stats<Tz: TimeZone>(transactions: &[Transaction], now: &DateTime<Tz>) -> MonthlyStats {
    let from = start_of_month(now);
    let to = now.with_timezone(&Utc);
    let month = totals(
        transactions
            .iter()
            .filter(|tx| tx.date >= from && tx.date <= to),
    );
    MonthlyStats {
        income: month.total_income,
        expense: month.total_expense,
        balance: month.balance,
    }
}

/// Expenses summed per category, largest first.
pub fn expense_breakdown(
    transactions: &[Transaction],
    categories: &[Category],
) -> Vec<BreakdownItem<MoneyCents>> {
    breakdown(
        transactions
            .iter()
            .filter(|tx| tx.kind == TransactionKind::Expense)
            .map(|tx| (tx.category_id, tx.amount)),
        categories,
    )
}

pub fn finance_report<Tz: TimeZone>(
    transactions: &[Transaction],
    categories: &[Category],
    now: &DateTime<Tz>,
) -> FinanceReport {
    FinanceReport {
        balance: balance(transactions),
        monthly: monthly_stats(transactions, now),
        transaction_count: transactions.len(),
        expense_breakdown: expense_breakdown(transactions, categories),
    }
}
