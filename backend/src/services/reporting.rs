//! Reporting service for statements and data export

use serde::Serialize;
use uuid::Uuid;

use shared::{build_statement, DateRange, ReportKind, Statement};

use crate::error::{AppError, AppResult};
use crate::state::SharedStore;

/// Reporting service
#[derive(Clone)]
pub struct ReportingService {
    store: SharedStore,
}

/// Flat statement row for CSV export
#[derive(Debug, Serialize)]
struct StatementCsvRow {
    date: String,
    customer: String,
    details: String,
    sale: String,
    payment: String,
}

impl ReportingService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Build a single customer's statement over an inclusive date range
    pub async fn customer_statement(
        &self,
        customer_id: Uuid,
        range: DateRange,
    ) -> AppResult<Statement> {
        let guard = self.store.read().await;

        if !guard.customers.iter().any(|c| c.id == customer_id) {
            return Err(AppError::NotFound("Customer".to_string()));
        }

        Ok(build_statement(
            &guard.transactions,
            &guard.customers,
            ReportKind::Customer,
            range,
            Some(customer_id),
            None,
        ))
    }

    /// Build the business-wide report over an inclusive date range
    pub async fn business_report(&self, range: DateRange) -> Statement {
        let guard = self.store.read().await;
        build_statement(
            &guard.transactions,
            &guard.customers,
            ReportKind::Business,
            range,
            None,
            None,
        )
    }

    /// Render a statement as CSV: one record per line, then the totals
    pub fn statement_to_csv(statement: &Statement) -> AppResult<String> {
        let mut rows: Vec<StatementCsvRow> = statement
            .lines
            .iter()
            .map(|line| StatementCsvRow {
                date: line.transaction.date.format("%Y-%m-%d").to_string(),
                customer: line.customer_name.clone(),
                details: line.transaction.details(),
                sale: line
                    .sale_amount()
                    .map(|a| a.to_string())
                    .unwrap_or_default(),
                payment: line
                    .payment_amount()
                    .map(|a| a.to_string())
                    .unwrap_or_default(),
            })
            .collect();

        rows.push(StatementCsvRow {
            date: String::new(),
            customer: String::new(),
            details: "Total Sales".to_string(),
            sale: statement.total_sales.to_string(),
            payment: String::new(),
        });
        rows.push(StatementCsvRow {
            date: String::new(),
            customer: String::new(),
            details: "Total Payments".to_string(),
            sale: String::new(),
            payment: statement.total_payments.to_string(),
        });
        rows.push(StatementCsvRow {
            date: String::new(),
            customer: String::new(),
            details: "Final Balance".to_string(),
            sale: statement.final_balance.to_string(),
            payment: String::new(),
        });

        Self::export_to_csv(&rows)
    }

    /// Export serializable rows as CSV text
    fn export_to_csv<T: Serialize>(data: &[T]) -> AppResult<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for record in data {
            wtr.serialize(record)
                .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;
        }
        let csv_data = String::from_utf8(
            wtr.into_inner()
                .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?,
        )
        .map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))?;
        Ok(csv_data)
    }
}
