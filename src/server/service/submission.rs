use std::time::Duration;
use derive_more::{Display, Error};
use log::{error, info, warn};
use rust_decimal::Decimal;
use crate::server::database::pool::{DbClient, DbTransaction, Pool};
use crate::server::database::DbError;
use crate::server::model::order::{NewOrder, OrderId, OrderLine, SubmittedOrder};
use crate::server::model::validation::{TableNumber, ValidationError};
use crate::server::util::time;

#[derive(Debug, Display, Error)]
pub(crate) enum SubmitError {
    #[display("{source}")]
    Validation { source: ValidationError },
    #[display("failed to store order, {source}")]
    Storage { source: DbError },
}

impl From<ValidationError> for SubmitError {
    fn from(source: ValidationError) -> Self {
        SubmitError::Validation { source }
    }
}

impl From<DbError> for SubmitError {
    fn from(source: DbError) -> Self {
        SubmitError::Storage { source }
    }
}

/// Check a submission without touching storage.
pub(crate) fn validate<'a>(
    table_number: i64,
    lines: &'a [OrderLine],
    total: Decimal,
) -> Result<NewOrder<'a>, ValidationError> {
    if lines.is_empty() {
        return Err(ValidationError::EmptyOrder);
    }
    let table_number = TableNumber::new(table_number)?;
    let expected: Decimal = lines.iter().map(OrderLine::line_total).sum();
    if expected != total {
        return Err(ValidationError::TotalMismatch { total, expected });
    }
    Ok(NewOrder {
        table_number,
        total_amount: total,
        placed_at: time::helper::get_utc_now(),
        lines,
    })
}

/// Store the order header and all of its lines in one transaction.
///
/// Nothing is written when validation fails, and a failure after `BEGIN` rolls
/// the whole order back, so callers may simply retry with the same lines.
pub(crate) async fn submit<M: DbClient>(
    pool: &Pool<M>,
    timeout: Duration,
    table_number: i64,
    lines: &[OrderLine],
    total: Decimal,
) -> Result<SubmittedOrder, SubmitError> {
    let order = validate(table_number, lines, total)?;
    let mut conn = pool.acquire(timeout).await?;
    let txn = conn.begin().await?;

    let order_id = match write_order(&txn, &order).await {
        Ok(order_id) => order_id,
        Err(e) => {
            error!("failed to write order for table {}, rolling back, {}", order.table_number.get(), e);
            if let Err(rollback_err) = txn.rollback().await {
                warn!("rollback failed, {}", rollback_err);
            }
            return Err(e.into());
        }
    };
    txn.commit().await?;

    info!(
        "order {} stored for table {} with {} lines, total {}",
        order_id,
        order.table_number.get(),
        order.lines.len(),
        order.total_amount,
    );
    Ok(SubmittedOrder {
        order_id,
        table_number: order.table_number,
        total_amount: order.total_amount,
        line_count: order.lines.len(),
    })
}

async fn write_order<T: DbTransaction>(txn: &T, order: &NewOrder<'_>) -> Result<OrderId, DbError> {
    let order_id = txn
        .insert_order(order.table_number, order.total_amount, order.placed_at)
        .await?;
    for line in order.lines {
        txn.insert_order_item(order_id, line).await?;
    }
    Ok(order_id)
}
