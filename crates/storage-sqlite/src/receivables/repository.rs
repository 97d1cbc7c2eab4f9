use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use rust_decimal::Decimal;

use tallybook_core::activities::NewActivity;
use tallybook_core::receivables::{
    NewReceivable, NewReceivablePayment, Receivable, ReceivablePayment,
    ReceivableRepositoryTrait, ReceivableStatus,
};
use tallybook_core::{Error, Result};

use super::model::{ReceivableDB, ReceivablePaymentDB};
use crate::activities::ActivityDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{activities, receivable_payments, receivables};
use crate::utils::parse_decimal;

/// Repository for the receivable settlement workflow.
///
/// Every write below runs as one job on the writer actor, i.e. one
/// immediate transaction: the settlement's read-compute-write span is
/// atomic and concurrent payments against the same receivable serialize.
pub struct ReceivableRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ReceivableRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

fn load_receivable(
    conn: &mut diesel::SqliteConnection,
    receivable_id: &str,
) -> Result<ReceivableDB> {
    receivables::table
        .select(ReceivableDB::as_select())
        .find(receivable_id)
        .first::<ReceivableDB>(conn)
        .optional()
        .into_core()?
        .ok_or_else(|| {
            Error::NotFound(format!("Receivable with id {} not found", receivable_id))
        })
}

#[async_trait]
impl ReceivableRepositoryTrait for ReceivableRepository {
    async fn create(
        &self,
        new_receivable: NewReceivable,
        activity: NewActivity,
    ) -> Result<Receivable> {
        self.writer
            .exec(move |conn| {
                let row = ReceivableDB::from_new(&new_receivable);
                diesel::insert_into(receivables::table)
                    .values(&row)
                    .execute(conn)
                    .into_core()?;

                let note = ActivityDB::from_new(activity, Some(&row.id));
                diesel::insert_into(activities::table)
                    .values(&note)
                    .execute(conn)
                    .into_core()?;

                Ok(Receivable::from(row))
            })
            .await
    }

    async fn settle_payment(
        &self,
        new_payment: NewReceivablePayment,
    ) -> Result<ReceivablePayment> {
        self.writer
            .exec(move |conn| {
                let receivable: Receivable =
                    load_receivable(conn, &new_payment.receivable_id)?.into();

                // The arithmetic and the overpayment check live on the
                // domain model; this transaction only persists its result.
                let updated = receivable.settle(new_payment.amount, Utc::now())?;

                let payment_row = ReceivablePaymentDB::from_new(&new_payment);
                diesel::insert_into(receivable_payments::table)
                    .values(&payment_row)
                    .execute(conn)
                    .into_core()?;

                diesel::update(receivables::table.find(&updated.id))
                    .set((
                        receivables::paid_amount.eq(updated.paid_amount.to_string()),
                        receivables::remaining_amount.eq(updated.remaining_amount.to_string()),
                        receivables::status.eq(updated.status.as_str()),
                        receivables::updated_at.eq(updated.updated_at.naive_utc()),
                    ))
                    .execute(conn)
                    .into_core()?;

                let note = ActivityDB::from_new(updated.payment_activity(new_payment.amount), None);
                diesel::insert_into(activities::table)
                    .values(&note)
                    .execute(conn)
                    .into_core()?;

                Ok(ReceivablePayment::from(payment_row))
            })
            .await
    }

    async fn delete(&self, receivable_id: &str) -> Result<()> {
        let receivable_id = receivable_id.to_string();
        self.writer
            .exec(move |conn| {
                let receivable: Receivable = load_receivable(conn, &receivable_id)?.into();

                diesel::delete(
                    receivable_payments::table
                        .filter(receivable_payments::receivable_id.eq(&receivable.id)),
                )
                .execute(conn)
                .into_core()?;

                diesel::delete(receivables::table.find(&receivable.id))
                    .execute(conn)
                    .into_core()?;

                let note = ActivityDB::from_new(receivable.deleted_activity(), None);
                diesel::insert_into(activities::table)
                    .values(&note)
                    .execute(conn)
                    .into_core()?;

                Ok(())
            })
            .await
    }

    fn get_by_id(&self, receivable_id: &str) -> Result<Receivable> {
        let mut conn = get_connection(&self.pool)?;
        Ok(load_receivable(&mut conn, receivable_id)?.into())
    }

    fn list(&self) -> Result<Vec<Receivable>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = receivables::table
            .select(ReceivableDB::as_select())
            .order(receivables::created_at.desc())
            .load::<ReceivableDB>(&mut conn)
            .into_core()?;

        Ok(rows.into_iter().map(Receivable::from).collect())
    }

    fn list_payments(&self, receivable_id: &str) -> Result<Vec<ReceivablePayment>> {
        let mut conn = get_connection(&self.pool)?;

        let rows = receivable_payments::table
            .select(ReceivablePaymentDB::as_select())
            .filter(receivable_payments::receivable_id.eq(receivable_id))
            .order(receivable_payments::created_at.desc())
            .load::<ReceivablePaymentDB>(&mut conn)
            .into_core()?;

        Ok(rows.into_iter().map(ReceivablePayment::from).collect())
    }

    fn outstanding_total(&self) -> Result<Decimal> {
        let mut conn = get_connection(&self.pool)?;

        let amounts: Vec<String> = receivables::table
            .filter(receivables::status.ne(ReceivableStatus::Paid.as_str()))
            .select(receivables::remaining_amount)
            .load::<String>(&mut conn)
            .into_core()?;

        Ok(amounts
            .iter()
            .map(|s| parse_decimal(s, "remaining_amount"))
            .sum())
    }
}
