//! Single-writer actor.
//!
//! One background task owns one connection and applies every write job
//! inside an immediate transaction. That gives the two guarantees the
//! settlement workflow needs: a job's read-compute-write span is atomic,
//! and concurrent writers against the same row serialize instead of losing
//! updates.

use std::any::Any;

use diesel::result::Error as DieselError;
use diesel::{Connection, SqliteConnection};
use tokio::sync::{mpsc, oneshot};

use tallybook_core::errors::{DatabaseError, Error, Result};

use super::DbPool;
use crate::errors::StorageError;

// A queued unit of work: runs against the writer's connection and reports
// through a oneshot reply channel. Return values are type-erased so one
// channel carries every job shape.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

type ErasedJob = Job<Box<dyn Any + Send + 'static>>;
type ErasedReply = oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>;

// Carries errors across the transaction wrapper without flattening typed
// core errors (overpayment, not-found) into strings.
enum JobError {
    Core(Error),
    Db(DieselError),
}

impl From<DieselError> for JobError {
    fn from(e: DieselError) -> Self {
        JobError::Db(e)
    }
}

/// Handle for sending write jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(ErasedJob, ErasedReply)>,
}

impl WriteHandle {
    /// Executes a write job on the writer's dedicated connection, inside
    /// one immediate transaction. A job that returns an error is rolled
    /// back in full.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .map_err(|_| {
                Error::Database(DatabaseError::Internal(
                    "database writer has stopped".to_string(),
                ))
            })?;

        ret_rx
            .await
            .map_err(|_| {
                Error::Database(DatabaseError::Internal(
                    "database writer dropped the reply".to_string(),
                ))
            })?
            .map(|boxed: Box<dyn Any + Send + 'static>| {
                // The closure above boxed a T; downcasting back cannot fail.
                *boxed
                    .downcast::<T>()
                    .expect("writer job returned an unexpected type")
            })
    }
}

/// Spawns the writer actor on the current Tokio runtime. The actor holds
/// one pool connection for its whole lifetime and processes jobs serially;
/// it terminates when the last `WriteHandle` is dropped.
pub fn spawn_writer(pool: &DbPool) -> Result<WriteHandle> {
    let mut conn = pool
        .get()
        .map_err(|e| Error::Database(DatabaseError::PoolCreationFailed(e.to_string())))?;

    let (tx, mut rx) = mpsc::channel::<(ErasedJob, ErasedReply)>(1024);

    tokio::spawn(async move {
        while let Some((job, reply_tx)) = rx.recv().await {
            let result = conn
                .immediate_transaction::<_, JobError, _>(|c| job(c).map_err(JobError::Core))
                .map_err(|e| match e {
                    JobError::Core(err) => err,
                    JobError::Db(e) => StorageError::QueryFailed(e).into(),
                });

            // Ignore a dropped receiver; the caller gave up waiting.
            let _ = reply_tx.send(result);
        }
    });

    Ok(WriteHandle { tx })
}
