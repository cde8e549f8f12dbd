//! Scheduler for periodic tavern maintenance.
//!
//! This module provides a cron-based job scheduler that keeps bartender state tidy: moods
//! relax back toward neutral and stale, unimportant memories are forgotten.

use std::sync::Arc;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::error::Error;

pub mod config;
pub mod mood;

use self::{config::mood as mood_config, mood::run_mood_maintenance};

/// Job scheduler for background tavern maintenance tasks.
pub struct Scheduler {
    db: DatabaseConnection,
    sched: JobScheduler,
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`].
    ///
    /// # Returns
    /// - `Ok(Scheduler)` - Successfully created scheduler instance
    /// - `Err(Error)` - Failed to initialize the underlying job scheduler
    pub async fn new(db: DatabaseConnection) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;
        Ok(Self { db, sched })
    }

    /// Registers all scheduled jobs and starts the scheduler.
    ///
    /// The following jobs are registered:
    /// - Bartender mood drift & memory pruning
    ///
    /// # Returns
    /// - `Ok(())` - All jobs successfully registered and scheduler started
    /// - `Err(Error)` - Failed to register a job or start the scheduler
    pub async fn start(mut self) -> Result<(), Error> {
        self.schedule_job(
            mood_config::CRON_EXPRESSION,
            "bartender mood",
            run_mood_maintenance,
        )
        .await?;

        self.sched.start().await?;

        Ok(())
    }

    /// Schedules a recurring job with the specified cron expression.
    ///
    /// On execution, the job logs the number of rows it touched (on success) or the error
    /// that stopped it.
    ///
    /// # Arguments
    /// - `cron` - Cron expression defining when the job should run (e.g., "0 */30 * * * *")
    /// - `name` - Human-readable name for the job (used in log messages)
    /// - `function` - Async job body receiving a database connection
    ///
    /// # Returns
    /// - `Ok(())` - Job successfully registered with the scheduler
    /// - `Err(Error)` - Invalid cron expression or scheduler error
    pub async fn schedule_job<F, Fut>(
        &mut self,
        cron: &str,
        name: &str,
        function: F,
    ) -> Result<(), Error>
    where
        F: Fn(DatabaseConnection) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<usize, Error>> + Send + 'static,
    {
        let db = self.db.clone();
        let name = name.to_string();
        let function = Arc::new(function);

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let db = db.clone();
                let name = name.clone();
                let function = Arc::clone(&function);

                Box::pin(async move {
                    match function(db).await {
                        Ok(count) => tracing::debug!("Ran {} maintenance, {} row(s) changed", name, count),
                        Err(e) => tracing::error!("Error running {} maintenance: {:?}", name, e),
                    }
                })
            })?)
            .await?;

        Ok(())
    }
}
