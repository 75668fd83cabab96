use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::error::GiveawayError;
use crate::service::lifecycle::LifecycleService;

/// Starts the archive retention sweep.
///
/// Runs hourly and deletes archived giveaways whose `delete_at` deadline has
/// passed. The returned scheduler must be kept alive by the caller for the job to
/// keep running.
///
/// # Arguments
/// - `db`: Database connection
///
/// # Returns
/// - `Ok(JobScheduler)`: Running scheduler owning the sweep job
/// - `Err(GiveawayError)`: Scheduler setup failed
pub async fn start_purge_job(db: DatabaseConnection) -> Result<JobScheduler, GiveawayError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    // Top of every hour.
    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = LifecycleService::new(&db).purge_expired().await {
                tracing::error!("Error purging expired giveaways: {e}");
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Giveaway purge scheduler started");

    Ok(scheduler)
}
