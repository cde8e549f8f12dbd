//! Bartender mood maintenance.
//!
//! Moods raised by orders and conversation relax back toward neutral over time, and
//! unimportant memories are forgotten after a while so bartenders only remember what mattered.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    error::Error, scheduler::config::mood as mood_config, service::bartender::BartenderService,
};

/// Drifts every stored mood toward neutral and prunes stale memories.
///
/// # Returns
/// - `Ok(usize)` - Number of moods changed plus memories deleted
/// - `Err(Error)` - A database query failed
pub async fn run_mood_maintenance(db: DatabaseConnection) -> Result<usize, Error> {
    let bartender_service = BartenderService::new(&db);

    let drifted = bartender_service
        .drift_moods(mood_config::DRIFT_STEP)
        .await?;

    let cutoff = Utc::now().naive_utc() - mood_config::MEMORY_RETENTION;
    let pruned = bartender_service
        .prune_memories(mood_config::PRUNE_MAX_IMPORTANCE, cutoff)
        .await?;

    Ok((drifted + pruned) as usize)
}
