use chrono::Duration;

pub mod mood {
    use super::*;

    /// Points a stored mood moves toward neutral per run
    pub const DRIFT_STEP: i32 = 5;

    /// Memories at or below this importance are forgotten once stale
    pub const PRUNE_MAX_IMPORTANCE: i32 = 2;

    /// Age after which unimportant memories are forgotten (7 days)
    pub const MEMORY_RETENTION: Duration = Duration::days(7);

    /// Cron expression for bartender mood maintenance
    /// Runs every 30 minutes (00:00, 00:30, 01:00, etc.)
    pub const CRON_EXPRESSION: &str = "0 */30 * * * *";
}
