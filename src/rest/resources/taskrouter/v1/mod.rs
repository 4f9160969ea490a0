//! Resources of the `taskrouter` domain, version `v1`.
//!
//! Timestamps are RFC 3339; list envelopes carry pagination under `meta`.

mod task_queues_statistics;
mod worker;
mod workspace;

pub use task_queues_statistics::{TaskQueuesStatistics, TaskQueuesStatisticsReader};
pub use worker::{Worker, WorkerDeleter, WorkerFetcher};
pub use workspace::{Workspace, WorkspaceFetcher, WorkspaceUpdater};
