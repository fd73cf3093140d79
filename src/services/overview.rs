//! Overview load controller.
//!
//! Coordinates one in-flight listing fetch at a time, exposes its outcome
//! and data as observable state, and carries a one-shot selection signal
//! decoupled from the fetch. Only this controller mutates the observables;
//! consumers hold [`Observer`] handles and read.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::domain::error::DomainResult;
use crate::domain::models::{LoadStatus, MarsProperty, PropertyFilter};
use crate::domain::ports::PropertySource;
use crate::services::observable::{ObservableValue, Observer};

/// State holder for the listing overview.
///
/// Each fetch runs as a spawned tokio task and captures a generation
/// number. [`refresh`](Self::refresh) and [`shutdown`](Self::shutdown)
/// advance the generation, so a superseded or post-teardown fetch finds
/// its generation stale and its outcome is discarded instead of committed.
/// The most recently issued fetch therefore always wins, and nothing
/// mutates state after teardown.
///
/// Status and result transitions are applied by a single committer task,
/// in issue order, so observers never see them interleaved. A status
/// listener may call back into the controller (for example, refreshing
/// after an `Error`); no lock is held while listeners run.
pub struct OverviewController {
    source: Arc<dyn PropertySource>,
    status: ObservableValue<LoadStatus>,
    properties: ObservableValue<Vec<MarsProperty>>,
    selected: ObservableValue<Option<MarsProperty>>,
    filter: ObservableValue<PropertyFilter>,
    generation: Arc<AtomicU64>,
    commits: mpsc::UnboundedSender<Commit>,
}

/// A fetch-driven state transition awaiting application.
enum Commit {
    Loading {
        generation: u64,
    },
    Settled {
        generation: u64,
        filter: PropertyFilter,
        outcome: DomainResult<Vec<MarsProperty>>,
    },
}

/// Apply fetch transitions in order, discarding any whose generation is no
/// longer current. Exits when the controller and its fetch tasks are gone.
async fn run_commits(
    mut commits: mpsc::UnboundedReceiver<Commit>,
    status: ObservableValue<LoadStatus>,
    properties: ObservableValue<Vec<MarsProperty>>,
    generation: Arc<AtomicU64>,
) {
    while let Some(commit) = commits.recv().await {
        match commit {
            Commit::Loading { generation: issued } => {
                if generation.load(Ordering::SeqCst) != issued {
                    continue;
                }
                // Already announced; re-publishing would only produce a
                // duplicate notification.
                if status.get() != LoadStatus::Loading {
                    status.publish(LoadStatus::Loading);
                }
            }
            Commit::Settled {
                generation: issued,
                filter,
                outcome,
            } => {
                if generation.load(Ordering::SeqCst) != issued {
                    debug!(%filter, generation = issued, "discarding stale fetch outcome");
                    continue;
                }
                match outcome {
                    Ok(records) => {
                        debug!(%filter, count = records.len(), "fetch completed");
                        properties.publish(records);
                        status.publish(LoadStatus::Done);
                    }
                    Err(err) => {
                        warn!(%filter, error = %err, "fetch failed");
                        properties.publish(Vec::new());
                        status.publish(LoadStatus::Error);
                    }
                }
            }
        }
    }
}

impl OverviewController {
    /// Construct the controller and immediately issue the initial fetch
    /// with the default filter.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(source: Arc<dyn PropertySource>) -> Self {
        Self::with_filter(source, PropertyFilter::default())
    }

    /// Construct the controller and immediately issue the initial fetch
    /// with an explicit filter.
    pub fn with_filter(source: Arc<dyn PropertySource>, filter: PropertyFilter) -> Self {
        let status = ObservableValue::new(LoadStatus::Loading);
        let properties = ObservableValue::new(Vec::new());
        let generation = Arc::new(AtomicU64::new(0));
        let (commits, receiver) = mpsc::unbounded_channel();
        tokio::spawn(run_commits(
            receiver,
            status.clone(),
            properties.clone(),
            Arc::clone(&generation),
        ));
        let controller = Self {
            source,
            status,
            properties,
            selected: ObservableValue::new(None),
            filter: ObservableValue::new(filter),
            generation,
            commits,
        };
        controller.load(filter);
        controller
    }

    /// Replace the current filter and re-issue the fetch.
    pub fn refresh(&self, filter: PropertyFilter) {
        self.filter.publish(filter);
        self.load(filter);
    }

    /// Record that the user selected `property`.
    ///
    /// The selection stays set until [`selection_consumed`](Self::selection_consumed)
    /// acknowledges it, so a late subscriber still observes it once.
    pub fn select_property(&self, property: MarsProperty) {
        self.selected.publish(Some(property));
    }

    /// Acknowledge the current selection, clearing the signal.
    ///
    /// Idempotent; the consumer must call this after acting on a
    /// selection so a resubscription cannot observe it a second time.
    pub fn selection_consumed(&self) {
        self.selected.publish(None);
    }

    /// Tear the controller down; any still-in-flight fetch is abandoned
    /// and will not mutate state when it eventually resolves.
    pub fn shutdown(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(generation, "overview controller shut down");
    }

    /// Observer for the tri-state load status.
    pub fn status(&self) -> Observer<LoadStatus> {
        self.status.observer()
    }

    /// Observer for the current result set.
    pub fn properties(&self) -> Observer<Vec<MarsProperty>> {
        self.properties.observer()
    }

    /// Observer for the one-shot selection signal.
    pub fn selected_property(&self) -> Observer<Option<MarsProperty>> {
        self.selected.observer()
    }

    /// The filter the most recent fetch was issued with.
    pub fn current_filter(&self) -> PropertyFilter {
        self.filter.get()
    }

    /// Issue a fetch for `filter` as a spawned task.
    ///
    /// Advancing the generation invalidates every earlier fetch. The
    /// `Loading` announcement and the terminal `Done`/`Error` transition
    /// are both queued to the committer, which skips them once the
    /// generation has moved on. Failure detail is absorbed here (logged,
    /// then collapsed into the `Error` status).
    fn load(&self, filter: PropertyFilter) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let _ = self.commits.send(Commit::Loading { generation });

        let source = Arc::clone(&self.source);
        let commits = self.commits.clone();
        tokio::spawn(async move {
            let outcome = source.fetch(filter).await;
            let _ = commits.send(Commit::Settled {
                generation,
                filter,
                outcome,
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::mars_api::MockPropertySource;

    fn listing(id: &str) -> MarsProperty {
        MarsProperty {
            id: id.to_string(),
            img_src_url: format!("https://img.mars/{id}.jpg"),
            property_type: "buy".to_string(),
            price: 100_000.0,
        }
    }

    #[tokio::test]
    async fn selection_signal_is_one_shot() {
        let source = Arc::new(MockPropertySource::new());
        let controller = OverviewController::new(source);

        let property = listing("424906");
        controller.select_property(property.clone());
        assert_eq!(controller.selected_property().get(), Some(property));

        controller.selection_consumed();
        assert_eq!(controller.selected_property().get(), None);

        // A second acknowledgement stays absent.
        controller.selection_consumed();
        assert_eq!(controller.selected_property().get(), None);
    }

    #[tokio::test]
    async fn refresh_updates_active_filter() {
        let source = Arc::new(MockPropertySource::new());
        let controller = OverviewController::new(source);
        assert_eq!(controller.current_filter(), PropertyFilter::ShowAll);

        controller.refresh(PropertyFilter::ShowRent);
        assert_eq!(controller.current_filter(), PropertyFilter::ShowRent);
    }
}
