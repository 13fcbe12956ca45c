use log::debug;
use tokio::sync::Mutex;

use crate::estimation::RevenueReport;

/// Issued on every selection; only the newest ticket may publish a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionTicket(u64);

#[derive(Default)]
struct SessionState {
    latest: u64,
    report: Option<RevenueReport>,
}

/// Currently selected game and its report, last selection wins.
/// In-flight requests are never cancelled; their results are dropped on arrival.
#[derive(Default)]
pub struct RevenueSession {
    state: Mutex<SessionState>,
}

impl RevenueSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new selection, discarding whatever report was shown
    pub async fn select(&self) -> SelectionTicket {
        let mut state = self.state.lock().await;
        state.latest += 1;
        state.report = None;
        SelectionTicket(state.latest)
    }

    /// Store `report` if `ticket` is still the latest selection
    pub async fn publish(&self, ticket: SelectionTicket, report: RevenueReport) -> bool {
        let mut state = self.state.lock().await;
        if ticket.0 != state.latest {
            debug!(
                "Dropping report for game {} from superseded selection",
                report.game_id
            );
            return false;
        }
        state.report = Some(report);
        true
    }

    pub async fn current_report(&self) -> Option<RevenueReport> {
        self.state.lock().await.report.clone()
    }
}
