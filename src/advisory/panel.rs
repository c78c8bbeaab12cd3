//! Advisory results and the panel that displays them

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisKind {
    Structural,
    Philosophical,
    Logistical,
}

impl AnalysisKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisKind::Structural => "structural",
            AnalysisKind::Philosophical => "philosophical",
            AnalysisKind::Logistical => "logistical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: AnalysisKind,
}

impl AnalysisResult {
    pub fn new(title: impl Into<String>, content: impl Into<String>, kind: AnalysisKind) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PanelStatus {
    #[default]
    Closed,
    Loading {
        ticket: u64,
    },
    Ready(AnalysisResult),
}

/// Modal showing the latest advisory answer
///
/// Every request takes a fresh ticket. Only the response carrying the ticket
/// the panel is currently waiting on is shown; older ones are dropped.
#[derive(Debug, Clone, Default)]
pub struct AdvisoryPanel {
    status: PanelStatus,
    last_ticket: u64,
}

impl AdvisoryPanel {
    pub fn status(&self) -> &PanelStatus {
        &self.status
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.status, PanelStatus::Closed)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, PanelStatus::Loading { .. })
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.status {
            PanelStatus::Ready(result) => Some(result),
            _ => None,
        }
    }

    /// Enter the loading state and return the ticket for the new request
    pub fn begin(&mut self) -> u64 {
        self.last_ticket += 1;
        self.status = PanelStatus::Loading {
            ticket: self.last_ticket,
        };
        self.last_ticket
    }

    /// Returns false when the response is stale or the panel was closed
    pub fn complete(&mut self, ticket: u64, result: AnalysisResult) -> bool {
        match self.status {
            PanelStatus::Loading { ticket: waiting } if waiting == ticket => {
                self.status = PanelStatus::Ready(result);
                true
            }
            _ => {
                log::debug!("Dropping stale advisory response #{}", ticket);
                false
            }
        }
    }

    pub fn close(&mut self) {
        self.status = PanelStatus::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(content: &str) -> AnalysisResult {
        AnalysisResult::new("Architect's Note", content, AnalysisKind::Structural)
    }

    #[test]
    fn test_latest_request_wins() {
        let mut panel = AdvisoryPanel::default();
        let first = panel.begin();
        let second = panel.begin();
        assert!(panel.is_loading());

        assert!(panel.complete(second, note("second")));
        assert!(!panel.complete(first, note("first")));
        assert_eq!(panel.result().unwrap().content, "second");
    }

    #[test]
    fn test_slow_first_response_is_dropped() {
        let mut panel = AdvisoryPanel::default();
        let first = panel.begin();
        let second = panel.begin();
        assert!(!panel.complete(first, note("first")));
        assert!(panel.is_loading());
        assert!(panel.complete(second, note("second")));
    }

    #[test]
    fn test_close_discards_pending() {
        let mut panel = AdvisoryPanel::default();
        let ticket = panel.begin();
        panel.close();
        assert!(!panel.complete(ticket, note("late")));
        assert!(!panel.is_open());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(note("x")).unwrap();
        assert_eq!(json["type"], "structural");
        assert_eq!(json["title"], "Architect's Note");
    }
}
