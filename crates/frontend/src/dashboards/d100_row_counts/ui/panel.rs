use crate::dashboards::d100_row_counts::api::{RowCountSource, TransportError};
use crate::dashboards::d100_row_counts::config::Labels;
use crate::dashboards::d100_row_counts::ui::render;
use crate::shared::dom::RenderTarget;
use contracts::dashboards::d100_row_counts::RowCountResponse;

/// What the panel ended up showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Success,
    /// Error reported by the backend in the payload, shown verbatim
    ApplicationError(String),
    /// Request or decoding failed, the generic message is shown
    TransportError(TransportError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelState {
    Loading,
    Rendered(RenderOutcome),
}

/// Row-counts panel: one load, one render
pub struct RowCountPanel<S, T> {
    source: S,
    target: T,
    labels: Labels,
    state: PanelState,
}

impl<S, T> RowCountPanel<S, T>
where
    S: RowCountSource,
    T: RenderTarget,
{
    pub fn new(source: S, target: T, labels: Labels) -> Self {
        Self {
            source,
            target,
            labels,
            state: PanelState::Loading,
        }
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// Fetch the payload and render it
    ///
    /// Does nothing once the panel has rendered.
    pub async fn load_row_counts(&mut self) -> &PanelState {
        if let PanelState::Rendered(_) = self.state {
            log::debug!("Row counts already rendered, load skipped");
            return &self.state;
        }

        match self.source.fetch_row_counts().await {
            Ok(data) => self.display_row_counts(&data),
            Err(err) => {
                log::error!("Failed to load row counts: {}", err);
                self.target
                    .replace_content(&render::render_load_failure(&self.labels));
                self.state = PanelState::Rendered(RenderOutcome::TransportError(err));
            }
        }

        &self.state
    }

    /// Replace the display region with the rendered payload
    pub fn display_row_counts(&mut self, data: &RowCountResponse) {
        self.target
            .replace_content(&render::render_response(data, &self.labels));

        let outcome = match data {
            RowCountResponse::Success(_) => RenderOutcome::Success,
            RowCountResponse::Failure { error } => RenderOutcome::ApplicationError(error.clone()),
        };
        self.state = PanelState::Rendered(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dom::BufferTarget;
    use async_trait::async_trait;
    use contracts::dashboards::d100_row_counts::{RowCountSummary, Section};
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::sync::Once;

    thread_local! {
        static LOGGED: RefCell<Vec<(log::Level, String)>> = RefCell::new(Vec::new());
    }

    struct CaptureLogger;

    impl log::Log for CaptureLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            LOGGED.with(|logged| {
                logged
                    .borrow_mut()
                    .push((record.level(), record.args().to_string()))
            });
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger;
    static INIT: Once = Once::new();

    fn capture_logs() {
        INIT.call_once(|| {
            // another test harness logger may already be set
            let _ = log::set_logger(&LOGGER);
            log::set_max_level(log::LevelFilter::Trace);
        });
        LOGGED.with(|logged| logged.borrow_mut().clear());
    }

    fn logged_errors() -> Vec<String> {
        LOGGED.with(|logged| {
            logged
                .borrow()
                .iter()
                .filter(|(level, _)| *level == log::Level::Error)
                .map(|(_, message)| message.clone())
                .collect()
        })
    }

    struct StubSource {
        result: Result<RowCountResponse, TransportError>,
        calls: Cell<usize>,
    }

    impl StubSource {
        fn new(result: Result<RowCountResponse, TransportError>) -> Self {
            Self {
                result,
                calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl RowCountSource for StubSource {
        async fn fetch_row_counts(&self) -> Result<RowCountResponse, TransportError> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    fn summary() -> RowCountResponse {
        RowCountResponse::Success(RowCountSummary {
            total_rows: 120,
            sections: vec![
                Section {
                    section_title: "Intro".to_string(),
                    row_count: 20,
                    start_row: None,
                    end_row: None,
                },
                Section {
                    section_title: "Body".to_string(),
                    row_count: 100,
                    start_row: Some(21),
                    end_row: Some(120),
                },
            ],
        })
    }

    #[test]
    fn test_load_renders_summary() {
        let source = StubSource::new(Ok(summary()));
        let target = BufferTarget::new();
        let mut panel = RowCountPanel::new(&source, &target, Labels::en());
        assert_eq!(panel.state(), &PanelState::Loading);

        let state = block_on(panel.load_row_counts()).clone();

        assert_eq!(state, PanelState::Rendered(RenderOutcome::Success));
        let html = target.content();
        assert!(html.contains("120"));
        assert!(html.contains("<h3>Intro</h3>"));
        assert!(html.contains("<h3>Body</h3>"));
        assert!(html.contains("Rows: 20"));
        assert!(html.contains("Rows: 100"));
        assert_eq!(target.writes(), 1);
    }

    #[test]
    fn test_load_failure_shows_generic_message_and_logs() {
        capture_logs();
        let source = StubSource::new(Err(TransportError::Request("NetworkError".to_string())));
        let target = BufferTarget::new();
        let mut panel = RowCountPanel::new(&source, &target, Labels::en());

        let state = block_on(panel.load_row_counts()).clone();

        assert_eq!(
            state,
            PanelState::Rendered(RenderOutcome::TransportError(TransportError::Request(
                "NetworkError".to_string()
            )))
        );
        assert_eq!(
            target.content(),
            "<p class=\"error\">Failed to load data, please retry later</p>"
        );
        let errors = logged_errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("NetworkError"));
    }

    #[test]
    fn test_application_error_is_shown_and_not_logged() {
        capture_logs();
        let source = StubSource::new(Ok(RowCountResponse::Failure {
            error: "no data".to_string(),
        }));
        let target = BufferTarget::new();
        let mut panel = RowCountPanel::new(&source, &target, Labels::en());

        let state = block_on(panel.load_row_counts()).clone();

        assert_eq!(
            state,
            PanelState::Rendered(RenderOutcome::ApplicationError("no data".to_string()))
        );
        assert_eq!(target.content(), "<p class=\"error\">no data</p>");
        assert!(logged_errors().is_empty());
    }

    #[test]
    fn test_second_load_does_not_fetch() {
        let source = StubSource::new(Ok(summary()));
        let target = BufferTarget::new();
        let mut panel = RowCountPanel::new(&source, &target, Labels::en());

        block_on(panel.load_row_counts());
        block_on(panel.load_row_counts());

        assert_eq!(source.calls.get(), 1);
        assert_eq!(target.writes(), 1);
    }

    #[test]
    fn test_display_twice_is_identical() {
        let source = StubSource::new(Ok(summary()));
        let target = BufferTarget::new();
        let mut panel = RowCountPanel::new(&source, &target, Labels::en());
        let data = summary();

        panel.display_row_counts(&data);
        let first = target.content();
        panel.display_row_counts(&data);
        let second = target.content();

        assert_eq!(first, second);
        assert_eq!(target.writes(), 2);
        assert_eq!(source.calls.get(), 0);
    }

    #[test]
    fn test_display_replaces_previous_content() {
        let source = StubSource::new(Ok(summary()));
        let target = BufferTarget::new();
        let mut panel = RowCountPanel::new(&source, &target, Labels::en());

        panel.display_row_counts(&summary());
        panel.display_row_counts(&RowCountResponse::Failure {
            error: "no data".to_string(),
        });

        assert_eq!(target.content(), "<p class=\"error\">no data</p>");
    }
}
