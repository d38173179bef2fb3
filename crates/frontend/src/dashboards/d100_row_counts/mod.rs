//! Row-counts panel
//!
//! Fetches `/api/row-counts` once the page is parsed and renders the summary
//! into `#counter-display`.

pub mod api;
pub mod config;
pub mod ui;

use crate::shared::dom::{self, MountError};
use api::HttpRowCountSource;
use config::{PanelConfig, DEFAULT_CONTAINER_ID};
use ui::panel::RowCountPanel;
use wasm_bindgen_futures::spawn_local;

/// Schedule the panel for when the document is ready
pub fn start_panel() -> Result<(), MountError> {
    dom::on_document_ready(|| {
        if let Err(err) = mount_panel(DEFAULT_CONTAINER_ID) {
            log::error!("Row counts panel not mounted: {}", err);
        }
    })
}

/// Attach the panel to the element with `container_id` and start loading
pub fn mount_panel(container_id: &str) -> Result<(), MountError> {
    let container = dom::element_by_id(container_id)?;
    let config = PanelConfig {
        container_id: container_id.to_string(),
        ..PanelConfig::default()
    }
    .with_attributes(|name| container.get_attribute(name));

    log::debug!(
        "Mounting row counts panel on #{} ({})",
        config.container_id,
        config.request_url()
    );

    let source = HttpRowCountSource::from_config(&config);
    let mut panel = RowCountPanel::new(source, container, config.labels);

    spawn_local(async move {
        panel.load_row_counts().await;
    });

    Ok(())
}
