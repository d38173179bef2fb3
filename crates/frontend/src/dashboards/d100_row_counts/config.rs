use crate::shared::api_utils::api_url;
use std::time::Duration;

pub const DEFAULT_CONTAINER_ID: &str = "counter-display";
pub const DEFAULT_ENDPOINT: &str = "/api/row-counts";

/// Fixed UI strings of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub total_rows: &'static str,
    pub row_count: &'static str,
    pub start_row: &'static str,
    pub end_row: &'static str,
    /// Shown when the request or decoding fails
    pub load_failed: &'static str,
}

impl Labels {
    pub const fn en() -> Self {
        Self {
            total_rows: "Total rows: ",
            row_count: "Rows: ",
            start_row: "Start row: ",
            end_row: "End row: ",
            load_failed: "Failed to load data, please retry later",
        }
    }

    pub const fn zh_cn() -> Self {
        Self {
            total_rows: "总行数：",
            row_count: "行数：",
            start_row: "起始行：",
            end_row: "结束行：",
            load_failed: "加载数据失败，请稍后重试",
        }
    }

    /// Preset for a `data-locale` value
    pub fn for_locale(locale: &str) -> Option<Self> {
        match locale.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Some(Self::en()),
            "zh" | "zh-cn" | "zh-hans" => Some(Self::zh_cn()),
            _ => None,
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::en()
    }
}

/// Настройки панели row-counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    /// Id of the display region
    pub container_id: String,
    pub endpoint: String,
    pub api_base: Option<String>,
    pub labels: Labels,
    /// None waits for the backend indefinitely
    pub request_timeout: Option<Duration>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_base: None,
            labels: Labels::default(),
            request_timeout: None,
        }
    }
}

impl PanelConfig {
    /// Override settings from `data-*` attributes of the container
    ///
    /// `attribute` returns the raw value of an attribute by name. Invalid
    /// values keep the current setting.
    pub fn with_attributes<F>(mut self, attribute: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = non_empty(attribute("data-endpoint")) {
            self.endpoint = endpoint;
        }

        if let Some(base) = non_empty(attribute("data-api-base")) {
            self.api_base = Some(base);
        }

        if let Some(locale) = non_empty(attribute("data-locale")) {
            match Labels::for_locale(&locale) {
                Some(labels) => self.labels = labels,
                None => log::warn!("Unknown data-locale {:?}, keeping default labels", locale),
            }
        }

        if let Some(raw) = non_empty(attribute("data-timeout-ms")) {
            match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => self.request_timeout = Some(Duration::from_millis(ms)),
                _ => log::warn!("Invalid data-timeout-ms {:?}, request timeout disabled", raw),
            }
        }

        self
    }

    /// URL the panel requests
    pub fn request_url(&self) -> String {
        api_url(self.api_base.as_deref(), &self.endpoint)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
