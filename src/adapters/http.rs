//! HTTP reporter — implements [`ReportPort`] by POSTing the JSON payload.
//!
//! ## cfg gating
//!
//! - **`target_os = "espidf"`**: `EspHttpConnection` behind the
//!   `embedded_svc` blocking client. One connection per report.
//! - **all other targets**: the payload is logged and answered with 200.
//!
//! The POST blocks the poll loop for up to the configured timeout.

use core::time::Duration;

use log::{debug, warn};

use crate::app::ports::ReportPort;
use crate::config::MonitorConfig;
use crate::error::ReportError;
use crate::report::{self, Report};

#[cfg(target_os = "espidf")]
use embedded_svc::{
    http::{Method, client::Client as HttpClient},
    io::Write,
};
#[cfg(target_os = "espidf")]
use esp_idf_svc::http::client::{Configuration as HttpClientConfiguration, EspHttpConnection};

pub struct HttpReporter {
    endpoint: heapless::String<128>,
    timeout: Duration,
    online: bool,
}

impl HttpReporter {
    pub fn new(config: &MonitorConfig) -> Self {
        Self {
            endpoint: config.api_endpoint.clone(),
            timeout: config.http_timeout(),
            online: false,
        }
    }

    /// Mark the network link up or down. Sends fail fast while down.
    pub fn set_online(&mut self, online: bool) {
        self.online = online;
    }

    pub fn is_online(&self) -> bool {
        self.online
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[cfg(target_os = "espidf")]
    fn platform_post(&mut self, body: &[u8]) -> Result<u16, ReportError> {
        let conf = HttpClientConfiguration {
            timeout: Some(self.timeout),
            ..Default::default()
        };
        let conn = EspHttpConnection::new(&conf).map_err(|e| {
            warn!("HTTP: connection setup failed: {e:?}");
            ReportError::Transport
        })?;
        let mut client = HttpClient::wrap(conn);

        let mut len = heapless::String::<10>::new();
        let _ = core::fmt::Write::write_fmt(&mut len, format_args!("{}", body.len()));
        let headers = [
            ("Content-Type", report::CONTENT_TYPE),
            ("Content-Length", len.as_str()),
        ];

        let mut request = client
            .request(Method::Post, self.endpoint.as_str(), &headers)
            .map_err(|e| {
                warn!("HTTP: request to {} failed: {e:?}", self.endpoint);
                ReportError::Transport
            })?;
        request.write_all(body).map_err(|e| {
            warn!("HTTP: body write failed: {e:?}");
            ReportError::Transport
        })?;
        request.flush().map_err(|_| ReportError::Transport)?;
        let response = request.submit().map_err(|e| {
            warn!("HTTP: submit failed: {e:?}");
            ReportError::Transport
        })?;
        Ok(response.status())
    }

    #[cfg(not(target_os = "espidf"))]
    fn platform_post(&mut self, body: &[u8]) -> Result<u16, ReportError> {
        log::info!(
            "HTTP(sim): POST {} ({} ms timeout) {}",
            self.endpoint,
            self.timeout.as_millis(),
            core::str::from_utf8(body).unwrap_or("<binary>")
        );
        Ok(report::HTTP_OK)
    }
}

impl ReportPort for HttpReporter {
    fn send(&mut self, report: &Report<'_>) -> Result<u16, ReportError> {
        if !self.online {
            return Err(ReportError::NotConnected);
        }
        let body = report::encode(report)?;
        debug!("HTTP: sending {} bytes to {}", body.len(), self.endpoint);

        match self.platform_post(&body)? {
            report::HTTP_OK => Ok(report::HTTP_OK),
            status => {
                warn!("HTTP: server answered {}", status);
                Err(ReportError::HttpStatus(status))
            }
        }
    }
}
