//! WiFi station-mode adapter.
//!
//! One connection attempt at boot with the configured credentials. The
//! outcome is only shown on the network line; the monitor never waits on
//! or retries the link, and a failed report simply says so.
//!
//! ## cfg gating
//!
//! - **`target_os = "espidf"`**: ESP-IDF WiFi driver via `esp_idf_svc::wifi`.
//! - **all other targets**: simulation stub that "connects" on loopback.

use core::fmt;
use core::net::Ipv4Addr;

use log::{info, warn};

use crate::app::ports::NetworkStatus;
use crate::config::MonitorConfig;

#[cfg(target_os = "espidf")]
use embedded_svc::wifi::{AuthMethod, ClientConfiguration, Configuration};
#[cfg(target_os = "espidf")]
use esp_idf_svc::{
    eventloop::EspSystemEventLoop,
    hal::modem::Modem,
    nvs::EspDefaultNvsPartition,
    wifi::{BlockingWifi, EspWifi},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WifiError {
    InvalidSsid,
    InvalidPassword,
    Driver,
    ConnectionFailed,
}

impl WifiError {
    /// Short text for the network line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidSsid => "invalid SSID",
            Self::InvalidPassword => "invalid password",
            Self::Driver => "WiFi driver failed",
            Self::ConnectionFailed => "connect failed",
        }
    }
}

impl fmt::Display for WifiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::error::Error for WifiError {}

fn is_printable_ascii(s: &str) -> bool {
    s.bytes().all(|b| (0x20..=0x7E).contains(&b))
}

fn validate_ssid(ssid: &str) -> Result<(), WifiError> {
    if ssid.is_empty() || ssid.len() > 32 || !is_printable_ascii(ssid) {
        return Err(WifiError::InvalidSsid);
    }
    Ok(())
}

/// Empty means an open network; otherwise WPA2 length rules.
fn validate_password(password: &str) -> Result<(), WifiError> {
    if password.is_empty() {
        return Ok(());
    }
    if password.len() < 8 || password.len() > 64 {
        return Err(WifiError::InvalidPassword);
    }
    Ok(())
}

pub struct WifiAdapter {
    ssid: heapless::String<32>,
    password: heapless::String<64>,
    #[cfg(target_os = "espidf")]
    wifi: BlockingWifi<EspWifi<'static>>,
    status: NetworkStatus,
}

impl WifiAdapter {
    #[cfg(target_os = "espidf")]
    pub fn new(
        config: &MonitorConfig,
        modem: Modem,
        sys_loop: EspSystemEventLoop,
        nvs: Option<EspDefaultNvsPartition>,
    ) -> Result<Self, WifiError> {
        let esp_wifi = EspWifi::new(modem, sys_loop.clone(), nvs).map_err(|e| {
            warn!("WiFi: driver init failed: {e:?}");
            WifiError::Driver
        })?;
        let wifi = BlockingWifi::wrap(esp_wifi, sys_loop).map_err(|_| WifiError::Driver)?;
        Ok(Self {
            ssid: config.wifi_ssid.clone(),
            password: config.wifi_password.clone(),
            wifi,
            status: NetworkStatus::NotConnected,
        })
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn new(config: &MonitorConfig) -> Result<Self, WifiError> {
        Ok(Self {
            ssid: config.wifi_ssid.clone(),
            password: config.wifi_password.clone(),
            status: NetworkStatus::NotConnected,
        })
    }

    /// Try once to join the configured network.
    ///
    /// No SSID configured leaves the link down without an error.
    pub fn connect(&mut self) -> NetworkStatus {
        self.status = if self.ssid.is_empty() {
            info!("WiFi: no SSID configured");
            NetworkStatus::NotConnected
        } else {
            match self.try_connect() {
                Ok(ip) => {
                    info!("WiFi: connected to '{}' as {}", self.ssid, ip);
                    NetworkStatus::Connected(ip)
                }
                Err(e) => {
                    warn!("WiFi: connect to '{}' failed: {}", self.ssid, e);
                    NetworkStatus::Error(e.as_str())
                }
            }
        };
        self.status
    }

    pub fn status(&self) -> NetworkStatus {
        self.status
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.status, NetworkStatus::Connected(_))
    }

    fn try_connect(&mut self) -> Result<Ipv4Addr, WifiError> {
        validate_ssid(&self.ssid)?;
        validate_password(&self.password)?;
        self.platform_connect()
    }

    // ── Platform-specific ─────────────────────────────────────

    #[cfg(target_os = "espidf")]
    fn platform_connect(&mut self) -> Result<Ipv4Addr, WifiError> {
        let auth_method = if self.password.is_empty() {
            AuthMethod::None
        } else {
            AuthMethod::WPA2Personal
        };
        let client = ClientConfiguration {
            ssid: self
                .ssid
                .as_str()
                .try_into()
                .map_err(|_| WifiError::InvalidSsid)?,
            password: self
                .password
                .as_str()
                .try_into()
                .map_err(|_| WifiError::InvalidPassword)?,
            auth_method,
            ..Default::default()
        };
        self.wifi
            .set_configuration(&Configuration::Client(client))
            .map_err(|_| WifiError::Driver)?;
        self.wifi.start().map_err(|_| WifiError::Driver)?;
        self.wifi.connect().map_err(|e| {
            warn!("WiFi: association failed: {e:?}");
            WifiError::ConnectionFailed
        })?;
        self.wifi
            .wait_netif_up()
            .map_err(|_| WifiError::ConnectionFailed)?;
        let ip_info = self
            .wifi
            .wifi()
            .sta_netif()
            .get_ip_info()
            .map_err(|_| WifiError::ConnectionFailed)?;
        Ok(ip_info.ip)
    }

    #[cfg(not(target_os = "espidf"))]
    fn platform_connect(&mut self) -> Result<Ipv4Addr, WifiError> {
        Ok(Ipv4Addr::LOCALHOST)
    }
}
