use http::Method;
use serde::{Deserialize, Serialize};

/// Endpoints exposed by the device configuration portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endpoint {
    #[serde(rename = "reboot")]
    Reboot,
    #[serde(rename = "wifi")]
    Wifi,
    #[serde(rename = "wifi_scan")]
    WifiScan,
    #[serde(rename = "wifi_connect")]
    WifiConnect,
    #[serde(rename = "wifi_disconnect")]
    WifiDisconnect,
    #[serde(rename = "settings")]
    Settings,
}

impl Endpoint {
    pub const COUNT: usize = 6;

    /// All endpoints in declaration order.
    pub const ALL: [Endpoint; Self::COUNT] = [
        Endpoint::Reboot,
        Endpoint::Wifi,
        Endpoint::WifiScan,
        Endpoint::WifiConnect,
        Endpoint::WifiDisconnect,
        Endpoint::Settings,
    ];

    /// URL path on the device, without any base address.
    pub fn as_path(&self) -> &'static str {
        match self {
            Endpoint::Reboot => "/reboot",
            Endpoint::Wifi => "/wifi",
            Endpoint::WifiScan => "/wifi/scan",
            Endpoint::WifiConnect => "/wifi/connect",
            Endpoint::WifiDisconnect => "/wifi/disconnect",
            Endpoint::Settings => "/settings",
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Endpoint::Reboot => "REBOOT",
            Endpoint::Wifi => "WIFI",
            Endpoint::WifiScan => "WIFI_SCAN",
            Endpoint::WifiConnect => "WIFI_CONNECT",
            Endpoint::WifiDisconnect => "WIFI_DISCONNECT",
            Endpoint::Settings => "SETTINGS",
        }
    }

    pub fn from_code<S: AsRef<str>>(code: S) -> Option<Self> {
        match code.as_ref().to_uppercase().as_str() {
            "REBOOT" => Some(Endpoint::Reboot),
            "WIFI" => Some(Endpoint::Wifi),
            "WIFI_SCAN" => Some(Endpoint::WifiScan),
            "WIFI_CONNECT" => Some(Endpoint::WifiConnect),
            "WIFI_DISCONNECT" => Some(Endpoint::WifiDisconnect),
            "SETTINGS" => Some(Endpoint::Settings),
            _ => None,
        }
    }

    /// HTTP methods the portal firmware accepts on this path.
    pub fn methods(&self) -> &'static [Method] {
        static GET: [Method; 1] = [Method::GET];
        static POST: [Method; 1] = [Method::POST];
        static SETTINGS: [Method; 4] =
            [Method::OPTIONS, Method::GET, Method::POST, Method::DELETE];

        match self {
            Endpoint::Reboot => &POST,
            Endpoint::Wifi => &GET,
            Endpoint::WifiScan => &GET,
            Endpoint::WifiConnect => &POST,
            Endpoint::WifiDisconnect => &POST,
            Endpoint::Settings => &SETTINGS,
        }
    }
}
