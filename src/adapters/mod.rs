//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements   | Connects to                   |
//! |-------------|--------------|-------------------------------|
//! | `display`   | DisplayPort  | Status screen (serial mirror) |
//! | `hardware`  | SensorPort   | DHT22 on GPIO                 |
//! | `http`      | ReportPort   | ESP-IDF HTTP client           |
//! | `log_sink`  | EventSink    | Serial log output             |
//! | `wifi`      | —            | ESP-IDF WiFi STA (boot only)  |

pub mod display;
pub mod hardware;
pub mod http;
pub mod log_sink;
pub mod wifi;
