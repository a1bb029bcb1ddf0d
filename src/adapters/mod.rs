//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements         | Connects to              |
//! |----------------|--------------------|--------------------------|
//! | `hardware`     | MatrixPort         | ESP32 GPIO (mux lines)   |
//! |                | SamplerPort        | ESP32 ADC1 oneshot       |
//! | `log_sink`     | EventSink          | Serial log output        |

pub mod hardware;
pub mod log_sink;
