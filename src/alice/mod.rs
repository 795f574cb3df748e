//! Yandex Alice protocol module
//!
//! Webhook request adapter and reply envelope

pub mod lenient;
pub mod request;
pub mod response;

pub use request::{AliceEvent, AliceRequest, Identity};
pub use response::{AliceResponse, Button, ResponseBody};
