//! Transport layer: wire-format details (JSON bodies in, JSON answers out).

mod answer;
mod error_body;
mod send;
mod status;

pub use answer::{api_result_from_answer, decode_json_answer};
pub use error_body::decode_gateway_error;
pub use send::encode_send_json;
pub use status::encode_check_status_json;
