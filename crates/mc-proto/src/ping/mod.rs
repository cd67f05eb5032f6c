pub mod status;
pub mod varint;

pub use status::{
    StatusPlayers, StatusResponse, StatusVersion, decode_status_response, encode_status_request,
    ping_status,
};
