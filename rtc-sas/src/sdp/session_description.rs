use std::fmt;

use serde::{Deserialize, Serialize};

use super::sdp_type::RTCSdpType;

/// A session description produced by the connection engine, tagged as offer
/// or answer.
///
/// The content is opaque SDP-like text. This crate only reads it to find the
/// fingerprint attribute; it never rewrites it. On the wire the description
/// serialises as `{"type": "offer", "content": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RTCSessionDescription {
    #[serde(rename = "type")]
    pub sdp_type: RTCSdpType,

    /// The description text.
    #[serde(rename = "content")]
    pub sdp: String,
}

impl fmt::Display for RTCSessionDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "type: {}, sdp:\n{}",
            self.sdp_type,
            self.sdp.replace("\r\n", "\n")
        )
    }
}

impl RTCSessionDescription {
    pub fn new(sdp_type: RTCSdpType, sdp: String) -> Self {
        Self { sdp_type, sdp }
    }

    /// Creates an offer description from text.
    pub fn offer(sdp: String) -> Self {
        Self::new(RTCSdpType::Offer, sdp)
    }

    /// Creates an answer description from text.
    pub fn answer(sdp: String) -> Self {
        Self::new(RTCSdpType::Answer, sdp)
    }
}
