use serde::{Deserialize, Serialize};

/// RTCIceCandidateInit is used to serialize ice candidates
///
/// The candidate is opaque to the negotiation core: it is relayed between the
/// connection engine and the signaling channel without being interpreted.
/// An empty `candidate` string marks the end of candidate discovery.
///
/// ## Specifications
///
/// * [W3C]
///
/// [W3C]: https://w3c.github.io/webrtc-pc/#dom-rtcicecandidateinit
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RTCIceCandidateInit {
    pub candidate: String,
    #[serde(default)]
    pub sdp_mid: Option<String>,
    #[serde(rename = "sdpMLineIndex", default)]
    pub sdp_mline_index: Option<u16>,
    #[serde(default)]
    pub username_fragment: Option<String>,
}

impl RTCIceCandidateInit {
    pub fn new(candidate: &str) -> Self {
        Self {
            candidate: candidate.to_owned(),
            ..Default::default()
        }
    }

    /// Returns true for the end-of-candidates marker.
    pub fn is_end_of_candidates(&self) -> bool {
        let value = self
            .candidate
            .strip_prefix("candidate:")
            .unwrap_or(&self.candidate);
        value.trim().is_empty()
    }
}
