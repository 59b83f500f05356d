use serde::{Deserialize, Serialize};

use crate::candidate::RTCIceCandidateInit;
use crate::error::{Error, Result};
use crate::sdp::RTCSessionDescription;

/// A message exchanged between two endpoints over the signaling channel.
///
/// Encoded as JSON with exactly one top-level key:
///
/// ```text
/// {"sdp": {"type": "offer"|"answer", "content": "<description text>"}}
/// {"candidate": {"candidate": "...", "sdpMid": "0", "sdpMLineIndex": 0, ...}}
/// ```
///
/// Decoding fails closed: text that is not JSON is
/// [`Error::ErrMalformedSignalMessage`], JSON of any other shape is
/// [`Error::ErrUnexpectedSignal`].
///
/// ```
/// use rtc_sas::sdp::RTCSessionDescription;
/// use rtc_sas::signal::SignalMessage;
///
/// let signal = SignalMessage::Sdp(RTCSessionDescription::offer("v=0".to_owned()));
/// let text = signal.encode().unwrap();
/// assert_eq!(text, r#"{"sdp":{"type":"offer","content":"v=0"}}"#);
/// assert_eq!(SignalMessage::decode(&text).unwrap(), signal);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalMessage {
    #[serde(rename = "sdp")]
    Sdp(RTCSessionDescription),
    #[serde(rename = "candidate")]
    Candidate(RTCIceCandidateInit),
}

impl SignalMessage {
    pub fn encode(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Other(e.to_string()))
    }

    pub fn decode(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| Error::ErrMalformedSignalMessage(e.to_string()))?;

        SignalMessage::deserialize(&value).map_err(|_| Error::ErrUnexpectedSignal(text.to_owned()))
    }
}

/// Outbound half of the signaling channel.
///
/// The endpoint hands every encoded [`SignalMessage`] to its sink exactly
/// once; delivery to the remote endpoint is the sink's business. Any
/// `FnMut(String)` closure is a sink.
pub trait SignalSink {
    fn send_signal(&mut self, text: String);
}

impl<F> SignalSink for F
where
    F: FnMut(String),
{
    fn send_signal(&mut self, text: String) {
        self(text)
    }
}
