use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Describes whether a session description is an offer or an answer.
///
/// Serialises as the lowercase strings `"offer"` and `"answer"`, which is the
/// `type` field of the sdp signal on the wire.
///
/// ```
/// use rtc_sas::sdp::RTCSdpType;
///
/// assert_eq!(RTCSdpType::Offer.to_string(), "offer");
/// assert_eq!("answer".parse::<RTCSdpType>().unwrap(), RTCSdpType::Answer);
/// assert!("pranswer".parse::<RTCSdpType>().is_err());
/// ```
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, Serialize, Deserialize)]
pub enum RTCSdpType {
    /// Created by the initiating endpoint.
    #[serde(rename = "offer")]
    Offer,

    /// Created by the responding endpoint after applying an offer.
    #[serde(rename = "answer")]
    Answer,
}

const SDP_TYPE_OFFER_STR: &str = "offer";
const SDP_TYPE_ANSWER_STR: &str = "answer";

impl FromStr for RTCSdpType {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            SDP_TYPE_OFFER_STR => Ok(RTCSdpType::Offer),
            SDP_TYPE_ANSWER_STR => Ok(RTCSdpType::Answer),
            _ => Err(Error::ErrInvalidSdpType(raw.to_owned())),
        }
    }
}

impl fmt::Display for RTCSdpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RTCSdpType::Offer => write!(f, "{SDP_TYPE_OFFER_STR}"),
            RTCSdpType::Answer => write!(f, "{SDP_TYPE_ANSWER_STR}"),
        }
    }
}
