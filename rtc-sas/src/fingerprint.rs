use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sdp::RTCSessionDescription;

const ATTRIBUTE_FINGERPRINT_PREFIX: &str = "a=fingerprint:";
const ATTRIBUTE_FINGERPRINT_LABEL: &str = "fingerprint attribute:";

/// Hash algorithm of the fingerprints used for the short authentication string.
pub const FINGERPRINT_ALGORITHM_SHA256: &str = "sha-256";

/// Certificate fingerprint carried in a session description.
///
/// The value is kept verbatim as the colon-separated hex pairs found in the
/// description, e.g. `"AB:CD:EF:01"`. Every way of building one, including
/// deserialization, goes through [`Fingerprint::new`], which checks that each
/// pair is two hex digits.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FingerprintFields")]
pub struct Fingerprint {
    algorithm: String,
    value: String,
}

#[derive(Deserialize)]
struct FingerprintFields {
    algorithm: String,
    value: String,
}

impl TryFrom<FingerprintFields> for Fingerprint {
    type Error = Error;

    fn try_from(fields: FingerprintFields) -> Result<Self> {
        Fingerprint::new(&fields.algorithm, &fields.value)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.algorithm, self.value)
    }
}

impl Fingerprint {
    pub fn new(algorithm: &str, value: &str) -> Result<Self> {
        if !value.is_empty() {
            for pair in value.split(':') {
                if pair.len() != 2 || !pair.bytes().all(|b| b.is_ascii_hexdigit()) {
                    return Err(Error::ErrInvalidFingerprint(value.to_owned()));
                }
            }
        }

        Ok(Self {
            algorithm: algorithm.to_ascii_lowercase(),
            value: value.to_owned(),
        })
    }

    /// Hash function name, for example `sha-256`.
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Colon-separated hex digest.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Decodes the hex pairs into bytes, in order. Decoding stops at the
    /// first pair that is not hex, so no later byte changes position.
    pub fn bytes(&self) -> Vec<u8> {
        self.pairs()
            .map_while(|pair| u8::from_str_radix(pair, 16).ok())
            .collect()
    }

    /// Iterates the hex pairs of the value.
    pub fn pairs(&self) -> impl Iterator<Item = &str> {
        self.value.split(':').filter(|pair| !pair.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Scans `description` for a sha-256 fingerprint attribute and returns it.
///
/// Both the SDP form `a=fingerprint:sha-256 AA:BB` and the labelled form
/// `fingerprint attribute: sha-256 AA:BB` are recognised; the first matching
/// line wins. Returns `None` when no line matches or the digest is not
/// well-formed hex pairs. Peers without SAS support omit the attribute, so
/// absence is not an error.
pub fn extract_fingerprint(description: &RTCSessionDescription) -> Option<Fingerprint> {
    extract_fingerprint_from_sdp(&description.sdp)
}

pub(crate) fn extract_fingerprint_from_sdp(sdp: &str) -> Option<Fingerprint> {
    sdp.lines().find_map(parse_fingerprint_line)
}

fn parse_fingerprint_line(line: &str) -> Option<Fingerprint> {
    let line = line.trim();
    let attribute = line
        .strip_prefix(ATTRIBUTE_FINGERPRINT_PREFIX)
        .or_else(|| line.strip_prefix(ATTRIBUTE_FINGERPRINT_LABEL))?;

    let mut fields = attribute.split_whitespace();
    let algorithm = fields.next()?;
    if !algorithm.eq_ignore_ascii_case(FINGERPRINT_ALGORITHM_SHA256) {
        return None;
    }
    let value = fields.next()?;
    if fields.next().is_some() {
        return None;
    }

    Fingerprint::new(algorithm, value).ok()
}
