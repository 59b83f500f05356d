use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// ErrNoLocalResourceAvailable indicates that local media could not be
    /// acquired before negotiation.
    #[error("no local resource available")]
    ErrNoLocalResourceAvailable,

    /// ErrOfferCreationFailed indicates that the connection engine failed to
    /// create an offer.
    #[error("failed to create offer: {0}")]
    ErrOfferCreationFailed(String),

    /// ErrAnswerCreationFailed indicates that the connection engine failed to
    /// create an answer.
    #[error("failed to create answer: {0}")]
    ErrAnswerCreationFailed(String),

    /// ErrSetLocalDescriptionFailed indicates that the connection engine
    /// rejected the local description.
    #[error("failed to set local description: {0}")]
    ErrSetLocalDescriptionFailed(String),

    /// ErrSetRemoteDescriptionFailed indicates that the connection engine
    /// rejected the remote description.
    #[error("failed to set remote description: {0}")]
    ErrSetRemoteDescriptionFailed(String),

    /// ErrAddIceCandidateFailed indicates that the connection engine
    /// rejected a remote ICE candidate.
    #[error("failed to add ice candidate: {0}")]
    ErrAddIceCandidateFailed(String),

    /// ErrMissingFingerprint indicates that a remote description carried no
    /// sha-256 fingerprint attribute. Non-fatal.
    #[error("session description does not contain a sha-256 fingerprint")]
    ErrMissingFingerprint,

    /// ErrUnexpectedSignal indicates a well-formed signal that is neither an
    /// sdp nor a candidate message. Non-fatal.
    #[error("unexpected signal: {0}")]
    ErrUnexpectedSignal(String),

    /// ErrMalformedSignalMessage indicates signal text that could not be
    /// parsed at all. Non-fatal.
    #[error("malformed signal message: {0}")]
    ErrMalformedSignalMessage(String),

    #[error("invalid proposed negotiation state transition: {0}")]
    ErrNegotiationStateProposedTransitionInvalid(String),

    #[error("invalid fingerprint: {0}")]
    ErrInvalidFingerprint(String),

    #[error("invalid sdp type: {0}")]
    ErrInvalidSdpType(String),

    #[error("word table must have 256 rows, got {0}")]
    ErrWordTableRowCount(usize),

    #[error("word table row {0} must have exactly 2 words")]
    ErrWordTableMalformedRow(usize),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Returns true for the conditions that are logged and dropped instead of
    /// aborting negotiation.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Error::ErrMissingFingerprint
                | Error::ErrUnexpectedSignal(_)
                | Error::ErrMalformedSignalMessage(_)
        )
    }
}
