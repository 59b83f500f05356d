use crate::error::Error;
use crate::negotiation::state::RTCNegotiationState;
use crate::sas::RTCShortAuthenticationString;

/// Events drained from an endpoint with
/// [`Endpoint::poll_event`](crate::endpoint::Endpoint::poll_event).
#[allow(clippy::enum_variant_names)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RTCEndpointEvent {
    OnNegotiationStateChange(RTCNegotiationState),

    /// The remote fingerprint was extracted and its short authentication
    /// string is ready to display.
    OnSasAvailable(RTCShortAuthenticationString),

    OnRemoteResourceAdded(String),
    OnNegotiationNeeded,

    /// A non-fatal condition was logged and the triggering message dropped.
    OnWarning(Error),
}
