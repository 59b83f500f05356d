use std::fmt;

use crate::error::{Error, Result};
use crate::sdp::RTCSdpType;

/// Why negotiation stopped in [`RTCNegotiationState::Failed`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RTCFailureReason {
    OfferCreationFailed,
    AnswerCreationFailed,
    SetLocalDescriptionFailed,
    SetRemoteDescriptionFailed,
}

const FAILURE_REASON_OFFER_CREATION_FAILED_STR: &str = "offer-creation-failed";
const FAILURE_REASON_ANSWER_CREATION_FAILED_STR: &str = "answer-creation-failed";
const FAILURE_REASON_SET_LOCAL_DESCRIPTION_FAILED_STR: &str = "set-local-description-failed";
const FAILURE_REASON_SET_REMOTE_DESCRIPTION_FAILED_STR: &str = "set-remote-description-failed";

impl fmt::Display for RTCFailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            RTCFailureReason::OfferCreationFailed => FAILURE_REASON_OFFER_CREATION_FAILED_STR,
            RTCFailureReason::AnswerCreationFailed => FAILURE_REASON_ANSWER_CREATION_FAILED_STR,
            RTCFailureReason::SetLocalDescriptionFailed => {
                FAILURE_REASON_SET_LOCAL_DESCRIPTION_FAILED_STR
            }
            RTCFailureReason::SetRemoteDescriptionFailed => {
                FAILURE_REASON_SET_REMOTE_DESCRIPTION_FAILED_STR
            }
        };
        write!(f, "{s}")
    }
}

/// Which side of the offer/answer exchange an endpoint took.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RTCNegotiationRole {
    Offerer,
    Answerer,
}

impl fmt::Display for RTCNegotiationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RTCNegotiationRole::Offerer => write!(f, "offerer"),
            RTCNegotiationRole::Answerer => write!(f, "answerer"),
        }
    }
}

/// Indicates the progress of one endpoint through the offer/answer exchange.
///
/// **Offerer:**
/// ```text
/// Idle → (create offer) → OfferPending → (set local offer) → LocalDescriptionSet
///      → (remote answer) → RemoteDescriptionSet → Negotiated
/// ```
///
/// **Answerer:**
/// ```text
/// Idle → (remote offer) → RemoteDescriptionSet → (create answer) → AnswerPending
///      → (set local answer) → LocalDescriptionSet → Negotiated
/// ```
///
/// `Failed` is terminal and reachable from every non-terminal state when the
/// connection engine rejects an operation. Only a reset leaves it.
///
/// ```
/// use rtc_sas::negotiation::state::{RTCFailureReason, RTCNegotiationState};
///
/// assert_eq!(RTCNegotiationState::OfferPending.to_string(), "offer-pending");
/// assert_eq!(
///     RTCNegotiationState::Failed(RTCFailureReason::OfferCreationFailed).to_string(),
///     "failed(offer-creation-failed)"
/// );
/// assert!(RTCNegotiationState::Negotiated.is_terminal());
/// ```
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RTCNegotiationState {
    /// Nothing has happened yet. This is the default state.
    #[default]
    Idle,

    /// A local offer was created and is about to be set.
    OfferPending,

    /// A local answer was created and is about to be set.
    AnswerPending,

    /// The local description was applied and signaled; the offerer now waits
    /// for the remote answer.
    LocalDescriptionSet,

    /// The remote description was applied; the answerer now creates its answer.
    RemoteDescriptionSet,

    /// Both descriptions are applied.
    Negotiated,

    Failed(RTCFailureReason),
}

const NEGOTIATION_STATE_IDLE_STR: &str = "idle";
const NEGOTIATION_STATE_OFFER_PENDING_STR: &str = "offer-pending";
const NEGOTIATION_STATE_ANSWER_PENDING_STR: &str = "answer-pending";
const NEGOTIATION_STATE_LOCAL_DESCRIPTION_SET_STR: &str = "local-description-set";
const NEGOTIATION_STATE_REMOTE_DESCRIPTION_SET_STR: &str = "remote-description-set";
const NEGOTIATION_STATE_NEGOTIATED_STR: &str = "negotiated";

impl fmt::Display for RTCNegotiationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RTCNegotiationState::Idle => write!(f, "{NEGOTIATION_STATE_IDLE_STR}"),
            RTCNegotiationState::OfferPending => {
                write!(f, "{NEGOTIATION_STATE_OFFER_PENDING_STR}")
            }
            RTCNegotiationState::AnswerPending => {
                write!(f, "{NEGOTIATION_STATE_ANSWER_PENDING_STR}")
            }
            RTCNegotiationState::LocalDescriptionSet => {
                write!(f, "{NEGOTIATION_STATE_LOCAL_DESCRIPTION_SET_STR}")
            }
            RTCNegotiationState::RemoteDescriptionSet => {
                write!(f, "{NEGOTIATION_STATE_REMOTE_DESCRIPTION_SET_STR}")
            }
            RTCNegotiationState::Negotiated => write!(f, "{NEGOTIATION_STATE_NEGOTIATED_STR}"),
            RTCNegotiationState::Failed(reason) => write!(f, "failed({reason})"),
        }
    }
}

impl RTCNegotiationState {
    /// Negotiated and Failed accept no further description operations.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RTCNegotiationState::Negotiated | RTCNegotiationState::Failed(_)
        )
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RTCNegotiationState::Failed(_))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum NegotiationOp {
    CreateOffer,
    CreateAnswer,
    SetLocal(RTCSdpType),
    SetRemote(RTCSdpType),
}

impl fmt::Display for NegotiationOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            NegotiationOp::CreateOffer => write!(f, "CreateOffer"),
            NegotiationOp::CreateAnswer => write!(f, "CreateAnswer"),
            NegotiationOp::SetLocal(sdp_type) => write!(f, "SetLocal({sdp_type})"),
            NegotiationOp::SetRemote(sdp_type) => write!(f, "SetRemote({sdp_type})"),
        }
    }
}

/// Checks that `op` may run in `cur` and returns the role it implies.
pub(crate) fn check_negotiation_op(
    cur: RTCNegotiationState,
    role: Option<RTCNegotiationRole>,
    op: NegotiationOp,
) -> Result<RTCNegotiationRole> {
    match (cur, role, op) {
        // idle->CreateOffer->offer-pending
        (RTCNegotiationState::Idle, None, NegotiationOp::CreateOffer) => {
            Ok(RTCNegotiationRole::Offerer)
        }
        // offer-pending->SetLocal(offer)->local-description-set
        (
            RTCNegotiationState::OfferPending,
            Some(RTCNegotiationRole::Offerer),
            NegotiationOp::SetLocal(RTCSdpType::Offer),
        ) => Ok(RTCNegotiationRole::Offerer),
        // local-description-set->SetRemote(answer)->remote-description-set
        (
            RTCNegotiationState::LocalDescriptionSet,
            Some(RTCNegotiationRole::Offerer),
            NegotiationOp::SetRemote(RTCSdpType::Answer),
        ) => Ok(RTCNegotiationRole::Offerer),
        // idle->SetRemote(offer)->remote-description-set
        (RTCNegotiationState::Idle, None, NegotiationOp::SetRemote(RTCSdpType::Offer)) => {
            Ok(RTCNegotiationRole::Answerer)
        }
        // remote-description-set->CreateAnswer->answer-pending
        (
            RTCNegotiationState::RemoteDescriptionSet,
            Some(RTCNegotiationRole::Answerer),
            NegotiationOp::CreateAnswer,
        ) => Ok(RTCNegotiationRole::Answerer),
        // answer-pending->SetLocal(answer)->local-description-set
        (
            RTCNegotiationState::AnswerPending,
            Some(RTCNegotiationRole::Answerer),
            NegotiationOp::SetLocal(RTCSdpType::Answer),
        ) => Ok(RTCNegotiationRole::Answerer),
        _ => Err(Error::ErrNegotiationStateProposedTransitionInvalid(format!(
            "from {cur} applying {op}"
        ))),
    }
}
