pub(crate) mod sdp_type;
pub(crate) mod session_description;

pub use sdp_type::RTCSdpType;
pub use session_description::RTCSessionDescription;
