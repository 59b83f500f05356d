#![warn(rust_2018_idioms)]
#![allow(dead_code)]

//! Offer/answer negotiation with short authentication strings.
//!
//! Two endpoints exchange session descriptions and ICE candidates over an
//! application-provided signaling channel while an external connection engine
//! does the transport work. Once the remote description is known, its
//! sha-256 certificate fingerprint is turned into a few words from a 256×2
//! word table so the two humans can read them to each other and detect a
//! man-in-the-middle.

pub mod candidate;
pub mod configuration;
pub mod endpoint;
pub mod engine;
pub mod error;
pub mod event;
pub mod fingerprint;
pub mod negotiation;
pub mod sas;
pub mod sdp;
pub mod signal;
pub mod word_table;
