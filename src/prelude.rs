//! The tonality prelude.
//!
//! The purpose of this module is to alleviate imports of common tonality types:
//!
//! ```
//! # #![allow(unused_imports)]
//! use tonality::prelude::*;
//! ```

pub use super::{
    // named templates
    chords::ChordTemplates,
    scales::ScaleTemplates,
    // notation and tuning
    notation::{default_notation, Notation},
    note::{unique_note_id, NoteId},
    tuning::Tuning,
    wrap::{clamp, wrap, WrappedNumber},
    // all public basic types
    Chord,
    ChordInterval,
    Error,
    Note,
    Result,
    Scale,
};
