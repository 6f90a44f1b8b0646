//! Music theory value types: notes, scales and chords with pitch class arithmetic,
//! template based generation of scale and chord tones and string notation parsing.

pub mod wrap;
pub use wrap::{clamp, wrap, WrappedNumber};

pub mod error;
pub use error::{Error, Result};

pub mod note;
pub use note::{Note, NoteId};

pub mod scales;
pub use scales::ScaleTemplates;
pub mod scale;
pub use scale::Scale;

pub mod chords;
pub use chords::ChordTemplates;
pub mod chord;
pub use chord::{Chord, ChordInterval};

pub mod notation;
pub use notation::{default_notation, Notation};

pub mod tuning;
pub use tuning::Tuning;

pub mod prelude;

// -------------------------------------------------------------------------------------------------
