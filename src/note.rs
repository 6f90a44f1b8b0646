//! Pitch classes with an octave: the building block of `Scale` and `Chord`.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
    sync::atomic::{self, AtomicUsize},
};

use derive_more::{Deref, Display, From, Into};
use lazy_static::lazy_static;

use crate::{
    error::Error,
    notation::default_notation,
    wrap::{clamp, wrap},
};

// -------------------------------------------------------------------------------------------------

/// Valid semitone range.
pub const MIN_SEMITONE: i32 = 0;
pub const MAX_SEMITONE: i32 = 11;

/// Valid octave range.
pub const MIN_OCTAVE: i32 = 0;
pub const MAX_OCTAVE: i32 = 9;

/// Octave used when none is given.
pub const DEFAULT_OCTAVE: i32 = 4;

// semitones which may be spelled with a sharp
const SHARP_CAPABLE_SEMITONES: [i32; 6] = [1, 3, 4, 6, 8, 10];

const NATURAL_NAMES: [Option<&str>; 12] = [
    Some("C"),
    None,
    Some("D"),
    None,
    Some("E"),
    Some("F"),
    None,
    Some("G"),
    None,
    Some("A"),
    None,
    Some("B"),
];
const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];
const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];
const AMBIGUOUS_NAMES: [&str; 12] = [
    "C", "C#/Db", "D", "D#/Eb", "E", "F", "F#/Gb", "G", "G#/Ab", "A", "A#/Bb", "B",
];

// display labels, indexed by `semitone * 12 + previous_semitone`
lazy_static! {
    static ref NOTE_LABELS: Vec<&'static str> = (0..144)
        .map(|index| note_label(index / 12, index % 12))
        .collect();
}

fn note_label(semitone: i32, previous_semitone: i32) -> &'static str {
    let index = semitone as usize;
    if let Some(name) = NATURAL_NAMES[index] {
        name
    } else if wrap(semitone + 1, MIN_SEMITONE, MAX_SEMITONE).value == previous_semitone {
        FLAT_NAMES[index]
    } else if wrap(semitone - 1, MIN_SEMITONE, MAX_SEMITONE).value == previous_semitone {
        SHARP_NAMES[index]
    } else {
        AMBIGUOUS_NAMES[index]
    }
}

/// Sharp spelled name of the given semitone, without octave.
pub fn sharp_name(semitone: i32) -> &'static str {
    SHARP_NAMES[wrap(semitone, MIN_SEMITONE, MAX_SEMITONE).value as usize]
}

/// Flat spelled name of the given semitone, without octave.
pub fn flat_name(semitone: i32) -> &'static str {
    FLAT_NAMES[wrap(semitone, MIN_SEMITONE, MAX_SEMITONE).value as usize]
}

// -------------------------------------------------------------------------------------------------

/// Opaque unique identity of a [`Note`] instance.
#[derive(Copy, Clone, Debug, Display, Deref, From, Into, PartialEq, Eq, Hash)]
pub struct NoteId(usize);

/// Generate a new unique note id.
pub fn unique_note_id() -> NoteId {
    static ID: AtomicUsize = AtomicUsize::new(0);
    NoteId(ID.fetch_add(1, atomic::Ordering::Relaxed))
}

// -------------------------------------------------------------------------------------------------

/// A semitone in range `[0..=11]` in an octave in range `[0..=9]`.
///
/// Semitone changes wrap and carry into the octave, octave changes saturate. The note
/// further remembers the semitone it had before its last change, which decides if an
/// altered semitone gets displayed as sharp or flat.
///
/// Two notes are equal when semitone and octave match. Cloning a note creates a new
/// instance with a fresh id and no sharp/flat history.
#[derive(Debug)]
pub struct Note {
    semitone: i32,
    octave: i32,
    previous_semitone: i32,
    id: NoteId,
}

impl Default for Note {
    fn default() -> Self {
        Self::new(0, DEFAULT_OCTAVE)
    }
}

impl Note {
    /// Create a new note. Out of range semitones carry into the octave.
    pub fn new(semitone: i32, octave: i32) -> Self {
        let mut note = Self {
            semitone: MIN_SEMITONE,
            octave: MIN_OCTAVE,
            previous_semitone: MIN_SEMITONE,
            id: unique_note_id(),
        };
        // octave first: the semitone may carry into it
        note.set_octave(octave);
        note.set_semitone(semitone);
        note.previous_semitone = note.semitone;
        note
    }

    /// Create a note from a natural semitone and an accidental offset, so the
    /// accidental's direction shows up in the note's spelling.
    pub(crate) fn with_accidental(natural: i32, accidental: i32, octave: i32) -> Self {
        let mut note = Self::new(natural, octave);
        if accidental != 0 {
            note.set_semitone(note.semitone + accidental);
        }
        note
    }

    /// Unique id of this note instance.
    pub fn id(&self) -> NoteId {
        self.id
    }

    /// Semitone in range `[0..=11]`: 0 = C, 1 = C#, ...
    pub fn semitone(&self) -> i32 {
        self.semitone
    }

    /// Semitone this note had before its last semitone change.
    pub fn previous_semitone(&self) -> i32 {
        self.previous_semitone
    }

    /// Set a new semitone: wraps into `[0..=11]` and moves the octave by the number of wraps.
    pub fn set_semitone(&mut self, semitone: i32) {
        let wrapped = wrap(semitone, MIN_SEMITONE, MAX_SEMITONE);
        self.previous_semitone = self.semitone;
        self.semitone = wrapped.value;
        self.octave = clamp(self.octave + wrapped.num_wraps, MIN_OCTAVE, MAX_OCTAVE);
    }

    /// Octave in range `[0..=9]`.
    pub fn octave(&self) -> i32 {
        self.octave
    }

    /// Set a new octave, saturated into `[0..=9]`.
    pub fn set_octave(&mut self, octave: i32) {
        self.octave = clamp(octave, MIN_OCTAVE, MAX_OCTAVE);
    }

    /// Absolute pitch in semitones, where C0 is 0.
    pub fn pitch(&self) -> i32 {
        self.octave * 12 + self.semitone
    }

    /// Raise by a semitone in place.
    pub fn sharpen(&mut self) -> &mut Self {
        self.set_semitone(self.semitone + 1);
        self
    }

    /// Lower by a semitone in place.
    pub fn flatten(&mut self) -> &mut Self {
        self.set_semitone(self.semitone - 1);
        self
    }

    /// Copy of this note, raised by a semitone.
    #[must_use]
    pub fn sharp(&self) -> Self {
        let mut note = self.clone();
        note.sharpen();
        note
    }

    /// Copy of this note, lowered by a semitone.
    #[must_use]
    pub fn flat(&self) -> Self {
        let mut note = self.clone();
        note.flatten();
        note
    }

    /// Copy of this note, moved by the given number of semitones.
    #[must_use]
    pub fn transposed(&self, semitones: i32) -> Self {
        let mut note = self.clone();
        note.set_semitone(note.semitone + semitones);
        note
    }

    /// Best guess if this note is spelled with a sharp.
    ///
    /// A note which got reached by flattening the semitone above it is not sharp.
    /// Without such history, a semitone may report both sharp and flat.
    pub fn is_sharp(&self) -> bool {
        SHARP_CAPABLE_SEMITONES.contains(&self.semitone)
            && wrap(self.semitone + 1, MIN_SEMITONE, MAX_SEMITONE).value != self.previous_semitone
    }

    /// Best guess if this note is spelled with a flat. See [`Self::is_sharp`].
    pub fn is_flat(&self) -> bool {
        SHARP_CAPABLE_SEMITONES.contains(&self.semitone)
            && wrap(self.semitone - 1, MIN_SEMITONE, MAX_SEMITONE).value != self.previous_semitone
    }
}

impl Clone for Note {
    fn clone(&self) -> Self {
        Self::new(self.semitone, self.octave)
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.semitone == other.semitone && self.octave == other.octave
    }
}

impl Eq for Note {}

impl Hash for Note {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.semitone.hash(state);
        self.octave.hash(state);
    }
}

impl PartialOrd for Note {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Note {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pitch().cmp(&other.pitch())
    }
}

impl TryFrom<&str> for Note {
    type Error = Error;

    /// Try converting the given string to a note, e.g. "C#4", "Eb", "g_3".
    fn try_from(s: &str) -> Result<Self, Error> {
        default_notation().parse_note(s)
    }
}

impl FromStr for Note {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::try_from(s)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = NOTE_LABELS[(self.semitone * 12 + self.previous_semitone) as usize];
        write!(f, "{}{}", label, self.octave)
    }
}

// --------------------------------------------------------------------------------------------------
