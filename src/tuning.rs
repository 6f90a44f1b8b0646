//! Equal tempered frequencies and MIDI keys for notes.

use crate::note::Note;

// -------------------------------------------------------------------------------------------------

/// Twelve tone equal temperament tuning, relative to a reference A4.
///
/// MIDI keys follow the common convention where C4 is key 60, so the note range C0..B9
/// covers keys 12..131.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Frequency of the reference key in Hz.
    pub a4_frequency: f64,
    /// MIDI key of the reference frequency.
    pub a4_key: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            a4_frequency: 440.0,
            a4_key: 69,
        }
    }
}

impl Tuning {
    pub fn new(a4_frequency: f64) -> Self {
        Self {
            a4_frequency,
            ..Self::default()
        }
    }

    /// MIDI key of the given note.
    pub fn midi_key(&self, note: &Note) -> i32 {
        (note.octave() + 1) * 12 + note.semitone()
    }

    /// Frequency of the given note in Hz.
    pub fn frequency(&self, note: &Note) -> f64 {
        self.key_frequency(self.midi_key(note))
    }

    /// Frequency of the given MIDI key in Hz.
    pub fn key_frequency(&self, key: i32) -> f64 {
        self.a4_frequency * 2.0_f64.powf((key - self.a4_key) as f64 / 12.0)
    }

    /// Note of the given MIDI key. Keys outside of the note range saturate at the
    /// lowest or highest octave, keeping their pitch class.
    pub fn note_from_midi_key(&self, key: i32) -> Note {
        Note::new(key - 12, 0)
    }
}

// --------------------------------------------------------------------------------------------------
