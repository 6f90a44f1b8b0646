//! Named chord quality templates.

use std::collections::HashMap;

use crate::chord::ChordInterval::{self, Altered as A, Degree as D};

// -------------------------------------------------------------------------------------------------

// Chord templates: scale degrees of a major scale, optionally altered by semitones.

// triads
pub const MAJOR: [ChordInterval; 3] = [D(1), D(3), D(5)];
const MINOR: [ChordInterval; 3] = [D(1), A(3, -1), D(5)];
const DIMINISHED: [ChordInterval; 3] = [D(1), A(3, -1), A(5, -1)];
const AUGMENTED: [ChordInterval; 3] = [D(1), D(3), A(5, 1)];
const SUS2: [ChordInterval; 3] = [D(1), D(2), D(5)];
const SUS4: [ChordInterval; 3] = [D(1), D(4), D(5)];
const FIVE: [ChordInterval; 2] = [D(1), D(5)];
// sixths
const SIX: [ChordInterval; 4] = [D(1), D(3), D(5), D(6)];
const MINOR6: [ChordInterval; 4] = [D(1), A(3, -1), D(5), D(6)];
const SIX_NINE: [ChordInterval; 5] = [D(1), D(3), D(5), D(6), D(9)];
// sevenths
const SEVEN: [ChordInterval; 4] = [D(1), D(3), D(5), A(7, -1)];
const MAJOR7: [ChordInterval; 4] = [D(1), D(3), D(5), D(7)];
const MINOR7: [ChordInterval; 4] = [D(1), A(3, -1), D(5), A(7, -1)];
const MINOR_MAJOR7: [ChordInterval; 4] = [D(1), A(3, -1), D(5), D(7)];
const HALF_DIMINISHED7: [ChordInterval; 4] = [D(1), A(3, -1), A(5, -1), A(7, -1)];
const DIMINISHED7: [ChordInterval; 4] = [D(1), A(3, -1), A(5, -1), A(7, -2)];
const SEVEN_FLAT5: [ChordInterval; 4] = [D(1), D(3), A(5, -1), A(7, -1)];
const SEVEN_SHARP5: [ChordInterval; 4] = [D(1), D(3), A(5, 1), A(7, -1)];
const SEVEN_SUS2: [ChordInterval; 4] = [D(1), D(2), D(5), A(7, -1)];
const SEVEN_SUS4: [ChordInterval; 4] = [D(1), D(4), D(5), A(7, -1)];
// extended
const ADD9: [ChordInterval; 4] = [D(1), D(3), D(5), D(9)];
const NINE: [ChordInterval; 5] = [D(1), D(3), D(5), A(7, -1), D(9)];
const SEVEN_FLAT9: [ChordInterval; 5] = [D(1), D(3), D(5), A(7, -1), A(9, -1)];
const MAJOR9: [ChordInterval; 5] = [D(1), D(3), D(5), D(7), D(9)];
const MINOR9: [ChordInterval; 5] = [D(1), A(3, -1), D(5), A(7, -1), D(9)];
const ELEVEN: [ChordInterval; 6] = [D(1), D(3), D(5), A(7, -1), D(9), D(11)];
const MINOR11: [ChordInterval; 6] = [D(1), A(3, -1), D(5), A(7, -1), D(9), D(11)];
const THIRTEEN: [ChordInterval; 7] = [D(1), D(3), D(5), A(7, -1), D(9), D(11), D(13)];
const MAJOR13: [ChordInterval; 7] = [D(1), D(3), D(5), D(7), D(9), D(11), D(13)];

// names and aliases of all built-in chords: names are case sensitive ("M" vs. "m")
const CHORD_TEMPLATES: [(&str, &[ChordInterval]); 70] = [
    ("major", &MAJOR),
    ("maj", &MAJOR),
    ("M", &MAJOR),
    ("^", &MAJOR),
    ("minor", &MINOR),
    ("min", &MINOR),
    ("m", &MINOR),
    ("-", &MINOR),
    ("diminished", &DIMINISHED),
    ("dim", &DIMINISHED),
    ("o", &DIMINISHED),
    ("augmented", &AUGMENTED),
    ("aug", &AUGMENTED),
    ("+", &AUGMENTED),
    ("sus2", &SUS2),
    ("sus4", &SUS4),
    ("sus", &SUS4),
    ("five", &FIVE),
    ("5", &FIVE),
    ("power", &FIVE),
    ("six", &SIX),
    ("6", &SIX),
    ("minor6", &MINOR6),
    ("min6", &MINOR6),
    ("m6", &MINOR6),
    ("sixNine", &SIX_NINE),
    ("69", &SIX_NINE),
    ("seven", &SEVEN),
    ("7", &SEVEN),
    ("dom7", &SEVEN),
    ("major7", &MAJOR7),
    ("maj7", &MAJOR7),
    ("M7", &MAJOR7),
    ("^7", &MAJOR7),
    ("minor7", &MINOR7),
    ("min7", &MINOR7),
    ("m7", &MINOR7),
    ("-7", &MINOR7),
    ("minorMajor7", &MINOR_MAJOR7),
    ("minMaj7", &MINOR_MAJOR7),
    ("mM7", &MINOR_MAJOR7),
    ("halfDiminished", &HALF_DIMINISHED7),
    ("m7b5", &HALF_DIMINISHED7),
    ("min7b5", &HALF_DIMINISHED7),
    ("ø", &HALF_DIMINISHED7),
    ("diminished7", &DIMINISHED7),
    ("dim7", &DIMINISHED7),
    ("o7", &DIMINISHED7),
    ("7b5", &SEVEN_FLAT5),
    ("7#5", &SEVEN_SHARP5),
    ("aug7", &SEVEN_SHARP5),
    ("+7", &SEVEN_SHARP5),
    ("7sus2", &SEVEN_SUS2),
    ("7sus4", &SEVEN_SUS4),
    ("add9", &ADD9),
    ("nine", &NINE),
    ("9", &NINE),
    ("dom9", &NINE),
    ("7b9", &SEVEN_FLAT9),
    ("major9", &MAJOR9),
    ("maj9", &MAJOR9),
    ("minor9", &MINOR9),
    ("min9", &MINOR9),
    ("m9", &MINOR9),
    ("eleven", &ELEVEN),
    ("11", &ELEVEN),
    ("min11", &MINOR11),
    ("thirteen", &THIRTEEN),
    ("13", &THIRTEEN),
    ("maj13", &MAJOR13),
];

// -------------------------------------------------------------------------------------------------

/// Immutable lookup table of named chord quality templates.
#[derive(Debug, Clone)]
pub struct ChordTemplates {
    templates: HashMap<&'static str, &'static [ChordInterval]>,
}

impl Default for ChordTemplates {
    fn default() -> Self {
        Self::new()
    }
}

impl ChordTemplates {
    /// Create a table with all built-in chord templates.
    pub fn new() -> Self {
        Self {
            templates: HashMap::from(CHORD_TEMPLATES),
        }
    }

    /// Number of known names, including aliases.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// True when the table contains no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Sorted list of all known chord names, including aliases.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names = self.templates.keys().copied().collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    /// Look up the template of the given chord quality. Names are case sensitive.
    pub fn get(&self, name: &str) -> Option<&'static [ChordInterval]> {
        self.templates.get(name).copied()
    }
}

// --------------------------------------------------------------------------------------------------
