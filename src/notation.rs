//! String notation for notes, scales and chords.

use lazy_static::lazy_static;
use pest::{iterators::Pair, Parser};
use pest_derive::Parser;

use crate::{
    chord::{Chord, ChordInterval},
    chords::{self, ChordTemplates},
    error::{Error, Result},
    note::{Note, DEFAULT_OCTAVE},
    scale::Scale,
    scales::{self, ScaleTemplates},
};

// -------------------------------------------------------------------------------------------------

#[derive(Parser)]
#[grammar = "notation.pest"]
struct NotationParser {}

lazy_static! {
    static ref DEFAULT_NOTATION: Notation = Notation::new();
}

/// Shared notation instance with the built-in scale and chord templates, as used by the
/// `TryFrom<&str>` implementations of [`Note`], [`Scale`] and [`Chord`].
pub fn default_notation() -> &'static Notation {
    &DEFAULT_NOTATION
}

// -------------------------------------------------------------------------------------------------

/// Parses note, scale and chord strings, resolving names with its scale and chord templates.
///
/// Supported notations:
/// - notes: `C4` (plain), `C#1` or `Cs1` (sharps), `Db1` (flats), `E_7` or `G 5` (separators).
///   Accidentals accumulate, a missing octave defaults to 4.
/// - scales: `C4` (major), `Eb(dorian)`, `B7(jewish)`.
/// - chords: `(C)` (major), `(Eb7)min7`, `(G3)7b9`, `(D)maj7#11`.
#[derive(Debug, Clone, Default)]
pub struct Notation {
    scales: ScaleTemplates,
    chords: ChordTemplates,
}

impl Notation {
    /// Create a notation with all built-in scale and chord templates.
    pub fn new() -> Self {
        Self::with_templates(ScaleTemplates::new(), ChordTemplates::new())
    }

    /// Create a notation which resolves names with the given templates.
    pub fn with_templates(scales: ScaleTemplates, chords: ChordTemplates) -> Self {
        Self { scales, chords }
    }

    pub fn scale_templates(&self) -> &ScaleTemplates {
        &self.scales
    }

    pub fn chord_templates(&self) -> &ChordTemplates {
        &self.chords
    }

    /// Parse a note string such as "C#4".
    ///
    /// Strings with their parts in an unusual order, such as "4C#", are accepted too, but
    /// take a slower path and get logged as warning.
    pub fn parse_note(&self, s: &str) -> Result<Note> {
        let input = s.trim();
        match NotationParser::parse(Rule::note_string, input) {
            Ok(mut pairs) => {
                let pair = pairs.next().ok_or_else(|| invalid_note(s, "empty note"))?;
                Self::note_from_pair(pair).map_err(|reason| invalid_note(s, &reason))
            }
            Err(_) => {
                let note =
                    Self::note_from_fields(input).map_err(|reason| invalid_note(s, &reason))?;
                log::warn!(
                    "Note string '{}' is not in canonical order: parsed it as '{}'",
                    s,
                    note
                );
                Ok(note)
            }
        }
    }

    /// Parse a scale string such as "Eb4(dorian)". Scales without a name are major scales.
    pub fn parse_scale(&self, s: &str) -> Result<Scale> {
        let input = s.trim();
        let mut pairs = NotationParser::parse(Rule::scale_string, input)
            .map_err(|err| invalid_scale(s, &err.variant.message()))?;
        let scale = pairs.next().ok_or_else(|| invalid_scale(s, "empty scale"))?;

        let mut note = None;
        let mut template: &[i32] = &scales::MAJOR;
        for pair in scale.into_inner() {
            match pair.as_rule() {
                Rule::note_text => note = Some(self.parse_note(pair.as_str())?),
                Rule::template_name => {
                    template = self.scales.get(pair.as_str()).ok_or_else(|| {
                        Error::UnknownTemplate {
                            name: pair.as_str().to_string(),
                        }
                    })?
                }
                _ => return Err(invalid_scale(s, "unexpected scale content")),
            }
        }
        let note = note.ok_or_else(|| invalid_scale(s, "missing root note"))?;
        Scale::new(note.semitone(), note.octave(), template)
    }

    /// Parse a chord string such as "(Eb7)min7" or "(C)maj7#11".
    ///
    /// The chord quality is the longest known chord name after the root note. Additions
    /// following it add or replace single degrees, optionally raised by `#` or lowered by `b`.
    pub fn parse_chord(&self, s: &str) -> Result<Chord> {
        let input = s.trim();
        let mut pairs = NotationParser::parse(Rule::chord_string, input)
            .map_err(|err| invalid_chord(s, &err.variant.message()))?;
        let chord = pairs.next().ok_or_else(|| invalid_chord(s, "empty chord"))?;

        let mut note = None;
        let mut suffix = "";
        for pair in chord.into_inner() {
            match pair.as_rule() {
                Rule::note_text => note = Some(self.parse_note(pair.as_str())?),
                Rule::chord_suffix => suffix = pair.as_str(),
                _ => return Err(invalid_chord(s, "unexpected chord content")),
            }
        }
        let note = note.ok_or_else(|| invalid_chord(s, "missing root note"))?;
        let (quality, additions) = self.resolve_chord_suffix(suffix).ok_or_else(|| {
            invalid_chord(s, &format!("unknown chord quality '{}'", suffix))
        })?;

        let mut template = quality.to_vec();
        for addition in additions {
            match template
                .iter_mut()
                .find(|interval| interval.degree() == addition.degree())
            {
                Some(interval) => *interval = addition,
                None => template.push(addition),
            }
        }
        Chord::new(note.semitone(), note.octave(), template)
    }

    // split a chord suffix into the longest known quality and its additions
    fn resolve_chord_suffix(
        &self,
        suffix: &str,
    ) -> Option<(&'static [ChordInterval], Vec<ChordInterval>)> {
        let major: &'static [ChordInterval] = &chords::MAJOR;
        let mut boundaries = suffix.char_indices().map(|(i, _)| i).collect::<Vec<_>>();
        boundaries.push(suffix.len());
        boundaries.into_iter().rev().find_map(|end| {
            let (quality, rest) = suffix.split_at(end);
            let template = if quality.is_empty() {
                Some(major)
            } else {
                self.chords.get(quality)
            }?;
            let additions = Self::parse_additions(rest).ok()?;
            Some((template, additions))
        })
    }

    fn parse_additions(s: &str) -> std::result::Result<Vec<ChordInterval>, String> {
        let mut pairs = NotationParser::parse(Rule::additions_string, s)
            .map_err(|err| err.variant.message().to_string())?;
        let additions = pairs.next().ok_or("missing additions")?;
        let mut intervals = vec![];
        for addition in additions.into_inner() {
            let mut offset = 0;
            let mut degree = 0;
            for pair in addition.into_inner() {
                match pair.as_rule() {
                    Rule::sharp => offset += 1,
                    Rule::flat => offset -= 1,
                    Rule::degree => {
                        degree = pair
                            .as_str()
                            .parse::<i32>()
                            .map_err(|err| format!("invalid degree: {}", err))?
                    }
                    _ => return Err(format!("unexpected addition '{}'", pair.as_str())),
                }
            }
            intervals.push(if offset == 0 {
                ChordInterval::Degree(degree)
            } else {
                ChordInterval::Altered(degree, offset)
            });
        }
        Ok(intervals)
    }

    // errors here should be unreachable unless there is a bug in the pest grammar
    fn note_from_pair(pair: Pair<Rule>) -> std::result::Result<Note, String> {
        let mut natural = None;
        let mut accidental = 0;
        let mut octave = DEFAULT_OCTAVE;
        for pair in pair.into_inner() {
            match pair.as_rule() {
                Rule::letter => natural = pair.as_str().chars().next().and_then(natural_semitone),
                Rule::sharp => accidental += 1,
                Rule::flat => accidental -= 1,
                Rule::octave => {
                    octave = pair
                        .as_str()
                        .parse::<i32>()
                        .map_err(|err| format!("invalid octave: {}", err))?
                }
                _ => return Err(format!("unexpected note content '{}'", pair.as_str())),
            }
        }
        let natural = natural.ok_or("missing note letter")?;
        Ok(Note::with_accidental(natural, accidental, octave))
    }

    // slow path: pick letter, accidentals and octave from anywhere in the string
    fn note_from_fields(s: &str) -> std::result::Result<Note, String> {
        let chars = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_'))
            .collect::<Vec<_>>();
        if chars.is_empty() {
            return Err("string is empty".to_string());
        }
        // an upper case letter wins, as lower case 'b's may be flats
        let letter_index = chars
            .iter()
            .position(|c| matches!(c, 'A'..='G'))
            .or_else(|| chars.iter().position(|c| matches!(c, 'a'..='g')))
            .ok_or("note letter is missing")?;
        let natural = natural_semitone(chars[letter_index]).ok_or("note letter is missing")?;

        let mut accidental = 0;
        let mut digits = String::new();
        let mut digit_runs = 0;
        let mut previous_was_digit = false;
        for (index, c) in chars.iter().copied().enumerate() {
            let is_digit = c.is_ascii_digit();
            if index != letter_index {
                match c {
                    '#' | 's' | '♯' => accidental += 1,
                    'b' | '♭' => accidental -= 1,
                    '0'..='9' => {
                        if !previous_was_digit {
                            digit_runs += 1;
                        }
                        digits.push(c);
                    }
                    _ => return Err(format!("note character '{}' is invalid", c)),
                }
            }
            previous_was_digit = is_digit && index != letter_index;
        }
        if digit_runs > 1 {
            return Err("found more than one octave".to_string());
        }
        let octave = if digits.is_empty() {
            DEFAULT_OCTAVE
        } else {
            digits
                .parse::<i32>()
                .map_err(|err| format!("invalid octave: {}", err))?
        };
        Ok(Note::with_accidental(natural, accidental, octave))
    }
}

fn natural_semitone(letter: char) -> Option<i32> {
    match letter.to_ascii_uppercase() {
        'C' => Some(0),
        'D' => Some(2),
        'E' => Some(4),
        'F' => Some(5),
        'G' => Some(7),
        'A' => Some(9),
        'B' => Some(11),
        _ => None,
    }
}

fn invalid_note(input: &str, reason: &str) -> Error {
    Error::InvalidNote {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

fn invalid_scale(input: &str, reason: &str) -> Error {
    Error::InvalidScale {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

fn invalid_chord(input: &str, reason: &str) -> Error {
    Error::InvalidChord {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    use pretty_assertions::assert_eq;
    use ChordInterval::{Altered as A, Degree as D};

    fn pitch(note: &Note) -> (i32, i32) {
        (note.semitone(), note.octave())
    }

    #[test]
    fn notes() -> Result<()> {
        let notation = Notation::new();
        assert_eq!(pitch(&notation.parse_note("C4")?), (0, 4));
        assert_eq!(pitch(&notation.parse_note("C")?), (0, 4));
        assert_eq!(pitch(&notation.parse_note("c#3")?), (1, 3));
        assert_eq!(pitch(&notation.parse_note("Cs3")?), (1, 3));
        assert_eq!(pitch(&notation.parse_note("Db1")?), (1, 1));
        assert_eq!(pitch(&notation.parse_note("bb2")?), (10, 2));
        assert_eq!(pitch(&notation.parse_note("Cb4")?), (11, 3));
        assert_eq!(pitch(&notation.parse_note("B#4")?), (0, 5));
        assert_eq!(pitch(&notation.parse_note("E_7")?), (4, 7));
        assert_eq!(pitch(&notation.parse_note("g 9")?), (7, 9));
        assert_eq!(pitch(&notation.parse_note(" A0 ")?), (9, 0));
        assert_eq!(pitch(&notation.parse_note("C##2")?), (2, 2));
        assert_eq!(pitch(&notation.parse_note("Ebb")?), (2, 4));
        // octaves saturate
        assert_eq!(pitch(&notation.parse_note("D12")?), (2, 9));
        // spelling follows the accidental
        assert_eq!(notation.parse_note("D#2")?.to_string(), "D#2");
        assert_eq!(notation.parse_note("Eb2")?.to_string(), "Eb2");
        Ok(())
    }

    #[test]
    fn notes_in_unusual_order() -> Result<()> {
        let notation = Notation::new();
        assert_eq!(pitch(&notation.parse_note("4C#")?), (1, 4));
        assert_eq!(pitch(&notation.parse_note("#C")?), (1, 4));
        assert_eq!(pitch(&notation.parse_note("b3B")?), (10, 3));
        assert_eq!(pitch(&notation.parse_note("3bb")?), (10, 3));
        Ok(())
    }

    #[test]
    fn invalid_notes() {
        let notation = Notation::new();
        for s in ["", "x4", "H", "c.2", "cc2", "4C5", "C4-"] {
            assert!(
                matches!(notation.parse_note(s), Err(Error::InvalidNote { .. })),
                "'{s}' should not parse"
            );
        }
    }

    #[test]
    fn scales() -> Result<()> {
        let notation = Notation::new();
        let scale = notation.parse_scale("C4")?;
        assert_eq!((scale.key(), scale.octave()), (0, 4));
        assert_eq!(scale.template(), &scales::MAJOR);

        let scale = notation.parse_scale("B7(jewish)")?;
        assert_eq!((scale.key(), scale.octave()), (11, 7));
        assert_eq!(scale.template(), &[0, 1, 3, 1, 2, 1, 2]);

        let scale = notation.parse_scale("Eb(Natural Minor)")?;
        assert_eq!((scale.key(), scale.octave()), (3, 4));
        assert_eq!(scale.template(), &scales::MINOR);

        assert!(matches!(
            notation.parse_scale("C4(wurst)"),
            Err(Error::UnknownTemplate { .. })
        ));
        assert!(matches!(
            notation.parse_scale("C4(major"),
            Err(Error::InvalidScale { .. })
        ));
        assert!(matches!(
            notation.parse_scale("X(major)"),
            Err(Error::InvalidNote { .. })
        ));
        Ok(())
    }

    #[test]
    fn chords() -> Result<()> {
        let notation = Notation::new();
        let chord = notation.parse_chord("(C)")?;
        assert_eq!(chord.template(), &[D(1), D(3), D(5)]);
        let chord = notation.parse_chord("(Eb7)min7")?;
        assert_eq!((chord.root(), chord.octave()), (3, 7));
        assert_eq!(chord.template(), &[D(1), A(3, -1), D(5), A(7, -1)]);
        let chord = notation.parse_chord("(G3)7b9")?;
        assert_eq!(
            chord.template(),
            &[D(1), D(3), D(5), A(7, -1), A(9, -1)]
        );
        let chord = notation.parse_chord("(D)maj7#11")?;
        assert_eq!(
            chord.template(),
            &[D(1), D(3), D(5), D(7), A(11, 1)]
        );
        let chord = notation.parse_chord("(A)m9")?;
        assert_eq!(
            chord.template(),
            &[D(1), A(3, -1), D(5), A(7, -1), D(9)]
        );
        // additions replace existing degrees
        let chord = notation.parse_chord("(F)7#5")?;
        assert_eq!(chord.template(), &[D(1), D(3), A(5, 1), A(7, -1)]);
        let chord = notation.parse_chord("(F)maj#5")?;
        assert_eq!(chord.template(), &[D(1), D(3), A(5, 1)]);
        let chord = notation.parse_chord("(C)sus4")?;
        assert_eq!(chord.template(), &[D(1), D(4), D(5)]);
        Ok(())
    }

    #[test]
    fn invalid_chords() {
        let notation = Notation::new();
        assert!(matches!(
            notation.parse_chord("Cmaj"),
            Err(Error::InvalidChord { .. })
        ));
        assert!(matches!(
            notation.parse_chord("(C)qwe"),
            Err(Error::InvalidChord { .. })
        ));
        assert!(matches!(
            notation.parse_chord("(C)maj0"),
            Err(Error::InvalidChord { .. })
        ));
        assert!(matches!(
            notation.parse_chord("(X)maj"),
            Err(Error::InvalidNote { .. })
        ));
    }

    #[test]
    fn custom_templates() {
        let notation = Notation::with_templates(ScaleTemplates::new(), ChordTemplates::new());
        assert_eq!(notation.scale_templates().len(), ScaleTemplates::new().len());
        assert!(notation.chord_templates().get("maj7").is_some());
        assert!(default_notation().scale_templates().get("dorian").is_some());
    }
}
