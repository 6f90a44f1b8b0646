//! Musical chords: scale degrees of a major scale, stacked on a root note.

use std::{cell::OnceCell, fmt::Display, str::FromStr};

use crate::{
    chords,
    error::{Error, Result},
    note::{Note, DEFAULT_OCTAVE, MAX_OCTAVE, MAX_SEMITONE, MIN_OCTAVE, MIN_SEMITONE},
    notation::default_notation,
    scale::{spell_notes, Scale},
    wrap::{clamp, wrap},
};

// -------------------------------------------------------------------------------------------------

/// A single chord tone: a 1-based scale degree, optionally altered by a number of semitones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChordInterval {
    Degree(i32),
    Altered(i32, i32),
}

impl ChordInterval {
    /// 1-based scale degree.
    pub fn degree(&self) -> i32 {
        match *self {
            Self::Degree(degree) | Self::Altered(degree, _) => degree,
        }
    }

    /// Chromatic offset in semitones, 0 for unaltered degrees.
    pub fn offset(&self) -> i32 {
        match *self {
            Self::Degree(_) => 0,
            Self::Altered(_, offset) => offset,
        }
    }

    #[must_use]
    fn with_degree(self, degree: i32) -> Self {
        match self {
            Self::Degree(_) => Self::Degree(degree),
            Self::Altered(_, offset) => Self::Altered(degree, offset),
        }
    }
}

impl From<i32> for ChordInterval {
    fn from(degree: i32) -> Self {
        Self::Degree(degree)
    }
}

impl From<(i32, i32)> for ChordInterval {
    fn from((degree, offset): (i32, i32)) -> Self {
        Self::Altered(degree, offset)
    }
}

impl Display for ChordInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Degree(degree) => write!(f, "{}", degree),
            Self::Altered(degree, offset) => write!(f, "({},{})", degree, offset),
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// A chord built from a root note and a template of scale degrees.
///
/// Degrees resolve against a major base scale on the chord's root, so `[1, 3, 5]` is a
/// major triad and `[1, (3, -1), 5]` a minor one. Notes are listed in template order and
/// get regenerated lazily after the chord changed.
#[derive(Debug, Clone)]
pub struct Chord {
    root: i32,
    octave: i32,
    template: Vec<ChordInterval>,
    base_scale: Scale,
    notes: OnceCell<Vec<Note>>,
}

impl Default for Chord {
    fn default() -> Self {
        Self {
            root: 0,
            octave: DEFAULT_OCTAVE,
            template: chords::MAJOR.to_vec(),
            base_scale: Scale::default(),
            notes: OnceCell::new(),
        }
    }
}

impl Chord {
    /// Create a new chord from the given root, octave and template. Roots outside of
    /// `[0..=11]` carry into the octave.
    pub fn new<I, T>(root: i32, octave: i32, template: T) -> Result<Self>
    where
        I: Into<ChordInterval>,
        T: IntoIterator<Item = I>,
    {
        let mut chord = Self::default();
        chord.set_template(template)?;
        // octave first: the root may carry into it
        chord.set_octave(octave);
        chord.set_root(root);
        Ok(chord)
    }

    /// Create a new chord from a named quality, e.g. "maj7" or "m7b5".
    pub fn from_template_name(root: i32, octave: i32, name: &str) -> Result<Self> {
        let template = default_notation()
            .chord_templates()
            .get(name)
            .ok_or_else(|| Error::UnknownTemplate {
                name: name.to_string(),
            })?;
        Self::new(root, octave, template.iter().copied())
    }

    /// Root key in range `[0..=11]`.
    pub fn root(&self) -> i32 {
        self.root
    }

    /// Set a new root: wraps into `[0..=11]` and carries into the octave.
    pub fn set_root(&mut self, root: i32) {
        let wrapped = wrap(root, MIN_SEMITONE, MAX_SEMITONE);
        self.root = wrapped.value;
        self.octave = clamp(self.octave + wrapped.num_wraps, MIN_OCTAVE, MAX_OCTAVE);
        self.base_scale.set_octave(self.octave);
        self.base_scale.set_key(self.root);
        self.invalidate();
    }

    /// Octave of the root in range `[0..=9]`.
    pub fn octave(&self) -> i32 {
        self.octave
    }

    /// Set a new octave, saturated into `[0..=9]`.
    pub fn set_octave(&mut self, octave: i32) {
        self.octave = clamp(octave, MIN_OCTAVE, MAX_OCTAVE);
        self.base_scale.set_octave(self.octave);
        self.invalidate();
    }

    /// Chord tones as scale degrees.
    pub fn template(&self) -> &[ChordInterval] {
        &self.template
    }

    /// Replace the chord tones.
    pub fn set_template<I, T>(&mut self, template: T) -> Result<()>
    where
        I: Into<ChordInterval>,
        T: IntoIterator<Item = I>,
    {
        let template = template.into_iter().map(Into::into).collect::<Vec<_>>();
        if template.is_empty() {
            return Err(Error::EmptyTemplate);
        }
        self.template = template;
        self.invalidate();
        Ok(())
    }

    /// Scale the chord's degrees resolve against.
    pub fn base_scale(&self) -> &Scale {
        &self.base_scale
    }

    /// Replace the scale the chord's degrees resolve against.
    pub fn set_base_scale(&mut self, scale: Scale) {
        self.base_scale = scale;
        self.invalidate();
    }

    /// Resolved chord notes, in template order.
    pub fn notes(&self) -> &[Note] {
        self.notes.get_or_init(|| self.generate_notes())
    }

    /// Spelled base scale names of the chord's degrees, e.g. `["C4", "E4", "G4"]`.
    ///
    /// Names show the plain scale degree: chromatic alterations are not applied.
    pub fn note_names(&self) -> Vec<String> {
        let spellings = spell_notes(self.base_scale.notes(), true);
        let last = spellings.len() as i32 - 1;
        self.template
            .iter()
            .map(|interval| {
                let wrapped = wrap(interval.degree() - 1, 0, last);
                let spelling = &spellings[wrapped.value as usize];
                let octave = clamp(spelling.octave + wrapped.num_wraps, MIN_OCTAVE, MAX_OCTAVE);
                format!("{}{}", spelling.stem, octave)
            })
            .collect()
    }

    /// Raise the fifth by a semitone, adding an altered fifth when missing.
    pub fn augment(&mut self) -> &mut Self {
        self.alter_degree(5, 1)
    }

    /// Lower the fifth by a semitone, adding an altered fifth when missing.
    pub fn diminish(&mut self) -> &mut Self {
        self.alter_degree(5, -1)
    }

    /// Lower the seventh by a semitone, adding an altered seventh when missing.
    pub fn half_diminish(&mut self) -> &mut Self {
        self.alter_degree(7, -1)
    }

    /// Copy of this chord with a raised fifth.
    #[must_use]
    pub fn augmented(&self) -> Self {
        let mut chord = self.clone();
        chord.augment();
        chord
    }

    /// Copy of this chord with a lowered fifth.
    #[must_use]
    pub fn diminished(&self) -> Self {
        let mut chord = self.clone();
        chord.diminish();
        chord
    }

    /// Copy of this chord with a lowered seventh.
    #[must_use]
    pub fn half_diminished(&self) -> Self {
        let mut chord = self.clone();
        chord.half_diminish();
        chord
    }

    pub fn is_augmented(&self) -> bool {
        self.template.contains(&ChordInterval::Altered(5, 1))
    }

    pub fn is_diminished(&self) -> bool {
        self.template.contains(&ChordInterval::Altered(5, -1))
    }

    pub fn is_half_diminished(&self) -> bool {
        self.template.contains(&ChordInterval::Altered(7, -1))
    }

    /// Move the lowest chord tone one scale length up and to the end of the template.
    ///
    /// Applying this as often as the chord has tones yields the original pitch classes,
    /// one octave higher.
    pub fn invert(&mut self) -> Result<&mut Self> {
        if self.template.len() < 2 {
            return Err(Error::TooFewEntries {
                expected: 2,
                actual: self.template.len(),
            });
        }
        let scale_len = self.base_scale.template().len() as i32;
        let first = self.template.remove(0);
        self.template
            .push(first.with_degree(first.degree() + scale_len));
        self.invalidate();
        Ok(self)
    }

    /// Copy of this chord, inverted once.
    pub fn inverted(&self) -> Result<Self> {
        let mut chord = self.clone();
        chord.invert()?;
        Ok(chord)
    }

    fn alter_degree(&mut self, degree: i32, offset: i32) -> &mut Self {
        let altered = ChordInterval::Altered(degree, offset);
        match self.template.iter_mut().find(|i| i.degree() == degree) {
            Some(interval) => *interval = altered,
            None => self.template.push(altered),
        }
        self.invalidate();
        self
    }

    fn invalidate(&mut self) {
        self.notes.take();
    }

    fn generate_notes(&self) -> Vec<Note> {
        self.template
            .iter()
            .map(|interval| {
                let mut note = self.base_scale.degree(interval.degree());
                if interval.offset() != 0 {
                    note.set_semitone(note.semitone() + interval.offset());
                }
                note
            })
            .collect()
    }
}

impl PartialEq for Chord {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root && self.octave == other.octave && self.template == other.template
    }
}

impl Eq for Chord {}

impl TryFrom<&str> for Chord {
    type Error = Error;

    /// Try converting the given string to a chord, e.g. "(C)maj", "(Eb7)min7", "(G3)7b9".
    fn try_from(s: &str) -> Result<Self> {
        default_notation().parse_chord(s)
    }
}

impl FromStr for Chord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from(s)
    }
}

impl Display for Chord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let notes = self
            .notes()
            .iter()
            .map(|note| note.to_string())
            .collect::<Vec<_>>();
        write!(f, "{}", notes.join(" "))
    }
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    use pretty_assertions::assert_eq;
    use ChordInterval::{Altered as A, Degree as D};

    fn pitches(chord: &Chord) -> Vec<(i32, i32)> {
        chord
            .notes()
            .iter()
            .map(|n| (n.semitone(), n.octave()))
            .collect()
    }

    #[test]
    fn default_chord() {
        let chord = Chord::default();
        assert_eq!((chord.root(), chord.octave()), (0, 4));
        assert_eq!(chord.template(), &[D(1), D(3), D(5)]);
        assert_eq!(pitches(&chord), vec![(0, 4), (4, 4), (7, 4)]);
        assert_eq!(chord.note_names(), vec!["C4", "E4", "G4"]);
    }

    #[test]
    fn construction() -> Result<()> {
        let chord = Chord::new(9, 3, [D(1), A(3, -1), D(5)])?;
        assert_eq!(pitches(&chord), vec![(9, 3), (0, 4), (4, 4)]);
        let chord = Chord::new(2, 4, [1, 3, 5, 7])?;
        assert_eq!(chord.template(), &[D(1), D(3), D(5), D(7)]);
        let chord = Chord::new(13, 4, [(1, 0), (3, 0)])?;
        assert_eq!((chord.root(), chord.octave()), (1, 5));
        assert_eq!(
            Chord::new(0, 4, Vec::<ChordInterval>::new()),
            Err(Error::EmptyTemplate)
        );

        let chord = Chord::from_template_name(7, 3, "7")?;
        assert_eq!(
            pitches(&chord),
            vec![(7, 3), (11, 3), (2, 4), (5, 4)]
        );
        assert!(Chord::from_template_name(7, 3, "qwe").is_err());
        Ok(())
    }

    #[test]
    fn altered_degrees_carry() -> Result<()> {
        // B major scale: the raised seventh wraps into the next octave
        let chord = Chord::new(11, 4, [A(7, 1)])?;
        assert_eq!(pitches(&chord), vec![(11, 5)]);
        let chord = Chord::new(0, 4, [A(1, -1)])?;
        assert_eq!(pitches(&chord), vec![(11, 3)]);
        Ok(())
    }

    #[test]
    fn root_and_octave_changes() {
        let mut chord = Chord::default();
        assert_eq!(pitches(&chord)[0], (0, 4));
        chord.set_root(14);
        assert_eq!((chord.root(), chord.octave()), (2, 5));
        assert_eq!(chord.base_scale().key(), 2);
        assert_eq!(chord.base_scale().octave(), 5);
        assert_eq!(pitches(&chord), vec![(2, 5), (6, 5), (9, 5)]);
        chord.set_octave(12);
        assert_eq!(chord.octave(), 9);
        assert_eq!(chord.base_scale().octave(), 9);
        assert_eq!(pitches(&chord), vec![(2, 9), (6, 9), (9, 9)]);
        chord.set_root(-1);
        assert_eq!((chord.root(), chord.octave()), (11, 8));
    }

    #[test]
    fn base_scale_replacement() -> Result<()> {
        let mut chord = Chord::default();
        chord.set_base_scale(Scale::new(0, 4, crate::scales::MINOR)?);
        assert_eq!(pitches(&chord), vec![(0, 4), (3, 4), (7, 4)]);
        Ok(())
    }

    #[test]
    fn qualities() -> Result<()> {
        let mut chord = Chord::default();
        chord.diminish();
        assert_eq!(chord.template(), &[D(1), D(3), A(5, -1)]);
        assert!(chord.is_diminished());
        assert_eq!(pitches(&chord)[2], (6, 4));

        chord.augment();
        assert_eq!(chord.template(), &[D(1), D(3), A(5, 1)]);
        assert!(chord.is_augmented());
        assert!(!chord.is_diminished());

        chord.half_diminish();
        assert_eq!(chord.template(), &[D(1), D(3), A(5, 1), A(7, -1)]);
        assert!(chord.is_half_diminished());
        assert_eq!(pitches(&chord)[3], (10, 4));

        let chord = Chord::new(0, 4, [1, 3])?;
        let augmented = chord.augmented();
        assert_eq!(augmented.template(), &[D(1), D(3), A(5, 1)]);
        assert_eq!(chord.template(), &[D(1), D(3)]);
        assert!(chord.diminished().is_diminished());
        assert!(chord.half_diminished().is_half_diminished());
        assert!(!chord.is_augmented());
        Ok(())
    }

    #[test]
    fn inversion() -> Result<()> {
        let mut chord = Chord::default();
        chord.invert()?;
        assert_eq!(chord.template(), &[D(3), D(5), D(8)]);
        assert_eq!(pitches(&chord), vec![(4, 4), (7, 4), (0, 5)]);
        chord.invert()?;
        assert_eq!(chord.template(), &[D(5), D(8), D(10)]);
        chord.invert()?;
        assert_eq!(chord.template(), &[D(8), D(10), D(12)]);
        assert_eq!(pitches(&chord), vec![(0, 5), (4, 5), (7, 5)]);

        let minor = Chord::new(0, 4, [D(1), A(3, -1), D(5)])?;
        let inverted = minor.inverted()?;
        assert_eq!(inverted.template(), &[A(3, -1), D(5), D(8)]);
        assert_eq!(minor.template(), &[D(1), A(3, -1), D(5)]);

        let single = Chord::new(0, 4, [1])?;
        assert_eq!(
            single.inverted(),
            Err(Error::TooFewEntries {
                expected: 2,
                actual: 1
            })
        );
        Ok(())
    }

    #[test]
    fn full_inversion_cycle_keeps_pitch_classes() -> Result<()> {
        for name in ["maj", "m7", "9", "dim7", "sus4"] {
            let chord = Chord::from_template_name(5, 2, name)?;
            let mut inverted = chord.clone();
            for _ in 0..chord.template().len() {
                inverted.invert()?;
            }
            let mut original = chord.notes().iter().map(Note::semitone).collect::<Vec<_>>();
            let mut cycled = inverted.notes().iter().map(Note::semitone).collect::<Vec<_>>();
            original.sort_unstable();
            cycled.sort_unstable();
            assert_eq!(original, cycled, "{name}");
        }
        Ok(())
    }

    #[test]
    fn note_names() -> Result<()> {
        let chord = Chord::new(2, 4, [1, 3, 5, 9])?;
        assert_eq!(chord.note_names(), vec!["D4", "F#4", "A4", "E5"]);
        // alterations are not part of the names
        assert_eq!(Chord::default().diminished().note_names(), vec!["C4", "E4", "G4"]);
        let mut chord = Chord::default();
        chord.invert()?;
        assert_eq!(chord.note_names(), vec!["E4", "G4", "C5"]);
        Ok(())
    }

    #[test]
    fn equality_and_copy() -> Result<()> {
        let chord = Chord::new(4, 3, [D(1), A(3, -1), D(5), A(7, -1)])?;
        assert_eq!(chord.clone(), chord);
        assert_ne!(chord.augmented(), chord);
        assert_ne!(Chord::new(4, 2, [1, 3, 5])?, Chord::new(4, 3, [1, 3, 5])?);
        Ok(())
    }

    #[test]
    fn string_conversion() -> Result<()> {
        assert_eq!(Chord::try_from("(C)maj")?, Chord::default());
        assert_eq!(
            Chord::try_from("(Eb7)min7")?,
            Chord::new(3, 7, [D(1), A(3, -1), D(5), A(7, -1)])?
        );
        assert!(Chord::try_from("Cmaj").is_err());
        Ok(())
    }
}
