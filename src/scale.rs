//! Musical scales: a root key and octave plus a step template which generates `Note`s.

use std::{cell::OnceCell, fmt::Display, str::FromStr};

use crate::{
    error::{Error, Result},
    note::{self, Note, DEFAULT_OCTAVE, MAX_OCTAVE, MAX_SEMITONE, MIN_OCTAVE, MIN_SEMITONE},
    notation::default_notation,
    scales,
    wrap::{clamp, wrap},
};

// -------------------------------------------------------------------------------------------------

/// Rotate `items` by `amount` positions: positive amounts move the first elements to the end,
/// negative amounts move the last elements to the front.
pub fn rotate<T>(items: &mut [T], amount: i32) {
    if !items.is_empty() {
        let shift = amount.rem_euclid(items.len() as i32) as usize;
        items.rotate_left(shift);
    }
}

// -------------------------------------------------------------------------------------------------

const LETTERS: [char; 7] = ['C', 'D', 'E', 'F', 'G', 'A', 'B'];
const LETTER_SEMITONES: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

// natural letter index of the given semitone, if any
fn natural_letter(semitone: i32) -> Option<usize> {
    LETTER_SEMITONES.iter().position(|s| *s == semitone)
}

// letter index used to spell the given semitone with the preferred accidental
fn preferred_letter(semitone: i32, prefer_sharp: bool) -> usize {
    natural_letter(semitone).unwrap_or_else(|| {
        let neighbour = if prefer_sharp {
            semitone - 1
        } else {
            semitone + 1
        };
        natural_letter(wrap(neighbour, MIN_SEMITONE, MAX_SEMITONE).value)
            .expect("neighbours of altered semitones are natural")
    })
}

/// A spelled note: letter with accidentals, plus the octave the letter is written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Spelling {
    pub stem: String,
    pub octave: i32,
}

impl Display for Spelling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.octave)
    }
}

// spell a note relative to the given letter, or None when it needs more than two accidentals
fn spell_with_letter(note: &Note, letter: usize) -> Option<Spelling> {
    let difference = wrap(note.semitone() - LETTER_SEMITONES[letter], -6, 5);
    let accidental = match difference.value {
        -2 => "bb",
        -1 => "b",
        0 => "",
        1 => "#",
        2 => "##",
        _ => return None,
    };
    Some(Spelling {
        stem: format!("{}{}", LETTERS[letter], accidental),
        octave: clamp(note.octave() + difference.num_wraps, MIN_OCTAVE, MAX_OCTAVE),
    })
}

fn spell(note: &Note, prefer_sharp: bool) -> (usize, Spelling) {
    let letter = preferred_letter(note.semitone(), prefer_sharp);
    let spelling = spell_with_letter(note, letter).unwrap_or_else(|| Spelling {
        stem: if prefer_sharp {
            note::sharp_name(note.semitone()).to_string()
        } else {
            note::flat_name(note.semitone()).to_string()
        },
        octave: note.octave(),
    });
    (letter, spelling)
}

/// Spell the given notes with letter names which do not repeat between neighbours.
///
/// Seven note sequences use consecutive letters, starting with the first note's letter.
/// Other sequences spell each note with the preferred accidental, unless this would
/// repeat the previous note's letter.
pub(crate) fn spell_notes(notes: &[Note], prefer_sharp: bool) -> Vec<Spelling> {
    let Some(first) = notes.first() else {
        return vec![];
    };
    let (first_letter, _) = spell(first, prefer_sharp);
    if notes.len() == LETTERS.len() {
        notes
            .iter()
            .enumerate()
            .map(|(index, note)| {
                let letter = (first_letter + index) % LETTERS.len();
                spell_with_letter(note, letter).unwrap_or_else(|| spell(note, prefer_sharp).1)
            })
            .collect()
    } else {
        let mut previous_letter = None;
        notes
            .iter()
            .map(|note| {
                let (mut letter, mut spelling) = spell(note, prefer_sharp);
                if previous_letter == Some(letter) {
                    (letter, spelling) = spell(note, !prefer_sharp);
                }
                previous_letter = Some(letter);
                spelling
            })
            .collect()
    }
}

// -------------------------------------------------------------------------------------------------

/// A musical scale or mode.
///
/// Notes are generated from the root `key` and `octave` by walking the step `template`,
/// and are cached until the key, octave or template changes.
///
/// Scales can be rotated with [`Self::shift`], which changes which template step is used
/// first. [`Self::unshift`] restores the template which was set before rotating.
#[derive(Debug, Clone)]
pub struct Scale {
    key: i32,
    octave: i32,
    template: Vec<i32>,
    shifted_interval: i32,
    original_template: Option<Vec<i32>>,
    notes: OnceCell<Vec<Note>>,
}

impl Default for Scale {
    fn default() -> Self {
        Self {
            key: 0,
            octave: DEFAULT_OCTAVE,
            template: scales::MAJOR.to_vec(),
            shifted_interval: 0,
            original_template: None,
            notes: OnceCell::new(),
        }
    }
}

impl Scale {
    /// Create a new scale with the given root key, octave and step template.
    /// Keys outside of `[0..=11]` carry into the octave.
    pub fn new<T: Into<Vec<i32>>>(key: i32, octave: i32, template: T) -> Result<Self> {
        let mut scale = Self::default();
        scale.set_template(template)?;
        // octave first: the key may carry into it
        scale.set_octave(octave);
        scale.set_key(key);
        Ok(scale)
    }

    /// Create a new scale from a named template, e.g. "dorian" or "harmonic minor".
    pub fn from_template_name(key: i32, octave: i32, name: &str) -> Result<Self> {
        let template = default_notation()
            .scale_templates()
            .get(name)
            .ok_or_else(|| Error::UnknownTemplate {
                name: name.to_string(),
            })?;
        Self::new(key, octave, template)
    }

    /// Root key in range `[0..=11]`.
    pub fn key(&self) -> i32 {
        self.key
    }

    /// Set a new root key: wraps into `[0..=11]` and carries into the octave.
    pub fn set_key(&mut self, key: i32) {
        let wrapped = wrap(key, MIN_SEMITONE, MAX_SEMITONE);
        self.key = wrapped.value;
        self.octave = clamp(self.octave + wrapped.num_wraps, MIN_OCTAVE, MAX_OCTAVE);
        self.invalidate();
    }

    /// Octave of the root key in range `[0..=9]`.
    pub fn octave(&self) -> i32 {
        self.octave
    }

    /// Set a new octave, saturated into `[0..=9]`.
    pub fn set_octave(&mut self, octave: i32) {
        self.octave = clamp(octave, MIN_OCTAVE, MAX_OCTAVE);
        self.invalidate();
    }

    /// Current, possibly rotated, step template.
    pub fn template(&self) -> &[i32] {
        &self.template
    }

    /// Replace the step template. This also drops any rotation.
    pub fn set_template<T: Into<Vec<i32>>>(&mut self, template: T) -> Result<()> {
        let template = template.into();
        if template.is_empty() {
            return Err(Error::EmptyTemplate);
        }
        self.template = template;
        self.shifted_interval = 0;
        self.original_template = None;
        self.invalidate();
        Ok(())
    }

    /// Accumulated rotation, see [`Self::shift`].
    pub fn shifted_interval(&self) -> i32 {
        self.shifted_interval
    }

    /// Template as it was before the scale got rotated, if rotated.
    pub fn original_template(&self) -> Option<&[i32]> {
        self.original_template.as_deref()
    }

    /// Generated notes, in root first order.
    pub fn notes(&self) -> &[Note] {
        self.notes.get_or_init(|| self.generate_notes())
    }

    /// Note at the given 1-based degree. Degrees beyond the scale's size wrap into the
    /// next octaves, degrees below 1 into the previous ones.
    pub fn degree(&self, degree: i32) -> Note {
        let notes = self.notes();
        let wrapped = wrap(degree - 1, 0, notes.len() as i32 - 1);
        let mut note = notes[wrapped.value as usize].clone();
        note.set_octave(note.octave() + wrapped.num_wraps);
        note
    }

    /// Rotate the template by the given number of degrees in place: positive values start
    /// the scale from a higher degree, negative ones from a lower degree.
    pub fn shift(&mut self, degrees: i32) -> Result<&mut Self> {
        if self.template.len() < 2 {
            return Err(Error::TooFewEntries {
                expected: 2,
                actual: self.template.len(),
            });
        }
        if self.shifted_interval == 0 {
            self.original_template = Some(self.template.clone());
        }
        rotate(&mut self.template, degrees);
        self.shifted_interval += degrees;
        self.invalidate();
        Ok(self)
    }

    /// Copy of this scale, shifted by the given number of degrees.
    pub fn shifted(&self, degrees: i32) -> Result<Self> {
        let mut scale = self.clone();
        scale.shift(degrees)?;
        Ok(scale)
    }

    /// Undo all rotations. Does nothing when the scale is not rotated.
    pub fn unshift(&mut self) -> &mut Self {
        if self.shifted_interval != 0 {
            if let Some(template) = self.original_template.take() {
                self.template = template;
            }
            self.shifted_interval = 0;
            self.invalidate();
        }
        self.original_template = None;
        self
    }

    /// Copy of this scale without rotation.
    #[must_use]
    pub fn unshifted(&self) -> Self {
        let mut scale = self.clone();
        scale.unshift();
        scale
    }

    /// Major scale starting on this scale's third degree.
    pub fn relative_major(&self) -> Self {
        let third = self.degree(3);
        self.derived(third.semitone(), scales::MAJOR.to_vec())
    }

    /// Minor scale starting on this scale's sixth degree.
    pub fn relative_minor(&self) -> Self {
        let sixth = self.degree(6);
        self.derived(sixth.semitone(), scales::MINOR.to_vec())
    }

    /// Spelled note names, one per generated note, e.g. `["C4", "D4", "E4", ...]`.
    ///
    /// Seven note scales use every letter once. `prefer_sharp_key` decides how an altered
    /// root key gets spelled.
    pub fn note_names(&self, prefer_sharp_key: bool) -> Vec<String> {
        spell_notes(self.notes(), prefer_sharp_key)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    fn derived(&self, key: i32, template: Vec<i32>) -> Self {
        let mut scale = Self {
            template,
            ..Self::default()
        };
        scale.set_octave(self.octave);
        scale.set_key(key);
        scale
    }

    fn invalidate(&mut self) {
        self.notes.take();
    }

    fn generate_notes(&self) -> Vec<Note> {
        let mut template = self.template.clone();
        rotate(&mut template, -self.shifted_interval);

        let mut accumulator = self.key;
        let mut notes = template
            .iter()
            .map(|step| {
                if *step == 0 {
                    accumulator = self.key;
                } else {
                    accumulator += step;
                }
                Note::new(accumulator, self.octave)
            })
            .collect::<Vec<_>>();

        let len = notes.len();
        if self.shifted_interval > 0 {
            notes.rotate_right((self.shifted_interval as usize + 1) % len);
        } else if self.shifted_interval < 0 {
            notes.rotate_left(self.shifted_interval.unsigned_abs() as usize % len);
        }
        notes
    }
}

macro_rules! generate_mode_funcs {
    ($($name:ident => $template:expr),* $(,)?) => {
        paste::paste! {
            /// Modal variants: copies of the scale with the same key and octave.
            impl Scale {
                $(
                    #[doc = "Copy of this scale using the " $name " mode template."]
                    pub fn $name(&self) -> Self {
                        self.derived(self.key, $template.to_vec())
                    }

                    #[doc = "True when this scale uses the unrotated " $name " mode template."]
                    pub fn [<is_ $name>](&self) -> bool {
                        self.shifted_interval == 0 && self.template == $template
                    }
                )*
            }
        }
    };
}

generate_mode_funcs!(
    ionian => scales::IONIAN,
    dorian => scales::DORIAN,
    phrygian => scales::PHRYGIAN,
    lydian => scales::LYDIAN,
    mixolydian => scales::MIXOLYDIAN,
    aeolian => scales::AEOLIAN,
    locrian => scales::LOCRIAN,
);

impl PartialEq for Scale {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.octave == other.octave
            && self.template == other.template
            && self.shifted_interval == other.shifted_interval
    }
}

impl Eq for Scale {}

impl TryFrom<&str> for Scale {
    type Error = Error;

    /// Try converting the given string to a scale, e.g. "C4", "Eb(dorian)", "B7(jewish)".
    fn try_from(s: &str) -> Result<Self> {
        default_notation().parse_scale(s)
    }
}

impl FromStr for Scale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from(s)
    }
}

impl Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.note_names(true).join(" "))
    }
}

// --------------------------------------------------------------------------------------------------
