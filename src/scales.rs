//! Named scale step templates.

use std::collections::HashMap;

// -------------------------------------------------------------------------------------------------

// Step templates: each entry is the semitone distance to the previous scale tone. A 0 step
// (re)starts at the root key.

pub const CHROMATIC: [i32; 12] = [0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
// diatonic modes
pub const IONIAN: [i32; 7] = [0, 2, 2, 1, 2, 2, 2];
pub const DORIAN: [i32; 7] = [0, 2, 1, 2, 2, 2, 1];
pub const PHRYGIAN: [i32; 7] = [0, 1, 2, 2, 2, 1, 2];
pub const LYDIAN: [i32; 7] = [0, 2, 2, 2, 1, 2, 2];
pub const MIXOLYDIAN: [i32; 7] = [0, 2, 2, 1, 2, 2, 1];
pub const AEOLIAN: [i32; 7] = [0, 2, 1, 2, 2, 1, 2];
pub const LOCRIAN: [i32; 7] = [0, 1, 2, 2, 1, 2, 2];
pub const MAJOR: [i32; 7] = IONIAN;
pub const MINOR: [i32; 7] = AEOLIAN;
// minor variants
const HARMONIC_MINOR: [i32; 7] = [0, 2, 1, 2, 2, 1, 3];
const MELODIC_MINOR: [i32; 7] = [0, 2, 1, 2, 2, 2, 2];
const HARMONIC_MAJOR: [i32; 7] = [0, 2, 2, 1, 2, 1, 3];
// pentatonic and blues
const PENTATONIC_MAJOR: [i32; 5] = [0, 2, 2, 3, 2];
const PENTATONIC_MINOR: [i32; 5] = [0, 3, 2, 2, 3];
const PENTATONIC_EGYPTIAN: [i32; 5] = [0, 2, 3, 2, 3];
const BLUES_MAJOR: [i32; 6] = [0, 2, 1, 1, 3, 2];
const BLUES_MINOR: [i32; 6] = [0, 3, 2, 1, 1, 3];
// symmetric
const WHOLE_TONE: [i32; 6] = [0, 2, 2, 2, 2, 2];
const AUGMENTED: [i32; 6] = [0, 3, 1, 3, 1, 3];
const DIMINISHED_HALF: [i32; 8] = [0, 1, 2, 1, 2, 1, 2, 1];
const DIMINISHED_WHOLE: [i32; 8] = [0, 2, 1, 2, 1, 2, 1, 2];
const TRITONE: [i32; 6] = [0, 1, 3, 2, 1, 3];
// others
const PROMETHEUS: [i32; 6] = [0, 2, 2, 2, 3, 1];
const PHRYGIAN_DOMINANT: [i32; 7] = [0, 1, 3, 1, 2, 1, 2];
const LYDIAN_AUGMENTED: [i32; 7] = [0, 2, 2, 2, 2, 1, 2];
const LYDIAN_DOMINANT: [i32; 7] = [0, 2, 2, 2, 1, 2, 1];
const LOCRIAN_MAJOR: [i32; 7] = [0, 2, 2, 1, 1, 2, 2];
const SUPER_LOCRIAN: [i32; 7] = [0, 1, 2, 1, 2, 2, 2];
const NEAPOLITAN_MAJOR: [i32; 7] = [0, 1, 2, 2, 2, 2, 2];
const NEAPOLITAN_MINOR: [i32; 7] = [0, 1, 2, 2, 2, 1, 3];
const ROMANIAN_MINOR: [i32; 7] = [0, 2, 1, 3, 1, 2, 1];
const DOUBLE_HARMONIC: [i32; 7] = [0, 1, 3, 1, 2, 1, 3];
const HUNGARIAN_MINOR: [i32; 7] = [0, 2, 1, 3, 1, 1, 3];
const ENIGMATIC: [i32; 7] = [0, 1, 3, 2, 2, 2, 1];
const PERSIAN: [i32; 7] = [0, 1, 3, 1, 1, 2, 3];
const SPANISH_EIGHT_TONE: [i32; 8] = [0, 1, 2, 1, 1, 1, 2, 2];
const BEBOP_DOMINANT: [i32; 8] = [0, 2, 2, 1, 2, 2, 1, 1];
const NINE_TONE: [i32; 9] = [0, 2, 1, 1, 2, 1, 1, 1, 2];
const HIRAJOSHI: [i32; 5] = [0, 2, 1, 4, 1];
const IN_SEN: [i32; 5] = [0, 1, 4, 2, 3];
const IWATO: [i32; 5] = [0, 1, 4, 1, 4];

// names and aliases of all built-in templates
const SCALE_TEMPLATES: [(&str, &[i32]); 71] = [
    ("chromatic", &CHROMATIC),
    ("all", &CHROMATIC),
    ("major", &MAJOR),
    ("ionian", &IONIAN),
    ("natural major", &MAJOR),
    ("minor", &MINOR),
    ("aeolian", &AEOLIAN),
    ("natural minor", &MINOR),
    ("dorian", &DORIAN),
    ("phrygian", &PHRYGIAN),
    ("lydian", &LYDIAN),
    ("mixolydian", &MIXOLYDIAN),
    ("locrian", &LOCRIAN),
    ("harmonic minor", &HARMONIC_MINOR),
    ("melodic minor", &MELODIC_MINOR),
    ("jazz minor", &MELODIC_MINOR),
    ("harmonic major", &HARMONIC_MAJOR),
    ("pentatonic major", &PENTATONIC_MAJOR),
    ("major pentatonic", &PENTATONIC_MAJOR),
    ("pentatonic", &PENTATONIC_MAJOR),
    ("pentatonic minor", &PENTATONIC_MINOR),
    ("minor pentatonic", &PENTATONIC_MINOR),
    ("pentatonic egyptian", &PENTATONIC_EGYPTIAN),
    ("egyptian", &PENTATONIC_EGYPTIAN),
    ("blues major", &BLUES_MAJOR),
    ("major blues", &BLUES_MAJOR),
    ("blues minor", &BLUES_MINOR),
    ("minor blues", &BLUES_MINOR),
    ("blues", &BLUES_MINOR),
    ("whole tone", &WHOLE_TONE),
    ("whole", &WHOLE_TONE),
    ("augmented", &AUGMENTED),
    ("diminished half", &DIMINISHED_HALF),
    ("half whole", &DIMINISHED_HALF),
    ("diminished whole", &DIMINISHED_WHOLE),
    ("diminished", &DIMINISHED_WHOLE),
    ("whole half", &DIMINISHED_WHOLE),
    ("octatonic", &DIMINISHED_WHOLE),
    ("tritone", &TRITONE),
    ("prometheus", &PROMETHEUS),
    ("phrygian dominant", &PHRYGIAN_DOMINANT),
    ("jewish", &PHRYGIAN_DOMINANT),
    ("freygish", &PHRYGIAN_DOMINANT),
    ("ahava rabbah", &PHRYGIAN_DOMINANT),
    ("spanish", &PHRYGIAN_DOMINANT),
    ("lydian augmented", &LYDIAN_AUGMENTED),
    ("lydian dominant", &LYDIAN_DOMINANT),
    ("overtone", &LYDIAN_DOMINANT),
    ("acoustic", &LYDIAN_DOMINANT),
    ("locrian major", &LOCRIAN_MAJOR),
    ("arabian", &LOCRIAN_MAJOR),
    ("super locrian", &SUPER_LOCRIAN),
    ("altered", &SUPER_LOCRIAN),
    ("neapolitan major", &NEAPOLITAN_MAJOR),
    ("neapolitan minor", &NEAPOLITAN_MINOR),
    ("romanian minor", &ROMANIAN_MINOR),
    ("double harmonic", &DOUBLE_HARMONIC),
    ("spanish gypsy", &DOUBLE_HARMONIC),
    ("byzantine", &DOUBLE_HARMONIC),
    ("hungarian minor", &HUNGARIAN_MINOR),
    ("hungarian gypsy", &HUNGARIAN_MINOR),
    ("enigmatic", &ENIGMATIC),
    ("persian", &PERSIAN),
    ("spanish eight tone", &SPANISH_EIGHT_TONE),
    ("eight tone", &SPANISH_EIGHT_TONE),
    ("bebop dominant", &BEBOP_DOMINANT),
    ("bebop", &BEBOP_DOMINANT),
    ("nine tone", &NINE_TONE),
    ("hirajoshi", &HIRAJOSHI),
    ("in sen", &IN_SEN),
    ("iwato", &IWATO),
];

// -------------------------------------------------------------------------------------------------

/// Immutable lookup table of named scale step templates.
///
/// Lookups ignore case, surplus white space and `-`/`_` separators, and resolve common
/// abbreviations such as "min", "maj" or "harm".
#[derive(Debug, Clone)]
pub struct ScaleTemplates {
    templates: HashMap<&'static str, &'static [i32]>,
}

impl Default for ScaleTemplates {
    fn default() -> Self {
        Self::new()
    }
}

impl ScaleTemplates {
    /// Create a table with all built-in scale templates.
    pub fn new() -> Self {
        Self {
            templates: HashMap::from(SCALE_TEMPLATES),
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

    /// Sorted list of all known template names, including aliases.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names = self.templates.keys().copied().collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    /// Look up the step template for the given scale name.
    pub fn get(&self, name: &str) -> Option<&'static [i32]> {
        self.templates
            .get(Self::normalize_name(name).as_str())
            .copied()
    }

    fn normalize_name(name: &str) -> String {
        name.split([' ', '\t', '-', '_'])
            .filter(|v| !v.is_empty())
            .map(|v| match v.to_ascii_lowercase().as_str() {
                "8" => "eight".to_string(),
                "9" => "nine".to_string(),
                "8tone" => "eight tone".to_string(),
                "9tone" => "nine tone".to_string(),
                "aug" => "augmented".to_string(),
                "dim" => "diminished".to_string(),
                "dom" => "dominant".to_string(),
                "harm" => "harmonic".to_string(),
                "mel" => "melodic".to_string(),
                "min" => "minor".to_string(),
                "maj" => "major".to_string(),
                "nat" => "natural".to_string(),
                "penta" => "pentatonic".to_string(),
                "hungary" => "hungarian".to_string(),
                "roman" => "romanian".to_string(),
                "span" => "spanish".to_string(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// --------------------------------------------------------------------------------------------------
