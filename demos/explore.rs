use simplelog::*;

use tonality::prelude::*;

fn main() -> anyhow::Result<()> {
    // init logging
    TermLogger::init(
        log::STATIC_MAX_LEVEL,
        ConfigBuilder::default().build(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap_or_else(|err| {
        log::error!("init_logger error: {:?}", err);
    });

    // scales and their modes
    let scale = Scale::try_from("D3(dorian)")?;
    println!("D3(dorian): {}", scale);
    println!("  relative major: {}", scale.relative_major());
    println!("  relative minor: {}", scale.relative_minor());
    let c_major = Scale::default();
    for (name, mode) in [
        ("ionian", c_major.ionian()),
        ("dorian", c_major.dorian()),
        ("phrygian", c_major.phrygian()),
        ("lydian", c_major.lydian()),
        ("mixolydian", c_major.mixolydian()),
        ("aeolian", c_major.aeolian()),
        ("locrian", c_major.locrian()),
    ] {
        println!("  C {:<10} {}", name, mode.note_names(true).join(" "));
    }

    // sharp and flat spelling of the same pitches
    let f_sharp = Scale::from_template_name(6, 4, "major")?;
    println!("F# major: {}", f_sharp.note_names(true).join(" "));
    println!("Gb major: {}", f_sharp.note_names(false).join(" "));

    // chords and inversions
    let mut chord = Chord::try_from("(Eb4)maj7")?;
    for _ in 0..=chord.template().len() {
        let template = chord
            .template()
            .iter()
            .map(ChordInterval::to_string)
            .collect::<Vec<_>>();
        let notes = chord.notes().iter().map(Note::to_string).collect::<Vec<_>>();
        println!("{:<24} {}", template.join(" "), notes.join(" "));
        chord.invert()?;
    }
    let chord = Chord::try_from("(G3)7b9")?;
    println!("(G3)7b9: {}", chord);
    println!("  half diminished: {}", chord.half_diminished());

    // frequencies
    let tuning = Tuning::default();
    for note in Scale::try_from("A4(minor pentatonic)")?.notes() {
        println!("{:>4}: {:8.3} Hz", note.to_string(), tuning.frequency(note));
    }

    // notes in an unusual order parse with a warning
    let note = Note::try_from("4C#")?;
    println!("4C# -> {}", note);

    Ok(())
}
