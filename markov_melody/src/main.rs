// Markov Melody Generator: CLI entry point.
//
// Asks for a melody length and tempo, samples a melody from the Markov chain,
// prints it, and writes it to `ai_melody_NNNN.mid` in the current directory.
// Bad answers fall back to defaults; the program always exits 0.
//
// Usage:
//   cargo run -p markov_melody -- [--seed N] [--corpus FILE.json] [--mode MODE]
//
// Modes: ionian (default), dorian, phrygian, lydian, mixolydian, aeolian,
// all rooted at middle C.

use markov_melody::input::{BoundedSetting, MELODY_LENGTH, TEMPO_BPM};
use markov_melody::markov::TransitionTable;
use markov_melody::midi::write_midi;
use markov_melody::mode::{Mode, Scale};
use markov_melody::{Melody, output_file_name};
use melody_prng::MelodyRng;
use std::io::{self, Write};
use std::path::Path;

const RULE: &str = "==================================================";

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let seed: Option<u64> = parse_flag(&args, "--seed");
    let corpus_path: Option<String> = parse_flag(&args, "--corpus");
    let mode_name: Option<String> = parse_flag(&args, "--mode");

    println!("{RULE}");
    println!("AI MUSIC GENERATOR - AMG");
    println!("Using Markov Chains for Melody Generation");
    println!("{RULE}");
    println!();

    let (mut rng, seed) = match seed {
        Some(s) => (MelodyRng::new(s), s),
        None => MelodyRng::from_clock(),
    };
    println!("Seed: {} (repeat with --seed {})", seed, seed);

    let scale = match mode_name {
        Some(name) => Scale::from_mode(parse_mode(&name), 60),
        None => Scale::c_major(),
    };

    println!("[1/3] Building Markov chain...");
    if let Some(path) = &corpus_path {
        println!("  Loading training patterns from {}...", path);
    }
    let (table, notice) = TransitionTable::from_corpus_path(corpus_path.as_deref().map(Path::new));
    if let Some(notice) = notice {
        println!("  {}", notice);
    }
    println!("  {} source degrees.", table.len());
    println!();

    let length = ask(&MELODY_LENGTH);
    let tempo = ask(&TEMPO_BPM);

    println!("\n[2/3] Generating melody...");
    let melody = Melody::generate(&table, &scale, length as usize, &mut rng);
    print_melody(&melody, &scale);

    let file_name = output_file_name(&mut rng);
    println!("[3/3] Writing MIDI...");
    match write_midi(&melody.pitches, tempo, Path::new(&file_name)) {
        Ok(()) => {
            println!("✓ MIDI file saved as: {}", file_name);
            println!("Done");
            println!("\nTip: Try importing it into GarageBand, FL Studio, or MuseScore");
        }
        Err(e) => eprintln!("Error writing MIDI to {}: {}", file_name, e),
    }
}

/// Prompt for a bounded setting and print a notice if the default is used.
fn ask(setting: &BoundedSetting) -> u32 {
    let raw = read_line(&setting.prompt());
    let resolved = setting.resolve(&raw);
    if let Some(notice) = setting.notice(&resolved) {
        println!("{}", notice);
    }
    resolved.value()
}

fn print_melody(melody: &Melody, scale: &Scale) {
    println!("\nGenerated Melody:");
    println!("{RULE}");
    println!("Notes:  {}", melody.note_line(scale));
    println!("Pattern: {}", melody.pattern_line());
    println!("{RULE}");
}

fn parse_mode(name: &str) -> Mode {
    Mode::from_name(name).unwrap_or_else(|| {
        println!("Unknown mode '{}'. Using Ionian.", name);
        Mode::Ionian
    })
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
}

/// Read one line from stdin. EOF or a read error yields an empty string.
fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf
}
