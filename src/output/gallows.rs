//! ASCII gallows drawing
//!
//! Pure lookup from a wrong-guess count to a fixed multi-line drawing. The
//! figure gains a body part per wrong guess until the full hangman at six.

/// Drawing stages indexed by wrong-guess count
const STAGES: [&str; 7] = [
    // 0: empty gallows
    " +---++
 |   ||
     ||
     ||
     ||
     ||
=======",
    // 1: head
    " +---++
 |   ||
 O   ||
     ||
     ||
     ||
=======",
    // 2: head and torso
    " +---++
 |   ||
 O   ||
 |   ||
     ||
     ||
=======",
    // 3: one arm
    " +---++
 |   ||
 O   ||
/|   ||
     ||
     ||
=======",
    // 4: both arms
    " +---++
 |   ||
 O   ||
/|\\  ||
     ||
     ||
=======",
    // 5: one leg
    " +---++
 |   ||
 O   ||
/|\\  ||
/    ||
     ||
=======",
    // 6: complete figure
    " +---++
 |   ||
 O   ||
/|\\  ||
/ \\  ||
     ||
=======",
];

/// Get the gallows drawing for a wrong-guess count
///
/// Counts past six clamp to the final stage.
#[must_use]
pub fn gallows(wrong_guesses: u32) -> &'static str {
    let stage = (wrong_guesses as usize).min(STAGES.len() - 1);
    STAGES[stage]
}
