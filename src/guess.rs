use crate::segment::Segmenter;
use std::collections::HashMap;

/// Per-slot feedback for a submitted word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Right character cell in the right position.
    Correct,
    /// Right character cell in the wrong position.
    Present,
    /// Character cell does not appear (or its copies are used up).
    Absent,
}

impl Verdict {
    /// Symbol used in the shareable result grid.
    pub fn symbol(self) -> char {
        match self {
            Verdict::Correct => '🟩',
            Verdict::Present => '🟨',
            Verdict::Absent => '⬜',
        }
    }
}

/// Score `guess` against `solution`, slot by slot.
///
/// Two passes so duplicated characters are never over-counted: the first
/// pass claims exact matches and removes them from the availability pool,
/// the second marks the leftovers Present only while the pool still holds
/// an unclaimed copy. A character repeated in the guess is therefore
/// flagged at most as many times as it occurs in the solution.
///
/// Both sides must have the same slot count; submissions of the wrong
/// length are rejected before they get here.
pub fn evaluate(guess: &[String], solution: &[String]) -> Vec<Verdict> {
    debug_assert_eq!(guess.len(), solution.len());

    let mut verdicts = vec![Verdict::Absent; guess.len()];
    let mut available: HashMap<&str, usize> = HashMap::new();
    for slot in solution {
        *available.entry(slot.as_str()).or_insert(0) += 1;
    }

    for (i, slot) in guess.iter().enumerate() {
        if solution.get(i).map(String::as_str) == Some(slot.as_str()) {
            verdicts[i] = Verdict::Correct;
            if let Some(count) = available.get_mut(slot.as_str()) {
                *count = count.saturating_sub(1);
            }
        }
    }

    for (i, slot) in guess.iter().enumerate() {
        if verdicts[i] == Verdict::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(slot.as_str()) {
            if *count > 0 {
                verdicts[i] = Verdict::Present;
                *count -= 1;
            }
        }
    }

    verdicts
}

/// Whether `guess` is the solution, i.e. every verdict is Correct.
pub fn is_solution(guess: &[String], solution: &[String]) -> bool {
    guess.len() == solution.len()
        && evaluate(guess, solution)
            .iter()
            .all(|v| *v == Verdict::Correct)
}

/// Best verdict seen so far for every codepoint the player has used, for
/// keyboard key coloring. A slot verdict applies to each codepoint of the
/// slot; Correct beats Present beats Absent across submissions.
pub fn keyboard_hints(
    submitted: &[String],
    solution: &str,
    segmenter: &dyn Segmenter,
) -> HashMap<char, Verdict> {
    let solution_slots = segmenter.segment(solution);
    let mut hints: HashMap<char, Verdict> = HashMap::new();

    for word in submitted {
        let slots = segmenter.segment(word);
        if slots.len() != solution_slots.len() {
            continue;
        }
        for (slot, verdict) in slots.iter().zip(evaluate(&slots, &solution_slots)) {
            for c in slot.chars() {
                let entry = hints.entry(c).or_insert(verdict);
                if rank(verdict) > rank(*entry) {
                    *entry = verdict;
                }
            }
        }
    }

    hints
}

fn rank(v: Verdict) -> u8 {
    match v {
        Verdict::Correct => 2,
        Verdict::Present => 1,
        Verdict::Absent => 0,
    }
}
