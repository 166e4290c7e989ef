use chrono::NaiveDate;
use rand::seq::SliceRandom;
use serde::Deserialize;
use serde_json::from_str;

use include_dir::{include_dir, Dir};
use std::error::Error;

static LANG_DIR: Dir = include_dir!("src/lang");

/// First day of rotation; day 0 maps to the first solution entry.
const EPOCH: (i32, u32, u32) = (2022, 1, 13);

/// Embedded word data for one language: the accepted guesses plus the
/// curated subset the daily rotation draws from. Solutions are always
/// accepted guesses too.
#[allow(dead_code)]
#[derive(Deserialize, Clone, Debug)]
pub struct Language {
    pub name: String,
    pub size: u32,
    pub words: Vec<String>,
    pub solutions: Vec<String>,
}

/// The hidden word for one session, plus its rotation day.
///
/// The word itself doubles as the persistence identifier: saved state
/// from a different day names a different word and is discarded as stale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub word: String,
    pub day: i64,
}

impl Language {
    pub fn new(file_name: String) -> Self {
        read_language_from_file(format!("{}.json", file_name)).unwrap()
    }

    /// Exact membership test over the accepted-word set. No fuzzy
    /// matching, no normalization beyond what segmentation applies.
    pub fn contains(&self, candidate: &str) -> bool {
        self.words.iter().any(|w| w == candidate)
            || self.solutions.iter().any(|w| w == candidate)
    }

    /// The rotation word for `date`. Dates before the epoch still index
    /// deterministically via rem_euclid.
    pub fn solution_of_day(&self, date: NaiveDate) -> Solution {
        let epoch = NaiveDate::from_ymd_opt(EPOCH.0, EPOCH.1, EPOCH.2).unwrap();
        let day = (date - epoch).num_days();
        let idx = day.rem_euclid(self.solutions.len() as i64) as usize;
        Solution {
            word: self.solutions[idx].clone(),
            day,
        }
    }

    /// A practice solution drawn uniformly from the rotation set.
    pub fn random_solution(&self) -> Solution {
        let rng = &mut rand::thread_rng();
        let word = self
            .solutions
            .choose(rng)
            .expect("solution list is never empty")
            .clone();
        Solution { word, day: -1 }
    }

    /// A practice solution for an explicitly chosen word. The word does
    /// not need to be in the rotation set, only in the dictionary.
    pub fn solution_for_word(&self, word: &str) -> Option<Solution> {
        self.contains(word).then(|| Solution {
            word: word.to_string(),
            day: -1,
        })
    }
}

fn read_language_from_file(file_name: String) -> Result<Language, Box<dyn Error>> {
    let file = LANG_DIR
        .get_file(file_name)
        .expect("Language file not found");

    let file_as_str = file
        .contents_utf8()
        .expect("Unable to interpret file as a string");

    let lang = from_str(file_as_str).expect("Unable to deserialize language json");

    Ok(lang)
}
