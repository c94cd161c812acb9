//! crates/cognistack_core/src/mbti.rs
//!
//! MBTI type codes, the eight Jungian cognitive functions, and the rules that
//! derive a type's function stack.

use std::fmt;
use std::str::FromStr;

//=========================================================================================
// Preferences
//=========================================================================================

/// One letter of a four-letter type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Preference {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl Preference {
    pub const ALL: [Preference; 8] = [
        Preference::E,
        Preference::I,
        Preference::S,
        Preference::N,
        Preference::T,
        Preference::F,
        Preference::J,
        Preference::P,
    ];

    /// The four dichotomies, in code order. The second letter of each pair wins ties.
    pub const PAIRS: [(Preference, Preference); 4] = [
        (Preference::E, Preference::I),
        (Preference::S, Preference::N),
        (Preference::T, Preference::F),
        (Preference::J, Preference::P),
    ];

    pub fn letter(self) -> char {
        match self {
            Preference::E => 'E',
            Preference::I => 'I',
            Preference::S => 'S',
            Preference::N => 'N',
            Preference::T => 'T',
            Preference::F => 'F',
            Preference::J => 'J',
            Preference::P => 'P',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.letter() == letter.to_ascii_uppercase())
    }

    pub fn opposite(self) -> Self {
        match self {
            Preference::E => Preference::I,
            Preference::I => Preference::E,
            Preference::S => Preference::N,
            Preference::N => Preference::S,
            Preference::T => Preference::F,
            Preference::F => Preference::T,
            Preference::J => Preference::P,
            Preference::P => Preference::J,
        }
    }

    fn pair_index(self) -> usize {
        match self {
            Preference::E | Preference::I => 0,
            Preference::S | Preference::N => 1,
            Preference::T | Preference::F => 2,
            Preference::J | Preference::P => 3,
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

//=========================================================================================
// Type Codes
//=========================================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a valid MBTI type code")]
pub struct ParseMbtiError(pub String);

/// A four-letter type code such as `ENFP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MbtiType([Preference; 4]);

impl MbtiType {
    /// The type behind the hardcoded assessment result and the demo profile.
    pub const ENFP: MbtiType = MbtiType([
        Preference::E,
        Preference::N,
        Preference::F,
        Preference::P,
    ]);

    /// Builds a type from one letter per dichotomy, in code order.
    pub fn new(letters: [Preference; 4]) -> Option<Self> {
        letters
            .iter()
            .enumerate()
            .all(|(i, p)| p.pair_index() == i)
            .then_some(Self(letters))
    }

    /// All sixteen types, in the order the product lists them.
    pub fn all() -> Vec<MbtiType> {
        TYPE_CATALOG
            .iter()
            .filter_map(|(code, _, _)| code.parse().ok())
            .collect()
    }

    pub fn nickname(self) -> &'static str {
        self.catalog_entry().1
    }

    pub fn description(self) -> &'static str {
        self.catalog_entry().2
    }

    fn catalog_entry(self) -> &'static (&'static str, &'static str, &'static str) {
        let code = self.to_string();
        TYPE_CATALOG
            .iter()
            .find(|(c, _, _)| *c == code)
            .unwrap_or(&TYPE_CATALOG[0])
    }

    /// Dominant, auxiliary, tertiary and inferior functions.
    ///
    /// The dominant function is the judging function for extraverted judgers and
    /// introverted perceivers, otherwise the perceiving function, and takes the
    /// type's own attitude. The auxiliary is the other function in the opposite
    /// attitude, the tertiary mirrors the auxiliary in the dominant attitude, and the
    /// inferior mirrors the dominant in the opposite attitude.
    pub fn cognitive_stack(self) -> [CognitiveFunction; 4] {
        let [attitude, perceiving, judging, lifestyle] = self.0;
        let extraverted = attitude == Preference::E;
        let intuitive = perceiving == Preference::N;
        let thinking = judging == Preference::T;
        let perceive = |n: bool, e: bool| CognitiveFunction::perceiving(n, e);
        let judge = |t: bool, e: bool| CognitiveFunction::judging(t, e);

        if (lifestyle == Preference::J) == extraverted {
            [
                judge(thinking, extraverted),
                perceive(intuitive, !extraverted),
                perceive(!intuitive, extraverted),
                judge(!thinking, !extraverted),
            ]
        } else {
            [
                perceive(intuitive, extraverted),
                judge(thinking, !extraverted),
                judge(!thinking, extraverted),
                perceive(!intuitive, !extraverted),
            ]
        }
    }
}

impl FromStr for MbtiType {
    type Err = ParseMbtiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMbtiError(s.to_string());
        let letters: Vec<Preference> = s
            .trim()
            .chars()
            .map(Preference::from_letter)
            .collect::<Option<_>>()
            .ok_or_else(err)?;
        let letters: [Preference; 4] = letters.try_into().map_err(|_| err())?;
        MbtiType::new(letters).ok_or_else(err)
    }
}

impl fmt::Display for MbtiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in self.0 {
            write!(f, "{p}")?;
        }
        Ok(())
    }
}

const TYPE_CATALOG: [(&str, &str, &str); 16] = [
    ("INTJ", "The Architect", "Imaginative and strategic thinkers"),
    ("INTP", "The Thinker", "Innovative inventors with an unquenchable thirst for knowledge"),
    ("ENTJ", "The Commander", "Bold, imaginative and strong-willed leaders"),
    ("ENTP", "The Debater", "Smart and curious thinkers who cannot resist an intellectual challenge"),
    ("INFJ", "The Advocate", "Creative and insightful, inspired by their own values"),
    ("INFP", "The Mediator", "Poetic, kind and altruistic people"),
    ("ENFJ", "The Protagonist", "Charismatic and inspiring leaders"),
    ("ENFP", "The Campaigner", "Enthusiastic, creative and sociable free spirits"),
    ("ISTJ", "The Logistician", "Practical and fact-minded, reliable"),
    ("ISFJ", "The Protector", "Very dedicated and warm protectors"),
    ("ESTJ", "The Executive", "Excellent administrators, unsurpassed at managing things"),
    ("ESFJ", "The Consul", "Extraordinarily caring, social and popular"),
    ("ISTP", "The Virtuoso", "Bold and practical experimenters"),
    ("ISFP", "The Adventurer", "Flexible and charming artists"),
    ("ESTP", "The Entrepreneur", "Smart, energetic and very perceptive people"),
    ("ESFP", "The Entertainer", "Spontaneous, energetic and enthusiastic people"),
];

//=========================================================================================
// Cognitive Functions
//=========================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CognitiveFunction {
    Ne,
    Ni,
    Se,
    Si,
    Te,
    Ti,
    Fe,
    Fi,
}

impl CognitiveFunction {
    /// Intuition when `intuitive`, otherwise sensing.
    fn perceiving(intuitive: bool, extraverted: bool) -> Self {
        use CognitiveFunction::*;
        match (intuitive, extraverted) {
            (true, true) => Ne,
            (true, false) => Ni,
            (false, true) => Se,
            (false, false) => Si,
        }
    }

    /// Thinking when `thinking`, otherwise feeling.
    fn judging(thinking: bool, extraverted: bool) -> Self {
        use CognitiveFunction::*;
        match (thinking, extraverted) {
            (true, true) => Te,
            (true, false) => Ti,
            (false, true) => Fe,
            (false, false) => Fi,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            CognitiveFunction::Ne => "Ne",
            CognitiveFunction::Ni => "Ni",
            CognitiveFunction::Se => "Se",
            CognitiveFunction::Si => "Si",
            CognitiveFunction::Te => "Te",
            CognitiveFunction::Ti => "Ti",
            CognitiveFunction::Fe => "Fe",
            CognitiveFunction::Fi => "Fi",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CognitiveFunction::Ne => "Extraverted Intuition",
            CognitiveFunction::Ni => "Introverted Intuition",
            CognitiveFunction::Se => "Extraverted Sensing",
            CognitiveFunction::Si => "Introverted Sensing",
            CognitiveFunction::Te => "Extraverted Thinking",
            CognitiveFunction::Ti => "Introverted Thinking",
            CognitiveFunction::Fe => "Extraverted Feeling",
            CognitiveFunction::Fi => "Introverted Feeling",
        }
    }

    /// The S/N/T/F letter this function operates on.
    pub fn process(self) -> Preference {
        match self {
            CognitiveFunction::Ne | CognitiveFunction::Ni => Preference::N,
            CognitiveFunction::Se | CognitiveFunction::Si => Preference::S,
            CognitiveFunction::Te | CognitiveFunction::Ti => Preference::T,
            CognitiveFunction::Fe | CognitiveFunction::Fi => Preference::F,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        use CognitiveFunction::*;
        [Ne, Ni, Se, Si, Te, Ti, Fe, Fi]
            .into_iter()
            .find(|f| f.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for CognitiveFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CognitiveFunction::*;

    fn ty(code: &str) -> MbtiType {
        code.parse().expect("valid code")
    }

    #[test]
    fn all_sixteen_codes_parse_and_format() {
        let all = MbtiType::all();
        assert_eq!(all.len(), 16);
        for t in all {
            assert_eq!(ty(&t.to_string()), t);
        }
    }

    #[test]
    fn parsing_is_case_insensitive_and_strict_on_shape() {
        assert_eq!(ty("enfp"), ty("ENFP"));
        assert!("ENF".parse::<MbtiType>().is_err());
        assert!("NEFP".parse::<MbtiType>().is_err());
        assert!("ENFPX".parse::<MbtiType>().is_err());
    }

    #[test]
    fn derives_standard_stacks() {
        assert_eq!(ty("ENFP").cognitive_stack(), [Ne, Fi, Te, Si]);
        assert_eq!(ty("INTJ").cognitive_stack(), [Ni, Te, Fi, Se]);
        assert_eq!(ty("ESTJ").cognitive_stack(), [Te, Si, Ne, Fi]);
        assert_eq!(ty("ISFP").cognitive_stack(), [Fi, Se, Ni, Te]);
    }

    #[test]
    fn every_stack_uses_the_type_letters_and_four_distinct_functions() {
        for t in MbtiType::all() {
            let code = t.to_string();
            let stack = t.cognitive_stack();
            let processes: Vec<char> = stack.iter().map(|f| f.process().letter()).collect();
            assert!(processes[..2].contains(&code.chars().nth(1).expect("S/N")), "{code}");
            assert!(processes[..2].contains(&code.chars().nth(2).expect("T/F")), "{code}");

            let mut codes: Vec<&str> = stack.iter().map(|f| f.code()).collect();
            codes.sort_unstable();
            codes.dedup();
            assert_eq!(codes.len(), 4, "{code}");
        }
    }

    #[test]
    fn nicknames_come_from_the_catalog() {
        assert_eq!(ty("ENFP").nickname(), "The Campaigner");
        assert_eq!(ty("ISTJ").nickname(), "The Logistician");
    }
}
