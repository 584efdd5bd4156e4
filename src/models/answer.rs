use std::fmt;

/// Number of options per question (A through E)
pub const OPTION_COUNT: usize = 5;

/// One answer option
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Choice {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
}

impl Choice {
    /// All options in ascending order
    pub const ALL: [Choice; OPTION_COUNT] = [Choice::A, Choice::B, Choice::C, Choice::D, Choice::E];

    /// Get option from its block index (0 = A)
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Get option from its letter
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'A' => Some(Choice::A),
            'B' => Some(Choice::B),
            'C' => Some(Choice::C),
            'D' => Some(Choice::D),
            'E' => Some(Choice::E),
            _ => None,
        }
    }

    /// Block index of this option inside a question
    pub fn index(self) -> usize {
        self as usize
    }

    /// Letter of this option
    pub fn letter(self) -> char {
        (b'A' + self as u8) as char
    }
}

/// Grader mark for an ambiguous answer. It has no block of its own.
pub const UNRESOLVED_MARK: char = 'x';

/// Set of selected options for a single question, stored as a 5-bit mask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct QuestionAnswer {
    bits: u8,
}

impl QuestionAnswer {
    /// Answer with nothing selected
    pub const EMPTY: QuestionAnswer = QuestionAnswer { bits: 0 };

    /// Build from the low five bits of a mask (bit 0 = A)
    pub fn from_bits(bits: u8) -> Self {
        Self { bits: bits & 0b1_1111 }
    }

    /// Build from a set of options
    pub fn from_choices<I: IntoIterator<Item = Choice>>(choices: I) -> Self {
        let mut answer = Self::EMPTY;
        for choice in choices {
            answer.insert(choice);
        }
        answer
    }

    /// Parse a contiguous letter string such as `"ACE"`.
    ///
    /// The unresolved mark `x` is accepted and dropped. Returns the offending
    /// character for anything else.
    pub fn parse_letters(letters: &str) -> Result<Self, char> {
        let mut answer = Self::EMPTY;
        for letter in letters.chars() {
            if letter == UNRESOLVED_MARK {
                continue;
            }
            answer.insert(Choice::from_letter(letter).ok_or(letter)?);
        }
        Ok(answer)
    }

    /// Raw 5-bit mask
    pub fn bits(self) -> u8 {
        self.bits
    }

    /// Per-block on/off pattern in render order (A first)
    pub fn blocks(self) -> [bool; OPTION_COUNT] {
        let mut blocks = [false; OPTION_COUNT];
        for (i, block) in blocks.iter_mut().enumerate() {
            *block = self.bits & (1 << i) != 0;
        }
        blocks
    }

    /// Select an option
    pub fn insert(&mut self, choice: Choice) {
        self.bits |= 1 << choice.index();
    }

    /// Check whether an option is selected
    pub fn contains(self, choice: Choice) -> bool {
        self.bits & (1 << choice.index()) != 0
    }

    /// True when no option is selected
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Selected options in ascending order
    pub fn choices(self) -> impl Iterator<Item = Choice> {
        Choice::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl fmt::Display for QuestionAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for choice in self.choices() {
            write!(f, "{}", choice.letter())?;
        }
        Ok(())
    }
}
