pub mod answer;
pub mod answer_set;
pub mod geometry;
pub mod matrix;
pub mod permutation;

pub use answer::{Choice, OPTION_COUNT, QuestionAnswer};
pub use answer_set::{AnswerSet, QUESTION_COUNT};
pub use geometry::BarcodeGeometry;
pub use matrix::BitMatrix;
pub use permutation::{PERMUTATION_SEED, Permutation};
