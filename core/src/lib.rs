pub mod data;
pub mod draw;
pub mod index;
pub mod solvers;
pub mod structs;

pub use index::WordIndex;
pub use solvers::{solve, solve_with, Strategy};
pub use structs::{encode, BagError, LetterBag, SearchResult, Signature, MAX_LEN};
