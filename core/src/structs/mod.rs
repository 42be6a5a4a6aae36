pub mod bag;
pub mod result;
pub mod signature;

pub use bag::{BagError, LetterBag, MAX_LEN};
pub use result::SearchResult;
pub use signature::{encode, Signature};
