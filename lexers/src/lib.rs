mod scanner;
mod char_scanner;
mod notation_tokenizer;
mod word_tokenizer;

pub use scanner::Scanner;
pub use notation_tokenizer::{Bracket, NotationToken, NotationTokenizer, SignRule};
pub use notation_tokenizer::{CONSTANT_NAMES, FUNCTIONS, OPERATORS};
pub use word_tokenizer::{classify_word, WordTokenizer};
