// Language plumbing shared by the engine — tokenization and stopword sets.

pub mod stopwords;
pub mod tokenize;
