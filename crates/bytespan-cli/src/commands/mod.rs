pub mod dump;
pub mod matching;
pub mod reduce;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod matching_tests;
