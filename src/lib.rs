//! Finite automata for lexical analysis.
//!
//! The engine models NFAs and DFAs over single character symbols, converts NFAs to DFAs
//! through subset construction, minimizes DFAs through table filling, and drives a
//! longest-match lexical scanner from a registry of automata.

pub mod automaton;
pub mod convert;
pub mod lexer;
pub mod minimize;
pub mod registry;
#[cfg(test)]
mod tests;

pub use automaton::{Automaton, Kind, State, StateId, StateSet, Symbol, Transition};
pub use convert::convert;
pub use minimize::minimize;
pub use registry::Registry;
