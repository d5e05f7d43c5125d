mod fmt;

use super::{StateId, Symbol};


/// Why an automaton rejected a modification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
	/// A state with the same id already exists.
	DuplicateState(StateId),
	/// A second state was flagged as initial.
	DuplicateInitialState { existing: StateId, state: StateId },
	/// The source or destination of a transition does not exist.
	UnknownState(StateId),
	/// A transition must carry at least one symbol.
	EmptyTransition,
	/// DFAs can't have epsilon transitions.
	EpsilonInDfa { from: StateId, to: StateId },
	/// DFAs can't have two transitions from the same state on the same symbol.
	Nondeterministic { state: StateId, symbol: Symbol, existing: StateId },
	/// Text that doesn't denote a single symbol.
	InvalidSymbol(Box<str>),
	/// An automaton with the same id is already registered.
	DuplicateAutomaton,
}


/// A rejected automaton construction step. The automaton is left unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
	pub error: ErrorKind,
	/// The id of the automaton, empty when the error is not bound to one.
	pub automaton: Box<str>,
}


impl std::error::Error for Error {}


impl Error {
	pub fn new(error: ErrorKind, automaton: &str) -> Self {
		Self { error, automaton: automaton.into() }
	}


	pub fn duplicate_state(state: &str, automaton: &str) -> Self {
		Self::new(ErrorKind::DuplicateState(state.into()), automaton)
	}


	pub fn duplicate_initial_state(existing: &str, state: &str, automaton: &str) -> Self {
		Self::new(
			ErrorKind::DuplicateInitialState { existing: existing.into(), state: state.into() },
			automaton,
		)
	}


	pub fn unknown_state(state: &str, automaton: &str) -> Self {
		Self::new(ErrorKind::UnknownState(state.into()), automaton)
	}


	pub fn empty_transition(automaton: &str) -> Self {
		Self::new(ErrorKind::EmptyTransition, automaton)
	}


	pub fn epsilon_in_dfa(from: &str, to: &str, automaton: &str) -> Self {
		Self::new(ErrorKind::EpsilonInDfa { from: from.into(), to: to.into() }, automaton)
	}


	pub fn nondeterministic(state: &str, symbol: Symbol, existing: &str, automaton: &str) -> Self {
		Self::new(
			ErrorKind::Nondeterministic {
				state: state.into(),
				symbol,
				existing: existing.into(),
			},
			automaton,
		)
	}


	pub fn invalid_symbol(symbol: &str) -> Self {
		Self::new(ErrorKind::InvalidSymbol(symbol.into()), "")
	}


	pub fn duplicate_automaton(automaton: &str) -> Self {
		Self::new(ErrorKind::DuplicateAutomaton, automaton)
	}


	/// Bind the error to an automaton, if it is not bound yet.
	pub fn within(mut self, automaton: &str) -> Self {
		if self.automaton.is_empty() {
			self.automaton = automaton.into();
		}
		self
	}
}
