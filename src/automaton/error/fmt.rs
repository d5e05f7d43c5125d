use std::fmt::{self, Display};

use super::{Error, ErrorKind};


impl Display for ErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::DuplicateState(state) => write!(f, "state '{}' already exists", state)?,

			Self::DuplicateInitialState { existing, state } => write!(
				f,
				"state '{}' can't be initial, '{}' already is",
				state,
				existing
			)?,

			Self::UnknownState(state) => write!(f, "state '{}' does not exist", state)?,

			Self::EmptyTransition => "transition has no symbols".fmt(f)?,

			Self::EpsilonInDfa { from, to } => write!(
				f,
				"cannot add epsilon transition from '{}' to '{}' to a DFA, use an NFA instead",
				from,
				to
			)?,

			Self::Nondeterministic { state, symbol, existing } => write!(
				f,
				"state '{}' already has a transition on symbol '{}' going to state '{}', \
				 a DFA allows only one transition per symbol",
				state,
				symbol,
				existing
			)?,

			Self::InvalidSymbol(symbol) => {
				write!(f, "invalid symbol '{}', expected a single character", symbol)?
			}

			Self::DuplicateAutomaton => "automaton is already registered".fmt(f)?,
		};

		Ok(())
	}
}


impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		if self.automaton.is_empty() {
			write!(f, "{}.", self.error)
		} else {
			write!(f, "automaton '{}': {}.", self.automaton, self.error)
		}
	}
}
