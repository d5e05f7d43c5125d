use std::collections::BTreeSet;

use super::{StateId, Symbol};


/// An edge between two states. A single record carries every symbol between the same
/// pair of states, so it never holds an empty symbol set once inserted in an automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
	pub from: StateId,
	pub to: StateId,
	pub symbols: BTreeSet<Symbol>,
}


impl Transition {
	pub fn new<F, T, S>(from: F, to: T, symbol: S) -> Self
	where
		F: Into<StateId>,
		T: Into<StateId>,
		S: Into<Symbol>,
	{
		Self::with_symbols(from, to, std::iter::once(symbol.into()))
	}


	pub fn epsilon<F, T>(from: F, to: T) -> Self
	where
		F: Into<StateId>,
		T: Into<StateId>,
	{
		Self::new(from, to, Symbol::Epsilon)
	}


	pub fn with_symbols<F, T, I>(from: F, to: T, symbols: I) -> Self
	where
		F: Into<StateId>,
		T: Into<StateId>,
		I: IntoIterator<Item = Symbol>,
	{
		Self {
			from: from.into(),
			to: to.into(),
			symbols: symbols.into_iter().collect(),
		}
	}


	pub fn is_epsilon(&self) -> bool {
		self.symbols.contains(&Symbol::Epsilon)
	}


	pub fn has_symbol(&self, symbol: Symbol) -> bool {
		self.symbols.contains(&symbol)
	}


	/// Whether the transition reads the given input character.
	pub fn reads(&self, input: char) -> bool {
		self.symbols.contains(&Symbol::Char(input))
	}


	pub fn connects(&self, from: &str, to: &str) -> bool {
		&*self.from == from && &*self.to == to
	}


	pub fn is_incident(&self, state: &str) -> bool {
		&*self.from == state || &*self.to == state
	}
}
