#[cfg(test)]
mod tests;

use indexmap::IndexMap;

use crate::automaton::{Automaton, Error, Kind, Simulation, State, Symbol, Transition};


/// The id of the default identifier automaton.
pub const IDENTIFIER: &str = "IDENTIFIER";
/// The id of the default integer automaton.
pub const INTEGER: &str = "INTEGER";
/// The id of the default float automaton.
pub const FLOAT: &str = "FLOAT";


/// The longest prefix accepted by some registered automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
	/// The id of the automaton that accepted the prefix.
	pub automaton: &'a str,
	/// Length of the prefix, in bytes.
	pub len: usize,
}


/// A collection of automata, addressed by id, in registration order.
#[derive(Debug, Clone)]
pub struct Registry {
	automata: IndexMap<Box<str>, Automaton>,
}


impl Registry {
	/// An empty registry.
	pub fn new() -> Self {
		Self { automata: IndexMap::new() }
	}


	/// Register an automaton. Ids must be unique.
	pub fn add(&mut self, automaton: Automaton) -> Result<(), Error> {
		if self.automata.contains_key(automaton.id()) {
			return Err(Error::duplicate_automaton(automaton.id()));
		}

		self.automata.insert(automaton.id().into(), automaton);

		Ok(())
	}


	/// Unregister an automaton. The remaining ones keep their relative order.
	pub fn remove(&mut self, id: &str) -> bool {
		self.automata.shift_remove(id).is_some()
	}


	pub fn get(&self, id: &str) -> Option<&Automaton> {
		self.automata.get(id)
	}


	pub fn contains(&self, id: &str) -> bool {
		self.automata.contains_key(id)
	}


	pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
		self.automata.keys().map(AsRef::as_ref)
	}


	pub fn len(&self) -> usize {
		self.automata.len()
	}


	pub fn is_empty(&self) -> bool {
		self.automata.is_empty()
	}


	pub fn iter(&self) -> impl Iterator<Item = &Automaton> + '_ {
		self.automata.values()
	}


	pub fn clear(&mut self) {
		self.automata.clear();
	}


	/// The first registered automaton that accepts the whole input.
	pub fn find_matching_automaton(&self, input: &str) -> Option<&str> {
		self.automata
			.values()
			.find(|automaton| automaton.accepts(input))
			.map(Automaton::id)
	}


	/// Every registered automaton that accepts the whole input, in registration order.
	pub fn find_all_matching_automata(&self, input: &str) -> Vec<&str> {
		self.automata
			.values()
			.filter(|automaton| automaton.accepts(input))
			.map(Automaton::id)
			.collect()
	}


	/// Find the longest non-empty prefix of the input accepted by some automaton.
	///
	/// All automata are run side by side, one character at a time. After each character,
	/// the first automaton in registration order that accepts records a match, so longer
	/// prefixes always win and the earliest registered automaton wins ties. The walk stops
	/// once every simulation is dead.
	pub fn longest_match(&self, input: &str) -> Option<Match> {
		let mut simulations: Vec<Simulation> = self
			.automata
			.values()
			.filter_map(Automaton::simulate)
			.collect();

		let mut longest = None;

		for (offset, c) in input.char_indices() {
			if simulations.is_empty() {
				break;
			}

			simulations.retain_mut(|simulation| simulation.step(c));

			let accepting = simulations
				.iter()
				.find(|simulation| simulation.is_accepting());

			if let Some(simulation) = accepting {
				longest = Some(
					Match {
						automaton: simulation.automaton().id(),
						len: offset + c.len_utf8(),
					}
				);
			}
		}

		longest
	}
}


impl Default for Registry {
	/// A registry seeded with identifier, integer and float automata.
	fn default() -> Self {
		let mut registry = Self::new();

		for automaton in vec![identifier(), integer(), float()] {
			registry
				.add(automaton)
				.expect("default automata have distinct ids");
		}

		registry
	}
}


fn letters() -> impl Iterator<Item = char> {
	('a' ..= 'z').chain('A' ..= 'Z')
}


fn digits() -> impl Iterator<Item = char> {
	'0' ..= '9'
}


/// Letter or underscore, then letters, digits or underscores.
pub fn identifier() -> Automaton {
	let mut automaton = Automaton::new(IDENTIFIER, "Identifier", Kind::Dfa);

	let states = vec![State::new("q0").initial(), State::new("q1").accepting()];
	for state in states {
		automaton.add_state(state).expect("default states are distinct");
	}

	let start = letters().chain(std::iter::once('_')).map(Symbol::Char);
	let rest = letters()
		.chain(digits())
		.chain(std::iter::once('_'))
		.map(Symbol::Char);

	let transitions = vec![
		Transition::with_symbols("q0", "q1", start),
		Transition::with_symbols("q1", "q1", rest),
	];
	for transition in transitions {
		automaton.add_transition(transition).expect("default transitions are deterministic");
	}

	automaton
}


/// One or more digits.
pub fn integer() -> Automaton {
	let mut automaton = Automaton::new(INTEGER, "Integer", Kind::Dfa);

	let states = vec![State::new("q0").initial(), State::new("q1").accepting()];
	for state in states {
		automaton.add_state(state).expect("default states are distinct");
	}

	let transitions = vec![
		Transition::with_symbols("q0", "q1", digits().map(Symbol::Char)),
		Transition::with_symbols("q1", "q1", digits().map(Symbol::Char)),
	];
	for transition in transitions {
		automaton.add_transition(transition).expect("default transitions are deterministic");
	}

	automaton
}


/// Digits, a dot, then digits. Both digit runs are mandatory.
pub fn float() -> Automaton {
	let mut automaton = Automaton::new(FLOAT, "Float", Kind::Dfa);

	let states = vec![
		State::new("q0").initial(),
		State::new("q1"),
		State::new("q2"),
		State::new("q3").accepting(),
	];
	for state in states {
		automaton.add_state(state).expect("default states are distinct");
	}

	let transitions = vec![
		Transition::with_symbols("q0", "q1", digits().map(Symbol::Char)),
		Transition::with_symbols("q1", "q1", digits().map(Symbol::Char)),
		Transition::new("q1", "q2", '.'),
		Transition::with_symbols("q2", "q3", digits().map(Symbol::Char)),
		Transition::with_symbols("q3", "q3", digits().map(Symbol::Char)),
	];
	for transition in transitions {
		automaton.add_transition(transition).expect("default transitions are deterministic");
	}

	automaton
}
