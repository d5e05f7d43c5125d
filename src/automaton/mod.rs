mod definition;
mod error;
mod fmt;
mod simulation;
mod state;
mod symbol;
mod transition;

use std::collections::{BTreeSet, HashSet, VecDeque};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use definition::{Definition, StateDefinition, TransitionDefinition};
pub use error::{Error, ErrorKind};
pub use simulation::Simulation;
pub use state::{State, StateId, StateSet};
pub use symbol::{Symbol, EPSILON_ALIASES};
pub use transition::Transition;


/// Whether an automaton is restricted to deterministic transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Kind {
	Nfa,
	Dfa,
}


/// A finite automaton over single character symbols.
///
/// States are kept in insertion order and addressed by id. When the kind is `Dfa`, every
/// insertion is checked so that no epsilon transition exists and no state has two
/// transitions on the same symbol.
#[derive(Debug, Clone)]
pub struct Automaton {
	id: Box<str>,
	name: Box<str>,
	kind: Kind,
	states: IndexMap<StateId, State>,
	transitions: Vec<Transition>,
	alphabet: BTreeSet<char>,
	initial: Option<StateId>,
}


impl Automaton {
	pub fn new<I, N>(id: I, name: N, kind: Kind) -> Self
	where
		I: Into<Box<str>>,
		N: Into<Box<str>>,
	{
		Self {
			id: id.into(),
			name: name.into(),
			kind,
			states: IndexMap::new(),
			transitions: Vec::new(),
			alphabet: BTreeSet::new(),
			initial: None,
		}
	}


	pub fn id(&self) -> &str {
		&self.id
	}


	pub fn name(&self) -> &str {
		&self.name
	}


	pub fn set_name<N>(&mut self, name: N)
	where
		N: Into<Box<str>>,
	{
		self.name = name.into();
	}


	pub fn kind(&self) -> Kind {
		self.kind
	}


	/// Change the kind without checking the transitions. Use `detect_type` to derive the
	/// kind from the transitions instead.
	pub fn set_kind(&mut self, kind: Kind) {
		self.kind = kind;
	}


	pub fn is_dfa(&self) -> bool {
		self.kind == Kind::Dfa
	}


	pub fn is_nfa(&self) -> bool {
		self.kind == Kind::Nfa
	}


	// States -------------------------------------------------------------------------------

	/// Add a state. A state flagged as initial becomes the initial state, unless there is
	/// one already.
	pub fn add_state(&mut self, state: State) -> Result<(), Error> {
		if self.states.contains_key(&state.id) {
			return Err(Error::duplicate_state(&state.id, &self.id));
		}

		if state.is_initial {
			if let Some(existing) = &self.initial {
				return Err(Error::duplicate_initial_state(existing, &state.id, &self.id));
			}

			self.initial = Some(state.id.clone());
		}

		self.states.insert(state.id.clone(), state);

		Ok(())
	}


	/// Remove a state and every transition incident to it.
	pub fn remove_state(&mut self, id: &str) -> bool {
		if self.states.shift_remove(id).is_none() {
			return false;
		}

		self.transitions.retain(|transition| !transition.is_incident(id));

		if self.initial.as_deref() == Some(id) {
			self.initial = None;
		}

		true
	}


	pub fn state(&self, id: &str) -> Option<&State> {
		self.states.get(id)
	}


	pub fn has_state(&self, id: &str) -> bool {
		self.states.contains_key(id)
	}


	pub fn states(&self) -> impl Iterator<Item = &State> + '_ {
		self.states.values()
	}


	pub fn state_count(&self) -> usize {
		self.states.len()
	}


	pub fn is_final(&self, id: &str) -> bool {
		self.state(id).map_or(false, |state| state.is_final)
	}


	pub fn initial_state(&self) -> Option<&str> {
		self.initial.as_deref()
	}


	/// Make the given state the only initial state. Returns false if the state does not
	/// exist, in which case nothing changes.
	pub fn set_initial_state(&mut self, id: &str) -> bool {
		if !self.states.contains_key(id) {
			return false;
		}

		for state in self.states.values_mut() {
			state.is_initial = &*state.id == id;
		}

		self.initial = Some(id.into());

		true
	}


	// Transitions --------------------------------------------------------------------------

	/// Check whether a transition may be added, without adding it.
	pub fn can_add_transition(&self, transition: &Transition) -> Result<(), Error> {
		for endpoint in [&transition.from, &transition.to] {
			if !self.states.contains_key(endpoint) {
				return Err(Error::unknown_state(endpoint, &self.id));
			}
		}

		if transition.symbols.is_empty() {
			return Err(Error::empty_transition(&self.id));
		}

		if self.is_dfa() {
			if transition.is_epsilon() {
				return Err(Error::epsilon_in_dfa(&transition.from, &transition.to, &self.id));
			}

			for existing in self.transitions_from(&transition.from) {
				let clash = transition
					.symbols
					.iter()
					.find(|symbol| existing.has_symbol(**symbol));

				if let Some(&symbol) = clash {
					return Err(
						Error::nondeterministic(&transition.from, symbol, &existing.to, &self.id)
					);
				}
			}
		}

		Ok(())
	}


	/// Add a transition. If there already is a transition between the same pair of states,
	/// the symbols are merged into it.
	pub fn add_transition(&mut self, transition: Transition) -> Result<(), Error> {
		self.can_add_transition(&transition)?;

		self.alphabet.extend(transition.symbols.iter().filter_map(Symbol::as_char));

		let existing = self
			.transitions
			.iter_mut()
			.find(|existing| existing.connects(&transition.from, &transition.to));

		match existing {
			Some(existing) => existing.symbols.extend(transition.symbols),
			None => self.transitions.push(transition),
		}

		Ok(())
	}


	/// Remove a symbol from the transition between two states, or the whole transition if
	/// no symbol is given. Transitions left without symbols are dropped.
	pub fn remove_transition(&mut self, from: &str, to: &str, symbol: Option<Symbol>) -> bool {
		let index = match self.transitions.iter().position(|t| t.connects(from, to)) {
			Some(index) => index,
			None => return false,
		};

		match symbol {
			None => {
				self.transitions.remove(index);
			}

			Some(symbol) => {
				let transition = &mut self.transitions[index];
				if !transition.symbols.remove(&symbol) {
					return false;
				}

				if transition.symbols.is_empty() {
					self.transitions.remove(index);
				}
			}
		}

		true
	}


	pub fn transitions(&self) -> &[Transition] {
		&self.transitions
	}


	pub fn transition_count(&self) -> usize {
		self.transitions.len()
	}


	pub fn transitions_from<'a, 'b>(&'a self, id: &'b str) -> impl Iterator<Item = &'a Transition> + 'b
	where
		'a: 'b,
	{
		self.transitions
			.iter()
			.filter(move |transition| &*transition.from == id)
	}


	/// The destination of the first transition from a state reading the given character.
	/// In a DFA, this is the only one.
	pub fn successor(&self, id: &str, input: char) -> Option<&str> {
		self.transitions
			.iter()
			.find(|transition| &*transition.from == id && transition.reads(input))
			.map(|transition| &*transition.to)
	}


	/// All states directly reachable from a set of states by reading the given character.
	pub fn move_on(&self, states: &StateSet, input: char) -> StateSet {
		self.transitions
			.iter()
			.filter(|transition| states.contains(&transition.from) && transition.reads(input))
			.map(|transition| transition.to.clone())
			.collect()
	}


	// Alphabet -----------------------------------------------------------------------------

	pub fn alphabet(&self) -> &BTreeSet<char> {
		&self.alphabet
	}


	pub fn add_to_alphabet(&mut self, symbol: char) {
		self.alphabet.insert(symbol);
	}


	// Analysis -----------------------------------------------------------------------------

	/// An automaton is valid when it has states and its initial state is one of them.
	pub fn is_valid(&self) -> bool {
		match &self.initial {
			Some(initial) => self.states.contains_key(initial),
			None => false,
		}
	}


	/// Whether the transitions satisfy the DFA restrictions, regardless of the kind.
	pub fn is_deterministic(&self) -> bool {
		if self.transitions.iter().any(Transition::is_epsilon) {
			return false;
		}

		let mut seen = HashSet::new();

		self.transitions
			.iter()
			.flat_map(|transition| {
				transition.symbols.iter().map(move |symbol| (&transition.from, *symbol))
			})
			.all(|pair| seen.insert(pair))
	}


	/// Derive the kind from the transitions: any epsilon transition, or any state with two
	/// transitions on the same symbol, makes an NFA.
	pub fn detect_type(&mut self) -> Kind {
		self.kind = if self.is_deterministic() { Kind::Dfa } else { Kind::Nfa };
		self.kind
	}


	/// The least set containing the given states and closed under epsilon transitions.
	pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
		let mut closure = StateSet::new();

		for seed in states {
			if closure.contains(seed) {
				continue;
			}

			let mut queue = VecDeque::new();
			closure.insert(seed.clone());
			queue.push_back(seed.clone());

			while let Some(current) = queue.pop_front() {
				let targets = self
					.transitions_from(&current)
					.filter(|transition| transition.is_epsilon())
					.map(|transition| &transition.to);

				for target in targets {
					if closure.insert(target.clone()) {
						queue.push_back(target.clone());
					}
				}
			}
		}

		closure
	}


	/// Start a step-wise simulation. Returns `None` for invalid automata.
	pub fn simulate(&self) -> Option<Simulation> {
		Simulation::new(self)
	}


	/// Whether the automaton accepts the whole input.
	pub fn accepts(&self, input: &str) -> bool {
		match self.simulate() {
			Some(mut simulation) => {
				input.chars().all(|c| simulation.step(c)) && simulation.is_accepting()
			}
			None => false,
		}
	}


	/// Remove all states, transitions and symbols.
	pub fn clear(&mut self) {
		self.states.clear();
		self.transitions.clear();
		self.alphabet.clear();
		self.initial = None;
	}
}
