use super::{Automaton, Kind, StateId, StateSet};


/// The current position of a simulation.
#[derive(Debug, Clone)]
enum Current<'a> {
	/// DFAs follow a single state.
	State(&'a str),
	/// NFAs follow the epsilon closed set of all possible states.
	Set(StateSet),
	/// No transition could be taken. Undefined transitions reject, there's no sink state.
	Dead,
}


/// A step-wise run of an automaton over some input, one character at a time.
#[derive(Debug, Clone)]
pub struct Simulation<'a> {
	automaton: &'a Automaton,
	current: Current<'a>,
}


impl<'a> Simulation<'a> {
	pub(super) fn new(automaton: &'a Automaton) -> Option<Self> {
		if !automaton.is_valid() {
			return None;
		}

		let initial = automaton.initial_state()?;

		let current = match automaton.kind() {
			Kind::Dfa => Current::State(initial),
			Kind::Nfa => {
				let seed: StateSet = std::iter::once(StateId::from(initial)).collect();
				Current::Set(automaton.epsilon_closure(&seed))
			}
		};

		Some(Self { automaton, current })
	}


	/// Consume one character. Returns false once the simulation is dead, after which no
	/// input can lead to acceptance.
	pub fn step(&mut self, input: char) -> bool {
		let next = match &self.current {
			Current::State(state) => match self.automaton.successor(state, input) {
				Some(next) => Current::State(next),
				None => Current::Dead,
			},

			Current::Set(states) => {
				let next = self.automaton.epsilon_closure(&self.automaton.move_on(states, input));
				if next.is_empty() {
					Current::Dead
				} else {
					Current::Set(next)
				}
			}

			Current::Dead => Current::Dead,
		};

		self.current = next;

		!self.is_dead()
	}


	/// Whether the input consumed so far is accepted.
	pub fn is_accepting(&self) -> bool {
		match &self.current {
			Current::State(state) => self.automaton.is_final(state),
			Current::Set(states) => states.iter().any(|state| self.automaton.is_final(state)),
			Current::Dead => false,
		}
	}


	pub fn is_dead(&self) -> bool {
		matches!(self.current, Current::Dead)
	}


	pub fn automaton(&self) -> &'a Automaton {
		self.automaton
	}
}
