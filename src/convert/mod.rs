#[cfg(test)]
mod tests;

use std::collections::{HashMap, VecDeque};

use crate::automaton::{Automaton, Kind, State, StateId, StateSet, Transition};


/// The name of the DFA state standing for the empty set of NFA states.
pub const EMPTY_SET: &str = "∅";


/// The canonical name of a set of states: the sorted ids, comma separated and enclosed in
/// braces. Commas and backslashes inside ids are escaped with a backslash, so equal sets
/// always get the same name and different sets never do.
pub fn canonical_name<'a, I>(states: I) -> StateId
where
	I: IntoIterator<Item = &'a StateId>,
{
	let mut ids: Vec<&str> = states.into_iter().map(|id| &**id).collect();

	if ids.is_empty() {
		return EMPTY_SET.into();
	}

	ids.sort_unstable();
	ids.dedup();

	let mut name = String::from("{");

	for (ix, id) in ids.into_iter().enumerate() {
		if ix > 0 {
			name.push(',');
		}

		for c in id.chars() {
			if c == ',' || c == '\\' {
				name.push('\\');
			}
			name.push(c);
		}
	}

	name.push('}');

	name.into()
}


/// Convert an automaton to an equivalent DFA through subset construction. Each DFA state
/// is the epsilon closure of a set of the input's states, named by `canonical_name`.
///
/// The resulting DFA is partial: no transition is emitted for symbols that lead to the
/// empty set. Returns `None` if the input is not valid.
pub fn convert(nfa: &Automaton) -> Option<Automaton> {
	if !nfa.is_valid() {
		return None;
	}

	let initial = nfa.initial_state()?;

	let mut dfa = Automaton::new(
		format!("{}_dfa", nfa.id()),
		format!("{} (DFA)", nfa.name()),
		Kind::Dfa,
	);

	for &symbol in nfa.alphabet() {
		dfa.add_to_alphabet(symbol);
	}

	let seed: StateSet = std::iter::once(StateId::from(initial)).collect();
	let start = nfa.epsilon_closure(&seed);
	let start_name = canonical_name(&start);

	dfa
		.add_state(
			State::new(start_name.clone())
				.initial()
				.accepting_if(contains_final(nfa, &start))
		)
		.expect("the first state of a fresh automaton can't clash");

	// Subsets are registered by name when first seen, and expanded exactly once.
	let mut subsets: HashMap<StateId, StateSet> = HashMap::new();
	let mut worklist = VecDeque::new();

	subsets.insert(start_name.clone(), start.clone());
	worklist.push_back((start_name, start));

	while let Some((name, subset)) = worklist.pop_front() {
		for &symbol in nfa.alphabet() {
			let next = nfa.epsilon_closure(&nfa.move_on(&subset, symbol));

			if next.is_empty() {
				continue;
			}

			let next_name = canonical_name(&next);

			match subsets.get(&next_name) {
				Some(known) => assert_eq!(
					known, &next,
					"canonical name '{}' denotes two different subsets",
					next_name
				),

				None => {
					dfa
						.add_state(
							State::new(next_name.clone()).accepting_if(contains_final(nfa, &next))
						)
						.expect("subset names are unique");

					subsets.insert(next_name.clone(), next.clone());
					worklist.push_back((next_name.clone(), next));
				}
			}

			dfa
				.add_transition(Transition::new(name.clone(), next_name, symbol))
				.expect("each subset is expanded once per symbol");
		}
	}

	Some(dfa)
}


fn contains_final(automaton: &Automaton, states: &StateSet) -> bool {
	states.iter().any(|state| automaton.is_final(state))
}
