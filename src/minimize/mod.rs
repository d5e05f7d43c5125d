#[cfg(test)]
mod tests;

use std::collections::{HashMap, HashSet, VecDeque};

use crate::{
	automaton::{Automaton, Kind, State, StateId, StateSet, Transition},
	convert::canonical_name,
};


/// An unordered pair of states. `(a, b)` and `(b, a)` are the same pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Pair<'a>(&'a str, &'a str);


impl<'a> Pair<'a> {
	fn new(first: &'a str, second: &'a str) -> Self {
		if first <= second {
			Self(first, second)
		} else {
			Self(second, first)
		}
	}
}


/// Minimize a DFA. The input is left untouched, the result is a new automaton:
///
/// 1. states unreachable from the initial state are dropped;
/// 2. distinguishable pairs of states are marked by table filling;
/// 3. states never marked apart are grouped in equivalence classes;
/// 4. each class becomes a single state.
///
/// Returns `None` unless the input is a valid DFA whose transitions are deterministic.
pub fn minimize(dfa: &Automaton) -> Option<Automaton> {
	if !dfa.is_dfa() || !dfa.is_valid() || !dfa.is_deterministic() {
		return None;
	}

	let mut working = dfa.clone();
	remove_unreachable_states(&mut working);

	let distinguishable = distinguishable_pairs(&working);
	let classes = equivalence_classes(&working, &distinguishable);

	Some(rebuild(&working, &classes))
}


/// All states reachable from the initial state through the transitions that exist.
pub fn reachable_states(dfa: &Automaton) -> StateSet {
	let mut reachable = StateSet::new();

	let initial = match dfa.initial_state() {
		Some(initial) => initial,
		None => return reachable,
	};

	let mut queue = VecDeque::new();
	reachable.insert(initial.into());
	queue.push_back(initial);

	while let Some(current) = queue.pop_front() {
		for transition in dfa.transitions_from(current) {
			if reachable.insert(transition.to.clone()) {
				queue.push_back(&*transition.to);
			}
		}
	}

	reachable
}


fn remove_unreachable_states(dfa: &mut Automaton) {
	let reachable = reachable_states(dfa);

	let unreachable: Vec<StateId> = dfa
		.states()
		.filter(|state| !reachable.contains(&state.id))
		.map(|state| state.id.clone())
		.collect();

	for id in unreachable {
		dfa.remove_state(&id);
	}
}


/// States from which some final state can be reached, the final states included.
fn live_states(dfa: &Automaton) -> HashSet<&str> {
	let mut live: HashSet<&str> = dfa
		.states()
		.filter(|state| state.is_final)
		.map(|state| &*state.id)
		.collect();

	let mut changed = true;
	while changed {
		changed = false;

		for transition in dfa.transitions() {
			if live.contains(&*transition.to) && live.insert(&*transition.from) {
				changed = true;
			}
		}
	}

	live
}


/// Mark every pair of states that some input string tells apart.
///
/// Base case: exactly one of the pair is final. Then, repeatedly until a full pass marks
/// nothing: a pair is marked if some symbol leads both states to a marked pair. A missing
/// transition behaves as the implicit rejecting sink, so it only tells a pair apart when
/// the other state's successor can still reach a final state.
fn distinguishable_pairs(dfa: &Automaton) -> HashSet<Pair> {
	let ids: Vec<&str> = dfa.states().map(|state| &*state.id).collect();
	let live = live_states(dfa);

	let mut marked = HashSet::new();

	for (ix, &first) in ids.iter().enumerate() {
		for &second in &ids[ix + 1 ..] {
			if dfa.is_final(first) != dfa.is_final(second) {
				marked.insert(Pair::new(first, second));
			}
		}
	}

	let mut changed = true;
	while changed {
		changed = false;

		for (ix, &first) in ids.iter().enumerate() {
			for &second in &ids[ix + 1 ..] {
				let pair = Pair::new(first, second);
				if marked.contains(&pair) {
					continue;
				}

				let distinguished = dfa.alphabet().iter().any(
					|&symbol| match (dfa.successor(first, symbol), dfa.successor(second, symbol)) {
						(Some(next1), Some(next2)) => {
							next1 != next2 && marked.contains(&Pair::new(next1, next2))
						}
						(Some(next), None) | (None, Some(next)) => live.contains(next),
						(None, None) => false,
					}
				);

				if distinguished {
					marked.insert(pair);
					changed = true;
				}
			}
		}
	}

	marked
}


/// Group the states so that two states share a class iff their pair was never marked.
fn equivalence_classes(dfa: &Automaton, distinguishable: &HashSet<Pair>) -> Vec<StateSet> {
	let mut classes = Vec::new();
	let mut processed: HashSet<&str> = HashSet::new();

	for state in dfa.states() {
		if !processed.insert(&*state.id) {
			continue;
		}

		let mut class = StateSet::new();
		class.insert(state.id.clone());

		for other in dfa.states() {
			if processed.contains(&*other.id) {
				continue;
			}

			if !distinguishable.contains(&Pair::new(&state.id, &other.id)) {
				processed.insert(&*other.id);
				class.insert(other.id.clone());
			}
		}

		classes.push(class);
	}

	classes
}


/// The name of a state standing for a class: the member itself for singletons, the
/// canonical set name otherwise.
fn class_name(class: &StateSet) -> StateId {
	match class.len() {
		1 => class.iter().next().cloned().unwrap_or_default(),
		_ => canonical_name(class),
	}
}


/// Names for every class. When a singleton's id is spelled like another class's set
/// name, all classes get their canonical set name instead.
fn class_names(classes: &[StateSet]) -> Vec<StateId> {
	let names: Vec<StateId> = classes.iter().map(class_name).collect();

	let unique: HashSet<&StateId> = names.iter().collect();
	if unique.len() == names.len() {
		names
	} else {
		classes.iter().map(|class| canonical_name(class)).collect()
	}
}


fn rebuild(dfa: &Automaton, classes: &[StateSet]) -> Automaton {
	let mut minimized = Automaton::new(
		format!("{}_min", dfa.id()),
		format!("{} (Minimized)", dfa.name()),
		Kind::Dfa,
	);

	for &symbol in dfa.alphabet() {
		minimized.add_to_alphabet(symbol);
	}

	let names = class_names(classes);

	let class_of: HashMap<&str, &str> = classes
		.iter()
		.zip(&names)
		.flat_map(|(class, name)| class.iter().map(move |member| (&**member, &**name)))
		.collect();

	for (class, name) in classes.iter().zip(&names) {
		let is_initial = dfa
			.initial_state()
			.map_or(false, |initial| class.contains(initial));
		let is_final = class.iter().any(|member| dfa.is_final(member));

		let mut state = State::new(name.clone()).accepting_if(is_final);
		state.is_initial = is_initial;

		minimized
			.add_state(state)
			.unwrap_or_else(|error| panic!("class names must be unique: {}", error));
	}

	// All members of a class behave the same, so any of them may stand for it.
	for (class, name) in classes.iter().zip(&names) {
		let representative = match class.iter().next() {
			Some(representative) => representative,
			None => continue,
		};

		for &symbol in dfa.alphabet() {
			let target = dfa
				.successor(representative, symbol)
				.and_then(|next| class_of.get(next));

			if let Some(&target) = target {
				minimized
					.add_transition(Transition::new(name.clone(), target, symbol))
					.unwrap_or_else(|error| panic!("rebuilt transitions must be deterministic: {}", error));
			}
		}
	}

	minimized
}
