use super::*;
use crate::{
	convert::convert,
	registry::Registry,
	tests::util::{assert_same_language, load_dir},
};


fn dfa(states: &[(&str, bool)], transitions: &[(&str, &str, char)]) -> Automaton {
	let mut automaton = Automaton::new("D", "d", Kind::Dfa);

	for (ix, &(id, is_final)) in states.iter().enumerate() {
		let state = State::new(id).accepting_if(is_final);
		let state = if ix == 0 { state.initial() } else { state };
		automaton.add_state(state).unwrap();
	}

	for &(from, to, symbol) in transitions {
		automaton.add_transition(Transition::new(from, to, symbol)).unwrap();
	}

	automaton
}


#[test]
fn test_equivalent_final_states_collapse() {
	// q1 and q2 are both final and both loop to q1 on every symbol.
	let original = dfa(
		&[("q0", false), ("q1", true), ("q2", true)],
		&[
			("q0", "q1", 'a'),
			("q0", "q2", 'b'),
			("q1", "q1", 'a'),
			("q1", "q1", 'b'),
			("q2", "q1", 'a'),
			("q2", "q1", 'b'),
		],
	);

	let minimized = minimize(&original).unwrap();

	assert_eq!(minimized.state_count(), reachable_states(&original).len() - 1);
	assert!(minimized.has_state("{q1,q2}"));
	assert!(minimized.is_final("{q1,q2}"));
	assert_eq!(minimized.initial_state(), Some("q0"));
	assert_eq!(minimized.id(), "D_min");
	assert_eq!(minimized.name(), "d (Minimized)");
	assert_same_language(&original, &minimized, 5);
}


#[test]
fn test_unreachable_states_are_removed() {
	let original = dfa(
		&[("q0", false), ("q1", true), ("orphan", true)],
		&[("q0", "q1", 'a'), ("orphan", "q1", 'a')],
	);

	assert_eq!(reachable_states(&original).len(), 2);

	let minimized = minimize(&original).unwrap();

	assert_eq!(minimized.state_count(), 2);
	assert!(!minimized.has_state("orphan"));
	assert_same_language(&original, &minimized, 4);

	// The input is untouched.
	assert_eq!(original.state_count(), 3);
	assert!(original.has_state("orphan"));
}


#[test]
fn test_chain_of_equivalent_states() {
	// Accepts strings of a's of length at least one, but with redundant states.
	let original = dfa(
		&[("q0", false), ("q1", true), ("q2", true), ("q3", true)],
		&[("q0", "q1", 'a'), ("q1", "q2", 'a'), ("q2", "q3", 'a'), ("q3", "q3", 'a')],
	);

	let minimized = minimize(&original).unwrap();

	assert_eq!(minimized.state_count(), 2);
	assert!(minimized.has_state("{q1,q2,q3}"));
	assert_same_language(&original, &minimized, 6);
}


#[test]
fn test_missing_transitions_still_distinguish() {
	// q0 and q1 are both non final, but only q1 can read a '.' towards acceptance.
	let registry = Registry::default();
	let float = registry.get("FLOAT").unwrap();

	let minimized = minimize(float).unwrap();

	assert_eq!(minimized.state_count(), float.state_count());
	assert_same_language(float, &minimized, 4);
	assert!(minimized.accepts("12.5"));
}


#[test]
fn test_dead_states_merge() {
	// q2 and q3 can never reach acceptance. They are equivalent even though only one
	// of them has outgoing transitions.
	let original = dfa(
		&[("q0", false), ("q1", true), ("q2", false), ("q3", false)],
		&[("q0", "q1", 'a'), ("q0", "q2", 'b'), ("q1", "q3", 'b'), ("q2", "q2", 'a')],
	);

	let minimized = minimize(&original).unwrap();

	assert_eq!(minimized.state_count(), 3);
	assert!(minimized.has_state("{q2,q3}"));
	assert_same_language(&original, &minimized, 5);
}


#[test]
fn test_class_names_never_clash() {
	// p and q merge into "{p,q}", which is also the id of a third state.
	let original = dfa(
		&[("q0", false), ("p", true), ("q", true), ("{p,q}", false)],
		&[("q0", "p", 'a'), ("q0", "q", 'b'), ("q0", "{p,q}", 'c'), ("{p,q}", "p", 'a')],
	);

	let minimized = minimize(&original).unwrap();

	assert_eq!(minimized.state_count(), 3);
	assert_eq!(minimized.initial_state(), Some("{q0}"));
	assert!(minimized.is_final("{p,q}"));
	assert!(minimized.has_state("{{p\\,q}}"));
	assert!(!minimized.is_final("{{p\\,q}}"));
	assert_same_language(&original, &minimized, 4);
}


#[test]
fn test_idempotent() {
	let registry = Registry::default();

	for automaton in registry.iter() {
		let once = minimize(automaton).unwrap();
		let twice = minimize(&once).unwrap();

		assert!(once.state_count() <= reachable_states(automaton).len());
		assert_eq!(twice.state_count(), once.state_count());
		assert_same_language(automaton, &twice, 2);
	}
}


#[test]
fn test_rejects_non_dfa() {
	let mut nfa = dfa(&[("q0", false), ("q1", true)], &[("q0", "q1", 'a')]);
	nfa.set_kind(Kind::Nfa);
	assert!(minimize(&nfa).is_none());

	// Marked as a DFA, but with an epsilon transition.
	nfa.add_transition(Transition::epsilon("q1", "q0")).unwrap();
	nfa.set_kind(Kind::Dfa);
	assert!(minimize(&nfa).is_none());

	// Marked as a DFA, but reading 'a' from q0 leads to two states.
	let mut forked = Automaton::new("F", "f", Kind::Nfa);
	forked.add_state(State::new("q0").initial()).unwrap();
	forked.add_state(State::new("q1").accepting()).unwrap();
	forked.add_state(State::new("q2")).unwrap();
	forked.add_transition(Transition::new("q0", "q1", 'a')).unwrap();
	forked.add_transition(Transition::new("q0", "q2", 'a')).unwrap();
	forked.set_kind(Kind::Dfa);
	assert!(minimize(&forked).is_none());

	let mut invalid = Automaton::new("I", "i", Kind::Dfa);
	assert!(minimize(&invalid).is_none());
	invalid.add_state(State::new("q0")).unwrap();
	assert!(minimize(&invalid).is_none());
}


#[test]
fn test_language_is_preserved() {
	load_dir(
		"src/tests/data/automata",
		|path, automaton| {
			let dfa = convert(&automaton).unwrap();
			let minimized = minimize(&dfa)
				.unwrap_or_else(|| panic!("{}: minimization failed", path.display()));

			assert!(minimized.state_count() <= reachable_states(&dfa).len());
			assert_same_language(&automaton, &minimized, 5);

			let again = minimize(&minimized).unwrap();
			assert_eq!(again.state_count(), minimized.state_count(), "{}", path.display());
		}
	)
	.unwrap();
}
