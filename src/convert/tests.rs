use super::*;
use crate::{
	automaton::Symbol,
	tests::util::{assert_same_language, load_dir},
};


fn set(ids: &[&str]) -> StateSet {
	ids.iter().map(|&id| StateId::from(id)).collect()
}


#[test]
fn test_canonical_name() {
	assert_eq!(&*canonical_name(&StateSet::new()), EMPTY_SET);
	assert_eq!(&*canonical_name(&set(&["q2", "q0", "q1"])), "{q0,q1,q2}");
	assert_eq!(&*canonical_name(&set(&["q0"])), "{q0}");

	// Order of discovery doesn't matter.
	let ids: Vec<StateId> = vec!["b".into(), "a".into(), "b".into()];
	assert_eq!(&*canonical_name(&ids), "{a,b}");

	// Separators inside ids are escaped.
	assert_eq!(&*canonical_name(&set(&["a,b"])), "{a\\,b}");
	assert_eq!(&*canonical_name(&set(&["a\\", "b"])), "{a\\\\,b}");
	assert_ne!(canonical_name(&set(&["a,b"])), canonical_name(&set(&["a", "b"])));
}


#[test]
fn test_state_ids_with_separators() {
	// The subset {a, b} and the singleton {"a,b"} must be different DFA states.
	let mut nfa = Automaton::new("S", "s", Kind::Nfa);
	nfa.add_state(State::new("s").initial()).unwrap();
	nfa.add_state(State::new("a").accepting()).unwrap();
	nfa.add_state(State::new("b")).unwrap();
	nfa.add_state(State::new("a,b")).unwrap();
	nfa.add_transition(Transition::new("s", "a", 'x')).unwrap();
	nfa.add_transition(Transition::new("s", "b", 'x')).unwrap();
	nfa.add_transition(Transition::new("s", "a,b", 'y')).unwrap();
	nfa.add_transition(Transition::new("a,b", "a", 'z')).unwrap();

	let dfa = convert(&nfa).unwrap();

	assert!(dfa.has_state("{a,b}"));
	assert!(dfa.has_state("{a\\,b}"));
	assert!(dfa.is_final("{a,b}"));
	assert!(!dfa.is_final("{a\\,b}"));
	assert_eq!(dfa.state_count(), 4);
	assert_same_language(&nfa, &dfa, 3);
}


#[test]
fn test_epsilon_start_state() {
	// q0 -ε-> q1, q1 -a-> q1 (final).
	let mut nfa = Automaton::new("N", "n", Kind::Nfa);
	nfa.add_state(State::new("q0").initial()).unwrap();
	nfa.add_state(State::new("q1").accepting()).unwrap();
	nfa.add_transition(Transition::epsilon("q0", "q1")).unwrap();
	nfa.add_transition(Transition::new("q1", "q1", 'a')).unwrap();

	let dfa = convert(&nfa).unwrap();

	assert!(dfa.is_dfa());
	assert_eq!(dfa.initial_state(), Some("{q0,q1}"));
	assert_eq!(dfa.id(), "N_dfa");
	assert_eq!(dfa.name(), "n (DFA)");

	assert!(dfa.accepts("a"));
	assert!(dfa.accepts("aa"));
	assert_eq!(dfa.accepts(""), nfa.accepts(""));
	assert!(dfa.accepts(""));
	assert!(!dfa.accepts("b"));

	assert!(dfa.transitions().iter().all(|transition| !transition.is_epsilon()));
}


#[test]
fn test_subsets_are_named_and_merged() {
	// q0 -a-> q1, q0 -a-> q2, q1 -b-> q3 (final), q2 -b-> q3.
	let mut nfa = Automaton::new("N", "n", Kind::Nfa);
	nfa.add_state(State::new("q0").initial()).unwrap();
	nfa.add_state(State::new("q1")).unwrap();
	nfa.add_state(State::new("q2")).unwrap();
	nfa.add_state(State::new("q3").accepting()).unwrap();
	nfa.add_transition(Transition::new("q0", "q1", 'a')).unwrap();
	nfa.add_transition(Transition::new("q0", "q2", 'a')).unwrap();
	nfa.add_transition(Transition::new("q1", "q3", 'b')).unwrap();
	nfa.add_transition(Transition::new("q2", "q3", 'b')).unwrap();

	let dfa = convert(&nfa).unwrap();

	let ids: Vec<&str> = dfa.states().map(|state| &*state.id).collect();
	assert_eq!(ids, ["{q0}", "{q1,q2}", "{q3}"]);
	assert!(dfa.is_final("{q3}"));
	assert_eq!(dfa.successor("{q0}", 'a'), Some("{q1,q2}"));
	assert_eq!(dfa.successor("{q0}", 'b'), None);

	assert_same_language(&nfa, &dfa, 4);
}


#[test]
fn test_alphabet_is_copied() {
	let mut nfa = Automaton::new("N", "n", Kind::Nfa);
	nfa.add_state(State::new("q0").initial().accepting()).unwrap();
	nfa.add_to_alphabet('z');

	let dfa = convert(&nfa).unwrap();

	assert_eq!(dfa.alphabet(), nfa.alphabet());
	assert_eq!(dfa.state_count(), 1);
	assert_eq!(dfa.transition_count(), 0);
	assert!(dfa.accepts(""));
	assert!(!dfa.accepts("z"));
}


#[test]
fn test_dfa_input_is_preserved() {
	let mut dfa = Automaton::new("D", "d", Kind::Dfa);
	dfa.add_state(State::new("q0").initial()).unwrap();
	dfa.add_state(State::new("q1").accepting()).unwrap();
	dfa.add_transition(Transition::new("q0", "q1", 'x')).unwrap();
	dfa.add_transition(Transition::new("q1", "q0", 'y')).unwrap();

	let converted = convert(&dfa).unwrap();

	assert_eq!(converted.state_count(), 2);
	assert_same_language(&dfa, &converted, 5);
}


#[test]
fn test_invalid_input() {
	let mut nfa = Automaton::new("N", "n", Kind::Nfa);
	assert!(convert(&nfa).is_none());

	nfa.add_state(State::new("q0")).unwrap();
	assert!(convert(&nfa).is_none());
}


#[test]
fn test_input_is_not_modified() {
	let mut nfa = Automaton::new("N", "n", Kind::Nfa);
	nfa.add_state(State::new("q0").initial()).unwrap();
	nfa.add_state(State::new("q1").accepting()).unwrap();
	nfa.add_transition(Transition::with_symbols("q0", "q1", vec![Symbol::Epsilon, 'a'.into()]))
		.unwrap();

	let before = nfa.clone();
	let _ = convert(&nfa);

	assert_eq!(nfa.transitions(), before.transitions());
	assert_eq!(nfa.state_count(), before.state_count());
}


#[test]
fn test_language_is_preserved() {
	load_dir(
		"src/tests/data/automata",
		|path, automaton| {
			let dfa = convert(&automaton)
				.unwrap_or_else(|| panic!("{}: conversion failed", path.display()));

			assert!(dfa.is_dfa());
			assert!(dfa.is_deterministic(), "{}: not deterministic", path.display());
			assert_same_language(&automaton, &dfa, 5);
		}
	)
	.unwrap();
}
