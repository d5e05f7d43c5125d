use super::*;
use crate::automaton::ErrorKind;

use assert_matches::assert_matches;


/// The reference longest match: probe every prefix against every automaton.
fn exhaustive_match<'a>(registry: &'a Registry, input: &str) -> Option<Match<'a>> {
	let mut longest = None;

	let ends = input
		.char_indices()
		.map(|(offset, c)| offset + c.len_utf8());

	for end in ends {
		if let Some(automaton) = registry.find_matching_automaton(&input[.. end]) {
			longest = Some(Match { automaton, len: end });
		}
	}

	longest
}


/// An automaton accepting exactly the given non-empty word.
fn word(id: &str, word: &str) -> Automaton {
	let mut automaton = Automaton::new(id, id, Kind::Dfa);
	let len = word.chars().count();

	automaton.add_state(State::new("s0").initial()).unwrap();

	for (ix, c) in word.chars().enumerate() {
		let next = format!("s{}", ix + 1);
		automaton
			.add_state(State::new(next.as_str()).accepting_if(ix + 1 == len))
			.unwrap();
		automaton
			.add_transition(Transition::new(format!("s{}", ix), next, c))
			.unwrap();
	}

	automaton
}


#[test]
fn test_default_automata() {
	let registry = Registry::default();

	assert_eq!(registry.ids().collect::<Vec<_>>(), [IDENTIFIER, INTEGER, FLOAT]);
	assert_eq!(registry.len(), 3);

	assert_eq!(registry.find_matching_automaton("_foo42"), Some(IDENTIFIER));
	assert_eq!(registry.find_matching_automaton("Else"), Some(IDENTIFIER));
	assert_eq!(registry.find_matching_automaton("42"), Some(INTEGER));
	assert_eq!(registry.find_matching_automaton("4.2"), Some(FLOAT));
	assert_eq!(registry.find_matching_automaton("4."), None);
	assert_eq!(registry.find_matching_automaton(".2"), None);
	assert_eq!(registry.find_matching_automaton("42abc"), None);
	assert_eq!(registry.find_matching_automaton(""), None);
}


#[test]
fn test_longest_match_prefers_float() {
	let registry = Registry::default();

	assert_eq!(registry.longest_match("12.5"), Some(Match { automaton: FLOAT, len: 4 }));
	assert_eq!(registry.longest_match("12.5;"), Some(Match { automaton: FLOAT, len: 4 }));
	assert_eq!(registry.longest_match("12."), Some(Match { automaton: INTEGER, len: 2 }));
	assert_eq!(registry.longest_match("12.x"), Some(Match { automaton: INTEGER, len: 2 }));
	assert_eq!(registry.longest_match("abc def"), Some(Match { automaton: IDENTIFIER, len: 3 }));
	assert_eq!(registry.longest_match("+1"), None);
	assert_eq!(registry.longest_match(""), None);
}


#[test]
fn test_first_registered_wins_ties() {
	let mut registry = Registry::new();
	registry.add(word("first", "if")).unwrap();
	registry.add(identifier()).unwrap();

	assert_eq!(registry.longest_match("if"), Some(Match { automaton: "first", len: 2 }));
	assert_eq!(registry.longest_match("iff"), Some(Match { automaton: IDENTIFIER, len: 3 }));
	assert_eq!(registry.find_all_matching_automata("if"), ["first", IDENTIFIER]);

	registry.remove("first");
	registry.add(word("first", "if")).unwrap();

	assert_eq!(registry.longest_match("if"), Some(Match { automaton: IDENTIFIER, len: 2 }));
	assert_eq!(registry.find_all_matching_automata("if"), [IDENTIFIER, "first"]);
}


#[test]
fn test_longest_match_agrees_with_exhaustive_probe() {
	let mut registry = Registry::default();
	registry.add(word("arrow", "->")).unwrap();
	registry.add(word("minus", "-")).unwrap();
	registry.add(word("dots", "1..")).unwrap();

	let inputs = [
		"12.5", "12..5", "1..", "1.", "->x", "-", "--", "x1_y.z", "3.14abc", "é", "a\u{e9}",
		"007", "",
	];

	for input in inputs.iter() {
		assert_eq!(
			registry.longest_match(input),
			exhaustive_match(&registry, input),
			"{:?}",
			input
		);
	}
}


#[test]
fn test_longest_match_with_nfa() {
	// (a|b)*abb, with nondeterminism on 'a'.
	let mut nfa = Automaton::new("ABB", "abb", Kind::Nfa);
	nfa.add_state(State::new("0").initial()).unwrap();
	nfa.add_state(State::new("1")).unwrap();
	nfa.add_state(State::new("2")).unwrap();
	nfa.add_state(State::new("3").accepting()).unwrap();
	nfa.add_transition(Transition::with_symbols("0", "0", vec!['a'.into(), 'b'.into()]))
		.unwrap();
	nfa.add_transition(Transition::new("0", "1", 'a')).unwrap();
	nfa.add_transition(Transition::new("1", "2", 'b')).unwrap();
	nfa.add_transition(Transition::new("2", "3", 'b')).unwrap();

	let mut registry = Registry::new();
	registry.add(nfa).unwrap();

	assert_eq!(registry.longest_match("ababbabbc"), Some(Match { automaton: "ABB", len: 8 }));
	assert_eq!(registry.longest_match("abab"), None);
}


#[test]
fn test_duplicate_ids_are_rejected() {
	let mut registry = Registry::default();

	assert_matches!(
		registry.add(integer()),
		Err(Error { error: ErrorKind::DuplicateAutomaton, automaton }) if &*automaton == INTEGER
	);
	assert_eq!(registry.len(), 3);
}


#[test]
fn test_remove_and_clear() {
	let mut registry = Registry::default();

	assert!(registry.remove(INTEGER));
	assert!(!registry.remove(INTEGER));
	assert!(!registry.contains(INTEGER));
	assert_eq!(registry.ids().collect::<Vec<_>>(), [IDENTIFIER, FLOAT]);

	// Integers now fall back to nothing, floats still match.
	assert_eq!(registry.find_matching_automaton("42"), None);
	assert_eq!(registry.longest_match("4.2"), Some(Match { automaton: FLOAT, len: 3 }));

	registry.clear();
	assert!(registry.is_empty());
	assert_eq!(registry.longest_match("abc"), None);
	assert!(Registry::new().is_empty());
}


#[test]
fn test_invalid_automata_never_match() {
	let mut registry = Registry::new();
	registry.add(Automaton::new("EMPTY", "empty", Kind::Dfa)).unwrap();

	assert_eq!(registry.find_matching_automaton(""), None);
	assert_eq!(registry.longest_match("abc"), None);
	assert!(registry.get("EMPTY").is_some());
}
