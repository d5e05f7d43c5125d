use std::convert::TryFrom;

use serde::{Deserialize, Serialize};

use super::{Automaton, Error, Kind, State, Symbol, Transition};


/// A state as written in a definition file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateDefinition {
	pub id: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
	#[serde(default)]
	pub initial: bool,
	#[serde(default, rename = "final")]
	pub accepting: bool,
}


/// A transition as written in a definition file. Symbols use the textual form of
/// `Symbol::parse`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionDefinition {
	pub from: String,
	pub to: String,
	pub symbols: Vec<String>,
}


/// The serializable description of an automaton, used to load automata from JSON and to
/// print the results of conversions.
///
/// ```json
/// {
///   "id": "AB",
///   "type": "NFA",
///   "states": [{ "id": "q0", "initial": true }, { "id": "q1", "final": true }],
///   "transitions": [{ "from": "q0", "to": "q1", "symbols": ["a", "b"] }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
	pub id: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// When omitted, the kind is detected from the transitions.
	#[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
	pub kind: Option<Kind>,
	pub states: Vec<StateDefinition>,
	#[serde(default)]
	pub transitions: Vec<TransitionDefinition>,
	/// Extra alphabet symbols that no transition reads.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub alphabet: Vec<char>,
}


impl TryFrom<Definition> for Automaton {
	type Error = Error;

	fn try_from(definition: Definition) -> Result<Self, Error> {
		let name = match definition.name {
			Some(name) => name,
			None => definition.id.clone(),
		};
		let mut automaton = Automaton::new(
			definition.id,
			name,
			definition.kind.unwrap_or(Kind::Nfa),
		);

		for state in definition.states {
			let label = match state.label {
				Some(label) => label,
				None => state.id.clone(),
			};
			let mut built = State::new(state.id)
				.with_label(label)
				.accepting_if(state.accepting);
			built.is_initial = state.initial;

			automaton.add_state(built)?;
		}

		for transition in definition.transitions {
			let symbols = transition
				.symbols
				.iter()
				.map(|symbol| Symbol::parse(symbol))
				.collect::<Result<Vec<_>, _>>()
				.map_err(|error| error.within(automaton.id()))?;

			automaton.add_transition(
				Transition::with_symbols(transition.from, transition.to, symbols)
			)?;
		}

		for symbol in definition.alphabet {
			automaton.add_to_alphabet(symbol);
		}

		if definition.kind.is_none() {
			automaton.detect_type();
		}

		Ok(automaton)
	}
}


impl From<&Automaton> for Definition {
	fn from(automaton: &Automaton) -> Self {
		let states = automaton
			.states()
			.map(
				|state| StateDefinition {
					id: state.id.to_string(),
					label: if state.label == state.id { None } else { Some(state.label.to_string()) },
					initial: state.is_initial,
					accepting: state.is_final,
				}
			)
			.collect();

		let transitions = automaton
			.transitions()
			.iter()
			.map(
				|transition| TransitionDefinition {
					from: transition.from.to_string(),
					to: transition.to.to_string(),
					symbols: transition
						.symbols
						.iter()
						.map(|symbol| symbol.escaped().into_owned())
						.collect(),
				}
			)
			.collect::<Vec<_>>();

		let read: std::collections::BTreeSet<char> = automaton
			.transitions()
			.iter()
			.flat_map(|transition| transition.symbols.iter().filter_map(Symbol::as_char))
			.collect();

		Self {
			id: automaton.id().to_owned(),
			name: Some(automaton.name().to_owned()),
			kind: Some(automaton.kind()),
			states,
			transitions,
			alphabet: automaton.alphabet().difference(&read).copied().collect(),
		}
	}
}
