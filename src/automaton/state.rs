use std::collections::BTreeSet;


/// States are addressed by a stable textual id, never by location.
pub type StateId = Box<str>;

/// Sets of states are kept ordered, so that iteration and naming are deterministic.
pub type StateSet = BTreeSet<StateId>;


/// A node in an automaton.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
	pub id: StateId,
	/// Display name, defaults to the id.
	pub label: Box<str>,
	pub is_initial: bool,
	pub is_final: bool,
	/// Editor placement. Irrelevant to every algorithm.
	pub position: (f64, f64),
}


impl State {
	pub fn new<I>(id: I) -> Self
	where
		I: Into<StateId>,
	{
		let id = id.into();

		Self {
			label: id.clone(),
			id,
			is_initial: false,
			is_final: false,
			position: (0.0, 0.0),
		}
	}


	pub fn with_label<L>(mut self, label: L) -> Self
	where
		L: Into<Box<str>>,
	{
		self.label = label.into();
		self
	}


	pub fn initial(mut self) -> Self {
		self.is_initial = true;
		self
	}


	pub fn accepting(self) -> Self {
		self.accepting_if(true)
	}


	pub fn accepting_if(mut self, is_final: bool) -> Self {
		self.is_final = is_final;
		self
	}


	pub fn at(mut self, x: f64, y: f64) -> Self {
		self.position = (x, y);
		self
	}
}
