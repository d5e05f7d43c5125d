use std::{
	convert::TryFrom,
	fs::{self, File},
	io,
	path::{Path, PathBuf},
};

use crate::automaton::{Automaton, Definition};


pub fn test_dir<P, F>(path: P, mut test: F) -> io::Result<()>
where
	P: AsRef<Path>,
	F: FnMut(&Path, File) -> io::Result<()>,
{
	let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	dir.push(path);

	fn run<F>(dir: &Path, test: &mut F) -> io::Result<()>
	where
		F: FnMut(&Path, File) -> io::Result<()>,
	{
		let mut entries = fs::read_dir(dir)?
			.map(|entry| entry.map(|entry| entry.path()))
			.collect::<io::Result<Vec<_>>>()?;
		entries.sort();

		for path in entries {
			if path.is_dir() {
				run(&path, test)?;
			} else {
				let file = File::open(&path)?;
				test(&path, file)?;
			}
		}

		Ok(())
	}

	run(&dir, &mut test)
}


/// Load every automaton definition in a directory.
pub fn load_dir<P, F>(path: P, mut test: F) -> io::Result<()>
where
	P: AsRef<Path>,
	F: FnMut(&Path, Automaton),
{
	test_dir(
		path,
		|path, file| {
			let definition: Definition = serde_json::from_reader(file)?;
			let automaton = Automaton::try_from(definition)
				.unwrap_or_else(|error| panic!("{}: {}", path.display(), error));

			test(path, automaton);

			Ok(())
		}
	)
}


/// All strings over the alphabet up to the given length, including the empty string.
pub fn strings(alphabet: &[char], max_len: usize) -> Vec<String> {
	let mut strings = vec![String::new()];
	let mut frontier = vec![String::new()];

	for _ in 0 .. max_len {
		frontier = frontier
			.iter()
			.flat_map(
				|prefix| alphabet.iter().map(move |c| {
					let mut string = prefix.clone();
					string.push(*c);
					string
				})
			)
			.collect();

		strings.extend(frontier.iter().cloned());
	}

	strings
}


/// Check that both automata agree on every string up to the given length over the union
/// of their alphabets, plus a symbol neither reads.
pub fn assert_same_language(expected: &Automaton, actual: &Automaton, max_len: usize) {
	let mut alphabet: Vec<char> = expected
		.alphabet()
		.union(actual.alphabet())
		.copied()
		.collect();
	alphabet.push('\u{2603}');

	for string in strings(&alphabet, max_len) {
		assert_eq!(
			expected.accepts(&string),
			actual.accepts(&string),
			"'{}' and '{}' disagree on {:?}",
			expected.id(),
			actual.id(),
			string
		);
	}
}
