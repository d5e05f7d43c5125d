mod args;
mod io;
mod term;

use lexmata::{
	convert,
	lexer::Analysis,
	minimize,
	registry::Registry,
	Automaton,
};

use args::{Args, Command};
use term::color;


/// How many diagnostics are printed at most.
const MAX_ERRORS: usize = 20;


fn main() -> ! {
	let command = match args::parse(std::env::args_os()) {
		Ok(command) => command,
		Err(error) => {
			eprint!("{}", error);
			std::process::exit(1)
		}
	};

	let result = match command {
		Command::Run(args) => run(args),
		Command::Help(msg) | Command::Version(msg) => {
			println!("{}", msg);
			std::process::exit(0)
		},
	};

	let exit_code = match result {
		Ok(code) => code,
		Err(error) => {
			eprintln!("{}: {}", color::error(), error);
			1
		}
	};

	std::process::exit(exit_code)
}


fn run(args: Args) -> Result<i32, io::Error> {
	match args {
		Args::Tokenize { automata, defaults, options, source } => {
			let mut registry = if defaults { Registry::default() } else { Registry::new() };

			for path in &automata {
				let automaton = io::load_automaton(path)?;
				if let Err(error) = registry.add(automaton) {
					eprintln!("{}: {}", color::warning(), error);
				}
			}

			let source = io::read_source(source.as_deref())?;
			let analysis = Analysis::tokenize(&source, &registry, options);

			for token in &analysis.tokens {
				println!("{}", token);
			}

			for error in analysis.errors.iter().take(MAX_ERRORS) {
				eprintln!("{}: {}", color::error(), error);
			}

			Ok(if analysis.has_errors() { 2 } else { 0 })
		}

		Args::Convert { automaton } => {
			let nfa = io::load_automaton(&automaton)?;
			Ok(print_result(&nfa, convert(&nfa), "conversion requires an initial state"))
		}

		Args::Minimize { automaton } => {
			let dfa = io::load_automaton(&automaton)?;
			Ok(print_result(&dfa, minimize(&dfa), "minimization requires a valid DFA"))
		}

		Args::Check { automaton, inputs } => {
			let automaton = io::load_automaton(&automaton)?;

			println!("{}", automaton);
			println!("valid: {}", automaton.is_valid());
			println!("deterministic: {}", automaton.is_deterministic());

			for input in &inputs {
				if automaton.accepts(input) {
					println!("{} {:?}", color::Fg(color::Green, "accept"), input);
				} else {
					println!("{} {:?}", color::Fg(color::Red, "reject"), input);
				}
			}

			Ok(if automaton.is_valid() { 0 } else { 2 })
		}
	}
}


/// Print the resulting automaton as JSON, or explain why there is none.
fn print_result(input: &Automaton, result: Option<Automaton>, reason: &str) -> i32 {
	match result {
		Some(automaton) => {
			println!("{}", io::to_json(&automaton));
			0
		}

		None => {
			eprintln!(
				"{}: automaton '{}': {}.",
				color::error(),
				input.id(),
				reason
			);
			2
		}
	}
}
