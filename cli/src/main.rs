use std::{error::Error, io::Write, path::PathBuf, str::FromStr};

use clap::Parser;

use korfcube::prelude::*;

/// Optimal Rubik's Cube solver using pattern databases and IDA*
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Build the three pattern databases and write them to the data directory
	#[arg(long, default_value_t = false)]
	generate: bool,

	/// Solve the cube (the output is a move sequence)
	#[arg(long, default_value_t = false)]
	solve: bool,

	/// Directory holding the heuristic table files
	#[arg(long, default_value = "data")]
	data: PathBuf,

	/// Read the cube from a text file (54 facelet symbols, whitespace is ignored)
	#[arg(short, long)]
	file: Option<PathBuf>,

	/// Set the cube from a string (the same format as when you output the cube via the "-c"-flag)
	#[arg(long, default_value_t = String::new())]
	set: String,

	/// Use a sequence to apply on the cube, e.g. "R1 G2 W3"
	#[arg(short, default_value_t = String::new())]
	sequence: String,

	/// Scramble the cube with 100 random moves
	#[arg(short, long, default_value_t = false)]
	random: bool,

	/// Output length of the solution (if --solve is used)
	#[arg(short, long, default_value_t = false)]
	length: bool,

	/// Print search diagnostics while solving
	#[arg(short, long, default_value_t = false)]
	verbose: bool,

	/// Output the cube as a string rather than colored
	#[arg(short, long, default_value_t = false)]
	char_print: bool,

	/// Print the output to a file rather to the stdout
	#[arg(short, long, default_value_t = String::new())]
	output: String,
}

fn main() -> Result<(), Box<dyn Error>> {
	#[cfg(debug_assertions)]
	std::env::set_var("RUST_BACKTRACE", "1");

	let args = Args::parse();
	// Whether to redirect it to the stdout or a file
	let mut out: Box<dyn std::io::Write> = if args.output.is_empty() {
		Box::new(std::io::stdout())
	} else {
		Box::new(std::fs::File::create(&args.output)?)
	};

	// Build the heuristic tables and exit
	if args.generate {
		println!("Generating the pattern databases, this may take a while...");
		generate_to_dir(&args.data)?;
		println!("Saved tables to {}", args.data.display());
		return Ok(());
	}

	let mut cube = FaceletCube::default();

	// Generate a random input cube
	if args.random {
		cube = FaceletCube::random();
	}

	// Read a cube out of a text file
	if let Some(path) = &args.file {
		let text = std::fs::read_to_string(path)?;
		cube = FaceletCube::from_str(&text)?;
	}

	// Parse a cube out of the cube string
	if !args.set.is_empty() {
		cube = FaceletCube::from_str(&args.set)?;
	}

	// Applies turns from args
	if !args.sequence.is_empty() {
		let seq = parse_moves(&args.sequence)?;
		cube = cube.apply_moves(&seq);
	}

	// Solve the cube and only output the sequence
	if args.solve {
		let [corners, edges_one, edges_two] = load_all(&args.data)?;
		let solver = Solver::new(corners, edges_one, edges_two);

		let solution = solver.solve_verbose(&cube, args.verbose);

		if args.length {
			writeln!(out.as_mut(), "{} (len={})", solution, solution.len())?;
		} else {
			writeln!(out.as_mut(), "{}", solution)?;
		}
		return Ok(());
	}

	// Print the resulting cube (either as a string or with colors)
	if args.char_print {
		let s: String = cube.into();
		writeln!(out.as_mut(), "{}", s)?;
	} else {
		cube.print();
	}

	Ok(())
}
