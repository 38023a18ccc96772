mod compile;
mod spec_file;
mod tokenize;

use clap::{Parser, Subcommand};

use compile::{compile, CompileArgs};
use tokenize::{tokenize, TokenizeArgs};

/// Compiles token specs into automata and tokenizes files against them.
#[derive(Debug, Parser)]
#[command(name = "lexgen", version, about)]
struct LexgenArgs {
    /// Suppress informational logging; only print results and errors.
    #[arg(short, long, global = true)]
    no_log: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compile a spec file and report whether it builds a valid automaton.
    Compile(CompileArgs),
    /// Compile a spec file and tokenize an input file against it.
    Tokenize(TokenizeArgs),
}

fn main() {
    let args = LexgenArgs::parse();
    match &args.command {
        Command::Compile(compile_args) => compile(&args, compile_args),
        Command::Tokenize(tokenize_args) => tokenize(&args, tokenize_args),
    }
}
