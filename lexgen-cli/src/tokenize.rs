use std::fs;
use std::path::PathBuf;

use clap::Args;
use lexgen::lexer::Lexer;

use crate::spec_file;
use crate::LexgenArgs;

#[derive(Debug, Args)]
pub struct TokenizeArgs {
    /// Spec file of `NAME regex` rules, one per line.
    pub spec: PathBuf,

    /// File whose contents are tokenized against the compiled spec.
    pub input: PathBuf,
}

pub fn tokenize(main_args: &LexgenArgs, args: &TokenizeArgs) {
    let log = |s: &str| {
        if !main_args.no_log {
            println!("{s}")
        }
    };
    macro_rules! log {
        ($($t:tt)*) => (log(&format!($($t)*)))
    }

    let rules = match spec_file::load(&args.spec) {
        Ok(rules) => rules,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    let lexer = match Lexer::new(rules) {
        Ok(lexer) => lexer,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    log!("Compiled spec from {}", args.spec.display());

    let input = match fs::read_to_string(&args.input) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("error reading {:?}: {e}", args.input);
            return;
        }
    };

    match lexer.tokenize(&input) {
        Ok(tokens) => {
            for token in tokens {
                println!("{}: {:?}", token.name, token.lexeme);
            }
        }
        Err(e) => eprintln!("{e}"),
    }
}
