use std::path::PathBuf;

use clap::Args;
use lexgen::lexer::Lexer;

use crate::spec_file;
use crate::LexgenArgs;

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Spec file of `NAME regex` rules, one per line.
    pub spec: PathBuf,
}

pub fn compile(main_args: &LexgenArgs, args: &CompileArgs) {
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
    log!("Loaded {} rule(s) from {}", rules.len(), args.spec.display());

    match Lexer::new(rules) {
        Ok(_) => println!("OK: spec compiles to a single DFA"),
        Err(e) => eprintln!("{e}"),
    }
}
