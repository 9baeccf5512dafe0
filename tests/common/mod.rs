use tinybasic::mach::{Runtime, Transcript};
use tinybasic::term;

pub fn runtime() -> Runtime<Transcript> {
    Runtime::new(Transcript::new())
}

/// Enters each line as the console would and returns everything printed.
pub fn exec(runtime: &mut Runtime<Transcript>, lines: &[&str]) -> String {
    for line in lines {
        if let Err(halt) = runtime.enter(line) {
            term::report(runtime, halt);
        }
    }
    runtime.io_mut().take_output()
}
