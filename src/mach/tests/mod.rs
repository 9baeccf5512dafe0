use crate::mach::{Halt, Io, Runtime, Transcript};

mod for_test;
mod gosub_test;

fn runtime() -> Runtime<Transcript> {
    Runtime::new(Transcript::new())
}

fn run(runtime: &mut Runtime<Transcript>, lines: &[&str]) -> String {
    for line in lines {
        match runtime.enter(line) {
            Ok(()) | Err(Halt::End) => {}
            Err(Halt::Quit) => runtime.io_mut().print_msg("QUIT", true).unwrap(),
            Err(Halt::Error(e)) => runtime
                .io_mut()
                .print_msg(&format!("?{}", e), true)
                .unwrap(),
        }
    }
    runtime.io_mut().take_output()
}
