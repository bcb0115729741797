use basic::mach::{Interp, Program};
use basic::term::Console;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Console with scripted input and captured output.
pub struct TestConsole {
    output: Rc<RefCell<String>>,
    input: VecDeque<String>,
}

impl Console for TestConsole {
    fn write(&mut self, text: &str) {
        self.output.borrow_mut().push_str(text);
    }

    fn read_line(&mut self) -> Option<String> {
        self.input.pop_front()
    }
}

/// Load `source` as a listing, run it, and return everything printed.
/// Errors append as a `?MESSAGE` line, the way the binary reports
/// them.
pub fn run(source: &str) -> String {
    run_with_input(source, &[])
}

pub fn run_with_input(source: &str, input: &[&str]) -> String {
    let mut program = Program::new();
    for line in source.lines() {
        if let Err(error) = program.load_str(line) {
            return format!("?{}\n", error);
        }
    }
    let output = Rc::new(RefCell::new(String::new()));
    let console = TestConsole {
        output: output.clone(),
        input: input.iter().map(|s| s.to_string()).collect(),
    };
    let mut interp = Interp::new(program, Box::new(console));
    if let Err(error) = interp.run() {
        output.borrow_mut().push_str(&format!("?{}\n", error));
    }
    let result = output.borrow().clone();
    result
}
