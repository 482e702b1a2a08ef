use std::io::{self, BufRead, Stdin, Stdout, Write};

/// Line-based interactive prompts. An empty answer selects the default.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Prompter::new(stdin.lock(), io::stdout())
    }
}

impl<R, W> Prompter<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn ask(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{label}: ")?;
        self.read_answer()
    }

    pub fn ask_with_default(&mut self, label: &str, default: &str) -> io::Result<String> {
        write!(self.output, "{label} [{default}]: ")?;
        let answer = self.read_answer()?;

        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    pub fn println(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    fn read_answer(&mut self) -> io::Result<String> {
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;

        Ok(line.trim().to_string())
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
