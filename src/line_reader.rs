use rustyline::error::ReadlineError;
use rustyline::history::FileHistory;
use rustyline::Editor;

pub struct LineReader {
    rl: Editor<(), FileHistory>,
    history_file: String,
    prompt: String,
}

impl Drop for LineReader {
    fn drop(&mut self) {
        if let Err(err) = self.rl.save_history(&self.history_file) {
            tracing::warn!(file = %self.history_file, %err, "could not save history");
        }
    }
}

pub enum LineReadStatus {
    Line(String),
    Done,
}

impl LineReader {
    pub fn new(history_file: &str, prompt: &str) -> Result<LineReader, ReadlineError> {
        let mut rl = Editor::<(), FileHistory>::new()?;
        if rl.load_history(history_file).is_err() {
            tracing::debug!(file = history_file, "no history loaded");
        }
        Ok(LineReader {
            rl,
            history_file: history_file.into(),
            prompt: prompt.into(),
        })
    }

    pub fn readline(&mut self) -> LineReadStatus {
        match self.rl.readline(&self.prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.rl.add_history_entry(line.as_str()).ok();
                }
                LineReadStatus::Line(line)
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => LineReadStatus::Done,
            Err(err) => {
                tracing::warn!(%err, "line editor failed");
                LineReadStatus::Done
            }
        }
    }
}
