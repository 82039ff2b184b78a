use super::DisplaySink;

/// Identifies the timer chain allowed to write to a [`Display`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WriterId(u64);

/// Owned display with a single writer. Writes from anyone but the current
/// claimant are dropped.
pub struct Display<D> {
    sink: D,
    writer: Option<WriterId>,
    issued: u64,
}

impl<D: DisplaySink> Display<D> {
    pub fn new(sink: D) -> Self {
        Self {
            sink,
            writer: None,
            issued: 0,
        }
    }

    /// Hand the display to a new writer, revoking the previous one.
    pub fn claim(&mut self) -> WriterId {
        self.issued += 1;
        let id = WriterId(self.issued);
        self.writer = Some(id);
        id
    }

    pub fn release(&mut self, id: WriterId) {
        if self.writer == Some(id) {
            self.writer = None;
        }
    }

    pub fn show(&mut self, id: WriterId, text: String) -> bool {
        if self.writer != Some(id) {
            return false;
        }
        self.sink.set_text(&text);
        true
    }

    pub fn clear(&mut self, id: WriterId) -> bool {
        self.show(id, String::new())
    }
}
