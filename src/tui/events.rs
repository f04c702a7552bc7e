use std::io::BufRead;

use crate::error::Result;

pub(crate) trait EventSource {
    fn next_event(&mut self) -> Result<Event>;
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Event {
    /// One line of input without its line terminator.
    Line(String),
    /// Input is exhausted.
    Quit,
}

/// LineEvents turns each line read from `R` into an event.
pub(crate) struct LineEvents<R: BufRead> {
    r: R,
}

impl<R: BufRead> LineEvents<R> {
    pub(crate) fn new(r: R) -> Self {
        Self { r }
    }
}

impl<R: BufRead> EventSource for LineEvents<R> {
    fn next_event(&mut self) -> Result<Event> {
        let mut line = String::new();
        if self.r.read_line(&mut line)? == 0 {
            return Ok(Event::Quit);
        }
        let trimmed = line.trim_end_matches(|c: char| c == '\r' || c == '\n');
        Ok(Event::Line(trimmed.to_string()))
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn lines_then_quit() {
        let mut events = LineEvents::new(Cursor::new("-2\r\n\n7"));
        assert_eq!(events.next_event().unwrap(), Event::Line("-2".into()));
        assert_eq!(events.next_event().unwrap(), Event::Line("".into()));
        assert_eq!(events.next_event().unwrap(), Event::Line("7".into()));
        assert_eq!(events.next_event().unwrap(), Event::Quit);
        assert_eq!(events.next_event().unwrap(), Event::Quit);
    }
}
