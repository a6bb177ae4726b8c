//! Scrolling text console backing the display log.
//!
//! Mirrors the layout of a small LCD log: one header line, one footer line
//! and a window of `LINES` user lines in between. Lines longer than `WIDTH`
//! characters wrap, and once the window is full the oldest line scrolls out.

use core::fmt;

use heapless::{Deque, String};

use crate::blinker::LogSink;

pub struct LineLog<const LINES: usize, const WIDTH: usize> {
    header: String<WIDTH>,
    footer: String<WIDTH>,
    lines: Deque<String<WIDTH>, LINES>,
    pending: String<WIDTH>,
    scrolled: u32,
}

impl<const LINES: usize, const WIDTH: usize> LineLog<LINES, WIDTH> {
    pub const fn new() -> Self {
        Self {
            header: String::new(),
            footer: String::new(),
            lines: Deque::new(),
            pending: String::new(),
            scrolled: 0,
        }
    }

    pub fn set_header(&mut self, text: &str) {
        truncate_into(&mut self.header, text);
    }

    pub fn set_footer(&mut self, text: &str) {
        truncate_into(&mut self.footer, text);
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn footer(&self) -> &str {
        &self.footer
    }

    /// Completed lines, oldest first.
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(|line| line.as_str())
    }

    pub fn last_line(&self) -> Option<&str> {
        self.lines.back().map(|line| line.as_str())
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Text written since the last line break.
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Number of lines that have scrolled out of the window.
    pub fn scrolled(&self) -> u32 {
        self.scrolled
    }

    /// Running count of lines ever completed. Take it before a write and pass
    /// it to [`LineLog::lines_since`] to get the lines that write produced.
    pub fn completed(&self) -> u32 {
        self.scrolled.wrapping_add(self.lines.len() as u32)
    }

    /// Lines completed after `mark` was taken that are still in the window,
    /// oldest first.
    pub fn lines_since(&self, mark: u32) -> impl Iterator<Item = &str> + '_ {
        let fresh = self.completed().wrapping_sub(mark) as usize;
        self.lines().skip(self.lines.len().saturating_sub(fresh))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.pending.clear();
    }

    fn new_line(&mut self) {
        let line = core::mem::take(&mut self.pending);
        if self.lines.is_full() {
            self.lines.pop_front();
            self.scrolled = self.scrolled.wrapping_add(1);
        }
        // room was made above
        let _ = self.lines.push_back(line);
    }

    fn push_char(&mut self, c: char) {
        if c == '\n' {
            self.new_line();
            return;
        }
        if c == '\r' {
            return;
        }
        if self.pending.push(c).is_err() {
            self.new_line();
            // a single char always fits an empty line unless WIDTH is zero
            let _ = self.pending.push(c);
        }
    }
}

impl<const LINES: usize, const WIDTH: usize> Default for LineLog<LINES, WIDTH> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const LINES: usize, const WIDTH: usize> fmt::Write for LineLog<LINES, WIDTH> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        s.chars().for_each(|c| self.push_char(c));
        Ok(())
    }
}

impl<const LINES: usize, const WIDTH: usize> LogSink for LineLog<LINES, WIDTH> {
    fn emit(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        fmt::Write::write_fmt(self, args)
    }
}

fn truncate_into<const N: usize>(dst: &mut String<N>, text: &str) {
    dst.clear();
    for c in text.chars() {
        if dst.push(c).is_err() {
            break;
        }
    }
}
