/// A viewport bound to one buffer of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Index into the session's buffer list
    pub buffer: usize,
    /// Text rows (status line excluded)
    pub rows: usize,
    pub cols: usize,
    /// Screen origin, 0-indexed
    pub x: usize,
    pub y: usize,
}

impl Window {
    #[must_use]
    pub fn new(buffer: usize, rows: usize, cols: usize) -> Self {
        Window {
            buffer,
            rows,
            cols,
            x: 0,
            y: 0,
        }
    }

    /// Row that always shows the cursor line
    #[must_use]
    pub fn focus_row(&self) -> usize {
        self.rows.saturating_sub(1) / 2
    }

    pub fn set_size(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
    }
}
