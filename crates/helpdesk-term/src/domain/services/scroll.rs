#[cfg(test)]
#[path = "scroll_test.rs"]
mod tests;

/// Line-offset scroll state for the transcript viewport.
#[derive(Default)]
pub struct Scroll {
    pub position: u16,
    entries: u16,
    viewport: u16,
}

impl Scroll {
    pub fn set_state(&mut self, entries: usize, viewport: usize) {
        self.entries = entries.min(u16::MAX as usize) as u16;
        self.viewport = viewport.min(u16::MAX as usize) as u16;
        self.position = self.position.min(self.max_position());
    }

    pub fn up(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    pub fn down(&mut self) {
        self.position = (self.position + 1).min(self.max_position());
    }

    pub fn up_page(&mut self) {
        self.position = self.position.saturating_sub(self.viewport);
    }

    pub fn down_page(&mut self) {
        self.position = (self.position + self.viewport).min(self.max_position());
    }

    pub fn last(&mut self) {
        self.position = self.max_position();
    }

    pub fn is_position_at_last(&self) -> bool {
        self.position == self.max_position()
    }

    fn max_position(&self) -> u16 {
        self.entries.saturating_sub(self.viewport)
    }
}
