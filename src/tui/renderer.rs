use crate::error::Result;
use crate::tui::table::Table;

pub(crate) trait Renderer {
    /// Draw the whole table, replacing whatever was shown before.
    fn render(&mut self, table: &Table) -> Result<()>;
    /// Show a one-line message below the table, such as a rejected move.
    fn notice(&mut self, message: &str) -> Result<()>;
}
