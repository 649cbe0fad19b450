//! Display for the transcript as a whole.

use std::fmt;

use crate::transcript::Transcript;

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No messages yet.");
        }
        for message in self.messages() {
            write!(f, "{message}")?;
        }
        Ok(())
    }
}
