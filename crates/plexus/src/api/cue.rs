use std::fmt;

/// Failure to play the audio cue. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CueError(pub String);

impl fmt::Display for CueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "audio cue failed: {}", self.0)
    }
}

impl std::error::Error for CueError {}

/// A short sound played when the tempo drops back to the slow phase.
/// Implementations are best-effort: callers ignore errors.
pub trait AudioCue {
    fn play(&mut self) -> Result<(), CueError>;
}

/// Cue that does nothing. Used when the cue is disabled or unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentCue;

impl AudioCue for SilentCue {
    fn play(&mut self) -> Result<(), CueError> {
        Ok(())
    }
}
