//! Animation timing
//!
//! The clock only counts frames. What each frame looks like is decided by the
//! renderer from the `(kind, frames_remaining)` pair it is handed.

/// Named presentation timings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    /// Pop of the tile that was just typed
    TypeLetter,
    /// Staggered reveal of every submitted row, played at startup
    FlipAll,
    /// Staggered reveal of the row just submitted
    FlipLine,
    /// Horizontal shake of a rejected row
    InvalidWord,
    /// Reveal plus hop of the winning row
    Success,
}

impl AnimationKind {
    /// Total length in frames
    #[must_use]
    pub const fn length(self) -> u8 {
        match self {
            Self::TypeLetter => 5,
            Self::FlipAll => 35,
            Self::FlipLine => 55,
            Self::InvalidWord => 20,
            Self::Success => 100,
        }
    }
}

/// What the renderer sees for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationFrame {
    pub kind: AnimationKind,
    pub frames_remaining: u8,
}

impl AnimationFrame {
    /// True when no animation-specific transform applies
    #[must_use]
    pub const fn is_idle(self) -> bool {
        self.frames_remaining == 0
    }
}

/// Frame countdown for the current animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationClock {
    kind: AnimationKind,
    frames_remaining: u8,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self {
            kind: AnimationKind::TypeLetter,
            frames_remaining: 0,
        }
    }
}

impl AnimationClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `kind`, replacing whatever was playing
    pub fn start(&mut self, kind: AnimationKind) {
        self.kind = kind;
        self.frames_remaining = kind.length();
    }

    /// Current frame without advancing
    #[must_use]
    pub const fn current(&self) -> AnimationFrame {
        AnimationFrame {
            kind: self.kind,
            frames_remaining: self.frames_remaining,
        }
    }

    /// Return the frame to render now, then advance by one
    pub fn tick(&mut self) -> AnimationFrame {
        let frame = self.current();
        self.frames_remaining = self.frames_remaining.saturating_sub(1);
        frame
    }

    #[must_use]
    pub const fn kind(&self) -> AnimationKind {
        self.kind
    }

    #[must_use]
    pub const fn frames_remaining(&self) -> u8 {
        self.frames_remaining
    }

    #[must_use]
    pub const fn is_idle(&self) -> bool {
        self.frames_remaining == 0
    }
}
