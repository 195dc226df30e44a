use std::time::Duration;

/// Delay before a shown banner hides itself.
pub const BANNER_TIMEOUT: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BannerKind {
    #[default]
    Success,
    Error,
}

impl BannerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BannerKind::Success => "success",
            BannerKind::Error => "error",
        }
    }
}

/// The single banner slot. Every `show` bumps the generation so a hide
/// scheduled for an older message leaves the current one alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Banner {
    pub message: String,
    pub kind: BannerKind,
    pub visible: bool,
    generation: u64,
}

impl Banner {
    pub fn show(&mut self, message: impl Into<String>, kind: BannerKind) -> u64 {
        self.generation += 1;
        self.message = message.into();
        self.kind = kind;
        self.visible = true;
        self.generation
    }

    /// Hides the banner if it still shows the message from `generation`.
    pub fn hide(&mut self, generation: u64) -> bool {
        if self.generation != generation {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
