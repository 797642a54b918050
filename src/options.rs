/// Recording configuration, resolved once from the command line at startup
/// and treated as read-only by everything downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Destination path. `None` leaves the choice to the recording writer
    /// ("Untitled Recording.html"); "-" means discard the output.
    pub outfile: Option<String>,
    /// Image codec extension for captured frames.
    pub image_ext: String,
    /// Suppress informational stdout.
    pub quiet: bool,
    /// Print detailed information to stdout. Exclusive with `quiet`.
    pub verbose: bool,
    /// Path to a custom cursor icon. Reserved; no subsystem consumes it yet.
    pub mouse_icon: Option<String>,
    /// Do not capture the mouse cursor. Reserved; no subsystem consumes it yet.
    pub no_mouse: bool,
    /// Seconds to wait before recording starts.
    pub countdown: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            outfile: None,
            image_ext: "png".to_string(),
            quiet: false,
            verbose: false,
            mouse_icon: None,
            no_mouse: false,
            countdown: 5,
        }
    }
}

impl Options {
    /// True when informational stdout should stay silent, either because
    /// `--quiet` was given or because the output goes to "-".
    pub fn stdout_suppressed(&self) -> bool {
        self.quiet || self.outfile.as_deref() == Some("-")
    }
}
