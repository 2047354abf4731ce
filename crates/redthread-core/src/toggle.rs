//! Toggleable control state.
//!
//! Three small machines used by the floating controls:
//!
//! - [`Toggle`]: a plain on/off switch.
//! - [`ExpiringState`]: a value that auto-clears after a timer, with
//!   cancel-and-restart semantics. Arming hands back a token; a timer may
//!   only clear the state it armed, so a re-trigger supersedes the earlier
//!   timer instead of being cut short by it. Backs the "copied" feedback
//!   (keyed by which account was copied) and the music tooltip.
//! - [`AudioControl`]: the playback machine. Starting playback is
//!   asynchronous and may be rejected by the environment's autoplay policy;
//!   a rejection soft-fails back to Stopped and is logged, never surfaced.

use crate::content::Side;

/// Plain two-state toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Toggle {
    on: bool,
}

impl Toggle {
    pub fn toggle(&mut self) {
        self.on = !self.on;
    }

    pub fn force_on(&mut self) {
        self.on = true;
    }

    pub fn force_off(&mut self) {
        self.on = false;
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

/// Token identifying one arming of an [`ExpiringState`].
///
/// A timer holds the token from its own arming; `expire` with a stale token
/// is a no-op, which is what makes re-triggering supersede rather than stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetToken(u64);

/// A value that is present until a timer clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpiringState<T> {
    current: Option<T>,
    epoch: u64,
}

impl<T> Default for ExpiringState<T> {
    fn default() -> Self {
        Self {
            current: None,
            epoch: 0,
        }
    }
}

impl<T> ExpiringState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value and arm a fresh timer token. Any token from an earlier
    /// arming is invalidated.
    pub fn set(&mut self, value: T) -> ResetToken {
        self.epoch += 1;
        self.current = Some(value);
        ResetToken(self.epoch)
    }

    /// Timer continuation: clear the value only if `token` is still the
    /// latest arming. Returns whether anything was cleared.
    pub fn expire(&mut self, token: ResetToken) -> bool {
        if token.0 == self.epoch && self.current.is_some() {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// Clear immediately, invalidating outstanding timer tokens.
    pub fn clear(&mut self) {
        self.epoch += 1;
        self.current = None;
    }

    pub fn get(&self) -> Option<&T> {
        self.current.as_ref()
    }

    pub fn is_set(&self) -> bool {
        self.current.is_some()
    }
}

/// Copy feedback keyed by which account was copied; only one account shows
/// feedback at a time, and a new copy takes the slot over.
pub type CopyFeedback = ExpiringState<Side>;

/// Playback states of the music control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    /// Play requested, environment has not resolved it yet
    Starting,
    Playing,
}

/// What the view layer should do after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    /// Begin playback and report back via `play_resolved`/`play_rejected`
    Start,
    /// Pause playback
    Stop,
}

/// Background music playback machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AudioControl {
    state: PlaybackState,
}

impl AudioControl {
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Whether the control should render as active (starting counts, so the
    /// button reflects the tap immediately).
    pub fn is_engaged(&self) -> bool {
        self.state != PlaybackState::Stopped
    }

    /// User toggle. Returns the command the view layer must execute, or
    /// None while a start is already in flight.
    pub fn toggle(&mut self) -> Option<PlaybackCommand> {
        match self.state {
            PlaybackState::Stopped => {
                self.state = PlaybackState::Starting;
                Some(PlaybackCommand::Start)
            }
            PlaybackState::Starting => None,
            PlaybackState::Playing => {
                self.state = PlaybackState::Stopped;
                Some(PlaybackCommand::Stop)
            }
        }
    }

    /// Playback actually began.
    pub fn play_resolved(&mut self) {
        if self.state == PlaybackState::Starting {
            self.state = PlaybackState::Playing;
        }
    }

    /// The environment rejected playback (autoplay policy). Soft-fail back
    /// to Stopped; this is not an error the guest should see.
    pub fn play_rejected(&mut self) {
        if self.state == PlaybackState::Starting {
            tracing::debug!("playback rejected by environment, returning to stopped");
            self.state = PlaybackState::Stopped;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let mut toggle = Toggle::default();
        assert!(!toggle.is_on());
        toggle.toggle();
        assert!(toggle.is_on());
        toggle.toggle();
        assert!(!toggle.is_on());
        toggle.force_on();
        toggle.force_on();
        assert!(toggle.is_on());
        toggle.force_off();
        assert!(!toggle.is_on());
    }

    #[test]
    fn test_expiring_state_expires_with_current_token() {
        let mut feedback = CopyFeedback::new();
        let token = feedback.set(Side::Groom);
        assert_eq!(feedback.get(), Some(&Side::Groom));
        assert!(feedback.expire(token));
        assert!(!feedback.is_set());
    }

    #[test]
    fn test_retrigger_supersedes_earlier_timer() {
        let mut feedback = CopyFeedback::new();
        let first = feedback.set(Side::Groom);
        let second = feedback.set(Side::Bride);

        // The superseded timer fires late and must not clear the new state
        assert!(!feedback.expire(first));
        assert_eq!(feedback.get(), Some(&Side::Bride));

        assert!(feedback.expire(second));
        assert!(!feedback.is_set());
    }

    #[test]
    fn test_clear_invalidates_outstanding_tokens() {
        let mut tooltip: ExpiringState<()> = ExpiringState::new();
        let token = tooltip.set(());
        tooltip.clear();
        assert!(!tooltip.expire(token));
        assert!(!tooltip.is_set());
    }

    #[test]
    fn test_audio_start_resolves_to_playing() {
        let mut audio = AudioControl::default();
        assert_eq!(audio.toggle(), Some(PlaybackCommand::Start));
        assert_eq!(audio.state(), PlaybackState::Starting);
        audio.play_resolved();
        assert!(audio.is_playing());
    }

    #[test]
    fn test_audio_rejection_soft_fails_to_stopped() {
        let mut audio = AudioControl::default();
        audio.toggle();
        audio.play_rejected();
        assert_eq!(audio.state(), PlaybackState::Stopped);

        // A stale resolve after the rejection must not revive playback
        audio.play_resolved();
        assert_eq!(audio.state(), PlaybackState::Stopped);
    }

    #[test]
    fn test_audio_toggle_ignored_while_starting() {
        let mut audio = AudioControl::default();
        audio.toggle();
        assert_eq!(audio.toggle(), None);
        assert_eq!(audio.state(), PlaybackState::Starting);
    }

    #[test]
    fn test_audio_double_toggle_returns_to_stopped() {
        let mut audio = AudioControl::default();
        audio.toggle();
        audio.play_resolved();
        assert_eq!(audio.toggle(), Some(PlaybackCommand::Stop));
        assert_eq!(audio.state(), PlaybackState::Stopped);
    }
}
