/// States reported by the YouTube IFrame player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Unstarted,
    Ended,
    Playing,
    Paused,
    Buffering,
    Cued,
    Unknown(i32),
}

impl PlayerState {
    pub fn from_code(code: i32) -> Self {
        match code {
            -1 => PlayerState::Unstarted,
            0 => PlayerState::Ended,
            1 => PlayerState::Playing,
            2 => PlayerState::Paused,
            3 => PlayerState::Buffering,
            5 => PlayerState::Cued,
            other => PlayerState::Unknown(other),
        }
    }
}

/// Play/pause flag handed to the embedded player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Playback {
    pub playing: bool,
}

impl Playback {
    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    /// Follow what the player reports. Reaching the end always pauses.
    pub fn observe(&mut self, state: PlayerState) {
        match state {
            PlayerState::Ended | PlayerState::Paused => self.playing = false,
            PlayerState::Playing => self.playing = true,
            _ => {}
        }
    }
}

pub fn embed_url(video_id: &str) -> String {
    format!(
        "https://www.youtube.com/embed/{}?enablejsapi=1&playsinline=1",
        urlencoding::encode(video_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_iframe_codes() {
        assert_eq!(PlayerState::from_code(-1), PlayerState::Unstarted);
        assert_eq!(PlayerState::from_code(0), PlayerState::Ended);
        assert_eq!(PlayerState::from_code(1), PlayerState::Playing);
        assert_eq!(PlayerState::from_code(5), PlayerState::Cued);
        assert_eq!(PlayerState::from_code(42), PlayerState::Unknown(42));
    }

    #[test]
    fn ended_forces_pause() {
        let mut playback = Playback::default();
        playback.toggle();
        assert!(playback.playing);

        playback.observe(PlayerState::Buffering);
        assert!(playback.playing);

        playback.observe(PlayerState::Ended);
        assert!(!playback.playing);
    }

    #[test]
    fn mirrors_play_and_pause() {
        let mut playback = Playback::default();
        playback.observe(PlayerState::Playing);
        assert!(playback.playing);
        playback.observe(PlayerState::Paused);
        assert!(!playback.playing);
    }

    #[test]
    fn embed_url_encodes_id() {
        assert_eq!(
            embed_url("dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ?enablejsapi=1&playsinline=1"
        );
    }
}
