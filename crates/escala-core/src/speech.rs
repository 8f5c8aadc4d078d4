//! Speech playback state
//!
//! One utterance plays at a time. Every start cancels whatever is in flight
//! and gets a fresh ticket; the end callback of a cancelled utterance
//! carries an old ticket and is ignored.

use crate::domain::{ItineraryEntry, Pronunciation};

pub const GUIDE_LANG: &str = "es-ES";
pub const GUIDE_RATE: f32 = 0.95;
pub const PHRASE_LANG: &str = "ca-ES";
pub const PHRASE_RATE: f32 = 0.85;

/// Text to speak and the voice settings for it
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    /// Identifies the source so the UI can show which item is playing
    pub key: String,
    pub text: String,
    pub lang: &'static str,
    pub rate: f32,
}

impl SpeechRequest {
    pub fn audio_guide(entry: &ItineraryEntry) -> Option<Self> {
        let text = entry.audio_guide.as_deref()?.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            key: format!("guide:{}", entry.id),
            text: text.to_string(),
            lang: GUIDE_LANG,
            rate: GUIDE_RATE,
        })
    }

    pub fn phrase(phrase: &Pronunciation) -> Self {
        Self {
            key: format!("phrase:{}", phrase.word),
            text: phrase.word.clone(),
            lang: PHRASE_LANG,
            rate: PHRASE_RATE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackCommand {
    /// Cancel anything in flight, then speak; report `ticket` on end
    Start { request: SpeechRequest, ticket: u64 },
    /// Cancel anything in flight
    Stop,
}

#[derive(Debug, Clone, Default)]
pub struct PlaybackState {
    playing: Option<(String, u64)>,
    next_ticket: u64,
}

impl PlaybackState {
    pub fn playing(&self) -> Option<&str> {
        self.playing.as_ref().map(|(key, _)| key.as_str())
    }

    pub fn is_playing(&self, key: &str) -> bool {
        self.playing() == Some(key)
    }

    /// Play/stop button: stops the same item, otherwise switches to it
    pub fn toggle(&mut self, request: SpeechRequest) -> PlaybackCommand {
        if self.is_playing(&request.key) {
            self.stop()
        } else {
            self.start(request)
        }
    }

    /// Always (re)start from the beginning
    pub fn start(&mut self, request: SpeechRequest) -> PlaybackCommand {
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.playing = Some((request.key.clone(), ticket));
        PlaybackCommand::Start { request, ticket }
    }

    pub fn stop(&mut self) -> PlaybackCommand {
        self.playing = None;
        PlaybackCommand::Stop
    }

    /// End callback. Returns whether it cleared the current playback.
    pub fn finished(&mut self, ticket: u64) -> bool {
        match &self.playing {
            Some((_, current)) if *current == ticket => {
                self.playing = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{barcelona_itinerary, phrasebook};

    fn ticket(cmd: &PlaybackCommand) -> u64 {
        match cmd {
            PlaybackCommand::Start { ticket, .. } => *ticket,
            PlaybackCommand::Stop => panic!("expected start"),
        }
    }

    #[test]
    fn test_requests_carry_voice_settings() {
        let phrase = SpeechRequest::phrase(&phrasebook()[0]);
        assert_eq!(phrase.lang, "ca-ES");
        assert_eq!(phrase.text, "Bon dia");

        let entries = barcelona_itinerary();
        let guided = entries.iter().find_map(SpeechRequest::audio_guide).expect("catalog has a guide");
        assert_eq!(guided.lang, "es-ES");
        assert_eq!(guided.rate, 0.95);
        assert!(SpeechRequest::audio_guide(&entries[0]).is_none());
    }

    #[test]
    fn test_toggle_same_item_stops() {
        let mut state = PlaybackState::default();
        let req = SpeechRequest::phrase(&phrasebook()[1]);
        assert!(matches!(state.toggle(req.clone()), PlaybackCommand::Start { .. }));
        assert!(state.is_playing(&req.key));
        assert_eq!(state.toggle(req), PlaybackCommand::Stop);
        assert!(state.playing().is_none());
    }

    #[test]
    fn test_stale_end_does_not_clear_newer_playback() {
        let phrases = phrasebook();
        let mut state = PlaybackState::default();
        let first = ticket(&state.toggle(SpeechRequest::phrase(&phrases[0])));
        let second = ticket(&state.toggle(SpeechRequest::phrase(&phrases[1])));

        assert!(!state.finished(first));
        assert_eq!(state.playing(), Some("phrase:Gràcies"));
        assert!(state.finished(second));
        assert!(state.playing().is_none());
    }

    #[test]
    fn test_restart_same_item_ignores_old_end() {
        let mut state = PlaybackState::default();
        let req = SpeechRequest::phrase(&phrasebook()[0]);
        let old = ticket(&state.start(req.clone()));
        let new = ticket(&state.start(req));
        assert!(!state.finished(old));
        assert!(state.finished(new));
    }
}
