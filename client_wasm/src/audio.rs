//! Fire-and-forget sound cues

use game_core::Events;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

pub const PING_URL: &str = "sounds/ping.ogg"; // wall hit
pub const PONG_URL: &str = "sounds/pong.ogg"; // paddle hit

pub struct Sounds {
    ping: Option<HtmlAudioElement>,
    pong: Option<HtmlAudioElement>,
}

impl Sounds {
    pub fn load(ping_url: &str, pong_url: &str) -> Self {
        Self {
            ping: load_clip(ping_url),
            pong: load_clip(pong_url),
        }
    }

    /// Play the cues for what happened during the last update
    pub fn play_events(&self, events: &Events) {
        if events.ball_hit_wall {
            play(self.ping.as_ref());
        }
        if events.ball_hit_paddle {
            play(self.pong.as_ref());
        }
    }
}

fn load_clip(url: &str) -> Option<HtmlAudioElement> {
    match HtmlAudioElement::new_with_src(url) {
        Ok(clip) => Some(clip),
        Err(e) => {
            log::warn!("Could not load sound {url}: {e:?}");
            None
        }
    }
}

/// Start playback; a refused or failed play is ignored
fn play(clip: Option<&HtmlAudioElement>) {
    let Some(clip) = clip else {
        return;
    };
    if let Ok(promise) = clip.play() {
        // Await the promise so a rejection is consumed instead of reported
        wasm_bindgen_futures::spawn_local(async move {
            let _ = JsFuture::from(promise).await;
        });
    }
}
