use anyhow::Result;
use soulsync::client::player::PlaybackHandle;

/// Stands in for an audio element: prints what would be playing.
#[derive(Debug, Default)]
pub struct ConsolePlayback {
    source: Option<String>,
}

impl PlaybackHandle for ConsolePlayback {
    fn load(&mut self, url: &str) {
        self.source = Some(url.to_owned());
    }

    fn play(&mut self) -> Result<()> {
        if let Some(source) = &self.source {
            println!("▶ Now playing: {}", source);
        }
        Ok(())
    }

    fn pause(&mut self) {
        println!("⏸ Paused");
    }
}
