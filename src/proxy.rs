//! Proxy: a video that is only fetched the first time it is played.

use std::io::Write;

use tracing::debug;

use crate::error::Result;

/// The expensive object. Loading happens in the constructor.
#[derive(Debug)]
pub struct RealVideo {
    id: String,
}

impl RealVideo {
    pub fn load(id: impl Into<String>, out: &mut dyn Write) -> Result<Self> {
        let id = id.into();
        writeln!(out, "Loading video {id} from the server...")?;
        Ok(Self { id })
    }

    pub fn play(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Playing video {}.", self.id)?;
        Ok(())
    }
}

/// Stands in for a [`RealVideo`] until someone presses play.
#[derive(Debug)]
pub struct VideoProxy {
    id: String,
    video: Option<RealVideo>,
}

impl VideoProxy {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), video: None }
    }

    pub fn is_loaded(&self) -> bool {
        self.video.is_some()
    }

    /// Loads on the first call, then plays from the cached video.
    pub fn play(&mut self, out: &mut dyn Write) -> Result<()> {
        let video = match self.video {
            Some(ref video) => video,
            None => {
                writeln!(out, "Initializing proxy for video {}.", self.id)?;
                debug!(id = %self.id, "loading real video");
                &*self.video.insert(RealVideo::load(self.id.clone(), out)?)
            }
        };
        video.play(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_once_then_plays_from_cache() {
        let mut proxy = VideoProxy::new("video123");
        assert!(!proxy.is_loaded());

        let mut out = Vec::new();
        proxy.play(&mut out).unwrap();
        proxy.play(&mut out).unwrap();

        assert!(proxy.is_loaded());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Initializing proxy for video video123.\n\
             Loading video video123 from the server...\n\
             Playing video video123.\n\
             Playing video video123.\n",
        );
    }
}
