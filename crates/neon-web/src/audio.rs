use crate::constants::ANALYSER_FFT_SIZE;
use neon_core::LoudnessSource;
use web_sys as web;

/// The playback + analysis graph for the picked audio file. Node handles
/// are kept alive here for as long as the session runs.
pub struct AudioChain {
    pub ctx: web::AudioContext,
    pub element: web::HtmlAudioElement,
    pub source: web::MediaElementAudioSourceNode,
    pub analyser: web::AnalyserNode,
}

/// Build the chain for an object URL: looping media element -> analyser ->
/// destination. Must run inside a user gesture so the context starts
/// unsuspended.
pub fn build_chain(object_url: &str) -> Result<AudioChain, ()> {
    let ctx = match web::AudioContext::new() {
        Ok(c) => c,
        Err(e) => {
            log::error!("AudioContext error: {e:?}");
            return Err(());
        }
    };
    let element = match web::HtmlAudioElement::new_with_src(object_url) {
        Ok(el) => el,
        Err(e) => {
            log::error!("audio element error: {e:?}");
            return Err(());
        }
    };
    element.set_loop(true);
    _ = element.play();

    let source = match ctx.create_media_element_source(&element) {
        Ok(s) => s,
        Err(e) => {
            log::error!("media element source error: {e:?}");
            return Err(());
        }
    };
    let analyser = match ctx.create_analyser() {
        Ok(a) => a,
        Err(e) => {
            log::error!("AnalyserNode error: {e:?}");
            return Err(());
        }
    };
    analyser.set_fft_size(ANALYSER_FFT_SIZE);
    _ = source.connect_with_audio_node(&analyser);
    _ = analyser.connect_with_audio_node(&ctx.destination());

    Ok(AudioChain {
        ctx,
        element,
        source,
        analyser,
    })
}

/// Mean byte-frequency amplitude per frame, straight off the analyser.
pub struct AnalyserLoudness {
    analyser: web::AnalyserNode,
    buf: Vec<u8>,
}

impl AnalyserLoudness {
    pub fn new(analyser: web::AnalyserNode) -> Self {
        let bins = analyser.frequency_bin_count() as usize;
        Self {
            analyser,
            buf: vec![0; bins],
        }
    }
}

impl LoudnessSource for AnalyserLoudness {
    fn sample(&mut self) -> Option<f32> {
        let bins = self.analyser.frequency_bin_count() as usize;
        if bins == 0 {
            return None;
        }
        if self.buf.len() != bins {
            self.buf.resize(bins, 0);
        }
        self.analyser.get_byte_frequency_data(&mut self.buf);
        let sum: u32 = self.buf.iter().map(|&v| u32::from(v)).sum();
        Some(sum as f32 / bins as f32)
    }
}
