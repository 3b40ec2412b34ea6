mod renderer;

pub use renderer::TranscriptRenderer;
