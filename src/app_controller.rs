use anyhow::{anyhow, Context, Result};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::asr;
use crate::chunking::ChunkBuilder;
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::renderer::SubtitleRenderer;
use crate::srt;
use crate::transcript;

// @module: Application controller for subtitle generation

/// Main application controller wiring ingestion, segmentation and
/// rendering together
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    /// Generate subtitle outputs from a recognition JSON file.
    ///
    /// Writes three siblings into `output_dir`: the styled script
    /// (`.ass`), the whole-word plain subtitles (`.srt`) and the editable
    /// transcript document (`.transcript.txt`).
    pub async fn run(
        &self,
        input_file: PathBuf,
        output_dir: PathBuf,
        force_overwrite: bool,
    ) -> Result<()> {
        if !FileManager::file_exists(&input_file) {
            return Err(AppError::InputNotFound(input_file).into());
        }
        FileManager::ensure_dir(&output_dir)?;

        let ass_path = FileManager::generate_output_path(&input_file, &output_dir, "ass");
        if ass_path.exists() && !force_overwrite {
            warn!(
                "Skipping {:?}, output already exists (use -f to force overwrite)",
                input_file
            );
            return Ok(());
        }

        info!("🔍 Reading recognition results: {:?}", input_file);
        let content = FileManager::read_to_string(&input_file)?;
        let results = asr::parse_recognition_json(&content)
            .context(format!("Failed to parse recognition file: {:?}", input_file))?;
        let words = asr::flatten_words(&results)?;

        if words.is_empty() {
            warn!("No timed words found in {:?}, nothing to generate", input_file);
            return Ok(());
        }
        debug!("Flattened {} words from {} batches", words.len(), results.len());

        let chunks = ChunkBuilder::with_options(self.config.chunk_options()).build(&words);
        info!("Segmented {} words into {} phrases", words.len(), chunks.len());

        self.warn_on_unknown_style();
        let renderer = SubtitleRenderer::with_options(self.config.render_options());
        let script = renderer.render_script(&chunks);
        FileManager::write_string(&ass_path, &script)?;
        info!("Success: {:?}", ass_path);

        let srt_path = FileManager::generate_output_path(&input_file, &output_dir, "srt");
        let srt_content = srt::write_srt(&srt::entries_from_words(&words));
        FileManager::write_string(&srt_path, &srt_content)?;
        info!("Success: {:?}", srt_path);

        let transcript_path =
            FileManager::generate_output_path(&input_file, &output_dir, "transcript.txt");
        FileManager::write_string(&transcript_path, &transcript::write_transcript(&chunks))?;
        info!("Success: {:?}", transcript_path);

        Ok(())
    }

    /// Process every recognition JSON file in a directory
    pub async fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        if !FileManager::dir_exists(&input_dir) {
            return Err(AppError::InputNotFound(input_dir).into());
        }

        info!("Processing directory: {:?}", input_dir);
        let files = FileManager::find_files(&input_dir, "json")?;
        if files.is_empty() {
            warn!("No recognition JSON files found in {:?}", input_dir);
            return Ok(());
        }

        let mut processed_count = 0;
        for file in files {
            let output_dir = file.parent().unwrap_or(Path::new(".")).to_path_buf();
            if let Err(e) = self.run(file.clone(), output_dir, force_overwrite).await {
                error!("Error processing {:?}: {}", file, e);
            } else {
                processed_count += 1;
            }
        }

        info!("Finished processing {} files", processed_count);
        Ok(())
    }

    /// Regenerate a styled script from an edited transcript document.
    ///
    /// The round-trip path: phrase-level timing from the document headers,
    /// per-word timing re-derived evenly. A document with no phrase blocks
    /// fails instead of producing an empty script.
    pub async fn resync(
        &self,
        transcript_file: PathBuf,
        output_dir: PathBuf,
        force_overwrite: bool,
    ) -> Result<()> {
        if !FileManager::file_exists(&transcript_file) {
            return Err(AppError::InputNotFound(transcript_file).into());
        }
        FileManager::ensure_dir(&output_dir)?;

        let ass_path = FileManager::generate_output_path(&transcript_file, &output_dir, "ass");
        if ass_path.exists() && !force_overwrite {
            warn!(
                "Skipping {:?}, output already exists (use -f to force overwrite)",
                transcript_file
            );
            return Ok(());
        }

        info!("🔍 Parsing edited transcript: {:?}", transcript_file);
        let content = FileManager::read_to_string(&transcript_file)?;
        let chunks = transcript::parse_transcript(&content)
            .map_err(AppError::Transcript)
            .context(format!("Failed to parse transcript: {:?}", transcript_file))?;
        info!("Recovered {} phrases", chunks.len());

        self.warn_on_unknown_style();
        let renderer = SubtitleRenderer::with_options(self.config.render_options());
        FileManager::write_string(&ass_path, &renderer.render_script(&chunks))?;
        info!("Success: {:?}", ass_path);

        Ok(())
    }

    /// Convert a line-based SRT file into a styled script using the
    /// configured preset.
    ///
    /// Blocks with malformed time fields are skipped and reported as
    /// warnings, never dropped silently.
    pub async fn convert(
        &self,
        srt_file: PathBuf,
        output_dir: PathBuf,
        force_overwrite: bool,
    ) -> Result<()> {
        if !FileManager::file_exists(&srt_file) {
            return Err(AppError::InputNotFound(srt_file).into());
        }
        FileManager::ensure_dir(&output_dir)?;

        let ass_path = FileManager::generate_output_path(&srt_file, &output_dir, "ass");
        if ass_path.exists() && !force_overwrite {
            warn!(
                "Skipping {:?}, output already exists (use -f to force overwrite)",
                srt_file
            );
            return Ok(());
        }

        let content = FileManager::read_to_string(&srt_file)?;
        let blocks = srt::parse_srt_blocks(&content);
        if blocks.is_empty() {
            return Err(anyhow!("No subtitle blocks found in {:?}", srt_file));
        }

        self.warn_on_unknown_style();
        let renderer = SubtitleRenderer::with_options(self.config.render_options());
        let (script, skipped) = renderer.convert_blocks(&blocks);

        for skip in &skipped {
            warn!(
                "Skipped block {} (line {}): {}",
                skip.index, skip.line, skip.reason
            );
        }
        if skipped.len() == blocks.len() {
            return Err(anyhow!(
                "All {} blocks in {:?} were malformed, refusing to write an empty script",
                blocks.len(),
                srt_file
            ));
        }

        FileManager::write_string(&ass_path, &script)?;
        info!(
            "Success: {:?} ({} events, {} skipped)",
            ass_path,
            blocks.len() - skipped.len(),
            skipped.len()
        );

        Ok(())
    }

    fn warn_on_unknown_style(&self) {
        if !self.config.has_known_style() {
            warn!(
                "Unknown style preset '{}', falling back to 'modern'",
                self.config.style
            );
        }
    }
}
