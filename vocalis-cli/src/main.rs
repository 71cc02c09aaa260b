//! Vocalis command line entry point.
//!
//! Stands in for the capture collaborator: decodes a WAV file, hands
//! the engine a fully materialised buffer, and renders the outcome.
//!
//! ```text
//! Usage: vocalis <recording.wav> [--json] [--output <file.json>]
//!                [--niches <a,b,c>] [--experience <level>]
//!                [--feedback <file.json>]
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use tracing::{debug, info};
use vocalis_core::{
    report, AnalysisOutcome, ExperienceLevel, FeedbackRecord, SampleBuffer, VoiceAnalyzer,
};

#[derive(Debug)]
struct Args {
    input: PathBuf,
    json: bool,
    output: Option<PathBuf>,
    niches: Vec<String>,
    experience: ExperienceLevel,
    feedback: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vocalis=info".parse().unwrap()),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("vocalis: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = parse_args()?;

    let buffer = read_wav_first_channel(&args.input)
        .with_context(|| format!("failed to decode {}", args.input.display()))?;
    info!(
        samples = buffer.len(),
        sample_rate = buffer.sample_rate,
        duration_secs = buffer.duration_secs,
        "recording loaded"
    );

    let analyzer = VoiceAnalyzer::default();
    let outcome = analyzer
        .analyze(&buffer)
        .context("recording does not satisfy the analyzer input contract")?;

    if args.json || args.output.is_some() {
        let json = serde_json::to_string_pretty(&outcome)?;
        match &args.output {
            Some(path) => {
                std::fs::write(path, &json)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!(path = %path.display(), "analysis report written");
            }
            None => println!("{json}"),
        }
    }
    if !args.json {
        print_outcome(&outcome);
    }

    if !args.niches.is_empty() {
        report_feedback(&args, &outcome)?;
    }

    Ok(())
}

fn parse_args() -> anyhow::Result<Args> {
    let mut input: Option<PathBuf> = None;
    let mut json = false;
    let mut output: Option<PathBuf> = None;
    let mut niches: Vec<String> = Vec::new();
    let mut experience = ExperienceLevel::NotSpecified;
    let mut feedback: Option<PathBuf> = None;

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--output" => {
                let Some(v) = it.next() else {
                    bail!("missing value for --output");
                };
                output = Some(PathBuf::from(v));
            }
            "--niches" => {
                let Some(v) = it.next() else {
                    bail!("missing value for --niches");
                };
                niches = v
                    .split(',')
                    .map(|n| n.trim().to_string())
                    .filter(|n| !n.is_empty())
                    .collect();
            }
            "--experience" => {
                let Some(v) = it.next() else {
                    bail!("missing value for --experience");
                };
                experience = match v.as_str() {
                    "beginner" => ExperienceLevel::Beginner,
                    "intermediate" => ExperienceLevel::Intermediate,
                    "advanced" => ExperienceLevel::Advanced,
                    other => bail!("unknown experience level: {other}"),
                };
            }
            "--feedback" => {
                let Some(v) = it.next() else {
                    bail!("missing value for --feedback");
                };
                feedback = Some(PathBuf::from(v));
            }
            "--help" | "-h" => {
                println!(
                    "Usage: vocalis <recording.wav> [--json] [--output <file.json>] \\
  [--niches <a,b,c>] [--experience <beginner|intermediate|advanced>] \\
  [--feedback <file.json>]"
                );
                std::process::exit(0);
            }
            other if other.starts_with("--") => bail!("unknown argument: {other}"),
            other => {
                if input.is_some() {
                    bail!("more than one input file given");
                }
                input = Some(PathBuf::from(other));
            }
        }
    }

    let Some(input) = input else {
        bail!("no input file given (see --help)");
    };
    Ok(Args {
        input,
        json,
        output,
        niches,
        experience,
        feedback,
    })
}

/// Decode a WAV file into a mono sample buffer.
///
/// The input contract is first-channel-only: additional channels are
/// dropped, not mixed. Duration is derived here, by the capture layer,
/// from the per-channel sample count.
fn read_wav_first_channel(path: &Path) -> anyhow::Result<SampleBuffer> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    let channels = usize::from(spec.channels.max(1));

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader.samples::<f32>().collect::<Result<Vec<_>, _>>()?,
        hound::SampleFormat::Int => {
            if spec.bits_per_sample <= 16 {
                reader
                    .samples::<i16>()
                    .map(|s| s.map(|v| v as f32 / i16::MAX as f32))
                    .collect::<Result<Vec<_>, _>>()?
            } else {
                let max = ((1_i64 << (spec.bits_per_sample - 1)) - 1) as f32;
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|v| v as f32 / max))
                    .collect::<Result<Vec<_>, _>>()?
            }
        }
    };

    let mono: Vec<f32> = interleaved.iter().copied().step_by(channels).collect();
    let duration_secs = mono.len() as f32 / spec.sample_rate as f32;
    debug!(
        channels,
        bits = spec.bits_per_sample,
        "wav decoded, first channel kept"
    );

    Ok(SampleBuffer::new(mono, spec.sample_rate, duration_secs))
}

fn print_outcome(outcome: &AnalysisOutcome) {
    match outcome {
        AnalysisOutcome::Rejected { reason } => {
            println!("Recording rejected: {reason:?}");
            println!("{}", rejection_hint(*reason));
        }
        AnalysisOutcome::Classified(analysis) => {
            let profile = analysis.archetype.profile();
            println!("{} You're {}!", profile.icon, profile.name);
            println!();
            println!("{}", profile.description);
            println!();
            println!("Strengths:");
            for strength in profile.strengths {
                println!("  - {strength}");
            }
            println!("Best for:");
            for niche in profile.best_for {
                println!("  - {niche}");
            }
            println!();
            println!("Tip: {}", profile.tip);
            println!();
            println!(
                "Measured: pitch {:.0} Hz, centroid {:.0} Hz, {:.0} wpm, \
                 speech ratio {:.2}, dynamic range {:.1}",
                analysis.features.pitch_hz,
                analysis.features.spectral_centroid_hz,
                analysis.features.pace.wpm,
                analysis.features.pace.speech_ratio,
                analysis.features.dynamic_range,
            );
        }
    }
}

fn rejection_hint(reason: vocalis_core::RejectionReason) -> &'static str {
    use vocalis_core::RejectionReason::*;
    match reason {
        Silence => "No audio was detected. Check that your microphone is connected.",
        TooQuiet => "The recording is too quiet. Move closer to the microphone.",
        TooShort => "The recording is too short. Read the full script, at least 5 seconds.",
        NoVariation => "The input looks stuck at one level. Check your input device.",
        NotHumanVoice => "No voice was detected in the recording. Try again in a quieter room.",
    }
}

/// Build and emit the telemetry feedback record for this run.
fn report_feedback(args: &Args, outcome: &AnalysisOutcome) -> anyhow::Result<()> {
    let AnalysisOutcome::Classified(analysis) = outcome else {
        info!("recording was rejected; no feedback record emitted");
        return Ok(());
    };

    let niche_archetype = report::archetype_for_niches(&args.niches);
    info!(
        predicted = %analysis.archetype,
        from_niches = %niche_archetype,
        "self-reported niches compared against prediction"
    );

    let record = FeedbackRecord {
        predicted_type: analysis.archetype,
        actual_niches: args.niches.clone(),
        experience_level: args.experience,
        features: analysis.features.clone(),
        recorded_at: chrono::Utc::now(),
    };

    let json = serde_json::to_string_pretty(&record)?;
    match &args.feedback {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "feedback record written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
