//! Celocean - procedural ocean waves under a toon-shaded light
//!
//! Subcommands:
//! - `height` - sample the wave field at one point
//! - `trace` - drive the waves from a WAV file, print a floating object's height per frame
//! - `preview` - render a top-down cel-shaded PNG of the surface

use std::process;

use clap::Parser;
use glam::DVec3;

use celocean::audio::{AudioEnvelope, FrequencyAnalyser, WavStream};
use celocean::cli::{Cli, CliError, Command, HeightArgs, PreviewArgs, Shading, TraceArgs};
use celocean::frame::{FrameClock, FrameContext};
use celocean::ocean::{OceanSystem, WaveFieldParams};
use celocean::params::{AnalyserConfig, GridSpec, OceanSettings};
use celocean::rendering::save_preview;
use celocean::shading::{
    orbiting_light, CelShadingModel, DayNightCycle, LightEnvironment, MaterialParams,
    PhongShading, ShadingModel,
};

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = cli.ocean_settings();
    match &cli.command {
        Command::Height(args) => height(&settings, args),
        Command::Trace(args) => trace(&settings, args),
        Command::Preview(args) => preview(&settings, args),
    }
}

fn height(settings: &OceanSettings, args: &HeightArgs) -> Result<(), CliError> {
    let ocean = OceanSystem::new(settings, &GridSpec::point())?;
    let params = WaveFieldParams::new(args.amplitude, settings.wavelength_m, args.time)?;
    println!("{:.6}", ocean.field().height(args.x, args.z, &params));
    Ok(())
}

fn trace(settings: &OceanSettings, args: &TraceArgs) -> Result<(), CliError> {
    let config = args.trace_config();
    let stream = WavStream::open(&args.wav)?;
    let ocean = OceanSystem::new(settings, &GridSpec::point())?;
    let analyser = FrequencyAnalyser::new(AnalyserConfig::default())?;
    let mut envelope = AudioEnvelope::new(args.envelope_mapping())?.with_source(analyser);
    envelope.start();

    let fps = config.fps.max(1);
    let total = stream.frame_count(fps);
    let frames = config.max_frames.map_or(total, |n| n.min(total));
    let mut clock = FrameClock::new();
    let [x, z] = config.position;

    println!("{:>6} {:>9} {:>10} {:>10}", "frame", "time_s", "amplitude", "height");
    for i in 0..frames {
        if let Some(analyser) = envelope.source_mut() {
            analyser.push_samples(stream.frame_window(i, fps));
        }
        let frame = envelope.apply(clock.tick(i as f64 * 1000.0 / fps as f64));
        let pose = ocean.float_pose(x, z, config.draft_m, &frame);
        println!(
            "{:>6} {:>9.3} {:>10.5} {:>10.5}",
            i,
            frame.time_s,
            frame.audio_amplitude.unwrap_or(0.0),
            pose.position.y
        );
    }
    Ok(())
}

fn preview(settings: &OceanSettings, args: &PreviewArgs) -> Result<(), CliError> {
    let config = args.preview_config();
    config.validate()?;
    let frame = FrameContext::checked(args.time)?.with_audio(args.amplitude);
    let ocean = OceanSystem::new(settings, &GridSpec::point())?;

    let light_dir = if args.orbit {
        orbiting_light(args.time)
    } else {
        DVec3::ONE
    };
    let env = if args.day_night {
        DayNightCycle::default().environment(light_dir, args.time)
    } else {
        LightEnvironment::directional(light_dir)
    };

    let model: &dyn ShadingModel = match args.shading {
        Shading::Cel => &CelShadingModel,
        Shading::Phong => &PhongShading,
    };
    save_preview(
        &ocean,
        &frame,
        model,
        &MaterialParams::ocean(),
        &env,
        &config,
    )?;
    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(e.exit_code());
    }
}
