//! Bounce Frames entry point
//!
//! Samples one random sequence and prints it as a filmstrip, or as JSON.
//!
//! Usage: `bounce-frames [SEED] [SETTINGS_JSON] [--json]`

use std::process::ExitCode;

use bounce_frames::{SamplerSettings, Sequence, generate_random_sequence};

const DEFAULT_SEED: u64 = 0;

struct Args {
    seed: u64,
    settings_path: Option<String>,
    json: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        seed: DEFAULT_SEED,
        settings_path: None,
        json: false,
    };
    let mut positional = 0;

    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            args.json = true;
            continue;
        }
        match positional {
            0 => {
                args.seed = arg
                    .parse()
                    .map_err(|e| format!("invalid seed '{}': {}", arg, e))?;
            }
            1 => args.settings_path = Some(arg),
            _ => return Err(format!("unexpected argument '{}'", arg)),
        }
        positional += 1;
    }
    Ok(args)
}

fn load_settings(path: Option<&str>) -> Result<SamplerSettings, String> {
    let Some(path) = path else {
        log::info!("Using default sampler settings");
        return Ok(SamplerSettings::default());
    };
    let json =
        std::fs::read_to_string(path).map_err(|e| format!("failed to read {}: {}", path, e))?;
    let settings = SamplerSettings::from_json(&json).map_err(|e| e.to_string())?;
    log::info!("Loaded sampler settings from {}", path);
    Ok(settings)
}

/// Frames side by side, separated by a column of `|`
fn print_filmstrip(sequence: &Sequence) {
    let Some(first) = sequence.frames().first() else {
        println!("(empty sequence)");
        return;
    };

    let strips: Vec<Vec<String>> = sequence.frames().iter().map(|f| f.rows()).collect();
    for row in 0..first.height() {
        let line: Vec<&str> = strips.iter().map(|rows| rows[row].as_str()).collect();
        println!("{}", line.join("|"));
    }

    println!();
    for (i, position) in sequence.positions().iter().enumerate() {
        println!("frame {:>3}: ({:.4}, {:.4})", i, position.x, position.y);
    }
}

fn main() -> ExitCode {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let run = || -> Result<(), String> {
        let args = parse_args()?;
        let settings = load_settings(args.settings_path.as_deref())?;
        let sequence = generate_random_sequence(&settings, args.seed).map_err(|e| e.to_string())?;

        if args.json {
            let json = serde_json::to_string(&sequence).map_err(|e| e.to_string())?;
            println!("{}", json);
        } else {
            print_filmstrip(&sequence);
        }
        Ok(())
    };

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
