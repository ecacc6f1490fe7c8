use crate::cli::EvalArgs;
use crate::error::Result;
use calc_core::engine::{CalculatorEngine, CalculatorState, Phase};
use calc_core::input::{keys_from_word, Key};
use calc_core::settings::EngineSettings;
use serde::Serialize;
use tracing::{debug, info, warn};

#[derive(Serialize)]
struct EvalOutput<'a> {
    display: String,
    phase: Phase,
    state: &'a CalculatorState,
}

pub fn run(args: &EvalArgs, settings: EngineSettings) -> Result<()> {
    let keys = collect_keys(&args.keys);
    info!("Evaluating {} key presses.", keys.len());

    let mut calc = CalculatorEngine::with_settings(settings);
    for key in keys {
        calc.press(key);
        debug!(key = %key.token(), display = %calc.display_value(), "pressed");
        if args.steps {
            println!("{:>10}  {}", key.token(), calc.display_value());
        }
    }

    if args.json {
        println!("{}", render_json(&calc)?);
    } else if !args.steps {
        println!("{}", calc.display_value());
    }
    Ok(())
}

/// Split arguments on whitespace and turn each word into keys.
/// Words outside the vocabulary are skipped with a warning.
pub fn collect_keys(args: &[String]) -> Vec<Key> {
    let mut keys = Vec::new();
    for word in args.iter().flat_map(|arg| arg.split_whitespace()) {
        match keys_from_word(word) {
            Ok(word_keys) => keys.extend(word_keys),
            Err(e) => warn!("Skipping input: {}", e),
        }
    }
    keys
}

fn render_json(calc: &CalculatorEngine) -> Result<String> {
    let output = EvalOutput {
        display: calc.display_value(),
        phase: calc.state().phase(),
        state: calc.state(),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}
