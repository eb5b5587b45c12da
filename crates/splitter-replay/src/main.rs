// splitter-replay: runs a recorded pointer/touch script against a headless
// splitter layout and prints what the host would have been told.

mod script;
mod settings;
mod stage;
mod tests;

use std::path::PathBuf;
use std::process::ExitCode;

use stage::Stage;

// ──────────────────────────────────────────────
// Entry point
// ──────────────────────────────────────────────

fn main() -> ExitCode {
    env_logger::init();

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("usage: splitter-replay <script.json>");
        return ExitCode::from(2);
    };

    let settings = settings::load_settings();
    log::debug!("settings: {:?}", settings);

    let script = match script::load_script(&path) {
        Ok(script) => script,
        Err(e) => {
            log::error!("Failed to load script: {}", e);
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut stage = Stage::new(&script, &settings);
    stage.run(&script.steps);
    log::debug!(
        "final secondary size {} with {} listeners registered",
        stage.layout().secondary_size(),
        stage.registry().len()
    );
    print!("{}", stage.report(settings.print_view));
    ExitCode::SUCCESS
}
