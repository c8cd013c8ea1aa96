use anyhow::Result;
use human_panic::setup_panic;

use file_mint::prelude::*;

fn main() -> Result<()> {
    setup_panic!();

    let matches = get_matches()?;
    init_logger(get_verbosity(&matches), &get_log_file(&matches)?)?;

    let mut settings = Settings::load_or_default(&get_config_path(&matches)?)?;
    if let Some(output_root) = get_output_override(&matches) {
        settings.output_root = output_root;
    }

    run_session(&settings, matches.get_flag("dry"))?;

    check_for_stdout_stream();

    Ok(())
}
