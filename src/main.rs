mod app;
mod calculation;
mod cli;
mod config;
mod display;
mod error;
mod prelude;
mod router;

use app::App;
use cli::Cli;
use prelude::*;

fn main() -> AppResult {
    let app = App::new(Cli::new());

    let report = router::route(&app)?;

    app.display.print(&report)?;

    Ok(())
}
